use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::layout::{LayoutEvent, query_viewport};
use crate::navigation::NavigationIntent;
use crate::widgets::app_bar::{AppBarEvent, AppBarIntent};

/// Mount the shell: register the resize listener, sync the drawer context
/// with the viewport class and replace the default viewport with the real
/// window size.
pub(crate) fn mount(app: &mut App) -> Task<AppEvent> {
    if !app.layout.mount() {
        return Task::none();
    }

    let viewport_class = app.layout.viewport_class();
    let viewport = app.layout.viewport();
    log::info!(
        "shell mounted at {} ({}x{}, {viewport_class:?})",
        app.router.current_path(),
        viewport.width,
        viewport.height
    );

    Task::batch([
        app.navigation
            .reduce(NavigationIntent::SetViewport(viewport_class))
            .map(AppEvent::Navigation),
        Task::done(AppEvent::AppBar(AppBarEvent::Intent(
            AppBarIntent::PageChanged(app.router.current_page()),
        ))),
        query_viewport().map(AppEvent::Layout),
    ])
}

/// Tear down the resize listener. No-op when already unmounted.
pub(crate) fn unmount(app: &mut App) {
    if app.layout.unmount() {
        log::info!("shell unmounted");
    }
}

pub(crate) fn handle_window(
    app: &mut App,
    event: window::Event,
) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            Task::done(AppEvent::Layout(LayoutEvent::Resized(size)))
        },
        window::Event::CloseRequested => {
            unmount(app);
            window::latest().and_then(window::close)
        },
        _ => Task::none(),
    }
}
