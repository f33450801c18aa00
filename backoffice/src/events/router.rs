use iced::Task;

use crate::app::{App, AppEvent};
use crate::pages::PageEvent;
use crate::router::{RouteName, RouterEvent};
use crate::widgets::app_bar::{AppBarEvent, AppBarIntent};

pub(crate) fn handle(app: &mut App, event: RouterEvent) -> Task<AppEvent> {
    let changed = match event {
        RouterEvent::Navigate { path } => app.router.navigate(&path),
        RouterEvent::Back => app.router.back(),
    };

    if !changed {
        return Task::none();
    }

    log::info!(
        "showing {:?} at {}",
        app.router.current_page(),
        app.router.current_path()
    );
    Task::done(AppEvent::AppBar(AppBarEvent::Intent(
        AppBarIntent::PageChanged(app.router.current_page()),
    )))
}

/// Page buttons only ever ask the router to move.
pub(crate) fn handle_page(event: PageEvent) -> Task<AppEvent> {
    let event = match event {
        PageEvent::GoHome => RouterEvent::Navigate {
            path: RouteName::Home.path().to_string(),
        },
        PageEvent::GoBack => RouterEvent::Back,
    };

    Task::done(AppEvent::Router(event))
}
