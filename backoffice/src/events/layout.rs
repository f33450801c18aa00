use iced::Task;

use crate::app::{App, AppEvent};
use crate::layout::{LayoutEvent, ResizeOutcome};
use crate::navigation::NavigationIntent;

pub(crate) fn handle(app: &mut App, event: LayoutEvent) -> Task<AppEvent> {
    match event {
        LayoutEvent::Resized(size) => match app.layout.resize(size) {
            ResizeOutcome::Ignored => Task::none(),
            ResizeOutcome::Applied {
                class_changed: false,
                ..
            } => Task::none(),
            // The app bar sensor is keyed on the class and re-measures itself.
            ResizeOutcome::Applied {
                class,
                class_changed: true,
            } => app
                .navigation
                .reduce(NavigationIntent::SetViewport(class))
                .map(AppEvent::Navigation),
        },
        LayoutEvent::AppBarMeasured(size) => {
            if app.layout.record_app_bar_size(size) {
                log::debug!(
                    "app bar height {} px, content min height {} px",
                    app.layout.app_bar_height(),
                    app.layout.content_min_height()
                );
            }
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::handle;
    use crate::app::App;
    use crate::layout::{LayoutEvent, ViewportClass};

    const NARROW: Size = Size::new(200.0, 640.0);

    #[test]
    fn given_unmounted_shell_when_resized_across_breakpoint_then_viewport_is_not_synced()
     {
        let (mut app, _) = App::new();
        assert!(!app.layout.is_mounted());
        let navigation_before = app.navigation.vm();
        let viewport_before = app.layout.viewport();

        let task = handle(&mut app, LayoutEvent::Resized(NARROW));

        assert_eq!(task.units(), 0);
        assert_eq!(app.navigation.vm(), navigation_before);
        assert_eq!(app.layout.viewport(), viewport_before);
    }

    #[test]
    fn given_mounted_shell_when_resized_across_breakpoint_then_drawer_context_follows()
     {
        let (mut app, _) = App::new();
        assert!(app.layout.mount());
        assert_eq!(app.layout.viewport_class(), ViewportClass::Desktop);

        let _ = handle(&mut app, LayoutEvent::Resized(NARROW));

        assert_eq!(app.layout.viewport_class(), ViewportClass::Mobile);
        assert_eq!(app.navigation.vm().viewport, ViewportClass::Mobile);
    }

    #[test]
    fn given_mounted_shell_when_app_bar_measured_then_content_height_shrinks() {
        let (mut app, _) = App::new();
        assert!(app.layout.mount());
        let viewport = app.layout.viewport();

        let _ = handle(
            &mut app,
            LayoutEvent::AppBarMeasured(Some(Size::new(viewport.width, 64.0))),
        );

        assert_eq!(app.layout.app_bar_height(), 64.0);
        assert_eq!(app.layout.content_min_height(), viewport.height - 64.0);
    }
}
