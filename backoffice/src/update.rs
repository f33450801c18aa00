use iced::Task;

use super::{App, AppEvent};
use crate::events;

/// Thin dispatch: route each event to its owning handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => events::lifecycle::mount(app),
        AppEvent::Navigation(event) => events::navigation::handle(app, event),
        AppEvent::AppBar(event) => events::app_bar::handle(app, event),
        AppEvent::Sidebar(event) => events::sidebar::handle(app, event),
        AppEvent::Layout(event) => events::layout::handle(app, event),
        AppEvent::Router(event) => events::router::handle(app, event),
        AppEvent::Page(event) => events::router::handle_page(event),
        AppEvent::Window(event) => events::lifecycle::handle_window(app, event),
    }
}
