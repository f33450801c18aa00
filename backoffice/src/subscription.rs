use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
///
/// Window events are the resize source of the layout controller, so they are
/// only subscribed to while the shell is mounted.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    if !app.layout.is_mounted() {
        return Subscription::none();
    }

    window::events().map(|(_id, event)| AppEvent::Window(event))
}
