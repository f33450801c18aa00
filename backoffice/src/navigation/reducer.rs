use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;
use crate::layout::ViewportClass;

/// Reduce a navigation intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut NavigationState,
    intent: NavigationIntent,
) -> Task<NavigationEvent> {
    match intent {
        NavigationIntent::OpenDesktop => {
            let changed = state.open_desktop();
            drawer_changed(changed, ViewportClass::Desktop, true)
        },
        NavigationIntent::OpenMobile => {
            let changed = state.open_mobile();
            drawer_changed(changed, ViewportClass::Mobile, true)
        },
        NavigationIntent::Close => {
            let viewport = state.viewport();
            let changed = state.close();
            drawer_changed(changed, viewport, false)
        },
        NavigationIntent::SetViewport(viewport) => {
            state.set_viewport(viewport);
            Task::none()
        },
    }
}

fn drawer_changed(
    changed: bool,
    viewport: ViewportClass,
    open: bool,
) -> Task<NavigationEvent> {
    if !changed {
        return Task::none();
    }

    Task::done(NavigationEvent::Effect(NavigationEffect::DrawerChanged {
        viewport,
        open,
    }))
}
