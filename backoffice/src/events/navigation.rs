use iced::Task;

use crate::app::{App, AppEvent};
use crate::navigation::{NavigationEffect, NavigationEvent};

pub(crate) fn handle(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => {
            app.navigation.reduce(intent).map(AppEvent::Navigation)
        },
        NavigationEvent::Effect(effect) => handle_effect(app, effect),
    }
}

fn handle_effect(app: &App, effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::DrawerChanged { viewport, open } => {
            log::debug!(
                "{viewport:?} drawer {} (desktop open: {}, mobile open: {})",
                if open { "opened" } else { "closed" },
                app.navigation.is_open_desktop(),
                app.navigation.is_open_mobile()
            );
            Task::none()
        },
    }
}
