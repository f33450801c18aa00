use iced::Task;

use crate::app::{App, AppEvent};
use crate::layout::ViewportClass;
use crate::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::app_bar::{AppBarEffect, AppBarEvent};

pub(crate) fn handle(app: &mut App, event: AppBarEvent) -> Task<AppEvent> {
    match event {
        AppBarEvent::Intent(intent) => {
            app.widgets.app_bar.reduce(intent).map(AppEvent::AppBar)
        },
        AppBarEvent::Effect(effect) => handle_effect(effect),
    }
}

fn handle_effect(effect: AppBarEffect) -> Task<AppEvent> {
    match effect {
        AppBarEffect::OpenDrawer(ViewportClass::Desktop) => {
            navigation_intent(NavigationIntent::OpenDesktop)
        },
        AppBarEffect::OpenDrawer(ViewportClass::Mobile) => {
            navigation_intent(NavigationIntent::OpenMobile)
        },
    }
}

fn navigation_intent(intent: NavigationIntent) -> Task<AppEvent> {
    Task::done(AppEvent::Navigation(NavigationEvent::Intent(intent)))
}
