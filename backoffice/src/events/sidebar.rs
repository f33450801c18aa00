use iced::Task;

use crate::app::{App, AppEvent};
use crate::navigation::{NavigationEvent, NavigationIntent};
use crate::router::RouterEvent;
use crate::widgets::sidebar::{SidebarCtx, SidebarEffect, SidebarEvent};

pub(crate) fn handle(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(intent) => {
            let ctx = SidebarCtx {
                viewport: app.layout.viewport_class(),
            };
            app.widgets.sidebar.reduce(intent, &ctx).map(AppEvent::Sidebar)
        },
        SidebarEvent::Effect(effect) => handle_effect(app, effect),
    }
}

fn handle_effect(app: &App, effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::CloseDrawer if !app.navigation.is_open() => Task::none(),
        SidebarEffect::CloseDrawer => Task::done(AppEvent::Navigation(
            NavigationEvent::Intent(NavigationIntent::Close),
        )),
        SidebarEffect::Navigate(route) => {
            Task::done(AppEvent::Router(RouterEvent::Navigate {
                path: route.path().to_string(),
            }))
        },
    }
}
