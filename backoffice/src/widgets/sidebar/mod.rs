mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
pub(crate) use model::{DrawerVariant, SidebarViewModel};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

use crate::navigation::NavigationViewModel;
use crate::router::RouteName;

/// Side bar widget owning its private state.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the side bar with one item per page route.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model.
    pub(crate) fn vm(
        &self,
        navigation: &NavigationViewModel,
        active_route: Option<RouteName>,
    ) -> SidebarViewModel<'_> {
        SidebarViewModel {
            items: self.state.items(),
            active_route,
            variant: DrawerVariant::resolve(navigation),
        }
    }
}
