use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;
use crate::layout::ViewportClass;
use crate::router::RouteName;

/// Read-only context for side bar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarCtx {
    pub(crate) viewport: ViewportClass,
}

/// Reduce a side bar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    let effects = match intent {
        SidebarIntent::Close => vec![SidebarEffect::CloseDrawer],
        SidebarIntent::Select(route) => select_effects(state, route, ctx),
    };

    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(SidebarEvent::Effect(effect))),
    )
}

fn select_effects(
    state: &SidebarState,
    route: RouteName,
    ctx: &SidebarCtx,
) -> Vec<SidebarEffect> {
    if !state.contains(route) {
        log::warn!("ignoring selection of {route:?}: not in the drawer");
        return Vec::new();
    }

    match ctx.viewport {
        // The temporary drawer covers the page it just opened.
        ViewportClass::Mobile => {
            vec![SidebarEffect::Navigate(route), SidebarEffect::CloseDrawer]
        },
        ViewportClass::Desktop => vec![SidebarEffect::Navigate(route)],
    }
}

#[cfg(test)]
mod tests {
    use super::{SidebarCtx, select_effects};
    use crate::layout::ViewportClass;
    use crate::router::RouteName;
    use crate::widgets::sidebar::SidebarEffect;
    use crate::widgets::sidebar::state::SidebarState;

    const DESKTOP: SidebarCtx = SidebarCtx {
        viewport: ViewportClass::Desktop,
    };
    const MOBILE: SidebarCtx = SidebarCtx {
        viewport: ViewportClass::Mobile,
    };

    #[test]
    fn given_desktop_viewport_when_item_selected_then_only_navigation_is_requested()
     {
        let state = SidebarState::default();

        let effects = select_effects(&state, RouteName::Customers, &DESKTOP);

        assert_eq!(effects, vec![SidebarEffect::Navigate(RouteName::Customers)]);
    }

    #[test]
    fn given_mobile_viewport_when_item_selected_then_drawer_is_closed_after_navigation()
     {
        let state = SidebarState::default();

        let effects = select_effects(&state, RouteName::Employees, &MOBILE);

        assert_eq!(
            effects,
            vec![
                SidebarEffect::Navigate(RouteName::Employees),
                SidebarEffect::CloseDrawer,
            ]
        );
    }

    #[test]
    fn given_home_route_when_selected_then_selection_is_ignored() {
        let state = SidebarState::default();

        assert!(select_effects(&state, RouteName::Home, &MOBILE).is_empty());
    }

    #[test]
    fn given_new_state_when_built_then_every_page_route_is_listed_in_order() {
        let state = SidebarState::default();

        let routes: Vec<_> = state.items().iter().map(|item| item.route).collect();

        assert_eq!(routes, RouteName::NAVIGABLE.to_vec());
    }
}
