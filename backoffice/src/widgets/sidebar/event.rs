use crate::router::RouteName;

/// Intent events handled by the side bar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Chevron button in the drawer header.
    Close,
    Select(RouteName),
}

/// Effect events produced by the side bar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    CloseDrawer,
    Navigate(RouteName),
}

/// Side bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the side bar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
