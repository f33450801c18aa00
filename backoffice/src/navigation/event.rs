use crate::layout::ViewportClass;

/// Mutations accepted by the navigation store.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    OpenDesktop,
    OpenMobile,
    /// Close the drawer of the active viewport class.
    Close,
    /// Record which viewport class is active.
    SetViewport(ViewportClass),
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEffect {
    /// A drawer flag flipped; dependent layout must be refreshed.
    DrawerChanged { viewport: ViewportClass, open: bool },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation store.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
