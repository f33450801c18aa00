use crate::layout::ViewportClass;
use crate::pages::Page;

/// Intent events handled by the app bar.
#[derive(Debug, Clone)]
pub(crate) enum AppBarIntent {
    /// Menu button shown on narrow viewports.
    OpenMobileDrawer,
    /// Menu button shown on wide viewports while the drawer is closed.
    OpenDesktopDrawer,
    /// The routed page changed.
    PageChanged(Page),
}

/// Effect events produced by the app bar reducer.
#[derive(Debug, Clone)]
pub(crate) enum AppBarEffect {
    OpenDrawer(ViewportClass),
}

/// App bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppBarEvent {
    /// Intent event reduced by the app bar widget.
    Intent(AppBarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(AppBarEffect),
}
