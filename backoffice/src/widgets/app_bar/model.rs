use crate::layout::ViewportClass;
use crate::navigation::NavigationViewModel;

/// Read-only view model for the app bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AppBarViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) subtitle: Option<&'static str>,
    pub(crate) toolbar_height: f32,
    pub(crate) show_mobile_toggle: bool,
    pub(crate) show_desktop_toggle: bool,
}

/// The mobile menu button is shown on narrow viewports only.
pub(crate) fn mobile_toggle_visible(navigation: &NavigationViewModel) -> bool {
    navigation.viewport == ViewportClass::Mobile
}

/// The desktop menu button is shown on wide viewports while the drawer is
/// closed.
pub(crate) fn desktop_toggle_visible(navigation: &NavigationViewModel) -> bool {
    navigation.viewport == ViewportClass::Desktop && !navigation.is_open_desktop
}
