use crate::icons;
use crate::layout::ViewportClass;
use crate::navigation::NavigationViewModel;
use crate::router::RouteName;

/// One entry of the drawer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarItem {
    pub(crate) route: RouteName,
    pub(crate) label: &'static str,
    pub(crate) icon: &'static [u8],
}

impl SidebarItem {
    /// Item for a navigable route; `None` for routes without a page.
    pub(crate) fn for_route(route: RouteName) -> Option<Self> {
        let page = route.page()?;
        let icon = match route {
            RouteName::Home => return None,
            RouteName::ServiceRequests => icons::SERVICE_REQUESTS,
            RouteName::PhoneConsultations => icons::PHONE_CONSULTATIONS,
            RouteName::RegistrationRequests => icons::REGISTRATION_REQUESTS,
            RouteName::Customers => icons::CUSTOMERS,
            RouteName::Companies => icons::COMPANIES,
            RouteName::Employees => icons::EMPLOYEES,
        };

        Some(Self {
            route,
            label: page.title(),
            icon,
        })
    }
}

/// How the drawer is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DrawerVariant {
    /// Open desktop drawer: icons and labels, pushes the content.
    Expanded,
    /// Closed drawer: icons only.
    Mini,
    /// Open mobile drawer: overlay above a scrim.
    Temporary,
}

impl DrawerVariant {
    /// Variant for the current drawer flags. Only the active context's
    /// flag is read.
    pub(crate) fn resolve(navigation: &NavigationViewModel) -> Self {
        match navigation.viewport {
            ViewportClass::Desktop if navigation.is_open_desktop => {
                Self::Expanded
            },
            ViewportClass::Mobile if navigation.is_open_mobile => Self::Temporary,
            ViewportClass::Desktop | ViewportClass::Mobile => Self::Mini,
        }
    }

    /// Variant drawn in the page flow. The temporary drawer floats above
    /// the content and leaves the icon rail in place.
    pub(crate) fn in_flow(self) -> Self {
        match self {
            Self::Temporary => Self::Mini,
            variant => variant,
        }
    }

    /// Labels are shown next to icons.
    pub(crate) fn shows_labels(self) -> bool {
        !matches!(self, Self::Mini)
    }
}

/// Read-only view model for the side bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) items: &'a [SidebarItem],
    pub(crate) active_route: Option<RouteName>,
    pub(crate) variant: DrawerVariant,
}

#[cfg(test)]
mod tests {
    use super::{DrawerVariant, SidebarItem};
    use crate::layout::ViewportClass;
    use crate::navigation::NavigationViewModel;
    use crate::router::RouteName;

    fn navigation(
        viewport: ViewportClass,
        is_open_desktop: bool,
        is_open_mobile: bool,
    ) -> NavigationViewModel {
        NavigationViewModel {
            is_open_desktop,
            is_open_mobile,
            viewport,
        }
    }

    #[test]
    fn given_drawer_flags_when_resolving_variant_then_inactive_flag_is_ignored() {
        let cases = [
            (ViewportClass::Desktop, true, false, DrawerVariant::Expanded),
            (ViewportClass::Desktop, false, true, DrawerVariant::Mini),
            (ViewportClass::Mobile, true, true, DrawerVariant::Temporary),
            (ViewportClass::Mobile, true, false, DrawerVariant::Mini),
        ];

        for (viewport, desktop, mobile, expected) in cases {
            let nav = navigation(viewport, desktop, mobile);
            assert_eq!(DrawerVariant::resolve(&nav), expected, "{nav:?}");
        }
    }

    #[test]
    fn given_navigable_routes_when_building_items_then_home_is_excluded() {
        assert_eq!(SidebarItem::for_route(RouteName::Home), None);

        for route in RouteName::NAVIGABLE {
            let item =
                SidebarItem::for_route(route).expect("navigable route has an item");
            assert_eq!(item.route, route);
            assert!(!item.label.is_empty());
        }
    }

    #[test]
    fn given_temporary_drawer_when_placed_in_flow_then_rail_remains() {
        assert_eq!(DrawerVariant::Temporary.in_flow(), DrawerVariant::Mini);
        assert_eq!(DrawerVariant::Expanded.in_flow(), DrawerVariant::Expanded);
        assert_eq!(DrawerVariant::Mini.in_flow(), DrawerVariant::Mini);
    }

    #[test]
    fn given_mini_variant_when_rendering_then_labels_are_hidden() {
        assert!(!DrawerVariant::Mini.shows_labels());
        assert!(DrawerVariant::Expanded.shows_labels());
        assert!(DrawerVariant::Temporary.shows_labels());
    }
}
