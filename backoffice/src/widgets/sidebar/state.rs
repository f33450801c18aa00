use super::model::SidebarItem;
use crate::router::RouteName;

/// Side bar state: the drawer list built from the route table.
#[derive(Debug)]
pub(crate) struct SidebarState {
    items: Vec<SidebarItem>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            items: RouteName::NAVIGABLE
                .into_iter()
                .filter_map(SidebarItem::for_route)
                .collect(),
        }
    }
}

impl SidebarState {
    pub(crate) fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    pub(crate) fn contains(&self, route: RouteName) -> bool {
        self.items.iter().any(|item| item.route == route)
    }
}
