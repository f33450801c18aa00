pub(crate) mod app_bar;
pub(crate) mod sidebar;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) app_bar: app_bar::AppBarWidget,
    pub(crate) sidebar: sidebar::SidebarWidget,
}
