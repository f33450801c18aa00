pub(crate) mod icon_button;
pub(crate) mod nav_item;
