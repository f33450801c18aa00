//! Per-area handlers called from the root update loop. Widget effects are
//! turned into intents of other areas here; widgets never talk to each other
//! directly.

pub(crate) mod app_bar;
pub(crate) mod layout;
pub(crate) mod lifecycle;
pub(crate) mod navigation;
pub(crate) mod router;
pub(crate) mod sidebar;
