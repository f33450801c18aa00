use crate::layout::ViewportClass;

/// Drawer visibility per viewport class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct NavigationState {
    open_desktop: bool,
    open_mobile: bool,
    viewport: ViewportClass,
}

impl NavigationState {
    pub(super) fn new(
        open_desktop: bool,
        open_mobile: bool,
        viewport: ViewportClass,
    ) -> Self {
        Self {
            open_desktop,
            open_mobile,
            viewport,
        }
    }

    pub(super) fn is_open_desktop(&self) -> bool {
        self.open_desktop
    }

    pub(super) fn is_open_mobile(&self) -> bool {
        self.open_mobile
    }

    pub(super) fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Flag of the active viewport class.
    pub(super) fn is_open(&self) -> bool {
        match self.viewport {
            ViewportClass::Desktop => self.open_desktop,
            ViewportClass::Mobile => self.open_mobile,
        }
    }

    /// Returns `true` if the flag changed.
    pub(super) fn open_desktop(&mut self) -> bool {
        !std::mem::replace(&mut self.open_desktop, true)
    }

    /// Returns `true` if the flag changed.
    pub(super) fn open_mobile(&mut self) -> bool {
        !std::mem::replace(&mut self.open_mobile, true)
    }

    /// Close the active context. Returns `true` if the flag changed.
    pub(super) fn close(&mut self) -> bool {
        let flag = match self.viewport {
            ViewportClass::Desktop => &mut self.open_desktop,
            ViewportClass::Mobile => &mut self.open_mobile,
        };
        std::mem::replace(flag, false)
    }

    pub(super) fn set_viewport(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(true, false, ViewportClass::Desktop)
    }
}
