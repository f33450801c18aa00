use iced::widget::sensor;
use iced::{Element, Size, Task, window};

/// Toolbar height on viewports at or above the breakpoint.
pub(crate) const APP_BAR_DESKTOP_HEIGHT: f32 = 64.0;
/// Toolbar height on narrow viewports.
pub(crate) const APP_BAR_MOBILE_HEIGHT: f32 = 56.0;

const SPACING_UNIT: f32 = 8.0;
/// Width of the closed desktop drawer (icons only).
pub(crate) const DRAWER_MINI_WIDTH: f32 = SPACING_UNIT * 8.0 + 1.0;
/// Width of the icon rail kept on narrow viewports.
pub(crate) const DRAWER_RAIL_WIDTH: f32 = SPACING_UNIT * 7.0 + 1.0;

/// Viewport class selected by the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// Classify a viewport width against the breakpoint.
    pub(crate) fn from_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    /// Toolbar height the app bar is styled with for this class.
    pub(crate) fn toolbar_height(self) -> f32 {
        match self {
            Self::Desktop => APP_BAR_DESKTOP_HEIGHT,
            Self::Mobile => APP_BAR_MOBILE_HEIGHT,
        }
    }
}

/// Layout events delivered by the window and by measurement tasks.
#[derive(Debug, Clone)]
pub(crate) enum LayoutEvent {
    Resized(Size),
    /// Laid-out size of the app bar; `None` once it leaves the view.
    AppBarMeasured(Option<Size>),
}

/// Outcome of feeding a resize into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResizeOutcome {
    /// No listener is registered; nothing was recorded.
    Ignored,
    /// The viewport was recorded.
    Applied {
        class: ViewportClass,
        class_changed: bool,
    },
}

/// Registration of the window resize source.
///
/// The app subscription only carries window events while this is
/// registered, and resize handlers are no-ops once it is removed.
#[derive(Debug, Default)]
pub(crate) struct ResizeListener {
    registered: bool,
}

impl ResizeListener {
    fn register(&mut self) -> bool {
        let was_registered = self.registered;
        self.registered = true;
        !was_registered
    }

    fn deregister(&mut self) -> bool {
        let was_registered = self.registered;
        self.registered = false;
        was_registered
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.registered
    }
}

/// Shell layout controller.
///
/// Stores the viewport and the measured app bar height, and derives the
/// content area and drawer geometry from them. The app bar height cannot be
/// computed up front because it depends on breakpoint styling, so it is
/// measured after layout (see [`measure_app_bar`]) and fed back through
/// [`LayoutEvent::AppBarMeasured`].
#[derive(Debug)]
pub(crate) struct ShellLayout {
    viewport: Size,
    viewport_class: ViewportClass,
    app_bar_height: f32,
    breakpoint: f32,
    drawer_width: f32,
    listener: ResizeListener,
}

impl ShellLayout {
    pub(crate) fn new(viewport: Size, breakpoint: f32, drawer_width: f32) -> Self {
        Self {
            viewport,
            viewport_class: ViewportClass::from_width(viewport.width, breakpoint),
            app_bar_height: 0.0,
            breakpoint,
            drawer_width,
            listener: ResizeListener::default(),
        }
    }

    /// Register the resize listener. Returns `true` on first registration.
    pub(crate) fn mount(&mut self) -> bool {
        let registered = self.listener.register();
        if registered {
            log::debug!("resize listener registered");
        }
        registered
    }

    /// Remove the resize listener. Returns `true` if it was registered.
    pub(crate) fn unmount(&mut self) -> bool {
        let removed = self.listener.deregister();
        if removed {
            log::debug!("resize listener removed");
        }
        removed
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.listener.is_registered()
    }

    pub(crate) fn app_bar_measure_key(&self) -> AppBarMeasureKey {
        AppBarMeasureKey {
            viewport_class: self.viewport_class,
            mounted: self.is_mounted(),
        }
    }

    /// Record a new viewport size.
    pub(crate) fn resize(&mut self, size: Size) -> ResizeOutcome {
        if !self.is_mounted() {
            log::debug!("resize ignored: shell is not mounted");
            return ResizeOutcome::Ignored;
        }

        self.viewport = size;
        let class = ViewportClass::from_width(size.width, self.breakpoint);
        let class_changed = class != self.viewport_class;
        self.viewport_class = class;
        if class_changed {
            log::debug!("viewport class changed to {class:?}");
        }

        ResizeOutcome::Applied {
            class,
            class_changed,
        }
    }

    /// Store the measured app bar size. A missing element measures zero.
    /// Returns `true` if the stored height changed.
    pub(crate) fn record_app_bar_size(&mut self, size: Option<Size>) -> bool {
        if !self.is_mounted() {
            return false;
        }

        let height = match size {
            Some(size) => size.height.max(0.0),
            None => {
                log::debug!("app bar not laid out yet, measuring zero");
                0.0
            },
        };
        let changed = (height - self.app_bar_height).abs() > f32::EPSILON;
        self.app_bar_height = height;
        changed
    }

    pub(crate) fn viewport(&self) -> Size {
        self.viewport
    }

    pub(crate) fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    pub(crate) fn app_bar_height(&self) -> f32 {
        self.app_bar_height
    }

    /// Minimum height of the main content container.
    pub(crate) fn content_min_height(&self) -> f32 {
        (self.viewport.height - self.app_bar_height).max(0.0)
    }

    /// Width of the open drawer.
    pub(crate) fn open_drawer_width(&self) -> f32 {
        self.drawer_width
    }

    /// Width the drawer occupies in the page flow for the current class.
    /// The open mobile drawer is an overlay, so the rail keeps its place.
    pub(crate) fn drawer_flow_width(&self, is_open: bool) -> f32 {
        match (self.viewport_class, is_open) {
            (ViewportClass::Desktop, true) => self.drawer_width,
            (ViewportClass::Desktop, false) => DRAWER_MINI_WIDTH,
            (ViewportClass::Mobile, _) => DRAWER_RAIL_WIDTH,
        }
    }

    /// Left offset of the app bar: it shifts right of an open desktop drawer.
    pub(crate) fn app_bar_offset(&self, desktop_drawer_open: bool) -> f32 {
        match self.viewport_class {
            ViewportClass::Desktop if desktop_drawer_open => self.drawer_width,
            _ => 0.0,
        }
    }
}

/// Inputs whose change invalidates the last app bar measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppBarMeasureKey {
    pub(crate) viewport_class: ViewportClass,
    pub(crate) mounted: bool,
}

/// Wrap the app bar so its laid-out size is reported after every layout
/// that changes it.
///
/// The sensor fires again whenever `key` changes, so a breakpoint crossing or
/// a (re)mount always produces a fresh measurement.
pub(crate) fn measure_app_bar<'a, Message>(
    app_bar: impl Into<Element<'a, Message>>,
    key: AppBarMeasureKey,
    on_measure: impl Fn(LayoutEvent) -> Message + Clone + 'a,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let on_show = on_measure.clone();
    let on_resize = on_measure.clone();

    sensor(app_bar)
        .key(key)
        .on_show(move |size| on_show(LayoutEvent::AppBarMeasured(Some(size))))
        .on_resize(move |size| {
            on_resize(LayoutEvent::AppBarMeasured(Some(size)))
        })
        .on_hide(on_measure(LayoutEvent::AppBarMeasured(None)))
        .into()
}

/// Query the real size of the window; the `Opened` event fires before the
/// window subscription exists.
pub(crate) fn query_viewport() -> Task<LayoutEvent> {
    window::latest()
        .and_then(window::size)
        .map(LayoutEvent::Resized)
}
