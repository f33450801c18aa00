#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::config::{self, ShellConfig};
use crate::fonts::FontsConfig;
use crate::layout::{LayoutEvent, ShellLayout};
use crate::navigation::{NavigationEvent, NavigationStore};
use crate::pages::PageEvent;
use crate::router::{RouteTable, Router, RouterEvent};
use crate::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::app_bar::{AppBarEvent, AppBarWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Shared drawer state
    Navigation(NavigationEvent),
    // App bar widget
    AppBar(AppBarEvent),
    // Side bar widget
    Sidebar(SidebarEvent),
    // Layout controller
    Layout(LayoutEvent),
    // Routing
    Router(RouterEvent),
    Page(PageEvent),
    Window(window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) navigation: NavigationStore,
    pub(crate) layout: ShellLayout,
    pub(crate) router: Router,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_or_default();
        let start_path = start_path(&config);

        let table = RouteTable::shell().unwrap_or_else(|err| {
            log::error!("invalid route table, rendering not found only: {err}");
            RouteTable::fallback()
        });
        let router = Router::new(table, &start_path);

        let viewport = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let layout =
            ShellLayout::new(viewport, config.breakpoint, config.drawer_width);
        let navigation = NavigationStore::new(
            config.desktop_drawer_open,
            config.mobile_drawer_open,
        );

        let widgets = Widgets {
            app_bar: AppBarWidget::new(config.title.clone()),
            sidebar: SidebarWidget::new(),
        };

        let app = App {
            theme_manager: ThemeManager::new(&config.palette),
            fonts: FontsConfig::default(),
            navigation,
            layout,
            router,
            widgets,
        };

        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!(
            "{} - {}",
            self.widgets.app_bar.title(),
            self.router.current_page().title()
        )
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// First command-line argument, otherwise the configured start path.
fn start_path(config: &ShellConfig) -> String {
    std::env::args()
        .nth(1)
        .filter(|arg| !arg.trim().is_empty())
        .unwrap_or_else(|| config.start_path.clone())
}
