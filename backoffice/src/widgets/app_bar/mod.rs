mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{AppBarEffect, AppBarEvent, AppBarIntent};
use iced::Task;
pub(crate) use model::AppBarViewModel;
use state::AppBarState;

use crate::layout::ViewportClass;
use crate::navigation::NavigationViewModel;

/// App bar widget owning its private state.
pub(crate) struct AppBarWidget {
    state: AppBarState,
}

impl AppBarWidget {
    pub(crate) fn new(title: String) -> Self {
        Self {
            state: AppBarState::new(title),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: AppBarIntent) -> Task<AppBarEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(
        &self,
        navigation: &NavigationViewModel,
        viewport: ViewportClass,
    ) -> AppBarViewModel<'_> {
        AppBarViewModel {
            title: self.state.title(),
            subtitle: self.state.page().map(|page| page.title()),
            toolbar_height: viewport.toolbar_height(),
            show_mobile_toggle: model::mobile_toggle_visible(navigation),
            show_desktop_toggle: model::desktop_toggle_visible(navigation),
        }
    }

    pub(crate) fn title(&self) -> &str {
        self.state.title()
    }
}
