//! Session-wide drawer state shared by the app bar and the side bar.
//!
//! The store is owned by the app and handed to views by reference, so each
//! test can work on its own instance.

mod event;
mod reducer;
mod state;

use iced::Task;

pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
use state::NavigationState;

use crate::layout::ViewportClass;

/// Read-only snapshot of the drawer flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavigationViewModel {
    pub(crate) is_open_desktop: bool,
    pub(crate) is_open_mobile: bool,
    pub(crate) viewport: ViewportClass,
}

/// Navigation state store.
#[derive(Debug, Default)]
pub(crate) struct NavigationStore {
    state: NavigationState,
}

impl NavigationStore {
    /// Create a store with explicit initial flags and the desktop context
    /// active.
    pub(crate) fn new(open_desktop: bool, open_mobile: bool) -> Self {
        Self {
            state: NavigationState::new(
                open_desktop,
                open_mobile,
                ViewportClass::Desktop,
            ),
        }
    }

    /// Reduce an intent into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    pub(crate) fn vm(&self) -> NavigationViewModel {
        NavigationViewModel {
            is_open_desktop: self.state.is_open_desktop(),
            is_open_mobile: self.state.is_open_mobile(),
            viewport: self.state.viewport(),
        }
    }

    pub(crate) fn is_open_desktop(&self) -> bool {
        self.state.is_open_desktop()
    }

    pub(crate) fn is_open_mobile(&self) -> bool {
        self.state.is_open_mobile()
    }

    /// Whether the drawer of the active viewport class is open.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }
}
