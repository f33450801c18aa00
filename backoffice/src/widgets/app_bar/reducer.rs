use iced::Task;

use super::event::{AppBarEffect, AppBarEvent, AppBarIntent};
use super::state::AppBarState;
use crate::layout::ViewportClass;

/// Reduce an app bar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut AppBarState,
    intent: AppBarIntent,
) -> Task<AppBarEvent> {
    match intent {
        AppBarIntent::OpenMobileDrawer => open_drawer(ViewportClass::Mobile),
        AppBarIntent::OpenDesktopDrawer => open_drawer(ViewportClass::Desktop),
        AppBarIntent::PageChanged(page) => {
            if state.set_page(page) {
                log::debug!("app bar showing {}", page.title());
            }
            Task::none()
        },
    }
}

fn open_drawer(viewport: ViewportClass) -> Task<AppBarEvent> {
    Task::done(AppBarEvent::Effect(AppBarEffect::OpenDrawer(viewport)))
}

#[cfg(test)]
mod tests {
    use super::super::state::AppBarState;
    use super::reduce;
    use crate::pages::Page;
    use crate::widgets::app_bar::AppBarIntent;

    #[test]
    fn given_page_change_when_reduced_then_subtitle_follows_the_page() {
        let mut state = AppBarState::new(String::from("Backoffice"));
        assert_eq!(state.page(), None);

        let _task = reduce(&mut state, AppBarIntent::PageChanged(Page::Customers));

        assert_eq!(state.page(), Some(Page::Customers));
        assert_eq!(state.title(), "Backoffice");
    }

    #[test]
    fn given_same_page_when_recorded_twice_then_second_call_reports_no_change() {
        let mut state = AppBarState::new(String::from("Backoffice"));

        assert!(state.set_page(Page::Companies));
        assert!(!state.set_page(Page::Companies));
        assert!(state.set_page(Page::Employees));
    }
}
