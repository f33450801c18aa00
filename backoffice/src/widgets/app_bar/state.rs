use crate::pages::Page;

/// App bar state: application title and the routed page it is showing.
#[derive(Debug)]
pub(crate) struct AppBarState {
    title: String,
    page: Option<Page>,
}

impl AppBarState {
    pub(crate) fn new(title: String) -> Self {
        Self { title, page: None }
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn page(&self) -> Option<Page> {
        self.page
    }

    /// Record the routed page. Returns `true` if it changed.
    pub(crate) fn set_page(&mut self, page: Page) -> bool {
        self.page.replace(page) != Some(page)
    }
}
