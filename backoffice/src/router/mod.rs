//! Client-side view routing: path -> exactly one page.

mod errors;
mod pattern;
mod table;

pub(crate) use pattern::normalize_path;
pub(crate) use table::{RouteName, RouteTable, RouteTarget};

use crate::pages::Page;

/// Redirect hops followed before giving up on a chain.
const MAX_REDIRECTS: usize = 8;

/// Router events routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RouterEvent {
    Navigate { path: String },
    Back,
}

/// Result of resolving a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    /// Path after following redirects.
    pub(crate) path: String,
    pub(crate) page: Page,
}

/// Router owning the route table and the location history.
#[derive(Debug)]
pub(crate) struct Router {
    table: RouteTable,
    history: Vec<String>,
    current: Resolution,
}

impl Router {
    /// Create a router positioned at `start_path`.
    pub(crate) fn new(table: RouteTable, start_path: &str) -> Self {
        log::debug!(
            "route table: {}",
            table
                .entries()
                .iter()
                .map(|entry| entry.pattern().as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let current = resolve(&table, start_path);
        log::debug!("router started at {} -> {:?}", current.path, current.page);

        Self {
            history: vec![current.path.clone()],
            table,
            current,
        }
    }

    /// Navigate to `path`. Returns `true` if the rendered location changed.
    pub(crate) fn navigate(&mut self, path: &str) -> bool {
        let resolution = resolve(&self.table, path);
        if resolution == self.current {
            return false;
        }

        log::debug!("navigate {path} -> {} ({:?})", resolution.path, resolution.page);
        self.history.push(resolution.path.clone());
        self.current = resolution;
        true
    }

    /// Return to the previous location. Returns `false` at the start of
    /// history.
    pub(crate) fn back(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }

        self.history.pop();
        let Some(previous) = self.history.last() else {
            return false;
        };
        self.current = resolve(&self.table, previous);
        log::debug!("back to {}", self.current.path);
        true
    }

    pub(crate) fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub(crate) fn current_page(&self) -> Page {
        self.current.page
    }

    pub(crate) fn current_path(&self) -> &str {
        &self.current.path
    }

    /// Named route the current location belongs to, if any.
    pub(crate) fn active_route(&self) -> Option<RouteName> {
        RouteName::NAVIGABLE
            .into_iter()
            .find(|route| route.page() == Some(self.current.page))
    }
}

/// Resolve `path` against `table`, following redirects.
pub(crate) fn resolve(table: &RouteTable, path: &str) -> Resolution {
    let mut path = normalize_path(path);

    for _ in 0..=MAX_REDIRECTS {
        match table.match_path(&path) {
            RouteTarget::Page(page) => {
                return Resolution { path, page: *page };
            },
            RouteTarget::Redirect(to) => {
                path = normalize_path(to);
            },
        }
    }

    log::warn!("redirect chain exceeded {MAX_REDIRECTS} hops at {path}");
    Resolution {
        path,
        page: Page::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::{Resolution, RouteName, RouteTable, Router, resolve};
    use crate::pages::Page;
    use crate::router::pattern::RoutePattern;
    use crate::router::table::{RouteEntry, RouteTarget};

    fn shell_table() -> RouteTable {
        RouteTable::shell().expect("shell table should be valid")
    }

    #[test]
    fn given_root_path_when_resolved_then_service_requests_page_is_rendered() {
        let table = shell_table();

        let home = resolve(&table, "/");
        let direct = resolve(&table, RouteName::ServiceRequests.path());

        assert_eq!(home, direct);
        assert_eq!(home.page, Page::ServiceRequests);
        assert_eq!(home.path, "/service-requests");
    }

    #[test]
    fn given_unknown_path_when_resolved_then_exactly_not_found_is_rendered() {
        let table = shell_table();

        let resolution = resolve(&table, "/unknown-xyz");

        assert_eq!(
            resolution,
            Resolution {
                path: String::from("/unknown-xyz"),
                page: Page::NotFound,
            }
        );
    }

    #[test]
    fn given_mixed_case_path_when_resolved_then_matching_page_is_rendered() {
        let table = shell_table();

        assert_eq!(resolve(&table, "/Customers").page, Page::Customers);
        assert_eq!(resolve(&table, "/EMPLOYEES?tab=1").page, Page::Employees);
    }

    #[test]
    fn given_redirect_cycle_when_resolved_then_not_found_is_rendered() {
        let table = RouteTable::new(vec![
            RouteEntry::new(
                RoutePattern::parse("/a").expect("pattern should parse"),
                RouteTarget::Redirect(String::from("/b")),
            ),
            RouteEntry::new(
                RoutePattern::parse("/b").expect("pattern should parse"),
                RouteTarget::Redirect(String::from("/a")),
            ),
            RouteEntry::new(RoutePattern::any(), RouteTarget::Page(Page::Customers)),
        ])
        .expect("table should be valid");

        assert_eq!(resolve(&table, "/a").page, Page::NotFound);
    }

    #[test]
    fn given_router_at_home_when_started_then_location_is_service_requests() {
        let router = Router::new(shell_table(), "/");

        assert_eq!(router.current_page(), Page::ServiceRequests);
        assert_eq!(router.current_path(), "/service-requests");
        assert_eq!(router.active_route(), Some(RouteName::ServiceRequests));
        assert!(!router.can_go_back());
    }

    #[test]
    fn given_navigation_when_back_requested_then_previous_location_is_restored()
    {
        let mut router = Router::new(shell_table(), "/customers");

        assert!(router.navigate("/companies"));
        assert!(router.navigate("/nowhere"));
        assert_eq!(router.current_page(), Page::NotFound);
        assert_eq!(router.active_route(), None);

        assert!(router.back());
        assert_eq!(router.current_page(), Page::Companies);
        assert!(router.back());
        assert_eq!(router.current_page(), Page::Customers);
        assert!(!router.back());
        assert_eq!(router.current_page(), Page::Customers);
    }

    #[test]
    fn given_same_location_when_navigating_then_history_is_not_extended() {
        let mut router = Router::new(shell_table(), "/service-requests");

        assert!(!router.navigate("/"));
        assert!(!router.navigate("/service-requests/"));
        assert!(!router.can_go_back());
    }
}
