use super::errors::RouterError;
use super::pattern::RoutePattern;
use crate::pages::Page;

/// Logical route names known to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RouteName {
    Home,
    ServiceRequests,
    PhoneConsultations,
    RegistrationRequests,
    Customers,
    Companies,
    Employees,
}

impl RouteName {
    /// Routes listed in the navigation drawer, in display order.
    pub(crate) const NAVIGABLE: [RouteName; 6] = [
        RouteName::ServiceRequests,
        RouteName::PhoneConsultations,
        RouteName::RegistrationRequests,
        RouteName::Customers,
        RouteName::Companies,
        RouteName::Employees,
    ];

    pub(crate) fn path(self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::ServiceRequests => "/service-requests",
            RouteName::PhoneConsultations => "/phone-consultations",
            RouteName::RegistrationRequests => "/registration-requests",
            RouteName::Customers => "/customers",
            RouteName::Companies => "/companies",
            RouteName::Employees => "/employees",
        }
    }

    /// Page rendered for this route; `None` for routes that only redirect.
    pub(crate) fn page(self) -> Option<Page> {
        match self {
            RouteName::Home => None,
            RouteName::ServiceRequests => Some(Page::ServiceRequests),
            RouteName::PhoneConsultations => Some(Page::PhoneConsultations),
            RouteName::RegistrationRequests => {
                Some(Page::RegistrationRequests)
            },
            RouteName::Customers => Some(Page::Customers),
            RouteName::Companies => Some(Page::Companies),
            RouteName::Employees => Some(Page::Employees),
        }
    }
}

/// What a matched entry renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteTarget {
    Page(Page),
    Redirect(String),
}

/// One `(pattern, target)` pair of the table.
#[derive(Debug, Clone)]
pub(crate) struct RouteEntry {
    pattern: RoutePattern,
    target: RouteTarget,
}

impl RouteEntry {
    pub(crate) fn new(pattern: RoutePattern, target: RouteTarget) -> Self {
        Self { pattern, target }
    }

    pub(crate) fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub(crate) fn target(&self) -> &RouteTarget {
        &self.target
    }
}

/// Ordered route table.
///
/// Entries are tried in order and the first match wins, so a broad pattern
/// placed early shadows everything after it. The last entry is always a
/// catch-all, which makes matching total.
#[derive(Debug, Clone)]
pub(crate) struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub(crate) fn new(entries: Vec<RouteEntry>) -> Result<Self, RouterError> {
        match entries.last() {
            Some(last) if last.pattern().is_catch_all() => Ok(Self { entries }),
            _ => Err(RouterError::MissingCatchAll),
        }
    }

    /// The shell's table: home redirects to service requests, every page
    /// route renders its page, anything else renders not found.
    pub(crate) fn shell() -> Result<Self, RouterError> {
        let mut entries = vec![RouteEntry::new(
            RoutePattern::parse(RouteName::Home.path())?,
            RouteTarget::Redirect(RouteName::ServiceRequests.path().to_string()),
        )];

        for route in RouteName::NAVIGABLE {
            if let Some(page) = route.page() {
                entries.push(RouteEntry::new(
                    RoutePattern::parse(route.path())?,
                    RouteTarget::Page(page),
                ));
            }
        }

        entries.push(RouteEntry::new(
            RoutePattern::any(),
            RouteTarget::Page(Page::NotFound),
        ));

        Self::new(entries)
    }

    /// Table rendering not found for every path.
    pub(crate) fn fallback() -> Self {
        Self {
            entries: vec![RouteEntry::new(
                RoutePattern::any(),
                RouteTarget::Page(Page::NotFound),
            )],
        }
    }

    /// Target of the first entry matching `path`.
    pub(crate) fn match_path(&self, path: &str) -> &RouteTarget {
        self.entries
            .iter()
            .find(|entry| entry.pattern().matches(path))
            .map(RouteEntry::target)
            .unwrap_or_else(|| self.catch_all())
    }

    fn catch_all(&self) -> &RouteTarget {
        // `new` guarantees a trailing catch-all entry.
        &self.entries[self.entries.len() - 1].target
    }

    pub(crate) fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}
