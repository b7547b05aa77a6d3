//! Page registry for the dashboard SPA
//!
//! The closed set of pages, their routes, and the navigation metadata the
//! sidebar is generated from. Dispatch goes through this table instead of a
//! hardcoded key-by-key chain.

use std::fmt;
use std::str::FromStr;

/// The closed set of dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    /// Landing dashboard with stat cards and the usage chart
    Dashboard,
    /// User management table
    Users,
    /// Feedback triage table
    Feedbacks,
    /// Device CRUD table
    DeviceManagement,
    /// Aggregate sensor analytics
    AnalyticsSummary,
    /// Per-record sensor readings (sub-view of the summary)
    AnalyticsDetail,
    /// Detailed spoilage report builder
    ReportGenerator,
    /// ML spoilage predictions
    MlPredictions,
    /// Admin audit log
    AdminLog,
    /// User activity log
    UserActivityLog,
}

impl PageKey {
    /// Every page, in registry order
    pub const ALL: [Self; 10] = [
        Self::Dashboard,
        Self::Users,
        Self::Feedbacks,
        Self::DeviceManagement,
        Self::AnalyticsSummary,
        Self::AnalyticsDetail,
        Self::ReportGenerator,
        Self::MlPredictions,
        Self::AdminLog,
        Self::UserActivityLog,
    ];

    /// Stable string key, kebab-case
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Feedbacks => "feedbacks",
            Self::DeviceManagement => "device-management",
            Self::AnalyticsSummary => "analytics-summary",
            Self::AnalyticsDetail => "analytics-detail",
            Self::ReportGenerator => "report-generator",
            Self::MlPredictions => "ml-predictions",
            Self::AdminLog => "admin-log",
            Self::UserActivityLog => "user-activity-log",
        }
    }

    /// Route path served by the SPA router
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Users => "/users",
            Self::Feedbacks => "/feedbacks",
            Self::DeviceManagement => "/devices",
            Self::AnalyticsSummary => "/analytics",
            Self::AnalyticsDetail => "/analytics/detail",
            Self::ReportGenerator => "/reports",
            Self::MlPredictions => "/predictions",
            Self::AdminLog => "/admin-log",
            Self::UserActivityLog => "/activity-log",
        }
    }

    /// Resolve a location path to a page, `None` for unknown paths.
    ///
    /// Trailing slashes are tolerated; unknown paths are the caller's
    /// not-found case, nothing here panics.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Self::ALL.into_iter().find(|page| page.path() == trimmed)
    }

    /// Human-readable page title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Feedbacks => "Feedbacks",
            Self::DeviceManagement => "Device Management",
            Self::AnalyticsSummary => "Sensor Analytics",
            Self::AnalyticsDetail => "Sensor Readings",
            Self::ReportGenerator => "Spoilage Report",
            Self::MlPredictions => "ML Predictions",
            Self::AdminLog => "Admin Log",
            Self::UserActivityLog => "User Activity",
        }
    }

    /// The page whose nav link lights up when this page is active.
    ///
    /// Detail sub-views resolve to their summary parent; every other page
    /// resolves to itself.
    #[must_use]
    pub const fn nav_parent(self) -> Self {
        match self {
            Self::AnalyticsDetail => Self::AnalyticsSummary,
            other => other,
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| crate::Error::NotFound {
                resource: format!("page '{s}'"),
            })
    }
}

/// Sidebar section a page is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    /// Top-level overview
    Overview,
    /// Fleet and people management
    Management,
    /// Analytics and reporting
    Analytics,
    /// Audit trails
    Activity,
}

impl NavGroup {
    /// Sidebar section order
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Management,
        Self::Analytics,
        Self::Activity,
    ];

    /// Section heading
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Management => "Management",
            Self::Analytics => "Analytics",
            Self::Activity => "Activity",
        }
    }
}

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    /// The page this entry navigates to
    pub key: PageKey,
    /// Sidebar link label
    pub label: &'static str,
    /// Sidebar section
    pub group: NavGroup,
}

/// Sidebar registry. Sub-views (analytics detail) are reachable from their
/// parent page, not from the sidebar, so they do not appear here.
pub const REGISTRY: [PageDescriptor; 9] = [
    PageDescriptor {
        key: PageKey::Dashboard,
        label: "Dashboard",
        group: NavGroup::Overview,
    },
    PageDescriptor {
        key: PageKey::Users,
        label: "Users",
        group: NavGroup::Management,
    },
    PageDescriptor {
        key: PageKey::Feedbacks,
        label: "Feedbacks",
        group: NavGroup::Management,
    },
    PageDescriptor {
        key: PageKey::DeviceManagement,
        label: "Devices",
        group: NavGroup::Management,
    },
    PageDescriptor {
        key: PageKey::AnalyticsSummary,
        label: "Sensor Analytics",
        group: NavGroup::Analytics,
    },
    PageDescriptor {
        key: PageKey::ReportGenerator,
        label: "Spoilage Report",
        group: NavGroup::Analytics,
    },
    PageDescriptor {
        key: PageKey::MlPredictions,
        label: "ML Predictions",
        group: NavGroup::Analytics,
    },
    PageDescriptor {
        key: PageKey::AdminLog,
        label: "Admin Log",
        group: NavGroup::Activity,
    },
    PageDescriptor {
        key: PageKey::UserActivityLog,
        label: "User Activity",
        group: NavGroup::Activity,
    },
];

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_round_trip() {
        for page in PageKey::ALL {
            assert_eq!(page.as_str().parse::<PageKey>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let err = "settings".parse::<PageKey>().unwrap_err();
        assert!(format!("{err}").contains("page 'settings'"));
    }

    #[test]
    fn test_path_round_trip() {
        for page in PageKey::ALL {
            assert_eq!(PageKey::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash() {
        assert_eq!(PageKey::from_path("/users/"), Some(PageKey::Users));
        assert_eq!(PageKey::from_path("/"), Some(PageKey::Dashboard));
    }

    #[test]
    fn test_from_path_unknown_is_none() {
        assert_eq!(PageKey::from_path("/nope"), None);
        assert_eq!(PageKey::from_path(""), None);
    }

    #[test]
    fn test_detail_resolves_to_summary_parent() {
        assert_eq!(
            PageKey::AnalyticsDetail.nav_parent(),
            PageKey::AnalyticsSummary
        );
    }

    #[test]
    fn test_non_detail_pages_are_their_own_parent() {
        for page in PageKey::ALL {
            if page != PageKey::AnalyticsDetail {
                assert_eq!(page.nav_parent(), page);
            }
        }
    }

    #[test]
    fn test_registry_covers_every_nav_page() {
        for page in PageKey::ALL {
            let listed = REGISTRY.iter().any(|d| d.key == page);
            if page == PageKey::AnalyticsDetail {
                assert!(!listed, "sub-views stay out of the sidebar");
            } else {
                assert!(listed, "{page} missing from registry");
            }
        }
    }

    #[test]
    fn test_registry_has_no_duplicate_paths() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.key.path(), b.key.path());
            }
        }
    }

    #[test]
    fn test_every_group_has_an_entry() {
        for group in NavGroup::ALL {
            assert!(REGISTRY.iter().any(|d| d.group == group));
        }
    }
}
