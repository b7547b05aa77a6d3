//! Application-wide state
//!
//! Only cross-page facts live here. Each page owns its fetched rows and
//! filter criteria in signals created on mount and dropped on unmount, so
//! repeated visits start from a clean slate.

use leptos::*;

/// Viewing role, selecting the admin or user variant of shared pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    /// Full fleet visibility
    #[default]
    Admin,
    /// Own-data visibility
    User,
}

impl Role {
    /// Stable string key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Cross-page application state
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Current viewing role
    pub role: RwSignal<Role>,
}

/// Install the application state into the reactive context
pub fn provide_app_state() {
    provide_context(AppState {
        role: create_rw_signal(Role::Admin),
    });
}

/// Fetch the application state from the reactive context
#[must_use]
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_keys() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::default(), Role::Admin);
    }
}
