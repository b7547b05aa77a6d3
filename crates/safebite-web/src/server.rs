//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use safebite_core::Config;
use std::sync::Arc;

/// Build the complete web application with all routes and state
#[must_use]
pub fn build_app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));

    build_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app() {
        // The router wires up without panicking on a default config.
        let _ = build_app(Config::default());
    }
}
