//! `SafeBite` web shell
//!
//! Serves the dashboard single page application and proxies its `/api`
//! calls to the backend REST service.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]

pub mod api_client;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main functions
pub use server::build_app;
pub use state::AppState;
