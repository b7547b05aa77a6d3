//! Core types and client-side logic for the `SafeBite` dashboard
//!
//! Everything the SPA and its serving shell share: backend wire types, the
//! page registry, the table filter/pagination engine, chart geometry, CSV
//! export, configuration, and errors. Nothing here touches the DOM or the
//! network.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod page;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{DateRange, FilterCriteria, Filterable, FilteredPage};
pub use page::{PageKey, REGISTRY};

/// Initialize the logging system for native binaries
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.level.clone().into());

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| Error::Configuration {
        message: format!("failed to install tracing subscriber: {e}"),
    })
}
