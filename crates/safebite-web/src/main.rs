//! Web server for the `SafeBite` dashboard
#![forbid(unsafe_code)]

use safebite_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get configuration
    let (config, config_err) = match safebite_core::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (safebite_core::Config::default(), Some(e)),
    };

    // Initialize tracing
    if let Err(e) = safebite_core::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
    }
    if let Some(e) = config_err {
        warn!("Failed to load config: {}, using defaults", e);
    }

    // Build the application with configuration
    let app = build_app(config.clone());

    // Use configuration for web server address
    let host: IpAddr = config
        .webserver
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.webserver.host, e))?;
    let addr = SocketAddr::new(host, config.webserver.port);

    info!("Starting SafeBite web server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
