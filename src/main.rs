//! Sree Ranga Department Stores backend
//!
//! This application boots the HTTP server for the Sree Ranga e-commerce
//! backend and serves the interactive API documentation generated from the
//! OpenAPI descriptor.

mod api;
mod core;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::logging::init_logging;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Create application state
    let app_state = AppState {
        config: config.clone(),
    };

    // Create router
    let app = create_router(app_state);

    // Bind to address
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Print startup banner once the listener is bound
    print_startup_banner(&config);

    info!("Server listening on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print the two fixed startup confirmation lines
fn print_startup_banner(config: &Config) {
    println!("🚀 Sree Ranga Department Stores Backend is running!");
    println!("📚 API Documentation: {}", config.docs_url());
}
