//! Request Echo Server
//!
//! A diagnostic endpoint built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ────────────────────┼─▶ net::listener ─▶ http::server ─▶ handler   │
//!                         │                                     │        │
//!                         │                     echo::collector ▼        │
//!                         │             Header / Query / FormParams      │
//!                         │                                     │        │
//!     Client Response     │                     echo::negotiate ▼        │
//!     ◀───────────────────┼──────────────────── echo::render (HTML|JSON) │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! The listen port comes from `PORT` (default 8000); logging honors `RUST_LOG`.

use request_echo::config::EchoConfig;
use request_echo::http::HttpServer;
use request_echo::lifecycle::Shutdown;
use request_echo::{net, observability};

#[tokio::main]
async fn main() {
    let defaults = EchoConfig::default();
    if let Err(e) = observability::init_logging(&defaults.observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "request-echo failed");
        // Printed regardless of the log filter.
        println!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("request-echo v{} starting", env!("CARGO_PKG_VERSION"));

    let config = EchoConfig::from_env();

    tracing::info!(
        port = config.listener.port,
        request_timeout_secs = config.timeouts.request_secs,
        max_form_bytes = config.limits.max_form_bytes,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;
    tracing::info!(address = %config.listener.bind_address(), "Listener ready");
    println!("Listening on: http://{}", config.listener.bind_address());

    // Held for the process lifetime; Ctrl+C is the only trigger here.
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
