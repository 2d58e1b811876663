//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler / server / main
//!     → tracing events with structured fields
//!     → TraceLayer spans per request (tower-http)
//!     → logging.rs subscriber → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
