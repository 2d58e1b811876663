//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT)
//!     → loader.rs (parse port, fall back to 8000)
//!     → EchoConfig (immutable)
//!     → moved into HttpServer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; the port is the only environment input

pub mod loader;
pub mod schema;

pub use loader::{parse_port, PORT_ENV};
pub use schema::{EchoConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig, DEFAULT_PORT};
