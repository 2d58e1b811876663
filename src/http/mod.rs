//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → handler.rs (split request, collect groups, negotiate, render)
//!     → Send to client
//! ```

pub mod handler;
pub mod server;

pub use server::{AppState, HttpServer};
