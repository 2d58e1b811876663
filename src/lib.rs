//! Request echo server library.
//!
//! Reports the headers, query parameters and form parameters of every
//! request back to the caller as HTML or JSON.

pub mod config;
pub mod echo;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::EchoConfig;
pub use echo::{Attribute, EchoResponse, OutputFormat};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
