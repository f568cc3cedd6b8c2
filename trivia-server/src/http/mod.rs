//! HTTP server layer
//!
//! Axum server with:
//! - CORS (any origin)
//! - Request tracing
//! - Graceful shutdown
//! - Fixed JSON error payloads

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
