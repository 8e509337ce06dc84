//! HTTP server layer
//!
//! Axum server with:
//! - `/api/v1/users` REST resource
//! - `/graphql` endpoint over the same store
//! - Request tracing and CORS
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
