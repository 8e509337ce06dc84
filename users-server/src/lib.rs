//! users-server: REST and GraphQL access to the `users` table
//!
//! Exposes a paginated list/create REST resource at `/api/v1/users` and a
//! GraphQL schema with `getUser`, `getUsers` and `createUser`, both backed by
//! the same PostgreSQL pool.

pub mod config;
pub mod db;
pub mod graphql;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{Database, DbError, UserRepo, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
