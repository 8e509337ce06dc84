//! Database layer - connection pool and the users store
//!
//! # Design Principles
//!
//! - One pool, created at start-up and shared by every handler
//! - Parameterised statements only, never string-built SQL
//! - Rely on DB constraints; no check-then-insert

pub mod pool;
pub mod users;

#[cfg(test)]
pub mod memory;

pub use pool::{create_pool, Database};
pub use users::{DbError, UserRepo, UserStore};
