//! Domain models for the users resource
//!
//! Rows come out of the database as [`User`]; request bodies arrive as
//! [`NewUser`]; responses go out through [`UserView`] and [`Envelope`].

pub mod pagination;
pub mod user;

pub use pagination::{Envelope, Meta, PageParams, PageRequest, PaginationMeta};
pub use user::{NewUser, User, UserView};
