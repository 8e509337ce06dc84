//! GraphQL schema and resolvers for users.
//!
//! ## Schema
//!
//! - **Queries**: `getUser(id: Int): User`, `getUsers: [User!]!`
//! - **Mutations**: `createUser(input: UserInput!): User`
//!
//! ```graphql
//! query { getUser(id: 1) { id name email } }
//! mutation { createUser(input: { name: "Ann", email: "ann@x.com" }) { id } }
//! ```

mod schema;
mod types;

pub use schema::{build_schema, MutationRoot, QueryRoot, UsersSchema};
pub use types::*;
