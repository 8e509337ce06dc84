//! GraphQL object and input types

use async_graphql::{InputObject, SimpleObject};

use crate::models::User;

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Fields accepted by `createUser`
#[derive(Debug, Clone, InputObject)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}
