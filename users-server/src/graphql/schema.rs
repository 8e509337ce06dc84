//! Query and mutation roots

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Error, Object, Result, Schema};

use super::types::{UserInput, UserObject};
use crate::db::{DbError, UserStore};
use crate::models::NewUser;

pub type UsersSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store every resolver reads from.
pub fn build_schema(store: Arc<dyn UserStore>) -> UsersSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn UserStore>> {
    ctx.data::<Arc<dyn UserStore>>()
}

/// Map a store failure onto a field error without leaking driver detail.
fn resolver_error(err: DbError) -> Error {
    match err {
        DbError::NotFound { resource, id } => Error::new(format!("{} {} not found", resource, id)),
        DbError::Sqlx(e) => {
            tracing::error!("GraphQL resolver database error: {}", e);
            Error::new("internal error")
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch one user by id
    async fn get_user(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<UserObject>> {
        let id = id.ok_or_else(|| Error::new("argument `id` is required"))?;
        let user = store(ctx)?.get(id).await.map_err(resolver_error)?;
        Ok(Some(user.into()))
    }

    /// Every user, ascending by id
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = store(ctx)?.list_all().await.map_err(resolver_error)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Insert a user and return it with its new id
    async fn create_user(&self, ctx: &Context<'_>, input: UserInput) -> Result<Option<UserObject>> {
        let new_user = NewUser {
            name: Some(input.name),
            email: Some(input.email),
        };
        let user = store(ctx)?.create(&new_user).await.map_err(resolver_error)?;
        tracing::info!(user_id = user.id, "User created via GraphQL");
        Ok(Some(user.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::models::User;
    use serde_json::json;

    fn schema_with(store: MemoryStore) -> UsersSchema {
        build_schema(Arc::new(store))
    }

    fn ann_and_bo() -> MemoryStore {
        MemoryStore::with_users(vec![
            User {
                id: 1,
                name: Some("Ann".into()),
                email: Some("ann@x.com".into()),
            },
            User {
                id: 2,
                name: Some("Bo".into()),
                email: Some("bo@x.com".into()),
            },
        ])
    }

    #[tokio::test]
    async fn get_users_on_empty_table_is_empty_list() {
        let schema = schema_with(MemoryStore::default());
        let response = schema.execute("{ getUsers { id name email } }").await;

        assert!(response.errors.is_empty());
        assert_eq!(response.data.into_json().unwrap(), json!({"getUsers": []}));
    }

    #[tokio::test]
    async fn get_users_lists_all_rows() {
        let schema = schema_with(ann_and_bo());
        let response = schema.execute("{ getUsers { id name } }").await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"getUsers": [{"id": 1, "name": "Ann"}, {"id": 2, "name": "Bo"}]})
        );
    }

    #[tokio::test]
    async fn get_user_returns_row() {
        let schema = schema_with(ann_and_bo());
        let response = schema.execute("{ getUser(id: 2) { id name email } }").await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"getUser": {"id": 2, "name": "Bo", "email": "bo@x.com"}})
        );
    }

    #[tokio::test]
    async fn get_user_missing_is_field_error() {
        let schema = schema_with(ann_and_bo());
        let response = schema.execute("{ getUser(id: 99) { id } }").await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "user 99 not found");
        assert_eq!(response.data.into_json().unwrap(), serde_json::Value::Null);
    }

    #[tokio::test]
    async fn get_user_error_keeps_sibling_fields() {
        let schema = schema_with(MemoryStore::default());
        let response = schema.execute("{ getUsers { id } getUser(id: 99) { id } }").await;

        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["user 99 not found"]);
        assert_eq!(response.data.into_json().unwrap(), json!({"getUsers": []}));
    }

    #[tokio::test]
    async fn get_user_without_id_is_field_error() {
        let schema = schema_with(ann_and_bo());
        let response = schema.execute("{ getUser { id } }").await;

        assert_eq!(response.errors.len(), 1);
    }

    #[tokio::test]
    async fn create_user_returns_assigned_id() {
        let store = Arc::new(ann_and_bo());
        let schema = build_schema(store.clone());

        let response = schema
            .execute(r#"mutation { createUser(input: {name: "Cy", email: "cy@x.com"}) { id name email } }"#)
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"createUser": {"id": 3, "name": "Cy", "email": "cy@x.com"}})
        );
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn create_user_requires_both_fields() {
        let store = Arc::new(MemoryStore::default());
        let schema = build_schema(store.clone());

        let response = schema
            .execute(r#"mutation { createUser(input: {name: "Cy"}) { id } }"#)
            .await;

        assert!(!response.errors.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn store_failure_hides_driver_detail() {
        let schema = schema_with(MemoryStore::failing());
        let response = schema.execute("{ getUsers { id } }").await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "internal error");
    }

    #[test]
    fn sdl_uses_camel_case_names() {
        let sdl = schema_with(MemoryStore::default()).sdl();
        assert!(sdl.contains("getUser(id: Int): User"));
        assert!(sdl.contains("getUsers: [User!]!"));
        assert!(sdl.contains("createUser(input: UserInput!): User"));
    }
}
