//! Users endpoints
//!
//! `GET` lists one page, `POST` creates, anything else on the path is 405.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Envelope, NewUser, PageParams, PageRequest, UserView};

/// Path of the users resource
pub const USERS_PATH: &str = "/api/v1/users";

/// Create user response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/v1/users - list users with pagination
///
/// The query is taken as raw pairs so a repeated key cannot fail extraction.
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Envelope<UserView>>, ApiError> {
    let page = PageRequest::from(PageParams::from_pairs(pairs));
    let users = state.store.list_page(page).await?;
    let total = state.store.count().await?;

    Ok(Json(Envelope::new(
        users.into_iter().map(UserView::from).collect(),
        total,
        page,
    )))
}

/// POST /api/v1/users - create a new user
///
/// The body is decoded by hand so a missing or wrong content type is not
/// rejected before the JSON is looked at.
async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let new_user: NewUser = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, body_len = body.len(), "Rejected create user body");
        ApiError::BadRequest {
            message: "failed to parse request body".into(),
        }
    })?;

    let user = state.store.create(&new_user).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        USERS_PATH,
        get(list_users)
            .post(create_user)
            .fallback(method_not_allowed),
    )
}
