//! GraphQL endpoint
//!
//! Resolver failures come back as field errors with status 200; only a
//! request that cannot be parsed as GraphQL-over-HTTP is rejected with 400.

use std::sync::Arc;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, routing::post, Router};

use crate::http::server::AppState;

/// POST /graphql
async fn graphql(State(state): State<Arc<AppState>>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphQL routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/graphql", post(graphql))
}
