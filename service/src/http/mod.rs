//! HTTP surface: routes, handlers, and `OpenAPI` documentation.
//!
//! Handlers receive the dataset store as an `Extension<Arc<dyn
//! DataStore>>`; the store is the only state shared across requests
//! and it is itself stateless.

pub mod comments;
pub mod error;
pub mod parties;
pub mod politicians;

pub use error::{ApiError, ErrorResponse};

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::model::{
    Comment, CommentList, Party, PartyList, PartyWithMembers, Politician, PoliticianList,
};

/// Root welcome payload, kept for clients that probe `/`.
async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the Poliscope REST API" }))
}

/// Health check handler
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Build the API router. Middleware and the store extension are layered
/// by the caller.
pub fn router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/politicians", get(politicians::list_politicians))
        .route("/politicians/{id}", get(politicians::get_politician))
        .route("/parties", get(parties::list_parties))
        .route("/parties/{id}", get(parties::get_party_with_members))
        .route("/comments", get(comments::get_comments))
}

/// `OpenAPI` documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Poliscope API",
        version = "1.0.0",
        description = "Read-only REST API serving political-data collections from JSON datasets",
        license(name = "MIT")
    ),
    paths(
        politicians::list_politicians,
        politicians::get_politician,
        parties::list_parties,
        parties::get_party_with_members,
        comments::get_comments
    ),
    components(schemas(
        Politician,
        Party,
        Comment,
        PoliticianList,
        PartyList,
        CommentList,
        PartyWithMembers,
        ErrorResponse
    ))
)]
pub struct ApiDoc;
