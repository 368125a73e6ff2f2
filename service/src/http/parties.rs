//! Handlers for the parties resource.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::http::error::ApiError;
use crate::model::{PartyList, PartyWithMembers};
use crate::query;
use crate::store::DataStore;

/// List all parties
///
/// Returns every party record in dataset file order.
///
/// # Errors
///
/// Returns `ErrorResponse` if the dataset cannot be read or parsed.
#[utoipa::path(
    get,
    path = "/parties",
    tag = "Parties",
    responses(
        (status = 200, description = "Full party collection", body = PartyList),
        (status = 500, description = "Dataset unreadable or malformed", body = crate::http::error::ErrorResponse)
    )
)]
pub async fn list_parties(
    Extension(store): Extension<Arc<dyn DataStore>>,
) -> Result<Json<PartyList>, ApiError> {
    let list = query::list_parties(store.as_ref()).await?;
    Ok(Json(list))
}

/// Get a party and its members
///
/// Resolves the party, then filters the politicians dataset by each
/// politician's embedded party snapshot id. The member list preserves
/// politician file order and may be empty.
///
/// # Errors
///
/// Returns `ErrorResponse` with 400 for an empty id, 404 when the
/// party does not exist, or 500 if either dataset cannot be read or
/// parsed.
#[utoipa::path(
    get,
    path = "/parties/{id}",
    tag = "Parties",
    params(("id" = String, Path, description = "Party identifier")),
    responses(
        (status = 200, description = "Party with its member politicians", body = PartyWithMembers),
        (status = 400, description = "Empty identifier", body = crate::http::error::ErrorResponse),
        (status = 404, description = "No party with this id", body = crate::http::error::ErrorResponse),
        (status = 500, description = "Dataset unreadable or malformed", body = crate::http::error::ErrorResponse)
    )
)]
pub async fn get_party_with_members(
    Extension(store): Extension<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<Json<PartyWithMembers>, ApiError> {
    let result = query::get_party_with_members(store.as_ref(), &id).await?;
    Ok(Json(result))
}
