//! Handlers for the politicians resource.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::http::error::ApiError;
use crate::model::{Politician, PoliticianList};
use crate::query;
use crate::store::DataStore;

/// List all politicians
///
/// Returns every politician record in dataset file order.
///
/// # Errors
///
/// Returns `ErrorResponse` if the dataset cannot be read or parsed.
#[utoipa::path(
    get,
    path = "/politicians",
    tag = "Politicians",
    responses(
        (status = 200, description = "Full politician collection", body = PoliticianList),
        (status = 500, description = "Dataset unreadable or malformed", body = crate::http::error::ErrorResponse)
    )
)]
pub async fn list_politicians(
    Extension(store): Extension<Arc<dyn DataStore>>,
) -> Result<Json<PoliticianList>, ApiError> {
    let list = query::list_politicians(store.as_ref()).await?;
    Ok(Json(list))
}

/// Get a politician by id
///
/// Returns the first politician in file order whose id matches.
///
/// # Errors
///
/// Returns `ErrorResponse` with 400 for an empty id, 404 when no
/// record matches, or 500 if the dataset cannot be read or parsed.
#[utoipa::path(
    get,
    path = "/politicians/{id}",
    tag = "Politicians",
    params(("id" = String, Path, description = "Politician identifier")),
    responses(
        (status = 200, description = "Matching politician", body = Politician),
        (status = 400, description = "Empty identifier", body = crate::http::error::ErrorResponse),
        (status = 404, description = "No politician with this id", body = crate::http::error::ErrorResponse),
        (status = 500, description = "Dataset unreadable or malformed", body = crate::http::error::ErrorResponse)
    )
)]
pub async fn get_politician(
    Extension(store): Extension<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<Json<Politician>, ApiError> {
    let politician = query::get_politician(store.as_ref(), &id).await?;
    Ok(Json(politician))
}
