//! Handler for the comments resource.

use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::http::error::ApiError;
use crate::model::CommentList;
use crate::query;
use crate::store::DataStore;

/// List all comments
///
/// Returns the full comment collection unfiltered, parents and replies
/// interleaved in dataset file order.
///
/// # Errors
///
/// Returns `ErrorResponse` if the dataset cannot be read or parsed.
#[utoipa::path(
    get,
    path = "/comments",
    tag = "Comments",
    responses(
        (status = 200, description = "Full comment collection", body = CommentList),
        (status = 500, description = "Dataset unreadable or malformed", body = crate::http::error::ErrorResponse)
    )
)]
pub async fn get_comments(
    Extension(store): Extension<Arc<dyn DataStore>>,
) -> Result<Json<CommentList>, ApiError> {
    let list = query::get_comments(store.as_ref()).await?;
    Ok(Json(list))
}
