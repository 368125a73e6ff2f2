//! HTTP error mapping for the query layer.
//!
//! Client-facing messages are fixed per dataset and never include
//! internal detail (file paths, parse errors). Those go to tracing
//! only.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::query::QueryError;
use crate::store::{Dataset, StoreError};

/// Error response body shared by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// A query failure translated to an HTTP status and a safe message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

const fn entity_noun(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Politicians => "politician",
        Dataset::Parties => "party",
        Dataset::Comments => "comment",
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::EmptyId => {
                Self::new(StatusCode::BAD_REQUEST, "Identifier not specified")
            }
            QueryError::NotFound { dataset, id } => {
                tracing::debug!(%dataset, %id, "lookup missed");
                match dataset {
                    Dataset::Politicians => {
                        Self::new(StatusCode::NOT_FOUND, "Politician not found")
                    }
                    Dataset::Parties => Self::new(StatusCode::NOT_FOUND, "Party not found"),
                    Dataset::Comments => Self::new(StatusCode::NOT_FOUND, "Comment not found"),
                }
            }
            QueryError::Store(StoreError::Io { dataset, source }) => {
                tracing::error!(%dataset, error = %source, "dataset read failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to load {} data", entity_noun(dataset)),
                )
            }
            QueryError::Decode { dataset, source } => {
                tracing::error!(%dataset, error = %source, "dataset decode failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to parse {} data", entity_noun(dataset)),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_maps_to_bad_request() {
        let err = ApiError::from(QueryError::EmptyId);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404_per_dataset() {
        let err = ApiError::from(QueryError::NotFound {
            dataset: Dataset::Parties,
            id: "p1".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Party not found");
    }

    #[test]
    fn io_failure_maps_to_500_without_detail() {
        let err = ApiError::from(QueryError::Store(StoreError::Io {
            dataset: Dataset::Politicians,
            source: std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "/secret/path/politicians.json",
            ),
        }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to load politician data");
        assert!(!err.message.contains("/secret/path"));
    }

    #[test]
    fn decode_failure_maps_to_500_without_detail() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let detail = source.to_string();
        let err = ApiError::from(QueryError::Decode {
            dataset: Dataset::Comments,
            source,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to parse comment data");
        assert!(!err.message.contains(&detail));
    }
}
