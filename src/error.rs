//! # API Errors
//!
//! Error types shared by all request handlers. Every internal operation
//! returns a typed error kind; the mapping to an HTTP status happens once
//! here, at the response boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Validation Errors (400)
    // ==================
    /// Search requested without a term
    #[error("Search term is required")]
    MissingSearchTerm,

    /// Search fell through to the text columns and found none
    #[error("No text columns found for search")]
    NoTextColumns,

    /// Item insert without both required fields
    #[error("Missing required fields (field1, field2)")]
    MissingItemFields,

    /// Item update with an empty body
    #[error("Missing at least one field to update (field1, field2)")]
    NoUpdateFields,

    // ==================
    // Not Found Errors (404)
    // ==================
    /// Table name not present in the catalog
    #[error("Table not found or access denied")]
    TableNotFound,

    /// Demo table has not been initialized
    #[error("Table 'your_table' does not exist. Use /api/tables to see available tables.")]
    ItemsTableMissing,

    /// No item with the requested id
    #[error("Item not found")]
    ItemNotFound,

    // ==================
    // Server Errors (500)
    // ==================
    /// Connection, catalog, or statement failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingSearchTerm
            | ApiError::NoTextColumns
            | ApiError::MissingItemFields
            | ApiError::NoUpdateFields => StatusCode::BAD_REQUEST,

            ApiError::TableNotFound | ApiError::ItemsTableMissing | ApiError::ItemNotFound => {
                StatusCode::NOT_FOUND
            }

            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(
            ApiError::MissingSearchTerm.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NoTextColumns.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingItemFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NoUpdateFields.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_errors_are_404() {
        assert_eq!(ApiError::TableNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ItemNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ItemsTableMissing.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_database_errors_are_500() {
        let err = ApiError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
