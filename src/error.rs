//! Gateway error types with HTTP status code mapping.
//!
//! [`DirectoryError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and a JSON error response. Error
//! messages are part of the compatibility surface — the frontend renders them
//! verbatim as user-facing text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "Store already claimed" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message, rendered verbatim by clients.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Taxonomy
///
/// | Category   | HTTP Status               |
/// |------------|---------------------------|
/// | Validation | 400 Bad Request           |
/// | Not Found  | 404 Not Found             |
/// | Conflict   | 409 Conflict              |
/// | Server     | 500 Internal Server Error |
///
/// All variants are terminal and non-retriable from the server's perspective;
/// the client must correct its input and resubmit.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No store exists with the requested id.
    #[error("Store not found")]
    StoreNotFound,

    /// No jeweler exists with the requested id.
    #[error("Jeweler not found")]
    JewelerNotFound,

    /// A jeweler is already registered under the given email.
    #[error("Email already registered")]
    EmailTaken,

    /// The store's ownership has already been assigned. A store is claimed
    /// exactly once; there is no transition back to unclaimed.
    #[error("Store already claimed")]
    StoreAlreadyClaimed,

    /// A review submission is missing `storeId`, `rating`, or `text`.
    #[error("Invalid review data")]
    InvalidReview,

    /// A registration is missing one or more required fields.
    #[error("All required fields must be provided")]
    MissingRegistrationFields,

    /// A claim request did not carry a jeweler id.
    #[error("Jeweler ID required")]
    MissingJewelerId,

    /// A store creation request did not carry a name.
    #[error("Store name is required")]
    MissingStoreName,

    /// Record store failure while reading or writing the snapshot.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DirectoryError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidReview
            | Self::MissingRegistrationFields
            | Self::MissingJewelerId
            | Self::MissingStoreName => StatusCode::BAD_REQUEST,
            Self::StoreNotFound | Self::JewelerNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken | Self::StoreAlreadyClaimed => StatusCode::CONFLICT,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            DirectoryError::InvalidReview.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DirectoryError::StoreNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DirectoryError::EmailTaken.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            DirectoryError::StoreAlreadyClaimed.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            DirectoryError::Persistence("disk full".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_the_compatibility_surface() {
        assert_eq!(
            DirectoryError::InvalidReview.to_string(),
            "Invalid review data"
        );
        assert_eq!(
            DirectoryError::MissingRegistrationFields.to_string(),
            "All required fields must be provided"
        );
        assert_eq!(
            DirectoryError::EmailTaken.to_string(),
            "Email already registered"
        );
        assert_eq!(
            DirectoryError::MissingJewelerId.to_string(),
            "Jeweler ID required"
        );
        assert_eq!(DirectoryError::StoreNotFound.to_string(), "Store not found");
        assert_eq!(
            DirectoryError::StoreAlreadyClaimed.to_string(),
            "Store already claimed"
        );
        assert_eq!(
            DirectoryError::JewelerNotFound.to_string(),
            "Jeweler not found"
        );
    }
}
