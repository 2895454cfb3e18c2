//! Review-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Review;

/// Request body for `POST /reviews`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Id of the store being reviewed (required).
    pub store_id: Option<u64>,
    /// Rating to record (required; zero counts as missing).
    pub rating: Option<u32>,
    /// Review text (required).
    pub text: Option<String>,
    /// Reviewer display name; defaults to `"Guest User"`.
    #[serde(default)]
    pub user: Option<String>,
}

/// A review as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    /// Review identifier.
    pub id: u64,
    /// Store this review is attached to.
    pub store_id: u64,
    /// Recorded rating.
    pub rating: u32,
    /// Review text.
    pub text: String,
    /// Reviewer display name.
    pub user: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.get(),
            store_id: review.store_id.get(),
            rating: review.rating,
            text: review.text,
            user: review.user,
            created_at: review.created_at,
        }
    }
}
