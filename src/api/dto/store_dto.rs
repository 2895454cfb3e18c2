//! Store-related DTOs for create, list, and claim operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::StoreSummary;

/// Request body for `POST /stores`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStoreRequest {
    /// Store display name (required).
    pub name: Option<String>,
    /// City the store operates in.
    #[serde(default)]
    pub city: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

/// A store as returned by the API: the persisted record plus the derived
/// display rating.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreDto {
    /// Store identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// City the store operates in.
    pub city: String,
    /// Fallback rating used while the store has no reviews.
    pub base_rating: f64,
    /// Logo URL; empty when none was provided.
    pub logo: String,
    /// Owning jeweler id, `null` while unclaimed.
    pub owner_id: Option<u64>,
    /// Whether the business has passed manual verification.
    pub verified: bool,
    /// Mean review rating rounded to one decimal, or `baseRating` without
    /// reviews. Recomputed on every read.
    pub rating: f64,
    /// Number of reviews attached to the store.
    pub review_count: usize,
}

impl From<StoreSummary> for StoreDto {
    fn from(summary: StoreSummary) -> Self {
        Self {
            id: summary.store.id.get(),
            name: summary.store.name,
            city: summary.store.city,
            base_rating: summary.store.base_rating,
            logo: summary.store.logo,
            owner_id: summary.store.owner_id.map(crate::domain::JewelerId::get),
            verified: summary.store.verified,
            rating: summary.rating,
            review_count: summary.review_count,
        }
    }
}

/// Request body for `POST /stores/{id}/claim`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    /// Id of the jeweler claiming the store (required).
    pub jeweler_id: Option<u64>,
}

/// Response body for a successful claim.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClaimResponse {
    /// Human-readable acknowledgement.
    pub message: String,
    /// The store after ownership was assigned.
    pub store: StoreDto,
}
