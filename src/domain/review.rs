//! Review records and rating aggregation.
//!
//! Reviews are append-only: once created they are never updated or deleted.
//! The canonical ledger order is newest-first, so new reviews are prepended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ReviewId, StoreId};

/// Name attributed to reviews submitted without a user name.
pub const GUEST_USER: &str = "Guest User";

/// A single customer review, immutable once created.
///
/// `store_id` is not required to reference an existing store: a dangling
/// review is tolerated and simply never surfaces under any store's filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier (immutable after creation).
    pub id: ReviewId,
    /// Store this review is attached to.
    pub store_id: StoreId,
    /// Rating given by the reviewer. Zero is rejected at submission.
    pub rating: u32,
    /// Free-form review text.
    pub text: String,
    /// Display name of the reviewer.
    pub user: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a review stamped with the current time. A missing or empty
    /// user name falls back to [`GUEST_USER`].
    #[must_use]
    pub fn new(
        id: ReviewId,
        store_id: StoreId,
        rating: u32,
        text: String,
        user: Option<String>,
    ) -> Self {
        Self {
            id,
            store_id,
            rating,
            text,
            user: user
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| GUEST_USER.to_string()),
            created_at: Utc::now(),
        }
    }
}

/// Arithmetic mean of the given ratings, rounded to one decimal place.
///
/// Returns `None` for an empty slice — callers fall back to the store's
/// base rating.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(ratings: &[u32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn average_of_empty_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[4]), Some(4.0));
        assert_eq!(average_rating(&[4, 5]), Some(4.5));
        // 11 / 3 = 3.666… rounds to 3.7
        assert_eq!(average_rating(&[3, 4, 4]), Some(3.7));
        // 14 / 3 = 4.666… rounds to 4.7
        assert_eq!(average_rating(&[5, 5, 4]), Some(4.7));
    }

    #[test]
    fn missing_user_defaults_to_guest() {
        let review = Review::new(ReviewId::from(1), StoreId::from(5), 4, "Great".to_string(), None);
        assert_eq!(review.user, GUEST_USER);
    }

    #[test]
    fn empty_user_defaults_to_guest() {
        let review = Review::new(
            ReviewId::from(1),
            StoreId::from(5),
            4,
            "Great".to_string(),
            Some(String::new()),
        );
        assert_eq!(review.user, GUEST_USER);
    }

    #[test]
    fn named_user_is_kept() {
        let review = Review::new(
            ReviewId::from(1),
            StoreId::from(5),
            4,
            "Great".to_string(),
            Some("Alice".to_string()),
        );
        assert_eq!(review.user, "Alice");
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let review = Review::new(ReviewId::from(1), StoreId::from(5), 4, "ok".to_string(), None);
        let json = serde_json::to_value(&review).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.get("storeId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
