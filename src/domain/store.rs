//! Store records, the one-way ownership transition, and display ratings.

use serde::{Deserialize, Serialize};

use super::id::{JewelerId, StoreId};
use super::review::{Review, average_rating};
use crate::error::DirectoryError;

/// City recorded when a store is created without one.
pub const CITY_NOT_PROVIDED: &str = "Not provided";

/// A jewelry store in the directory.
///
/// Ownership follows a one-way state machine:
/// `Unclaimed (owner_id = None)` → `Claimed (owner_id = Some(j))`, triggered
/// either by [`Store::claim`] or at creation time during jeweler registration.
/// No transition back to unclaimed exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store identifier (immutable after creation).
    pub id: StoreId,
    /// Display name.
    pub name: String,
    /// City the store operates in.
    pub city: String,
    /// Fallback rating shown while the store has no reviews.
    pub base_rating: f64,
    /// Logo URL; empty when none was provided.
    pub logo: String,
    /// Owning jeweler, if the store has been claimed.
    pub owner_id: Option<JewelerId>,
    /// Set by an out-of-band moderation process; never by this service.
    pub verified: bool,
}

impl Store {
    /// Creates an unclaimed store, as done by direct admin creation.
    #[must_use]
    pub fn new(id: StoreId, name: String, city: Option<String>, logo: Option<String>) -> Self {
        Self {
            id,
            name,
            city: city
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| CITY_NOT_PROVIDED.to_string()),
            base_rating: 0.0,
            logo: logo.unwrap_or_default(),
            owner_id: None,
            verified: false,
        }
    }

    /// Creates a store already claimed by `owner`, as done during jeweler
    /// registration.
    #[must_use]
    pub fn owned(
        id: StoreId,
        owner: JewelerId,
        name: String,
        city: Option<String>,
        logo: Option<String>,
    ) -> Self {
        Self {
            owner_id: Some(owner),
            ..Self::new(id, name, city, logo)
        }
    }

    /// Returns `true` if ownership has been assigned.
    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.owner_id.is_some()
    }

    /// Assigns ownership to `jeweler`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::StoreAlreadyClaimed`] if ownership was
    /// already assigned — the transition fires exactly once.
    pub fn claim(&mut self, jeweler: JewelerId) -> Result<(), DirectoryError> {
        if self.is_claimed() {
            return Err(DirectoryError::StoreAlreadyClaimed);
        }
        self.owner_id = Some(jeweler);
        Ok(())
    }
}

/// A store together with its derived display rating.
///
/// The rating is never persisted; it is recomputed from the review ledger on
/// every read.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSummary {
    /// The persisted store record.
    pub store: Store,
    /// Mean review rating rounded to one decimal, or the base rating when
    /// the store has no reviews.
    pub rating: f64,
    /// Number of reviews attached to the store.
    pub review_count: usize,
}

impl StoreSummary {
    /// Derives the display rating for `store` from the full review ledger.
    #[must_use]
    pub fn derive(store: &Store, ledger: &[Review]) -> Self {
        let ratings: Vec<u32> = ledger
            .iter()
            .filter(|r| r.store_id == store.id)
            .map(|r| r.rating)
            .collect();
        Self {
            rating: average_rating(&ratings).unwrap_or(store.base_rating),
            review_count: ratings.len(),
            store: store.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::id::ReviewId;

    fn store(id: u64) -> Store {
        Store::new(StoreId::from(id), "Gem Palace".to_string(), None, None)
    }

    fn review(store_id: u64, rating: u32) -> Review {
        Review::new(
            ReviewId::from(100 + u64::from(rating)),
            StoreId::from(store_id),
            rating,
            "text".to_string(),
            None,
        )
    }

    #[test]
    fn new_store_is_unclaimed_and_unverified() {
        let s = store(1);
        assert_eq!(s.owner_id, None);
        assert!(!s.verified);
        assert_eq!(s.base_rating, 0.0);
        assert_eq!(s.city, CITY_NOT_PROVIDED);
        assert_eq!(s.logo, "");
    }

    #[test]
    fn empty_city_falls_back_to_not_provided() {
        let s = Store::new(
            StoreId::from(1),
            "Gem Palace".to_string(),
            Some(String::new()),
            None,
        );
        assert_eq!(s.city, CITY_NOT_PROVIDED);
    }

    #[test]
    fn claim_assigns_owner_once() {
        let mut s = store(7);
        assert!(s.claim(JewelerId::from(2)).is_ok());
        assert_eq!(s.owner_id, Some(JewelerId::from(2)));

        // Identical repeat must conflict; ownership never reassigns.
        let again = s.claim(JewelerId::from(2));
        assert!(matches!(again, Err(DirectoryError::StoreAlreadyClaimed)));
        let other = s.claim(JewelerId::from(3));
        assert!(matches!(other, Err(DirectoryError::StoreAlreadyClaimed)));
        assert_eq!(s.owner_id, Some(JewelerId::from(2)));
    }

    #[test]
    fn owned_store_is_born_claimed() {
        let s = Store::owned(
            StoreId::from(1),
            JewelerId::from(9),
            "Aurum".to_string(),
            Some("Jaipur".to_string()),
            None,
        );
        assert!(s.is_claimed());
        assert!(!s.verified);
        assert_eq!(s.city, "Jaipur");
    }

    #[test]
    fn summary_without_reviews_uses_base_rating() {
        let mut s = store(5);
        s.base_rating = 3.5;
        let summary = StoreSummary::derive(&s, &[]);
        assert_eq!(summary.rating, 3.5);
        assert_eq!(summary.review_count, 0);
    }

    #[test]
    fn summary_averages_only_this_stores_reviews() {
        let s = store(5);
        let ledger = vec![review(5, 4), review(9, 1), review(5, 5)];
        let summary = StoreSummary::derive(&s, &ledger);
        assert_eq!(summary.rating, 4.5);
        assert_eq!(summary.review_count, 2);
    }

    #[test]
    fn first_review_sets_display_rating_to_its_value() {
        let s = store(5);
        let ledger = vec![review(5, 4)];
        let summary = StoreSummary::derive(&s, &ledger);
        assert_eq!(summary.rating, 4.0);
        assert_eq!(summary.review_count, 1);
    }

    #[test]
    fn owner_id_serializes_as_camel_case_nullable() {
        let s = store(1);
        let json = serde_json::to_value(&s).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.get("ownerId").is_some_and(serde_json::Value::is_null));
        assert!(json.get("baseRating").is_some());
    }
}
