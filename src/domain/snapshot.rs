//! The full in-memory state of all three collections at a point in time.

use serde::{Deserialize, Serialize};

use super::id::{JewelerId, StoreId};
use super::jeweler::Jeweler;
use super::review::Review;
use super::store::Store;

/// Complete record-store state: every mutation loads one of these, changes it
/// in memory, and persists it back in a single write.
///
/// All three collections are owned exclusively by the snapshot; entities
/// reference each other only by numeric id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Stores in creation order.
    #[serde(default)]
    pub stores: Vec<Store>,
    /// Jewelers in registration order.
    #[serde(default)]
    pub jewelers: Vec<Jeweler>,
    /// Review ledger, newest-first.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Snapshot {
    /// Highest id present in any collection, or 0 when empty. Used to seed
    /// the id allocator at startup.
    #[must_use]
    pub fn highest_id(&self) -> u64 {
        let stores = self.stores.iter().map(|s| s.id.get());
        let jewelers = self.jewelers.iter().map(|j| j.id.get());
        let reviews = self.reviews.iter().map(|r| r.id.get());
        stores.chain(jewelers).chain(reviews).max().unwrap_or(0)
    }

    /// Looks up a store by id.
    #[must_use]
    pub fn store(&self, id: StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Looks up a store by id for mutation.
    pub fn store_mut(&mut self, id: StoreId) -> Option<&mut Store> {
        self.stores.iter_mut().find(|s| s.id == id)
    }

    /// Looks up a jeweler by id for mutation.
    pub fn jeweler_mut(&mut self, id: JewelerId) -> Option<&mut Jeweler> {
        self.jewelers.iter_mut().find(|j| j.id == id)
    }

    /// Returns `true` if any jeweler is registered under `email`.
    #[must_use]
    pub fn email_taken(&self, email: &str) -> bool {
        self.jewelers.iter().any(|j| j.email == email)
    }

    /// Reviews for one store, preserving ledger (newest-first) order.
    #[must_use]
    pub fn reviews_for(&self, store_id: StoreId) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.store_id == store_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::id::ReviewId;

    fn snapshot() -> Snapshot {
        let mut snap = Snapshot::default();
        snap.stores
            .push(Store::new(StoreId::from(3), "Gem Palace".to_string(), None, None));
        snap.jewelers.push(Jeweler::new(
            JewelerId::from(8),
            StoreId::from(3),
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "pw".to_string(),
            "bis.png".to_string(),
        ));
        snap.reviews.insert(
            0,
            Review::new(ReviewId::from(4), StoreId::from(3), 5, "a".to_string(), None),
        );
        snap.reviews.insert(
            0,
            Review::new(ReviewId::from(6), StoreId::from(3), 3, "b".to_string(), None),
        );
        snap
    }

    #[test]
    fn empty_snapshot_has_empty_collections() {
        let snap = Snapshot::default();
        assert!(snap.stores.is_empty());
        assert!(snap.jewelers.is_empty());
        assert!(snap.reviews.is_empty());
        assert_eq!(snap.highest_id(), 0);
    }

    #[test]
    fn highest_id_spans_all_collections() {
        assert_eq!(snapshot().highest_id(), 8);
    }

    #[test]
    fn email_lookup_matches_exactly() {
        let snap = snapshot();
        assert!(snap.email_taken("asha@example.com"));
        assert!(!snap.email_taken("other@example.com"));
    }

    #[test]
    fn reviews_for_preserves_newest_first_order() {
        let snap = snapshot();
        let reviews = snap.reviews_for(StoreId::from(3));
        let ids: Vec<u64> = reviews.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![6, 4]);
    }

    #[test]
    fn reviews_for_unknown_store_is_empty() {
        assert!(snapshot().reviews_for(StoreId::from(99)).is_empty());
    }

    #[test]
    fn missing_collections_deserialize_as_empty() {
        let snap: Option<Snapshot> = serde_json::from_str("{}").ok();
        let Some(snap) = snap else {
            panic!("deserialization failed");
        };
        assert_eq!(snap, Snapshot::default());
    }
}
