//! Directory service: store registry, registration workflow, review ledger.

use tokio::sync::Mutex;

use crate::domain::{
    IdAllocator, Jeweler, JewelerId, Review, ReviewId, Snapshot, Store, StoreId, StoreSummary,
};
use crate::error::DirectoryError;
use crate::persistence::FileStore;

/// Validated input for the jeweler registration workflow.
///
/// Field presence has already been checked at the API boundary; the BIS
/// declaration is implied (registration is rejected without it).
#[derive(Debug, Clone)]
pub struct Registration {
    /// Name of the business owner.
    pub owner_name: String,
    /// Contact email; must be unique across jewelers.
    pub email: String,
    /// Opaque credential, stored as received.
    pub password: String,
    /// Name of the store created alongside the jeweler.
    pub store_name: String,
    /// Optional store city.
    pub store_city: Option<String>,
    /// Optional store logo URL.
    pub store_logo: Option<String>,
    /// URL of the uploaded BIS certificate image.
    pub bis_certificate_image: String,
}

/// Orchestration layer for all directory operations.
///
/// Every mutation follows the same cycle: take the writer lock → load the
/// full snapshot → validate → mutate in memory → persist the snapshot in one
/// write → respond. The lock makes the original design's implicit global
/// critical section explicit, so in-process request handlers never interleave
/// their load/save cycles. Reads load the snapshot without the lock.
///
/// Multi-process writers remain out of scope: two processes racing on the
/// same email can both pass the uniqueness check before either persists.
#[derive(Debug)]
pub struct DirectoryService {
    record_store: FileStore,
    ids: IdAllocator,
    writer: Mutex<()>,
}

impl DirectoryService {
    /// Opens the service on top of `record_store`, materializing the empty
    /// snapshot on first use and seeding the id allocator above the highest
    /// persisted id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the snapshot cannot be
    /// read.
    pub async fn open(record_store: FileStore) -> Result<Self, DirectoryError> {
        let snapshot = record_store.load().await?;
        let ids = IdAllocator::starting_after(snapshot.highest_id());
        Ok(Self {
            record_store,
            ids,
            writer: Mutex::new(()),
        })
    }

    // ── Store Registry ──────────────────────────────────────────────────

    /// Returns every store in creation order, each with its derived display
    /// rating and review count.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] on snapshot read failure.
    pub async fn list_stores(&self) -> Result<Vec<StoreSummary>, DirectoryError> {
        let snapshot = self.record_store.load().await?;
        Ok(snapshot
            .stores
            .iter()
            .map(|store| StoreSummary::derive(store, &snapshot.reviews))
            .collect())
    }

    /// Creates an unclaimed store with a fresh id and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] on snapshot I/O failure.
    pub async fn create_store(
        &self,
        name: String,
        city: Option<String>,
        logo: Option<String>,
    ) -> Result<StoreSummary, DirectoryError> {
        let _guard = self.writer.lock().await;
        let mut snapshot = self.record_store.load().await?;

        let store = Store::new(StoreId::from(self.ids.allocate()), name, city, logo);
        let summary = StoreSummary::derive(&store, &snapshot.reviews);
        snapshot.stores.push(store);
        self.record_store.save(&snapshot).await?;

        tracing::info!(store_id = %summary.store.id, "store created");
        Ok(summary)
    }

    // ── Jeweler Registration & Claim Workflow ───────────────────────────

    /// Registers a jeweler together with their store.
    ///
    /// The pair is appended in one snapshot write: a reader can never observe
    /// a jeweler without its store or vice versa. The created ids are
    /// deliberately not returned — the workflow continues with a separate
    /// claim/login step, not a session.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmailTaken`] if a jeweler already exists
    /// under the same email, or [`DirectoryError::Persistence`] on snapshot
    /// I/O failure.
    pub async fn register(&self, registration: Registration) -> Result<(), DirectoryError> {
        let _guard = self.writer.lock().await;
        let mut snapshot = self.record_store.load().await?;

        if snapshot.email_taken(&registration.email) {
            return Err(DirectoryError::EmailTaken);
        }

        let jeweler_id = JewelerId::from(self.ids.allocate());
        let store_id = StoreId::from(self.ids.allocate());

        let store = Store::owned(
            store_id,
            jeweler_id,
            registration.store_name,
            registration.store_city,
            registration.store_logo,
        );
        let jeweler = Jeweler::new(
            jeweler_id,
            store_id,
            registration.owner_name,
            registration.email,
            registration.password,
            registration.bis_certificate_image,
        );

        snapshot.stores.push(store);
        snapshot.jewelers.push(jeweler);
        self.record_store.save(&snapshot).await?;

        tracing::info!(%jeweler_id, %store_id, "jeweler registered, store pending verification");
        Ok(())
    }

    /// Assigns an unclaimed store to a registered jeweler.
    ///
    /// Failure precedence mirrors the workflow: unknown store, then already
    /// claimed, then unknown jeweler. Ownership is only checked store-side —
    /// a jeweler already owning another store is not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::StoreNotFound`],
    /// [`DirectoryError::StoreAlreadyClaimed`],
    /// [`DirectoryError::JewelerNotFound`], or
    /// [`DirectoryError::Persistence`] on snapshot I/O failure.
    pub async fn claim_store(
        &self,
        store_id: StoreId,
        jeweler_id: JewelerId,
    ) -> Result<StoreSummary, DirectoryError> {
        let _guard = self.writer.lock().await;
        let mut snapshot = self.record_store.load().await?;

        {
            let store = snapshot
                .store(store_id)
                .ok_or(DirectoryError::StoreNotFound)?;
            if store.is_claimed() {
                return Err(DirectoryError::StoreAlreadyClaimed);
            }
        }

        let jeweler = snapshot
            .jeweler_mut(jeweler_id)
            .ok_or(DirectoryError::JewelerNotFound)?;
        jeweler.assign_store(store_id);

        let store = snapshot
            .store_mut(store_id)
            .ok_or(DirectoryError::StoreNotFound)?;
        store.claim(jeweler_id)?;
        let claimed = store.clone();

        let summary = StoreSummary::derive(&claimed, &snapshot.reviews);
        self.record_store.save(&snapshot).await?;

        tracing::info!(%store_id, %jeweler_id, "store claimed");
        Ok(summary)
    }

    // ── Review Ledger ───────────────────────────────────────────────────

    /// Returns the full review ledger, newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] on snapshot read failure.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, DirectoryError> {
        let snapshot = self.record_store.load().await?;
        Ok(snapshot.reviews)
    }

    /// Returns reviews for one store, preserving ledger order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] on snapshot read failure.
    pub async fn reviews_for_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<Review>, DirectoryError> {
        let snapshot = self.record_store.load().await?;
        Ok(snapshot.reviews_for(store_id))
    }

    /// Appends a review to the front of the ledger and persists it.
    ///
    /// `store_id` is not checked against the store registry: a dangling
    /// review is tolerated and never surfaces under any store's filter.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] on snapshot I/O failure.
    pub async fn add_review(
        &self,
        store_id: StoreId,
        rating: u32,
        text: String,
        user: Option<String>,
    ) -> Result<Review, DirectoryError> {
        let _guard = self.writer.lock().await;
        let mut snapshot = self.record_store.load().await?;

        let review = Review::new(
            ReviewId::from(self.ids.allocate()),
            store_id,
            rating,
            text,
            user,
        );
        snapshot.reviews.insert(0, review.clone());
        self.record_store.save(&snapshot).await?;

        tracing::info!(review_id = %review.id, %store_id, rating, "review added");
        Ok(review)
    }

    /// Reads the raw persisted snapshot. Test and diagnostics helper; the
    /// HTTP surface never exposes it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] on snapshot read failure.
    pub async fn snapshot(&self) -> Result<Snapshot, DirectoryError> {
        self.record_store.load().await
    }
}
