//! Domain layer: entity records, identifiers, and the snapshot model.
//!
//! This module contains the server-side domain model: type-safe numeric ids
//! with a monotonic allocator, the three entity collections (stores,
//! jewelers, reviews), the one-way store-ownership transition, and rating
//! aggregation.

pub mod id;
pub mod jeweler;
pub mod review;
pub mod snapshot;
pub mod store;

pub use id::{IdAllocator, JewelerId, ReviewId, StoreId};
pub use jeweler::{Jeweler, VerificationStatus};
pub use review::{GUEST_USER, Review, average_rating};
pub use snapshot::Snapshot;
pub use store::{CITY_NOT_PROVIDED, Store, StoreSummary};
