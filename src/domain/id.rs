//! Type-safe entity identifiers and id allocation.
//!
//! [`StoreId`], [`JewelerId`], and [`ReviewId`] are newtype wrappers around
//! `u64` providing type safety so that identifiers from different collections
//! cannot be confused. Numeric ids are the only way any component addresses
//! an entity — records are never referenced by pointer across boundaries.
//!
//! [`IdAllocator`] hands out fresh ids from a process-wide atomic counter
//! seeded above the highest id already persisted, so uniqueness holds even
//! for rapid successive calls within the same millisecond.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Returns the raw numeric id.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id! {
    /// Unique identifier for a [`super::Store`].
    StoreId
}

entity_id! {
    /// Unique identifier for a [`super::Jeweler`].
    JewelerId
}

entity_id! {
    /// Unique identifier for a [`super::Review`].
    ReviewId
}

/// Monotonic id source shared by all three collections.
///
/// Seeded once at startup from the persisted snapshot; every call to
/// [`IdAllocator::allocate`] returns a value strictly greater than any id
/// handed out before, across stores, jewelers, and reviews alike.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `highest + 1` (at least 1).
    #[must_use]
    pub fn starting_after(highest: u64) -> Self {
        Self {
            next: AtomicU64::new(highest.saturating_add(1).max(1)),
        }
    }

    /// Returns a fresh id, distinct from every id allocated so far.
    pub fn allocate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
