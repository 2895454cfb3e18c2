//! Jeweler records created through the registration workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{JewelerId, StoreId};

/// Outcome of the manual business-verification process.
///
/// This service only ever writes [`VerificationStatus::Pending`]; the other
/// states are set by an out-of-scope moderation workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Awaiting manual review.
    #[default]
    Pending,
    /// Approved by a moderator.
    Verified,
    /// Rejected by a moderator.
    Rejected,
}

/// A registered business owner.
///
/// Jewelers are created only via registration, always together with exactly
/// one [`super::Store`] in the same atomic snapshot write. `store_id` always
/// references that store (or the store claimed later).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jeweler {
    /// Unique jeweler identifier (immutable after creation).
    pub id: JewelerId,
    /// Name of the business owner.
    pub owner_name: String,
    /// Contact email, unique across all jewelers.
    pub email: String,
    /// Opaque credential; stored as received, never validated here.
    pub password: String,
    /// The store this jeweler owns.
    pub store_id: StoreId,
    /// BIS hallmark declaration. Forced `true` once validation passed.
    pub bis_declared: bool,
    /// URL of the uploaded BIS certificate image.
    pub bis_certificate_image: String,
    /// Current verification state; starts pending.
    pub verification_status: VerificationStatus,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Jeweler {
    /// Creates a pending jeweler stamped with the current time.
    #[must_use]
    pub fn new(
        id: JewelerId,
        store_id: StoreId,
        owner_name: String,
        email: String,
        password: String,
        bis_certificate_image: String,
    ) -> Self {
        Self {
            id,
            owner_name,
            email,
            password,
            store_id,
            bis_declared: true,
            bis_certificate_image,
            verification_status: VerificationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Points this jeweler at a newly claimed store.
    pub fn assign_store(&mut self, store_id: StoreId) {
        self.store_id = store_id;
    }
}
