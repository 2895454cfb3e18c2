//! Registration DTOs for the jeweler business workflow.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /jewelers/register`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Name of the business owner (required).
    pub owner_name: Option<String>,
    /// Contact email, unique across jewelers (required).
    pub email: Option<String>,
    /// Credential, stored opaquely (required).
    pub password: Option<String>,
    /// Name of the store to create alongside the jeweler (required).
    pub store_name: Option<String>,
    /// Store city.
    #[serde(default)]
    pub store_city: Option<String>,
    /// Store logo URL.
    #[serde(default)]
    pub store_logo: Option<String>,
    /// BIS hallmark declaration; must be `true` (required).
    pub bis_declared: Option<bool>,
    /// URL of the uploaded BIS certificate image (required).
    pub bis_certificate_image: Option<String>,
}

/// Response body for a successful registration.
///
/// Deliberately carries no ids: the workflow continues with a separate
/// claim/login step, not a session.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}
