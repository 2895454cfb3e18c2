//! Data Transfer Objects for REST request/response serialization.
//!
//! All wire field names are camelCase for compatibility with the existing
//! frontend. Request fields are `Option` so that presence checks (including
//! the falsy-zero and empty-string rules) happen in the handlers rather than
//! failing at deserialization.

pub mod jeweler_dto;
pub mod review_dto;
pub mod store_dto;

pub use jeweler_dto::*;
pub use review_dto::*;
pub use store_dto::*;
