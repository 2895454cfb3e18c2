//! Service layer: orchestration of all directory operations.

pub mod directory_service;

pub use directory_service::{DirectoryService, Registration};
