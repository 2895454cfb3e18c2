//! # bazaar-gateway
//!
//! REST API gateway for the Jewel Bazaar retailer directory: a catalog of
//! jewelry stores with customer reviews and a self-service
//! business-registration/claim workflow.
//!
//! The service owns the data-consistency logic — store creation, the
//! one-time claim transition, the uniqueness rules of jeweler registration,
//! review ingestion, and rating aggregation. Rendering is left entirely to
//! the frontend consuming the HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DirectoryService (service/)
//!     │
//!     ├── Domain model (domain/)
//!     │     stores · jewelers · reviews
//!     │
//!     └── FileStore snapshot persistence (persistence/)
//! ```
//!
//! Every mutation runs a full load–validate–mutate–save cycle over the
//! complete snapshot, serialized behind a single writer lock.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
