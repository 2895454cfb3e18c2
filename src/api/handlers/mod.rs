//! REST endpoint handlers organized by resource.

pub mod jeweler;
pub mod review;
pub mod store;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(store::routes())
        .merge(review::routes())
        .merge(jeweler::routes())
}
