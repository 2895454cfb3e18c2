//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root — paths and status codes are the
//! compatibility surface consumed by the existing frontend.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering the full HTTP surface.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::store::list_stores,
        handlers::store::create_store,
        handlers::store::claim_store,
        handlers::review::list_reviews,
        handlers::review::create_review,
        handlers::jeweler::register,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Stores", description = "Store registry and claim workflow"),
        (name = "Reviews", description = "Review ledger"),
        (name = "Jewelers", description = "Business registration"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}
