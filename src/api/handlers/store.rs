//! Store handlers: list, create, claim.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ClaimRequest, ClaimResponse, CreateStoreRequest, StoreDto};
use crate::app_state::AppState;
use crate::domain::{JewelerId, StoreId};
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /stores` — List all stores with their display ratings.
///
/// # Errors
///
/// Returns [`DirectoryError::Persistence`] on snapshot read failure.
#[utoipa::path(
    get,
    path = "/stores",
    tag = "Stores",
    summary = "List stores",
    description = "Returns every store in creation order. Each entry carries the derived display rating: the mean of its review ratings rounded to one decimal, or the base rating when no reviews exist.",
    responses(
        (status = 200, description = "All stores", body = Vec<StoreDto>),
        (status = 500, description = "Record store failure", body = ErrorResponse),
    )
)]
pub async fn list_stores(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let summaries = state.directory.list_stores().await?;
    let stores: Vec<StoreDto> = summaries.into_iter().map(StoreDto::from).collect();
    Ok(Json(stores))
}

/// `POST /stores` — Create an unclaimed store (admin use).
///
/// # Errors
///
/// Returns [`DirectoryError::MissingStoreName`] when no name is given.
#[utoipa::path(
    post,
    path = "/stores",
    tag = "Stores",
    summary = "Create a store",
    description = "Creates an unowned, unverified store. City defaults to \"Not provided\" and the logo to an empty string when omitted.",
    request_body = CreateStoreRequest,
    responses(
        (status = 201, description = "Store created", body = StoreDto),
        (status = 400, description = "Missing store name", body = ErrorResponse),
    )
)]
pub async fn create_store(
    State(state): State<AppState>,
    Json(req): Json<CreateStoreRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let name = req
        .name
        .filter(|n| !n.is_empty())
        .ok_or(DirectoryError::MissingStoreName)?;

    let summary = state.directory.create_store(name, req.city, req.logo).await?;
    Ok((StatusCode::CREATED, Json(StoreDto::from(summary))))
}

/// `POST /stores/{id}/claim` — Assign an unclaimed store to a jeweler.
///
/// # Errors
///
/// Returns [`DirectoryError::MissingJewelerId`],
/// [`DirectoryError::StoreNotFound`],
/// [`DirectoryError::StoreAlreadyClaimed`], or
/// [`DirectoryError::JewelerNotFound`].
#[utoipa::path(
    post,
    path = "/stores/{id}/claim",
    tag = "Stores",
    summary = "Claim a store",
    description = "One-time assignment of an unclaimed store to a registered jeweler. A store is claimed exactly once; later attempts conflict.",
    params(
        ("id" = u64, Path, description = "Store id"),
    ),
    request_body = ClaimRequest,
    responses(
        (status = 200, description = "Store claimed", body = ClaimResponse),
        (status = 400, description = "Missing jeweler id", body = ErrorResponse),
        (status = 404, description = "Store or jeweler not found", body = ErrorResponse),
        (status = 409, description = "Store already claimed", body = ErrorResponse),
    )
)]
pub async fn claim_store(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<ClaimRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let jeweler_id = req
        .jeweler_id
        .filter(|id| *id != 0)
        .ok_or(DirectoryError::MissingJewelerId)?;

    let summary = state
        .directory
        .claim_store(StoreId::from(id), JewelerId::from(jeweler_id))
        .await?;

    Ok(Json(ClaimResponse {
        message: "Store claimed successfully".to_string(),
        store: StoreDto::from(summary),
    }))
}

/// Store routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stores", get(list_stores).post(create_store))
        .route("/stores/{id}/claim", post(claim_store))
}
