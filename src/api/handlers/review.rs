//! Review ledger handlers: list and append.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateReviewRequest, ReviewDto};
use crate::app_state::AppState;
use crate::domain::StoreId;
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /reviews` — Full review ledger, newest-first.
///
/// # Errors
///
/// Returns [`DirectoryError::Persistence`] on snapshot read failure.
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    summary = "List reviews",
    description = "Returns the complete review ledger in its canonical newest-first order.",
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Record store failure", body = ErrorResponse),
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let reviews = state.directory.list_reviews().await?;
    let reviews: Vec<ReviewDto> = reviews.into_iter().map(ReviewDto::from).collect();
    Ok(Json(reviews))
}

/// `POST /reviews` — Append a review to the ledger.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidReview`] if `storeId`, `rating`, or
/// `text` is missing.
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    summary = "Submit a review",
    description = "Prepends a review to the ledger. The reviewer name defaults to \"Guest User\". The store id is not checked against the registry; a dangling review is tolerated.",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review recorded", body = ReviewDto),
        (status = 400, description = "Missing storeId, rating, or text", body = ErrorResponse),
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let (store_id, rating, text, user) = parse_review(req)?;
    let review = state.directory.add_review(store_id, rating, text, user).await?;
    Ok((StatusCode::CREATED, Json(ReviewDto::from(review))))
}

/// Presence validation for review submissions. A zero `storeId` or `rating`
/// is rejected as missing, not as out of range.
fn parse_review(
    req: CreateReviewRequest,
) -> Result<(StoreId, u32, String, Option<String>), DirectoryError> {
    let store_id = req
        .store_id
        .filter(|id| *id != 0)
        .ok_or(DirectoryError::InvalidReview)?;
    let rating = req
        .rating
        .filter(|r| *r != 0)
        .ok_or(DirectoryError::InvalidReview)?;
    let text = req
        .text
        .filter(|t| !t.is_empty())
        .ok_or(DirectoryError::InvalidReview)?;
    let user = req.user.filter(|u| !u.is_empty());
    Ok((StoreId::from(store_id), rating, text, user))
}

/// Review routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reviews", get(list_reviews).post(create_review))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn request(store_id: Option<u64>, rating: Option<u32>, text: Option<&str>) -> CreateReviewRequest {
        CreateReviewRequest {
            store_id,
            rating,
            text: text.map(str::to_string),
            user: None,
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let parsed = parse_review(request(Some(5), Some(4), Some("Great")));
        assert!(parsed.is_ok());
    }

    #[test]
    fn rejects_missing_rating() {
        let parsed = parse_review(request(Some(5), None, Some("Great")));
        assert!(matches!(parsed, Err(DirectoryError::InvalidReview)));
    }

    #[test]
    fn rejects_zero_rating_as_missing() {
        let parsed = parse_review(request(Some(5), Some(0), Some("Great")));
        assert!(matches!(parsed, Err(DirectoryError::InvalidReview)));
    }

    #[test]
    fn rejects_empty_text() {
        let parsed = parse_review(request(Some(5), Some(4), Some("")));
        assert!(matches!(parsed, Err(DirectoryError::InvalidReview)));
    }

    #[test]
    fn empty_user_becomes_none() {
        let mut req = request(Some(5), Some(4), Some("Great"));
        req.user = Some(String::new());
        let Ok((_, _, _, user)) = parse_review(req) else {
            panic!("expected valid submission");
        };
        assert_eq!(user, None);
    }
}
