use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::database::models::CreateReviewDto;
use crate::error::ApiError;
use crate::extract::Json;
use crate::services::ReviewService;
use crate::AppState;

/// POST /review/create - validate and persist a review
///
/// Deliberately unauthenticated: anyone may leave a review. Violating
/// payloads are rejected with the full ordered list of violations and never
/// reach the store.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, ApiError> {
    let review = ReviewService::new(state.reviews.clone()).create(dto).await?;
    Ok((StatusCode::CREATED, Json(review)))
}
