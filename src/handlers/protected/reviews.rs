use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::database::models::Review;
use crate::error::ApiError;
use crate::services::ReviewService;
use crate::AppState;

/// GET /review/byProduct/:productId - all reviews for a product, creation order
pub async fn by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = ReviewService::new(state.reviews.clone())
        .find_by_product(&product_id)
        .await?;
    Ok(Json(reviews))
}

/// DELETE /review/:id - delete one review, returns the deleted document
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    let review = ReviewService::new(state.reviews.clone()).delete_by_id(&id).await?;
    Ok(Json(review))
}

/// DELETE /review/byProduct/:productId - bulk delete, one store call
pub async fn delete_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = ReviewService::new(state.reviews.clone())
        .delete_by_product(&product_id)
        .await?;
    Ok(Json(json!({ "deletedCount": deleted })))
}
