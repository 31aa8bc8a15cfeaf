use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::ProductWithRating;
use crate::error::ApiError;
use crate::services::ProductService;
use crate::AppState;

/// GET /product/:id - product with its review aggregate
///
/// The rating mean and count are recomputed from the review collection on
/// every call; nothing is cached or stored.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductWithRating>, ApiError> {
    let service = ProductService::new(state.products.clone(), state.reviews.clone());
    Ok(Json(service.find_with_rating(&id).await?))
}
