use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::database::models::{CreateProductDto, Product};
use crate::error::ApiError;
use crate::extract::Json;
use crate::services::ProductService;
use crate::AppState;

/// POST /product/create - add a catalog product
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateProductDto>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProductService::new(state.products.clone(), state.reviews.clone());
    let product = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /product/:id - delete a product and sweep its reviews
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let service = ProductService::new(state.products.clone(), state.reviews.clone());
    Ok(Json(service.delete(&id).await?))
}
