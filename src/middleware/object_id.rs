use std::collections::HashMap;

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;

/// Identifier format guard for routes whose path parameters are document ids.
/// Every captured parameter must parse as a 24-char hex ObjectId; otherwise
/// the request is rejected with 400 ID_VALIDATION_ERROR before the handler
/// runs. This is a syntactic check only - it says nothing about whether the
/// referenced document exists.
pub async fn object_id_guard(
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    for (name, value) in &params {
        if ObjectId::parse_str(value).is_err() {
            tracing::debug!("Malformed id in path parameter {}: {:?}", name, value);
            return Err(ApiError::id_validation());
        }
    }

    Ok(next.run(request).await)
}
