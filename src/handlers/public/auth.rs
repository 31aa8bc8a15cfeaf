use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::database::models::AuthDto;
use crate::error::ApiError;
use crate::extract::Json;
use crate::services::AuthService;
use crate::AppState;

/// POST /auth/register - create an account, returns the public profile
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<AuthDto>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = AuthService::new(state.users.clone()).register(dto).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// POST /auth/login - verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<AuthDto>,
) -> Result<impl IntoResponse, ApiError> {
    let token = AuthService::new(state.users.clone()).login(dto).await?;
    Ok(Json(token))
}
