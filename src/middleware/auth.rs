use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::Claims;
use crate::config;
use crate::error::ApiError;

/// Authenticated user context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
    pub user_id: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            user_id: claims.user_id,
        }
    }
}

/// Bearer authentication guard. Any failure - missing header, malformed
/// scheme, invalid or expired token - is reported to the client as a bare
/// 401 "Unauthorized"; the concrete reason is only traced. On success the
/// request proceeds with an `AuthUser` extension; no per-resource ownership
/// checks happen here.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_from_headers(&headers).map_err(|reason| {
        tracing::debug!("Rejected request: {}", reason);
        ApiError::unauthorized()
    })?;

    let claims = validate_jwt(&token).map_err(|reason| {
        tracing::debug!("Rejected token: {}", reason);
        ApiError::unauthorized()
    })?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "invalid Authorization header encoding".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Validate the token against the configured secret and extract claims
fn validate_jwt(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err("JWT secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("invalid JWT token: {}", e))?;

    Ok(token_data.claims)
}
