// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
///
/// Every failure leaving the service is rendered as
/// `{ "statusCode": <number>, "message": <string | string[]> }`.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    /// Field validation failures, one message per violated rule, in rule
    /// declaration order.
    Validation(Vec<String>),
    /// Malformed document identifier in a path parameter.
    IdValidation,

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Validation(_) => 400,
            ApiError::IdValidation => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let message = match self {
            ApiError::Validation(messages) => json!(messages),
            ApiError::IdValidation => json!(crate::types::ID_VALIDATION_ERROR),
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => json!(msg),
        };

        json!({
            "statusCode": self.status_code(),
            "message": message,
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(messages: Vec<impl Into<String>>) -> Self {
        ApiError::Validation(messages.into_iter().map(Into::into).collect())
    }

    pub fn id_validation() -> Self {
        ApiError::IdValidation
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(crate::types::UNAUTHORIZED.to_string())
    }

    pub fn unauthorized_with(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<crate::database::manager::DatabaseError> for ApiError {
    fn from(err: crate::database::manager::DatabaseError) -> Self {
        match err {
            crate::database::manager::DatabaseError::ConfigMissing(_) => {
                tracing::error!("Database configuration error: {}", err);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            crate::database::manager::DatabaseError::MalformedDocument(msg) => {
                // A stored document that no longer matches the model
                tracing::error!("Malformed document: {}", msg);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            crate::database::manager::DatabaseError::MalformedId(_) => {
                // Should have been caught by the id guard before persistence
                ApiError::id_validation()
            }
            crate::database::manager::DatabaseError::Mongo(driver_err) => {
                // Log the real error but return a generic message
                tracing::error!("MongoDB driver error: {}", driver_err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

impl From<crate::services::review_service::ReviewError> for ApiError {
    fn from(err: crate::services::review_service::ReviewError) -> Self {
        use crate::services::review_service::ReviewError;
        match err {
            ReviewError::Validation(messages) => ApiError::validation(messages),
            ReviewError::NotFound(msg) => ApiError::not_found(msg),
            ReviewError::Store(db) => db.into(),
        }
    }
}

impl From<crate::services::product_service::ProductError> for ApiError {
    fn from(err: crate::services::product_service::ProductError) -> Self {
        use crate::services::product_service::ProductError;
        match err {
            ProductError::Invalid(msg) => ApiError::bad_request(msg),
            ProductError::NotFound(msg) => ApiError::not_found(msg),
            ProductError::Store(db) => db.into(),
        }
    }
}

impl From<crate::services::auth_service::AuthError> for ApiError {
    fn from(err: crate::services::auth_service::AuthError) -> Self {
        use crate::services::auth_service::AuthError;
        match err {
            AuthError::AlreadyRegistered => ApiError::bad_request(crate::types::ALREADY_REGISTERED),
            AuthError::UserNotFound => ApiError::unauthorized_with(crate::types::USER_NOT_FOUND),
            AuthError::WrongPassword => ApiError::unauthorized_with(crate::types::WRONG_PASSWORD),
            AuthError::Token(e) => {
                tracing::error!("JWT issuance error: {}", e);
                ApiError::internal_server_error("Failed to issue token")
            }
            AuthError::Store(db) => db.into(),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(messages) => write!(f, "{}", messages.join(", ")),
            ApiError::IdValidation => write!(f, "{}", crate::types::ID_VALIDATION_ERROR),
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
