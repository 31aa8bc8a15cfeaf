use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::auth::{generate_jwt, hash_password, Claims, JwtError};
use crate::database::models::{AuthDto, User, UserProfile};
use crate::database::{DatabaseError, UserStore};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("account already registered")]
    AlreadyRegistered,
    #[error("user not found")]
    UserNotFound,
    #[error("wrong password")]
    WrongPassword,
    #[error("token error: {0}")]
    Token(JwtError),
    #[error(transparent)]
    Store(#[from] DatabaseError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Opaque credential provider: registers accounts and issues bearer tokens.
/// Digest comparison and token internals stay behind this boundary.
pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn register(&self, dto: AuthDto) -> Result<UserProfile, AuthError> {
        if self.users.find_by_email(&dto.login).await?.is_some() {
            return Err(AuthError::AlreadyRegistered);
        }

        let user = User {
            id: ObjectId::new().to_hex(),
            email: dto.login,
            password_hash: hash_password(&dto.password),
            created_at: Utc::now(),
        };

        Ok(self.users.insert(user).await?.into())
    }

    pub async fn login(&self, dto: AuthDto) -> Result<TokenResponse, AuthError> {
        let user = self
            .users
            .find_by_email(&dto.login)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.password_hash != hash_password(&dto.password) {
            return Err(AuthError::WrongPassword);
        }

        let claims = Claims::new(user.email, user.id);
        let token = generate_jwt(claims).map_err(AuthError::Token)?;
        Ok(TokenResponse { access_token: token })
    }
}
