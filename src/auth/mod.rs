use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Login email of the authenticated user.
    pub sub: String,
    /// Hex ObjectId of the user document.
    pub user_id: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String, user_id: String) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: email,
            user_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

pub fn generate_jwt(claims: Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Digest a password for storage/comparison. The credential provider contract
/// only requires that equal passwords map to equal digests.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_digest_is_stable_hex() {
        let a = hash_password("secret-password");
        let b = hash_password("secret-password");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(hash_password("other"), a);
    }

    #[test]
    fn claims_carry_expiry_after_issuance() {
        let claims = Claims::new("user@example.com".into(), "0".repeat(24));
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.sub, "user@example.com");
    }
}
