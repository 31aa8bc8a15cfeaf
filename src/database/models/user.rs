use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. The password digest never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "passwordHash", skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Credentials payload for both /auth/register and /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthDto {
    pub login: String,
    pub password: String,
}

/// Public view of an account, safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
