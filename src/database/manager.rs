use mongodb::bson::doc;
use mongodb::{Client, Database};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Malformed document identifier: {0}")]
    MalformedId(String),

    #[error("Malformed stored document: {0}")]
    MalformedDocument(String),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

impl From<mongodb::bson::document::ValueAccessError> for DatabaseError {
    fn from(err: mongodb::bson::document::ValueAccessError) -> Self {
        DatabaseError::MalformedDocument(err.to_string())
    }
}

/// Centralized MongoDB client manager. The driver owns connection pooling;
/// this only guarantees a single client per process.
pub struct DatabaseManager;

static CLIENT: OnceCell<Client> = OnceCell::const_new();

impl DatabaseManager {
    async fn client() -> Result<&'static Client, DatabaseError> {
        CLIENT
            .get_or_try_init(|| async {
                let url = &config::config().database.url;
                if url.is_empty() {
                    return Err(DatabaseError::ConfigMissing("MONGO_URL"));
                }
                let client = Client::with_uri_str(url).await?;
                info!("Created MongoDB client for {}", url);
                Ok(client)
            })
            .await
    }

    /// Handle to the configured application database
    pub async fn database() -> Result<Database, DatabaseError> {
        let client = Self::client().await?;
        Ok(client.database(&config::config().database.database))
    }

    /// Pings the server to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let db = Self::database().await?;
        db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
