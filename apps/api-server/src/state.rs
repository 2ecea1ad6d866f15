//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::{Clock, PostRepository, SystemClock};
use blog_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mongodb")]
use blog_infra::database::{DatabaseConnections, MongoPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub clock: Arc<dyn Clock>,
    #[cfg(feature = "mongodb")]
    pub db: Option<DatabaseConnections>,
}

impl AppState {
    /// Build state around an existing repository and clock.
    pub fn new(posts: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            posts,
            clock,
            #[cfg(feature = "mongodb")]
            db: None,
        }
    }

    /// Connect to the configured store, or fall back to in-memory posts when none is configured.
    pub async fn init(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        #[cfg(feature = "mongodb")]
        {
            if let Some(config) = db_config {
                let connections = DatabaseConnections::init(config).await?;
                let repo = Arc::new(MongoPostRepository::new(&connections));

                tracing::info!("Application state initialized");
                return Ok(Self {
                    posts: repo,
                    clock: Arc::new(SystemClock),
                    db: Some(connections),
                });
            }
        }

        #[cfg(not(feature = "mongodb"))]
        let _ = db_config;

        tracing::warn!("No document store configured. Running with in-memory posts.");
        Ok(Self::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(SystemClock),
        ))
    }

    /// Release store connections.
    pub async fn shutdown(self) {
        #[cfg(feature = "mongodb")]
        {
            if let Some(db) = self.db {
                db.client.shutdown().await;
                tracing::info!("Database connection closed");
            }
        }
    }
}
