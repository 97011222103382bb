mod sqlite;

use async_trait::async_trait;

pub use sqlite::Database;

/// A laboratory as shown in the public directory, with its visible child counts
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LaboratorySummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo: Option<String>,
    pub location: String,
    pub email: String,
    /// Posts belonging to the lab with `published = 1`
    pub posts_count: i64,
    /// Events belonging to the lab with `is_public = 1`
    pub events_count: i64,
}

impl LaboratorySummary {
    /// Logo reference, treating an empty string the same as no logo
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }

    pub fn href(&self) -> String {
        format!("/laboratorio/{}", self.slug)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query laboratories: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Database integrity check failed: {0}")]
    Integrity(String),
}

#[async_trait]
pub trait LaboratoryData: Send + Sync {
    /// Every laboratory with `is_active = 1`, ordered by name then id.
    ///
    /// Always reads from the store; results are never cached between calls.
    async fn active_laboratories(&self) -> Result<Vec<LaboratorySummary>, Error>;
    /// Connectivity and integrity probe for the backing store
    async fn health_check(&self) -> Result<(), Error>;
}
