use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{path::Path, str::FromStr, time::Duration};
use tokio::fs::create_dir_all;

use super::{Error, LaboratoryData, LaboratorySummary};

/// Active laboratories with their visible post/event counts.
///
/// Counts are correlated subqueries so the whole listing is one round trip.
/// `ORDER BY name` uses SQLite's default BINARY collation; `id` breaks ties.
const ACTIVE_LABORATORIES: &str = "
    SELECT l.id, l.name, l.slug, l.description, l.logo, l.location, l.email,
           (SELECT COUNT(*) FROM posts p
             WHERE p.laboratory_id = l.id AND p.published = 1) AS posts_count,
           (SELECT COUNT(*) FROM events e
             WHERE e.laboratory_id = l.id AND e.is_public = 1) AS events_count
    FROM laboratories l
    WHERE l.is_active = 1
    ORDER BY l.name ASC, l.id ASC";

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(path: &str) -> Result<Self> {
        let db_path = format!("{}/laboratories.sqlite", path);

        if let Some(parent) = Path::new(&db_path).parent() {
            create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create database directory: {parent:?}"))?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))?
            .create_if_missing(true)
            .pragma("journal_mode", "WAL")
            .pragma("synchronous", "NORMAL")
            .pragma("busy_timeout", "5000")
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .context("Failed to create database connection pool")?;

        let db = Self { pool };

        db.run_migrations()
            .await
            .context("Failed to run database migrations")?;
        info!("SQLite database initialized at: {}", db_path);

        Ok(db)
    }

    async fn run_migrations(&self) -> Result<(), Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Called once on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[async_trait]
impl LaboratoryData for Database {
    async fn active_laboratories(&self) -> Result<Vec<LaboratorySummary>, Error> {
        let labs = sqlx::query_as::<_, LaboratorySummary>(ACTIVE_LABORATORIES)
            .fetch_all(&self.pool)
            .await?;
        debug!("fetched {} active laboratories", labs.len());
        Ok(labs)
    }

    async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&self.pool)
            .await?;
        if result != "ok" {
            return Err(Error::Integrity(result));
        }

        Ok(())
    }
}
