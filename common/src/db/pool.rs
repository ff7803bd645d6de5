// PostgreSQL connection pool

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Postgres;
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::Settings;
use crate::errors::StoreError;

/// Database connection pool wrapper.
///
/// The pool is built from the connection string named by the database
/// section of the settings; resolution fails fast when the name is
/// absent or empty. Request handlers acquire one connection per
/// operation and release it on every exit path when it drops.
#[derive(Debug, Clone)]
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Create a new database connection pool
    ///
    /// # Errors
    /// Returns `StoreError::Configuration` when the named connection
    /// string does not resolve, `StoreError::ConnectionFailed` when the
    /// store is unreachable.
    #[instrument(skip(settings), fields(connection_name = %settings.database.connection_name))]
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        info!("Initializing database connection pool");

        let url = settings.connection_string(&settings.database.connection_name)?;
        let config = &settings.database;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect(url)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create database pool");
                StoreError::ConnectionFailed(e.to_string())
            })?;

        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connection pool initialized successfully"
        );

        Ok(Self { pool })
    }

    /// Pool handle that defers connecting until first use.
    ///
    /// The named connection string is still resolved eagerly, so a
    /// missing configuration entry fails here rather than on first use.
    pub fn connect_lazy(settings: &Settings) -> Result<Self, StoreError> {
        let url = settings.connection_string(&settings.database.connection_name)?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .min_connections(settings.database.min_connections)
            .acquire_timeout(Duration::from_secs(
                settings.database.connect_timeout_seconds,
            ))
            .connect_lazy(url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Acquire a connection scoped to one request's call sequence.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, StoreError> {
        self.pool.acquire().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to acquire database connection");
            StoreError::ConnectionFailed(e.to_string())
        })
    }

    /// Perform a health check on the database connection
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                StoreError::ConnectionFailed(e.to_string())
            })?;

        tracing::debug!("Database health check passed");
        Ok(())
    }

    /// Close the connection pool gracefully
    #[instrument(skip(self))]
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_lazy_pool_resolves_connection_name() {
        let settings = Settings::default();
        assert!(DbPool::connect_lazy(&settings).is_ok());
    }

    #[test]
    fn test_lazy_pool_fails_for_missing_name() {
        let mut settings = Settings::default();
        settings.database.connection_name = "missing".to_string();
        let err = DbPool::connect_lazy(&settings).unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));
    }

    #[tokio::test]
    #[ignore] // Requires running PostgreSQL instance
    async fn test_pool_creation() {
        let settings = Settings::default();
        let result = DbPool::connect(&settings).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires running PostgreSQL instance
    async fn test_health_check() {
        let settings = Settings::default();
        let pool = DbPool::connect(&settings).await.unwrap();
        assert!(pool.health_check().await.is_ok());
    }
}
