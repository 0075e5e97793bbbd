use anyhow::Context;
use persistence::db::{
    DEFAULT_MIGRATIONS_PATH, DatabaseConfig, create_postgres_pool, run_migrations,
};
use sqlx::PgPool;
use std::time::Duration;

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: String,
    pub run_migrations: bool,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: Pool acquire timeout (default: 30)
    /// - DATABASE_MIGRATIONS_PATH: Migrations directory (default: bundled migrations)
    /// - DATABASE_RUN_MIGRATIONS: Apply migrations at startup (default: true)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => 5,
        };
        let acquire_timeout_secs: u64 = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_ACQUIRE_TIMEOUT_SECS: {raw}"))?,
            None => 30,
        };
        let run_migrations = match lookup("DATABASE_RUN_MIGRATIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_RUN_MIGRATIONS: {raw}"))?,
            None => true,
        };

        Ok(Self {
            url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            migrations_path: lookup("DATABASE_MIGRATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
            run_migrations,
        })
    }
}

/// Initialize the database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::new(settings.url.clone())
        .with_max_connections(settings.max_connections)
        .with_acquire_timeout(settings.acquire_timeout);
    let pool = create_postgres_pool(&config).await?;

    if settings.run_migrations {
        run_migrations(&pool, &settings.migrations_path).await?;
    } else {
        tracing::info!("Skipping migrations (DATABASE_RUN_MIGRATIONS=false)");
    }

    Ok(pool)
}
