use super::{cors_config, database_config::DatabaseSettings, server_config::ServerConfig};
use poem::middleware::Cors;

const DEFAULT_APP_NAME: &str = "Product Catalog API";

pub struct AppConfig {
    pub name: String,
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub cors: Cors,
}

impl AppConfig {
    /// Environment variables:
    /// - APP_NAME: Display name served at `/` and in the OpenAPI document
    ///   (default: "Product Catalog API")
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            name: std::env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            server: ServerConfig::from_env(),
            database: DatabaseSettings::from_env()?,
            cors: cors_config::init_cors(),
        })
    }
}
