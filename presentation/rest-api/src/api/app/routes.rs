use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Root endpoint response
#[derive(Debug, Clone, Object)]
pub struct AppInfoResponse {
    /// Application name
    pub name: String,
    /// Service version
    pub version: String,
}

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Application-level endpoints that do not belong to a resource.
pub struct AppApi {
    name: String,
}

impl AppApi {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[OpenApi]
impl AppApi {
    /// Service information
    ///
    /// Returns the application name and version.
    #[oai(path = "/", method = "get", tag = "ApiTags::App")]
    async fn index(&self) -> Json<AppInfoResponse> {
        Json(AppInfoResponse {
            name: self.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Health check endpoint
    ///
    /// Liveness check for orchestrators and load balancers. Does not touch
    /// the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::App")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
