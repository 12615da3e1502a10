// HTTP-only response types
// Request/response bodies of the gateway operations live in crate::models

use serde::{Deserialize, Serialize};

use crate::config::CorsConfig;

pub const HEALTH_STATUS: &str = "healthy";
pub const HEALTH_MESSAGE: &str = "AutomateAI Backend is running!";
pub const SERVICE_NAME: &str = "mvp-agent-builder-backend";

/// GET /health response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy"; nothing real is checked behind it
    pub status: String,
    pub version: String,
    pub message: String,
    pub service: String,
    pub cors_enabled: bool,
    pub frontend_ports: Vec<String>,
}

impl HealthResponse {
    pub fn from_cors(cors: &CorsConfig) -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            message: HEALTH_MESSAGE.to_string(),
            service: SERVICE_NAME.to_string(),
            cors_enabled: cors.enabled,
            frontend_ports: cors.frontend_ports(),
        }
    }
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
