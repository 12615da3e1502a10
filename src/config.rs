// Gateway configuration
// Layered: built-in defaults, then an optional TOML file, then GATEWAY__* environment variables

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Config file looked up when no path is given; it may be absent
pub const DEFAULT_CONFIG_FILE: &str = "gateway.toml";

/// Prefix for environment overrides, e.g. `GATEWAY__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "GATEWAY";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid CORS origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

/// Listen address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin policy for the frontend dev servers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![
                "http://localhost:3002".to_string(),
                "http://localhost:3000".to_string(),
            ],
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Origins in the exact form browsers send them (`scheme://host[:port]`)
    pub fn normalized_origins(&self) -> Result<Vec<String>, SettingsError> {
        self.allowed_origins
            .iter()
            .map(|origin| parse_origin(origin).map(|url| url.origin().ascii_serialization()))
            .collect()
    }

    /// Ports of the allowed origins, reported by the health check
    pub fn frontend_ports(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .filter_map(|origin| parse_origin(origin).ok())
            .filter_map(|url| url.port_or_known_default())
            .map(|port| port.to_string())
            .collect()
    }
}

fn parse_origin(origin: &str) -> Result<Url, SettingsError> {
    let invalid = |reason: String| SettingsError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };

    let url = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

/// Complete gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    /// Fallback log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load defaults, then `path` (or `gateway.toml` if present), then the environment
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(
        path: Option<&Path>,
        env_prefix: &str,
    ) -> Result<Self, SettingsError> {
        // An explicit path must exist; the default file is optional.
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: GatewayConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.cors.normalized_origins().map(|_| ())
    }
}
