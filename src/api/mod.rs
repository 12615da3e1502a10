// Gateway HTTP API module
// Serves the agent execution contract the MVP Agent Builder frontend talks to

pub mod error;
pub mod handlers;
pub mod types;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::config::{CorsConfig, GatewayConfig, SettingsError};
use crate::engine::{ExecutionGateway, MockGateway};
use handlers::{execute_agent, health_check, llm_call, not_found, root, GatewayState};

/// Build the CORS layer for the configured frontend origins
///
/// Methods and headers are mirrored from the preflight request: browsers
/// refuse a `*` wildcard when credentials are allowed.
pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer, SettingsError> {
    let origins = cors
        .normalized_origins()?
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(&origin).map_err(|e| SettingsError::InvalidOrigin {
                origin: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials))
}

/// Gateway API Server
pub struct GatewayServer {
    config: GatewayConfig,
    gateway: Arc<dyn ExecutionGateway>,
}

impl GatewayServer {
    /// Create a server backed by the mock gateway
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            gateway: Arc::new(MockGateway::new()),
        }
    }

    /// Create server with default configuration
    pub fn with_defaults() -> Self {
        Self::new(GatewayConfig::default())
    }

    /// Swap in another gateway implementation
    pub fn with_gateway(mut self, gateway: Arc<dyn ExecutionGateway>) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Create the Axum router with all gateway routes
    pub fn create_router(&self) -> Result<Router, SettingsError> {
        let state = GatewayState::new(self.gateway.clone(), self.config.clone());

        let api_router = Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
            .route("/api/agents/execute", post(execute_agent))
            .route("/api/llm/call", post(llm_call))
            // Fallback for unknown routes
            .fallback(not_found)
            .with_state(state);

        // Add CORS if enabled
        let api_router = if self.config.cors.enabled {
            api_router.layer(cors_layer(&self.config.cors)?)
        } else {
            api_router
        };

        Ok(api_router.layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<Body>| {
                info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            },
        )))
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.create_router()?;
        let address = self.config.server.address();
        let socket_addr = tokio::net::lookup_host(&address)
            .await?
            .next()
            .ok_or_else(|| format!("could not resolve {}", address))?;

        info!("🤖 AutomateAI mock gateway starting");
        info!("📡 Server address: http://{}", socket_addr);
        info!("🔗 API endpoints:");
        info!("   GET  http://{}/health", socket_addr);
        info!("   POST http://{}/api/agents/execute", socket_addr);
        info!("   POST http://{}/api/llm/call", socket_addr);
        info!("📋 Configuration:");
        info!("   CORS enabled: {}", self.config.cors.enabled);
        for origin in &self.config.cors.allowed_origins {
            info!("   🌐 Frontend origin: {}", origin);
        }

        axum::Server::bind(&socket_addr)
            .serve(app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("👋 Gateway stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => warn!("🛑 Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server just runs until killed.
            error!("Could not install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Builder pattern for the gateway server
pub struct GatewayServerBuilder {
    config: GatewayConfig,
    gateway: Option<Arc<dyn ExecutionGateway>>,
}

impl GatewayServerBuilder {
    pub fn new() -> Self {
        Self {
            config: GatewayConfig::default(),
            gateway: None,
        }
    }

    pub fn with_config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.config.server.host = host;
        self
    }

    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.config.cors.enabled = enabled;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.config.cors.allowed_origins = origins;
        self
    }

    pub fn with_gateway(mut self, gateway: Arc<dyn ExecutionGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn build(self) -> GatewayServer {
        let server = GatewayServer::new(self.config);

        match self.gateway {
            Some(gateway) => server.with_gateway(gateway),
            None => server,
        }
    }
}

impl Default for GatewayServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to create a server with default settings
pub fn create_default_server() -> GatewayServer {
    GatewayServerBuilder::new().build()
}
