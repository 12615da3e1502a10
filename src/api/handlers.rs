// Gateway REST API handlers
// Thin adapters: parse the body, call the ExecutionGateway, serialize the answer

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::error::ApiError;
use super::types::HealthResponse;
use crate::config::GatewayConfig;
use crate::engine::ExecutionGateway;
use crate::models::{AgentExecutionRequest, AgentExecutionResult, LLMCallRequest, LLMCallResult};

/// Shared application state for the gateway API
#[derive(Clone)]
pub struct GatewayState {
    pub gateway: Arc<dyn ExecutionGateway>,
    pub config: Arc<GatewayConfig>,
}

impl GatewayState {
    pub fn new(gateway: Arc<dyn ExecutionGateway>, config: GatewayConfig) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }
}

/// Landing page - GET /
pub async fn root(State(state): State<GatewayState>) -> Html<String> {
    Html(render_landing_page(&state.config))
}

fn render_landing_page(config: &GatewayConfig) -> String {
    // Normalized origins are plain scheme://host[:port], safe to embed as-is
    let origins = config
        .cors
        .normalized_origins()
        .unwrap_or_default()
        .iter()
        .map(|origin| format!("<li>{}</li>", origin))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>AutomateAI Backend - MVP Agent Builder</title>
</head>
<body>
    <h1>AutomateAI Backend</h1>
    <p>Backend simples para MVP Agent Builder</p>
    <p>Backend rodando na porta {port} - Pronto para integração!</p>
    <h3>Endpoints Disponíveis:</h3>
    <ul>
        <li><strong>GET /health</strong> - Health check do sistema</li>
        <li><strong>POST /api/agents/execute</strong> - Executar agentes</li>
        <li><strong>POST /api/llm/call</strong> - Chamadas para LLMs</li>
    </ul>
    <h3>Frontends autorizados (CORS):</h3>
    <ul>
{origins}
    </ul>
</body>
</html>"#,
        port = config.server.port,
        origins = origins,
    )
}

/// Health check endpoint - GET /health
pub async fn health_check(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_cors(&state.config.cors))
}

/// Agent execution endpoint - POST /api/agents/execute
pub async fn execute_agent(
    State(state): State<GatewayState>,
    payload: Result<Json<AgentExecutionRequest>, JsonRejection>,
) -> Result<Json<AgentExecutionResult>, ApiError> {
    let Json(request) = payload?;

    info!(
        "🚀 POST /api/agents/execute for agent {} (user {})",
        request.agent.id_text(),
        request.user_id()
    );
    debug!("📋 Input keys: {:?}", request.input.keys().collect::<Vec<_>>());

    let result = state.gateway.execute_agent(request).await.map_err(|e| {
        error!("❌ Agent execution failed: {}", e);
        ApiError::AgentExecution(e)
    })?;

    info!("✅ Execution {} completed", result.execution_id);
    Ok(Json(result))
}

/// LLM call endpoint - POST /api/llm/call
pub async fn llm_call(
    State(state): State<GatewayState>,
    payload: Result<Json<LLMCallRequest>, JsonRejection>,
) -> Result<Json<LLMCallResult>, ApiError> {
    let Json(request) = payload?;

    info!(
        "🧠 POST /api/llm/call for {}/{}",
        request.provider, request.model
    );

    let result = state.gateway.call_llm(request).await.map_err(|e| {
        error!("❌ LLM call failed: {}", e);
        ApiError::LlmCall(e)
    })?;

    Ok(Json(result))
}

/// Error handler for invalid routes
pub async fn not_found() -> impl IntoResponse {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_lists_port_and_origins() {
        let page = render_landing_page(&GatewayConfig::default());
        assert!(page.contains("porta 8000"));
        assert!(page.contains("<li>http://localhost:3002</li>"));
        assert!(page.contains("POST /api/llm/call"));
    }

    #[test]
    fn test_landing_page_renders_normalized_origins() {
        let mut config = GatewayConfig::default();
        config.cors.allowed_origins = vec!["http://localhost:5173/<script>".to_string()];

        let page = render_landing_page(&config);
        assert!(page.contains("<li>http://localhost:5173</li>"));
        assert!(!page.contains("<script>"));
    }
}
