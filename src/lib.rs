// AutomateAI Backend - Mock Execution Gateway
// Stands in for the agent execution backend while the MVP Agent Builder frontend is developed

//! # AutomateAI Backend Library
//!
//! This crate exposes the HTTP contract the agent builder frontend talks to:
//! agent execution, single LLM calls and a health check. Every answer is a
//! canned payload chosen by a coarse keyword match. Nothing is actually run.
//!
//! ## Core Components
//!
//! ### Domain Models
//! - [`AgentExecutionRequest`] / [`AgentExecutionResult`]: agent runs
//! - [`LLMCallRequest`] / [`LLMCallResult`]: single prompt completions
//!
//! ### Engine
//! - [`ExecutionGateway`]: the seam a real runtime will implement
//! - [`MockGateway`]: the canned implementation served today
//!
//! ### API
//! - [`GatewayServer`] / [`GatewayServerBuilder`]: axum router with CORS and
//!   request tracing
//!
//! **Usage Example:**
//! ```rust,no_run
//! use automateai_backend::{GatewayConfig, GatewayServer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let server = GatewayServer::new(GatewayConfig::default());
//! server.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Rust Learning Notes:
//!
//! ### Re-exports
//! `pub use` statements flatten the module tree, so callers write
//! `automateai_backend::MockGateway` instead of
//! `automateai_backend::engine::mock::MockGateway`.

// Request/response shapes
pub mod models;

// Keyword dispatch and the gateway trait
pub mod engine;

// Layered configuration (defaults, file, environment)
pub mod config;

// HTTP surface
pub mod api;

pub use models::{
    AgentDescriptor, AgentExecutionRequest, AgentExecutionResult, AgentSummary, ExecutionOutput,
    LLMCallRequest, LLMCallResult, LLMResponseContent,
};

pub use engine::{ExecutionGateway, MockGateway, PromptKind};

pub use self::config::{CorsConfig, GatewayConfig, ServerConfig, SettingsError};

pub use api::{create_default_server, GatewayServer, GatewayServerBuilder};

use thiserror::Error;

/// Errors raised while producing a gateway response
///
/// ## Rust Learning Notes:
///
/// ### One variant on purpose
/// The frontend contract has exactly one failure kind per endpoint: an
/// internal error surfaced as HTTP 500. The HTTP layer adds the
/// endpoint-specific wording when it turns this into a response.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Anything that aborted the request
    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Internal(err.to_string())
    }
}

/// Type alias for Results that use our custom error type
pub type Result<T> = std::result::Result<T, GatewayError>;
