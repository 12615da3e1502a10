// AutomateAI Execution Engine
// The contract between the HTTP layer and whatever actually runs agents

//! # Execution Engine Module
//!
//! The HTTP layer never decides what an agent "returns". It hands typed requests
//! to an [`ExecutionGateway`] and serializes whatever comes back. Today the only
//! implementation is [`MockGateway`], which answers with canned payloads picked
//! by keyword matching. A real runtime plugs in behind the same trait.
//!
//! ## Engine Components
//!
//! ### Keyword dispatch (`keywords` module)
//! - Case-insensitive substring tests over the stringified agent or prompt
//! - Token estimation and prompt truncation helpers
//! - Execution id derivation
//!
//! ### Fixtures (`fixtures` module)
//! - The contract-analysis HTML report and structured analysis record
//! - Fixed constants (execution time, confidence, timestamp)
//!
//! ### Mock gateway (`mock` module)
//! - Stateless, deterministic implementation of [`ExecutionGateway`]
//!
//! ## Rust Learning Notes:
//!
//! ### Trait objects behind `Arc`
//! Handlers receive `Arc<dyn ExecutionGateway>`, so the gateway is built once
//! at startup and shared across concurrent requests without locks. The
//! `Send + Sync` bounds are what make that sharing legal.
//!
//! ### `async_trait`
//! Async functions in traits need boxing to be object safe; the
//! `#[async_trait]` macro does that rewrite for us.

pub mod fixtures;
pub mod keywords;
pub mod mock;

use async_trait::async_trait;

use crate::models::{AgentExecutionRequest, AgentExecutionResult, LLMCallRequest, LLMCallResult};
use crate::Result;

pub use keywords::PromptKind;
pub use mock::MockGateway;

/// Operations the agent builder frontend relies on
#[async_trait]
pub trait ExecutionGateway: Send + Sync {
    /// Run an agent against an input payload
    async fn execute_agent(&self, request: AgentExecutionRequest) -> Result<AgentExecutionResult>;

    /// Send a single prompt to a provider/model pair
    async fn call_llm(&self, request: LLMCallRequest) -> Result<LLMCallResult>;
}
