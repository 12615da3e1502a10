// Request and response shapes of the mock execution gateway
// These are the wire types the real backend must eventually accept and return

//! # Domain Models Module
//!
//! Two request shapes and two response shapes. None of them outlive a single
//! HTTP request: there is no storage and no shared mutable state.
//!
//! ## Rust Learning Notes:
//!
//! ### Open-ended JSON mappings
//! The frontend sends agents as free-form objects. Instead of passing a raw
//! `serde_json::Value` around, the few keys we read are typed fields and the
//! rest lands in a `#[serde(flatten)]` map, so nothing the caller sent is lost.
//!
//! ### Untagged enums
//! `#[serde(untagged)]` lets one field hold different JSON shapes (a string or
//! an object) while the Rust side stays a proper enum.

// Agent execution request/result types
pub mod agent;

// LLM call request/result types
pub mod llm;

pub use agent::{
    AgentDescriptor, AgentExecutionRequest, AgentExecutionResult, AgentSummary, ExecutionOutput,
};
pub use llm::{LLMCallRequest, LLMCallResult, LLMResponseContent};
