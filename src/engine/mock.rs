// Canned implementation of the execution gateway
// Stands in for the real agent runtime while the frontend is being built

use async_trait::async_trait;
use serde_json::Map;
use tracing::{debug, info};

use super::fixtures::{
    CONTRACT_ANALYSIS, CONTRACT_REPORT_HTML, CONTRACT_REPORT_STATUS, GENERIC_RESULT,
    MOCK_CONFIDENCE, MOCK_EXECUTION_TIME_MS, MOCK_TIMESTAMP,
};
use super::keywords::{
    agent_matches_contract, classify_prompt, estimate_tokens, execution_id_for, truncate_chars,
    PromptKind, PROMPT_ECHO_CHARS,
};
use super::ExecutionGateway;
use crate::models::{
    AgentExecutionRequest, AgentExecutionResult, ExecutionOutput, LLMCallRequest, LLMCallResult,
    LLMResponseContent,
};
use crate::Result;

/// Gateway that answers every request with deterministic canned payloads
#[derive(Debug, Clone, Default)]
pub struct MockGateway;

impl MockGateway {
    pub fn new() -> Self {
        Self
    }

    fn simulated_answer(request: &LLMCallRequest) -> LLMResponseContent {
        match classify_prompt(&request.prompt) {
            PromptKind::ContractAnalysis => LLMResponseContent::Structured(CONTRACT_ANALYSIS.clone()),
            PromptKind::HtmlReport => LLMResponseContent::Text(CONTRACT_REPORT_HTML.to_string()),
            PromptKind::Echo => LLMResponseContent::Text(format!(
                "Resposta simulada do {}/{} para: {}...",
                request.provider,
                request.model,
                truncate_chars(&request.prompt, PROMPT_ECHO_CHARS)
            )),
        }
    }
}

#[async_trait]
impl ExecutionGateway for MockGateway {
    async fn execute_agent(&self, request: AgentExecutionRequest) -> Result<AgentExecutionResult> {
        let AgentExecutionRequest { agent, input, .. } = &request;
        let execution_id = execution_id_for(agent);

        let output = if agent_matches_contract(agent)? {
            debug!("Agent {} matched contract keywords", agent.id_text());
            ExecutionOutput::ContractReport {
                report_html: CONTRACT_REPORT_HTML.to_string(),
                status: CONTRACT_REPORT_STATUS.to_string(),
                processed_data: input.clone(),
                timestamp: MOCK_TIMESTAMP.to_string(),
            }
        } else {
            ExecutionOutput::Generic {
                result: GENERIC_RESULT.to_string(),
                processed_input: input.clone(),
                agent_name: agent.display_name(),
                timestamp: MOCK_TIMESTAMP.to_string(),
            }
        };

        info!(
            "🎭 Simulated execution {} for agent {} (user {})",
            execution_id,
            agent.id_text(),
            request.user_id()
        );

        Ok(AgentExecutionResult {
            execution_id,
            success: true,
            output,
            execution_time: MOCK_EXECUTION_TIME_MS,
            node_results: Map::new(),
            agent: agent.summary(),
        })
    }

    async fn call_llm(&self, request: LLMCallRequest) -> Result<LLMCallResult> {
        debug!(
            "LLM call {}/{} temperature={} max_tokens={}",
            request.provider, request.model, request.temperature, request.max_tokens
        );

        let answer = Self::simulated_answer(&request);
        let tokens_used = estimate_tokens(&request.prompt);

        info!(
            "🎭 Simulated {}/{} answer ({} tokens)",
            request.provider, request.model, tokens_used
        );

        Ok(LLMCallResult {
            response: answer.clone(),
            content: answer,
            confidence: MOCK_CONFIDENCE,
            tokens_used,
            provider: request.provider,
            model: request.model,
        })
    }
}
