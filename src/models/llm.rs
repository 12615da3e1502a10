use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// POST /api/llm/call request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LLMCallRequest {
    pub provider: String,
    pub model: String,
    pub prompt: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl LLMCallRequest {
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            prompt: prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Body of a simulated completion: plain text or a structured record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LLMResponseContent {
    Text(String),
    Structured(Value),
}

impl LLMResponseContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LLMResponseContent::Text(text) => Some(text),
            LLMResponseContent::Structured(_) => None,
        }
    }
}

/// POST /api/llm/call response body
///
/// `response` and `content` always carry the same payload; older callers read
/// one, newer ones the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LLMCallResult {
    pub response: LLMResponseContent,
    pub content: LLMResponseContent,
    pub confidence: f64,
    pub tokens_used: usize,
    pub provider: String,
    pub model: String,
}
