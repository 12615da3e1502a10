use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Fallback user id when the caller does not send one
pub const ANONYMOUS_USER: &str = "anonymous";

/// Fallback values used when echoing an agent back to the caller
pub const UNKNOWN_AGENT_ID: &str = "unknown";
pub const DEFAULT_AGENT_NAME: &str = "Agente";
pub const DEFAULT_AGENT_CATEGORY: &str = "geral";
pub const UNKNOWN_AGENT_NAME: &str = "Agente Desconhecido";

/// Caller-supplied agent description
///
/// Only `id`, `name` and `category` are ever read back. Every other key is kept
/// in `extra` so keyword matching still sees the full mapping.
///
/// `None` means the key was missing. A key sent as `null` is kept as
/// `Some(Value::Null)` and echoed back as `null`; fallbacks only cover
/// missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Value>,

    /// Any other agent attributes (nodes, prompts, description...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Only called when the key is present, so `null` becomes `Some(Value::Null)`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl AgentDescriptor {
    pub fn new(id: impl Into<Value>, name: impl Into<Value>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<Value>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The id rendered as text, `"unknown"` when absent
    ///
    /// String ids are used verbatim; any other JSON value (`null` included)
    /// uses its JSON text.
    pub fn id_text(&self) -> String {
        match &self.id {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN_AGENT_ID.to_string(),
        }
    }

    /// Summary echoed in every execution result
    pub fn summary(&self) -> AgentSummary {
        AgentSummary {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Value::from(UNKNOWN_AGENT_ID)),
            name: self
                .name
                .clone()
                .unwrap_or_else(|| Value::from(DEFAULT_AGENT_NAME)),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| Value::from(DEFAULT_AGENT_CATEGORY)),
        }
    }

    /// Name shown in the generic execution output
    pub fn display_name(&self) -> Value {
        self.name
            .clone()
            .unwrap_or_else(|| Value::from(UNKNOWN_AGENT_NAME))
    }
}

/// POST /api/agents/execute request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentExecutionRequest {
    pub agent: AgentDescriptor,
    pub input: Map<String, Value>,
    #[serde(default = "default_user_id")]
    pub user_id: Option<String>,
}

fn default_user_id() -> Option<String> {
    Some(ANONYMOUS_USER.to_string())
}

impl AgentExecutionRequest {
    pub fn new(agent: AgentDescriptor, input: Map<String, Value>) -> Self {
        Self {
            agent,
            input,
            user_id: default_user_id(),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Caller id, falling back to the anonymous sentinel (also for explicit null)
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(ANONYMOUS_USER)
    }
}

/// Echo of the executed agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: Value,
    pub name: Value,
    pub category: Value,
}

/// Output payload of an execution
///
/// The variant is picked by keyword matching over the agent description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExecutionOutput {
    /// HR / contract agents get the canned contract-analysis report
    ContractReport {
        #[serde(rename = "relatorio_html")]
        report_html: String,
        status: String,
        #[serde(rename = "dados_processados")]
        processed_data: Map<String, Value>,
        timestamp: String,
    },
    /// Every other agent gets a generic success payload
    Generic {
        #[serde(rename = "resultado")]
        result: String,
        #[serde(rename = "input_processado")]
        processed_input: Map<String, Value>,
        #[serde(rename = "agente")]
        agent_name: Value,
        timestamp: String,
    },
}

impl ExecutionOutput {
    pub fn is_contract_report(&self) -> bool {
        matches!(self, ExecutionOutput::ContractReport { .. })
    }
}

/// POST /api/agents/execute response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentExecutionResult {
    pub execution_id: String,
    pub success: bool,
    pub output: ExecutionOutput,
    /// Milliseconds; the mock always reports the same figure
    pub execution_time: u64,
    pub node_results: Map<String, Value>,
    pub agent: AgentSummary,
}
