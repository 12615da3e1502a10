// Keyword dispatch for the mock gateway
// Every branch decision is a case-insensitive substring test, nothing smarter

use sha2::{Digest, Sha256};

use crate::models::AgentDescriptor;
use crate::Result;

/// Triggers that mark an agent as an HR / contract agent
pub const CONTRACT_AGENT_KEYWORDS: &[&str] = &["contrato", "rh"];

/// Both must appear in a prompt to get the structured analysis
pub const ANALYSIS_PROMPT_KEYWORDS: &[&str] = &["contrato", "analis"];

/// Any of these in a prompt returns the HTML report
pub const REPORT_PROMPT_KEYWORDS: &[&str] = &["relatório", "html"];

/// Characters of the prompt echoed back in the fallback answer
pub const PROMPT_ECHO_CHARS: usize = 100;

/// Which canned answer a prompt gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    ContractAnalysis,
    HtmlReport,
    Echo,
}

/// Lowercased JSON text of the whole agent mapping, keys included
pub fn stringify_agent(agent: &AgentDescriptor) -> Result<String> {
    Ok(serde_json::to_string(agent)?.to_lowercase())
}

pub fn agent_matches_contract(agent: &AgentDescriptor) -> Result<bool> {
    let haystack = stringify_agent(agent)?;
    Ok(CONTRACT_AGENT_KEYWORDS
        .iter()
        .any(|keyword| haystack.contains(keyword)))
}

pub fn classify_prompt(prompt: &str) -> PromptKind {
    let prompt = prompt.to_lowercase();

    if ANALYSIS_PROMPT_KEYWORDS
        .iter()
        .all(|keyword| prompt.contains(keyword))
    {
        PromptKind::ContractAnalysis
    } else if REPORT_PROMPT_KEYWORDS
        .iter()
        .any(|keyword| prompt.contains(keyword))
    {
        PromptKind::HtmlReport
    } else {
        PromptKind::Echo
    }
}

/// First `max_chars` characters (not bytes) of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Rough token count: two tokens per whitespace-separated word
pub fn estimate_tokens(prompt: &str) -> usize {
    prompt.split_whitespace().count() * 2
}

/// `exec_` followed by 16 hex chars of the SHA-256 of the agent id text
///
/// Two agents sharing an id share an execution id.
pub fn execution_id_for(agent: &AgentDescriptor) -> String {
    let digest = Sha256::digest(agent.id_text().as_bytes());
    let hex = format!("{:x}", digest);
    format!("exec_{}", &hex[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_agent_by_name() {
        let agent = AgentDescriptor::new("a1", "Analisador de CONTRATOS");
        assert!(agent_matches_contract(&agent).unwrap());
    }

    #[test]
    fn test_hr_agent_by_category() {
        let agent = AgentDescriptor::new("a2", "Triagem").with_category("RH");
        assert!(agent_matches_contract(&agent).unwrap());
    }

    #[test]
    fn test_keyword_in_nested_attribute() {
        let agent = AgentDescriptor::new("a3", "Pipeline").with_attribute(
            "nodes",
            serde_json::json!([{"prompt": "Revise o contrato"}]),
        );
        assert!(agent_matches_contract(&agent).unwrap());
    }

    #[test]
    fn test_rh_matches_inside_other_words() {
        // crude on purpose: "rh" anywhere counts
        let agent = AgentDescriptor::new("a4", "Rhythm generator");
        assert!(agent_matches_contract(&agent).unwrap());
    }

    #[test]
    fn test_plain_agent_does_not_match() {
        let agent = AgentDescriptor::new("a1", "Test");
        assert!(!agent_matches_contract(&agent).unwrap());
    }

    #[test]
    fn test_classify_prompt() {
        assert_eq!(
            classify_prompt("Analise este CONTRATO de trabalho"),
            PromptKind::ContractAnalysis
        );
        // accented "análise" does not contain "analis"
        assert_eq!(classify_prompt("contrato: faça a análise"), PromptKind::Echo);
        assert_eq!(classify_prompt("Gere um Relatório"), PromptKind::HtmlReport);
        assert_eq!(classify_prompt("RELATÓRIO MENSAL"), PromptKind::HtmlReport);
        assert_eq!(classify_prompt("render as HTML"), PromptKind::HtmlReport);
        assert_eq!(classify_prompt("hello world"), PromptKind::Echo);
    }

    #[test]
    fn test_analysis_beats_report() {
        assert_eq!(
            classify_prompt("analisar contrato e gerar relatório html"),
            PromptKind::ContractAnalysis
        );
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("hello", 100), "hello");
        assert_eq!(truncate_chars("ação", 2), "aç");

        let long = "é".repeat(150);
        assert_eq!(truncate_chars(&long, 100).chars().count(), 100);
    }

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens("hello world"), 4);
        assert_eq!(estimate_tokens("  spaced   out\tprompt\n"), 6);
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn test_execution_id_depends_only_on_id() {
        let first = execution_id_for(&AgentDescriptor::new("a1", "One"));
        let second = execution_id_for(&AgentDescriptor::new("a1", "Two"));
        let other = execution_id_for(&AgentDescriptor::new("a2", "One"));

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert!(first.starts_with("exec_"));
        assert_eq!(first.len(), "exec_".len() + 16);
    }

    #[test]
    fn test_execution_id_without_id_uses_unknown() {
        let anonymous = execution_id_for(&AgentDescriptor::default());
        let explicit = execution_id_for(&AgentDescriptor::new("unknown", "x"));
        assert_eq!(anonymous, explicit);
    }
}
