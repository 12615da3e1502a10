// Canned payloads returned by the mock gateway

use lazy_static::lazy_static;
use serde_json::{json, Value};

/// Constant execution time reported for every mocked run
pub const MOCK_EXECUTION_TIME_MS: u64 = 2500;

/// Confidence attached to every simulated LLM answer
pub const MOCK_CONFIDENCE: f64 = 0.95;

/// Timestamp stamped on every execution output
pub const MOCK_TIMESTAMP: &str = "2025-01-15T17:20:00Z";

pub const GENERIC_RESULT: &str = "Agente executado com sucesso";
pub const CONTRACT_REPORT_STATUS: &str = "success";

/// Executive HTML report for an employment contract review
pub const CONTRACT_REPORT_HTML: &str = include_str!("assets/contract_report.html");

lazy_static! {
    /// Structured contract analysis returned for "analyze this contract" prompts
    pub static ref CONTRACT_ANALYSIS: Value = json!({
        "dados_funcionario": {
            "nome_completo": "Maria Silva Santos",
            "cpf": "123.456.789-00",
            "cargo": "Analista de Sistemas Pleno",
            "salario_mensal": "R$ 8.500,00"
        },
        "dados_empresa": {
            "razao_social": "TechSolutions Ltda.",
            "cnpj": "12.345.678/0001-90"
        },
        "analise_conformidade": {
            "status": "conforme_com_ressalvas",
            "irregularidades": [
                {"item": "CEP incompleto", "gravidade": "baixa"},
                {"item": "Cláusula de não concorrência genérica", "gravidade": "média"}
            ],
            "pontos_positivos": [
                "Período de experiência dentro do limite legal",
                "Jornada conforme CLT",
                "Benefícios adequados"
            ]
        }
    });
}
