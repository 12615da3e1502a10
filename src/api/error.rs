// HTTP error mapping
// Gateway failures become endpoint-specific 500s; unparsable bodies get a 422

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::types::ErrorDetail;
use crate::GatewayError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Erro na execução do agente: {0}")]
    AgentExecution(#[source] GatewayError),

    #[error("Erro na chamada LLM: {0}")]
    LlmCall(#[source] GatewayError),

    #[error("{0}")]
    InvalidBody(String),

    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AgentExecution(_) | ApiError::LlmCall(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_wrap_gateway_error() {
        let error = ApiError::AgentExecution(GatewayError::Internal("boom".into()));
        assert_eq!(error.to_string(), "Erro na execução do agente: boom");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = ApiError::LlmCall(GatewayError::Internal("timeout".into()));
        assert_eq!(error.to_string(), "Erro na chamada LLM: timeout");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_errors() {
        assert_eq!(
            ApiError::InvalidBody("missing field".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.to_string(), "Not Found");
    }
}
