use super::{BackendError, HttpBackend};
use crate::domain::error::DomainError;
use crate::domain::ports::assistant::{ContextModel, FinanceAssistant};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:5004";
pub const DEFAULT_MODEL_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

#[derive(Debug, serde::Deserialize)]
struct ModelResponse {
    response: String,
}

/// Client for the finance-only chat service (`POST /ask-finance`).
pub struct HttpFinanceAssistant {
    http: HttpBackend,
}

impl HttpFinanceAssistant {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("chat_service", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl FinanceAssistant for HttpFinanceAssistant {
    async fn ask(&self, query: &str) -> Result<String, DomainError> {
        let body = serde_json::json!({ "query": query });
        let resp: ModelResponse = self
            .http
            .send_json(self.http.client().post(self.http.url("/ask-finance")).json(&body))
            .await?;
        Ok(resp.response)
    }
}

/// Client for a question-answering model that takes explicit context.
///
/// The endpoint is a full URL rather than a base, since hosted inference
/// services rarely agree on a path.
pub struct HttpContextModel {
    http: HttpBackend,
}

impl HttpContextModel {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            http: HttpBackend::new("context_model", endpoint, timeout)?,
        })
    }
}

#[async_trait]
impl ContextModel for HttpContextModel {
    async fn answer(&self, question: &str, context: &str) -> Result<String, DomainError> {
        let body = serde_json::json!({ "question": question, "context": context });
        let resp: ModelResponse = self
            .http
            .send_json(self.http.client().post(self.http.base_url()).json(&body))
            .await?;
        Ok(resp.response)
    }
}
