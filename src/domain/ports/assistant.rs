use crate::domain::error::DomainError;
use async_trait::async_trait;

/// General finance Q&A backed by a hosted LLM.
#[async_trait]
pub trait FinanceAssistant: Send + Sync {
    async fn ask(&self, query: &str) -> Result<String, DomainError>;
}

/// Question answering over caller-supplied context.
#[async_trait]
pub trait ContextModel: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<String, DomainError>;
}
