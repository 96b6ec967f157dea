use crate::domain::error::DomainError;

/// One indexed slice of a filing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilingChunk {
    pub ticker: String,
    pub chunk_index: usize,
    pub content: String,
    /// Empty when the embedding provider produced no vector.
    pub vector: Vec<f32>,
}

pub trait FilingStore: Send + Sync {
    /// Replaces everything indexed for the chunks' ticker.
    fn replace(&self, ticker: &str, chunks: &[FilingChunk]) -> Result<(), DomainError>;
    /// All chunks for a ticker in chunk order.
    fn chunks(&self, ticker: &str) -> Result<Vec<FilingChunk>, DomainError>;
    /// Top `limit` chunks by cosine similarity to `vector`.
    fn search_similar(&self, ticker: &str, vector: &[f32], limit: usize) -> Result<Vec<(FilingChunk, f64)>, DomainError>;
}
