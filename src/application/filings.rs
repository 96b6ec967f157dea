use crate::domain::error::DomainError;
use crate::domain::ports::assistant::ContextModel;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::filing_store::{FilingChunk, FilingStore};
use crate::domain::values::text_chunk::{chunk_text, terms, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Chunks handed to the model as context per question.
pub const CONTEXT_CHUNKS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilingAnswer {
    pub ticker: String,
    pub answer: String,
    pub chunk_indices: Vec<usize>,
}

pub struct FilingsUseCase {
    store: Arc<dyn FilingStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    model: Arc<dyn ContextModel>,
}

impl FilingsUseCase {
    pub fn new(
        store: Arc<dyn FilingStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        model: Arc<dyn ContextModel>,
    ) -> Self {
        Self { store, embedder, model }
    }

    /// Indexes a filing, replacing whatever was stored for the ticker.
    /// Returns the number of chunks stored.
    pub async fn ingest(&self, ticker: &str, text: &str) -> Result<usize, DomainError> {
        let ticker = normalize_ticker(ticker)?;
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput("Filing text is empty".into()));
        }

        let contents = chunk_text(text, DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP);

        // Keep the text even when embedding fails; questions then fall back
        // to keyword ranking.
        let vectors = match self.embedder.embed(&contents, InputType::Document).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(ticker = %ticker, error = %e, "embedding failed, storing text only");
                vec![]
            }
        };

        let chunks: Vec<FilingChunk> = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| FilingChunk {
                ticker: ticker.clone(),
                chunk_index: i,
                content,
                vector: vectors.get(i).cloned().unwrap_or_default(),
            })
            .collect();

        self.store.replace(&ticker, &chunks)?;
        tracing::info!(ticker = %ticker, chunks = chunks.len(), "filing indexed");
        Ok(chunks.len())
    }

    pub async fn ask(&self, ticker: &str, question: &str) -> Result<FilingAnswer, DomainError> {
        let ticker = normalize_ticker(ticker)?;
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::InvalidInput("No question provided".into()));
        }

        let chunks = self.store.chunks(&ticker)?;
        if chunks.is_empty() {
            return Err(DomainError::NotFound(format!("No filing indexed for {ticker}")));
        }

        let selected = self.retrieve(&ticker, question, chunks).await?;
        let context = selected
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let answer = self.model.answer(question, &context).await?;
        Ok(FilingAnswer {
            ticker,
            answer,
            chunk_indices: selected.iter().map(|c| c.chunk_index).collect(),
        })
    }

    async fn retrieve(
        &self,
        ticker: &str,
        question: &str,
        chunks: Vec<FilingChunk>,
    ) -> Result<Vec<FilingChunk>, DomainError> {
        let query_vector = match self.embedder.embed(&[question.to_string()], InputType::Query).await {
            Ok(mut v) if !v.is_empty() => v.swap_remove(0),
            Ok(_) => vec![],
            Err(e) => {
                tracing::warn!(ticker, error = %e, "query embedding failed, using keyword ranking");
                vec![]
            }
        };

        let vectors_usable = !query_vector.is_empty()
            && chunks.iter().all(|c| c.vector.len() == query_vector.len());

        if vectors_usable {
            let ranked = self.store.search_similar(ticker, &query_vector, CONTEXT_CHUNKS)?;
            return Ok(ranked.into_iter().map(|(c, _)| c).collect());
        }
        Ok(keyword_rank(question, chunks, CONTEXT_CHUNKS))
    }
}

fn normalize_ticker(ticker: &str) -> Result<String, DomainError> {
    let t = ticker.trim();
    if t.is_empty() {
        return Err(DomainError::InvalidInput("Ticker is required".into()));
    }
    Ok(t.to_uppercase())
}

/// Orders chunks by how many distinct question terms they contain. Ties keep
/// chunk order.
fn keyword_rank(question: &str, chunks: Vec<FilingChunk>, limit: usize) -> Vec<FilingChunk> {
    let wanted: HashSet<String> = terms(question).into_iter().collect();
    let mut scored: Vec<(usize, FilingChunk)> = chunks
        .into_iter()
        .map(|c| {
            let present: HashSet<String> = terms(&c.content).into_iter().collect();
            (wanted.intersection(&present).count(), c)
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, c)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(i: usize, content: &str) -> FilingChunk {
        FilingChunk {
            ticker: "ACME".into(),
            chunk_index: i,
            content: content.into(),
            vector: vec![],
        }
    }

    #[test]
    fn test_keyword_rank_prefers_overlap_then_order() {
        let chunks = vec![
            chunk(0, "General business overview"),
            chunk(1, "Revenue grew while costs fell"),
            chunk(2, "Risk factors include revenue concentration and supply risk"),
            chunk(3, "Unrelated text"),
        ];
        let ranked = keyword_rank("What are the revenue risk factors?", chunks, 3);
        let order: Vec<usize> = ranked.iter().map(|c| c.chunk_index).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(normalize_ticker(" aapl ").unwrap(), "AAPL");
        assert!(normalize_ticker("  ").is_err());
    }
}
