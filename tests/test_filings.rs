mod common;

use common::{providers_with, setup_with_fakes, VocabEmbedder};
use finboard::domain::error::DomainError;
use finboard::FinBoard;
use std::sync::Arc;

fn filing_text() -> String {
    let revenue = "Revenue grew strongly across segments. ".repeat(40);
    let debt = "Debt covenants restrict further borrowing. ".repeat(40);
    format!("{revenue}{debt}")
}

#[tokio::test]
async fn test_ask_before_ingest_is_not_found() {
    let (fb, _) = setup_with_fakes();
    assert!(matches!(fb.ask_filing("ACME", "Any risks?").await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_ingest_validates_input() {
    let (fb, _) = setup_with_fakes();
    assert!(matches!(fb.ingest_filing("ACME", "  \n ").await, Err(DomainError::InvalidInput(_))));
    assert!(matches!(fb.ingest_filing(" ", "text").await, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_keyword_fallback_without_vectors() {
    let (fb, fakes) = setup_with_fakes();
    let count = fb.ingest_filing("acme", &filing_text()).await.unwrap();
    assert!(count > 3);

    let answer = fb.ask_filing("ACME", "What do the debt covenants say?").await.unwrap();
    assert_eq!(answer.ticker, "ACME");
    assert_eq!(answer.answer, "From the filing.");
    assert_eq!(answer.chunk_indices.len(), 4);

    let calls = fakes.model.calls.lock().unwrap();
    let (question, context) = &calls[0];
    assert_eq!(question, "What do the debt covenants say?");
    assert_eq!(context.split('\n').count(), 4);
    assert!(context.split('\n').next().unwrap().contains("Debt covenants"));
}

#[tokio::test]
async fn test_vector_retrieval_prefers_matching_chunks() {
    let (providers, fakes) = providers_with(Arc::new(VocabEmbedder));
    let fb = FinBoard::with_providers(":memory:", providers).unwrap();
    fb.ingest_filing("ACME", &filing_text()).await.unwrap();

    let answer = fb.ask_filing("acme", "How much debt is there?").await.unwrap();
    assert!(!answer.chunk_indices.is_empty());

    let calls = fakes.model.calls.lock().unwrap();
    let first = calls[0].1.split('\n').next().unwrap();
    assert!(first.contains("Debt"));
    assert!(!first.contains("Revenue"));
}

#[tokio::test]
async fn test_reingest_replaces_chunks() {
    let (fb, _) = setup_with_fakes();
    fb.ingest_filing("ACME", &filing_text()).await.unwrap();
    assert_eq!(fb.ingest_filing("ACME", "A short note on the dividend policy.").await.unwrap(), 1);

    let answer = fb.ask_filing("ACME", "dividend?").await.unwrap();
    assert_eq!(answer.chunk_indices, vec![0]);
}
