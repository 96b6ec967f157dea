pub mod huggingface;
pub mod noop;
pub mod openai;

use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::sync::Arc;

/// Picks an embedding provider by name. Unknown names fall back to
/// [`noop::NoopProvider`], which makes filing retrieval use keyword overlap.
pub fn provider_from_name(
    name: &str,
    api_key: Option<String>,
    model: Option<String>,
) -> Arc<dyn EmbeddingProvider> {
    let api_key = api_key.unwrap_or_default();
    match name.trim().to_lowercase().as_str() {
        "openai" => Arc::new(openai::OpenAiProvider::new(api_key, model)),
        "huggingface" | "hf" => Arc::new(huggingface::HuggingFaceProvider::new(api_key, model)),
        _ => Arc::new(noop::NoopProvider),
    }
}
