use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use reqwest::Client;
use serde::Serialize;

const DEFAULT_MODEL: &str = "BAAI/bge-large-en-v1.5";
const BASE_URL: &str = "https://api-inference.huggingface.co/pipeline/feature-extraction";
/// BGE models expect this prefix on retrieval queries but not on passages.
const QUERY_INSTRUCTION: &str = "Represent this sentence for searching relevant passages: ";

/// Sentence embeddings from the Hugging Face inference API.
pub struct HuggingFaceProvider {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct FeatureRequest {
    inputs: Vec<String>,
    options: FeatureOptions,
}

#[derive(Serialize)]
struct FeatureOptions {
    wait_for_model: bool,
}

impl HuggingFaceProvider {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "BAAI/bge-small-en-v1.5" => 384,
            "BAAI/bge-base-en-v1.5" => 768,
            _ => 1024,
        }
    }

    fn prepare(&self, texts: &[String], input_type: InputType) -> Vec<String> {
        match input_type {
            InputType::Query if self.model.starts_with("BAAI/bge") => texts
                .iter()
                .map(|t| format!("{QUERY_INSTRUCTION}{t}"))
                .collect(),
            _ => texts.to_vec(),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HuggingFaceProvider {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let mut request = self
            .client
            .post(format!("{BASE_URL}/{}", self.model))
            .json(&FeatureRequest {
                inputs: self.prepare(texts, input_type),
                options: FeatureOptions { wait_for_model: true },
            });
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("Hugging Face API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!("Hugging Face API {status}: {body}")));
        }

        let vectors: Vec<Vec<f32>> = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        if vectors.len() != texts.len() {
            return Err(DomainError::Embedding(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        Self::model_dimension(&self.model)
    }
}
