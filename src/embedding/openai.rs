//! OpenAI embeddings implementation.

use super::Embedder;
use crate::config::ProviderConfig;
use crate::error::{EmbedError, Result};
use crate::openai::create_client;
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// OpenAI-based embedder.
///
/// A fresh client is built for every call so requests share nothing but the
/// read-only configuration.
#[derive(Debug, Clone)]
pub struct OpenAIEmbedder {
    config: ProviderConfig,
}

impl OpenAIEmbedder {
    /// Create a new OpenAI embedder from the provider configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    #[instrument(skip(self, text), fields(model = %self.config.model, text_len = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let client = create_client(&self.config)?;

        let mut args = CreateEmbeddingRequestArgs::default();
        args.model(&self.config.model)
            .input(EmbeddingInput::String(text.to_string()));
        if let Some(dimensions) = self.config.dimensions {
            args.dimensions(dimensions);
        }
        let request = args
            .build()
            .map_err(|e| EmbedError::Embedding(format!("Failed to build request: {}", e)))?;

        let response = client
            .embeddings()
            .create(request)
            .await
            .map_err(|e| EmbedError::OpenAI(e.to_string()))?;

        debug!("Provider returned {} embeddings", response.data.len());

        // Only one input is ever sent, so the first vector is the answer.
        response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| EmbedError::Embedding("Empty embedding response".to_string()))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderSettings;

    #[test]
    fn test_embedder_uses_configured_model() {
        let settings = ProviderSettings {
            model: "text-embedding-3-large".to_string(),
            ..ProviderSettings::default()
        };
        let embedder = OpenAIEmbedder::new(ProviderConfig::with_credential(&settings, None));
        assert_eq!(embedder.model(), "text-embedding-3-large");
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_panicking() {
        let embedder = OpenAIEmbedder::new(ProviderConfig::with_credential(
            &ProviderSettings::default(),
            None,
        ));
        let err = embedder.embed("Widget").await.unwrap_err();
        assert!(matches!(err, EmbedError::Config(_)));
    }
}
