//! In-memory embedders for exercising the service without a provider.

use super::Embedder;
use crate::error::{EmbedError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns the same vector for every input and records each input it saw.
pub struct FixedEmbedder {
    vector: Vec<f32>,
    inputs: Mutex<Vec<String>>,
}

impl FixedEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Inputs received so far, in call order.
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().map(|i| i.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.inputs.lock().map(|i| i.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Embedder for FixedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if let Ok(mut inputs) = self.inputs.lock() {
            inputs.push(text.to_string());
        }
        Ok(self.vector.clone())
    }

    fn model(&self) -> &str {
        "fixed"
    }
}

/// Always fails with the given message.
pub struct FailingEmbedder {
    message: String,
}

impl FailingEmbedder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(EmbedError::OpenAI(self.message.clone()))
    }

    fn model(&self) -> &str {
        "failing"
    }
}
