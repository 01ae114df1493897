//! The embedding request handler.
//!
//! Validates the derived input, makes exactly one provider call, and maps
//! every failure to a tagged [`EmbedFailure`].

use crate::embedding::Embedder;
use crate::request::EmbedRequest;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, info_span, warn, Instrument};

/// Kind tag for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    EmptyInput,
    ProviderFailure,
    InvalidBody,
}

/// A failed embedding request. `Display` is the message returned to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedFailure {
    /// Name and description were both blank.
    #[error("Empty input")]
    EmptyInput,

    /// Anything that went wrong building the client or calling the provider.
    #[error("{0}")]
    ProviderFailure(String),

    /// The body was not a JSON object.
    #[error("{0}")]
    InvalidBody(String),
}

impl EmbedFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            EmbedFailure::EmptyInput => FailureKind::EmptyInput,
            EmbedFailure::ProviderFailure(_) => FailureKind::ProviderFailure,
            EmbedFailure::InvalidBody(_) => FailureKind::InvalidBody,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            FailureKind::EmptyInput | FailureKind::InvalidBody => StatusCode::BAD_REQUEST,
            FailureKind::ProviderFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Handle one embedding request.
///
/// Blank input is rejected before the provider is contacted. Otherwise the
/// provider is called once and its vector is returned unchanged.
pub async fn embed_request(
    embedder: &dyn Embedder,
    request: &EmbedRequest,
) -> Result<Vec<f32>, EmbedFailure> {
    let input = request.derived_input();
    let span = info_span!("embed", model = embedder.model(), input_len = input.len());

    async move {
        if input.is_empty() {
            debug!("Rejecting empty input");
            return Err(EmbedFailure::EmptyInput);
        }

        match embedder.embed(&input).await {
            Ok(embedding) => {
                debug!("Embedding has {} dimensions", embedding.len());
                Ok(embedding)
            }
            Err(e) => {
                warn!(error = %e, "Provider call failed");
                Err(EmbedFailure::ProviderFailure(e.to_string()))
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::mock::{FailingEmbedder, FixedEmbedder};

    #[tokio::test]
    async fn test_success_returns_vector_unchanged() {
        let embedder = FixedEmbedder::new(vec![0.01, -0.02, 0.5]);
        let request = EmbedRequest::new("Widget", "A small gadget");

        let embedding = embed_request(&embedder, &request).await.unwrap();

        assert_eq!(embedding, vec![0.01, -0.02, 0.5]);
        assert_eq!(embedder.inputs(), vec!["Widget A small gadget"]);
    }

    #[tokio::test]
    async fn test_blank_input_never_calls_provider() {
        let embedder = FixedEmbedder::new(vec![1.0]);

        for request in [
            EmbedRequest::default(),
            EmbedRequest::new("  ", ""),
            EmbedRequest::new("", " \n\t"),
        ] {
            let failure = embed_request(&embedder, &request).await.unwrap_err();
            assert_eq!(failure, EmbedFailure::EmptyInput);
            assert_eq!(failure.status(), StatusCode::BAD_REQUEST);
            assert_eq!(failure.to_string(), "Empty input");
        }

        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_becomes_failure() {
        let embedder = FailingEmbedder::new("Incorrect API key provided: sk-***");
        let request = EmbedRequest::new("X", "");

        let failure = embed_request(&embedder, &request).await.unwrap_err();

        assert_eq!(failure.kind(), FailureKind::ProviderFailure);
        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(failure.to_string().contains("Incorrect API key provided"));
    }

    #[test]
    fn test_invalid_body_is_client_error() {
        let failure = EmbedFailure::InvalidBody("expected a JSON object".to_string());
        assert_eq!(failure.to_string(), "expected a JSON object");
        assert_eq!(failure.kind(), FailureKind::InvalidBody);
        assert_eq!(failure.status(), StatusCode::BAD_REQUEST);
    }
}
