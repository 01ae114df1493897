//! Client for a running embedding service.

use crate::error::{EmbedError, Result};
use crate::request::EmbedRequest;
use crate::server::{EmbedResponse, ErrorResponse};
use reqwest::StatusCode;
use tracing::{debug, instrument};
use url::Url;

/// Default address of a locally running service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5005";

/// Calls `POST /embed` on an embedding service.
#[derive(Debug, Clone)]
pub struct EmbedServiceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl EmbedServiceClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing HTTP client.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http,
            endpoint: base.join("embed")?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the embedding for a name and description.
    #[instrument(skip(self, description))]
    pub async fn embed(&self, name: &str, description: &str) -> Result<Vec<f64>> {
        let payload = EmbedRequest::new(name, description);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;
        debug!("Embedding service answered {}", response.status());

        if response.status() != StatusCode::OK {
            let body = response.text().await?;
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(EmbedError::ServiceResponse(message));
        }

        let result: EmbedResponse = response.json().await?;
        Ok(result.embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let client = EmbedServiceClient::new("http://embed_service:5005").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://embed_service:5005/embed");

        let client = EmbedServiceClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8080/api/embed");

        let client = EmbedServiceClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8080/api/embed");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            EmbedServiceClient::new("not a url"),
            Err(EmbedError::Url(_))
        ));
    }
}
