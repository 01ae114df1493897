//! embed-service - text embeddings over HTTP
//!
//! A small service that accepts a name and description, joins them into one
//! string, asks an OpenAI-compatible provider for its embedding, and returns
//! the vector.
//!
//! # Architecture
//!
//! - `request` - the `POST /embed` body and derived input text
//! - `service` - the request handler and its failure kinds
//! - `embedding` - the `Embedder` provider seam and the OpenAI implementation
//! - `openai` - OpenAI client construction
//! - `config` - settings file, provider configuration and credential
//! - `server` - axum router and serve loop
//! - `client` - client for a running service
//! - `cli` - command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use embed_service::config::{ProviderConfig, Settings};
//! use embed_service::embedding::OpenAIEmbedder;
//! use embed_service::request::EmbedRequest;
//! use embed_service::service::embed_request;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let embedder = OpenAIEmbedder::new(ProviderConfig::from_settings(&settings.provider));
//!
//!     let request = EmbedRequest::new("Widget", "A small gadget");
//!     let embedding = embed_request(&embedder, &request).await?;
//!     println!("{} dimensions", embedding.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod embedding;
pub mod error;
pub mod openai;
pub mod request;
pub mod server;
pub mod service;

pub use error::{EmbedError, Result};
