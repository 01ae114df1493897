//! Embed command: one embedding, printed to stdout.

use crate::cli::preflight::{self, Operation};
use crate::cli::{vector_preview, Output};
use crate::client::EmbedServiceClient;
use crate::config::{ProviderConfig, Settings};
use crate::embedding::OpenAIEmbedder;
use crate::request::EmbedRequest;
use crate::server::EmbedResponse;
use crate::service::{embed_request, EmbedFailure};
use anyhow::Result;

/// Run the embed command.
///
/// Without `url` the provider is called directly through the same handler
/// the server uses; with `url` a running service is called instead. Blank
/// input is rejected before any credential check or network call.
pub async fn run_embed(
    name: &str,
    description: &str,
    url: Option<&str>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let request = EmbedRequest::new(name, description);
    if request.derived_input().is_empty() {
        return Err(EmbedFailure::EmptyInput.into());
    }

    let provider = ProviderConfig::from_settings(&settings.provider);

    let spinner = Output::spinner("Requesting embedding...");
    let result = match url {
        Some(url) => {
            preflight::check(Operation::EmbedRemote, &provider)?;
            let client = EmbedServiceClient::new(url)?;
            client.embed(name, description).await.map_err(anyhow::Error::from)
        }
        None => {
            preflight::check(Operation::EmbedDirect, &provider)?;
            let embedder = OpenAIEmbedder::new(provider);
            embed_request(&embedder, &request)
                .await
                .map(|embedding| EmbedResponse::from(embedding).embedding)
                .map_err(anyhow::Error::from)
        }
    };
    spinner.finish_and_clear();

    let embedding = result?;

    if json {
        println!("{}", serde_json::to_string(&EmbedResponse { embedding })?);
    } else {
        Output::success(&format!("Embedded \"{}\"", request.derived_input()));
        Output::kv("Model", &settings.provider.model);
        Output::kv("Vector", &vector_preview(&embedding, 6));
    }

    Ok(())
}
