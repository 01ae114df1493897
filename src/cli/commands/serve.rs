//! Serve command: run the HTTP embedding service.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{ProviderConfig, Settings};
use crate::embedding::OpenAIEmbedder;
use crate::server::{self, AppState};
use std::sync::Arc;
use tracing::info;

/// Run the HTTP embedding service.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    mut settings: Settings,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    let provider = ProviderConfig::from_settings(&settings.provider);
    if let Err(e) = preflight::check(Operation::Serve, &provider) {
        Output::warning(&e.to_string());
        Output::warning("Requests will fail with status 500 until the key is provided.");
    }

    info!(model = %provider.model, "Starting embedding service");
    let state = Arc::new(AppState::new(Arc::new(OpenAIEmbedder::new(provider))));
    let app = server::router(state);

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Embedding Service");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Embed", "POST /embed");
    Output::kv("Health", "GET  /health");
    Output::kv("Model", &settings.provider.model);
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    server::serve(listener, app).await?;

    info!("Embedding service stopped");
    Ok(())
}
