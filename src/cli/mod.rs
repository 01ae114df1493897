//! CLI module for the embedding service.

pub mod commands;
mod output;
pub mod preflight;

pub use output::{vector_preview, Output};

use clap::{Parser, Subcommand};

/// embed-service - text embeddings over HTTP
///
/// Turns a name and description into an embedding vector through an
/// OpenAI-compatible provider.
#[derive(Parser, Debug)]
#[command(name = "embed-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP embedding service
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Embed a single name and description
    Embed {
        /// Item name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Item description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Call a running service at this URL instead of the provider
        #[arg(short, long, env = "EMBED_SERVICE_URL")]
        url: Option<String>,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the current configuration to the config file
    Init,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["embed-service", "-v", "serve", "--port", "8080"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Serve { host, port } => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_embed() {
        let cli = Cli::parse_from([
            "embed-service",
            "embed",
            "--name",
            "Widget",
            "--description",
            "A small gadget",
            "--url",
            "http://localhost:5005",
            "--json",
        ]);
        match cli.command {
            Commands::Embed {
                name,
                description,
                url,
                json,
            } => {
                assert_eq!(name, "Widget");
                assert_eq!(description, "A small gadget");
                assert_eq!(url.as_deref(), Some("http://localhost:5005"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
