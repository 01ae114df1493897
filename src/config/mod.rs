//! Configuration module for the embedding service.
//!
//! Handles loading application settings and building the provider configuration.

mod provider;
mod settings;

pub use provider::{Credential, ProviderConfig};
pub use settings::{GeneralSettings, ProviderSettings, ServerSettings, Settings};
