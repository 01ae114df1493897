//! OpenAI client construction from the provider configuration.

use crate::config::ProviderConfig;
use crate::error::{EmbedError, Result};
use async_openai::{config::OpenAIConfig, Client};

/// Create an OpenAI client for the configured provider.
///
/// Fails when no credential is configured. A timeout is only applied when
/// one is configured; otherwise the HTTP client default is used.
pub fn create_client(config: &ProviderConfig) -> Result<Client<OpenAIConfig>> {
    let credential = config.credential.as_ref().ok_or_else(|| {
        EmbedError::Config(format!(
            "The api_key client option must be set either by passing api_key \
             to the client or by setting the {} environment variable",
            config.api_key_env
        ))
    })?;

    let mut openai_config = OpenAIConfig::new().with_api_key(credential.expose());
    if let Some(base) = &config.api_base {
        openai_config = openai_config.with_api_base(base.trim_end_matches('/'));
    }

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let http_client = builder.build()?;

    Ok(Client::with_config(openai_config).with_http_client(http_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credential, ProviderSettings};

    #[test]
    fn test_missing_credential_names_variable() {
        let config = ProviderConfig::with_credential(&ProviderSettings::default(), None);
        let err = create_client(&config).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_client_with_credential() {
        let settings = ProviderSettings {
            api_base: Some("http://127.0.0.1:1/v1/".to_string()),
            timeout_seconds: Some(5),
            ..ProviderSettings::default()
        };
        let config = ProviderConfig::with_credential(&settings, Credential::new("sk-test"));
        assert!(create_client(&config).is_ok());
    }
}
