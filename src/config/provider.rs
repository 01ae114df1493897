//! Immutable provider configuration shared by every request.

use super::settings::ProviderSettings;
use std::fmt;
use std::time::Duration;

/// Provider API key. Its `Debug` output never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key. Blank keys are treated as absent.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Read a key from the named environment variable.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(Self::new)
    }

    /// The raw key, for handing to the provider client only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Everything needed to reach the embedding provider.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub model: String,
    /// Name of the environment variable the credential was read from.
    pub api_key_env: String,
    pub credential: Option<Credential>,
    pub api_base: Option<String>,
    pub dimensions: Option<u32>,
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    /// Build from settings, reading the credential from the environment.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let credential = Credential::from_env(&settings.api_key_env);
        Self::with_credential(settings, credential)
    }

    /// Build from settings with an explicit credential.
    pub fn with_credential(settings: &ProviderSettings, credential: Option<Credential>) -> Self {
        Self {
            model: settings.model.clone(),
            api_key_env: settings.api_key_env.clone(),
            credential,
            api_base: settings.api_base.clone(),
            dimensions: settings.dimensions,
            timeout: settings.timeout_seconds.map(Duration::from_secs),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("sk-very-secret").unwrap();
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("sk-very-secret"));

        let config =
            ProviderConfig::with_credential(&ProviderSettings::default(), Some(credential));
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }

    #[test]
    fn test_blank_credential_is_absent() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert_eq!(Credential::new("sk-1").unwrap().expose(), "sk-1");
    }

    #[test]
    fn test_from_settings_copies_fields() {
        let settings = ProviderSettings {
            model: "text-embedding-3-large".to_string(),
            api_key_env: "EMBED_SERVICE_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            api_base: Some("http://localhost:1/v1".to_string()),
            dimensions: Some(64),
            timeout_seconds: Some(7),
        };
        let config = ProviderConfig::from_settings(&settings);

        assert_eq!(config.model, "text-embedding-3-large");
        assert!(!config.has_credential());
        assert_eq!(config.dimensions, Some(64));
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
    }
}
