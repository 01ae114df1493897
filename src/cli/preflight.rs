//! Pre-flight checks before starting work.
//!
//! Validates that the provider credential is available before operations
//! that would otherwise fail on their first provider call.

use crate::config::ProviderConfig;
use crate::error::{EmbedError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Serving can start without a key; requests will fail with 500.
    Serve,
    /// A direct one-shot embedding needs the key.
    EmbedDirect,
    /// Calling a remote service needs nothing locally.
    EmbedRemote,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, provider: &ProviderConfig) -> Result<()> {
    match operation {
        Operation::Serve | Operation::EmbedDirect => check_api_key(provider),
        Operation::EmbedRemote => Ok(()),
    }
}

fn check_api_key(provider: &ProviderConfig) -> Result<()> {
    if provider.has_credential() {
        Ok(())
    } else {
        Err(EmbedError::Config(format!(
            "{var} not set. Set it with: export {var}='sk-...'",
            var = provider.api_key_env
        )))
    }
}
