//! Secret resolution for the webhook URL.

use crate::error::{NotifyError, Result};

/// Provides the webhook URL secret.
///
/// Resolved once per invocation; implementations must not cache failures.
pub trait SecretProvider: Send + Sync {
    /// Read the webhook URL value.
    fn webhook_url(&self) -> Result<String>;
}

/// Secret provider backed by an environment variable.
///
/// # Examples
///
/// ```rust
/// use config_notify::sources::EnvSecret;
///
/// // Reads SLACK_INCOMING_WEBHOOK
/// let secret = EnvSecret::default();
/// ```
pub struct EnvSecret {
    var_name: String,
}

impl EnvSecret {
    /// Create a provider reading the named environment variable.
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new("SLACK_INCOMING_WEBHOOK")
    }
}

impl SecretProvider for EnvSecret {
    fn webhook_url(&self) -> Result<String> {
        std::env::var(&self.var_name).map_err(|e| NotifyError::SecretError {
            name: self.var_name.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // env var manipulation in tests
mod tests {
    use super::*;

    #[test]
    fn test_env_secret_reads_variable() {
        // SAFETY: test-local variable name, no concurrent reader
        unsafe { std::env::set_var("CONFIG_NOTIFY_TEST_WEBHOOK", "https://hooks.example.com/x") };
        let secret = EnvSecret::new("CONFIG_NOTIFY_TEST_WEBHOOK");
        assert_eq!(
            secret.webhook_url().unwrap(),
            "https://hooks.example.com/x"
        );
        unsafe { std::env::remove_var("CONFIG_NOTIFY_TEST_WEBHOOK") };
    }

    #[test]
    fn test_env_secret_missing_variable() {
        let secret = EnvSecret::new("CONFIG_NOTIFY_TEST_MISSING");
        let err = secret.webhook_url().unwrap_err();
        assert!(matches!(err, NotifyError::SecretError { .. }));
    }
}
