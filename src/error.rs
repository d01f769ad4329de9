//! Error types for config-notify.

/// Result type alias for config-notify operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors that can occur while handling a configuration-change event.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Failed to fetch a template snapshot from the config store.
    #[error("Failed to fetch template: {0}")]
    FetchError(String),

    /// The requested template version does not exist.
    #[error("Template version {0} not found")]
    VersionNotFound(u64),

    /// Failed to resolve a secret value.
    #[error("Failed to resolve secret '{name}': {reason}")]
    SecretError {
        /// The secret name that failed to resolve
        name: String,
        /// The reason resolution failed
        reason: String,
    },

    /// Failed to serialize a template or message payload.
    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Failed to deliver the message to the webhook endpoint.
    #[error("Webhook delivery failed: {0}")]
    DeliveryError(String),
}
