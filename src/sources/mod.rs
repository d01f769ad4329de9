//! External collaborators: the config store and the secret provider.

mod remote;
mod secret;

pub use remote::{HttpAuth, RemoteConfigClient, RemoteConfigClientBuilder};
pub use secret::{EnvSecret, SecretProvider};

use crate::core::ConfigTemplate;
use crate::error::Result;
use async_trait::async_trait;

/// Read access to versioned template snapshots.
///
/// Fails with [`NotifyError::VersionNotFound`](crate::error::NotifyError::VersionNotFound)
/// when the requested version does not exist.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch the template snapshot at a specific version.
    async fn template_at_version(&self, version: u64) -> Result<ConfigTemplate>;
}
