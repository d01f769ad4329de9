//! HTTP client for the remote config service.

use super::ConfigStore;
use crate::core::ConfigTemplate;
use crate::error::{NotifyError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderValue};
use std::time::Duration;

/// Authentication method for config-service requests.
#[derive(Clone)]
pub enum HttpAuth {
    /// No authentication
    None,
    /// Bearer token authentication
    Bearer(String),
}

/// HTTP-based config store.
///
/// Fetches template snapshots by version number from the remote config
/// service's REST surface. Supports bearer authentication and configurable
/// timeouts.
///
/// # Examples
///
/// ```rust,no_run
/// use config_notify::sources::RemoteConfigClient;
/// use std::time::Duration;
///
/// # fn example() -> config_notify::error::Result<()> {
/// let client = RemoteConfigClient::builder()
///     .with_base_url("https://firebaseremoteconfig.googleapis.com")
///     .with_project("acme-prod")
///     .with_auth_token("access-token")
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteConfigClient {
    base_url: String,
    project: String,
    client: Client,
    auth: HttpAuth,
}

impl RemoteConfigClient {
    /// Create a new builder for constructing a remote config client.
    pub fn builder() -> RemoteConfigClientBuilder {
        RemoteConfigClientBuilder::new()
    }
}

#[async_trait]
impl ConfigStore for RemoteConfigClient {
    async fn template_at_version(&self, version: u64) -> Result<ConfigTemplate> {
        let url = format!(
            "{}/v1/projects/{}/remoteConfig",
            self.base_url, self.project
        );
        let mut request = self.client.get(&url).query(&[("versionNumber", version)]);

        request = match &self.auth {
            HttpAuth::None => request,
            HttpAuth::Bearer(token) => {
                let header_value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| NotifyError::FetchError(format!("Invalid bearer token: {}", e)))?;
                request.header("Authorization", header_value)
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| NotifyError::FetchError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(NotifyError::VersionNotFound(version));
        }
        if !status.is_success() {
            return Err(NotifyError::FetchError(format!(
                "HTTP request failed with status {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<ConfigTemplate>()
            .await
            .map_err(|e| NotifyError::FetchError(format!("Failed to parse template: {}", e)))
    }
}

/// Builder for constructing a [`RemoteConfigClient`].
pub struct RemoteConfigClientBuilder {
    base_url: Option<String>,
    project: Option<String>,
    auth: HttpAuth,
    timeout: Duration,
}

impl RemoteConfigClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            project: None,
            auth: HttpAuth::None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the config service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the project whose templates are fetched.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set Bearer token authentication.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth = HttpAuth::Bearer(token.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 10 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or project is missing, or if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<RemoteConfigClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| NotifyError::FetchError("Base URL is required".to_string()))?;
        let project = self
            .project
            .ok_or_else(|| NotifyError::FetchError("Project is required".to_string()))?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| NotifyError::FetchError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(RemoteConfigClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            project,
            client,
            auth: self.auth,
        })
    }
}

impl Default for RemoteConfigClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
