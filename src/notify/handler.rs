//! Top-level per-event handler.

use crate::core::{ChangeEvent, ConfigTemplate};
use crate::error::{NotifyError, Result};
use crate::message::NotificationFormatter;
use crate::notify::MessageSink;
use crate::sources::{ConfigStore, SecretProvider};
use tracing::{debug, error, info};

/// Handles configuration-change events end to end.
///
/// For each event: fetch the previous and current template snapshots,
/// compute the diff, format the message payload, resolve the webhook
/// secret, and deliver. Any failure is logged and swallowed; the trigger
/// platform never sees an error from [`handle`](ChangeNotifier::handle).
///
/// # Examples
///
/// ```rust,no_run
/// use config_notify::notify::{ChangeNotifier, WebhookSink};
/// use config_notify::sources::{EnvSecret, RemoteConfigClient};
/// use std::time::Duration;
///
/// # fn example() -> config_notify::error::Result<()> {
/// let store = RemoteConfigClient::builder()
///     .with_base_url("https://firebaseremoteconfig.googleapis.com")
///     .with_project("acme-prod")
///     .build()?;
///
/// let notifier = ChangeNotifier::new(
///     store,
///     EnvSecret::default(),
///     WebhookSink::new(Duration::from_secs(10))?,
/// );
/// # Ok(())
/// # }
/// ```
pub struct ChangeNotifier<S, K> {
    store: S,
    secrets: Box<dyn SecretProvider>,
    sink: K,
    formatter: NotificationFormatter,
}

impl<S, K> ChangeNotifier<S, K>
where
    S: ConfigStore,
    K: MessageSink,
{
    /// Create a notifier from its three collaborators.
    pub fn new(store: S, secrets: impl SecretProvider + 'static, sink: K) -> Self {
        Self {
            store,
            secrets: Box::new(secrets),
            sink,
            formatter: NotificationFormatter::default(),
        }
    }

    /// Replace the default formatter.
    pub fn with_formatter(mut self, formatter: NotificationFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Handle one change event.
    ///
    /// Never returns an error: failures are logged with full detail and
    /// swallowed. There is no retry and no partial delivery.
    pub async fn handle(&self, event: ChangeEvent) {
        info!(
            project = %event.project,
            version = event.version_number,
            update_type = %event.update_type,
            "config template updated"
        );

        if let Err(err) = self.run(&event).await {
            error!(
                error = %err,
                project = %event.project,
                version = event.version_number,
                "failed to deliver change notification"
            );
        }
    }

    async fn run(&self, event: &ChangeEvent) -> Result<()> {
        // A missing previous version means this is the first-ever template;
        // diff against the empty template so every key shows as added.
        let previous = match self.store.template_at_version(event.previous_version()).await {
            Ok(template) => template,
            Err(NotifyError::VersionNotFound(version)) => {
                debug!(version, "previous version not found, using empty template");
                ConfigTemplate::empty()
            }
            Err(err) => return Err(err),
        };
        let current = self.store.template_at_version(event.version_number).await?;

        let payload = self.formatter.format(event, &previous, &current)?;
        debug!(blocks = payload.blocks.len(), "formatted notification");

        let webhook_url = self.secrets.webhook_url()?;
        self.sink.deliver(&webhook_url, &payload).await?;

        info!(
            project = %event.project,
            version = event.version_number,
            "change notification delivered"
        );
        Ok(())
    }
}
