//! # config-notify
//!
//! Slack webhook notifications for remote configuration template changes.
//!
//! ## Overview
//!
//! `config-notify` turns a configuration-change event into a chat message:
//! when a remote config service publishes a new template version, the
//! notifier fetches the current and previous snapshots, strips volatile
//! metadata, computes a structural diff, formats a Slack Block Kit payload,
//! and posts it to a webhook.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use config_notify::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example(event: ChangeEvent) -> config_notify::error::Result<()> {
//! let store = RemoteConfigClient::builder()
//!     .with_base_url("https://firebaseremoteconfig.googleapis.com")
//!     .with_project("acme-prod")
//!     .with_auth_token("access-token")
//!     .build()?;
//!
//! let notifier = ChangeNotifier::new(
//!     store,
//!     EnvSecret::default(),
//!     WebhookSink::new(Duration::from_secs(10))?,
//! );
//!
//! // Invoked once per published template version.
//! notifier.handle(event).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Behavior
//!
//! - Version and validation-tag metadata is stripped before diffing, so the
//!   diff reflects only semantic configuration changes.
//! - The diff rendering is stable and complete: every changed key appears,
//!   with no elision, regardless of size.
//! - Failures (fetch, format, delivery) are logged and swallowed; the
//!   trigger platform never sees an error.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod message;
pub mod notify;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ChangeEvent, ConfigTemplate, TemplateDiff, UpdateOrigin, UpdateType, UpdateUser};
    pub use crate::error::{NotifyError, Result};
    pub use crate::message::{MessagePayload, NotificationFormatter};
    pub use crate::notify::{ChangeNotifier, MessageSink, WebhookSink};
    pub use crate::sources::{ConfigStore, EnvSecret, RemoteConfigClient, SecretProvider};
}
