//! Configuration-change events delivered by the trigger platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a template update was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateType {
    /// A regular update of one or more parameters.
    IncrementalUpdate,
    /// An update that replaced the whole template.
    ForcedUpdate,
    /// A rollback to an earlier version.
    Rollback,
    /// The service did not report an update type.
    #[serde(other)]
    Unspecified,
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IncrementalUpdate => "INCREMENTAL_UPDATE",
            Self::ForcedUpdate => "FORCED_UPDATE",
            Self::Rollback => "ROLLBACK",
            Self::Unspecified => "UNSPECIFIED",
        };
        write!(f, "{}", name)
    }
}

/// Where a template update originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateOrigin {
    /// Updated through the web console.
    Console,
    /// Updated through the REST API.
    RestApi,
    /// Updated through an admin SDK.
    AdminSdk,
    /// The service did not report an origin.
    #[serde(other)]
    Unspecified,
}

impl fmt::Display for UpdateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Console => "CONSOLE",
            Self::RestApi => "REST_API",
            Self::AdminSdk => "ADMIN_SDK",
            Self::Unspecified => "UNSPECIFIED",
        };
        write!(f, "{}", name)
    }
}

/// Identity of the actor who published a template version.
///
/// All fields are optional; the service omits whatever it does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A notification describing a transition between two template versions.
///
/// Delivered by the trigger platform whenever the config store publishes a
/// new version. The previous version is always `version_number - 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Project the template belongs to.
    pub project: String,
    /// The newly published version number.
    pub version_number: u64,
    /// How the update was made.
    pub update_type: UpdateType,
    /// Where the update originated.
    pub update_origin: UpdateOrigin,
    /// When the version was published.
    pub update_time: DateTime<Utc>,
    /// Free-text description supplied by the actor, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The actor who published the version, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_user: Option<UpdateUser>,
}

impl ChangeEvent {
    /// The version number the new template is compared against.
    pub fn previous_version(&self) -> u64 {
        self.version_number.saturating_sub(1)
    }
}
