//! Versioned configuration template snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A versioned snapshot of remote configuration parameters.
///
/// Parameter definitions, conditions, and parameter groups are carried as
/// opaque JSON values; the notifier never interprets them beyond diffing.
///
/// # Examples
///
/// ```rust
/// use config_notify::core::ConfigTemplate;
/// use serde_json::json;
///
/// let mut template = ConfigTemplate::empty();
/// template.version = Some(5);
/// template.parameters.insert("flag_a".into(), json!({"defaultValue": {"value": "true"}}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigTemplate {
    /// Monotonically increasing version number. Volatile: stripped before diffing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    /// Opaque validation tag assigned by the config service. Volatile:
    /// stripped before diffing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Configuration keys mapped to their parameter definitions.
    pub parameters: BTreeMap<String, Value>,

    /// Named groups of parameters.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter_groups: BTreeMap<String, Value>,

    /// Targeting conditions referenced by parameter values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Value>,
}

impl ConfigTemplate {
    /// The empty template.
    ///
    /// Used as the previous snapshot when a change event references the
    /// first-ever version, so the diff shows every key as added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render the template as a JSON value with volatile metadata removed.
    ///
    /// The version number and validation tag always differ between versions
    /// and would dominate the diff with noise, so they are stripped before
    /// comparison.
    pub fn normalized(&self) -> crate::error::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.remove("version");
            map.remove("etag");
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_with(params: &[(&str, Value)]) -> ConfigTemplate {
        let mut template = ConfigTemplate::empty();
        for (key, value) in params {
            template.parameters.insert((*key).to_string(), value.clone());
        }
        template
    }

    #[test]
    fn test_normalized_strips_version_and_etag() {
        let mut a = template_with(&[("flag_a", json!("true"))]);
        a.version = Some(4);
        a.etag = Some("etag-4".to_string());

        let mut b = template_with(&[("flag_a", json!("true"))]);
        b.version = Some(5);
        b.etag = Some("etag-5".to_string());

        assert_eq!(a.normalized().unwrap(), b.normalized().unwrap());
    }

    #[test]
    fn test_normalized_keeps_parameters() {
        let template = template_with(&[("flag_a", json!("true"))]);
        let normalized = template.normalized().unwrap();
        assert_eq!(normalized["parameters"]["flag_a"], json!("true"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let template: ConfigTemplate = serde_json::from_value(json!({
            "version": 7,
            "etag": "etag-7",
            "parameters": {"flag_a": {"defaultValue": {"value": "true"}}},
            "parameterGroups": {"flags": {}},
            "conditions": [{"name": "ios"}]
        }))
        .unwrap();

        assert_eq!(template.version, Some(7));
        assert_eq!(template.parameter_groups.len(), 1);
        assert_eq!(template.conditions.len(), 1);
    }

    #[test]
    fn test_empty_template_normalizes() {
        let normalized = ConfigTemplate::empty().normalized().unwrap();
        assert_eq!(normalized["parameters"], json!({}));
    }
}
