//! Structural diffing of normalized template snapshots.

use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// A single added, removed, or changed key in a template diff.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffEntry {
    /// A key present only in the current snapshot.
    Added {
        /// Dotted path to the key
        path: String,
        /// The new value
        value: Value,
    },
    /// A key present only in the previous snapshot.
    Removed {
        /// Dotted path to the key
        path: String,
        /// The removed value
        value: Value,
    },
    /// A key present in both snapshots with different values.
    Changed {
        /// Dotted path to the key
        path: String,
        /// The previous value
        old: Value,
        /// The current value
        new: Value,
    },
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { path, value } => write!(f, "+ {}: {}", path, value),
            Self::Removed { path, value } => write!(f, "- {}: {}", path, value),
            Self::Changed { path, old, new } => write!(f, "~ {}: {} -> {}", path, old, new),
        }
    }
}

/// Structural diff between two normalized template snapshots.
///
/// Objects are compared key by key, recursing into nested objects with
/// dotted paths. Entries are ordered lexicographically by path so the
/// rendering is stable, and every changed key is included regardless of
/// how many there are.
///
/// # Examples
///
/// ```rust
/// use config_notify::core::TemplateDiff;
/// use serde_json::json;
///
/// let diff = TemplateDiff::between(
///     &json!({"parameters": {"flag_a": "true"}}),
///     &json!({"parameters": {"flag_a": "false"}}),
/// );
/// assert_eq!(diff.render(), "~ parameters.flag_a: \"true\" -> \"false\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateDiff {
    entries: Vec<DiffEntry>,
}

impl TemplateDiff {
    /// Compute the diff between two snapshots.
    pub fn between(previous: &Value, current: &Value) -> Self {
        let mut entries = Vec::new();
        collect("", previous, current, &mut entries);
        Self { entries }
    }

    /// True when the two snapshots are structurally equal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The individual diff entries in path order.
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Render the diff as stable, line-oriented text.
    ///
    /// One line per entry: `+ path: value` for additions, `- path: value`
    /// for removals, `~ path: old -> new` for changes.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.entries.iter().map(|e| e.to_string()).collect();
        lines.join("\n")
    }
}

impl fmt::Display for TemplateDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn collect(path: &str, previous: &Value, current: &Value, entries: &mut Vec<DiffEntry>) {
    match (previous, current) {
        (Value::Object(prev), Value::Object(curr)) => {
            let keys: BTreeSet<&String> = prev.keys().chain(curr.keys()).collect();
            for key in keys {
                let child = join_path(path, key);
                match (prev.get(key), curr.get(key)) {
                    (Some(old), Some(new)) => collect(&child, old, new, entries),
                    (Some(old), None) => entries.push(DiffEntry::Removed {
                        path: child,
                        value: old.clone(),
                    }),
                    (None, Some(new)) => entries.push(DiffEntry::Added {
                        path: child,
                        value: new.clone(),
                    }),
                    (None, None) => unreachable!("key came from one of the two maps"),
                }
            }
        }
        // Arrays and scalars are compared as whole values.
        (old, new) if old != new => entries.push(DiffEntry::Changed {
            path: path.to_string(),
            old: old.clone(),
            new: new.clone(),
        }),
        _ => {}
    }
}
