//! Core data model: templates, change events, and structural diffs.

mod diff;
mod event;
mod template;

pub use diff::{DiffEntry, TemplateDiff};
pub use event::{ChangeEvent, UpdateOrigin, UpdateType, UpdateUser};
pub use template::ConfigTemplate;
