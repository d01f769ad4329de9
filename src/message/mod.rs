//! Message payload model and notification formatting.

mod blocks;
mod formatter;

pub use blocks::{Block, ContextElement, MessagePayload, RichTextElement, TextElement};
pub use formatter::NotificationFormatter;
