//! Typed Slack Block Kit payload model.
//!
//! Only the block shapes the notifier emits are modeled: `context` blocks
//! for metadata lines and a `rich_text` block carrying the preformatted
//! diff. See <https://api.slack.com/reference/block-kit/blocks>.

use serde::Serialize;

/// An element inside a `context` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextElement {
    /// An inline image.
    Image {
        /// Publicly reachable image URL
        image_url: String,
        /// Alt text for the image
        alt_text: String,
    },
    /// Markdown-formatted text.
    Mrkdwn {
        /// The markdown text
        text: String,
    },
}

/// A plain-text element inside a rich-text section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextElement {
    /// Literal text.
    Text {
        /// The text content
        text: String,
    },
}

/// An element inside a `rich_text` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    /// A preformatted (code-style) section.
    RichTextPreformatted {
        /// The text elements of the section
        elements: Vec<TextElement>,
    },
}

/// A top-level message block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A context block of small inline elements.
    Context {
        /// The block's elements
        elements: Vec<ContextElement>,
    },
    /// A rich-text block.
    RichText {
        /// The block's elements
        elements: Vec<RichTextElement>,
    },
}

impl Block {
    /// A rich-text block containing a single preformatted text section.
    pub fn preformatted(text: impl Into<String>) -> Self {
        Block::RichText {
            elements: vec![RichTextElement::RichTextPreformatted {
                elements: vec![TextElement::Text { text: text.into() }],
            }],
        }
    }
}

/// The message payload posted to the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagePayload {
    /// Ordered display blocks.
    pub blocks: Vec<Block>,
}
