//! Turns a change event and its two template snapshots into a message payload.

use crate::core::{ChangeEvent, ConfigTemplate, TemplateDiff};
use crate::error::Result;
use crate::message::{Block, ContextElement, MessagePayload};

/// Formats configuration-change notifications.
///
/// Pure transform: given a [`ChangeEvent`] and the two [`ConfigTemplate`]
/// snapshots it references, produces the ordered block payload. Performs no
/// I/O.
///
/// # Examples
///
/// ```rust,no_run
/// use config_notify::core::{ChangeEvent, ConfigTemplate};
/// use config_notify::message::NotificationFormatter;
///
/// # fn example(event: ChangeEvent, previous: ConfigTemplate, current: ConfigTemplate)
/// #     -> config_notify::error::Result<()> {
/// let payload = NotificationFormatter::new("https://console.firebase.google.com")
///     .format(&event, &previous, &current)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NotificationFormatter {
    console_base_url: String,
}

impl NotificationFormatter {
    /// Create a formatter linking project names to the given console base URL.
    pub fn new(console_base_url: impl Into<String>) -> Self {
        Self {
            console_base_url: console_base_url.into(),
        }
    }

    /// Build the message payload for a change event.
    ///
    /// Block order is fixed: author/project context, type/origin/version
    /// context, then the optional description and diff blocks. The
    /// description and diff blocks are omitted entirely when their source
    /// data is absent.
    pub fn format(
        &self,
        event: &ChangeEvent,
        previous: &ConfigTemplate,
        current: &ConfigTemplate,
    ) -> Result<MessagePayload> {
        let diff = TemplateDiff::between(&previous.normalized()?, &current.normalized()?);

        let mut blocks = Vec::with_capacity(4);
        blocks.push(self.header_block(event));
        blocks.push(Self::details_block(event));

        if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
            blocks.push(Block::Context {
                elements: vec![ContextElement::Mrkdwn {
                    text: format!("*Description*: {}", description),
                }],
            });
        }

        if !diff.is_empty() {
            blocks.push(Block::preformatted(diff.render()));
        }

        Ok(MessagePayload { blocks })
    }

    /// Header: avatar image (if any) | author | project link.
    fn header_block(&self, event: &ChangeEvent) -> Block {
        let user = event.update_user.as_ref();

        let mut elements = Vec::with_capacity(3);
        if let Some(image_url) = user.and_then(|u| u.image_url.as_deref()) {
            elements.push(ContextElement::Image {
                image_url: image_url.to_string(),
                alt_text: "author image".to_string(),
            });
        }

        let author = user
            .and_then(|u| u.name.as_deref().or(u.email.as_deref()))
            .unwrap_or("unknown");
        elements.push(ContextElement::Mrkdwn {
            text: format!("*Author*: {}", author),
        });

        elements.push(ContextElement::Mrkdwn {
            text: format!(
                "*Project*: <{}/project/{}/config|{}>",
                self.console_base_url, event.project, event.project
            ),
        });

        Block::Context { elements }
    }

    /// Details: type | origin | version.
    fn details_block(event: &ChangeEvent) -> Block {
        Block::Context {
            elements: vec![
                ContextElement::Mrkdwn {
                    text: format!("*Type*: {}", event.update_type),
                },
                ContextElement::Mrkdwn {
                    text: format!("*Origin*: {}", event.update_origin),
                },
                ContextElement::Mrkdwn {
                    text: format!("*Version*: {}", event.version_number),
                },
            ],
        }
    }
}

impl Default for NotificationFormatter {
    fn default() -> Self {
        Self::new("https://console.firebase.google.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{UpdateOrigin, UpdateType, UpdateUser};
    use chrono::Utc;
    use serde_json::json;

    fn event(description: Option<&str>, user: Option<UpdateUser>) -> ChangeEvent {
        ChangeEvent {
            project: "acme-prod".to_string(),
            version_number: 5,
            update_type: UpdateType::Rollback,
            update_origin: UpdateOrigin::Console,
            update_time: Utc::now(),
            description: description.map(str::to_string),
            update_user: user,
        }
    }

    fn template(params: &[(&str, serde_json::Value)]) -> ConfigTemplate {
        let mut template = ConfigTemplate::empty();
        for (key, value) in params {
            template.parameters.insert((*key).to_string(), value.clone());
        }
        template
    }

    fn mrkdwn_texts(block: &Block) -> Vec<String> {
        match block {
            Block::Context { elements } => elements
                .iter()
                .filter_map(|e| match e {
                    ContextElement::Mrkdwn { text } => Some(text.clone()),
                    ContextElement::Image { .. } => None,
                })
                .collect(),
            Block::RichText { .. } => Vec::new(),
        }
    }

    #[test]
    fn test_author_falls_back_to_email() {
        let user = UpdateUser {
            name: None,
            email: Some("a@b.com".to_string()),
            image_url: None,
        };
        let payload = NotificationFormatter::default()
            .format(&event(None, Some(user)), &template(&[]), &template(&[]))
            .unwrap();
        assert!(mrkdwn_texts(&payload.blocks[0]).contains(&"*Author*: a@b.com".to_string()));
    }

    #[test]
    fn test_author_falls_back_to_unknown() {
        let payload = NotificationFormatter::default()
            .format(&event(None, None), &template(&[]), &template(&[]))
            .unwrap();
        assert!(mrkdwn_texts(&payload.blocks[0]).contains(&"*Author*: unknown".to_string()));
    }

    #[test]
    fn test_author_prefers_name() {
        let user = UpdateUser {
            name: Some("Jo".to_string()),
            email: Some("a@b.com".to_string()),
            image_url: None,
        };
        let payload = NotificationFormatter::default()
            .format(&event(None, Some(user)), &template(&[]), &template(&[]))
            .unwrap();
        assert!(mrkdwn_texts(&payload.blocks[0]).contains(&"*Author*: Jo".to_string()));
    }

    #[test]
    fn test_avatar_present_iff_image_url() {
        let with_image = UpdateUser {
            name: Some("Jo".to_string()),
            email: None,
            image_url: Some("https://example.com/jo.png".to_string()),
        };
        let payload = NotificationFormatter::default()
            .format(&event(None, Some(with_image)), &template(&[]), &template(&[]))
            .unwrap();
        let Block::Context { elements } = &payload.blocks[0] else {
            panic!("expected context block");
        };
        assert!(matches!(elements[0], ContextElement::Image { .. }));

        let without_image = UpdateUser {
            name: Some("Jo".to_string()),
            email: None,
            image_url: None,
        };
        let payload = NotificationFormatter::default()
            .format(&event(None, Some(without_image)), &template(&[]), &template(&[]))
            .unwrap();
        let Block::Context { elements } = &payload.blocks[0] else {
            panic!("expected context block");
        };
        assert!(elements.iter().all(|e| !matches!(e, ContextElement::Image { .. })));
    }

    #[test]
    fn test_project_link() {
        let payload = NotificationFormatter::default()
            .format(&event(None, None), &template(&[]), &template(&[]))
            .unwrap();
        assert!(mrkdwn_texts(&payload.blocks[0]).contains(
            &"*Project*: <https://console.firebase.google.com/project/acme-prod/config|acme-prod>"
                .to_string()
        ));
    }

    #[test]
    fn test_details_block() {
        let payload = NotificationFormatter::default()
            .format(&event(None, None), &template(&[]), &template(&[]))
            .unwrap();
        assert_eq!(
            mrkdwn_texts(&payload.blocks[1]),
            vec!["*Type*: ROLLBACK", "*Origin*: CONSOLE", "*Version*: 5"]
        );
    }

    #[test]
    fn test_description_block_only_when_present() {
        let without = NotificationFormatter::default()
            .format(&event(None, None), &template(&[]), &template(&[]))
            .unwrap();
        assert_eq!(without.blocks.len(), 2);

        let with = NotificationFormatter::default()
            .format(&event(Some("rollback"), None), &template(&[]), &template(&[]))
            .unwrap();
        assert_eq!(with.blocks.len(), 3);
        assert_eq!(
            mrkdwn_texts(&with.blocks[2]),
            vec!["*Description*: rollback"]
        );
    }

    #[test]
    fn test_empty_description_emits_no_block() {
        let payload = NotificationFormatter::default()
            .format(&event(Some(""), None), &template(&[]), &template(&[]))
            .unwrap();
        assert_eq!(payload.blocks.len(), 2);
    }

    #[test]
    fn test_no_diff_block_for_volatile_only_changes() {
        let mut previous = template(&[("flag_a", json!("true"))]);
        previous.version = Some(4);
        previous.etag = Some("etag-4".to_string());
        let mut current = template(&[("flag_a", json!("true"))]);
        current.version = Some(5);
        current.etag = Some("etag-5".to_string());

        let payload = NotificationFormatter::default()
            .format(&event(None, None), &previous, &current)
            .unwrap();
        assert!(payload
            .blocks
            .iter()
            .all(|b| !matches!(b, Block::RichText { .. })));
    }

    #[test]
    fn test_diff_block_for_semantic_changes() {
        let previous = template(&[("flag_a", json!(true))]);
        let current = template(&[("flag_a", json!(false))]);

        let payload = NotificationFormatter::default()
            .format(&event(None, None), &previous, &current)
            .unwrap();
        let diff_block = payload
            .blocks
            .iter()
            .find(|b| matches!(b, Block::RichText { .. }))
            .expect("diff block expected");
        assert_eq!(
            *diff_block,
            Block::preformatted("~ parameters.flag_a: true -> false")
        );
    }
}
