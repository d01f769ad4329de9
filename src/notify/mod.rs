//! Event handling and webhook delivery.

mod handler;
mod webhook;

pub use handler::ChangeNotifier;
pub use webhook::{MessageSink, WebhookSink};
