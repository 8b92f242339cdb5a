//! Top-level message document.

use super::Message;
use serde::{Deserialize, Serialize};

/// Parsed message document: `{ "messages": [ ... ] }`.
///
/// The `messages` field is required. A document without it fails to
/// deserialize, while an empty array yields an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCollection {
    messages: Vec<Message>,
}

impl MessageCollection {
    /// Creates a collection from messages in display order.
    #[must_use]
    pub const fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Returns the messages in document order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when the document lists no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consumes the collection, returning its messages in document order.
    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
