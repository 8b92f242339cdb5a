//! The notification message record.

use super::{MessageFilter, MessageId, MessageType, Priority};
use crate::message::error::FilterDateError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Call-to-action button shown with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    label: String,
    url: String,
}

impl ActionButton {
    /// Creates an action button.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the button target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A user-facing notification message.
///
/// Only `id` and `title` are required. Every other field is optional and stays
/// absent when the source document omits it; in particular a message without
/// a `filter` is distinct from one with an empty filter.
///
/// # Examples
///
/// ```
/// use my_messages::message::domain::{Message, MessageFilter};
///
/// let message = Message::new("expired-the-day-Elvis-died", "Expired")
///     .with_filter(MessageFilter::new().with_expire_date("1977-08-16"));
///
/// assert_eq!(message.id().as_str(), "expired-the-day-Elvis-died");
/// assert_eq!(message.short_title_or_title(), "Expired");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message_type: Option<MessageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_button: Option<ActionButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filter: Option<MessageFilter>,
}

impl Message {
    /// Creates a message with only its required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(id),
            title: title.into(),
            title_short: None,
            description: None,
            message_type: None,
            priority: None,
            action_button: None,
            filter: None,
        }
    }

    /// Sets the short title.
    #[must_use]
    pub fn with_title_short(mut self, title_short: impl Into<String>) -> Self {
        self.title_short = Some(title_short.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the message type.
    #[must_use]
    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = Some(message_type);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the action button.
    #[must_use]
    pub fn with_action_button(mut self, action_button: ActionButton) -> Self {
        self.action_button = Some(action_button);
        self
    }

    /// Sets the eligibility filter.
    #[must_use]
    pub fn with_filter(mut self, filter: MessageFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the full title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the short title exactly as authored.
    #[must_use]
    pub fn title_short(&self) -> Option<&str> {
        self.title_short.as_deref()
    }

    /// Returns the short title, falling back to the full title when absent.
    #[must_use]
    pub fn short_title_or_title(&self) -> &str {
        self.title_short.as_deref().unwrap_or(&self.title)
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the message type.
    #[must_use]
    pub const fn message_type(&self) -> Option<&MessageType> {
        self.message_type.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Option<&Priority> {
        self.priority.as_ref()
    }

    /// Returns the action button.
    #[must_use]
    pub const fn action_button(&self) -> Option<&ActionButton> {
        self.action_button.as_ref()
    }

    /// Returns the eligibility filter.
    #[must_use]
    pub const fn filter(&self) -> Option<&MessageFilter> {
        self.filter.as_ref()
    }

    /// Reports whether the message's date window admits `date`.
    ///
    /// A message without a filter is always live.
    ///
    /// # Errors
    ///
    /// Returns [`FilterDateError`] when a filter date is malformed.
    pub fn is_live_on(&self, date: NaiveDate) -> Result<bool, FilterDateError> {
        self.filter
            .as_ref()
            .map_or(Ok(true), |filter| filter.is_live_on(date))
    }
}
