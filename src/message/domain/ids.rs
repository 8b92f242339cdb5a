//! Domain identifier and tag newtypes for notification messages.
//!
//! Identifiers and tags are authored by hand in the source document, so they
//! wrap plain strings and are passed through verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a notification message as authored in the source document.
///
/// Uniqueness is not enforced: two messages may carry the same identifier.
///
/// # Examples
///
/// ```
/// use my_messages::message::domain::MessageId;
///
/// let id = MessageId::new("demo-no-filter-at-all");
/// assert_eq!(id.as_str(), "demo-no-filter-at-all");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a message identifier from its authored value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of message, such as `notification`.
///
/// The set of kinds is open; unrecognised values are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageType(String);

impl MessageType {
    /// Tag used for ordinary notifications.
    pub const NOTIFICATION: &'static str = "notification";

    /// Creates a message type tag.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the tag is `notification`.
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.0 == Self::NOTIFICATION
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display priority of a message.
///
/// Documents author priority either as a tag such as `"high"` or as a
/// numeric rank. Both forms are kept as written.
///
/// # Examples
///
/// ```
/// use my_messages::message::domain::Priority;
///
/// let tagged: Priority = serde_json::from_str(r#""High""#).expect("tag parses");
/// assert!(tagged.is_high());
///
/// let ranked: Priority = serde_json::from_str("1").expect("rank parses");
/// assert_eq!(ranked.as_ordinal(), Some(1));
/// assert!(!ranked.is_high());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    /// Numeric rank.
    Ordinal(u32),
    /// Named tag.
    Tag(String),
}

impl Priority {
    /// Tag used for messages that should be highlighted.
    pub const HIGH: &'static str = "high";

    /// Creates a priority tag.
    #[must_use]
    pub fn tag(value: impl Into<String>) -> Self {
        Self::Tag(value.into())
    }

    /// Creates a numeric priority.
    #[must_use]
    pub const fn ordinal(rank: u32) -> Self {
        Self::Ordinal(rank)
    }

    /// Returns the tag, if the priority was authored as a string.
    #[must_use]
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag.as_str()),
            Self::Ordinal(_) => None,
        }
    }

    /// Returns the rank, if the priority was authored as a number.
    #[must_use]
    pub const fn as_ordinal(&self) -> Option<u32> {
        match self {
            Self::Ordinal(rank) => Some(*rank),
            Self::Tag(_) => None,
        }
    }

    /// Returns `true` when the tag is `high`, ignoring ASCII case.
    ///
    /// Numeric ranks are never considered high; their ordering is left to
    /// the caller.
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.as_tag()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(Self::HIGH))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal(rank) => write!(f, "{rank}"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}
