//! Service that reads the configured message document.
//!
//! Provides [`MessageSource`], which looks up the document location in
//! configuration, resolves it through a [`Locator`], and parses the stream
//! into messages.

use crate::message::{
    domain::{Message, MessageCollection},
    error::MessageSourceError,
    ports::{ConfigError, ConfigSource, Locator, MESSAGE_SOURCE_KEY},
};
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Result type for message source operations.
pub type MessageSourceResult<T> = Result<T, MessageSourceError>;

/// Reads notification messages from the document named in configuration.
///
/// Every call performs a fresh read: nothing is cached between calls and the
/// service holds no mutable state, so one instance can serve concurrent
/// callers.
///
/// # Examples
///
/// ```
/// use my_messages::message::adapters::memory::{InMemoryConfigSource, InMemoryLocator};
/// use my_messages::message::ports::MESSAGE_SOURCE_KEY;
/// use my_messages::message::services::MessageSource;
/// use std::sync::Arc;
///
/// let config = InMemoryConfigSource::new().with_property(MESSAGE_SOURCE_KEY, "messages.json");
/// let locator = InMemoryLocator::new()
///     .with_resource("messages.json", r#"{ "messages": [ { "id": "a", "title": "A" } ] }"#);
/// let source = MessageSource::new(Arc::new(config), Arc::new(locator));
///
/// let messages = source.all_messages().expect("document should parse");
/// assert_eq!(messages.len(), 1);
/// ```
#[derive(Clone)]
pub struct MessageSource<C, L>
where
    C: ConfigSource,
    L: Locator,
{
    config: Arc<C>,
    locator: Arc<L>,
}

impl<C, L> MessageSource<C, L>
where
    C: ConfigSource,
    L: Locator,
{
    /// Creates a message source over the given collaborators.
    #[must_use]
    pub const fn new(config: Arc<C>, locator: Arc<L>) -> Self {
        Self { config, locator }
    }

    /// Reads every message in the configured document, in document order.
    ///
    /// No filtering, deduplication, or sorting is applied. Any failure aborts
    /// the whole read.
    ///
    /// # Errors
    ///
    /// Returns [`MessageSourceError::Configuration`] when the location is not
    /// configured or is blank, [`MessageSourceError::ResourceResolution`] when it cannot
    /// be resolved, [`MessageSourceError::Io`] when the resource cannot be
    /// opened or read, and [`MessageSourceError::MalformedDocument`] when the
    /// content is not a valid message document.
    pub fn all_messages(&self) -> MessageSourceResult<Vec<Message>> {
        let location = self
            .config
            .property(MESSAGE_SOURCE_KEY)
            .map_err(|err| MessageSourceError::configuration(MESSAGE_SOURCE_KEY, err))?;
        if location.trim().is_empty() {
            return Err(MessageSourceError::configuration(
                MESSAGE_SOURCE_KEY,
                ConfigError::unreadable(MESSAGE_SOURCE_KEY, "location is blank"),
            ));
        }

        let resource = self
            .locator
            .resource(&location)
            .map_err(|err| MessageSourceError::resource_resolution(&location, err))?;

        let stream = resource
            .open_stream()
            .map_err(|err| MessageSourceError::io(&location, err))?;

        log::debug!("reading messages from '{location}'");
        let collection = parse_collection(stream)
            .map_err(|err| MessageSourceError::from_json(&location, err))?;
        log::debug!("read {} messages from '{location}'", collection.len());

        Ok(collection.into_messages())
    }
}

/// Parses a message document, consuming and dropping the stream.
fn parse_collection(stream: Box<dyn Read + Send>) -> Result<MessageCollection, serde_json::Error> {
    serde_json::from_reader(BufReader::new(stream))
}
