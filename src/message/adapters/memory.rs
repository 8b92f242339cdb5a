//! In-memory implementations of the configuration and locator ports.
//!
//! Both adapters are built up front and are read-only afterwards, so they
//! need no locking and can be shared freely across threads.

use crate::message::ports::{
    ConfigError, ConfigResult, ConfigSource, Locator, LocatorError, LocatorResult, Resource,
};
use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

/// Fixed key/value configuration.
///
/// # Example
///
/// ```
/// use my_messages::message::adapters::memory::InMemoryConfigSource;
/// use my_messages::message::ports::ConfigSource;
///
/// let config = InMemoryConfigSource::new().with_property("message.source", "demo.json");
/// assert_eq!(config.property("message.source").ok().as_deref(), Some("demo.json"));
/// assert!(config.property("other.key").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    properties: HashMap<String, String>,
}

impl InMemoryConfigSource {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn property(&self, key: &str) -> ConfigResult<String> {
        self.properties
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::missing(key))
    }
}

/// Locator over documents held in memory, keyed by exact location string.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocator {
    resources: HashMap<String, Arc<[u8]>>,
}

impl InMemoryLocator {
    /// Creates a locator with no resources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the resource at `location`.
    #[must_use]
    pub fn with_resource(mut self, location: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let contents: Vec<u8> = bytes.into();
        self.resources.insert(location.into(), Arc::from(contents));
        self
    }
}

impl Locator for InMemoryLocator {
    fn resource(&self, location: &str) -> LocatorResult<Box<dyn Resource>> {
        let bytes = self
            .resources
            .get(location)
            .ok_or_else(|| LocatorError::NotFound(location.to_owned()))?;
        Ok(Box::new(InMemoryResource {
            bytes: Arc::clone(bytes),
        }))
    }
}

/// Resource backed by a shared byte buffer.
#[derive(Debug, Clone)]
struct InMemoryResource {
    bytes: Arc<[u8]>,
}

impl Resource for InMemoryResource {
    fn open_stream(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.bytes))))
    }
}
