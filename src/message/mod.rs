//! Notification message reading for `my-messages`.
//!
//! This module loads a JSON document describing user-facing notification
//! messages and exposes them as typed [`domain::Message`] values.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::MessageFilter`], [`domain::MessageCollection`])
//! - **Ports**: Abstract trait interfaces ([`ports::ConfigSource`], [`ports::Locator`], [`ports::Resource`])
//! - **Adapters**: Concrete implementations ([`adapters::env::EnvConfigSource`], [`adapters::filesystem::FilesystemLocator`], [`adapters::memory`])
//! - **Services**: The reader ([`services::MessageSource`]) and caller-side date-window helpers
//!
//! # Example
//!
//! ```
//! use my_messages::message::adapters::memory::{InMemoryConfigSource, InMemoryLocator};
//! use my_messages::message::ports::MESSAGE_SOURCE_KEY;
//! use my_messages::message::services::MessageSource;
//! use std::sync::Arc;
//!
//! let document = r#"{ "messages": [
//!     { "id": "welcome", "title": "Welcome", "titleShort": "Hi" },
//!     { "id": "outage", "title": "Planned outage", "priority": "high" }
//! ] }"#;
//! let config = InMemoryConfigSource::new().with_property(MESSAGE_SOURCE_KEY, "classpath:messages.json");
//! let locator = InMemoryLocator::new().with_resource("classpath:messages.json", document);
//!
//! let source = MessageSource::new(Arc::new(config), Arc::new(locator));
//! let messages = source.all_messages().expect("document should parse");
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].title_short(), Some("Hi"));
//! assert!(messages[1].priority().is_some_and(|p| p.is_high()));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
