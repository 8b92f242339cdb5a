//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the reader requires from its
//! environment. Adapters implement these ports to connect the reader to
//! environment variables, the filesystem, or in-memory fixtures.

pub mod config;
pub mod locator;

pub use config::{ConfigError, ConfigResult, ConfigSource, MESSAGE_SOURCE_KEY};
pub use locator::{Locator, LocatorError, LocatorResult, Resource};
