//! Configuration port for string-keyed settings.

use std::sync::Arc;
use thiserror::Error;

/// Configuration key naming the location of the message document.
pub const MESSAGE_SOURCE_KEY: &str = "message.source";

/// Result type for configuration lookups.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Source of string-keyed configuration values.
///
/// Implementations must be stateless from the caller's point of view: a
/// lookup has no side effects and may run concurrently with other lookups.
pub trait ConfigSource: Send + Sync {
    /// Returns the value configured under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no value is configured, or
    /// another [`ConfigError`] when the value cannot be read.
    fn property(&self, key: &str) -> ConfigResult<String>;
}

/// Errors returned by configuration adapters.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No value is configured for the key.
    #[error("no value configured for '{0}'")]
    Missing(String),

    /// A value exists but cannot be used.
    #[error("value for '{key}' is unreadable: {reason}")]
    Unreadable {
        /// Configuration key.
        key: String,
        /// Reason string.
        reason: String,
    },

    /// The configuration backend failed.
    #[error("configuration backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigError {
    /// Creates a missing-value error.
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing(key.into())
    }

    /// Creates an unreadable-value error.
    #[must_use]
    pub fn unreadable(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unreadable {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a failure from the configuration backend.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
