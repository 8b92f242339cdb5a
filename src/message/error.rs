//! Error types for reading and interpreting message documents.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Every
//! variant keeps the original cause reachable through
//! [`std::error::Error::source`].

use crate::message::ports::{ConfigError, LocatorError};
use thiserror::Error;

/// Fatal failure of [`crate::message::services::MessageSource::all_messages`].
///
/// The read either yields the whole message list or one of these errors;
/// there are no partial results. Callers typically treat any variant as
/// "message source unavailable".
#[derive(Debug, Error)]
pub enum MessageSourceError {
    /// The source location could not be read from configuration.
    #[error("failed to read configuration property '{key}': {source}")]
    Configuration {
        /// Configuration key that was looked up.
        key: String,
        /// Underlying configuration failure.
        #[source]
        source: ConfigError,
    },

    /// The configured location could not be resolved to a resource.
    #[error("failed to resolve message source '{location}': {source}")]
    ResourceResolution {
        /// Configured location string.
        location: String,
        /// Underlying locator failure.
        #[source]
        source: LocatorError,
    },

    /// The resource could not be opened or read.
    #[error("failed to read message source '{location}': {source}")]
    Io {
        /// Configured location string.
        location: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the message schema.
    #[error("malformed message document '{location}': {source}")]
    MalformedDocument {
        /// Configured location string.
        location: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl MessageSourceError {
    /// Creates a configuration error for `key`.
    #[must_use]
    pub fn configuration(key: impl Into<String>, source: ConfigError) -> Self {
        Self::Configuration {
            key: key.into(),
            source,
        }
    }

    /// Creates a resource resolution error for `location`.
    #[must_use]
    pub fn resource_resolution(location: impl Into<String>, source: LocatorError) -> Self {
        Self::ResourceResolution {
            location: location.into(),
            source,
        }
    }

    /// Creates an I/O error for `location`.
    #[must_use]
    pub fn io(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source,
        }
    }

    /// Classifies a JSON failure for `location`.
    ///
    /// `serde_json` reports read failures of the underlying stream as JSON
    /// errors; those are surfaced as [`Self::Io`] so that only genuine
    /// document problems become [`Self::MalformedDocument`].
    #[must_use]
    pub fn from_json(location: impl Into<String>, source: serde_json::Error) -> Self {
        if source.is_io() {
            let io_error = std::io::Error::from(source);
            Self::io(location, io_error)
        } else {
            Self::MalformedDocument {
                location: location.into(),
                source,
            }
        }
    }

    /// Returns `true` for configuration failures.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns `true` for resource resolution failures.
    #[must_use]
    pub const fn is_resource_resolution(&self) -> bool {
        matches!(self, Self::ResourceResolution { .. })
    }

    /// Returns `true` for I/O failures.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` for malformed documents.
    #[must_use]
    pub const fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument { .. })
    }
}

/// A filter date that is not in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} '{value}': {source}")]
pub struct FilterDateError {
    field: &'static str,
    value: String,
    #[source]
    source: chrono::ParseError,
}

impl FilterDateError {
    /// Creates a date error for the named filter field.
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self {
            field,
            value: value.into(),
            source,
        }
    }

    /// Returns the document field name, such as `goLiveDate`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
