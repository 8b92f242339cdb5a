//! Resource locator port: resolves a location string to a readable resource.

use std::io::{self, Read};
use std::sync::Arc;
use thiserror::Error;

/// Result type for locator operations.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Resolves location strings to resources.
///
/// Resolution only interprets the location. Whether the resource can be read
/// is decided when [`Resource::open_stream`] is called.
pub trait Locator: Send + Sync {
    /// Resolves `location` to a resource.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError`] when the location cannot be interpreted by
    /// this locator.
    fn resource(&self, location: &str) -> LocatorResult<Box<dyn Resource>>;
}

/// A resolved, readable resource.
pub trait Resource: Send + Sync {
    /// Opens a fresh byte stream over the resource contents.
    ///
    /// The stream is closed when the returned reader is dropped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the resource cannot be opened.
    fn open_stream(&self) -> io::Result<Box<dyn Read + Send>>;
}

/// Errors returned while resolving a location.
#[derive(Debug, Clone, Error)]
pub enum LocatorError {
    /// The location string is empty after removing any scheme prefix.
    #[error("resource location must not be empty")]
    EmptyLocation,

    /// The location uses a scheme this locator does not serve.
    #[error("unsupported resource scheme '{scheme}' in '{location}'")]
    UnsupportedScheme {
        /// Scheme prefix, without the trailing colon.
        scheme: String,
        /// Full location string.
        location: String,
    },

    /// No resource is known under the location.
    #[error("no resource at '{0}'")]
    NotFound(String),

    /// The locator backend failed.
    #[error("resource locator error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl LocatorError {
    /// Creates an unsupported-scheme error.
    #[must_use]
    pub fn unsupported_scheme(scheme: impl Into<String>, location: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
            location: location.into(),
        }
    }

    /// Wraps a failure from the locator backend.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
