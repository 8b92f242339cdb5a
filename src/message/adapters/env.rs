//! Environment-variable backed configuration.

use crate::message::ports::{ConfigError, ConfigResult, ConfigSource};
use std::env::{self, VarError};

/// Reads configuration from process environment variables.
///
/// A dotted key maps to a variable name by upper-casing it and replacing
/// `.` and `-` with `_`, so `message.source` is read from `MESSAGE_SOURCE`.
/// An optional prefix is prepended with an underscore separator.
///
/// # Example
///
/// ```
/// use my_messages::message::adapters::env::EnvConfigSource;
///
/// assert_eq!(EnvConfigSource::new().variable_name("message.source"), "MESSAGE_SOURCE");
/// assert_eq!(
///     EnvConfigSource::with_prefix("my-app").variable_name("message.source"),
///     "MY_APP_MESSAGE_SOURCE"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfigSource {
    prefix: Option<String>,
}

impl EnvConfigSource {
    /// Creates a source reading unprefixed variables.
    #[must_use]
    pub const fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates a source whose variable names start with `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the environment variable consulted for `key`.
    #[must_use]
    pub fn variable_name(&self, key: &str) -> String {
        let name = normalise(key);
        match self.prefix.as_deref() {
            Some(prefix) => format!("{}_{name}", normalise(prefix)),
            None => name,
        }
    }
}

impl ConfigSource for EnvConfigSource {
    fn property(&self, key: &str) -> ConfigResult<String> {
        let variable = self.variable_name(key);
        match env::var(&variable) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Err(ConfigError::missing(key)),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::unreadable(
                key,
                format!("environment variable {variable} is not valid Unicode"),
            )),
        }
    }
}

fn normalise(key: &str) -> String {
    key.chars()
        .map(|ch| match ch {
            '.' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
