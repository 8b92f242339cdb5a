//! Adapter implementations for the message subsystem ports.
//!
//! - [`env::EnvConfigSource`] reads configuration from environment variables.
//! - [`filesystem::FilesystemLocator`] serves documents from a directory.
//! - [`memory`] holds fixed in-memory collaborators for tests and embedding.

pub mod env;
pub mod filesystem;
pub mod memory;
