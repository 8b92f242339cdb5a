//! my-messages: user-facing notification messages read from a JSON document.
//!
//! The crate reads a configured message document, parses it into typed
//! messages, and reports any failure along the way as a single fatal error.
//! Deciding which messages to show is left to callers, with optional helpers
//! for date-window selection.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure message types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for configuration and resource lookup
//! - **Adapters**: Concrete implementations of ports (environment, filesystem, memory)
//!
//! # Modules
//!
//! - [`message`]: Message types, the document reader, and its collaborators

pub mod message;
