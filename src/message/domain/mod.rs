//! Domain types for notification messages.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable once parsed and serialisable via serde in the
//! camelCase shape of the source document.

mod collection;
mod filter;
mod ids;
mod message;

pub use collection::MessageCollection;
pub use filter::MessageFilter;
pub use ids::{MessageId, MessageType, Priority};
pub use message::{ActionButton, Message};
