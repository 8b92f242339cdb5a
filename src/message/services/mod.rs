//! Services for the message subsystem.
//!
//! - [`MessageSource`] reads the configured message document.
//! - [`live_messages`] and [`live_messages_on`] select messages inside their
//!   date window, for callers that want that on top of the raw list.

mod schedule;
mod source;

pub use schedule::{live_messages, live_messages_on};
pub use source::{MessageSource, MessageSourceResult};
