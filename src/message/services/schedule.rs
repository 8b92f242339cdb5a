//! Caller-side date-window selection over a parsed message list.
//!
//! [`super::MessageSource`] never evaluates filters. Callers that want only
//! the messages currently inside their go-live/expiry window layer these
//! helpers on top of the raw list. Group membership is not evaluated.

use crate::message::domain::Message;
use chrono::NaiveDate;
use mockable::Clock;

/// Returns the messages whose date window admits `date`, in input order.
///
/// Messages without a filter are always kept. Messages whose filter dates
/// cannot be parsed are dropped and reported at `warn` level.
#[must_use]
pub fn live_messages_on(messages: &[Message], date: NaiveDate) -> Vec<&Message> {
    messages
        .iter()
        .filter(|message| match message.is_live_on(date) {
            Ok(live) => live,
            Err(err) => {
                log::warn!("skipping message '{}': {err}", message.id());
                false
            }
        })
        .collect()
}

/// Returns the messages live on the clock's current UTC date.
///
/// See [`live_messages_on`] for the selection rules.
#[must_use]
pub fn live_messages<'a>(messages: &'a [Message], clock: &impl Clock) -> Vec<&'a Message> {
    live_messages_on(messages, clock.utc().date_naive())
}
