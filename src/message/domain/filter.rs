//! Display eligibility constraints attached to a message.

use crate::message::error::FilterDateError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Date format used by `goLiveDate` and `expireDate`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Eligibility constraints for a [`super::Message`].
///
/// Dates are kept exactly as authored. They are only parsed when a caller
/// asks for a date-window check, so a document with an unusual date still
/// loads. Group names are literal values; `Everyone` is not expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    go_live_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expire_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    groups: BTreeSet<String>,
}

impl MessageFilter {
    /// Creates a filter with no date window and no group restriction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the go-live date string.
    #[must_use]
    pub fn with_go_live_date(mut self, date: impl Into<String>) -> Self {
        self.go_live_date = Some(date.into());
        self
    }

    /// Sets the expiry date string.
    #[must_use]
    pub fn with_expire_date(mut self, date: impl Into<String>) -> Self {
        self.expire_date = Some(date.into());
        self
    }

    /// Adds audience groups.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns the go-live date as authored.
    #[must_use]
    pub fn go_live_date(&self) -> Option<&str> {
        self.go_live_date.as_deref()
    }

    /// Returns the expiry date as authored.
    #[must_use]
    pub fn expire_date(&self) -> Option<&str> {
        self.expire_date.as_deref()
    }

    /// Returns the audience groups.
    #[must_use]
    pub const fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }

    /// Returns `true` when the filter names at least one audience group.
    #[must_use]
    pub fn has_group_restriction(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Parses the go-live date.
    ///
    /// # Errors
    ///
    /// Returns [`FilterDateError`] when the date is not `YYYY-MM-DD`.
    pub fn go_live_on(&self) -> Result<Option<NaiveDate>, FilterDateError> {
        parse_date("goLiveDate", self.go_live_date.as_deref())
    }

    /// Parses the expiry date.
    ///
    /// # Errors
    ///
    /// Returns [`FilterDateError`] when the date is not `YYYY-MM-DD`.
    pub fn expire_on(&self) -> Result<Option<NaiveDate>, FilterDateError> {
        parse_date("expireDate", self.expire_date.as_deref())
    }

    /// Reports whether the date window admits `date`.
    ///
    /// The go-live date is inclusive and the expiry date is exclusive: a
    /// message expiring on `1977-08-16` was last live on `1977-08-15`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterDateError`] when either stored date is malformed.
    pub fn is_live_on(&self, date: NaiveDate) -> Result<bool, FilterDateError> {
        let started = self.go_live_on()?.is_none_or(|go_live| go_live <= date);
        let not_expired = self.expire_on()?.is_none_or(|expire| date < expire);
        Ok(started && not_expired)
    }
}

fn parse_date(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, FilterDateError> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|source| FilterDateError::new(field, value, source))
    })
    .transpose()
}

/// Reads `groups`, treating an explicit `null` like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeSet<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
