//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp at seconds precision,
//! rendered as `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! The ledger reports registration dates as epoch seconds; this type is
//! the absolute-instant form exposed to callers. Sub-second components
//! are truncated at construction so that equal instants always render
//! identically, regardless of where the value came from.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Build from epoch seconds, as reported by the ledger.
    ///
    /// Returns `None` when the value is outside chrono's representable
    /// range (a corrupt or nonsensical on-chain field).
    pub fn from_epoch_seconds(secs: u64) -> Option<Self> {
        let signed = i64::try_from(secs).ok()?;
        DateTime::<Utc>::from_timestamp(signed, 0).map(Self)
    }

    /// Build from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Seconds since the epoch.
    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// The underlying `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision.
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
