//! Core type definitions used throughout the codebase

use crate::core::error::{FoalError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for foals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoalId(pub Uuid);

impl FoalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FoalId {
    fn default() -> Self {
        Self::new()
    }
}

/// Age in whole days since birth
pub type AgeDays = u32;

/// Upper bound for stress and bonding readings
pub const MAX_LEVEL: u8 = 100;

/// Clamp a raw stress/bonding reading into 0..=100
pub fn clamp_level(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, MAX_LEVEL as f64) as u8
}

/// Serde helper: accept any numeric reading and clamp it
pub fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_level(raw))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry<T> {
    Known(T),
    Unknown(serde::de::IgnoredAny),
}

/// Serde helper: read a list, dropping entries that do not deserialize as `T`
///
/// Skipped entries are logged under `label`.
pub fn deserialize_known_entries<'de, D, T>(
    deserializer: D,
    label: &str,
) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Vec::<Entry<T>>::deserialize(deserializer)?;
    let total = entries.len();
    let known: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Known(value) => Some(value),
            Entry::Unknown(_) => None,
        })
        .collect();
    if known.len() < total {
        tracing::warn!("Skipped {} unrecognized {} entries", total - known.len(), label);
    }
    Ok(known)
}

// `%#z` also takes `Z` and hour-only offsets
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A UTC instant with millisecond precision
///
/// Callers hand us either ISO-8601 strings or epoch milliseconds; both
/// normalize to the same representation so comparisons never depend on
/// which form the data arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build from epoch milliseconds
    pub fn from_millis(millis: i64) -> Result<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Self)
            .ok_or(FoalError::TimestampOutOfRange(millis))
    }

    /// Parse an RFC 3339 / ISO-8601 string
    ///
    /// Accepts basic offsets (`+0200`), times without seconds, and bare
    /// dates. Strings without an offset are read as UTC; a bare date is
    /// UTC midnight.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
                return Ok(Self(dt.with_timezone(&Utc)));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| FoalError::InvalidTimestamp(raw.to_string()))
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Milliseconds from `earlier` to `self` (negative if `self` is before)
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.as_millis() - earlier.as_millis()
    }

    /// Shift forward by whole minutes
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + chrono::Duration::minutes(minutes))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = FoalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parsed = match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(ms) => Timestamp::from_millis(ms),
            RawTimestamp::Text(s) => Timestamp::parse(&s),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
