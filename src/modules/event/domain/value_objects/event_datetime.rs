//! `dd/MM/yyyy HH:mm` wall-clock timestamps
//!
//! The backend sends event times in this exact pattern (not ISO-8601). Parsing
//! is strict: two-digit day, month, hour and minute, four-digit year, 24h clock.

use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub const WIRE_FORMAT: &str = "%d/%m/%Y %H:%M";

fn wire_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}$").expect("wire date pattern is valid")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDateTime(NaiveDateTime);

impl EventDateTime {
    pub fn new(naive: NaiveDateTime) -> Self {
        Self(naive)
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        if !wire_shape().is_match(raw) {
            return Err(AppError::InvalidInput(format!(
                "Expected dd/MM/yyyy HH:mm, got '{}'",
                raw
            )));
        }
        let naive = NaiveDateTime::parse_from_str(raw, WIRE_FORMAT)?;
        Ok(Self(naive))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Absolute instant of this wall-clock time in `tz`
    ///
    /// A time repeated by a DST fold resolves to the earlier instant; a time
    /// skipped by a DST gap does not exist and yields `None`.
    pub fn to_instant(&self, tz: Tz) -> Option<DateTime<Utc>> {
        match tz.from_local_datetime(&self.0) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => None,
        }
    }

    /// Wall-clock time in `tz` of an absolute instant
    pub fn from_instant(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self(instant.with_timezone(&tz).naive_local())
    }
}

impl fmt::Display for EventDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl FromStr for EventDateTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EventDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
