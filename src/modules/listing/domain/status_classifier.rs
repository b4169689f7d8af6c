//! Status of time-bounded records relative to "now"

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Past,
}

impl EventStatus {
    /// Label shown next to the record
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Em breve",
            EventStatus::Ongoing => "Em andamento",
            EventStatus::Past => "Encerrado",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify `[start, end]` against `now`. Both bounds are inclusive.
///
/// An inverted interval (`end < start`) is not special-cased: the rules are
/// applied in order, so it reads as PAST once `now` passes `end` and as
/// UPCOMING before that.
pub fn classify(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> EventStatus {
    if end < now {
        EventStatus::Past
    } else if start <= now {
        EventStatus::Ongoing
    } else {
        EventStatus::Upcoming
    }
}
