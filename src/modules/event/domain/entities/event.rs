use crate::modules::event::domain::value_objects::{EventDateTime, EventType};
use crate::modules::listing::domain::{classify, EventStatus};
use crate::modules::ong::domain::OngRef;
use crate::shared::domain::value_objects::Address;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Event as listed by the backend
///
/// Dates are kept as the raw wire strings so one malformed timestamp does not
/// fail the whole fetch; they are parsed on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub event_type: EventType,
    /// `dd/MM/yyyy HH:mm`
    pub start_date: String,
    /// `dd/MM/yyyy HH:mm`
    pub end_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub ong: Option<OngRef>,
}

impl Event {
    pub fn start(&self) -> Option<EventDateTime> {
        EventDateTime::parse(&self.start_date).ok()
    }

    pub fn end(&self) -> Option<EventDateTime> {
        EventDateTime::parse(&self.end_date).ok()
    }

    pub fn starts_at(&self, tz: Tz) -> Option<DateTime<Utc>> {
        self.start().and_then(|start| start.to_instant(tz))
    }

    pub fn ends_at(&self, tz: Tz) -> Option<DateTime<Utc>> {
        self.end().and_then(|end| end.to_instant(tz))
    }

    /// UPCOMING / ONGOING / PAST at `now`; `None` if a date is malformed
    pub fn status_at(&self, now: DateTime<Utc>, tz: Tz) -> Option<EventStatus> {
        let start = self.starts_at(tz)?;
        let end = self.ends_at(tz)?;
        Some(classify(start, end, now))
    }
}
