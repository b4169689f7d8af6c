use super::entities::event::Event;
use super::value_objects::{EventType, TimeFilter};
use crate::modules::listing::domain::{
    Criteria, FilterContext, FilterField, MatchKind, Predicate, PredicateBuilder, SortKey,
};
use crate::shared::utils::serde_helpers::empty_as_none;
use serde::{Deserialize, Serialize};

/// Filters of the event listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventCriteria {
    #[serde(deserialize_with = "empty_as_none")]
    pub event_type: Option<EventType>,
    pub time_filter: TimeFilter,
}

impl Criteria for EventCriteria {
    type Record = Event;

    const FIELDS: &'static [FilterField] = &[
        FilterField::new("eventType", MatchKind::Exact),
        FilterField::new("timeFilter", MatchKind::Custom),
    ];

    fn is_empty(&self) -> bool {
        self.event_type.is_none() && self.time_filter == TimeFilter::All
    }

    fn predicate(&self, ctx: &FilterContext) -> Predicate<Event> {
        let time_filter = self.time_filter;
        let FilterContext { now, timezone } = *ctx;

        PredicateBuilder::new()
            .exact(self.event_type, |e: &Event| Some(e.event_type))
            .custom(time_filter != TimeFilter::All, move |e: &Event| {
                e.status_at(now, timezone)
                    .map(|status| time_filter.accepts(status))
                    .unwrap_or(false)
            })
            .build()
    }

    /// Event listings are always chronological by start
    fn sort_key(&self, ctx: &FilterContext) -> Option<SortKey<Event>> {
        let timezone = ctx.timezone;
        Some(SortKey::new(move |e: &Event| e.starts_at(timezone)))
    }
}
