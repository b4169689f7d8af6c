//! Typed filter criteria
//!
//! Each listing has its own criteria struct with named optional fields. The
//! match kind of every field is declared statically in `FIELDS` instead of
//! being inferred from the value at runtime.

use super::engine::SortKey;
use super::predicate::Predicate;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// `record.field == value`
    Exact,
    /// Case-insensitive contains
    Substring,
    /// Inclusive lower or upper bound
    Range,
    /// Boolean switch; `false` filters nothing
    Gate,
    /// Derived from more than one field
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterField {
    /// Wire key used by the UI criteria object
    pub key: &'static str,
    pub kind: MatchKind,
}

impl FilterField {
    pub const fn new(key: &'static str, kind: MatchKind) -> Self {
        Self { key, kind }
    }
}

/// Inputs a predicate may depend on besides the criteria themselves
#[derive(Debug, Clone, Copy)]
pub struct FilterContext {
    pub now: DateTime<Utc>,
    pub timezone: Tz,
}

impl FilterContext {
    pub fn new(now: DateTime<Utc>, timezone: Tz) -> Self {
        Self { now, timezone }
    }
}

pub trait Criteria: Clone + Default + Send + Sync + 'static {
    type Record: Clone + Send + Sync + 'static;

    const FIELDS: &'static [FilterField];

    /// True when no field is set, i.e. the predicate matches everything
    fn is_empty(&self) -> bool;

    fn predicate(&self, ctx: &FilterContext) -> Predicate<Self::Record>;

    /// Ordering applied after filtering; `None` keeps fetch order
    fn sort_key(&self, _ctx: &FilterContext) -> Option<SortKey<Self::Record>> {
        None
    }

    fn field(key: &str) -> Option<&'static FilterField> {
        Self::FIELDS.iter().find(|field| field.key == key)
    }
}
