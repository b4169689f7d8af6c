//! Event listings: an organization's own events and its public agenda.

pub mod application;
pub mod domain;

pub use application::{my_events_listing, ong_events_listing, EventListing};
pub use domain::{Event, EventCriteria, EventDateTime, EventType, TimeFilter};
