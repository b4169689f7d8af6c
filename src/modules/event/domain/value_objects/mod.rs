//! Event-specific value objects

pub mod event_datetime;
pub mod event_type;
pub mod time_filter;

pub use event_datetime::EventDateTime;
pub use event_type::EventType;
pub use time_filter::TimeFilter;
