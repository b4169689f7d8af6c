pub mod criteria;
pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use criteria::EventCriteria;
pub use entities::event::Event;
pub use value_objects::{EventDateTime, EventType, TimeFilter};
