pub mod criteria;
pub mod engine;
pub mod predicate;
pub mod status_classifier;

// Re-exports for easy access
pub use criteria::{Criteria, FilterContext, FilterField, MatchKind};
pub use engine::{ListingEngine, SortKey};
pub use predicate::{Predicate, PredicateBuilder};
pub use status_classifier::{classify, EventStatus};
