//! Listing Engine
//!
//! Status classification, predicate building, filter-sort-paginate and the
//! generic controller every listing view is built on.

pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{
    ListingController, ListingProfile, ListingState, ListingView, RecordSource,
};
pub use domain::{
    classify, Criteria, EventStatus, FilterContext, FilterField, ListingEngine, MatchKind,
    Predicate, PredicateBuilder, SortKey,
};
