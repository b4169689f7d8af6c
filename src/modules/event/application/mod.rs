pub mod listings;

pub use listings::{my_events_listing, ong_events_listing, EventListing, OngOwnEvents, OngPublicEvents};
