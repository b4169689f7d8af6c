pub mod listings;

pub use listings::{ongs_listing, OngListing, RegisteredOngs};
