pub mod controller;
pub mod ports;
pub mod profile;

pub use controller::{FetchOutcome, FetchRequest, ListingController, ListingState, ListingView};
pub use ports::RecordSource;
pub use profile::ListingProfile;
