//! Directory of registered organizations.

pub mod application;
pub mod domain;

pub use application::{ongs_listing, OngListing};
pub use domain::{Ong, OngCriteria, OngRef};
