//! Animal listings: the public adoption catalogue and an organization's own animals.

pub mod application;
pub mod domain;

pub use application::{adoption_listing, my_animals_listing, AnimalListing};
pub use domain::{Animal, AnimalCriteria, AnimalType, FurLength, Gender};
