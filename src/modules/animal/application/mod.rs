pub mod listings;

pub use listings::{
    adoption_listing, my_animals_listing, AdoptableAnimals, AnimalListing, OngAnimals,
};
