//! Animal-specific value objects

pub mod animal_type;
pub mod fur_length;
pub mod gender;

pub use animal_type::AnimalType;
pub use fur_length::FurLength;
pub use gender::Gender;
