pub mod criteria;
pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use criteria::AnimalCriteria;
pub use entities::animal::Animal;
pub use value_objects::{AnimalType, FurLength, Gender};
