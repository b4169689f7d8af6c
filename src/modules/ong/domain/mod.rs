pub mod criteria;
pub mod entities;

// Re-exports for easy access
pub use criteria::OngCriteria;
pub use entities::ong::{Ong, OngRef};
