/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// all listing contexts.
pub mod pagination;

pub use pagination::*;
