// Shared Kernel
// Cross-cutting pieces used by every listing module

pub mod application; // Pagination model
pub mod config; // Environment-driven client configuration
pub mod domain; // Roles, sessions, access rules
pub mod errors; // Shared error types
pub mod infrastructure; // Session holder, clock
pub mod utils; // Logging and serde helpers

// Re-exports for convenience
pub use config::ClientConfig;
pub use errors::{AppError, AppResult};
