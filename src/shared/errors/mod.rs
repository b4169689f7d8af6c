//! Shared error types

pub mod app_error;
pub mod error_display;

pub use app_error::{AppError, AppResult};
pub use error_display::{ErrorDisplay, ErrorKind};
