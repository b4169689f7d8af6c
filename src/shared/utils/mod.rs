pub mod logger;
pub mod serde_helpers;
pub mod validation;

pub use logger::{init_logger, LogContext, TimedOperation};
pub use validation::Validator;
