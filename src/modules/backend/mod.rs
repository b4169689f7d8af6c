//! Backend access
//!
//! The REST endpoints the listings read from, behind the `BackendGateway` port.

pub mod domain;
pub mod infrastructure;

pub use domain::BackendGateway;
pub use infrastructure::http_client::{HttpBackendGateway, RestClient, RetryPolicy};
