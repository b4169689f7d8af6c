pub mod http_gateway;
pub mod rest_client;
pub mod retry_policy;

pub use http_gateway::HttpBackendGateway;
pub use rest_client::RestClient;
pub use retry_policy::RetryPolicy;
