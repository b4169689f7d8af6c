pub mod gateway;

pub use gateway::BackendGateway;
