pub mod animal;
pub mod backend;
pub mod event;
pub mod listing;
pub mod ong;
