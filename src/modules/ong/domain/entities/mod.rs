pub mod ong;
