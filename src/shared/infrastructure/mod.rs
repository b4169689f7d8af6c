//! Shared infrastructure (session holder, clock)

pub mod clock;
pub mod session_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use session_store::{SessionProvider, SessionStore};
