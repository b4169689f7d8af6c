mod access_rule;
mod address;
mod session;
mod user_role;

pub use access_rule::AccessRule;
pub use address::Address;
pub use session::Session;
pub use user_role::UserRole;
