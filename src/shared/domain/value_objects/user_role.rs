use serde::{Deserialize, Serialize};
use std::fmt;

/// The two account kinds of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Individual adopter
    Person,
    /// Shelter organization
    Ong,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Person => "Pessoa",
            UserRole::Ong => "ONG",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
