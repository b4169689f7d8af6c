use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FurLength {
    Short,
    Medium,
    Long,
    #[serde(rename = "NONE")]
    Hairless,
}

impl FurLength {
    pub fn display_name(&self) -> &'static str {
        match self {
            FurLength::Short => "Curta",
            FurLength::Medium => "Média",
            FurLength::Long => "Longa",
            FurLength::Hairless => "Sem pelo",
        }
    }
}

impl fmt::Display for FurLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
