use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnimalType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl AnimalType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnimalType::Dog => "Cachorro",
            AnimalType::Cat => "Gato",
            AnimalType::Bird => "Pássaro",
            AnimalType::Rabbit => "Coelho",
            AnimalType::Other => "Outro",
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
