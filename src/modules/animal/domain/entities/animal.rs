use crate::modules::animal::domain::value_objects::{AnimalType, FurLength, Gender};
use crate::modules::ong::domain::OngRef;
use serde::{Deserialize, Serialize};

/// Animal as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub animal_type: AnimalType,
    /// Years
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub fur: FurLength,
    #[serde(default)]
    pub castrated: bool,
    #[serde(default)]
    pub adopted: bool,
    /// Kilograms
    #[serde(default)]
    pub weight: f64,
    /// Base64 image or URL
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub ong: Option<OngRef>,
}

impl Animal {
    pub fn is_available(&self) -> bool {
        !self.adopted
    }

    pub fn ong_id(&self) -> Option<i64> {
        self.ong.as_ref().map(|ong| ong.id)
    }
}
