use crate::shared::domain::value_objects::Address;
use serde::{Deserialize, Serialize};

/// Shelter organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ong {
    pub id: i64,
    pub name: String,
    pub cnpj: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Ong {
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }

    pub fn state(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.state.as_deref())
    }

    /// CNPJ as 00.000.000/0000-00 when it has 14 digits, unchanged otherwise
    pub fn formatted_cnpj(&self) -> String {
        let digits: String = self.cnpj.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 14 {
            return self.cnpj.clone();
        }
        format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )
    }

    pub fn as_ref_entry(&self) -> OngRef {
        OngRef {
            id: self.id,
            name: Some(self.name.clone()),
        }
    }
}

/// Owning-organization reference embedded in animals and events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}
