use serde::{Deserialize, Serialize};

/// Postal address as sent by the backend; every part may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    /// Two-letter state code (UF)
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Address {
    /// "Street, 12 - Neighborhood, City/UF" with missing parts left out
    pub fn one_line(&self) -> String {
        let street = match (&self.street, &self.number) {
            (Some(street), Some(number)) => Some(format!("{}, {}", street, number)),
            (Some(street), None) => Some(street.clone()),
            _ => None,
        };
        let locality = match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{}/{}", city, state)),
            (Some(city), None) => Some(city.clone()),
            (None, Some(state)) => Some(state.clone()),
            (None, None) => None,
        };

        [street, self.neighborhood.clone(), locality]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" - ")
    }
}
