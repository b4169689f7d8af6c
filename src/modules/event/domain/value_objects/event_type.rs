use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    AdoptionFair,
    VaccinationCampaign,
    Fundraising,
    Volunteering,
    Lecture,
    Other,
}

impl EventType {
    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::AdoptionFair => "Feira de adoção",
            EventType::VaccinationCampaign => "Campanha de vacinação",
            EventType::Fundraising => "Arrecadação",
            EventType::Volunteering => "Voluntariado",
            EventType::Lecture => "Palestra",
            EventType::Other => "Outro",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
