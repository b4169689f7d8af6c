use crate::modules::listing::domain::EventStatus;
use serde::{Deserialize, Serialize};

/// Status filter of the event listings; values are the labels the UI sends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFilter {
    #[default]
    #[serde(rename = "all", alias = "")]
    All,
    #[serde(rename = "Em breve")]
    Upcoming,
    #[serde(rename = "Em andamento")]
    Ongoing,
    #[serde(rename = "Encerrado")]
    Past,
}

impl TimeFilter {
    pub fn accepts(&self, status: EventStatus) -> bool {
        match self {
            TimeFilter::All => true,
            TimeFilter::Upcoming => status == EventStatus::Upcoming,
            TimeFilter::Ongoing => status == EventStatus::Ongoing,
            TimeFilter::Past => status == EventStatus::Past,
        }
    }
}
