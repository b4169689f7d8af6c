use super::entities::ong::Ong;
use crate::modules::listing::domain::predicate::normalize_needle;
use crate::modules::listing::domain::{
    Criteria, FilterContext, FilterField, MatchKind, Predicate, PredicateBuilder,
};
use crate::shared::utils::serde_helpers::empty_as_none;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OngCriteria {
    #[serde(deserialize_with = "empty_as_none")]
    pub search_name: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    /// Two-letter UF, compared case-insensitively
    #[serde(deserialize_with = "empty_as_none")]
    pub state: Option<String>,
}

impl Criteria for OngCriteria {
    type Record = Ong;

    const FIELDS: &'static [FilterField] = &[
        FilterField::new("searchName", MatchKind::Substring),
        FilterField::new("city", MatchKind::Substring),
        FilterField::new("state", MatchKind::Exact),
    ];

    fn is_empty(&self) -> bool {
        normalize_needle(self.search_name.as_deref()).is_none()
            && normalize_needle(self.city.as_deref()).is_none()
            && normalize_needle(self.state.as_deref()).is_none()
    }

    fn predicate(&self, _ctx: &FilterContext) -> Predicate<Ong> {
        PredicateBuilder::new()
            .contains(self.search_name.as_deref(), |o: &Ong| Some(o.name.as_str()))
            .contains(self.city.as_deref(), Ong::city)
            .exact(normalize_needle(self.state.as_deref()), |o: &Ong| {
                o.state().map(|uf| uf.trim().to_lowercase())
            })
            .build()
    }
}
