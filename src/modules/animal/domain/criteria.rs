use super::entities::animal::Animal;
use super::value_objects::{AnimalType, FurLength, Gender};
use crate::modules::listing::domain::predicate::normalize_needle;
use crate::modules::listing::domain::{
    Criteria, FilterContext, FilterField, MatchKind, Predicate, PredicateBuilder,
};
use crate::shared::utils::serde_helpers::{empty_as_none, lenient_bool};
use serde::{Deserialize, Serialize};

/// Filters of the animal listings (adoption catalogue and my-animals)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimalCriteria {
    #[serde(deserialize_with = "empty_as_none")]
    pub search_name: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub animal_type: Option<AnimalType>,
    #[serde(deserialize_with = "empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(deserialize_with = "empty_as_none")]
    pub min_age: Option<u32>,
    #[serde(deserialize_with = "empty_as_none")]
    pub max_age: Option<u32>,
    #[serde(deserialize_with = "empty_as_none")]
    pub fur: Option<FurLength>,
    #[serde(deserialize_with = "empty_as_none")]
    pub breed: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub castrated_only: bool,
    /// Hide animals that already found a home
    #[serde(deserialize_with = "lenient_bool")]
    pub available_only: bool,
}

impl AnimalCriteria {
    /// Starting filters of the public adoption catalogue
    pub fn for_adoption() -> Self {
        Self {
            available_only: true,
            ..Self::default()
        }
    }
}

impl Criteria for AnimalCriteria {
    type Record = Animal;

    const FIELDS: &'static [FilterField] = &[
        FilterField::new("searchName", MatchKind::Substring),
        FilterField::new("animalType", MatchKind::Exact),
        FilterField::new("gender", MatchKind::Exact),
        FilterField::new("minAge", MatchKind::Range),
        FilterField::new("maxAge", MatchKind::Range),
        FilterField::new("fur", MatchKind::Exact),
        FilterField::new("breed", MatchKind::Substring),
        FilterField::new("color", MatchKind::Substring),
        FilterField::new("castratedOnly", MatchKind::Gate),
        FilterField::new("availableOnly", MatchKind::Gate),
    ];

    fn is_empty(&self) -> bool {
        normalize_needle(self.search_name.as_deref()).is_none()
            && self.animal_type.is_none()
            && self.gender.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.fur.is_none()
            && normalize_needle(self.breed.as_deref()).is_none()
            && normalize_needle(self.color.as_deref()).is_none()
            && !self.castrated_only
            && !self.available_only
    }

    fn predicate(&self, _ctx: &FilterContext) -> Predicate<Animal> {
        PredicateBuilder::new()
            .contains(self.search_name.as_deref(), |a: &Animal| Some(a.name.as_str()))
            .exact(self.animal_type, |a: &Animal| Some(a.animal_type))
            .exact(self.gender, |a: &Animal| Some(a.gender))
            .range(self.min_age, self.max_age, |a: &Animal| Some(a.age))
            .exact(self.fur, |a: &Animal| Some(a.fur))
            .contains(self.breed.as_deref(), |a: &Animal| a.breed.as_deref())
            .contains(self.color.as_deref(), |a: &Animal| a.color.as_deref())
            .gate(self.castrated_only, |a: &Animal| a.castrated)
            .gate(self.available_only, Animal::is_available)
            .build()
    }
}
