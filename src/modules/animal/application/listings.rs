use crate::modules::animal::domain::{Animal, AnimalCriteria};
use crate::modules::backend::BackendGateway;
use crate::modules::listing::application::{ListingController, ListingProfile, RecordSource};
use crate::shared::config::ClientConfig;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Clock, SessionProvider};
use async_trait::async_trait;
use std::sync::Arc;

pub type AnimalListing = ListingController<AnimalCriteria>;

/// Public catalogue: `GET /animais`
pub struct AdoptableAnimals {
    gateway: Arc<dyn BackendGateway>,
}

impl AdoptableAnimals {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl RecordSource<Animal> for AdoptableAnimals {
    fn describe(&self) -> String {
        "GET /animais".to_string()
    }

    async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<Animal>> {
        self.gateway.list_animals(session.as_ref()).await
    }
}

/// Animals of the signed-in organization: `GET /animais/ong/{id}`
pub struct OngAnimals {
    gateway: Arc<dyn BackendGateway>,
}

impl OngAnimals {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl RecordSource<Animal> for OngAnimals {
    fn describe(&self) -> String {
        "GET /animais/ong/{id}".to_string()
    }

    async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<Animal>> {
        let session = session
            .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))?;
        self.gateway
            .list_ong_animals(session.user_id, Some(&session))
            .await
    }
}

/// Adoption catalogue; starts out hiding adopted animals
pub fn adoption_listing(
    gateway: Arc<dyn BackendGateway>,
    session: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    config: &ClientConfig,
) -> AnimalListing {
    ListingController::new(
        ListingProfile::ADOPTION,
        Arc::new(AdoptableAnimals::new(gateway)),
        session,
        clock,
        config,
    )
    .with_criteria(AnimalCriteria::for_adoption())
}

/// The organization's own animals, adopted ones included
pub fn my_animals_listing(
    gateway: Arc<dyn BackendGateway>,
    session: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    config: &ClientConfig,
) -> AnimalListing {
    ListingController::new(
        ListingProfile::MY_ANIMALS,
        Arc::new(OngAnimals::new(gateway)),
        session,
        clock,
        config,
    )
}
