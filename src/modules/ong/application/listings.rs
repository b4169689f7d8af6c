use crate::modules::backend::BackendGateway;
use crate::modules::listing::application::{ListingController, ListingProfile, RecordSource};
use crate::modules::ong::domain::{Ong, OngCriteria};
use crate::shared::config::ClientConfig;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Clock, SessionProvider};
use async_trait::async_trait;
use std::sync::Arc;

pub type OngListing = ListingController<OngCriteria>;

/// `GET /ongs`
pub struct RegisteredOngs {
    gateway: Arc<dyn BackendGateway>,
}

impl RegisteredOngs {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl RecordSource<Ong> for RegisteredOngs {
    fn describe(&self) -> String {
        "GET /ongs".to_string()
    }

    async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<Ong>> {
        self.gateway.list_ongs(session.as_ref()).await
    }
}

pub fn ongs_listing(
    gateway: Arc<dyn BackendGateway>,
    session: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    config: &ClientConfig,
) -> OngListing {
    ListingController::new(
        ListingProfile::ONGS,
        Arc::new(RegisteredOngs::new(gateway)),
        session,
        clock,
        config,
    )
}
