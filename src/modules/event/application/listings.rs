use crate::modules::backend::BackendGateway;
use crate::modules::event::domain::{Event, EventCriteria};
use crate::modules::listing::application::{ListingController, ListingProfile, RecordSource};
use crate::shared::config::ClientConfig;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Clock, SessionProvider};
use crate::shared::utils::Validator;
use async_trait::async_trait;
use std::sync::Arc;

pub type EventListing = ListingController<EventCriteria>;

/// Events of the signed-in organization
pub struct OngOwnEvents {
    gateway: Arc<dyn BackendGateway>,
}

impl OngOwnEvents {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl RecordSource<Event> for OngOwnEvents {
    fn describe(&self) -> String {
        "GET /eventos/ong/{id}".to_string()
    }

    async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<Event>> {
        let session = session
            .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))?;
        self.gateway
            .list_ong_events(session.user_id, Some(&session))
            .await
    }
}

/// Public agenda of one organization
pub struct OngPublicEvents {
    gateway: Arc<dyn BackendGateway>,
    ong_id: i64,
}

impl OngPublicEvents {
    pub fn new(gateway: Arc<dyn BackendGateway>, ong_id: i64) -> AppResult<Self> {
        Validator::validate_record_id(ong_id)?;
        Ok(Self { gateway, ong_id })
    }

    pub fn ong_id(&self) -> i64 {
        self.ong_id
    }
}

#[async_trait]
impl RecordSource<Event> for OngPublicEvents {
    fn describe(&self) -> String {
        format!("GET /eventos/ong/{}", self.ong_id)
    }

    async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<Event>> {
        self.gateway
            .list_ong_events(self.ong_id, session.as_ref())
            .await
    }
}

pub fn my_events_listing(
    gateway: Arc<dyn BackendGateway>,
    session: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    config: &ClientConfig,
) -> EventListing {
    ListingController::new(
        ListingProfile::MY_EVENTS,
        Arc::new(OngOwnEvents::new(gateway)),
        session,
        clock,
        config,
    )
}

/// Events of organization `ong_id`, visible without signing in
pub fn ong_events_listing(
    gateway: Arc<dyn BackendGateway>,
    ong_id: i64,
    session: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    config: &ClientConfig,
) -> AppResult<EventListing> {
    let source = OngPublicEvents::new(gateway, ong_id)?;
    Ok(ListingController::new(
        ListingProfile::ONG_EVENTS,
        Arc::new(source),
        session,
        clock,
        config,
    ))
}
