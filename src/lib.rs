pub mod modules;
pub mod shared;

use modules::{
    animal::{adoption_listing, my_animals_listing, AnimalListing},
    backend::{BackendGateway, HttpBackendGateway},
    event::{my_events_listing, ong_events_listing, EventListing},
    ong::{ongs_listing, OngListing},
};
use shared::domain::value_objects::Session;
use shared::infrastructure::{Clock, SessionProvider, SessionStore, SystemClock};
use shared::utils::init_logger;
use shared::{AppResult, ClientConfig};
use std::sync::Arc;

/// Shared dependencies of every listing view
#[derive(Clone)]
pub struct ClientServices {
    pub config: ClientConfig,
    pub gateway: Arc<dyn BackendGateway>,
    pub sessions: Arc<SessionStore>,
    pub clock: Arc<dyn Clock>,
}

impl ClientServices {
    pub fn new(
        config: ClientConfig,
        gateway: Arc<dyn BackendGateway>,
        sessions: Arc<SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            gateway,
            sessions,
            clock,
        }
    }

    pub fn sign_in(&self, session: Session) {
        self.sessions.sign_in(session);
    }

    pub fn sign_out(&self) {
        self.sessions.sign_out();
    }

    pub fn current_session(&self) -> Option<Session> {
        self.sessions.current()
    }

    fn session_provider(&self) -> Arc<dyn SessionProvider> {
        self.sessions.clone()
    }

    pub fn adoption_listing(&self) -> AnimalListing {
        adoption_listing(
            self.gateway.clone(),
            self.session_provider(),
            self.clock.clone(),
            &self.config,
        )
    }

    pub fn my_animals_listing(&self) -> AnimalListing {
        my_animals_listing(
            self.gateway.clone(),
            self.session_provider(),
            self.clock.clone(),
            &self.config,
        )
    }

    pub fn my_events_listing(&self) -> EventListing {
        my_events_listing(
            self.gateway.clone(),
            self.session_provider(),
            self.clock.clone(),
            &self.config,
        )
    }

    pub fn ong_events_listing(&self, ong_id: i64) -> AppResult<EventListing> {
        ong_events_listing(
            self.gateway.clone(),
            ong_id,
            self.session_provider(),
            self.clock.clone(),
            &self.config,
        )
    }

    pub fn ongs_listing(&self) -> OngListing {
        ongs_listing(
            self.gateway.clone(),
            self.session_provider(),
            self.clock.clone(),
            &self.config,
        )
    }
}

/// Initialize logging, read configuration and wire the HTTP backend
pub fn bootstrap() -> AppResult<ClientServices> {
    init_logger();

    let config = ClientConfig::from_env()?;
    crate::log_info!(
        "Adota client starting (api: {}, timeout: {:?}, retries: {}, tz: {})",
        config.api_base_url,
        config.request_timeout,
        config.fetch_retries,
        config.timezone
    );

    let gateway: Arc<dyn BackendGateway> = Arc::new(HttpBackendGateway::new(&config)?);

    Ok(ClientServices::new(
        config,
        gateway,
        Arc::new(SessionStore::new()),
        Arc::new(SystemClock),
    ))
}
