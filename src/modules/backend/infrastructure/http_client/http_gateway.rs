use super::rest_client::RestClient;
use crate::modules::animal::domain::Animal;
use crate::modules::backend::domain::BackendGateway;
use crate::modules::event::domain::Event;
use crate::modules::ong::domain::Ong;
use crate::shared::config::ClientConfig;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use async_trait::async_trait;

pub const ANIMALS_PATH: &str = "animais";
pub const EVENTS_PATH: &str = "eventos";
pub const ONGS_PATH: &str = "ongs";

/// `BackendGateway` over the REST API
pub struct HttpBackendGateway {
    client: RestClient,
}

impl HttpBackendGateway {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
        })
    }

    pub fn with_client(client: RestClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }
}

pub fn ong_scoped_path(collection: &str, ong_id: i64) -> String {
    format!(
        "{}/ong/{}",
        collection,
        urlencoding::encode(&ong_id.to_string())
    )
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn list_animals(&self, session: Option<&Session>) -> AppResult<Vec<Animal>> {
        self.client.get_json(ANIMALS_PATH, session).await
    }

    async fn list_ong_animals(
        &self,
        ong_id: i64,
        session: Option<&Session>,
    ) -> AppResult<Vec<Animal>> {
        Validator::validate_record_id(ong_id)?;
        self.client
            .get_json(&ong_scoped_path(ANIMALS_PATH, ong_id), session)
            .await
    }

    async fn list_ong_events(&self, ong_id: i64, session: Option<&Session>) -> AppResult<Vec<Event>> {
        Validator::validate_record_id(ong_id)?;
        self.client
            .get_json(&ong_scoped_path(EVENTS_PATH, ong_id), session)
            .await
    }

    async fn list_ongs(&self, session: Option<&Session>) -> AppResult<Vec<Ong>> {
        self.client.get_json(ONGS_PATH, session).await
    }
}
