use crate::modules::animal::domain::Animal;
use crate::modules::event::domain::Event;
use crate::modules::ong::domain::Ong;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Read side of the adoption backend used by the listings
///
/// Every call returns the full collection; filtering and paging happen
/// client-side. `session` is attached as a bearer token when present.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Public animal catalogue
    async fn list_animals(&self, session: Option<&Session>) -> AppResult<Vec<Animal>>;

    /// Animals registered by one organization
    async fn list_ong_animals(&self, ong_id: i64, session: Option<&Session>)
        -> AppResult<Vec<Animal>>;

    /// Events organized by one organization
    async fn list_ong_events(&self, ong_id: i64, session: Option<&Session>) -> AppResult<Vec<Event>>;

    /// Registered organizations
    async fn list_ongs(&self, session: Option<&Session>) -> AppResult<Vec<Ong>>;
}
