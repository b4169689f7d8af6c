use crate::shared::domain::value_objects::Session;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Where a listing gets its unfiltered collection from
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    /// Endpoint-ish name for logs
    fn describe(&self) -> String;

    /// Fetch the full collection. `session` is the caller's session, if any.
    async fn fetch(&self, session: Option<Session>) -> AppResult<Vec<R>>;
}
