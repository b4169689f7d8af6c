/// In-memory holder of the authenticated session
///
/// Token persistence belongs to the login flow; listings only need to know
/// whether a token is present and which role it carries.
use crate::log_debug;
use crate::shared::domain::value_objects::Session;
use std::sync::{PoisonError, RwLock};

pub trait SessionProvider: Send + Sync {
    /// Snapshot of the current session, if logged in
    fn current(&self) -> Option<Session>;
}

#[derive(Debug, Default)]
pub struct SessionStore {
    session: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    pub fn sign_in(&self, session: Session) {
        log_debug!("Session started for {} {}", session.role, session.user_id);
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    pub fn sign_out(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl SessionProvider for SessionStore {
    fn current(&self) -> Option<Session> {
        // a writer that panicked left a whole value behind, never a torn one
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
