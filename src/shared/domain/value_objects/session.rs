use super::UserRole;
use serde::{Deserialize, Serialize};

/// Authenticated session as far as listings care: a bearer token and who it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub role: UserRole,
    pub user_id: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, role: UserRole, user_id: i64) -> Self {
        Self {
            token: token.into(),
            role,
            user_id,
        }
    }

    /// A session with an empty token counts as logged out
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
