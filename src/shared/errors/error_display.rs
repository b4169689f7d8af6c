//! Display-only error records handed to the rendering layer
//!
//! Fetch errors stop at the listing controller: they are converted here into a
//! message plus the flags the view needs (retry button, login redirect).

use super::AppError;
use crate::shared::domain::value_objects::AccessRule;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Connectivity,
    Unauthorized,
    NotFound,
    Server,
    Unclassified,
    /// Access guard refused the listing before any fetch
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDisplay {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
    pub redirect_to_login: bool,
}

impl ErrorDisplay {
    pub fn for_listing(
        error: &AppError,
        access: &AccessRule,
        redirect_on_unauthorized: bool,
    ) -> Self {
        match error {
            AppError::Connectivity(_) => Self::retry(
                ErrorKind::Connectivity,
                "Não foi possível conectar ao servidor. Verifique sua conexão e tente novamente.",
            ),
            AppError::Timeout(_) => Self::retry(
                ErrorKind::Connectivity,
                "O servidor demorou demais para responder. Tente novamente.",
            ),
            AppError::Unauthorized(_) | AppError::Forbidden(_) => Self {
                kind: ErrorKind::Unauthorized,
                message: access.denied_message().to_string(),
                retryable: true,
                redirect_to_login: redirect_on_unauthorized,
            },
            AppError::NotFound(_) => Self::retry(ErrorKind::NotFound, "Recurso não encontrado."),
            AppError::ServerError { .. } => Self::retry(
                ErrorKind::Server,
                "Erro no servidor. Tente novamente mais tarde.",
            ),
            AppError::Unclassified { status, message } => Self::retry(
                ErrorKind::Unclassified,
                &match status {
                    Some(code) => format!("Erro {}: {}", code, message),
                    None => message.clone(),
                },
            ),
            other => Self::retry(ErrorKind::Unclassified, &other.to_string()),
        }
    }

    /// Guard refusal: the session lacks the role the listing needs
    pub fn blocked(access: &AccessRule, redirect_on_unauthorized: bool) -> Self {
        Self {
            kind: ErrorKind::Blocked,
            message: access.denied_message().to_string(),
            retryable: true,
            redirect_to_login: redirect_on_unauthorized,
        }
    }

    fn retry(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            retryable: true,
            redirect_to_login: false,
        }
    }
}
