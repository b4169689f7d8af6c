use super::{Session, UserRole};
use serde::Serialize;

/// Who may open a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "role", rename_all = "snake_case")]
pub enum AccessRule {
    Public,
    Authenticated,
    Role(UserRole),
}

impl AccessRule {
    pub fn permits(&self, session: Option<&Session>) -> bool {
        match (self, session) {
            (AccessRule::Public, _) => true,
            (_, None) => false,
            (AccessRule::Authenticated, Some(session)) => session.has_token(),
            (AccessRule::Role(role), Some(session)) => {
                session.has_token() && session.role == *role
            }
        }
    }

    pub fn denied_message(&self) -> &'static str {
        match self {
            AccessRule::Public => "Você não tem permissão para acessar este conteúdo.",
            AccessRule::Authenticated => "Faça login para continuar.",
            AccessRule::Role(UserRole::Ong) => {
                "Acesso restrito a ONGs. Faça login com uma conta de ONG."
            }
            AccessRule::Role(UserRole::Person) => {
                "Acesso restrito a adotantes. Faça login com uma conta pessoal."
            }
        }
    }
}
