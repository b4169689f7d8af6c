use crate::shared::domain::value_objects::{AccessRule, UserRole};
use serde::Serialize;

/// Static configuration of one listing view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingProfile {
    pub name: &'static str,
    pub page_size_options: &'static [usize],
    pub access: AccessRule,
    /// Send the user to the login view on 401/403 or a failed guard
    pub redirect_on_unauthorized: bool,
}

impl ListingProfile {
    /// Public adoption catalogue
    pub const ADOPTION: ListingProfile = ListingProfile {
        name: "adoption",
        page_size_options: &[6, 12, 24],
        access: AccessRule::Public,
        redirect_on_unauthorized: false,
    };

    /// Animals registered by the logged-in ONG
    pub const MY_ANIMALS: ListingProfile = ListingProfile {
        name: "my-animals",
        page_size_options: &[5, 10, 20],
        access: AccessRule::Role(UserRole::Ong),
        redirect_on_unauthorized: true,
    };

    /// Events created by the logged-in ONG
    pub const MY_EVENTS: ListingProfile = ListingProfile {
        name: "my-events",
        page_size_options: &[5, 10, 20],
        access: AccessRule::Role(UserRole::Ong),
        redirect_on_unauthorized: true,
    };

    /// Public events of one ONG
    pub const ONG_EVENTS: ListingProfile = ListingProfile {
        name: "ong-events",
        page_size_options: &[6, 12, 24],
        access: AccessRule::Public,
        redirect_on_unauthorized: false,
    };

    /// Directory of registered ONGs
    pub const ONGS: ListingProfile = ListingProfile {
        name: "ongs",
        page_size_options: &[6, 12, 18],
        access: AccessRule::Authenticated,
        redirect_on_unauthorized: true,
    };

    pub fn default_page_size(&self) -> usize {
        self.page_size_options.first().copied().unwrap_or(10)
    }

    pub fn offers_page_size(&self, page_size: usize) -> bool {
        self.page_size_options.contains(&page_size)
    }
}
