//! Closed role set and alias normalization.
//!
//! Role strings arrive from the server in several spellings. They are resolved
//! once, when a session snapshot is taken, and every later check compares
//! enum values.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

pub const FARMER_DASHBOARD_PATH: &str = "/dashboard";
pub const VET_DASHBOARD_PATH: &str = "/vet";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Farmer,
    Veterinarian,
    Admin,
}

/// Accepted spellings per role, compared after upper-casing.
const ALIASES: &[(&str, Role)] = &[
    ("FARMER", Role::Farmer),
    ("VET", Role::Veterinarian),
    ("VETERINARY", Role::Veterinarian),
    ("VETERINARIAN", Role::Veterinarian),
    ("ADMIN", Role::Admin),
    ("ADMINISTRATOR", Role::Admin),
];

impl Role {
    /// Normalize a raw role tag. Case-insensitive; a Spring `ROLE_` prefix is
    /// ignored. Unknown tags yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        let tag = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        ALIASES.iter().find(|(alias, _)| *alias == tag).map(|(_, role)| *role)
    }

    /// Canonical tag sent to the server on registration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "FARMER",
            Self::Veterinarian => "VETERINARIAN",
            Self::Admin => "ADMIN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Veterinarian => "Veterinarian",
            Self::Admin => "Admin",
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Farmer => FARMER_DASHBOARD_PATH,
            Self::Veterinarian => VET_DASHBOARD_PATH,
            Self::Admin => ADMIN_DASHBOARD_PATH,
        }
    }
}

/// Landing path for a possibly-unknown role.
///
/// Unrecognized or absent roles land on the livestock dashboard, which any
/// authenticated user may view.
pub fn default_route(role: Option<Role>) -> &'static str {
    match role {
        Some(role) => role.dashboard_path(),
        None => {
            log::warn!("no recognized role on session; defaulting to {FARMER_DASHBOARD_PATH}");
            FARMER_DASHBOARD_PATH
        }
    }
}
