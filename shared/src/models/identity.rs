//! Identity Model

use serde::{Deserialize, Serialize};

/// Session role as reported by `GET /me`.
///
/// Unknown role strings fall back to `Employee`, matching the backend's
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    #[serde(other)]
    Employee,
}

/// Current session's user summary, fetched once per page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

/// Profile access mode, resolved once from the session role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAccess {
    /// Read-only view of the profile form (admins).
    Viewer,
    /// Full edit access (everyone else).
    Editor,
}

impl ProfileAccess {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => ProfileAccess::Viewer,
            _ => ProfileAccess::Editor,
        }
    }
}
