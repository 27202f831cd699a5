//! Identity Models
//!
//! Users, tenant and app settings injected by the server-rendered page.

use serde::{Deserialize, Serialize};

/// Role level of a user within the tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Visitor = 1,
    Collaborator = 2,
    Administrator = 3,
}

impl Role {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Collaborators and administrators manage tags and responses
    pub fn is_collaborator(self) -> bool {
        self.level() >= Role::Collaborator.level()
    }

    pub fn is_admin(self) -> bool {
        self == Role::Administrator
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Role::Visitor),
            2 => Ok(Role::Collaborator),
            3 => Ok(Role::Administrator),
            other => Err(format!("unknown role level {}", other)),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        role.level()
    }
}

/// Public user reference (idea author, responder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

/// The authenticated viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Visitor
}

/// Organization the application is serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: u32,
    pub name: String,
    pub subdomain: String,
    #[serde(default)]
    pub cname: Option<String>,
    #[serde(default)]
    pub invitation: String,
    #[serde(default)]
    pub welcome_message: String,
}

/// Deployment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub mode: String,
    pub environment: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub domain: String,
}

impl AppSettings {
    pub fn is_single_host_mode(&self) -> bool {
        self.mode.eq_ignore_ascii_case("single")
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
