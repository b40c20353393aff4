// User roles handed out by the mock login

use serde::{Deserialize, Serialize};
use std::fmt;

/// Description carried by tokens that may mutate data
pub const SYSTEM_USER: &str = "SystemUser";
/// Description carried by read-only tokens
pub const SYSTEM_CLIENT: &str = "SystemClient";

/// The two role tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May create, update and delete records
    SystemUser,
    /// May only read
    SystemClient,
}

impl Role {
    /// Derives the role from a RUT: even numbers are system users, odd ones clients
    ///
    /// # Example
    /// ```
    /// use biblioteca_api::auth::role::Role;
    ///
    /// assert_eq!(Role::from_rut(12345678), Role::SystemUser);
    /// assert_eq!(Role::from_rut(12345679), Role::SystemClient);
    /// ```
    pub fn from_rut(rut: i64) -> Self {
        if rut % 2 == 0 {
            Role::SystemUser
        } else {
            Role::SystemClient
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Role::SystemUser => 1,
            Role::SystemClient => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemUser => SYSTEM_USER,
            Role::SystemClient => SYSTEM_CLIENT,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role as it travels inside the token (`userTypeId`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserType {
    pub id: i32,
    pub description: String,
}

impl From<Role> for UserType {
    fn from(role: Role) -> Self {
        Self {
            id: role.id(),
            description: role.as_str().to_string(),
        }
    }
}
