//! User entity and role enumeration.
//!
//! # Invariants
//! - `role` is always one of the declared `Role` variants; it is stored as
//!   the variant name (`USER`, `ADMIN`).
//! - `password_hash` never leaves the process through serialization.

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
pub type UserId = i64;

/// Closed set of user roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular account.
    #[default]
    User,
    /// Administrative account.
    Admin,
}

impl Role {
    /// All declared roles, in declaration order.
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// Returns the enumeration name used on the wire and in storage.
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Looks up a role by its enumeration name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// One row of the `user` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<UserId>,
    pub username: String,
    /// Opaque hash produced outside core; core only stores it.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Creates an unsaved user.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}
