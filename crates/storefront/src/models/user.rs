//! User domain types.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use emporium_core::{Email, Role, UserId};

use super::timestamp;

/// A user account as exposed by the API.
///
/// Never carries the password hash; see [`UserRecord`] for the stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, unique across accounts (case preserved).
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Account role. Fixed at creation.
    #[serde(default)]
    pub role: Role,
    /// When the account was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new account record with a fresh ID.
    #[must_use]
    pub fn new(email: Email, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::generate(),
            email,
            name: name.into(),
            role,
            created_at: timestamp::now(),
        }
    }
}

/// A user as persisted: the public record plus its Argon2id password hash.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    pub password_hash: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("user", &self.user)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}
