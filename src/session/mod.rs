//! Identity context for the signed-in user.
//!
//! The identity collaborator resolves the current user once at session
//! start; the rest of the crate treats the resulting [`Session`] as a
//! read-only value.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a dashboard user, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyUserId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, SessionError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyUserId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role attached to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages teams, assigns tasks and reviews submissions.
    Adviser,
    /// Member of a capstone team.
    Student,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adviser => "adviser",
            Self::Student => "student",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = SessionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "adviser" | "advisor" => Ok(Self::Adviser),
            "student" => Ok(Self::Student),
            _ => Err(SessionError::UnknownRole(value.to_owned())),
        }
    }
}

/// Read-only identity context available before any operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    role: Role,
}

impl Session {
    /// Creates a session for `user_id` acting as `role`.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns the signed-in user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the signed-in user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether the user may manage tasks.
    #[must_use]
    pub const fn is_adviser(&self) -> bool {
        matches!(self.role, Role::Adviser)
    }
}

/// Errors raised while building identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The user identifier is blank.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The role string is not recognised.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
