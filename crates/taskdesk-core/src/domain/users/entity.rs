//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Entity, EntityId};

/// A user assigned to exactly one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    /// Project the user belongs to; never reassigned
    pub project_id: EntityId,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to store a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub project_id: EntityId,
}

/// Partial update for a user
///
/// The project assignment is fixed at creation, so it has no patch field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl Entity for User {
    type Draft = NewUser;
    type Patch = UserPatch;

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
            project_id: draft.project_id,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
