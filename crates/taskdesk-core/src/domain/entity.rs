//! Entity identity and the shape shared by every stored record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identity of a stored entity
///
/// Allocated by the owning [`Repository`](super::Repository) from a counter
/// that starts at 1. The zero value is never allocated and stands for an
/// unset reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// The unset id
    pub const UNSET: EntityId = EntityId(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this id was never assigned (zero)
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A record with an immutable identity and creation timestamp
///
/// `Draft` carries every field except the identity and timestamp, and is
/// what callers hand to [`Repository::create`](super::Repository::create).
/// `Patch` carries optional replacements for the mutable fields.
pub trait Entity: Clone {
    type Draft;
    type Patch;

    /// Build a fully initialised entity from its parts
    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    fn id(&self) -> EntityId;

    fn created_at(&self) -> DateTime<Utc>;

    /// Merge the set fields of `patch` into this entity
    fn apply(&mut self, patch: Self::Patch);
}
