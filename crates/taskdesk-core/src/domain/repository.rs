//! Generic in-memory repository
//!
//! Stores entities of one type in insertion order and hands out ids from a
//! counter owned by the repository instance. Ids of removed entities are
//! never reused.

use chrono::Utc;
use tracing::debug;

use super::entity::{Entity, EntityId};

/// In-memory collection for one entity type
#[derive(Debug, Clone)]
pub struct Repository<T> {
    items: Vec<T>,
    next_id: u64,
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> {
    /// Create an empty repository whose first id is 1
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a new entity, assigning its id and creation timestamp
    pub fn create(&mut self, draft: T::Draft) -> &T {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        let index = self.items.len();
        self.items.push(T::from_draft(id, Utc::now(), draft));
        debug!(id = %id, "entity stored");

        &self.items[index]
    }

    /// All stored entities in insertion order
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn get_by_id(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn exists(&self, id: EntityId) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Merge `patch` into the entity with the given id
    ///
    /// Returns `None` and leaves the repository untouched if no entity has
    /// that id.
    pub fn update(&mut self, id: EntityId, patch: T::Patch) -> Option<&T> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.apply(patch);
        debug!(id = %id, "entity updated");
        Some(&*item)
    }

    /// Remove the entity with the given id; returns whether one was removed
    pub fn delete(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() < before;
        if removed {
            debug!(id = %id, "entity deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
