// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Entity records and the handle-addressed store that owns them.
//!
//! An [`Entity`] is a `(name, rank, group)` triple: the name is globally
//! unique across the store, the rank is a fixed value in `1..=100`, and the
//! group is a non-negative id that arrangement policies may retarget. The
//! [`EntityStore`] validates all three eagerly on [`EntityStore::create`] and
//! hands back a stable [`EntityIndex`] for all subsequent access.
//!
//! There is deliberately no "replace" operation that removes and recreates a
//! record: retargeting an entity's group goes through
//! [`EntityStore::reassign_group`], which updates the record in place at its
//! handle. Handles are never invalidated, so no holder can observe a stale
//! entity, and the borrow checker prevents caching a `&Entity` across an
//! update.

use crate::index::EntityIndex;
use rustc_hash::FxHashMap;

/// Lowest admissible rank.
pub const MIN_RANK: i32 = 1;

/// Highest admissible rank.
pub const MAX_RANK: i32 = 100;

/// The error type for entity store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entity with this name already exists in the store.
    DuplicateName(String),
    /// The rank is outside `MIN_RANK..=MAX_RANK`.
    InvalidRank(i32),
    /// The group id is negative.
    InvalidGroup(i32),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "an entity named '{}' already exists", name)
            }
            Self::InvalidRank(rank) => {
                write!(
                    f,
                    "rank {} is outside the admissible range {}..={}",
                    rank, MIN_RANK, MAX_RANK
                )
            }
            Self::InvalidGroup(group) => {
                write!(f, "group id {} is negative", group)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// An entity: a named, ranked member of some numbered group.
///
/// The name and rank are immutable for the lifetime of the store; only the
/// group id can change, and only through [`EntityStore::reassign_group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    rank: i32,
    group: i32,
}

impl Entity {
    /// Returns the entity's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entity's rank (`1..=100`, higher is better).
    #[inline]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Returns the entity's current group id.
    #[inline]
    pub fn group(&self) -> i32 {
        self.group
    }
}

/// A handle-addressed store of entities with a unique-name index.
///
/// The store is the single owner of all entity records. Lookups by handle are
/// O(1) vector accesses; lookups by name go through a hash index. Records are
/// created once per unique name and persist for the lifetime of the store.
///
/// # Examples
///
/// ```rust
/// use muster_model::entity::EntityStore;
///
/// let mut store = EntityStore::new();
/// let alice = store.create("Alice", 23, 3).unwrap();
///
/// assert_eq!(store.lookup("Alice"), Some(alice));
/// assert_eq!(store.entity(alice).rank(), 23);
/// assert_eq!(store.entity(alice).group(), 3);
///
/// store.reassign_group(alice, 4).unwrap();
/// assert_eq!(store.entity(alice).group(), 4);
/// assert_eq!(store.entity(alice).rank(), 23);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    by_name: FxHashMap<String, EntityIndex>,
}

impl EntityStore {
    /// Creates a new, empty store.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store with preallocated storage for `capacity` entities.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            by_name: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of entities in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store holds no entities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Creates a new entity and returns its handle.
    ///
    /// # Errors
    ///
    /// * [`StoreError::DuplicateName`] if an entity with this name exists.
    /// * [`StoreError::InvalidRank`] if `rank` is outside `1..=100`.
    /// * [`StoreError::InvalidGroup`] if `group` is negative.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        rank: i32,
        group: i32,
    ) -> Result<EntityIndex, StoreError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(StoreError::DuplicateName(name));
        }
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(StoreError::InvalidRank(rank));
        }
        if group < 0 {
            return Err(StoreError::InvalidGroup(group));
        }

        let index = EntityIndex::new(self.entities.len());
        self.by_name.insert(name.clone(), index);
        self.entities.push(Entity { name, rank, group });
        Ok(index)
    }

    /// Looks up an entity handle by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<EntityIndex> {
        self.by_name.get(name).copied()
    }

    /// Returns the entity record at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this store. A foreign handle
    /// indicates an inconsistent internal state and is not recoverable.
    #[inline]
    pub fn entity(&self, index: EntityIndex) -> &Entity {
        assert!(
            index.get() < self.entities.len(),
            "called `EntityStore::entity` with a handle out of bounds: the len is {} but the index is {}",
            self.entities.len(),
            index.get()
        );
        &self.entities[index.get()]
    }

    /// Retargets the group id of the entity at the given handle, keeping its
    /// name and rank. All holders of the handle observe the new group on
    /// their next resolution.
    ///
    /// # Errors
    ///
    /// * [`StoreError::InvalidGroup`] if `group` is negative.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this store.
    pub fn reassign_group(&mut self, index: EntityIndex, group: i32) -> Result<(), StoreError> {
        if group < 0 {
            return Err(StoreError::InvalidGroup(group));
        }
        assert!(
            index.get() < self.entities.len(),
            "called `EntityStore::reassign_group` with a handle out of bounds: the len is {} but the index is {}",
            self.entities.len(),
            index.get()
        );
        self.entities[index.get()].group = group;
        Ok(())
    }

}
