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

//! Ordered, duplicate-free rosters with per-group occupancy tracking.
//!
//! A [`Roster`] is a sequence of entity handles (insertion order is only
//! relevant for display) plus a map from group id to current member count.
//! The map invariant: for every member, the entry for that member's current
//! group is at least 1 and equals the number of members currently assigned
//! that group; groups with zero members are absent from the map, never
//! present with value 0.
//!
//! The roster owns the two placement algorithms every arrangement policy
//! depends on:
//!
//! * [`Roster::resolve_group`]: the group-size resolution walk. Starting at
//!   an entity's current group id, it walks the *present* group ids in
//!   strictly increasing numeric order until it finds one under capacity,
//!   or returns one greater than the highest present id.
//! * [`Roster::add_with_parity`]: the same walk, additionally requiring the
//!   admitted id to have a given parity. Capacity is never satisfied at the
//!   cost of parity.
//!
//! Both walks iterate the occupancy map in numeric key order (`BTreeMap`
//! range queries), so the admitted group is deterministic and independent of
//! insertion order.

use crate::{
    entity::{EntityStore, StoreError},
    index::EntityIndex,
    rules::Rules,
};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Parity of a group id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupParity {
    Even,
    Odd,
}

impl GroupParity {
    /// Returns the parity of a (non-negative) group id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use muster_model::roster::GroupParity;
    ///
    /// assert_eq!(GroupParity::of(0), GroupParity::Even);
    /// assert_eq!(GroupParity::of(3), GroupParity::Odd);
    /// ```
    #[inline]
    pub fn of(group: i32) -> Self {
        if group % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }
}

impl std::fmt::Display for GroupParity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Even => write!(f, "even"),
            Self::Odd => write!(f, "odd"),
        }
    }
}

/// The error type for roster operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The entity is already a member of this roster.
    DuplicateMember(EntityIndex),
    /// The entity is not a member of this roster.
    MemberNotFound(EntityIndex),
    /// The group id is negative.
    InvalidGroup(i32),
    /// A store operation failed while persisting a group change.
    Store(StoreError),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateMember(index) => {
                write!(f, "{} is already a member of the roster", index)
            }
            Self::MemberNotFound(index) => {
                write!(f, "{} is not a member of the roster", index)
            }
            Self::InvalidGroup(group) => write!(f, "group id {} is negative", group),
            Self::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for RosterError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// An ordered, duplicate-free collection of entity handles with per-group
/// occupancy tracking.
///
/// # Examples
///
/// ```rust
/// use muster_model::entity::EntityStore;
/// use muster_model::roster::Roster;
/// use muster_model::rules::Rules;
///
/// let mut store = EntityStore::new();
/// let alice = store.create("Alice", 23, 3).unwrap();
/// let beth = store.create("Beth", 34, 3).unwrap();
///
/// let rules = Rules::default();
/// let mut roster = Roster::new();
/// assert!(roster.add(alice, &mut store, &rules).unwrap());
/// assert!(roster.add(beth, &mut store, &rules).unwrap());
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.group_size(3).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<EntityIndex>,
    present: FxHashSet<EntityIndex>,
    group_counts: BTreeMap<i32, i32>,
}

impl Roster {
    /// Creates a new, empty roster.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of members in the roster.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the roster has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if the entity is a member of this roster.
    #[inline]
    pub fn contains(&self, index: EntityIndex) -> bool {
        self.present.contains(&index)
    }

    /// Returns the member at a display position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn get(&self, position: usize) -> EntityIndex {
        assert!(
            position < self.members.len(),
            "called `Roster::get` with position out of bounds: the len is {} but the position is {}",
            self.members.len(),
            position
        );
        self.members[position]
    }

    /// Returns an iterator over the members in display order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = EntityIndex> + '_ {
        self.members.iter().copied()
    }

    /// Returns the current member count of the given group, 0 if no member
    /// is assigned to it.
    ///
    /// # Errors
    ///
    /// * [`RosterError::InvalidGroup`] if `group` is negative.
    pub fn group_size(&self, group: i32) -> Result<i32, RosterError> {
        if group < 0 {
            return Err(RosterError::InvalidGroup(group));
        }
        Ok(self.group_counts.get(&group).copied().unwrap_or(0))
    }

    /// Sum of the ranks of all members.
    pub fn rank_sum(&self, store: &EntityStore) -> i32 {
        self.members.iter().map(|&m| store.entity(m).rank()).sum()
    }

    /// Adds an entity to this roster under the given rules.
    ///
    /// If the rules exclude the entity from moving, nothing happens and
    /// `Ok(false)` is returned. Otherwise the admitted group id is computed
    /// via [`Roster::resolve_group`]; if it differs from the entity's current
    /// group the change is persisted through the store before the member is
    /// inserted.
    ///
    /// # Errors
    ///
    /// * [`RosterError::DuplicateMember`] if the entity is already a member.
    pub fn add(
        &mut self,
        index: EntityIndex,
        store: &mut EntityStore,
        rules: &Rules,
    ) -> Result<bool, RosterError> {
        if rules.is_excluded(index) {
            return Ok(false);
        }
        if self.present.contains(&index) {
            return Err(RosterError::DuplicateMember(index));
        }

        let admitted = self.resolve_group(index, store, rules);
        if admitted != store.entity(index).group() {
            store.reassign_group(index, admitted)?;
        }

        self.members.push(index);
        self.present.insert(index);
        *self.group_counts.entry(admitted).or_insert(0) += 1;
        Ok(true)
    }

    /// Adds every member of `other` to this roster, in `other`'s display
    /// order. Members excluded by the rules are skipped.
    ///
    /// Returns `Ok(true)` iff at least one add succeeded.
    pub fn add_all(
        &mut self,
        other: &Roster,
        store: &mut EntityStore,
        rules: &Rules,
    ) -> Result<bool, RosterError> {
        let mut changed = false;
        for &member in &other.members {
            if self.add(member, store, rules)? {
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Removes an entity from this roster under the given rules.
    ///
    /// Exclusions block removal exactly as they block addition: if the rules
    /// exclude the entity, nothing happens and `Ok(false)` is returned. The
    /// entity's group id is never changed by a removal.
    ///
    /// # Errors
    ///
    /// * [`RosterError::MemberNotFound`] if the entity is not a member.
    pub fn remove(
        &mut self,
        index: EntityIndex,
        store: &EntityStore,
        rules: &Rules,
    ) -> Result<bool, RosterError> {
        if !self.present.contains(&index) {
            return Err(RosterError::MemberNotFound(index));
        }
        if rules.is_excluded(index) {
            return Ok(false);
        }

        let position = self
            .members
            .iter()
            .position(|&m| m == index)
            .unwrap_or_else(|| {
                panic!(
                    "called `Roster::remove` with inconsistent membership: {} is tracked as present but missing from the member list",
                    index
                )
            });
        self.members.remove(position);
        self.present.remove(&index);

        let group = store.entity(index).group();
        match self.group_counts.remove(&group) {
            Some(count) if count > 1 => {
                self.group_counts.insert(group, count - 1);
            }
            Some(_) => {}
            None => panic!(
                "called `Roster::remove` with inconsistent group counts: {} has group {} but the roster tracks no such group",
                index, group
            ),
        }
        Ok(true)
    }

    /// Computes the group id an entity would be admitted under, without
    /// modifying anything.
    ///
    /// Starting at the entity's current group id, the walk visits the group
    /// ids currently present in this roster in strictly increasing numeric
    /// order, beginning with the start id itself. The first visited id whose
    /// member count is below the maximum group size is the admitted id. If
    /// every present id from the start upward is at capacity, the admitted id
    /// is one greater than the highest id visited. Ids not present in the
    /// occupancy map are always under capacity.
    ///
    /// The walk is deterministic (numeric key order) and idempotent: calling
    /// it twice with no intervening mutation yields the same admitted id.
    pub fn resolve_group(&self, index: EntityIndex, store: &EntityStore, rules: &Rules) -> i32 {
        let mut group = store.entity(index).group();
        loop {
            match self.group_counts.get(&group) {
                Some(&count) if count >= rules.maximum_group_size() => {
                    match self.next_group_above(group) {
                        Some(next) => group = next,
                        None => return group + 1,
                    }
                }
                _ => return group,
            }
        }
    }

    /// Adds an entity whose admitted group id must have the given parity.
    ///
    /// The walk is the same as [`Roster::resolve_group`], but an id is only
    /// accepted when its parity matches *and* its count is below the maximum:
    /// capacity is never satisfied at the cost of parity. When the walk
    /// exhausts the present ids, the admitted id is the last visited id plus
    /// 2 if that id already had the required parity, plus 1 otherwise.
    /// Either way the result is a fresh id of the correct parity.
    ///
    /// This is an engine-internal placement: it performs no exclusion or
    /// duplicate refusal, persists the group change when needed, and always
    /// inserts.
    pub fn add_with_parity(
        &mut self,
        index: EntityIndex,
        store: &mut EntityStore,
        rules: &Rules,
        parity: GroupParity,
    ) -> Result<(), RosterError> {
        debug_assert!(
            !self.present.contains(&index),
            "called `Roster::add_with_parity` with {} already a member",
            index
        );

        let start = store.entity(index).group();
        let mut group = start;
        let mut group_parity = GroupParity::of(group);
        let mut count = self.group_counts.get(&group).copied();

        while group_parity != parity
            || matches!(count, Some(c) if c >= rules.maximum_group_size())
        {
            match self.next_group_above(group) {
                Some(next) => {
                    count = self.group_counts.get(&next).copied();
                    group_parity = GroupParity::of(next);
                    group = next;
                }
                None => {
                    group += if group_parity == parity { 2 } else { 1 };
                    break;
                }
            }
        }

        if group != start {
            store.reassign_group(index, group)?;
        }

        self.members.push(index);
        self.present.insert(index);
        *self.group_counts.entry(group).or_insert(0) += 1;
        Ok(())
    }

    /// Reorders the member sequence by entity name, lexicographic ascending.
    /// Pure presentation; group bookkeeping is unaffected.
    pub fn sort_by_name(&mut self, store: &EntityStore) {
        self.members
            .sort_by(|&a, &b| store.entity(a).name().cmp(store.entity(b).name()));
    }

    /// Reorders the member sequence by rank, descending (100 down to 1).
    /// Pure presentation; group bookkeeping is unaffected.
    pub fn sort_by_rank(&mut self, store: &EntityStore) {
        self.members
            .sort_by(|&a, &b| store.entity(b).rank().cmp(&store.entity(a).rank()));
    }

    /// Smallest present group id strictly greater than `group`.
    #[inline]
    fn next_group_above(&self, group: i32) -> Option<i32> {
        self.group_counts
            .range((Bound::Excluded(group), Bound::Unbounded))
            .next()
            .map(|(&g, _)| g)
    }
}
