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

//! The constraint set applied during an arrangement.
//!
//! [`Rules`] bundles the maximum allowed size of any group with the set of
//! entities pinned to their original roster. Exclusions are *checked, never
//! enforced retroactively*: pinning an entity that was already placed does
//! not undo its placement.

use crate::index::EntityIndex;
use rustc_hash::FxHashSet;

/// Default maximum group size when none is specified.
pub const DEFAULT_MAXIMUM_GROUP_SIZE: i32 = 5;

/// Constraints that influence arrangement: maximum group size and the set of
/// entities excluded from moving between rosters.
///
/// The no-constraint value is obtained from [`Rules::unconstrained`]. It is a
/// fresh value on every call, so the privileged "no rules" instance can never
/// be mutated out from under other holders.
///
/// # Examples
///
/// ```rust
/// use muster_model::index::EntityIndex;
/// use muster_model::rules::Rules;
///
/// let mut rules = Rules::default();
/// assert_eq!(rules.maximum_group_size(), 5);
///
/// let pinned = EntityIndex::new(0);
/// assert!(!rules.is_excluded(pinned));
/// rules.exclude(pinned);
/// assert!(rules.is_excluded(pinned));
/// ```
#[derive(Debug, Clone)]
pub struct Rules {
    maximum_group_size: i32,
    excluded: FxHashSet<EntityIndex>,
}

impl Rules {
    /// Creates a rule set with the given maximum group size and no exclusions.
    #[inline]
    pub fn new(maximum_group_size: i32) -> Self {
        Self {
            maximum_group_size,
            excluded: FxHashSet::default(),
        }
    }

    /// Creates a rule set with no effective constraints: an unbounded group
    /// size and no exclusions.
    #[inline]
    pub fn unconstrained() -> Self {
        Self::new(i32::MAX)
    }

    /// Returns the maximum allowed size of any group.
    #[inline]
    pub fn maximum_group_size(&self) -> i32 {
        self.maximum_group_size
    }

    /// Pins an entity to its original roster. Adding an entity that has
    /// already been placed does not undo its placement.
    #[inline]
    pub fn exclude(&mut self, index: EntityIndex) {
        self.excluded.insert(index);
    }

    /// Returns `true` if the entity is excluded from moving between rosters.
    #[inline]
    pub fn is_excluded(&self, index: EntityIndex) -> bool {
        self.excluded.contains(&index)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_GROUP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maximum() {
        assert_eq!(Rules::default().maximum_group_size(), 5);
    }

    #[test]
    fn test_unconstrained_is_unbounded_and_empty() {
        let rules = Rules::unconstrained();
        assert_eq!(rules.maximum_group_size(), i32::MAX);
        assert!(!rules.is_excluded(EntityIndex::new(0)));
    }

    #[test]
    fn test_exclusions() {
        let mut rules = Rules::new(3);
        let a = EntityIndex::new(1);
        let b = EntityIndex::new(2);

        rules.exclude(a);
        assert!(rules.is_excluded(a));
        assert!(!rules.is_excluded(b));

        // Excluding twice is a no-op.
        rules.exclude(a);
        assert!(rules.is_excluded(a));
    }
}
