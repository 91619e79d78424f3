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

//! Parity routing: even-numbered groups end on the left roster, odd-numbered
//! on the right. Size balance is not a goal.
//!
//! Members are visited in original order, left roster first, and routed to
//! the side matching their group's parity. Placement goes through the
//! roster's parity-constrained walk, so a capacity bump never lands a member
//! in a group of the wrong parity; the id is raised until capacity *and*
//! parity hold. Exclusions do not apply: this policy never moves a member
//! across in the count/rank sense, it reassigns everyone by parity, and
//! pinned members may be renumbered like any other. There is no failure
//! condition; the status is always `Success`, even when one final side ends
//! up empty.

use crate::{
    arranger::ArrangeError,
    outcome::{ArrangeOutcome, ArrangeStatus},
};
use muster_model::{
    entity::EntityStore,
    roster::{GroupParity, Roster},
    rules::Rules,
};

pub(crate) fn arrange(
    rules: &Rules,
    left_original: &Roster,
    right_original: &Roster,
    store: &mut EntityStore,
) -> Result<ArrangeOutcome, ArrangeError> {
    let mut left_final = Roster::new();
    let mut right_final = Roster::new();

    for member in left_original.iter().chain(right_original.iter()) {
        match GroupParity::of(store.entity(member).group()) {
            GroupParity::Even => {
                left_final.add_with_parity(member, store, rules, GroupParity::Even)?
            }
            GroupParity::Odd => {
                right_final.add_with_parity(member, store, rules, GroupParity::Odd)?
            }
        }
    }

    Ok(ArrangeOutcome::new(
        ArrangeStatus::Success,
        left_final,
        right_final,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_model::index::EntityIndex;

    fn populate(
        store: &mut EntityStore,
        roster: &mut Roster,
        entries: &[(&str, i32, i32)],
    ) -> Vec<EntityIndex> {
        let rules = Rules::default();
        entries
            .iter()
            .map(|&(name, rank, group)| {
                let idx = store.create(name, rank, group).unwrap();
                roster.add(idx, store, &rules).unwrap();
                idx
            })
            .collect()
    }

    fn assert_parity_sides(outcome: &ArrangeOutcome, store: &EntityStore) {
        for member in outcome.left_final().iter() {
            assert_eq!(store.entity(member).group() % 2, 0);
        }
        for member in outcome.right_final().iter() {
            assert_eq!(store.entity(member).group() % 2, 1);
        }
    }

    #[test]
    fn test_routes_members_by_parity() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 10, 2), ("B", 20, 3)]);
        populate(&mut store, &mut right, &[("C", 30, 4), ("D", 40, 1)]);

        let rules = Rules::default();
        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        assert_eq!(outcome.left_final().len(), 2);
        assert_eq!(outcome.right_final().len(), 2);
        assert_parity_sides(&outcome, &store);
    }

    #[test]
    fn test_empty_left_side_is_legal() {
        // All groups odd: everyone ends on the right, and the empty left
        // final is not an error even though empty originals are rejected at
        // engine construction.
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 23, 3), ("B", 34, 3)]);
        populate(&mut store, &mut right, &[("C", 100, 1)]);

        let rules = Rules::default();
        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        assert!(outcome.left_final().is_empty());
        assert_eq!(outcome.right_final().len(), 3);
        assert_parity_sides(&outcome, &store);
    }

    #[test]
    fn test_capacity_bump_preserves_parity() {
        // Group 2 can hold two members; the third even-group member must
        // land in an even group above it, never in 3.
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let members = populate(&mut store, &mut left, &[("A", 10, 2), ("B", 20, 2)]);
        let mut right = Roster::new();
        let extra = populate(&mut store, &mut right, &[("C", 30, 2)]);

        let rules = Rules::new(2);
        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        assert_parity_sides(&outcome, &store);

        assert_eq!(store.entity(members[0]).group(), 2);
        assert_eq!(store.entity(members[1]).group(), 2);
        assert_eq!(store.entity(extra[0]).group(), 4);
    }

    #[test]
    fn test_excluded_members_are_still_relocated() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        let pinned = populate(&mut store, &mut left, &[("A", 10, 1)]);
        populate(&mut store, &mut right, &[("B", 20, 2)]);

        let mut rules = Rules::default();
        rules.exclude(pinned[0]);

        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        // The pinned member's group is odd, so it ends on the right even
        // though count/rank policies would refuse to move it.
        assert!(outcome.right_final().contains(pinned[0]));
        assert!(outcome.left_final().contains(store.lookup("B").unwrap()));
    }
}
