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

//! Count balancing: make the two rosters the same size within 1.
//!
//! The finals start as verbatim snapshots. The larger final (ties: left) is
//! scanned once from the front; each movable candidate is transferred to the
//! smaller final under the real rules until the counts balance. A pinned
//! candidate is skipped by advancing the scan position; a moved candidate
//! keeps the position, since removal shifts the next unexamined member into
//! place. The scan visits each candidate at most once, so pinning can leave
//! the pair unbalanced even when enough movable members exist further on.
//! That single-pass termination is part of the contract.

use crate::{
    arranger::ArrangeError,
    outcome::{ArrangeOutcome, ArrangeStatus},
    policy::snapshot,
};
use muster_model::{entity::EntityStore, roster::Roster, rules::Rules};

pub(crate) fn arrange(
    rules: &Rules,
    left_original: &Roster,
    right_original: &Roster,
    store: &mut EntityStore,
) -> Result<ArrangeOutcome, ArrangeError> {
    let mut left_final = snapshot(left_original, store)?;
    let mut right_final = snapshot(right_original, store)?;

    let status = {
        // Guess the larger roster is the left one; swap if guessed wrong.
        let (bigger, smaller) = if right_final.len() > left_final.len() {
            (&mut right_final, &mut left_final)
        } else {
            (&mut left_final, &mut right_final)
        };
        balance(bigger, smaller, store, rules)?
    };

    Ok(ArrangeOutcome::new(status, left_final, right_final))
}

/// Moves members from `bigger` to `smaller` until the counts differ by at
/// most 1 or every candidate has been examined once.
fn balance(
    bigger: &mut Roster,
    smaller: &mut Roster,
    store: &mut EntityStore,
    rules: &Rules,
) -> Result<ArrangeStatus, ArrangeError> {
    if bigger.len() - 1 <= smaller.len() {
        return Ok(ArrangeStatus::AlreadyArranged);
    }

    let mut cursor = 0;
    while bigger.len() - 1 > smaller.len() && cursor < bigger.len() {
        let candidate = bigger.get(cursor);
        if bigger.remove(candidate, store, rules)? {
            smaller.add(candidate, store, rules)?;
        } else {
            cursor += 1;
        }
    }

    if bigger.len() - 1 <= smaller.len() {
        Ok(ArrangeStatus::Success)
    } else {
        Ok(ArrangeStatus::TooManyExclusions)
    }
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

    #[test]
    fn test_already_arranged_when_diff_at_most_one() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 23, 3), ("B", 34, 3)]);
        populate(&mut store, &mut right, &[("C", 100, 1)]);

        let rules = Rules::default();
        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::AlreadyArranged);
        assert_eq!(outcome.left_final().len(), 2);
        assert_eq!(outcome.right_final().len(), 1);
    }

    #[test]
    fn test_balances_lopsided_pair() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 10, 0)]);
        populate(
            &mut store,
            &mut right,
            &[
                ("B", 20, 0),
                ("C", 30, 0),
                ("D", 40, 0),
                ("E", 50, 0),
                ("F", 60, 1),
            ],
        );

        let rules = Rules::default();
        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        let diff = outcome.left_final().len() as i64 - outcome.right_final().len() as i64;
        assert!(diff.abs() <= 1);
        assert_eq!(outcome.left_final().len() + outcome.right_final().len(), 6);
    }

    #[test]
    fn test_pinned_members_never_move() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 10, 0)]);
        let on_right = populate(
            &mut store,
            &mut right,
            &[("B", 20, 0), ("C", 30, 0), ("D", 40, 0), ("E", 50, 0)],
        );

        let mut rules = Rules::default();
        rules.exclude(on_right[0]);
        rules.exclude(on_right[1]);

        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        assert!(outcome.right_final().contains(on_right[0]));
        assert!(outcome.right_final().contains(on_right[1]));
    }

    #[test]
    fn test_too_many_exclusions_when_everything_is_pinned() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 10, 0)]);
        let on_right = populate(
            &mut store,
            &mut right,
            &[("B", 20, 0), ("C", 30, 0), ("D", 40, 0), ("E", 50, 0)],
        );

        let mut rules = Rules::default();
        for &m in &on_right {
            rules.exclude(m);
        }

        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::TooManyExclusions);
        // Nothing could move; the finals still hold everyone.
        assert_eq!(outcome.left_final().len(), 1);
        assert_eq!(outcome.right_final().len(), 4);
    }

    #[test]
    fn test_tie_designates_left_as_bigger() {
        let mut store = EntityStore::new();
        let mut left = Roster::new();
        let mut right = Roster::new();
        populate(&mut store, &mut left, &[("A", 10, 0), ("B", 20, 0)]);
        populate(&mut store, &mut right, &[("C", 30, 0), ("D", 40, 0)]);

        let rules = Rules::default();
        let outcome = arrange(&rules, &left, &right, &mut store).unwrap();
        assert_eq!(outcome.status(), ArrangeStatus::AlreadyArranged);
        assert_eq!(outcome.left_final().len(), 2);
        assert_eq!(outcome.right_final().len(), 2);
    }
}
