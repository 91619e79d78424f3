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

//! Rank balancing: bring the rank sums within 90 of each other while keeping
//! the count difference at most 2. Any valid split is acceptable; neither
//! gap is minimized.
//!
//! Members pinned by the rules stay on their original side. The movable
//! remainder is a combined pool from both sides, and the left final roster
//! must receive a subset of that pool whose rank sum and size each fall in a
//! window derived from the totals below. Everything outside the chosen
//! subset lands on the right. Both window bounds round toward the feasible
//! side (ceiling on the floor, floor on the ceiling), so every accepted
//! state corresponds to a split actually inside both tolerances.
//!
//! The subset search is a bounded 0/1 subset-sum reachability DP with one
//! bitset of attainable sums per subset size and a set-once parent table for
//! reconstruction. Selection is deterministic: sums are scanned ascending
//! from the window floor, sizes ascending within the count window, and the
//! first reachable state is reconstructed and used. Storage is
//! O(free * fsum) bits rather than one list per distinct subset.

use crate::{
    arranger::ArrangeError,
    outcome::{ArrangeOutcome, ArrangeStatus},
    policy::snapshot,
};
use fixedbitset::FixedBitSet;
use muster_model::{entity::EntityStore, index::EntityIndex, roster::Roster, rules::Rules};
use rustc_hash::FxHashSet;

/// Width of the admissible rank-sum window (inclusive).
const RANK_WINDOW: i32 = 90;

/// Width of the admissible count window (inclusive).
const COUNT_WINDOW: i32 = 2;

/// Sentinel for an unset parent-table slot.
const UNSET: usize = usize::MAX;

pub(crate) fn arrange(
    rules: &Rules,
    left_original: &Roster,
    right_original: &Roster,
    store: &mut EntityStore,
) -> Result<ArrangeOutcome, ArrangeError> {
    // Partition both sides into pinned members (which keep their side) and
    // the combined movable pool, in original visiting order.
    let mut reserved_left: Vec<EntityIndex> = Vec::new();
    let mut reserved_right: Vec<EntityIndex> = Vec::new();
    let mut free: Vec<EntityIndex> = Vec::new();

    for member in left_original.iter() {
        if rules.is_excluded(member) {
            reserved_left.push(member);
        } else {
            free.push(member);
        }
    }
    for member in right_original.iter() {
        if rules.is_excluded(member) {
            reserved_right.push(member);
        } else {
            free.push(member);
        }
    }

    let ranks: Vec<i32> = free.iter().map(|&m| store.entity(m).rank()).collect();
    let fsum: i32 = ranks.iter().sum();
    let rsum: i32 = reserved_left
        .iter()
        .map(|&m| store.entity(m).rank())
        .sum();
    let sum: i32 = fsum
        + rsum
        + reserved_right
            .iter()
            .map(|&m| store.entity(m).rank())
            .sum::<i32>();

    // Window bounds, derived so that hitting the windows leaves the finished
    // rank sums within RANK_WINDOW and the sizes within COUNT_WINDOW. A
    // subset sum s is admissible iff |2*(rsum + s) - sum| <= RANK_WINDOW,
    // which gives a ceiling-divided floor and a floor-divided ceiling; the
    // count axis is analogous. For odd totals the two bounds round toward
    // each other, shrinking the window by one.
    let min_val = (sum - RANK_WINDOW + 1) / 2 - rsum;
    let max_val = (sum + RANK_WINDOW) / 2 - rsum;
    let total = (left_original.len() + right_original.len()) as i32;
    let min_cnt = (total - COUNT_WINDOW + 1) / 2 - reserved_left.len() as i32;
    let max_cnt = (total + COUNT_WINDOW) / 2 - reserved_left.len() as i32;

    // The sum window misses every attainable subset sum: the ranks are too
    // lopsided for any choice of movable members.
    if min_val > fsum || max_val < 0 {
        let left_final = snapshot(left_original, store)?;
        let right_final = snapshot(right_original, store)?;
        return Ok(ArrangeOutcome::new(
            ArrangeStatus::RanksTooLopsided,
            left_final,
            right_final,
        ));
    }

    match pick_subset(&ranks, min_val, max_val, min_cnt, max_cnt) {
        Selection::Subset(picked) => {
            let chosen: FxHashSet<usize> = picked.iter().copied().collect();
            for &i in &picked {
                reserved_left.push(free[i]);
            }
            for (i, &member) in free.iter().enumerate() {
                if !chosen.contains(&i) {
                    reserved_right.push(member);
                }
            }

            // Membership and exclusion were already resolved above; insert
            // without re-checking constraints.
            let bypass = Rules::unconstrained();
            let mut left_final = Roster::new();
            for &member in &reserved_left {
                left_final.add(member, store, &bypass)?;
            }
            let mut right_final = Roster::new();
            for &member in &reserved_right {
                right_final.add(member, store, &bypass)?;
            }

            Ok(ArrangeOutcome::new(
                ArrangeStatus::Success,
                left_final,
                right_final,
            ))
        }
        Selection::SumUnreachable => {
            let left_final = snapshot(left_original, store)?;
            let right_final = snapshot(right_original, store)?;
            Ok(ArrangeOutcome::new(
                ArrangeStatus::RanksTooLopsided,
                left_final,
                right_final,
            ))
        }
        Selection::CountUnreachable => {
            let left_final = snapshot(left_original, store)?;
            let right_final = snapshot(right_original, store)?;
            Ok(ArrangeOutcome::new(
                ArrangeStatus::TooManyExclusions,
                left_final,
                right_final,
            ))
        }
    }
}

/// Result of the subset search over the movable pool.
enum Selection {
    /// Positions (into the pool) of a subset hitting both windows.
    Subset(Vec<usize>),
    /// No attainable sum inside the sum window at any size.
    SumUnreachable,
    /// Sums inside the window are attainable, but none with a size inside
    /// the count window.
    CountUnreachable,
}

/// 0/1 subset-sum reachability over the pool, tracking subset size.
///
/// `reachable[c]` holds the sums attainable with exactly `c` pool members;
/// `choice[c][s]` records the pool position last included when `(c, s)` was
/// first reached, forming parent links back to `(0, 0)`. Entries are written
/// at most once, so every parent chain uses strictly decreasing positions
/// and reconstruction terminates with distinct members.
fn pick_subset(
    ranks: &[i32],
    min_val: i32,
    max_val: i32,
    min_cnt: i32,
    max_cnt: i32,
) -> Selection {
    let n = ranks.len();
    let fsum: i32 = ranks.iter().sum();
    debug_assert!(min_val <= fsum && max_val >= 0);

    let cap = max_val.min(fsum).max(0) as usize;
    let width = cap + 1;

    let mut reachable: Vec<FixedBitSet> = (0..=n).map(|_| FixedBitSet::with_capacity(width)).collect();
    reachable[0].insert(0);
    let mut choice: Vec<Vec<usize>> = vec![vec![UNSET; width]; n + 1];

    for (i, &rank) in ranks.iter().enumerate() {
        let rank = rank as usize;
        // Sizes descend so a state extended by this member is never
        // re-extended by it within the same pass.
        for c in (0..=i.min(n - 1)).rev() {
            let (head, tail) = reachable.split_at_mut(c + 1);
            let source = &head[c];
            let target = &mut tail[0];
            for s in source.ones() {
                let t = s + rank;
                if t <= cap && !target.contains(t) {
                    target.insert(t);
                    choice[c + 1][t] = i;
                }
            }
        }
    }

    let low = min_val.max(0) as usize;
    let mut sum_hit = false;
    for s in low..=cap {
        for (c, sums) in reachable.iter().enumerate() {
            if !sums.contains(s) {
                continue;
            }
            sum_hit = true;
            let size = c as i32;
            if size >= min_cnt && size <= max_cnt {
                return Selection::Subset(reconstruct(ranks, &choice, s, c));
            }
        }
    }

    if sum_hit {
        Selection::CountUnreachable
    } else {
        Selection::SumUnreachable
    }
}

/// Walks the parent links from `(size, sum)` back to `(0, 0)`, collecting
/// the chosen pool positions in ascending order.
fn reconstruct(ranks: &[i32], choice: &[Vec<usize>], mut sum: usize, mut size: usize) -> Vec<usize> {
    let mut picked = Vec::with_capacity(size);
    while size > 0 {
        let i = choice[size][sum];
        assert!(
            i != UNSET,
            "called `reconstruct` on an unreached state: size {} sum {}",
            size,
            sum
        );
        picked.push(i);
        sum -= ranks[i] as usize;
        size -= 1;
    }
    debug_assert_eq!(sum, 0);
    picked.reverse();
    picked
}
