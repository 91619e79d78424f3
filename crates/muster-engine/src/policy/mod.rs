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

//! Arrangement policies.
//!
//! One module per policy, each exposing a single `arrange` entry point with
//! the same shape. Every policy works on *final* rosters built fresh for the
//! session; the originals passed in are read-only snapshots of the starting
//! state.
//!
//! Provided policies:
//! - `by_number`: scan-and-move count balancing (difference at most 1).
//! - `by_rank`: constrained subset-sum rank balancing (sums within 90,
//!   counts within 2) via a parent-linked reachability DP.
//! - `by_group`: parity routing (even groups left, odd groups right).

use crate::arranger::ArrangeError;
use muster_model::{entity::EntityStore, roster::Roster, rules::Rules};

pub(crate) mod by_group;
pub(crate) mod by_number;
pub(crate) mod by_rank;

/// Builds a verbatim copy of `original`. Constraint enforcement is bypassed
/// (unbounded group size, no exclusions), so membership and group ids carry
/// over unchanged.
pub(crate) fn snapshot(original: &Roster, store: &mut EntityStore) -> Result<Roster, ArrangeError> {
    let mut copy = Roster::new();
    copy.add_all(original, store, &Rules::unconstrained())?;
    Ok(copy)
}
