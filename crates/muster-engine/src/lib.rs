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

//! # Muster Engine
//!
//! **The Arrangement Engine for Roster Pairs.**
//!
//! Given two roster snapshots, a constraint set, and a policy selector, the
//! engine produces two final rosters satisfying the policy's invariants:
//!
//! * **by number**: equalize member counts (difference at most 1); pinned
//!   members never change side.
//! * **by rank**: bring the rank sums within 90 of each other while keeping
//!   the count difference at most 2; *a* valid split, not the most balanced
//!   one.
//! * **by group**: even-numbered groups end on the left roster, odd-numbered
//!   on the right; size balance is not a goal.
//!
//! ## Architecture
//!
//! * **`arranger`**: The [`Arranger`](arranger::Arranger) session object:
//!   constructed fresh per (policy, roster pair), validates its inputs
//!   eagerly, takes ownership of the original rosters, and is consumed by a
//!   single `arrange` call.
//! * **`outcome`**: The closed status vocabulary
//!   ([`ArrangeStatus`](outcome::ArrangeStatus)) and the result bundle
//!   carrying both final rosters.
//! * **`policy`** (internal): one module per policy. Statuses are business
//!   results, never errors; construction-time validation failures and
//!   structural inconsistencies are surfaced as errors or panics instead.

pub mod arranger;
pub mod outcome;

mod policy;
