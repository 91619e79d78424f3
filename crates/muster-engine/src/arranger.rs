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

//! The arrangement session object.
//!
//! An [`Arranger`] is constructed fresh per (policy, roster pair). It
//! validates its inputs eagerly: a negative maximum group size or an empty
//! original roster is rejected immediately, never retried. The session takes
//! ownership of the original rosters, so callers must pass fresh copies per
//! invocation. A single [`Arranger::arrange`] call consumes the session and
//! yields an [`ArrangeOutcome`] carrying the status and both final rosters.

use crate::{
    outcome::ArrangeOutcome,
    policy::{by_group, by_number, by_rank},
};
use muster_model::{entity::EntityStore, roster::Roster, roster::RosterError, rules::Rules};

/// Selects which invariants the arrangement establishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Equalize member counts; the difference must end at most 1.
    ByNumber,
    /// Bring rank sums within 90 of each other with a count difference of
    /// at most 2.
    ByRank,
    /// Even-numbered groups end on the left roster, odd-numbered on the
    /// right.
    ByGroup,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByNumber => write!(f, "BY_NUMBER"),
            Self::ByRank => write!(f, "BY_RANK"),
            Self::ByGroup => write!(f, "BY_GROUP"),
        }
    }
}

/// Identifies one side of a roster pair. The sides are arbitrary labels;
/// leftness carries no meaning beyond telling the two rosters apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// The error type for arrangement sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrangeError {
    /// The maximum group size passed to the engine is negative.
    InvalidConstraint(i32),
    /// An original roster is empty.
    EmptyRoster(Side),
    /// A roster operation failed mid-arrangement. This indicates an
    /// inconsistent internal state and is not recoverable.
    Roster(RosterError),
}

impl std::fmt::Display for ArrangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConstraint(max) => {
                write!(f, "maximum group size {} is negative", max)
            }
            Self::EmptyRoster(side) => {
                write!(f, "the {} original roster is empty", side)
            }
            Self::Roster(e) => write!(f, "roster error: {}", e),
        }
    }
}

impl std::error::Error for ArrangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Roster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RosterError> for ArrangeError {
    fn from(e: RosterError) -> Self {
        Self::Roster(e)
    }
}

/// Arranges a pair of rosters according to a policy.
///
/// # Examples
///
/// ```rust
/// use muster_engine::arranger::{Arranger, Policy};
/// use muster_engine::outcome::ArrangeStatus;
/// use muster_model::entity::EntityStore;
/// use muster_model::roster::Roster;
/// use muster_model::rules::Rules;
///
/// let mut store = EntityStore::new();
/// let rules = Rules::default();
///
/// let mut left = Roster::new();
/// let alice = store.create("Alice", 23, 3).unwrap();
/// left.add(alice, &mut store, &rules).unwrap();
///
/// let mut right = Roster::new();
/// let charlie = store.create("Charlie", 100, 1).unwrap();
/// right.add(charlie, &mut store, &rules).unwrap();
///
/// // The session owns its copies; keep the originals for later policies.
/// let session = Arranger::new(Policy::ByNumber, &rules, left.clone(), right.clone()).unwrap();
/// let outcome = session.arrange(&mut store).unwrap();
/// assert_eq!(outcome.status(), ArrangeStatus::AlreadyArranged);
/// ```
#[derive(Debug, Clone)]
pub struct Arranger<'r> {
    policy: Policy,
    rules: &'r Rules,
    left_original: Roster,
    right_original: Roster,
}

impl<'r> Arranger<'r> {
    /// Creates a session for one policy and one pair of rosters, adopting
    /// ownership of both rosters.
    ///
    /// # Errors
    ///
    /// * [`ArrangeError::InvalidConstraint`] if the rules carry a negative
    ///   maximum group size.
    /// * [`ArrangeError::EmptyRoster`] if either original roster is empty.
    pub fn new(
        policy: Policy,
        rules: &'r Rules,
        left_original: Roster,
        right_original: Roster,
    ) -> Result<Self, ArrangeError> {
        if rules.maximum_group_size() < 0 {
            return Err(ArrangeError::InvalidConstraint(rules.maximum_group_size()));
        }
        if left_original.is_empty() {
            return Err(ArrangeError::EmptyRoster(Side::Left));
        }
        if right_original.is_empty() {
            return Err(ArrangeError::EmptyRoster(Side::Right));
        }
        Ok(Self {
            policy,
            rules,
            left_original,
            right_original,
        })
    }

    /// Returns the session's policy.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Arranges the rosters, consuming the session.
    pub fn arrange(self, store: &mut EntityStore) -> Result<ArrangeOutcome, ArrangeError> {
        match self.policy {
            Policy::ByNumber => {
                by_number::arrange(self.rules, &self.left_original, &self.right_original, store)
            }
            Policy::ByRank => {
                by_rank::arrange(self.rules, &self.left_original, &self.right_original, store)
            }
            Policy::ByGroup => {
                by_group::arrange(self.rules, &self.left_original, &self.right_original, store)
            }
        }
    }
}
