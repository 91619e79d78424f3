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

//! Arrangement statuses and the result bundle returned by the engine.

use muster_model::roster::Roster;

/// Business result of an arrangement. Reported to the caller, never thrown:
/// a non-success status is a statement about the instance, not a failure of
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeStatus {
    /// The policy's invariants were established.
    Success,
    /// The rosters already satisfied the policy; nothing moved.
    AlreadyArranged,
    /// Pinned members block every split that would satisfy the policy.
    TooManyExclusions,
    /// The rank distribution itself makes the target rank window
    /// unattainable, regardless of which movable members are chosen.
    RanksTooLopsided,
}

impl std::fmt::Display for ArrangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::AlreadyArranged => write!(f, "ALREADY_ARRANGED"),
            Self::TooManyExclusions => write!(f, "TOO_MANY_EXCLUSIONS"),
            Self::RanksTooLopsided => write!(f, "RANKS_TOO_LOPSIDED"),
        }
    }
}

/// Result of an arrangement session: the status plus both final rosters.
#[derive(Debug, Clone)]
pub struct ArrangeOutcome {
    status: ArrangeStatus,
    left_final: Roster,
    right_final: Roster,
}

impl ArrangeOutcome {
    #[inline]
    pub(crate) fn new(status: ArrangeStatus, left_final: Roster, right_final: Roster) -> Self {
        Self {
            status,
            left_final,
            right_final,
        }
    }

    /// Returns the arrangement status.
    #[inline]
    pub fn status(&self) -> ArrangeStatus {
        self.status
    }

    /// Returns the arranged left roster.
    #[inline]
    pub fn left_final(&self) -> &Roster {
        &self.left_final
    }

    /// Returns the arranged right roster.
    #[inline]
    pub fn right_final(&self) -> &Roster {
        &self.right_final
    }

    /// Consumes the outcome, yielding `(left, right)`.
    #[inline]
    pub fn into_rosters(self) -> (Roster, Roster) {
        (self.left_final, self.right_final)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_vocabulary() {
        assert_eq!(ArrangeStatus::Success.to_string(), "SUCCESS");
        assert_eq!(ArrangeStatus::AlreadyArranged.to_string(), "ALREADY_ARRANGED");
        assert_eq!(
            ArrangeStatus::TooManyExclusions.to_string(),
            "TOO_MANY_EXCLUSIONS"
        );
        assert_eq!(
            ArrangeStatus::RanksTooLopsided.to_string(),
            "RANKS_TOO_LOPSIDED"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = ArrangeOutcome::new(ArrangeStatus::Success, Roster::new(), Roster::new());
        assert_eq!(outcome.status(), ArrangeStatus::Success);
        assert!(outcome.left_final().is_empty());
        assert!(outcome.right_final().is_empty());

        let (left, right) = outcome.into_rosters();
        assert!(left.is_empty() && right.is_empty());
    }
}
