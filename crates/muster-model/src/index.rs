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

//! # Strongly Typed Entity Handles (Zero-Cost)
//!
//! A transparent wrapper around `usize` identifying an entity inside an
//! [`EntityStore`](crate::entity::EntityStore). Handles are stable for the
//! lifetime of the store: group reassignment updates the record *at* the
//! handle, so a handle obtained once stays valid across any number of
//! reassignments. Holders resolve fields through the store on demand and
//! never cache them across an update.

/// A stable, strongly typed handle to an entity in an
/// [`EntityStore`](crate::entity::EntityStore).
///
/// # Examples
///
/// ```rust
/// use muster_model::index::EntityIndex;
///
/// let idx = EntityIndex::new(3);
/// assert_eq!(idx.get(), 3);
/// assert_eq!(format!("{}", idx), "EntityIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityIndex {
    index: usize,
}

impl EntityIndex {
    /// Creates a new `EntityIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl std::fmt::Debug for EntityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntityIndex({})", self.index)
    }
}

impl std::fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntityIndex({})", self.index)
    }
}

impl From<usize> for EntityIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<EntityIndex> for usize {
    fn from(index: EntityIndex) -> Self {
        index.index
    }
}
