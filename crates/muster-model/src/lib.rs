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

//! # Muster Model
//!
//! **The Core Domain Model for the Muster Roster Arrangement Engine.**
//!
//! This crate defines the fundamental data structures used to represent a pair of
//! rosters being arranged under a shared constraint set. It serves as the data
//! interchange layer between problem construction (user input) and the arrangement
//! engine (`muster_engine`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **arrangement**:
//!
//! * **`index`**: Provides a strongly-typed handle (`EntityIndex`) to prevent
//!   logical indexing errors and stale-reference bugs.
//! * **`entity`**: Contains the `EntityStore`, an explicit handle-addressed store
//!   of entities (name, rank, group) with eager validation.
//! * **`rules`**: The constraint set applied during arrangement: maximum group
//!   size and the set of entities pinned to their original roster.
//! * **`roster`**: An ordered, duplicate-free collection of entity handles with
//!   per-group occupancy tracking, plus the group-size-aware renumbering logic
//!   every arrangement policy depends on.
//!
//! ## Design Philosophy
//!
//! 1.  **Handles, not cached values**: Entities are referenced by a stable
//!     `EntityIndex`. Group reassignment updates the record at the handle;
//!     holders re-resolve through the store and never cache field values
//!     across an update.
//! 2.  **Explicit state**: There is no global registry. The `EntityStore` is a
//!     plain value passed by reference to every component that needs lookup or
//!     reassignment, with an explicit lifecycle per process or per test.
//! 3.  **Fail-Fast**: Constructors validate inputs eagerly so the engine never
//!     encounters an invalid entity, and structural inconsistencies panic
//!     immediately rather than propagating.
//! 4.  **Determinism**: Group walks iterate the occupancy map in numeric key
//!     order, never in insertion order.

pub mod entity;
pub mod index;
pub mod roster;
pub mod rules;
