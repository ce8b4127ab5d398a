//! Ordered bidirectional map backed by two splay trees over shared storage.
//!
//! A [`SplayBimap`] stores (left, right) pairs; both projections are unique
//! and independently searchable in sorted order.  One arena slot per pair
//! carries two link records, so the same allocation is a node of the
//! left-ordered tree and of the right-ordered tree, and a cursor
//! [`flip`](LeftCursor::flip) between the two views is O(1).
//!
//! Instead of raw pointers, all tree "pointers" are `Option<u32>` indices
//! into a slab arena; cursors carry generation-checked handles, so use of a
//! cursor whose pair was erased is a reported panic rather than silent
//! corruption.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | `types` | `Side` tag, link trait, [`default_comparator`] |
//! | `splay` | side-parameterized splay rotations |
//! | `util` | structural traversal: first / last / next / prev |
//! | `tree` | the engine: find, insert, erase, bounds, begin |
//! | [`bimap`] | [`SplayBimap`] orchestration and public surface |
//! | [`cursor`] | [`LeftCursor`] / [`RightCursor`], O(1) flip |
//! | [`error`] | [`BimapError`] |

pub mod bimap;
pub mod cursor;
pub mod error;

mod node;
mod splay;
mod tree;
mod types;
mod util;

pub use bimap::{IterLeft, IterRight, SplayBimap};
pub use cursor::{LeftCursor, RightCursor};
pub use error::BimapError;
pub use types::default_comparator;
