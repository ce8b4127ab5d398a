//! Side-tagged cursors over the bimap.
//!
//! A cursor is a detached, `Copy` reference: a generation-checked handle to
//! a live pair, or the end position when the handle is absent.  Dereference
//! and stepping go through the owning [`SplayBimap`](crate::SplayBimap)
//! (`left_value`, `next_left`, ...), which validates the generation and
//! panics on stale or end access instead of reading a reused slot.
//!
//! `flip` needs no map at all: both views of a pair live in the same slot,
//! so flipping is the identity on the handle with the side tag switched,
//! and the end cursors of the two sides flip into each other.

use crate::node::Handle;

/// Cursor over the left projection, ordered by the left comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeftCursor {
    pub(crate) raw: Option<Handle>,
}

/// Cursor over the right projection, ordered by the right comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RightCursor {
    pub(crate) raw: Option<Handle>,
}

impl LeftCursor {
    pub(crate) fn new(raw: Option<Handle>) -> Self {
        Self { raw }
    }

    pub(crate) fn end() -> Self {
        Self { raw: None }
    }

    /// Whether this is the one-past-the-last position.
    pub fn is_end(&self) -> bool {
        self.raw.is_none()
    }

    /// The same pair viewed from the right projection, O(1).
    ///
    /// The end cursor flips to the other side's end cursor.
    pub fn flip(self) -> RightCursor {
        RightCursor { raw: self.raw }
    }
}

impl RightCursor {
    pub(crate) fn new(raw: Option<Handle>) -> Self {
        Self { raw }
    }

    pub(crate) fn end() -> Self {
        Self { raw: None }
    }

    /// Whether this is the one-past-the-last position.
    pub fn is_end(&self) -> bool {
        self.raw.is_none()
    }

    /// The same pair viewed from the left projection, O(1).
    pub fn flip(self) -> LeftCursor {
        LeftCursor { raw: self.raw }
    }
}

/// Single choke point for every checked cursor-contract violation.
pub(crate) fn cursor_access_error() -> ! {
    panic!("Invalid cursor access!")
}
