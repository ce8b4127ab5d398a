//! Node trait and comparator definitions.
//!
//! Every "pointer" in this crate is an `Option<u32>` index into a
//! slab-backed arena (`Vec` of slots).  Tree-manipulation functions take
//! the arena as a slice and work with indices, so node identity is stable
//! across restructuring and a single slot can belong to two trees at once.

/// Selects which of a slot's two link records (and which stored value) an
/// engine operation sees: the left-ordered tree or the right-ordered one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Binary-tree links (`p`, `l`, `r`) of one tree, selected by [`Side`].
///
/// A single trait instead of one trait per tree: the splay and traversal
/// engines are written once and instantiated per side.
pub(crate) trait Node {
    fn p(&self, side: Side) -> Option<u32>;
    fn l(&self, side: Side) -> Option<u32>;
    fn r(&self, side: Side) -> Option<u32>;
    fn set_p(&mut self, side: Side, v: Option<u32>);
    fn set_l(&mut self, side: Side, v: Option<u32>);
    fn set_r(&mut self, side: Side, v: Option<u32>);
}

/// Three-way comparator result convention: negative, zero, positive.
///
/// Zero means the two keys are equivalent under the ordering; a bimap never
/// holds two equivalent keys on the same side.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
