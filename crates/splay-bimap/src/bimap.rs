//! The bidirectional map: two splay trees over one slot arena.
//!
//! Each live slot is simultaneously a node of the left-ordered tree and of
//! the right-ordered tree, so one allocation backs both projections and a
//! cursor [`flip`](crate::LeftCursor::flip) never touches the arena.
//!
//! Lookup operations take `&mut self`: a splay tree restructures on every
//! access, so even a logically read-only `find` rewrites links.  Structural
//! walks (`next_left`, `iter_left`, equality, cloning) do not splay and work
//! through `&self`.

use std::fmt;

use crate::cursor::{cursor_access_error, LeftCursor, RightCursor};
use crate::error::BimapError;
use crate::node::{Handle, PairEntry, PairSlot};
use crate::tree;
use crate::types::{default_comparator, Side};
use crate::util;

const LEFT: usize = Side::Left as usize;
const RIGHT: usize = Side::Right as usize;

fn left_of<L, R>(s: &PairSlot<L, R>) -> &L {
    &s.entry().left
}

fn right_of<L, R>(s: &PairSlot<L, R>) -> &R {
    &s.entry().right
}

/// Ordered bidirectional map over (left, right) pairs.
///
/// Both projections are unique and independently searchable in sorted
/// order, with amortized O(log n) lookup, insertion and deletion.  The
/// comparators are three-way `Fn(&K, &K) -> i32` predicates; two keys are
/// equivalent iff the comparator returns zero.
///
/// ```
/// use splay_bimap::SplayBimap;
///
/// let mut map = SplayBimap::new();
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.at_left(&2), Ok(&"two"));
/// assert_eq!(map.at_right(&"one"), Ok(&1));
/// ```
pub struct SplayBimap<L, R, CL = fn(&L, &L) -> i32, CR = fn(&R, &R) -> i32>
where
    CL: Fn(&L, &L) -> i32,
    CR: Fn(&R, &R) -> i32,
{
    slots: Vec<PairSlot<L, R>>,
    free: Vec<u32>,
    roots: [Option<u32>; 2],
    len: usize,
    cmp_left: CL,
    cmp_right: CR,
}

impl<L, R> SplayBimap<L, R>
where
    L: PartialOrd,
    R: PartialOrd,
{
    /// Empty bimap ordered by `PartialOrd` on both sides.
    pub fn new() -> Self {
        Self::with_comparators(default_comparator::<L>, default_comparator::<R>)
    }
}

impl<L, R> Default for SplayBimap<L, R>
where
    L: PartialOrd,
    R: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, CL, CR> SplayBimap<L, R, CL, CR>
where
    CL: Fn(&L, &L) -> i32,
    CR: Fn(&R, &R) -> i32,
{
    /// Empty bimap with user-supplied strict-weak-order comparators.
    pub fn with_comparators(cmp_left: CL, cmp_right: CR) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            roots: [None, None],
            len: 0,
            cmp_left,
            cmp_right,
        }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// O(1) exchange of the whole contents, comparators included.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    // ── slot management ───────────────────────────────────────────────────

    fn alloc(&mut self, left: L, right: R) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize].entry = Some(PairEntry::new(left, right));
                idx
            }
            None => {
                self.slots.push(PairSlot::occupied(left, right));
                (self.slots.len() - 1) as u32
            }
        }
    }

    fn handle(&self, idx: u32) -> Handle {
        Handle {
            index: idx,
            gen: self.slots[idx as usize].gen,
        }
    }

    /// Resolve a cursor handle to a live slot index; any stale or end
    /// handle is a checked contract violation.
    fn resolve(&self, raw: Option<Handle>) -> u32 {
        let Some(h) = raw else {
            cursor_access_error();
        };
        match self.slots.get(h.index as usize) {
            Some(slot) if slot.gen == h.gen && slot.entry.is_some() => h.index,
            _ => cursor_access_error(),
        }
    }

    /// Remove a live slot from both trees and free it.  Bumping the
    /// generation invalidates exactly the cursors to this pair.
    fn erase_node(&mut self, idx: u32) {
        self.roots[LEFT] = tree::erase(&mut self.slots, Side::Left, self.roots[LEFT], idx);
        self.roots[RIGHT] = tree::erase(&mut self.slots, Side::Right, self.roots[RIGHT], idx);
        let slot = &mut self.slots[idx as usize];
        slot.entry = None;
        slot.gen = slot.gen.wrapping_add(1);
        self.free.push(idx);
        self.len -= 1;
    }

    fn find_left_node(&mut self, key: &L) -> Option<u32> {
        let (root, hit) = tree::find(
            &mut self.slots,
            Side::Left,
            self.roots[LEFT],
            key,
            left_of,
            |a, b| (self.cmp_left)(a, b),
            true,
        );
        self.roots[LEFT] = root;
        hit
    }

    fn find_right_node(&mut self, key: &R) -> Option<u32> {
        let (root, hit) = tree::find(
            &mut self.slots,
            Side::Right,
            self.roots[RIGHT],
            key,
            right_of,
            |a, b| (self.cmp_right)(a, b),
            true,
        );
        self.roots[RIGHT] = root;
        hit
    }

    // ── insertion ─────────────────────────────────────────────────────────

    /// Insert the pair (left, right); returns a cursor to its left view.
    ///
    /// If `left` already exists on the left side or `right` on the right
    /// side, nothing is mutated and `end_left()` is returned.  The check
    /// runs before any allocation, so insertion is all-or-nothing.
    pub fn insert(&mut self, left: L, right: R) -> LeftCursor {
        if self.find_left_node(&left).is_some() || self.find_right_node(&right).is_some() {
            return LeftCursor::end();
        }
        let idx = self.alloc(left, right);
        self.roots[LEFT] = tree::insert(
            &mut self.slots,
            Side::Left,
            self.roots[LEFT],
            idx,
            left_of,
            |a, b| (self.cmp_left)(a, b),
        );
        self.roots[RIGHT] = tree::insert(
            &mut self.slots,
            Side::Right,
            self.roots[RIGHT],
            idx,
            right_of,
            |a, b| (self.cmp_right)(a, b),
        );
        self.len += 1;
        LeftCursor::new(Some(self.handle(idx)))
    }

    // ── erasure ───────────────────────────────────────────────────────────

    /// Remove the pair under a live, non-end cursor; returns the cursor to
    /// the next element in left order.  Cursors to the erased pair (on
    /// either side) become stale; all others stay valid.
    pub fn erase_left(&mut self, cur: LeftCursor) -> LeftCursor {
        let idx = self.resolve(cur.raw);
        let succ = util::next(&self.slots, Side::Left, idx).map(|i| self.handle(i));
        self.erase_node(idx);
        LeftCursor::new(succ)
    }

    pub fn erase_right(&mut self, cur: RightCursor) -> RightCursor {
        let idx = self.resolve(cur.raw);
        let succ = util::next(&self.slots, Side::Right, idx).map(|i| self.handle(i));
        self.erase_node(idx);
        RightCursor::new(succ)
    }

    /// Remove the pair holding `key` on the left side, if present.
    /// Returns whether a pair was removed.
    pub fn erase_left_key(&mut self, key: &L) -> bool {
        match self.find_left_node(key) {
            Some(idx) => {
                self.erase_node(idx);
                true
            }
            None => false,
        }
    }

    pub fn erase_right_key(&mut self, key: &R) -> bool {
        match self.find_right_node(key) {
            Some(idx) => {
                self.erase_node(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the half-open range `[first, last)` in left order by repeated
    /// single erasure; returns `last`.
    pub fn erase_left_range(&mut self, first: LeftCursor, last: LeftCursor) -> LeftCursor {
        let mut it = first;
        while it != last {
            it = self.erase_left(it);
        }
        last
    }

    pub fn erase_right_range(&mut self, first: RightCursor, last: RightCursor) -> RightCursor {
        let mut it = first;
        while it != last {
            it = self.erase_right(it);
        }
        last
    }

    /// Release every pair.  All outstanding cursors become stale.
    pub fn clear(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.gen = slot.gen.wrapping_add(1);
                self.free.push(i as u32);
            }
        }
        self.roots = [None, None];
        self.len = 0;
    }

    // ── lookup ────────────────────────────────────────────────────────────

    /// Cursor to the pair holding `key` on the left side, or `end_left()`.
    pub fn find_left(&mut self, key: &L) -> LeftCursor {
        LeftCursor::new(self.find_left_node(key).map(|i| self.handle(i)))
    }

    pub fn find_right(&mut self, key: &R) -> RightCursor {
        RightCursor::new(self.find_right_node(key).map(|i| self.handle(i)))
    }

    /// The right value paired with `key`, or [`BimapError::NotFound`].
    pub fn at_left(&mut self, key: &L) -> Result<&R, BimapError> {
        match self.find_left_node(key) {
            Some(idx) => Ok(&self.slots[idx as usize].entry().right),
            None => Err(BimapError::NotFound),
        }
    }

    pub fn at_right(&mut self, key: &R) -> Result<&L, BimapError> {
        match self.find_right_node(key) {
            Some(idx) => Ok(&self.slots[idx as usize].entry().left),
            None => Err(BimapError::NotFound),
        }
    }

    /// The right value paired with `key`, inserting (key, `R::default()`)
    /// when `key` is absent.
    ///
    /// If the default right value is already paired with some other left
    /// key, that pair is erased first to keep the right side unique, so
    /// this accessor can evict an unrelated pair as a side effect.
    pub fn at_left_or_default(&mut self, key: L) -> &R
    where
        R: Default,
    {
        if let Some(idx) = self.find_left_node(&key) {
            return &self.slots[idx as usize].entry().right;
        }
        let default_right = R::default();
        if let Some(conflict) = self.find_right_node(&default_right) {
            self.erase_node(conflict);
        }
        // Cannot collide: the key missed above and the default was evicted.
        let cur = self.insert(key, default_right);
        let idx = self.resolve(cur.raw);
        &self.slots[idx as usize].entry().right
    }

    pub fn at_right_or_default(&mut self, key: R) -> &L
    where
        L: Default,
    {
        if let Some(idx) = self.find_right_node(&key) {
            return &self.slots[idx as usize].entry().left;
        }
        let default_left = L::default();
        if let Some(conflict) = self.find_left_node(&default_left) {
            self.erase_node(conflict);
        }
        let cur = self.insert(default_left, key);
        let idx = self.resolve(cur.raw);
        &self.slots[idx as usize].entry().left
    }

    /// First pair whose left key is not less than `key`.
    pub fn lower_bound_left(&mut self, key: &L) -> LeftCursor {
        let (root, hit) = tree::lower_bound(
            &mut self.slots,
            Side::Left,
            self.roots[LEFT],
            key,
            left_of,
            |a, b| (self.cmp_left)(a, b),
        );
        self.roots[LEFT] = root;
        LeftCursor::new(hit.map(|i| self.handle(i)))
    }

    /// First pair whose left key is strictly greater than `key`.
    pub fn upper_bound_left(&mut self, key: &L) -> LeftCursor {
        let (root, hit) = tree::upper_bound(
            &mut self.slots,
            Side::Left,
            self.roots[LEFT],
            key,
            left_of,
            |a, b| (self.cmp_left)(a, b),
        );
        self.roots[LEFT] = root;
        LeftCursor::new(hit.map(|i| self.handle(i)))
    }

    pub fn lower_bound_right(&mut self, key: &R) -> RightCursor {
        let (root, hit) = tree::lower_bound(
            &mut self.slots,
            Side::Right,
            self.roots[RIGHT],
            key,
            right_of,
            |a, b| (self.cmp_right)(a, b),
        );
        self.roots[RIGHT] = root;
        RightCursor::new(hit.map(|i| self.handle(i)))
    }

    pub fn upper_bound_right(&mut self, key: &R) -> RightCursor {
        let (root, hit) = tree::upper_bound(
            &mut self.slots,
            Side::Right,
            self.roots[RIGHT],
            key,
            right_of,
            |a, b| (self.cmp_right)(a, b),
        );
        self.roots[RIGHT] = root;
        RightCursor::new(hit.map(|i| self.handle(i)))
    }

    // ── cursors ───────────────────────────────────────────────────────────

    /// Cursor to the minimum left key (splayed to the root), or `end_left()`.
    pub fn begin_left(&mut self) -> LeftCursor {
        let (root, min) = tree::begin(&mut self.slots, Side::Left, self.roots[LEFT]);
        self.roots[LEFT] = root;
        LeftCursor::new(min.map(|i| self.handle(i)))
    }

    pub fn end_left(&self) -> LeftCursor {
        LeftCursor::end()
    }

    pub fn begin_right(&mut self) -> RightCursor {
        let (root, min) = tree::begin(&mut self.slots, Side::Right, self.roots[RIGHT]);
        self.roots[RIGHT] = root;
        RightCursor::new(min.map(|i| self.handle(i)))
    }

    pub fn end_right(&self) -> RightCursor {
        RightCursor::end()
    }

    /// Cursor to the next pair in left order; the maximum steps to
    /// `end_left()`.  Stepping the end cursor panics.
    pub fn next_left(&self, cur: LeftCursor) -> LeftCursor {
        let idx = self.resolve(cur.raw);
        LeftCursor::new(util::next(&self.slots, Side::Left, idx).map(|i| self.handle(i)))
    }

    /// Cursor to the previous pair in left order; `prev_left(end_left())`
    /// yields the maximum.  Stepping before the minimum panics.
    pub fn prev_left(&self, cur: LeftCursor) -> LeftCursor {
        let pred = match cur.raw {
            None => util::last(&self.slots, Side::Left, self.roots[LEFT]),
            Some(_) => util::prev(&self.slots, Side::Left, self.resolve(cur.raw)),
        };
        match pred {
            Some(i) => LeftCursor::new(Some(self.handle(i))),
            None => cursor_access_error(),
        }
    }

    pub fn next_right(&self, cur: RightCursor) -> RightCursor {
        let idx = self.resolve(cur.raw);
        RightCursor::new(util::next(&self.slots, Side::Right, idx).map(|i| self.handle(i)))
    }

    pub fn prev_right(&self, cur: RightCursor) -> RightCursor {
        let pred = match cur.raw {
            None => util::last(&self.slots, Side::Right, self.roots[RIGHT]),
            Some(_) => util::prev(&self.slots, Side::Right, self.resolve(cur.raw)),
        };
        match pred {
            Some(i) => RightCursor::new(Some(self.handle(i))),
            None => cursor_access_error(),
        }
    }

    /// The left value under a live cursor.  End or stale cursors panic.
    pub fn left_value(&self, cur: LeftCursor) -> &L {
        let idx = self.resolve(cur.raw);
        &self.slots[idx as usize].entry().left
    }

    pub fn right_value(&self, cur: RightCursor) -> &R {
        let idx = self.resolve(cur.raw);
        &self.slots[idx as usize].entry().right
    }

    // ── iteration ─────────────────────────────────────────────────────────

    /// Non-splaying in-order walk over (left, right) pairs in left order.
    pub fn iter_left(&self) -> IterLeft<'_, L, R> {
        IterLeft {
            slots: &self.slots,
            curr: util::first(&self.slots, Side::Left, self.roots[LEFT]),
        }
    }

    /// Non-splaying in-order walk over (left, right) pairs in right order.
    pub fn iter_right(&self) -> IterRight<'_, L, R> {
        IterRight {
            slots: &self.slots,
            curr: util::first(&self.slots, Side::Right, self.roots[RIGHT]),
        }
    }
}

/// Borrowed in-order iterator over the left projection.
pub struct IterLeft<'a, L, R> {
    slots: &'a [PairSlot<L, R>],
    curr: Option<u32>,
}

impl<'a, L, R> Iterator for IterLeft<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = util::next(self.slots, Side::Left, idx);
        let entry = self.slots[idx as usize].entry();
        Some((&entry.left, &entry.right))
    }
}

/// Borrowed in-order iterator over the right projection.
pub struct IterRight<'a, L, R> {
    slots: &'a [PairSlot<L, R>],
    curr: Option<u32>,
}

impl<'a, L, R> Iterator for IterRight<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = util::next(self.slots, Side::Right, idx);
        let entry = self.slots[idx as usize].entry();
        Some((&entry.left, &entry.right))
    }
}

/// Equality by lockstep left-order traversal under `self`'s comparators:
/// pairwise equivalence, not value equality.
impl<L, R, CL, CR> PartialEq for SplayBimap<L, R, CL, CR>
where
    CL: Fn(&L, &L) -> i32,
    CR: Fn(&R, &R) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter_left().zip(other.iter_left()).all(|((al, ar), (bl, br))| {
            (self.cmp_left)(al, bl) == 0 && (self.cmp_right)(ar, br) == 0
        })
    }
}

/// Deep copy, pair by pair in left order.  A panicking value clone unwinds
/// through the partially built copy, which is dropped whole; the original
/// is untouched.
impl<L, R, CL, CR> Clone for SplayBimap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Fn(&L, &L) -> i32 + Clone,
    CR: Fn(&R, &R) -> i32 + Clone,
{
    fn clone(&self) -> Self {
        let mut out = Self::with_comparators(self.cmp_left.clone(), self.cmp_right.clone());
        for (l, r) in self.iter_left() {
            out.insert(l.clone(), r.clone());
        }
        out
    }
}

impl<L, R, CL, CR> fmt::Debug for SplayBimap<L, R, CL, CR>
where
    L: fmt::Debug,
    R: fmt::Debug,
    CL: Fn(&L, &L) -> i32,
    CR: Fn(&R, &R) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}
