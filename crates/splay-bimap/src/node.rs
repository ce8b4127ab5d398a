//! Arena slot layout: one allocation, two tree memberships.
//!
//! A [`PairEntry`] stores the (left, right) values together with two
//! [`Links`] records, one per tree.  Either view of a pair is reached from
//! the other by switching the [`Side`] tag on the same slot index, which is
//! what makes cursor `flip` O(1) and allocation-free.
//!
//! Slots are slab-managed: erasing a pair clears the entry, bumps the slot
//! generation and pushes the index on the bimap's free list.  Cursors carry
//! a [`Handle`] (index + generation) so access through an erased pair is
//! detected instead of silently reading a reused slot.

use crate::types::{Node, Side};

/// One tree's parent/child link record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Links {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

/// A live pair: the stored values plus one link record per tree.
#[derive(Debug)]
pub(crate) struct PairEntry<L, R> {
    pub left: L,
    pub right: R,
    pub links: [Links; 2],
}

impl<L, R> PairEntry<L, R> {
    pub(crate) fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            links: [Links::default(); 2],
        }
    }
}

/// Slab slot: `None` entry means the slot is free.
#[derive(Debug)]
pub(crate) struct PairSlot<L, R> {
    pub gen: u32,
    pub entry: Option<PairEntry<L, R>>,
}

impl<L, R> PairSlot<L, R> {
    pub(crate) fn occupied(left: L, right: R) -> Self {
        Self {
            gen: 0,
            entry: Some(PairEntry::new(left, right)),
        }
    }

    #[inline]
    pub(crate) fn entry(&self) -> &PairEntry<L, R> {
        self.entry.as_ref().expect("slot is live")
    }

    #[inline]
    fn entry_mut(&mut self) -> &mut PairEntry<L, R> {
        self.entry.as_mut().expect("slot is live")
    }
}

impl<L, R> Node for PairSlot<L, R> {
    #[inline]
    fn p(&self, side: Side) -> Option<u32> {
        self.entry().links[side.index()].p
    }
    #[inline]
    fn l(&self, side: Side) -> Option<u32> {
        self.entry().links[side.index()].l
    }
    #[inline]
    fn r(&self, side: Side) -> Option<u32> {
        self.entry().links[side.index()].r
    }
    #[inline]
    fn set_p(&mut self, side: Side, v: Option<u32>) {
        self.entry_mut().links[side.index()].p = v;
    }
    #[inline]
    fn set_l(&mut self, side: Side, v: Option<u32>) {
        self.entry_mut().links[side.index()].l = v;
    }
    #[inline]
    fn set_r(&mut self, side: Side, v: Option<u32>) {
        self.entry_mut().links[side.index()].r = v;
    }
}

/// Generation-checked reference to a live slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Handle {
    pub index: u32,
    pub gen: u32,
}
