//! Structural traversal over one tree of the arena.
//!
//! `first` / `last` / `next` / `prev` are pure shape walks: they never
//! consult a comparator and never restructure.  All of them are iterative,
//! so a pathologically deep tree cannot overflow the stack.

use crate::types::{Node, Side};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], side: Side, idx: u32) -> Option<u32> {
    arena[idx as usize].p(side)
}
#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], side: Side, idx: u32) -> Option<u32> {
    arena[idx as usize].l(side)
}
#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], side: Side, idx: u32) -> Option<u32> {
    arena[idx as usize].r(side)
}
#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], side: Side, idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(side, v);
}
#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], side: Side, idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(side, v);
}
#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], side: Side, idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(side, v);
}

/// Leftmost node of the subtree rooted at `root`.
pub(crate) fn first<N: Node>(arena: &[N], side: Side, root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, side, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node of the subtree rooted at `root`.
pub(crate) fn last<N: Node>(arena: &[N], side: Side, root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, side, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `node`, or `None` at the maximum.
pub(crate) fn next<N: Node>(arena: &[N], side: Side, node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, side, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, side, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, side, node);
    while let Some(pi) = p {
        if get_r(arena, side, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, side, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor of `node`, or `None` at the minimum.
pub(crate) fn prev<N: Node>(arena: &[N], side: Side, node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, side, node) {
        let mut curr = l;
        while let Some(r) = get_r(arena, side, curr) {
            curr = r;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, side, node);
    while let Some(pi) = p {
        if get_l(arena, side, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, side, pi);
        } else {
            return Some(pi);
        }
    }
    None
}
