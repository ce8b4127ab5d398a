//! One splay-tree engine, instantiated per [`Side`] over the shared arena.
//!
//! Every operation takes the current root and returns the new one, since
//! splaying moves the accessed node to the root.  Keys are reached through a
//! `key_of` accessor closure, so the user comparator only ever sees stored
//! values, never arena layout.

use crate::splay::splay;
use crate::types::{Node, Side};
use crate::util::{first, get_l, get_r, last, next, set_l, set_p, set_r};

/// BST descent for `key`.
///
/// On an exact match the node is splayed to the root and returned.  On a
/// miss, `strict` decides the result: `None`, or the last node visited
/// (the natural insertion point, not splayed).
pub(crate) fn find<N, K, KF, C>(
    arena: &mut [N],
    side: Side,
    mut root: Option<u32>,
    key: &K,
    key_of: KF,
    cmp: C,
    strict: bool,
) -> (Option<u32>, Option<u32>)
where
    N: Node,
    KF: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut last_visited = None;
    let mut curr = root;
    while let Some(idx) = curr {
        last_visited = Some(idx);
        let ord = cmp(key, key_of(&arena[idx as usize]));
        if ord < 0 {
            curr = get_l(arena, side, idx);
        } else if ord > 0 {
            curr = get_r(arena, side, idx);
        } else {
            root = splay(arena, side, root, idx);
            return (root, Some(idx));
        }
    }
    (root, if strict { None } else { last_visited })
}

/// Insert the already-allocated `node` by BST descent, ties to the right,
/// then splay it to the root.  Duplicate detection is the caller's job.
pub(crate) fn insert<N, K, KF, C>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    node: u32,
    key_of: KF,
    cmp: C,
) -> Option<u32>
where
    N: Node,
    KF: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(node);
    };
    loop {
        let ord = cmp(key_of(&arena[node as usize]), key_of(&arena[curr as usize]));
        let child = if ord < 0 {
            get_l(arena, side, curr)
        } else {
            get_r(arena, side, curr)
        };
        match child {
            Some(c) => curr = c,
            None => {
                if ord < 0 {
                    set_l(arena, side, curr, Some(node));
                } else {
                    set_r(arena, side, curr, Some(node));
                }
                set_p(arena, side, node, Some(curr));
                break;
            }
        }
    }
    splay(arena, side, root, node)
}

/// Remove `node`: splay it to the root, then merge its two subtrees by
/// splaying the left subtree's maximum and attaching the right subtree
/// under it.  Clears the node's links; slot reclamation is the caller's.
pub(crate) fn erase<N: Node>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    node: u32,
) -> Option<u32> {
    splay(arena, side, root, node);
    let l = get_l(arena, side, node);
    let r = get_r(arena, side, node);
    set_p(arena, side, node, None);
    set_l(arena, side, node, None);
    set_r(arena, side, node, None);
    if let Some(l) = l {
        set_p(arena, side, l, None);
    }
    if let Some(r) = r {
        set_p(arena, side, r, None);
    }
    merge(arena, side, l, r)
}

fn merge<N: Node>(
    arena: &mut [N],
    side: Side,
    left: Option<u32>,
    right: Option<u32>,
) -> Option<u32> {
    let Some(left) = left else {
        return right;
    };
    let Some(right) = right else {
        return Some(left);
    };
    let max = last(arena, side, Some(left)).expect("non-empty subtree has a maximum");
    let merged = splay(arena, side, Some(left), max).expect("splay of a live node");
    set_r(arena, side, merged, Some(right));
    set_p(arena, side, right, Some(merged));
    Some(merged)
}

/// First element whose key is not less than `key` (lower-bound semantics).
pub(crate) fn lower_bound<N, K, KF, C>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    key: &K,
    key_of: KF,
    cmp: C,
) -> (Option<u32>, Option<u32>)
where
    N: Node,
    KF: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let (root, located) = find(arena, side, root, key, &key_of, &cmp, false);
    let Some(found) = located else {
        return (root, None);
    };
    if cmp(key, key_of(&arena[found as usize])) <= 0 {
        (root, Some(found))
    } else {
        (root, next(arena, side, found))
    }
}

/// First element whose key is strictly greater than `key`.
pub(crate) fn upper_bound<N, K, KF, C>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    key: &K,
    key_of: KF,
    cmp: C,
) -> (Option<u32>, Option<u32>)
where
    N: Node,
    KF: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let (root, located) = find(arena, side, root, key, &key_of, &cmp, false);
    let Some(found) = located else {
        return (root, None);
    };
    if cmp(key, key_of(&arena[found as usize])) < 0 {
        (root, Some(found))
    } else {
        (root, next(arena, side, found))
    }
}

/// Minimum element, splayed to the root to amortize leftmost access.
pub(crate) fn begin<N: Node>(
    arena: &mut [N],
    side: Side,
    mut root: Option<u32>,
) -> (Option<u32>, Option<u32>) {
    let Some(min) = first(arena, side, root) else {
        return (root, None);
    };
    root = splay(arena, side, root, min);
    (root, Some(min))
}
