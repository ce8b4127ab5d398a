//! Splay rotations over one tree of the arena.
//!
//! The same rotation set serves both trees; the [`Side`] argument selects
//! which link record of each slot is rewired.  Naming follows the rotation
//! direction: `r_splay`/`l_splay` are the single zig cases, `ll`/`rr` the
//! zig-zig cases, `lr`/`rl` the zig-zag cases.  Each case relinks the full
//! six-pointer neighborhood in O(1).

use crate::types::{Node, Side};
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

// ── single-level rotations ────────────────────────────────────────────────

/// Zig: promote `c2` over the root `c1` (c2 was left child of c1).
///
/// ```text
///   c1           c2
///  /      →        \
/// c2               c1
///   \             /
///    b           b
/// ```
pub(crate) fn r_splay<N: Node>(arena: &mut [N], side: Side, c2: u32, c1: u32) {
    let b = get_r(arena, side, c2);
    set_p(arena, side, c2, None);
    set_r(arena, side, c2, Some(c1));
    set_p(arena, side, c1, Some(c2));
    set_l(arena, side, c1, b);
    if let Some(b) = b {
        set_p(arena, side, b, Some(c1));
    }
}

/// Zig: promote `c2` over the root `c1` (c2 was right child of c1).
pub(crate) fn l_splay<N: Node>(arena: &mut [N], side: Side, c2: u32, c1: u32) {
    let b = get_l(arena, side, c2);
    set_p(arena, side, c2, None);
    set_l(arena, side, c2, Some(c1));
    set_p(arena, side, c1, Some(c2));
    set_r(arena, side, c1, b);
    if let Some(b) = b {
        set_p(arena, side, b, Some(c1));
    }
}

// ── double-level rotations ────────────────────────────────────────────────

/// Zig-zig right: c3 was right child of c2, c2 was right child of c1.
/// Promotes c3 two levels up.
pub(crate) fn rr_splay<N: Node>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let b = get_l(arena, side, c2);
    let c = get_l(arena, side, c3);
    let p = get_p(arena, side, c1);
    set_p(arena, side, c3, p);
    set_l(arena, side, c3, Some(c2));
    set_p(arena, side, c2, Some(c3));
    set_l(arena, side, c2, Some(c1));
    set_r(arena, side, c2, c);
    set_p(arena, side, c1, Some(c2));
    set_r(arena, side, c1, b);
    if let Some(b) = b {
        set_p(arena, side, b, Some(c1));
    }
    if let Some(c) = c {
        set_p(arena, side, c, Some(c2));
    }
    update_parent(arena, side, root, p, c1, c3)
}

/// Zig-zig left: c3 was left child of c2, c2 was left child of c1.
pub(crate) fn ll_splay<N: Node>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let b = get_r(arena, side, c2);
    let c = get_r(arena, side, c3);
    let p = get_p(arena, side, c1);
    set_p(arena, side, c3, p);
    set_r(arena, side, c3, Some(c2));
    set_p(arena, side, c2, Some(c3));
    set_l(arena, side, c2, c);
    set_r(arena, side, c2, Some(c1));
    set_p(arena, side, c1, Some(c2));
    set_l(arena, side, c1, b);
    if let Some(b) = b {
        set_p(arena, side, b, Some(c1));
    }
    if let Some(c) = c {
        set_p(arena, side, c, Some(c2));
    }
    update_parent(arena, side, root, p, c1, c3)
}

/// Zig-zag left-right: c3 was right child of c2, c2 was left child of c1.
pub(crate) fn lr_splay<N: Node>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let c = get_l(arena, side, c3);
    let d = get_r(arena, side, c3);
    let p = get_p(arena, side, c1);
    set_p(arena, side, c3, p);
    set_l(arena, side, c3, Some(c2));
    set_r(arena, side, c3, Some(c1));
    set_p(arena, side, c2, Some(c3));
    set_r(arena, side, c2, c);
    set_p(arena, side, c1, Some(c3));
    set_l(arena, side, c1, d);
    if let Some(c) = c {
        set_p(arena, side, c, Some(c2));
    }
    if let Some(d) = d {
        set_p(arena, side, d, Some(c1));
    }
    update_parent(arena, side, root, p, c1, c3)
}

/// Zig-zag right-left: c3 was left child of c2, c2 was right child of c1.
pub(crate) fn rl_splay<N: Node>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    c3: u32,
    c2: u32,
    c1: u32,
) -> Option<u32> {
    let c = get_r(arena, side, c3);
    let d = get_l(arena, side, c3);
    let p = get_p(arena, side, c1);
    set_p(arena, side, c3, p);
    set_l(arena, side, c3, Some(c1));
    set_r(arena, side, c3, Some(c2));
    set_p(arena, side, c2, Some(c3));
    set_l(arena, side, c2, c);
    set_p(arena, side, c1, Some(c3));
    set_r(arena, side, c1, d);
    if let Some(c) = c {
        set_p(arena, side, c, Some(c2));
    }
    if let Some(d) = d {
        set_p(arena, side, d, Some(c1));
    }
    update_parent(arena, side, root, p, c1, c3)
}

// ── top-level splay ───────────────────────────────────────────────────────

/// Splay `node` to the root of its (possibly detached) subtree.
///
/// Loops the three-case dispatch until `node` has no parent.  Returns the
/// new subtree root, which is always `node` unless it already was the root.
pub(crate) fn splay<N: Node>(
    arena: &mut [N],
    side: Side,
    mut root: Option<u32>,
    node: u32,
) -> Option<u32> {
    while let Some(p) = get_p(arena, side, node) {
        let pp = get_p(arena, side, p);
        let node_is_left = get_l(arena, side, p) == Some(node);
        root = if let Some(pp) = pp {
            let p_is_left = get_l(arena, side, pp) == Some(p);
            match (p_is_left, node_is_left) {
                (true, true) => ll_splay(arena, side, root, node, p, pp),
                (true, false) => lr_splay(arena, side, root, node, p, pp),
                (false, true) => rl_splay(arena, side, root, node, p, pp),
                (false, false) => rr_splay(arena, side, root, node, p, pp),
            }
        } else {
            if node_is_left {
                r_splay(arena, side, node, p);
            } else {
                l_splay(arena, side, node, p);
            }
            Some(node)
        };
    }
    root
}

// ── internal helper ───────────────────────────────────────────────────────

/// After a double rotation moved `c3` into the slot previously occupied by
/// `c1`, wire `c3` into c1's old parent `p`.
fn update_parent<N: Node>(
    arena: &mut [N],
    side: Side,
    root: Option<u32>,
    p: Option<u32>,
    c1: u32,
    c3: u32,
) -> Option<u32> {
    if let Some(p) = p {
        if get_l(arena, side, p) == Some(c1) {
            set_l(arena, side, p, Some(c3));
        } else {
            set_r(arena, side, p, Some(c3));
        }
        root
    } else {
        Some(c3)
    }
}
