//! Recursive insertion.
//!
//! Both entry points descend from `h`, create a red leaf at the bottom and run
//! [`fix_up`] on every node of the path while unwinding. `n` accumulates the
//! number of items known to order before the insertion point, which becomes
//! the rank of the inserted item.

use std::mem;

use crate::node::{Link, Node};
use crate::util::fix_up;

/// Inserts `item`, replacing an equal-ordering item in place if present.
///
/// Returns the new subtree root, the replaced item and the rank of `item`.
pub fn replace_or_insert<T, C>(h: Link<T>, item: T, n: usize, less: &C) -> (Box<Node<T>>, Option<T>, usize)
where
    C: Fn(&T, &T) -> bool,
{
    let Some(mut h) = h else {
        return (Node::new(item), None, n);
    };

    let replaced;
    let pos;
    if less(&item, &h.item) {
        let (l, rep, p) = replace_or_insert(h.l.take(), item, n, less);
        h.l = Some(l);
        if rep.is_none() {
            h.n_l += 1;
        }
        replaced = rep;
        pos = p;
    } else if less(&h.item, &item) {
        let offset = n + 1 + h.n_l;
        let (r, rep, p) = replace_or_insert(h.r.take(), item, offset, less);
        h.r = Some(r);
        if rep.is_none() {
            h.n_r += 1;
        }
        replaced = rep;
        pos = p;
    } else {
        replaced = Some(mem::replace(&mut h.item, item));
        pos = n + h.n_l;
    }

    (fix_up(h), replaced, pos)
}

/// Inserts `item` even if an equal-ordering item exists; the new item goes to
/// the right of it.
///
/// Returns the new subtree root and the rank of `item`.
pub fn insert_no_replace<T, C>(h: Link<T>, item: T, n: usize, less: &C) -> (Box<Node<T>>, usize)
where
    C: Fn(&T, &T) -> bool,
{
    let Some(mut h) = h else {
        return (Node::new(item), n);
    };

    let pos;
    if less(&item, &h.item) {
        let (l, p) = insert_no_replace(h.l.take(), item, n, less);
        h.l = Some(l);
        h.n_l += 1;
        pos = p;
    } else {
        let offset = n + 1 + h.n_l;
        let (r, p) = insert_no_replace(h.r.take(), item, offset, less);
        h.r = Some(r);
        h.n_r += 1;
        pos = p;
    }

    (fix_up(h), pos)
}
