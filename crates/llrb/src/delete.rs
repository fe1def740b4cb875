//! Recursive deletion.
//!
//! A node can only be unlinked safely if it sits in a 3-node, so on the way
//! down every step makes sure the child being entered is red or has a red left
//! child (via [`move_red_left`] / [`move_red_right`]). On the way back up
//! [`fix_up`] removes the temporary right-leaning and 4-node shapes.

use std::mem;

use crate::node::{is_red, Link, Node};
use crate::util::{fix_up, move_red_left, move_red_right, rotate_right};

/// Left child is a 2-node: black with no red left child.
fn left_is_two_node<T>(h: &Node<T>) -> bool {
    h.l.as_deref().map(|l| l.b && !is_red(l.l.as_deref())).unwrap_or(false)
}

/// Right child is a 2-node: black with no red left child.
fn right_is_two_node<T>(h: &Node<T>) -> bool {
    h.r.as_deref().map(|r| r.b && !is_red(r.l.as_deref())).unwrap_or(false)
}

/// Removes the leftmost node of the subtree rooted at `h`.
pub fn delete_min<T>(mut h: Box<Node<T>>) -> (Link<T>, T) {
    if h.l.is_none() {
        debug_assert!(h.r.is_none(), "leftmost node has a right child");
        return (None, h.into_item());
    }

    if left_is_two_node(&h) {
        h = move_red_left(h);
    }

    let l = h.l.take().expect("left child exists after move_red_left");
    let (l, min) = delete_min(l);
    h.l = l;
    h.n_l -= 1;

    (Some(fix_up(h)), min)
}

/// Removes the rightmost node of the subtree rooted at `h`.
pub fn delete_max<T>(mut h: Box<Node<T>>) -> (Link<T>, T) {
    if is_red(h.l.as_deref()) {
        h = rotate_right(h);
    }
    if h.r.is_none() {
        debug_assert!(h.l.is_none(), "rightmost node has a left child");
        return (None, h.into_item());
    }

    if right_is_two_node(&h) {
        h = move_red_right(h);
    }

    let r = h.r.take().expect("right child exists after move_red_right");
    let (r, max) = delete_max(r);
    h.r = r;
    h.n_r -= 1;

    (Some(fix_up(h)), max)
}

/// Removes one item ordering equal to `key` from the subtree rooted at `h`.
///
/// `n` is the number of items ordering before this subtree. Returns the new
/// subtree root and, if something was removed, the removed item with its rank.
pub fn delete<T, C>(mut h: Box<Node<T>>, key: &T, n: usize, less: &C) -> (Link<T>, Option<(T, usize)>)
where
    C: Fn(&T, &T) -> bool,
{
    let deleted;
    if less(key, &h.item) {
        if h.l.is_none() {
            return (Some(h), None);
        }
        if left_is_two_node(&h) {
            h = move_red_left(h);
        }
        let l = h.l.take().expect("left child exists after move_red_left");
        let (l, d) = delete(l, key, n, less);
        h.l = l;
        if d.is_some() {
            h.n_l -= 1;
        }
        deleted = d;
    } else {
        if is_red(h.l.as_deref()) {
            h = rotate_right(h);
        }
        if !less(&h.item, key) && h.r.is_none() {
            debug_assert!(h.l.is_none(), "matched node without right child has a left child");
            let pos = n + h.n_l;
            return (None, Some((h.into_item(), pos)));
        }
        // When move_red_right rotates, the new local root is the old left
        // child and the matched node moves into the right subtree.
        let mut rotated = false;
        if right_is_two_node(&h) {
            rotated = h.l.as_deref().map(|l| is_red(l.l.as_deref())).unwrap_or(false);
            h = move_red_right(h);
        }
        if !rotated && !less(&h.item, key) {
            let r = h.r.take().expect("matched node keeps its right subtree");
            let (r, successor) = delete_min(r);
            h.r = r;
            h.n_r -= 1;
            let pos = n + h.n_l;
            deleted = Some((mem::replace(&mut h.item, successor), pos));
        } else {
            let offset = n + 1 + h.n_l;
            deleted = match h.r.take() {
                Some(r) => {
                    let (r, d) = delete(r, key, offset, less);
                    h.r = r;
                    if d.is_some() {
                        h.n_r -= 1;
                    }
                    d
                }
                None => None,
            };
        }
    }

    (Some(fix_up(h)), deleted)
}
