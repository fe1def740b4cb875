//! Rotation primitives.
//!
//! These are the only functions that change colours or tree shape. Each one
//! takes ownership of a subtree root and hands back the (possibly different)
//! new root. A broken colour precondition means the balancing logic itself is
//! wrong, so they panic rather than return an error.

use crate::node::{is_red, subtree_size, Node};

/// Lifts the red right child of `h` into its place.
pub fn rotate_left<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    let mut x = h.r.take().expect("rotate_left requires right child");
    assert!(!x.b, "rotate_left across a black link");
    h.r = x.l.take();
    h.n_r = subtree_size(h.r.as_deref());
    x.b = h.b;
    h.b = false;
    x.n_l = h.size();
    x.l = Some(h);
    x
}

/// Lifts the red left child of `h` into its place.
pub fn rotate_right<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    let mut x = h.l.take().expect("rotate_right requires left child");
    assert!(!x.b, "rotate_right across a black link");
    h.l = x.r.take();
    h.n_l = subtree_size(h.l.as_deref());
    x.b = h.b;
    h.b = false;
    x.n_r = h.size();
    x.r = Some(h);
    x
}

/// Inverts the colour of `h` and both of its children.
pub fn color_flip<T>(h: &mut Node<T>) {
    let l = h.l.as_deref_mut().expect("color_flip requires left child");
    l.b = !l.b;
    let r = h.r.as_deref_mut().expect("color_flip requires right child");
    r.b = !r.b;
    h.b = !h.b;
}

/// Makes the left child of `h`, or one of its children, red.
pub fn move_red_left<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    color_flip(&mut h);
    let rl_red = h.r.as_deref().map(|r| is_red(r.l.as_deref())).unwrap_or(false);
    if rl_red {
        let r = h.r.take().expect("right child exists after color_flip");
        h.r = Some(rotate_right(r));
        h = rotate_left(h);
        color_flip(&mut h);
    }
    h
}

/// Makes the right child of `h`, or one of its children, red.
pub fn move_red_right<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    color_flip(&mut h);
    let ll_red = h.l.as_deref().map(|l| is_red(l.l.as_deref())).unwrap_or(false);
    if ll_red {
        h = rotate_right(h);
        color_flip(&mut h);
    }
    h
}

/// Restores left-leaning shape at `h`, assuming the subtrees below are valid.
pub fn fix_up<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    if is_red(h.r.as_deref()) {
        h = rotate_left(h);
    }
    let ll_red = h.l.as_deref().map(|l| !l.b && is_red(l.l.as_deref())).unwrap_or(false);
    if ll_red {
        h = rotate_right(h);
    }
    if is_red(h.l.as_deref()) && is_red(h.r.as_deref()) {
        color_flip(&mut h);
    }
    h
}
