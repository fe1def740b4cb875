//! Tree vertex.

/// Owned child link.
pub type Link<T> = Option<Box<Node<T>>>;

/// LLRB node.
///
/// Colour belongs to the link coming in from the parent, not to the node.
/// `n_l` and `n_r` cache the node counts of the left and right subtrees.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) l: Link<T>,
    pub(crate) r: Link<T>,
    /// Incoming link colour: `true` = black, `false` = red.
    pub(crate) b: bool,
    pub(crate) n_l: usize,
    pub(crate) n_r: usize,
}

impl<T> Node<T> {
    /// A red leaf.
    pub fn new(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            l: None,
            r: None,
            b: false,
            n_l: 0,
            n_r: 0,
        })
    }

    /// Reassembles a node from its parts, e.g. when loading a persisted tree.
    ///
    /// Size caches are taken from the children. No shape or colour checks are
    /// made.
    pub fn from_parts(item: T, l: Link<T>, r: Link<T>, black: bool) -> Box<Self> {
        let n_l = subtree_size(l.as_deref());
        let n_r = subtree_size(r.as_deref());
        Box::new(Self {
            item,
            l,
            r,
            b: black,
            n_l,
            n_r,
        })
    }

    /// Stored item.
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.l.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.r.as_deref()
    }

    /// Incoming link is black.
    pub fn is_black(&self) -> bool {
        self.b
    }

    /// Cached size of the left subtree.
    pub fn n_left(&self) -> usize {
        self.n_l
    }

    /// Cached size of the right subtree.
    pub fn n_right(&self) -> usize {
        self.n_r
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        self.n_l + 1 + self.n_r
    }

    pub(crate) fn into_item(self: Box<Self>) -> T {
        self.item
    }
}

/// Absent links are black.
#[inline]
pub fn is_red<T>(node: Option<&Node<T>>) -> bool {
    node.map(|n| !n.b).unwrap_or(false)
}

/// Node count of `node`, 0 when absent.
#[inline]
pub fn subtree_size<T>(node: Option<&Node<T>>) -> usize {
    node.map(Node::size).unwrap_or(0)
}
