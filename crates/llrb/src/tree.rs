//! [`Llrb`] facade: root and count bookkeeping over the recursive routines.

use std::fmt::Debug;

use log::{debug, trace};

use crate::assert::assert_llrb_tree;
use crate::delete;
use crate::error::LlrbError;
use crate::insert;
use crate::node::{subtree_size, Link, Node};
use crate::order::{default_less, ordered_less, Bound};

/// Left-leaning red-black tree.
///
/// `C` is the "orders before" predicate, fixed at construction. Every node
/// caches the sizes of its subtrees, so insertions and deletions report the
/// rank of the affected item and [`Llrb::rank`] / [`Llrb::get_at`] run in
/// O(log n).
pub struct Llrb<T, C = fn(&T, &T) -> bool>
where
    C: Fn(&T, &T) -> bool,
{
    root: Link<T>,
    count: usize,
    less: C,
}

impl<T> Llrb<T, fn(&T, &T) -> bool>
where
    T: Ord,
{
    /// Empty tree ordered by `T: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(default_less::<T>)
    }
}

impl<T> Default for Llrb<T, fn(&T, &T) -> bool>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Llrb<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Empty tree ordered by `less` ("a orders before b").
    pub fn with_comparator(less: C) -> Self {
        Self {
            root: None,
            count: 0,
            less,
        }
    }

    /// Root node, for walking the tree from the outside (e.g. to persist it).
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Replaces the whole tree with `root` and returns the previous root.
    ///
    /// `root` is trusted to satisfy every tree invariant; nothing is checked.
    /// The count is taken from the root's size cache.
    pub fn set_root(&mut self, root: Link<T>) -> Link<T> {
        self.count = subtree_size(root.as_deref());
        debug!("llrb: root replaced, {} items", self.count);
        std::mem::replace(&mut self.root, root)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.count
    }

    /// No items stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        debug!("llrb: clearing {} items", self.count);
        self.root = None;
        self.count = 0;
    }

    /// Item ordering equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        let mut h = self.root.as_deref();
        while let Some(node) = h {
            if (self.less)(key, &node.item) {
                h = node.left();
            } else if (self.less)(&node.item, key) {
                h = node.right();
            } else {
                return Some(&node.item);
            }
        }
        None
    }

    /// An item ordering equal to `key` is present.
    pub fn has(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Smallest item.
    pub fn min(&self) -> Option<&T> {
        let mut h = self.root.as_deref()?;
        while let Some(l) = h.left() {
            h = l;
        }
        Some(&h.item)
    }

    /// Largest item.
    pub fn max(&self) -> Option<&T> {
        let mut h = self.root.as_deref()?;
        while let Some(r) = h.right() {
            h = r;
        }
        Some(&h.item)
    }

    /// 0-based position of an item ordering equal to `key`.
    pub fn rank(&self, key: &T) -> Option<usize> {
        let mut h = self.root.as_deref();
        let mut n = 0;
        while let Some(node) = h {
            if (self.less)(key, &node.item) {
                h = node.left();
            } else if (self.less)(&node.item, key) {
                n += node.n_l + 1;
                h = node.right();
            } else {
                return Some(n + node.n_l);
            }
        }
        None
    }

    /// Number of items ordering strictly before `bound`.
    ///
    /// `Inf::Neg` yields 0 and `Inf::Pos` yields [`Llrb::len`].
    pub fn count_less(&self, bound: Bound<'_, T>) -> usize {
        let mut h = self.root.as_deref();
        let mut n = 0;
        while let Some(node) = h {
            if ordered_less(&self.less, Bound::Item(&node.item), bound) {
                n += node.n_l + 1;
                h = node.right();
            } else {
                h = node.left();
            }
        }
        n
    }

    /// Item at 0-based position `pos` in sorted order.
    pub fn get_at(&self, mut pos: usize) -> Option<&T> {
        let mut h = self.root.as_deref();
        while let Some(node) = h {
            if pos < node.n_l {
                h = node.left();
            } else if pos == node.n_l {
                return Some(&node.item);
            } else {
                pos -= node.n_l + 1;
                h = node.right();
            }
        }
        None
    }

    /// Inserts `item`. An existing item of equal order is replaced and
    /// returned. Also returns the rank of `item`.
    pub fn replace_or_insert(&mut self, item: T) -> (Option<T>, usize) {
        let (mut root, replaced, pos) = insert::replace_or_insert(self.root.take(), item, 0, &self.less);
        root.b = true;
        self.root = Some(root);
        if replaced.is_none() {
            self.count += 1;
        }
        (replaced, pos)
    }

    /// Inserts `item`, keeping any equal-ordering items. Returns its rank.
    pub fn insert_no_replace(&mut self, item: T) -> usize {
        let (mut root, pos) = insert::insert_no_replace(self.root.take(), item, 0, &self.less);
        root.b = true;
        self.root = Some(root);
        self.count += 1;
        pos
    }

    /// [`Llrb::replace_or_insert`] for each item in turn.
    pub fn replace_or_insert_bulk<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.count;
        for item in items {
            self.replace_or_insert(item);
        }
        debug!("llrb: bulk replace-or-insert added {} items", self.count - before);
    }

    /// [`Llrb::insert_no_replace`] for each item in turn.
    pub fn insert_no_replace_bulk<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.count;
        for item in items {
            self.insert_no_replace(item);
        }
        debug!("llrb: bulk insert added {} items", self.count - before);
    }

    /// Removes and returns the smallest item.
    pub fn delete_min(&mut self) -> Option<T> {
        let (root, deleted) = delete::delete_min(self.root.take()?);
        self.reattach(root);
        self.count -= 1;
        Some(deleted)
    }

    /// Removes and returns the largest item.
    pub fn delete_max(&mut self) -> Option<T> {
        let (root, deleted) = delete::delete_max(self.root.take()?);
        self.reattach(root);
        self.count -= 1;
        Some(deleted)
    }

    /// Removes an item ordering equal to `key`. Returns it together with the
    /// rank it had before removal.
    pub fn delete(&mut self, key: &T) -> Option<(T, usize)> {
        // The descent reshapes the search path; only run it when a node will
        // be unlinked.
        if !self.has(key) {
            trace!("llrb: delete of absent key");
            return None;
        }
        let (root, deleted) = delete::delete(self.root.take()?, key, 0, &self.less);
        self.reattach(root);
        if deleted.is_some() {
            self.count -= 1;
        }
        deleted
    }

    fn reattach(&mut self, root: Link<T>) {
        self.root = root;
        if let Some(root) = self.root.as_deref_mut() {
            root.b = true;
        }
    }

    /// Checks every tree invariant plus `len() == root size`.
    pub fn assert_valid(&self) -> Result<(), LlrbError> {
        assert_llrb_tree(self.root(), &self.less)?;
        let size = subtree_size(self.root());
        if size != self.count {
            return Err(LlrbError::CountMismatch {
                count: self.count,
                size,
            });
        }
        Ok(())
    }

    /// Renders the tree with [`print`](crate::print::print).
    pub fn print(&self) -> String
    where
        T: Debug,
    {
        crate::print::print(self.root(), "")
    }
}
