//! Left-leaning red-black (LLRB) tree.
//!
//! An ordered container encoding a 2-3 tree as a binary search tree: red links
//! glue the two halves of a 3-node and always lean left. Each node also caches
//! the sizes of its subtrees, which gives O(log n) rank queries next to the
//! usual O(log n) insert, lookup and delete.
//!
//! Nodes own their children (`Option<Box<Node<T>>>`); every rebalancing step
//! consumes a subtree root and returns the new one, so no node is ever shared.
//!
//! # Example
//!
//! ```
//! use llrb::Llrb;
//!
//! let mut tree = Llrb::new();
//! for x in [4, 2, 6, 1, 3, 5, 7] {
//!     tree.replace_or_insert(x);
//! }
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.rank(&5), Some(4));
//! assert_eq!(tree.delete(&4), Some((4, 3)));
//! tree.assert_valid().unwrap();
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`order`] | sentinels [`Inf`], [`inf`], [`ordered_less`] |
//! [`node`] | [`Node`] and link helpers |
//! [`util`] | rotations, colour flip, move-red, fix-up |
//! [`insert`] / [`delete`] | recursive insertion and deletion |
//! [`tree`] | the [`Llrb`] facade |

pub mod assert;
pub mod delete;
pub mod error;
pub mod insert;
pub mod node;
pub mod order;
pub mod print;
pub mod tree;
pub mod util;

pub use assert::assert_llrb_tree;
pub use error::LlrbError;
pub use node::{Link, Node};
pub use order::{default_less, inf, ordered_less, Bound, Inf};
pub use print::print;
pub use tree::Llrb;
pub use util::{color_flip, fix_up, move_red_left, move_red_right, rotate_left, rotate_right};
