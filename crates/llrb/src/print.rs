//! Debug rendering of a subtree.

use std::fmt::Debug;

use crate::node::Node;

/// Debug printer: one node per line with its link colour and size caches.
pub fn print<T: Debug>(node: Option<&Node<T>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let color = if n.is_black() { "black" } else { "red" };
            let left = print(n.left(), &format!("{tab}  "));
            let right = print(n.right(), &format!("{tab}  "));
            format!(
                "Node {color} [{}|{}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.n_left(),
                n.n_right(),
                n.item()
            )
        }
    }
}
