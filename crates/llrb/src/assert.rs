//! Structural checker.

use crate::error::LlrbError;
use crate::node::{is_red, subtree_size, Node};

/// Verifies every LLRB invariant of the subtree rooted at `root`.
///
/// Checks that the root link is black, no right link is red, no red left link
/// sits below another red left link, every path carries the same number of
/// black links, the size caches match the real subtree sizes and the in-order
/// sequence never decreases under `less`.
pub fn assert_llrb_tree<T, C>(root: Option<&Node<T>>, less: &C) -> Result<(), LlrbError>
where
    C: Fn(&T, &T) -> bool,
{
    let Some(root) = root else {
        return Ok(());
    };
    if !root.b {
        return Err(LlrbError::RedRoot);
    }

    /// Returns `(black height, node count)`.
    fn walk<T>(node: Option<&Node<T>>) -> Result<(usize, usize), LlrbError> {
        let Some(node) = node else {
            return Ok((0, 0));
        };
        if is_red(node.right()) {
            return Err(LlrbError::RedRightLink);
        }
        if !node.b && is_red(node.left()) {
            return Err(LlrbError::DoubleRed);
        }

        let (lh, ls) = walk(node.left())?;
        let (rh, rs) = walk(node.right())?;
        if lh != rh {
            return Err(LlrbError::BlackHeight {
                left: lh,
                right: rh,
            });
        }
        if node.n_l != ls {
            return Err(LlrbError::SizeCache {
                cached: node.n_l,
                actual: ls,
            });
        }
        if node.n_r != rs {
            return Err(LlrbError::SizeCache {
                cached: node.n_r,
                actual: rs,
            });
        }

        Ok((lh + usize::from(node.b), ls + 1 + rs))
    }

    let (_, size) = walk(Some(root))?;
    debug_assert_eq!(size, subtree_size(Some(root)));

    let mut stack = Vec::new();
    let mut curr = Some(root);
    let mut prev: Option<&T> = None;
    while curr.is_some() || !stack.is_empty() {
        while let Some(n) = curr {
            stack.push(n);
            curr = n.left();
        }
        let Some(n) = stack.pop() else { break };
        if let Some(p) = prev {
            if less(&n.item, p) {
                return Err(LlrbError::Order);
            }
        }
        prev = Some(&n.item);
        curr = n.right();
    }

    Ok(())
}
