use thiserror::Error;

/// Errors reported by the tree.
///
/// [`LlrbError::ZeroSign`] is the only caller-input error. The remaining
/// variants describe structural defects and are produced by
/// [`assert_llrb_tree`](crate::assert_llrb_tree) only; the balancing code
/// itself panics on a broken invariant instead of returning them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LlrbError {
    #[error("sentinel sign must be nonzero")]
    ZeroSign,
    #[error("root link is red")]
    RedRoot,
    #[error("red right link")]
    RedRightLink,
    #[error("red left link below a red left link")]
    DoubleRed,
    #[error("black height mismatch: left {left}, right {right}")]
    BlackHeight { left: usize, right: usize },
    #[error("cached subtree size {cached} differs from actual size {actual}")]
    SizeCache { cached: usize, actual: usize },
    #[error("in-order sequence is out of order")]
    Order,
    #[error("tree count {count} differs from root size {size}")]
    CountMismatch { count: usize, size: usize },
}
