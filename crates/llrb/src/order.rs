//! Ordering helpers.
//!
//! Items are ordered by a caller-supplied "orders before" predicate. On top of
//! that, two sentinels ([`Inf::Neg`] and [`Inf::Pos`]) sort before and after
//! every item, so range-scanning code can describe open-ended bounds without
//! the item type having to model infinities.

use crate::error::LlrbError;

/// Sentinel extreme values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Inf {
    /// Orders before every item.
    Neg,
    /// Orders after every item.
    Pos,
}

/// Returns [`Inf::Pos`] for a positive `sign` and [`Inf::Neg`] for a negative one.
///
/// # Errors
///
/// [`LlrbError::ZeroSign`] when `sign` is zero.
pub fn inf(sign: i64) -> Result<Inf, LlrbError> {
    match sign.signum() {
        0 => Err(LlrbError::ZeroSign),
        1 => Ok(Inf::Pos),
        _ => Ok(Inf::Neg),
    }
}

/// Comparison operand: a borrowed item or a sentinel.
#[derive(Debug)]
pub enum Bound<'a, T> {
    Item(&'a T),
    Inf(Inf),
}

impl<T> Clone for Bound<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Bound<'_, T> {}

impl<'a, T> From<&'a T> for Bound<'a, T> {
    fn from(item: &'a T) -> Self {
        Bound::Item(item)
    }
}

impl<T> From<Inf> for Bound<'_, T> {
    fn from(inf: Inf) -> Self {
        Bound::Inf(inf)
    }
}

/// `a` orders strictly before `b`.
///
/// Sentinel operands are resolved here; `less` is only consulted when both
/// sides are real items. Two sentinels are never meant to be compared.
pub fn ordered_less<T, C>(less: &C, a: Bound<'_, T>, b: Bound<'_, T>) -> bool
where
    C: Fn(&T, &T) -> bool,
{
    match (a, b) {
        (Bound::Inf(Inf::Pos), _) => false,
        (Bound::Inf(Inf::Neg), _) => true,
        (_, Bound::Inf(Inf::Pos)) => true,
        (_, Bound::Inf(Inf::Neg)) => false,
        (Bound::Item(a), Bound::Item(b)) => less(a, b),
    }
}

/// Natural order for `T: Ord`.
pub fn default_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}
