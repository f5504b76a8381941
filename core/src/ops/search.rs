//! Short-circuiting predicates: `some`, `every`, `find`.
//!
//! Each stops at the first decisive item. When nothing decides early the
//! predicate has run exactly once per item.

use crate::sequence::{Sequence, indexed};

/// Whether `predicate` holds for at least one item.
///
/// # Examples
/// - `some(&[-4, 3, 6], |x, _, _| *x > 0)` → `true` (stops at index 1)
/// - `some(&[] as &[i32], |_, _, _| true)` → `false`
pub fn some<S, F>(seq: &S, mut predicate: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> bool,
{
    for (index, item) in indexed(seq) {
        if predicate(item, index, seq) {
            tracing::trace!(index, "some: matched");
            return true;
        }
    }
    false
}

/// [`some`] with a fallible predicate.
pub fn try_some<S, F, E>(seq: &S, mut predicate: F) -> Result<bool, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> Result<bool, E>,
{
    for (index, item) in indexed(seq) {
        if predicate(item, index, seq)? {
            tracing::trace!(index, "some: matched");
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether `predicate` holds for every item.
///
/// Vacuously `true` for an empty sequence.
///
/// # Examples
/// - `every(&[-4, 3, 6], |x, _, _| *x < 0)` → `false` (stops at index 1)
/// - `every(&[-4, -3, -6], |x, _, _| *x < 0)` → `true`
pub fn every<S, F>(seq: &S, mut predicate: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> bool,
{
    for (index, item) in indexed(seq) {
        if !predicate(item, index, seq) {
            tracing::trace!(index, "every: rejected");
            return false;
        }
    }
    true
}

/// [`every`] with a fallible predicate.
pub fn try_every<S, F, E>(seq: &S, mut predicate: F) -> Result<bool, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> Result<bool, E>,
{
    for (index, item) in indexed(seq) {
        if !predicate(item, index, seq)? {
            tracing::trace!(index, "every: rejected");
            return Ok(false);
        }
    }
    Ok(true)
}

/// The first item `predicate` accepts, or `None`.
///
/// Returns the item itself, not its index. `None` is only ever "not found":
/// a matching item that is itself an `Option::None` comes back as
/// `Some(&None)`.
///
/// # Examples
/// - `find(&[1, 2, 3], |x, _, _| *x == 2)` → `Some(&2)`
/// - `find(&[1, 2, 3], |x, _, _| *x == 5)` → `None`
pub fn find<S, F>(seq: &S, mut predicate: F) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> bool,
{
    for (index, item) in indexed(seq) {
        if predicate(item, index, seq) {
            tracing::trace!(index, "find: matched");
            return Some(item);
        }
    }
    None
}

/// [`find`] with a fallible predicate.
pub fn try_find<S, F, E>(seq: &S, mut predicate: F) -> Result<Option<&S::Item>, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> Result<bool, E>,
{
    for (index, item) in indexed(seq) {
        if predicate(item, index, seq)? {
            tracing::trace!(index, "find: matched");
            return Ok(Some(item));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
