//! Whole-sequence traversals: `for_each`, `map`, `filter`.
//!
//! These always visit every index.

use crate::Vec;
use crate::sequence::{Sequence, indexed};

// ============================================================================
// for_each
// ============================================================================

/// Call `callback` once per item, for its side effects.
///
/// # Examples
/// - `for_each(&["a", "b"], |s, i, _| println!("{i}: {s}"))` prints `0: a`, `1: b`
pub fn for_each<S, F>(seq: &S, mut callback: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S),
{
    for (index, item) in indexed(seq) {
        callback(item, index, seq);
    }
}

/// [`for_each`] with a fallible callback. Stops at the first error.
pub fn try_for_each<S, F, E>(seq: &S, mut callback: F) -> Result<(), E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> Result<(), E>,
{
    for (index, item) in indexed(seq) {
        callback(item, index, seq)?;
    }
    Ok(())
}

// ============================================================================
// map
// ============================================================================

/// Build a new vector holding `callback(item, index, seq)` for every item.
///
/// The result always has the same length as `seq`.
///
/// # Examples
/// - `map(&["a", "b", "c"], |_, i, _| i * 2)` → `[0, 2, 4]`
/// - `map(&[1, 2], |x, _, _| x.to_string())` → `["1", "2"]`
pub fn map<S, U, F>(seq: &S, mut callback: F) -> Vec<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> U,
{
    // `len()` may overstate; size the result by what the walk yields.
    indexed(seq)
        .map(|(index, item)| callback(item, index, seq))
        .collect()
}

/// [`map`] with a fallible callback. Stops at the first error.
pub fn try_map<S, U, F, E>(seq: &S, mut callback: F) -> Result<Vec<U>, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> Result<U, E>,
{
    indexed(seq)
        .map(|(index, item)| callback(item, index, seq))
        .collect()
}

// ============================================================================
// filter
// ============================================================================

/// Build a new vector with clones of the items `predicate` accepts.
///
/// Relative order is preserved. A new vector is returned even when every
/// item is kept.
///
/// # Examples
/// - `filter(&["a", "b", "c"], |s, i, _| *s == "a" || i == 2)` → `["a", "c"]`
/// - `filter(&[1, 2, 3], |_, _, _| false)` → `[]`
pub fn filter<S, F>(seq: &S, mut predicate: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, usize, &S) -> bool,
{
    let mut kept = Vec::new();
    for (index, item) in indexed(seq) {
        if predicate(item, index, seq) {
            kept.push(item.clone());
        }
    }
    kept
}

/// [`filter`] with a fallible predicate. Stops at the first error.
pub fn try_filter<S, F, E>(seq: &S, mut predicate: F) -> Result<Vec<S::Item>, E>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, usize, &S) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, item) in indexed(seq) {
        if predicate(item, index, seq)? {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
