//! Left folds: `reduce` and `reduce_with`.
//!
//! "No initial value" and "initial value" are separate functions, so there's
//! no sentinel to confuse with a real accumulator.

use crate::error::Error;
use crate::sequence::{Sequence, indexed};

/// Fold `seq` left to right, seeded with its first item.
///
/// The first item becomes the accumulator without a callback call; the
/// callback then runs for indices `1..len` as
/// `callback(accumulator, item, index, seq)`.
///
/// # Errors
///
/// [`Error::EmptyReduce`] if `seq` is empty.
///
/// # Examples
/// - `reduce(&[5, 3, 7], |a, b, _, _| a + b)` → `Ok(15)` (two calls, first is `(5, 3, 1)`)
/// - `reduce(&[9], |a, b, _, _| a + b)` → `Ok(9)` (no calls)
pub fn reduce<S, F>(seq: &S, mut callback: F) -> Result<S::Item, Error>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item, usize, &S) -> S::Item,
{
    let mut walk = indexed(seq);
    let Some((_, first)) = walk.next() else {
        tracing::debug!("Refused to reduce an empty sequence without an initial value");
        return Err(Error::EmptyReduce);
    };
    Ok(walk.fold(first.clone(), |acc, (index, item)| {
        callback(acc, item, index, seq)
    }))
}

/// [`reduce`] with a fallible callback.
///
/// The caller's error type absorbs [`Error::EmptyReduce`] through `From`.
pub fn try_reduce<S, F, E>(seq: &S, mut callback: F) -> Result<S::Item, E>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item, usize, &S) -> Result<S::Item, E>,
    E: From<Error>,
{
    let mut walk = indexed(seq);
    let Some((_, first)) = walk.next() else {
        tracing::debug!("Refused to reduce an empty sequence without an initial value");
        return Err(Error::EmptyReduce.into());
    };
    walk.try_fold(first.clone(), |acc, (index, item)| {
        callback(acc, item, index, seq)
    })
}

/// Fold `seq` left to right starting from `initial`.
///
/// The callback runs for every index. An empty sequence yields `initial`.
///
/// # Examples
/// - `reduce_with(&[5, 3, 7], |a, b, _, _| a + b, 4)` → `19` (first call is `(4, 5, 0)`)
/// - `reduce_with(&[] as &[i32], |a, b, _, _| a + b, 0)` → `0`
/// - `reduce_with(&["a", "bb"], |n, s, _, _| n + s.len(), 0)` → `3`
pub fn reduce_with<S, U, F>(seq: &S, mut callback: F, initial: U) -> U
where
    S: Sequence + ?Sized,
    F: FnMut(U, &S::Item, usize, &S) -> U,
{
    indexed(seq).fold(initial, |acc, (index, item)| callback(acc, item, index, seq))
}

/// [`reduce_with`] with a fallible callback.
pub fn try_reduce_with<S, U, F, E>(seq: &S, mut callback: F, initial: U) -> Result<U, E>
where
    S: Sequence + ?Sized,
    F: FnMut(U, &S::Item, usize, &S) -> Result<U, E>,
{
    indexed(seq).try_fold(initial, |acc, (index, item)| {
        callback(acc, item, index, seq)
    })
}

#[cfg(test)]
#[path = "reduce_test.rs"]
mod reduce_test;
