//! Depth-limited flattening of nested elements.

use crate::Vec;
use crate::element::{Depth, Element};
use crate::sequence::{Sequence, indexed};

/// Splice nested elements into a new vector, up to `depth` levels deep.
///
/// A nested element is replaced by its own flattened contents (one level
/// less deep) while `depth` allows it; anything else is cloned as is.
///
/// # Edge Cases
///
/// - `Depth::ZERO` returns a shallow copy, nested elements untouched
/// - `Depth::Infinite` removes every level of nesting
/// - Empty nested elements vanish when spliced
///
/// # Examples
/// - `flat(&nested![1, [2, 3], [4, [5]]], Depth::ONE)` → `[1, 2, 3, 4, [5]]`
/// - `flat(&nested![1, [2, 3], [4, [5]]], Depth::Infinite)` → `[1, 2, 3, 4, 5]`
/// - `flat(&nested![[]], Depth::ONE)` → `[]`
pub fn flat<S, T>(seq: &S, depth: Depth) -> Vec<Element<T>>
where
    S: Sequence<Item = Element<T>> + ?Sized,
    T: Clone,
{
    // `len()` may overstate; don't reserve from it.
    let mut out = Vec::new();
    flat_into(seq, depth, &mut out);
    out
}

fn flat_into<S, T>(seq: &S, depth: Depth, out: &mut Vec<Element<T>>)
where
    S: Sequence<Item = Element<T>> + ?Sized,
    T: Clone,
{
    for (index, element) in indexed(seq) {
        match element {
            Element::Nested(inner) if depth.descends() => {
                tracing::trace!(index, ?depth, len = inner.len(), "flat: splicing nested element");
                flat_into(inner, depth.decrement(), out);
            }
            _ => out.push(element.clone()),
        }
    }
}

#[cfg(test)]
#[path = "flat_test.rs"]
mod flat_test;
