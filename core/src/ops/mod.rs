//! Sequence operations
//!
//! Eight eager operations over any [`Sequence`](crate::Sequence):
//! - Transform: `for_each`, `map`, `filter`
//! - Search: `some`, `every`, `find`
//! - Fold: `reduce`, `reduce_with`
//! - Flatten: `flat`
//!
//! Callbacks get a fixed argument list: the item, its index, and the
//! sequence being walked (the same reference the operation was given).
//! `reduce` callbacks get the accumulator first. Items are visited in
//! increasing index order. Only `some`, `every` and `find` stop early.
//!
//! Every callback-taking operation has a `try_` twin whose callback returns
//! `Result`. The first `Err` stops the walk and is handed back as is, with
//! no partial result.

pub mod flat;
pub mod reduce;
pub mod search;
pub mod transform;

pub use flat::flat;
pub use reduce::{reduce, reduce_with, try_reduce, try_reduce_with};
pub use search::{every, find, some, try_every, try_find, try_some};
pub use transform::{filter, for_each, map, try_filter, try_for_each, try_map};
