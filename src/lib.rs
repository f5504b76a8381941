//! seqops - Eager iteration primitives for ordered sequences
//!
//! # Overview
//!
//! Eight operations over anything implementing [`Sequence`]: slices, arrays,
//! `Vec`, `VecDeque`, or your own indexable type.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`for_each`] | `()` |
//! | [`map`] | a new `Vec` of callback results |
//! | [`filter`] | a new `Vec` of accepted items |
//! | [`reduce`] / [`reduce_with`] | the final accumulator |
//! | [`some`] / [`every`] | `bool`, stopping early |
//! | [`find`] | `Option<&Item>`, stopping early |
//! | [`flat`] | a new `Vec<Element<T>>` |
//!
//! Callbacks receive `(item, index, sequence)`; `reduce` callbacks receive
//! the accumulator first.
//!
//! # Quick Start
//!
//! ```
//! use seqops::{every, filter, find, map, reduce, reduce_with, some};
//!
//! let xs = vec![5, 3, 7];
//!
//! assert_eq!(map(&xs, |x, i, _| x * i as i32), vec![0, 3, 14]);
//! assert_eq!(filter(&xs, |x, _, _| *x > 4), vec![5, 7]);
//! assert_eq!(reduce(&xs, |acc, x, _, _| acc + x), Ok(15));
//! assert_eq!(reduce_with(&xs, |acc: i32, x, _, _| acc + x, 4), 19);
//! assert!(some(&xs, |x, _, _| *x == 3));
//! assert!(!every(&xs, |x, _, _| *x > 3));
//! assert_eq!(find(&xs, |x, _, _| *x > 5), Some(&7));
//! ```
//!
//! # Folding Empty Sequences
//!
//! Without an initial value there is nothing to seed the accumulator with,
//! so [`reduce`] reports an error instead of inventing a value:
//!
//! ```
//! use seqops::{Error, reduce, reduce_with};
//!
//! let empty: Vec<i32> = Vec::new();
//! assert_eq!(reduce(&empty, |a, b, _, _| a + b), Err(Error::EmptyReduce));
//! assert_eq!(reduce_with(&empty, |a: i32, b, _, _| a + b, 0), 0);
//! ```
//!
//! # Flattening
//!
//! Items that may nest are [`Element`]s; [`nested!`] writes them as literals.
//!
//! ```
//! use seqops::{Depth, flat, nested};
//!
//! let tree = nested![1, [2, 3], [4, [5, 6, [7, 8]]]];
//!
//! assert_eq!(flat(&tree, Depth::default()), nested![1, 2, 3, 4, [5, 6, [7, 8]]]);
//! assert_eq!(flat(&tree, Depth::Finite(2)), nested![1, 2, 3, 4, 5, 6, [7, 8]]);
//! assert_eq!(flat(&tree, Depth::Infinite), nested![1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! # Fallible Callbacks
//!
//! The `try_` operations stop at the first `Err` and return it unchanged:
//!
//! ```
//! use seqops::try_map;
//!
//! let parsed: Result<Vec<i32>, _> = try_map(&["1", "x", "3"], |s, _, _| s.parse::<i32>());
//! assert!(parsed.is_err());
//! ```

pub use seqops_core::{
    Depth, Element, Error, Sequence, every, filter, find, flat, for_each, map, nested, reduce,
    reduce_with, some, try_every, try_filter, try_find, try_for_each, try_map, try_reduce,
    try_reduce_with, try_some,
};

pub use seqops_core::{element, error, ops, sequence};
