#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Eager iteration primitives over ordered, indexable sequences.
//!
//! Every operation walks its input from index `0` to `len - 1`, hands the
//! callback `(item, index, sequence)` and materializes its result. Inputs are
//! only ever borrowed shared, so they can't change while an operation runs.

// Needed so that macros can uniformly refer to `::seqops_core` and still work
// from within this crate or a different one.
extern crate self as seqops_core;

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly basically so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod element;
pub mod error;
mod macros;
pub mod ops;
pub mod sequence;

pub use element::{Depth, Element};
pub use error::Error;
pub use ops::{
    every, filter, find, flat, for_each, map, reduce, reduce_with, some, try_every, try_filter,
    try_find, try_for_each, try_map, try_reduce, try_reduce_with, try_some,
};
pub use sequence::Sequence;
