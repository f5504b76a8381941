//! Error types for sequence operations.
//!
//! Only two conditions are errors: folding an empty sequence without a seed,
//! and a numeric flatten depth that doesn't describe a depth at all. A
//! predicate matching nothing is a normal result, never an error.

use thiserror::Error;

/// Errors produced by the operations themselves.
///
/// Failures raised by callbacks never pass through this type; the `try_`
/// operations return them to the caller untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// `reduce` was asked to fold an empty sequence without an initial value.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    /// A numeric depth was NaN or negative.
    #[error("invalid flatten depth: {0}")]
    InvalidDepth(f64),
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone, core::error::Error);
