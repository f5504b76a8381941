//! Literal syntax for nested element trees.
//!
//! # Example
//!
//! ```
//! use seqops_core::{nested, Element};
//!
//! let tree = nested![1, [2, 3], [4, [5]]];
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree[0], Element::Scalar(1));
//! assert!(tree[2].is_nested());
//! ```

/// Builds a `Vec<Element<T>>`.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `x` | `Element::Scalar(x)` (a single token tree, or a parenthesized expression) |
/// | `[a, b, ...]` | `Element::Nested(nested![a, b, ...])` |
#[macro_export]
macro_rules! nested {
    // === Single element ===

    (@elem [$($inner:tt)*]) => {
        $crate::Element::Nested($crate::nested![$($inner)*])
    };
    (@elem $scalar:expr) => {
        $crate::Element::Scalar($scalar)
    };

    // === Entry point ===

    ($($elem:tt),* $(,)?) => {
        $crate::shim::vec![$($crate::nested!(@elem $elem)),*]
    };
}
