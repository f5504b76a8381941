//! Nested elements and flattening depth.
//!
//! `flat` needs to tell a plain value apart from a sub-sequence. Rather than
//! testing types at runtime, items that may nest are modeled as a tagged
//! [`Element`].

use crate::Vec;
use crate::error::Error;

/// Either a plain value or a nested sequence of further elements.
///
/// Build literal trees with [`nested!`](crate::nested).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element<T> {
    Scalar(T),
    Nested(Vec<Element<T>>),
}

impl<T> Element<T> {
    pub fn is_nested(&self) -> bool {
        matches!(self, Element::Nested(_))
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Element::Scalar(value) => Some(value),
            Element::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&[Element<T>]> {
        match self {
            Element::Scalar(_) => None,
            Element::Nested(items) => Some(items),
        }
    }

    pub fn into_scalar(self) -> Option<T> {
        match self {
            Element::Scalar(value) => Some(value),
            Element::Nested(_) => None,
        }
    }
}

/// How many levels of nesting `flat` removes.
///
/// Defaults to one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Finite(usize),
    Infinite,
}

static_assertions::assert_impl_all!(Depth: Copy, Send, Sync);

impl Depth {
    pub const ZERO: Depth = Depth::Finite(0);
    pub const ONE: Depth = Depth::Finite(1);

    /// Whether a nested element at this depth still gets spliced.
    pub fn descends(self) -> bool {
        match self {
            Depth::Finite(n) => n > 0,
            Depth::Infinite => true,
        }
    }

    /// The depth one level further down.
    ///
    /// Saturates at zero; `Infinite` stays infinite.
    pub fn decrement(self) -> Depth {
        match self {
            Depth::Finite(n) => Depth::Finite(n.saturating_sub(1)),
            Depth::Infinite => Depth::Infinite,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::ONE
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Depth::Finite(levels)
    }
}

/// Numeric depth, as in `flat(xs, 2.0)` or `flat(xs, f64::INFINITY)`.
///
/// Fractions truncate toward zero; values past `usize::MAX` count as
/// infinite since no real tree is that deep. NaN and negative depths are
/// rejected.
impl TryFrom<f64> for Depth {
    type Error = Error;

    fn try_from(levels: f64) -> Result<Self, Error> {
        if levels.is_nan() || levels < 0.0 {
            tracing::debug!(levels, "Rejected flatten depth");
            return Err(Error::InvalidDepth(levels));
        }
        if levels == f64::INFINITY || levels >= usize::MAX as f64 {
            return Ok(Depth::Infinite);
        }
        // In range and non-negative: `as` truncates toward zero.
        Ok(Depth::Finite(levels as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_default_depth_is_one() {
        assert_eq!(Depth::default(), Depth::Finite(1));
    }

    #[test]
    fn test_depth_from_usize() {
        assert_eq!(Depth::from(3usize), Depth::Finite(3));
        assert_eq!(Depth::from(0usize), Depth::ZERO);
    }

    #[test]
    fn test_decrement() {
        assert_eq!(Depth::Finite(2).decrement(), Depth::Finite(1));
        assert_eq!(Depth::ZERO.decrement(), Depth::ZERO);
        assert_eq!(Depth::Infinite.decrement(), Depth::Infinite);
        assert!(!Depth::ZERO.descends());
        assert!(Depth::ONE.descends());
        assert!(Depth::Infinite.descends());
    }

    #[test]
    fn test_depth_from_f64() {
        assert_eq!(Depth::try_from(2.0), Ok(Depth::Finite(2)));
        assert_eq!(Depth::try_from(1.9), Ok(Depth::Finite(1)));
        assert_eq!(Depth::try_from(0.0), Ok(Depth::ZERO));
        assert_eq!(Depth::try_from(f64::INFINITY), Ok(Depth::Infinite));
        assert_eq!(Depth::try_from(1e300), Ok(Depth::Infinite));
    }

    #[test]
    fn test_depth_from_f64_rejects_nonsense() {
        assert_eq!(Depth::try_from(-1.0), Err(Error::InvalidDepth(-1.0)));
        assert_eq!(
            Depth::try_from(f64::NEG_INFINITY),
            Err(Error::InvalidDepth(f64::NEG_INFINITY))
        );
        // NaN != NaN, so match instead of comparing.
        assert!(matches!(
            Depth::try_from(f64::NAN),
            Err(Error::InvalidDepth(d)) if d.is_nan()
        ));
    }

    #[test]
    fn test_element_accessors() {
        let scalar: Element<i32> = Element::Scalar(7);
        let nested = Element::Nested(vec![Element::Scalar(1), Element::Scalar(2)]);

        assert!(!scalar.is_nested());
        assert!(nested.is_nested());
        assert_eq!(scalar.as_scalar(), Some(&7));
        assert_eq!(nested.as_scalar(), None);
        assert_eq!(nested.as_nested().map(<[_]>::len), Some(2));
        assert_eq!(scalar.clone().into_scalar(), Some(7));
        assert_eq!(nested.into_scalar(), None);
    }
}
