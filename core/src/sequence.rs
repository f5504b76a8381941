//! The `Sequence` abstraction: ordered, indexable, finite.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// An ordered, zero-indexed, finite collection.
///
/// Implementors must return `Some` from [`get`](Sequence::get) for every
/// index below [`len`](Sequence::len). A sequence that breaks this contract
/// is treated as ending at its first missing index.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

/// Walks `seq` in increasing index order, yielding `(index, item)`.
///
/// Stops at `len()` or at the first index `get` can't produce.
pub(crate) fn indexed<S: Sequence + ?Sized>(seq: &S) -> Indexed<'_, S> {
    Indexed {
        seq,
        next: 0,
        len: seq.len(),
    }
}

pub(crate) struct Indexed<'a, S: ?Sized> {
    seq: &'a S,
    next: usize,
    len: usize,
}

impl<'a, S: Sequence + ?Sized> Iterator for Indexed<'a, S> {
    type Item = (usize, &'a S::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        match self.seq.get(index) {
            Some(item) => {
                self.next += 1;
                Some((index, item))
            }
            None => {
                // Broken `Sequence` impl: end the walk here.
                self.next = self.len;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len - self.next))
    }
}
