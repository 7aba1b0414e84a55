use std::iter::FusedIterator;

use super::BitVector;

/// A borrowing iterator over the booleans of a [`BitVector`]. See [`BitVector::iter`].
///
/// Yields `bool` by value - there is no such thing as a `&bool` into packed storage.
#[derive(Clone)]
pub struct Iter<'a> {
    vec: &'a BitVector,
    start: usize,
    end: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(vec: &'a BitVector) -> Iter<'a> {
        Iter {
            vec,
            start: 0,
            end: vec.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end <= len.
            let value = unsafe { self.vec.bit_unchecked(self.start) };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end < len after the decrement.
            Some(unsafe { self.vec.bit_unchecked(self.end) })
        } else {
            None
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned iterator over the booleans of a [`BitVector`].
///
/// Booleans have no drop glue, so ownership only matters for releasing the block array, which
/// the contained BitVector's own [`Drop`] handles.
pub struct IntoIter {
    vec: BitVector,
    start: usize,
    end: usize,
}

impl IntoIterator for BitVector {
    type Item = bool;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.len();

        IntoIter {
            vec: self,
            start: 0,
            end,
        }
    }
}

impl Iterator for IntoIter {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end <= len.
            let value = unsafe { self.vec.bit_unchecked(self.start) };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end < len after the decrement.
            Some(unsafe { self.vec.bit_unchecked(self.end) })
        } else {
            None
        }
    }
}

impl FusedIterator for IntoIter {}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.end - self.start
    }
}
