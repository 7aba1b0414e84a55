use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;

use super::Vector;
use crate::alloc::RawBuf;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);

        // SAFETY: Ownership of the buffer moves into the iterator; this is never dropped, so
        // the storage has exactly one owner.
        let buf = unsafe { ptr::read(&this.buf) };

        IntoIter {
            buf,
            start: 0,
            end: this.len,
        }
    }
}

/// An owned iterator over the elements of a [`Vector`]. See [`Vector::into_iter`].
///
/// Elements in `[start, end)` are still live; everything outside has either been yielded
/// (moved out) or never existed. Dropping the iterator drops the remaining elements and then
/// releases the storage.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Slots in [start, end) hold live values that haven't been yielded, and
            // each is dropped exactly once. The buffer itself is released by RawBuf::drop.
            unsafe { ptr::drop_in_place(self.buf.slot(i)) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the slot holds a live value. Advancing start afterwards
            // marks the slot as moved-out.
            let value = unsafe { self.buf.slot(self.start).read() };
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end was just decremented to the last un-yielded slot, which holds a
            // live value.
            Some(unsafe { self.buf.slot(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &(self.end - self.start))
            .finish()
    }
}

// Borrowed iteration comes from Deref<Target = [T]>: iter and iter_mut are the slice's.
