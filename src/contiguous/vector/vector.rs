use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::alloc::RawBuf;
use crate::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity a Vector grows to when pushed into with no storage allocated. Growing by
/// doubling can't get a zero capacity off the ground, so the first growth uses this constant
/// instead.
pub const DEFAULT_CAP: usize = 8;

const MAX_BYTES: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, backed by a [`RawBuf<T>`].
///
/// The Vector owns `cap()` slots of raw storage, of which the first `len()` hold live values.
/// Every mutation keeps that boundary exact: elements are constructed in place when the length
/// grows and destroyed in place when it shrinks, and reallocation moves the live values into
/// the new storage before the old storage is released.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `resize` | `O(n)` |
/// | `append` | `O(m)` |
/// | `swap_with` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuf::with_cap(cap),
            len: 0,
        }
    }

    /// Creates a new Vector containing `count` clones of `value`, with capacity exactly
    /// `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let vec = Vector::repeat(7_u8, 3);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap(count);

        for _ in 0..count {
            // SAFETY: vec has been created with capacity for count values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed
    /// to be exactly the value provided to any of the various capacity manipulation functions.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error when
    /// `index >= len()`. This is the checked counterpart of slice indexing.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.at(1), Ok(&2));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        if index < self.len {
            // SAFETY: index < len, so the slot holds a live value.
            Ok(unsafe { &*self.buf.slot(index) })
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error
    /// when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index < self.len {
            // SAFETY: index < len, so the slot holds a live value. The mutable borrow of self
            // makes the reference exclusive.
            Ok(unsafe { &mut *self.buf.slot(index) })
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if
    /// required. The first growth from capacity 0 reserves [`DEFAULT_CAP`] slots; every later
    /// growth doubles the capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the
    /// provided value, using methods like [`reserve`](Vector::reserve) or
    /// [`with_cap`](Vector::with_cap) to do so. Using this method on a Vector without enough
    /// capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for
        // this push, keeping the written slot in bounds of the allocation.
        unsafe { self.buf.slot(self.len).write(value) }
        self.len += 1;
    }

    /// Constructs a new element in place at the end of the Vector, from the provided closure,
    /// and returns a mutable reference to it. Shares the growth policy of
    /// [`push`](Vector::push).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec: Vector<String> = Vector::new();
    /// vec.push_with(|| String::from("built in place")).push('!');
    /// assert_eq!(&vec[0], "built in place!");
    /// ```
    pub fn push_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        if self.len == self.cap() {
            self.grow();
        }

        let index = self.len;
        // SAFETY: The capacity has just been adjusted, so the slot at len is in bounds.
        unsafe { self.buf.slot(index).write(make()) }
        self.len += 1;

        // SAFETY: The slot at index was initialized above.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector
    /// has length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([0_usize, 1, 2, 3, 4]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the slot no longer counts as live.
            self.len -= 1;

            // SAFETY: len has just been decremented and the slot at the old last index holds a
            // live value. Reading it moves the value off of the heap; the slot is now raw.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// `index` may equal `len()` to insert at the end.
    ///
    /// The index is an offset rather than a pointer, so it stays meaningful across the
    /// reallocation a growth performs.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length, or if the memory layout of the
    /// Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([0_u16, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// The fallible form of [`insert`](Vector::insert): reports an out-of-range index or a
    /// capacity overflow as an error instead of panicking. Allocation failure itself remains
    /// unrecoverable.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }
            .into());
        }

        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: index <= len < cap after growing. The shift stays within the allocation and
        // moves the slots [index, len) up by one; the vacated slot is then written without
        // dropping (its old value now lives one slot to the right).
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Constructs a new element in place at the given index, from the provided closure,
    /// following the same shifting protocol as [`insert`](Vector::insert). Returns a mutable
    /// reference to the new element.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length, or if the memory layout of the
    /// Vector would have a size that exceeds [`isize::MAX`].
    pub fn insert_with(&mut self, index: usize, make: impl FnOnce() -> T) -> &mut T {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: As in try_insert; the closure result is written into the vacated slot.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(make());
        }

        self.len += 1;
        // SAFETY: The slot at index was initialized above.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Removes the element at the provided index, moving all following values to fill in the
    /// gap. Returns the removed element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot holds a live value. After the read the slot is raw;
        // the shift moves [index + 1, len) down by one so the gap is filled and the stale copy
        // beyond the new length is never treated as live.
        unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot holds a live value for mem::replace to swap out.
        unsafe { mem::replace(&mut *self.buf.slot(index), new_value) }
    }

    /// Grows the capacity to at least `new_cap`. Does nothing when the Vector already has that
    /// much capacity - this method never shrinks. All live elements are preserved; the old
    /// storage is only released after they have been moved into the new storage.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([1_u8, 2, 3]);
    /// vec.reserve(100);
    /// assert_eq!(vec.cap(), 100);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 100, "reserve never shrinks");
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([1_u8, 2, 3]);
    /// vec.reserve(100);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Drops all live elements in place and resets the length to 0. The capacity is
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([1_u8, 2, 3]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the Vector to at most `count` elements, dropping the excess in place. Does
    /// nothing when `count >= len()`.
    pub fn truncate(&mut self, count: usize) {
        if count >= self.len {
            return;
        }

        for i in count..self.len {
            // SAFETY: All slots below len hold live values and each is dropped exactly once,
            // before len is cut back below them.
            unsafe { ptr::drop_in_place(self.buf.slot(i)) }
        }
        self.len = count;
    }

    /// Resizes the Vector to `count` elements. Growing constructs clones of `value` in the new
    /// slots (reserving capacity first); shrinking drops the excess elements and leaves the
    /// capacity unchanged.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([1_u8, 2, 3]);
    /// vec.resize(5, 0);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// vec.resize(2, 0);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn resize(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(count, || value.clone());
    }

    /// Like [`resize`](Vector::resize), but constructs each new element from the provided
    /// closure instead of cloning a value.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn resize_with(&mut self, count: usize, mut make: impl FnMut() -> T) {
        if count > self.len {
            self.reserve(count);
            for i in self.len..count {
                // SAFETY: Capacity was just reserved, so all written slots are in bounds.
                unsafe { self.buf.slot(i).write(make()) }
            }
            self.len = count;
        } else {
            self.truncate(count);
        }
    }

    /// Exchanges the contents of two Vectors in constant time. No elements are moved or
    /// copied; the storage handles themselves swap owners, so references and raw pointers
    /// obtained before the swap now logically belong to the other Vector.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut a = Vector::from([1_u8, 2]);
    /// let mut b = Vector::from([3_u8, 4, 5]);
    /// a.swap_with(&mut b);
    /// assert_eq!(&*a, &[3, 4, 5]);
    /// assert_eq!(&*b, &[1, 2]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Appends all elements from `other` to self, leaving `other`'s storage to be released
    /// empty.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::Vector;
    /// let mut vec = Vector::from([1_u8, 2]);
    /// vec.append(Vector::from([3_u8, 4]));
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, mut other: Vector<T>) {
        let initial_len = self.len;
        self.reserve(initial_len.checked_add(other.len).expect("Capacity overflow!"));

        // SAFETY: self has capacity for the combined length and the two allocations don't
        // overlap. The copy moves other's values; zeroing other.len afterwards stops its Drop
        // from destroying them a second time.
        unsafe {
            ptr::copy_nonoverlapping(other.buf.as_ptr(), self.buf.slot(initial_len), other.len);
        }

        self.len += other.len;
        other.len = 0;
    }
}

impl<T> Vector<T> {
    /// Reallocates the internal buffer to exactly `new_cap` slots, moving all live elements
    /// across. The old storage is released only after the move, so an allocation failure
    /// leaves the Vector untouched (up to the abort).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        if new_cap == self.cap() {
            return;
        }

        let new_buf = RawBuf::with_cap(new_cap);

        // SAFETY: Both buffers have at least len slots and don't overlap. The copy is a move
        // of every live value: the old slots are never read again and the old RawBuf only
        // releases storage on drop, so nothing is dropped twice.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), self.len);
        }

        self.buf = new_buf;
    }

    /// Grows the internal buffer to allow for the insertion of additional elements. After
    /// calling this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(self.next_cap());
    }

    /// The fallible form of [`grow`](Vector::grow), reporting an oversized layout as a
    /// [`CapacityOverflow`] instead of panicking.
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = self.next_cap();

        // Zero-sized types always pass: size_of is 0, so the byte size can't overflow.
        match new_cap.checked_mul(size_of::<T>()) {
            Some(bytes) if bytes <= MAX_BYTES => {
                self.realloc_with_cap(new_cap);
                Ok(())
            }
            _ => Err(CapacityOverflow),
        }
    }

    /// The capacity the next growth step targets: double the current capacity, or
    /// [`DEFAULT_CAP`] when no storage has been allocated yet (doubling zero never grows).
    pub(crate) fn next_cap(&self) -> usize {
        if self.cap() == 0 {
            DEFAULT_CAP
        } else {
            // cap is bounded by isize::MAX bytes, so doubling the slot count can't overflow
            // usize. It can still exceed the maximum layout size, which the allocation checks.
            self.cap() * GROWTH_FACTOR
        }
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with capacity for all N values.
            unsafe { vec.push_unchecked(item) }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());

        for item in value {
            // SAFETY: vec has been created with capacity for the whole slice.
            unsafe { vec.push_unchecked(item.clone()) }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All slots below len hold live values and each is dropped exactly once.
            unsafe { ptr::drop_in_place(self.buf.slot(i)) }
        }

        // self.buf drops implicitly afterwards, releasing the storage without touching
        // element lifetimes.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, properly aligned and contiguous, and
        // the total size is below isize::MAX as a result of being a valid allocation. The
        // borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As in Deref; the mutable borrow of self makes the slice exclusive.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        // The clone reproduces the capacity as well as the contents, with its own independent
        // storage.
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has capacity for at least len values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("contents", &&**self)
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
