use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use super::{BitRef, Iter};
use crate::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// The unsigned integer word used as the unit of storage. One logical boolean per bit.
pub(crate) type Block = u64;

/// The number of booleans a single block holds.
pub const BITS_PER_BLOCK: usize = Block::BITS as usize;

const GROWTH_FACTOR: usize = 2;

/// A contiguous collection of booleans, packed one value per bit of a [`u64`] block.
///
/// The external contract matches [`Vector<bool>`](crate::contiguous::Vector), but the physical
/// layout doesn't: allocation happens at block granularity, so `cap()` is always a multiple of
/// [`BITS_PER_BLOCK`] and can exceed what was asked for. Individual bits can't be referenced
/// directly either, which is why mutable access returns the [`BitRef`] proxy instead of a
/// `&mut bool`.
///
/// The container manages its block array itself rather than going through
/// [`RawBuf`](crate::alloc::RawBuf): blocks are allocated zeroed, and every bit in
/// `[len, cap)` is kept at zero by all mutations. That invariant is what lets growth and
/// comparison work block-at-a-time without ever observing garbage beyond the logical length.
///
/// # Time Complexity
/// As for [`Vector`](crate::contiguous::Vector): `O(1)` access, amortized `O(1)` push,
/// `O(n-i)` insert/remove, `O(n)` reallocation, except that `flip`, `clear` and comparisons
/// process whole blocks (64 bits) per step.
pub struct BitVector {
    blocks: NonNull<Block>,
    len: usize,
    cap: usize,
}

impl BitVector {
    /// Creates a new BitVector with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let vec = BitVector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> BitVector {
        BitVector {
            blocks: NonNull::dangling(),
            len: 0,
            cap: 0,
        }
    }

    /// Creates a new BitVector able to hold at least `cap` booleans without reallocation. The
    /// actual capacity is rounded up to a whole number of blocks.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let vec = BitVector::with_cap(100);
    /// assert_eq!(vec.cap(), 128);
    /// ```
    pub fn with_cap(cap: usize) -> BitVector {
        let count = Self::blocks_for(cap);

        BitVector {
            blocks: Self::alloc_blocks(count),
            len: 0,
            cap: count * BITS_PER_BLOCK,
        }
    }

    /// Creates a new BitVector containing `count` copies of `value`.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let vec = BitVector::repeat(true, 3);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.get(2), Some(true));
    /// ```
    pub fn repeat(value: bool, count: usize) -> BitVector {
        let mut vec = BitVector::with_cap(count);

        for i in 0..count {
            // SAFETY: The capacity covers all count bits.
            unsafe { vec.set_bit_unchecked(i, value) }
        }
        vec.len = count;

        vec
    }

    /// Returns the number of booleans in the BitVector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BitVector contains no booleans.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity in bits. Always a multiple of [`BITS_PER_BLOCK`], because
    /// storage is allocated in whole blocks - unlike
    /// [`Vector::cap`](crate::contiguous::Vector::cap), this can exceed the value a capacity
    /// manipulation method was given.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the boolean at `index`, or [`None`] when `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let vec = BitVector::from([true, false].as_slice());
    /// assert_eq!(vec.get(0), Some(true));
    /// assert_eq!(vec.get(1), Some(false));
    /// assert_eq!(vec.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.len {
            // SAFETY: index < len <= cap.
            Some(unsafe { self.bit_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns the boolean at `index`, or an [`IndexOutOfBounds`] error when
    /// `index >= len()`. This is the checked accessor; note that unlike
    /// [`Vector::at`](crate::contiguous::Vector::at) it returns the value itself - a shared
    /// reference to a bit doesn't exist.
    pub fn at(&self, index: usize) -> Result<bool, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a [`BitRef`] proxy for the bit at `index`, or [`None`] when `index >= len()`.
    /// The proxy borrows the BitVector mutably, so it can't outlive a reallocation.
    pub fn get_mut(&mut self, index: usize) -> Option<BitRef<'_>> {
        if index < self.len {
            let (block, mask) = Self::locate(index);

            Some(BitRef {
                // SAFETY: block < blocks_for(cap), and the exclusive borrow of self makes the
                // reference unique.
                block: unsafe { self.blocks.add(block).as_mut() },
                mask,
            })
        } else {
            None
        }
    }

    /// Returns a [`BitRef`] proxy for the bit at `index`, or an [`IndexOutOfBounds`] error
    /// when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<BitRef<'_>, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns the first boolean, or [`None`] if the BitVector is empty.
    pub fn first(&self) -> Option<bool> {
        self.get(0)
    }

    /// Returns the last boolean, or [`None`] if the BitVector is empty.
    pub fn last(&self) -> Option<bool> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns a [`BitRef`] proxy for the first bit, or [`None`] if the BitVector is empty.
    pub fn first_mut(&mut self) -> Option<BitRef<'_>> {
        self.get_mut(0)
    }

    /// Returns a [`BitRef`] proxy for the last bit, or [`None`] if the BitVector is empty.
    pub fn last_mut(&mut self) -> Option<BitRef<'_>> {
        self.len.checked_sub(1).and_then(|index| self.get_mut(index))
    }

    /// Writes the boolean at `index` directly, without going through a proxy.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::repeat(false, 8);
    /// vec.set(3, true);
    /// assert_eq!(vec.get(3), Some(true));
    /// ```
    pub fn set(&mut self, index: usize, value: bool) {
        self.check_index(index);

        // SAFETY: index < len <= cap.
        unsafe { self.set_bit_unchecked(index, value) }
    }

    /// Appends a boolean to the end of the BitVector, increasing the capacity if required. The
    /// first growth from capacity 0 reserves one block's worth of bits; every later growth
    /// doubles the capacity (which doubles the block count).
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::new();
    /// vec.push(true);
    /// vec.push(false);
    /// assert_eq!(vec.len(), 2);
    /// assert_eq!(vec.cap(), 64);
    /// ```
    pub fn push(&mut self, value: bool) {
        if self.len == self.cap {
            self.reserve(self.next_cap());
        }

        // SAFETY: len < cap after growing.
        unsafe { self.set_bit_unchecked(self.len, value) }
        self.len += 1;
    }

    /// Pops the last boolean off the end of the BitVector, returning it if the BitVector has
    /// length greater than 0. The vacated bit is cleared, keeping everything beyond the
    /// logical length zeroed.
    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;

            // SAFETY: len was just decremented, so the old last bit is within capacity.
            let value = unsafe { self.bit_unchecked(self.len) };
            // SAFETY: As above; clearing maintains the zeroed tail.
            unsafe { self.set_bit_unchecked(self.len, false) }
            Some(value)
        }
    }

    /// Inserts a boolean at the given index, shifting all following bits one position towards
    /// the end. `index` may equal `len()` to insert at the end.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::from([true, true].as_slice());
    /// vec.insert(1, false);
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [true, false, true]);
    /// ```
    pub fn insert(&mut self, index: usize, value: bool) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }

        if self.len == self.cap {
            self.reserve(self.next_cap());
        }

        // Shift the bits in [index, len) up by one, last first.
        let mut i = self.len;
        while i > index {
            // SAFETY: i <= len < cap, and i >= 1 so both positions are valid.
            unsafe { self.set_bit_unchecked(i, self.bit_unchecked(i - 1)) }
            i -= 1;
        }

        // SAFETY: index <= len < cap.
        unsafe { self.set_bit_unchecked(index, value) }
        self.len += 1;
    }

    /// Removes the boolean at the provided index, shifting all following bits one position
    /// towards the front. Returns the removed boolean.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> bool {
        self.check_index(index);

        // SAFETY: index < len.
        let value = unsafe { self.bit_unchecked(index) };

        for i in index..self.len - 1 {
            // SAFETY: i + 1 < len <= cap.
            unsafe { self.set_bit_unchecked(i, self.bit_unchecked(i + 1)) }
        }

        // SAFETY: len >= 1 because index < len. Clearing maintains the zeroed tail.
        unsafe { self.set_bit_unchecked(self.len - 1, false) }
        self.len -= 1;
        value
    }

    /// Grows the capacity to at least `new_cap` bits, rounded up to whole blocks. Does
    /// nothing when the BitVector already has that much capacity - this method never shrinks.
    ///
    /// New blocks are allocated zeroed before the old blocks are copied in, so the space
    /// beyond the old capacity never holds garbage.
    ///
    /// # Panics
    /// Panics if the memory layout of the block array would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::new();
    /// vec.reserve(65);
    /// assert_eq!(vec.cap(), 128);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.cap {
            return;
        }

        let old_count = Self::blocks_for(self.cap);
        let new_count = Self::blocks_for(new_cap);
        let new_blocks = Self::alloc_blocks(new_count);

        // SAFETY: The new array has at least old_count blocks and the allocations don't
        // overlap. The old array is released only after its contents have been copied across.
        unsafe {
            ptr::copy_nonoverlapping(self.blocks.as_ptr(), new_blocks.as_ptr(), old_count);
            Self::dealloc_blocks(self.blocks, old_count);
        }

        self.blocks = new_blocks;
        self.cap = new_count * BITS_PER_BLOCK;
    }

    /// Shrinks the BitVector so that its capacity is the smallest whole number of blocks
    /// holding its length.
    pub fn shrink_to_fit(&mut self) {
        let old_count = Self::blocks_for(self.cap);
        let new_count = Self::blocks_for(self.len);

        if new_count == old_count {
            return;
        }

        let new_blocks = Self::alloc_blocks(new_count);

        // SAFETY: new_count < old_count, so the copy is in bounds of both arrays; blocks
        // beyond new_count hold only zeroed out-of-range bits.
        unsafe {
            ptr::copy_nonoverlapping(self.blocks.as_ptr(), new_blocks.as_ptr(), new_count);
            Self::dealloc_blocks(self.blocks, old_count);
        }

        self.blocks = new_blocks;
        self.cap = new_count * BITS_PER_BLOCK;
    }

    /// Zeroes every in-range bit and resets the length to 0. The capacity is unchanged.
    pub fn clear(&mut self) {
        // SAFETY: blocks_for(len) <= blocks_for(cap), so the write stays in bounds.
        unsafe { ptr::write_bytes(self.blocks.as_ptr(), 0, Self::blocks_for(self.len)) }
        self.len = 0;
    }

    /// Shortens the BitVector to at most `count` booleans, clearing the removed bits. Does
    /// nothing when `count >= len()`.
    pub fn truncate(&mut self, count: usize) {
        if count >= self.len {
            return;
        }

        for i in count..self.len {
            // SAFETY: i < len <= cap. Clearing maintains the zeroed tail.
            unsafe { self.set_bit_unchecked(i, false) }
        }
        self.len = count;
    }

    /// Resizes the BitVector to `count` booleans. Growing sets the new bits to `value`
    /// (reserving capacity first); shrinking clears the excess bits and leaves the capacity
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::repeat(true, 3);
    /// vec.resize(5, false);
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [true, true, true, false, false]);
    /// vec.resize(2, false);
    /// assert_eq!(vec.len(), 2);
    /// ```
    pub fn resize(&mut self, count: usize, value: bool) {
        if count > self.len {
            self.reserve(count);
            for i in self.len..count {
                // SAFETY: Capacity was just reserved for count bits.
                unsafe { self.set_bit_unchecked(i, value) }
            }
            self.len = count;
        } else {
            self.truncate(count);
        }
    }

    /// Inverts every in-range bit. Bits beyond the length are untouched (and stay zero): full
    /// blocks are inverted wholesale and a partial last block is masked to its in-range bits.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::repeat(false, 3);
    /// vec.flip();
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [true, true, true]);
    /// ```
    pub fn flip(&mut self) {
        let full_blocks = self.len / BITS_PER_BLOCK;

        for i in 0..full_blocks {
            // SAFETY: i < blocks_for(len) <= blocks_for(cap).
            unsafe {
                let block = self.blocks.add(i).as_ptr();
                *block = !*block;
            }
        }

        let tail_bits = self.len % BITS_PER_BLOCK;
        if tail_bits != 0 {
            // SAFETY: A partial block exists, so full_blocks indexes it in bounds.
            unsafe {
                let block = self.blocks.add(full_blocks).as_ptr();
                *block ^= (1 << tail_bits) - 1;
            }
        }
    }

    /// Exchanges the boolean values at two indices. This is the owned-container form of
    /// swapping through two proxy references, which the borrow rules disallow (two live
    /// [`BitRef`]s into the same BitVector can't exist).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let mut vec = BitVector::from([true, false].as_slice());
    /// vec.swap_bits(0, 1);
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [false, true]);
    /// ```
    pub fn swap_bits(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);

        // SAFETY: Both indices are < len <= cap.
        unsafe {
            let first = self.bit_unchecked(a);
            let second = self.bit_unchecked(b);
            self.set_bit_unchecked(a, second);
            self.set_bit_unchecked(b, first);
        }
    }

    /// Exchanges the contents of two BitVectors in constant time. No bits are copied; the
    /// block arrays swap owners.
    pub fn swap_with(&mut self, other: &mut BitVector) {
        mem::swap(self, other);
    }

    /// Returns a borrowing iterator over the booleans, front to back.
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::contiguous::BitVector;
    /// let vec = BitVector::from([true, false, true].as_slice());
    /// assert_eq!(vec.iter().filter(|bit| *bit).count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl BitVector {
    /// The number of blocks needed to hold `bits` booleans.
    pub(crate) const fn blocks_for(bits: usize) -> usize {
        bits.div_ceil(BITS_PER_BLOCK)
    }

    /// Splits a bit index into the index of its containing block and the mask selecting it
    /// within that block.
    pub(crate) const fn locate(index: usize) -> (usize, Block) {
        (index / BITS_PER_BLOCK, 1 << (index % BITS_PER_BLOCK))
    }

    /// Reads the bit at `index`.
    ///
    /// # Safety
    /// `index` must be less than the capacity.
    pub(crate) unsafe fn bit_unchecked(&self, index: usize) -> bool {
        let (block, mask) = Self::locate(index);

        // SAFETY: It is up to the caller to keep index below the capacity, placing block
        // within the allocated array.
        unsafe { self.blocks.add(block).read() & mask != 0 }
    }

    /// Writes the bit at `index` with the branchless masked read-modify-write.
    ///
    /// # Safety
    /// `index` must be less than the capacity.
    pub(crate) unsafe fn set_bit_unchecked(&mut self, index: usize, value: bool) {
        let (block, mask) = Self::locate(index);

        // SAFETY: It is up to the caller to keep index below the capacity, placing block
        // within the allocated array.
        unsafe {
            let block = self.blocks.add(block).as_ptr();
            *block ^= ((value as Block).wrapping_neg() ^ *block) & mask;
        }
    }

    /// The capacity the next growth step targets: double the current capacity, or a single
    /// block's worth of bits when no storage has been allocated yet.
    pub(crate) const fn next_cap(&self) -> usize {
        if self.cap == 0 {
            BITS_PER_BLOCK
        } else {
            self.cap * GROWTH_FACTOR
        }
    }

    /// The blocks holding in-range bits, viewed as a slice. Valid for comparison and hashing
    /// because all bits beyond `len` in the final block are zero.
    pub(crate) fn used_blocks(&self) -> &[Block] {
        // SAFETY: blocks_for(len) <= blocks_for(cap) blocks are allocated, initialized
        // (alloc_blocks zeroes) and exclusively owned.
        unsafe { slice::from_raw_parts(self.blocks.as_ptr(), Self::blocks_for(self.len)) }
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

    /// Allocates a zeroed array of `count` blocks, or a dangling pointer for `count == 0`.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub(crate) fn alloc_blocks(count: usize) -> NonNull<Block> {
        if count == 0 {
            return NonNull::dangling();
        }

        let layout = Self::block_layout(count);

        NonNull::new(
            // SAFETY: Zero-sized layouts have been guarded against. Zeroing up front is what
            // keeps partial blocks free of garbage beyond the logical length.
            unsafe { alloc::alloc_zeroed(layout).cast() }
        ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    /// Releases an array previously produced by [`alloc_blocks`](BitVector::alloc_blocks).
    ///
    /// # Safety
    /// `ptr` must come from `alloc_blocks(count)` with the same `count`, not yet released.
    pub(crate) unsafe fn dealloc_blocks(ptr: NonNull<Block>, count: usize) {
        if count == 0 {
            return;
        }

        // SAFETY: The array was allocated in the global allocator with this exact layout;
        // dangling zero-count pointers are guarded against above.
        unsafe { alloc::dealloc(ptr.as_ptr().cast(), Self::block_layout(count)) }
    }

    /// A helper to build the [`Layout`] for `count` blocks.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    fn block_layout(count: usize) -> Layout {
        Layout::array::<Block>(count).expect("Capacity overflow!")
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BitVector {
    fn drop(&mut self) {
        // Booleans have no drop glue; only the block array needs releasing.
        // SAFETY: The array was produced by alloc_blocks for the current capacity and is
        // released exactly once.
        unsafe { Self::dealloc_blocks(self.blocks, Self::blocks_for(self.cap)) }
    }
}

impl Clone for BitVector {
    fn clone(&self) -> Self {
        let count = Self::blocks_for(self.cap);
        let blocks = Self::alloc_blocks(count);

        // SAFETY: Both arrays hold exactly count blocks and don't overlap.
        unsafe { ptr::copy_nonoverlapping(self.blocks.as_ptr(), blocks.as_ptr(), count) }

        BitVector {
            blocks,
            len: self.len,
            cap: self.cap,
        }
    }
}

// SAFETY: BitVector uniquely owns its block array, so sending it to another thread moves the
// storage with it.
unsafe impl Send for BitVector {}
// SAFETY: BitVector's safe API obeys the borrow checker; no interior mutability occurs.
unsafe impl Sync for BitVector {}

impl Extend<bool> for BitVector {
    fn extend<A: IntoIterator<Item = bool>>(&mut self, iter: A) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = BitVector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl From<&[bool]> for BitVector {
    fn from(value: &[bool]) -> Self {
        let mut vec = BitVector::with_cap(value.len());

        for (i, item) in value.iter().enumerate() {
            // SAFETY: The capacity covers the whole slice.
            unsafe { vec.set_bit_unchecked(i, *item) }
        }
        vec.len = value.len();

        vec
    }
}

impl<const N: usize> From<[bool; N]> for BitVector {
    fn from(value: [bool; N]) -> Self {
        Self::from(value.as_slice())
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        // Block-wise comparison is sound because out-of-range bits are always zero on both
        // sides.
        self.len == other.len && self.used_blocks() == other.used_blocks()
    }
}

impl Eq for BitVector {}

impl PartialOrd for BitVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.used_blocks().hash(state);
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("contents", &DisplayBits(self))
            .finish()
    }
}

impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&DisplayBits(self), f)
    }
}

/// Renders the bits as a compact string of `0`s and `1`s, front bit first.
struct DisplayBits<'a>(&'a BitVector);

impl Debug for DisplayBits<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for bit in self.0.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, "\"")
    }
}
