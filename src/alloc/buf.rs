use std::marker::PhantomData;
use std::ptr::NonNull;

use super::RawAlloc;

/// An exclusively-owned region of raw storage for `cap` slots of `T`.
///
/// `RawBuf` is the scoped-resource half of a container: it acquires its storage from
/// [`RawAlloc`] on construction and is guaranteed to release it on every exit path, including
/// unwinding. It deliberately knows nothing about which of its slots hold live values - all
/// slots are raw memory as far as `RawBuf` is concerned, and dropping one never runs element
/// destructors. A container pairing a `RawBuf` with a length is responsible for constructing
/// into and destroying out of the slots it uses.
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a buffer with capacity 0 and no allocation behind it. The pointer is dangling
    /// but well-aligned, which is all a zero-length region needs.
    pub const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a buffer with exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::alloc::RawBuf;
    /// let buf: RawBuf<u64> = RawBuf::with_cap(12);
    /// assert_eq!(buf.cap(), 12);
    /// ```
    pub fn with_cap(cap: usize) -> RawBuf<T> {
        RawBuf {
            ptr: RawAlloc.allocate(cap),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the first slot. The pointer is dangling when `cap` is 0.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a raw pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be within the capacity of the buffer. The returned pointer may only be
    /// read from while the slot holds a live value.
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: It is up to the caller to keep index within the allocated capacity, so the
        // offset stays in bounds of the allocation and can't overflow isize::MAX.
        unsafe { self.ptr.add(index).as_ptr() }
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // Only the storage is released here. Any elements still live in the buffer must have
        // been dropped by the owning container before this point.
        // SAFETY: ptr was obtained from RawAlloc::allocate with this exact capacity and is
        // deallocated at most once.
        unsafe { RawAlloc.deallocate(self.ptr, self.cap) }
    }
}

// SAFETY: RawBuf uniquely owns its allocation, so sending it to another thread moves the
// storage with it. The element type bound matches what a container of T would require.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: RawBuf's safe API hands out no references to its slots, so there is no interior
// mutability to protect.
unsafe impl<T: Sync> Sync for RawBuf<T> {}
