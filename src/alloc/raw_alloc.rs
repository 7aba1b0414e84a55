use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A stateless allocator of raw, uninitialized storage.
///
/// The entire contract is two operations: [`allocate`](RawAlloc::allocate) storage for exactly
/// `count` elements of a type, and [`deallocate`](RawAlloc::deallocate) storage obtained from a
/// previous `allocate` call. Neither operation has any construction or destruction side
/// effects - the memory handed out is uninitialized and the memory taken back must already
/// contain no live values.
///
/// Allocation failure is unrecoverable: the system allocator's refusal is reported through
/// [`alloc::handle_alloc_error`] rather than a panic, as recommended, to avoid allocating
/// during the failure path. There is no retry logic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawAlloc;

impl RawAlloc {
    /// Allocates uninitialized storage for exactly `count` elements of type `T`, returning a
    /// pointer to the first slot.
    ///
    /// Zero-sized requests (`count == 0`, or any count of a zero-sized type) don't touch the
    /// system allocator at all and return a dangling, well-aligned pointer. `ptr::read` and
    /// friends handle zero-sized types without a backing allocation, so as long as `allocate`
    /// and `deallocate` are paired properly there is nothing more to do for them.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use vector_lib::alloc::RawAlloc;
    /// let ptr = RawAlloc.allocate::<u32>(4);
    /// // SAFETY: The four slots belong to this allocation; no values are live on release.
    /// unsafe {
    ///     ptr.write(7);
    ///     assert_eq!(ptr.read(), 7);
    ///     RawAlloc.deallocate(ptr, 4);
    /// }
    /// ```
    pub fn allocate<T>(self, count: usize) -> NonNull<T> {
        let layout = Self::layout_for::<T>(count);

        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// Releases storage previously obtained from [`allocate`](RawAlloc::allocate).
    ///
    /// Most backing allocators don't need `count` to release a block, but it must match the
    /// original allocation regardless: the layout passed to the system allocator is
    /// reconstructed from it.
    ///
    /// # Safety
    /// - `ptr` must have been returned by `RawAlloc::allocate::<T>(count)` with the same
    ///   `count`, and must not have been deallocated already.
    /// - No live values may remain in the storage; the caller must have dropped them first.
    pub unsafe fn deallocate<T>(self, ptr: NonNull<T>, count: usize) {
        let layout = Self::layout_for::<T>(count);

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout.
            // Zero-sized layouts were never allocated and are guarded against above.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }

    /// A helper to build the [`Layout`] for `count` elements of type `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub(crate) fn layout_for<T>(count: usize) -> Layout {
        Layout::array::<T>(count).expect("Capacity overflow!")
    }
}
