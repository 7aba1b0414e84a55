#![cfg(test)]

use std::ptr::{self, NonNull};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};

#[test]
fn test_allocate_then_construct() {
    // Allocation and construction are separate steps: the slots are raw until written.
    let ptr: NonNull<u32> = RawAlloc.allocate(4);

    for i in 0..4 {
        // SAFETY: All offsets are within the 4 allocated slots.
        unsafe { ptr.add(i).write(42 + i as u32) }
    }

    let mut total = 0;
    for i in 0..4 {
        // SAFETY: Every slot has just been initialized.
        total += unsafe { ptr.add(i).read() };
    }
    assert_eq!(total, 42 * 4 + 6);

    // SAFETY: u32 has no drop glue, so the storage holds no live values needing destruction.
    unsafe { RawAlloc.deallocate(ptr, 4) }
}

#[test]
fn test_allocate_runs_no_destructors() {
    let counter = CountedDrop::new(0);
    let ptr: NonNull<CountedDrop> = RawAlloc.allocate(3);

    for i in 0..3 {
        // SAFETY: All offsets are within the 3 allocated slots.
        unsafe { ptr.add(i).write(counter.clone()) }
    }
    assert_eq!(*counter.borrow(), 0, "Construction shouldn't drop anything.");

    for i in 0..3 {
        // SAFETY: Every slot was initialized above and is dropped exactly once.
        unsafe { ptr::drop_in_place(ptr.add(i).as_ptr()) }
    }
    assert_eq!(
        *counter.borrow(),
        3,
        "Explicit destruction should drop each element exactly once."
    );

    // SAFETY: All elements have been destroyed; ptr matches the original allocation.
    unsafe { RawAlloc.deallocate(ptr, 3) }

    assert_eq!(
        *counter.borrow(),
        3,
        "Deallocation is purely a memory operation and must not drop elements."
    );
}

#[test]
fn test_zero_sized_requests() {
    let zero_count: NonNull<u64> = RawAlloc.allocate(0);
    assert_eq!(
        zero_count,
        NonNull::dangling(),
        "A zero-element request shouldn't allocate."
    );
    // SAFETY: Dangling allocations are recognised by count and never freed for real.
    unsafe { RawAlloc.deallocate(zero_count, 0) }

    let zst: NonNull<ZeroSizedType> = RawAlloc.allocate(100);
    assert_eq!(
        zst,
        NonNull::dangling(),
        "Zero-sized types shouldn't allocate regardless of count."
    );
    // SAFETY: As above; the layout size is 0 so nothing is passed to the system allocator.
    unsafe { RawAlloc.deallocate(zst, 100) }
}

#[test]
fn test_raw_buf_owns_storage() {
    let buf: RawBuf<u32> = RawBuf::with_cap(8);
    assert_eq!(buf.cap(), 8);

    for i in 0..8 {
        // SAFETY: index < cap and u32 slots can be written without construction concerns.
        unsafe { buf.slot(i).write(i as u32) }
    }
    for i in 0..8 {
        // SAFETY: Every slot was initialized above.
        assert_eq!(unsafe { buf.slot(i).read() }, i as u32);
    }

    // Dropping the buffer releases the storage; nothing to assert beyond not crashing, but
    // miri would flag a leak or double free here.
    drop(buf);

    let empty: RawBuf<u32> = RawBuf::new();
    assert_eq!(empty.cap(), 0);
    assert!(!empty.as_ptr().is_null());
}

#[test]
fn test_raw_buf_never_drops_elements() {
    let counter = CountedDrop::new(0);
    let buf: RawBuf<CountedDrop> = RawBuf::with_cap(4);

    // SAFETY: index < cap.
    unsafe { buf.slot(0).write(counter.clone()) }
    // Deliberately leak the one constructed value: RawBuf must not run destructors.
    drop(buf);

    assert_eq!(
        *counter.borrow(),
        0,
        "RawBuf should release storage without touching element lifetimes."
    );
}
