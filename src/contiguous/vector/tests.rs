#![cfg(test)]

use std::iter;
use std::mem;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_new_is_empty_without_storage() {
    let vec: Vector<u32> = Vector::new();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), 0);
    assert!(vec.is_empty());
}

#[test]
fn test_growth_policy() {
    let mut vec: Vector<u32> = Vector::new();
    vec.push(1);
    assert_eq!(
        vec.cap(),
        DEFAULT_CAP,
        "The first growth from no storage should use the default capacity."
    );

    let mut vec: Vector<u32> = Vector::with_cap(3);
    vec.extend([1, 2, 3]);
    vec.push(4);
    assert_eq!(vec.cap(), 6, "A full Vector should double its capacity.");
    assert_eq!(&*vec, &[1, 2, 3, 4]);
}

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    for i in 0..100 {
        vec.push(i);
        assert_eq!(vec.len(), i + 1);
    }
    for i in (0..100).rev() {
        assert_eq!(vec.pop(), Some(i));
    }
    assert_eq!(vec.pop(), None);
    assert!(
        vec.cap() >= 100,
        "Popping shouldn't release any capacity."
    );
}

#[test]
fn test_push_with_constructs_in_place() {
    let mut vec: Vector<String> = Vector::new();
    let built = vec.push_with(|| String::from("abc"));
    built.push('d');
    assert_eq!(&*vec, &[String::from("abcd")]);
}

#[test]
fn test_at_bounds_check() {
    let vec = Vector::repeat(0_u32, 1);
    assert_eq!(vec.at(0), Ok(&0));
    assert_eq!(
        vec.at(10),
        Err(crate::error::IndexOutOfBounds { index: 10, len: 1 })
    );

    let mut vec = vec;
    assert!(vec.at_mut(1).is_err());
    *vec.at_mut(0).expect("index 0 is in bounds") = 7;
    assert_eq!(vec[0], 7);
}

#[test]
fn test_insert_remove_index_consistency() {
    let mut vec: Vector<_> = (0..10).collect();
    assert_eq!(vec.remove(0), 0);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(vec.len(), 9);

    let mut vec = Vector::repeat(5, 3);
    vec.insert(0, 42);
    assert_eq!(&*vec, &[42, 5, 5, 5]);
    assert_eq!(vec.len(), 4);

    vec.insert(4, 1);
    assert_eq!(&*vec, &[42, 5, 5, 5, 1], "Insertion at len should append.");

    assert_panics!({
        let mut vec = Vector::repeat(5, 3);
        vec.insert(5, 0)
    });
    assert_panics!({
        let mut vec: Vector<u32> = Vector::new();
        vec.remove(0)
    });
}

#[test]
fn test_try_insert() {
    let mut vec = Vector::repeat(1_u8, 2);
    assert!(vec.try_insert(1, 9).is_ok());
    assert_eq!(&*vec, &[1, 9, 1]);

    let error = vec.try_insert(10, 0).expect_err("index 10 is out of bounds");
    assert!(error.is_index_out_of_bounds());
}

#[test]
fn test_insert_with() {
    let mut vec = Vector::from([String::from("a"), String::from("c")]);
    vec.insert_with(1, || String::from("b"));
    assert_eq!(
        &*vec,
        &[String::from("a"), String::from("b"), String::from("c")]
    );
}

#[test]
fn test_replace() {
    let mut vec = Vector::from([1_u8, 2, 3]);
    assert_eq!(vec.replace(1, 9), 2);
    assert_eq!(&*vec, &[1, 9, 3]);
}

#[test]
fn test_reserve_never_shrinks() {
    let mut vec = Vector::from([1_u8, 2, 3]);
    vec.reserve(100);
    assert_eq!(vec.cap(), 100);
    assert_eq!(&*vec, &[1, 2, 3], "Reallocation should preserve elements.");

    vec.reserve(10);
    assert_eq!(vec.cap(), 100);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3]);
}

#[test]
fn test_clear_preserves_capacity() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    let cap = vec.cap();

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap);
    assert_eq!(counter.take(), 5, "Clearing should drop every element.");
}

#[test]
fn test_resize_semantics() {
    let mut vec = Vector::with_cap(5);
    vec.extend([0_u32, 0, 0]);
    let cap = vec.cap();

    vec.resize(5, 0);
    assert_eq!(vec.len(), 5);
    assert_eq!(&*vec, &[0, 0, 0, 0, 0]);
    assert_eq!(vec.cap(), cap, "Growing within capacity shouldn't reallocate.");

    vec.resize(2, 0);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.cap(), cap, "Shrinking shouldn't release capacity.");

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    vec.resize_with(2, || counter.clone());
    assert_eq!(counter.take(), 3, "Resizing down should drop the excess.");
}

#[test]
fn test_clone_is_independent() {
    let vec = Vector::from([1_u32, 2, 3]);
    let mut clone = vec.clone();

    assert_eq!(clone, vec);
    assert_eq!(
        clone.cap(),
        vec.cap(),
        "A clone should reproduce the capacity."
    );

    clone.push(4);
    clone[0] = 100;
    assert_eq!(&*vec, &[1, 2, 3], "Mutating a clone shouldn't affect the original.");
}

#[test]
fn test_take_leaves_source_empty() {
    let mut vec = Vector::from([1_u32, 2, 3]);
    let taken = mem::take(&mut vec);

    assert_eq!(&*taken, &[1, 2, 3]);
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 0, "A moved-from Vector should hold no storage.");
}

#[test]
fn test_swap_with() {
    let mut a = Vector::from([1_u8, 2]);
    let mut b = Vector::with_cap(10);
    b.extend([3_u8, 4, 5]);

    a.swap_with(&mut b);
    assert_eq!(&*a, &[3, 4, 5]);
    assert_eq!(a.cap(), 10);
    assert_eq!(&*b, &[1, 2]);
}

#[test]
fn test_append() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    let other: Vector<_> = iter::repeat_with(|| counter.clone()).take(2).collect();

    vec.append(other);
    assert_eq!(vec.len(), 5);
    assert_eq!(
        counter.take(),
        0,
        "Appending moves elements; nothing should be dropped."
    );
}

#[test]
fn test_drop_destroys_all_elements() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_remove_drops_nothing_extra() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(4).collect();

    let removed = vec.remove(1);
    assert_eq!(counter.take(), 0, "The removed element is returned, not dropped.");
    drop(removed);
    assert_eq!(counter.take(), 1);
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_into_iter() {
    let mut iter = Vector::from([0_u32, 1, 2, 3, 4]).into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partly consumed iterator should still drop every element."
    );
}

#[test]
fn test_zst_support() {
    let mut vec: Vector<ZeroSizedType> = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec[99], ZeroSizedType);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.iter().count(), 99);
}

#[test]
fn test_comparison() {
    let a = Vector::from([1_u32, 2, 3]);
    let b = Vector::from([1_u32, 2, 4]);
    let c = Vector::from([1_u32, 2]);

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert!(a < b, "Ordering should be lexicographic.");
    assert!(c < a, "A prefix should order before the longer sequence.");
}

proptest! {
    #[test]
    fn prop_len_never_exceeds_cap(ops in proptest::collection::vec(0_u8..4, 0..64)) {
        let mut vec: Vector<u32> = Vector::new();

        for (i, op) in ops.iter().enumerate() {
            match op {
                0 => vec.push(i as u32),
                1 => { vec.pop(); },
                2 => vec.insert(vec.len() / 2, i as u32),
                _ => vec.reserve(i),
            }
            prop_assert!(vec.len() <= vec.cap());
        }
    }

    #[test]
    fn prop_capacity_is_monotonic(ops in proptest::collection::vec(0_u8..3, 0..64)) {
        let mut vec: Vector<u32> = Vector::new();
        let mut previous_cap = 0;

        for (i, op) in ops.iter().enumerate() {
            match op {
                0 => vec.push(i as u32),
                1 => vec.insert(vec.len() / 2, i as u32),
                _ => vec.reserve(i * 2),
            }
            prop_assert!(vec.cap() >= previous_cap);
            previous_cap = vec.cap();
        }
    }

    #[test]
    fn prop_doubling_from_full(len in 1_usize..128) {
        let mut vec: Vector<usize> = Vector::with_cap(len);
        for i in 0..len {
            vec.push(i);
        }

        vec.push(len);
        prop_assert_eq!(vec.cap(), len * 2);
    }
}
