//! A ring buffer whose capacity is chosen at run time.
//!
//! This queue has `O(1)` amortized inserts and removals from both ends of the
//! container. It also has `O(1)` indexing like a vector. The contained elements
//! are not required to be copyable.
//!
//! What happens when a full buffer is written to is part of its type:
//!
//! - [`Growing`](struct.Growing.html) (the default) doubles the capacity and
//!   keeps every element.
//! - [`Wrapping`](struct.Wrapping.html) keeps the capacity and overwrites the
//!   element at the opposite end, handing it back to the caller.
//!
//! # Feature Flags
//! The **ringbuf-deque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringbuf-deque = "0.1"
//! ```
//!
//! # Examples
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buffer: RingBuffer<_> = RingBuffer::new(2);
//! assert_eq!(buffer.capacity(), 2);
//! assert_eq!(buffer.len(), 0);
//!
//! buffer.push_back(1);
//! buffer.push_back(2);
//! buffer.push_back(3);
//! assert_eq!(buffer.len(), 3);
//! assert_eq!(buffer.capacity(), 4);
//!
//! assert_eq!(buffer.pop_front(), Some(1));
//! assert_eq!(buffer.pop_front(), Some(2));
//! assert_eq!(buffer.pop_front(), Some(3));
//! assert_eq!(buffer.pop_front(), None);
//! ```
//!
//! # Wrapping
//! ```
//! use ringbuf_deque::{RingBuffer, Wrapping};
//!
//! let mut buffer: RingBuffer<_, Wrapping> = RingBuffer::new(5);
//! buffer.extend(0..10);
//!
//! assert_eq!(format!("{:?}", buffer), "[5, 6, 7, 8, 9]");
//! ```
//!
//! # Insert & Remove
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buffer: RingBuffer<_> = RingBuffer::new(8);
//!
//! buffer.push_back(11);
//! buffer.push_back(13);
//! buffer.insert(1, 12);
//! buffer.remove(0);
//!
//! assert_eq!(buffer[0], 12);
//! assert_eq!(buffer[1], 13);
//! ```
//!
//! # Cursors & Sorting
//! ```
//! use ringbuf_deque::RingBuffer;
//!
//! let mut buffer: RingBuffer<_> = RingBuffer::new(5);
//! for i in 0..6 {
//!     buffer.push_front(i);
//! }
//! assert_eq!(buffer, vec![5, 4, 3, 2, 1, 0]);
//!
//! let found = buffer.iter().position(|&x| x == 1).map(|i| buffer.cursor(i));
//! assert_eq!(found.and_then(|c| c.get()), Some(&1));
//!
//! buffer.sort();
//! assert_eq!(buffer, vec![0, 1, 2, 3, 4, 5]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

extern crate alloc;
#[macro_use]
extern crate log;

pub use odds::IndexRange as RangeArgument;

mod behavior;
mod cursor;
pub mod error;
mod ringbuffer;
mod utils;

pub use crate::behavior::{Behavior, Growing, Wrapping};
pub use crate::cursor::Cursor;
pub use crate::error::{CapacityError, ZeroCapacityError};
pub use crate::ringbuffer::{Drain, IntoIter, Iter, IterMut, RingBuffer};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::vec::Vec;

    struct Bump<'a>(&'a Cell<i32>);

    impl<'a> Drop for Bump<'a> {
        fn drop(&mut self) {
            let n = self.0.get();
            self.0.set(n + 1);
        }
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(RingBuffer::<u8, Wrapping>::try_new(0).err(), Some(ZeroCapacityError));
        assert_eq!(RingBuffer::<u8, Growing>::try_new(0).err(), Some(ZeroCapacityError));
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_panics() {
        let _: RingBuffer<u8> = RingBuffer::new(0);
    }

    #[test]
    fn any_simple() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(7);
                assert_eq!(tester.capacity(), 7);
                assert_eq!(tester.len(), 0);

                tester.push_back(1);
                tester.push_back(2);
                tester.push_back(3);
                tester.push_back(4);
                assert_eq!(tester.len(), 4);

                assert_eq!(tester.pop_front(), Some(1));
                assert_eq!(tester.pop_front(), Some(2));
                assert_eq!(tester.len(), 2);
                assert_eq!(tester.pop_front(), Some(3));
                assert_eq!(tester.pop_front(), Some(4));
                assert_eq!(tester.pop_front(), None);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_simple_reversely() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(7);

                tester.push_front(1);
                tester.push_front(2);
                tester.push_front(3);
                tester.push_front(4);
                assert_eq!(tester.len(), 4);
                assert_eq!(tester, vec![4, 3, 2, 1]);
                assert_eq!(tester.pop_back(), Some(1));
                assert_eq!(tester.pop_back(), Some(2));
                assert_eq!(tester.len(), 2);
                assert_eq!(tester.pop_back(), Some(3));
                assert_eq!(tester.pop_back(), Some(4));
                assert_eq!(tester.pop_back(), None);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_push_back_then_index_in_order() {
        macro_rules! test {
            ($behavior:ident) => ({
                const CAP: usize = 6;
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(CAP);
                for padding in 0..CAP {
                    for n in 0..CAP + 1 {
                        tester.clear();
                        tester.set_head(padding);
                        for i in 0..n {
                            tester.push_back(i);
                        }
                        for i in 0..n {
                            assert_eq!(tester[i], i);
                        }
                        assert!(tester.len() <= tester.capacity());
                        assert!(tester.head() < tester.capacity());
                        assert!(tester.tail_slot() < tester.capacity());
                    }
                }
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn wrapping_overflow() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(2);
        assert_eq!(tester.push_back(1), None);
        assert_eq!(tester.push_back(2), None);
        assert_eq!(tester.push_back(3), Some(1));
        assert!(tester.is_full());
        assert_eq!(tester.head(), tester.tail_slot());
    }

    #[test]
    fn wrapping_keeps_last_capacity_elements() {
        for k in 1..6 {
            for m in 0..12 {
                let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(k);
                for i in 0..k + m {
                    tester.push_back(i);
                }
                let expected: Vec<_> = (m..k + m).collect();
                assert_eq!(tester, expected);
                assert_eq!(tester.capacity(), k);
            }
        }
    }

    #[test]
    fn wrapping_push_front_drops_back() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(3);
        assert_eq!(tester.push_front(1), None);
        assert_eq!(tester.push_front(2), None);
        assert_eq!(tester.push_front(3), None);
        assert_eq!(tester.push_front(4), Some(1));
        assert_eq!(tester, vec![4, 3, 2]);
    }

    #[test]
    fn wrapping_sorts_descending() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(5);
        for i in 0..10 {
            tester.push_back(i);
        }
        assert_eq!(tester, vec![5, 6, 7, 8, 9]);

        tester.sort_by(|a, b| b.cmp(a));
        assert_eq!(tester, vec![9, 8, 7, 6, 5]);
        assert_eq!(tester.capacity(), 5);
    }

    #[test]
    fn growing_push_front_doubles() {
        let mut tester: RingBuffer<_, Growing> = RingBuffer::new(5);
        for i in 0..6 {
            tester.push_front(i);
        }
        assert_eq!(tester, vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(tester.capacity(), 10);
        assert!(tester.iter().any(|&x| x == 1));
        assert_eq!(tester.iter().find(|&&x| x == 1), Some(&1));
    }

    #[test]
    fn growing_never_loses_elements() {
        const CAP: usize = 4;
        for padding in 0..CAP {
            let mut tester: RingBuffer<_, Growing> = RingBuffer::new(CAP);
            tester.set_head(padding);
            let mut expected = std::collections::VecDeque::new();
            for i in 0..40 {
                if i % 3 == 0 {
                    tester.push_front(i);
                    expected.push_front(i);
                } else {
                    tester.push_back(i);
                    expected.push_back(i);
                }
                assert!(tester.iter().eq(expected.iter()));
            }
            assert_eq!(tester.capacity(), 64);
            assert!(tester.head() < tester.capacity());
        }
    }

    #[test]
    fn growing_reserve_and_shrink() {
        let mut tester: RingBuffer<_, Growing> = RingBuffer::new(3);
        tester.set_head(2);
        tester.extend(vec![1, 2, 3]);
        tester.reserve(1);
        assert_eq!(tester.capacity(), 6);
        assert_eq!(tester, vec![1, 2, 3]);

        tester.reserve(0);
        assert_eq!(tester.capacity(), 6);

        tester.shrink_to_fit();
        assert_eq!(tester.capacity(), 3);
        assert_eq!(tester, vec![1, 2, 3]);

        tester.clear();
        tester.shrink_to_fit();
        assert_eq!(tester.capacity(), 1);
    }

    #[test]
    fn any_pop_empty() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(3);
                tester.push_back(1);
                assert_eq!(tester.pop_front(), Some(1));
                assert_eq!(tester.is_empty(), true);
                assert_eq!(tester.len(), 0);
                assert_eq!(tester.pop_front(), None);
                assert_eq!(tester.pop_back(), None);
                assert_eq!(tester.remove(0), None);
                assert_eq!(tester.front(), None);
                assert_eq!(tester.back(), None);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_index() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(3);
                tester.push_back(1);
                tester.push_back(2);
                tester.push_back(3);
                assert_eq!(tester[0], 1);
                // pop_front 1 <- [2, 3]
                assert_eq!(tester.pop_front(), Some(1));
                assert_eq!(tester[0], 2);
                assert_eq!(tester.len(), 2);
                // push_front 0 -> [0, 2, 3]
                tester.push_front(0);
                assert_eq!(tester[0], 0);
                // [0, 2] -> 3 pop_back
                assert_eq!(tester.pop_back(), Some(3));
                assert_eq!(tester[1], 2);
                tester[1] = 7;
                assert_eq!(tester.back(), Some(&7));
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn any_index_overflow() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(4);
        tester.push_back(1);
        tester.push_back(2);
        let _ = tester[2];
    }

    #[test]
    fn any_iter() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(2);
                tester.push_back(1);
                tester.push_back(2);
                {
                    let mut iter = tester.iter();
                    assert_eq!(iter.size_hint(), (2, Some(2)));
                    assert_eq!(iter.next(), Some(&1));
                    assert_eq!(iter.next(), Some(&2));
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.size_hint(), (0, Some(0)));
                }
                tester.pop_front();
                tester.push_back(3);
                {
                    let mut iter = (&tester).into_iter();
                    assert_eq!(iter.next(), Some(&2));

                    // test clone
                    let mut iter2 = iter.clone();
                    assert_eq!(iter.next(), Some(&3));
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter2.next(), Some(&3));
                    assert_eq!(iter2.next(), None);
                }
                {
                    let rev: Vec<_> = tester.iter().rev().collect();
                    assert_eq!(rev, vec![&3, &2]);
                }
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_iter_mut() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(2);
                tester.push_back(1);
                tester.push_back(2);
                tester.pop_front();
                tester.push_back(3);
                {
                    let mut iter = (&mut tester).into_iter();
                    assert_eq!(iter.size_hint(), (2, Some(2)));
                    assert_eq!(iter.next(), Some(&mut 2));
                    assert_eq!(iter.next(), Some(&mut 3));
                    assert_eq!(iter.next(), None);
                }
                {
                    // mutation
                    let mut iter = tester.iter_mut();
                    if let Some(n) = iter.next() {
                        *n += 1;
                    }
                    if let Some(n) = iter.next_back() {
                        *n += 2;
                    }
                }
                assert_eq!(tester[0], 3);
                assert_eq!(tester[1], 5);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_into_iter() {
        #[derive(Eq, PartialEq, Debug)]
        struct NoCopy<T>(T);

        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<NoCopy<u8>, $behavior> = RingBuffer::new(2);
                tester.push_back(NoCopy(1));
                tester.push_back(NoCopy(2));
                tester.pop_front();
                tester.push_back(NoCopy(3));
                let mut iter = tester.into_iter();
                assert_eq!(iter.size_hint(), (2, Some(2)));
                assert_eq!(iter.next_back(), Some(NoCopy(3)));
                assert_eq!(iter.next(), Some(NoCopy(2)));
                assert_eq!(iter.next(), None);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_drain() {
        macro_rules! test {
            ($behavior:ident) => ({
                const CAP: usize = 7;
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(CAP);

                for padding in 0..CAP {
                    for drain_start in 0..CAP {
                        for drain_end in drain_start..CAP {
                            tester.clear();
                            tester.set_head(padding);
                            for i in 0..CAP {
                                tester.push_back(i);
                            }

                            let mut expected = vec![0, 1, 2, 3, 4, 5, 6];
                            let drains: Vec<_> = tester.drain(drain_start..drain_end).collect();
                            let expected_drains: Vec<_> = expected.drain(drain_start..drain_end).collect();
                            assert_eq!(drains, expected_drains);
                            assert_eq!(tester, expected);
                        }
                    }
                }
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn drain_from_back() {
        let mut tester: RingBuffer<_> = (0..6).collect();
        {
            let mut drain = tester.drain(1..5);
            assert_eq!(drain.next_back(), Some(4));
            assert_eq!(drain.next(), Some(1));
            assert_eq!(drain.len(), 2);
        }
        assert_eq!(tester, vec![0, 5]);
    }

    #[test]
    fn any_drop() {
        macro_rules! test {
            ($behavior:ident) => ({
                let flag = &Cell::new(0);
                {
                    let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(3);
                    tester.set_head(2);
                    tester.push_back(Bump(flag));
                    tester.push_back(Bump(flag));
                    tester.push_back(Bump(flag));
                    drop(tester.remove(1));
                    assert_eq!(flag.get(), 1);
                    tester.drain(..1);
                    assert_eq!(flag.get(), 2);
                }
                assert_eq!(flag.get(), 3);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn wrapping_drop_on_overwrite() {
        let flag = &Cell::new(0);
        {
            let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(2);
            for _ in 0..5 {
                drop(tester.push_back(Bump(flag)));
            }
            assert_eq!(flag.get(), 3);
            drop(tester.push_front(Bump(flag)));
            assert_eq!(flag.get(), 4);
        }
        assert_eq!(flag.get(), 6);
    }

    #[test]
    fn growing_drop_after_growth() {
        let flag = &Cell::new(0);
        {
            let mut tester: RingBuffer<_, Growing> = RingBuffer::new(1);
            for _ in 0..9 {
                tester.push_front(Bump(flag));
            }
            assert_eq!(tester.capacity(), 16);
            assert_eq!(flag.get(), 0);
        }
        assert_eq!(flag.get(), 9);
    }

    #[test]
    fn any_as_slices() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(4);
                tester.set_head(3);
                tester.push_back(1);
                tester.push_back(2);
                tester.push_back(3);
                assert_eq!(tester.as_slices(), (&[1][..], &[2, 3][..]));
                assert_eq!(tester.make_contiguous(), &mut [1, 2, 3][..]);
                assert_eq!(tester.as_slices(), (&[1, 2, 3][..], &[][..]));
                assert_eq!(tester.head(), 0);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_partial_equal() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut a: RingBuffer<_, $behavior> = RingBuffer::new(4);
                let mut b: RingBuffer<_, $behavior> = RingBuffer::new(6);
                a.set_head(3);
                for i in 0..3 {
                    a.push_back(i);
                    b.push_back(i);
                }
                assert_eq!(a, b);
                b.push_back(3);
                assert!(a != b);
                assert!(a < b);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_fmt() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(3);
        tester.extend(vec![1, 2, 3, 4]);
        assert_eq!(format!("{:?}", tester), "[2, 3, 4]");
    }

    #[test]
    fn any_swap_front_back_remove() {
        macro_rules! test {
            ($behavior:ident) => ({
                const CAP: usize = 6;
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(CAP);
                for padding in 0..CAP {
                    for len in 1..CAP + 1 {
                        for index in 0..len {
                            let mut expected: std::collections::VecDeque<_> = (0..len).collect();

                            tester.clear();
                            tester.set_head(padding);
                            tester.extend(0..len);
                            assert_eq!(tester.swap_remove_back(index), expected.swap_remove_back(index));
                            assert!(tester.iter().eq(expected.iter()));

                            tester.clear();
                            tester.set_head(padding);
                            tester.extend(0..len);
                            expected = (0..len).collect();
                            assert_eq!(tester.swap_remove_front(index), expected.swap_remove_front(index));
                            assert!(tester.iter().eq(expected.iter()));
                        }
                        assert_eq!(tester.swap_remove_back(len), None);
                        assert_eq!(tester.swap_remove_front(len), None);
                    }
                }
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_retain() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(5);
                tester.set_head(3);
                for i in 0..5 {
                    tester.push_back(i);
                }
                tester.retain(|&x| x % 2 == 0);
                assert_eq!(tester, vec![0, 2, 4]);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn any_truncate() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(4);
                for i in 0..4 {
                    tester.push_back(i);
                }
                tester.truncate(6);
                assert_eq!(tester.len(), 4);
                tester.truncate(1);
                assert_eq!(tester, vec![0]);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn wrapping_insert() {
        const CAP: usize = 8;
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(CAP);

        // len is the length *after* insertion
        for len in 1..CAP + 1 {
            // 0, 1, 2, .., len - 1
            let expected: Vec<_> = (0..).take(len).collect();
            for padding in 0..CAP {
                for to_insert in 0..len {
                    tester.clear();
                    tester.set_head(padding);
                    for i in 0..len {
                        if i != to_insert {
                            tester.push_back(i);
                        }
                    }
                    assert!(tester.insert(to_insert, to_insert).is_ok());
                    assert!(tester.head() < CAP);
                    assert!(tester.tail_slot() < CAP);
                    assert_eq!(tester[to_insert], to_insert);
                    assert_eq!(tester, expected);
                }
            }
        }
    }

    #[test]
    fn wrapping_insert_into_full_is_noop() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(3);
        tester.extend(vec![1, 3, 0]);
        let err = tester.insert(1, 2).unwrap_err();
        assert_eq!(err.element, 2);
        assert_eq!(tester, vec![1, 3, 0]);
        assert_eq!(tester.capacity(), 3);
    }

    #[test]
    fn growing_insert() {
        const CAP: usize = 8;

        for len in 1..CAP + 2 {
            let expected: Vec<_> = (0..).take(len).collect();
            for padding in 0..CAP {
                for to_insert in 0..len {
                    let mut tester: RingBuffer<_, Growing> = RingBuffer::new(CAP);
                    tester.set_head(padding);
                    for i in 0..len {
                        if i != to_insert {
                            tester.push_back(i);
                        }
                    }
                    tester.insert(to_insert, to_insert);
                    assert_eq!(tester, expected);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn insert_past_len_panics() {
        let mut tester: RingBuffer<i32> = RingBuffer::new(4);
        tester.push_back(1);
        tester.insert(2, 5);
    }

    #[test]
    fn any_remove() {
        macro_rules! test {
            ($behavior:ident) => ({
                const CAP: usize = 8;
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(CAP);

                // len is the length *after* removal
                for len in 0..CAP {
                    // 0, 1, 2, .., len - 1
                    let expected: Vec<_> = (0..).take(len).collect();
                    for padding in 0..CAP {
                        for to_remove in 0..len + 1 {
                            tester.clear();
                            tester.set_head(padding);
                            for i in 0..len {
                                if i == to_remove {
                                    tester.push_back(1234);
                                }
                                tester.push_back(i);
                            }
                            if to_remove == len {
                                tester.push_back(1234);
                            }
                            assert_eq!(tester.remove(to_remove), Some(1234));
                            assert!(tester.head() < CAP);
                            assert!(tester.tail_slot() < CAP);
                            assert_eq!(tester, expected);
                        }
                    }
                }
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn insert_then_remove_restores() {
        let mut tester: RingBuffer<_, Wrapping> = RingBuffer::new(6);
        tester.set_head(4);
        tester.extend(vec![10, 20, 30, 40]);
        for p in 0..5 {
            assert!(tester.insert(p, 99).is_ok());
            assert_eq!(tester[p], 99);
            assert_eq!(tester.len(), 5);
            assert_eq!(tester.remove(p), Some(99));
            assert_eq!(tester, vec![10, 20, 30, 40]);
        }
    }

    #[test]
    fn any_clone() {
        macro_rules! test {
            ($behavior:ident) => ({
                let mut tester: RingBuffer<_, $behavior> = RingBuffer::new(16);
                tester.set_head(9);
                for i in 0..16 {
                    tester.push_back(i);
                }
                let cloned = tester.clone();
                assert_eq!(tester, cloned);
                assert_eq!(cloned.capacity(), 16);
            })
        }

        test!(Wrapping);
        test!(Growing);
    }

    #[test]
    fn behavior_conversions() {
        let mut growing: RingBuffer<_> = RingBuffer::new(2);
        growing.push_back(1);
        growing.push_back(2);

        let mut wrapping = growing.wrapping();
        assert_eq!(wrapping.push_back(3), Some(1));
        assert_eq!(wrapping, vec![2, 3]);

        let mut growing = wrapping.growing();
        growing.push_back(4);
        assert_eq!(growing, vec![2, 3, 4]);
        assert_eq!(growing.capacity(), 4);
    }

    #[test]
    fn default_capacity() {
        let tester: RingBuffer<u8, Wrapping> = Default::default();
        assert_eq!(tester.capacity(), 8);
        assert!(tester.is_empty());
    }

    #[test]
    fn zero_sized_elements() {
        let mut tester: RingBuffer<(), Growing> = RingBuffer::new(2);
        for _ in 0..5 {
            tester.push_back(());
        }
        assert_eq!(tester.len(), 5);
        assert_eq!(tester.iter().count(), 5);
        assert_eq!(tester.pop_front(), Some(()));
    }
}
