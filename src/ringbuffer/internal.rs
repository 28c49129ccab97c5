use alloc::boxed::Box;
use std::cmp;
use std::mem::MaybeUninit;
use std::ptr;

use super::RingBuffer;
use crate::behavior::Behavior;
use crate::utils::*;

/// Allocates `capacity` uninitialized slots.
pub(crate) fn new_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

impl<T, B: Behavior> RingBuffer<T, B> {
    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.cap())
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.cap())
    }

    /// Maps a logical index onto its physical slot.
    ///
    /// Every read and write of a live element goes through here.
    #[inline]
    pub(crate) fn to_physical(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    /// Physical slot one past the last element.
    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.to_physical(self.len)
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline]
    pub(crate) fn ptr_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    #[inline]
    pub(crate) fn is_contiguous(&self) -> bool {
        self.head + self.len <= self.cap()
    }

    #[inline]
    pub(crate) unsafe fn buffer_read(&mut self, offset: usize) -> T {
        ptr::read(self.ptr().add(offset))
    }

    #[inline]
    pub(crate) unsafe fn buffer_write(&mut self, offset: usize, element: T) {
        ptr::write(self.ptr_mut().add(offset), element);
    }

    /// Copies a contiguous block of memory len long from src to dst
    #[inline]
    unsafe fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(dst + len <= self.cap(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.cap());
        debug_assert!(src + len <= self.cap(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.cap());
        let base = self.ptr_mut();
        ptr::copy(base.add(src), base.add(dst), len);
    }

    /// Copies a potentially wrapping block of memory len long from src to dest.
    /// (abs(dst - src) + len) must be no larger than the capacity (there must be
    /// at most one continuous overlapping region between src and dest).
    pub(crate) unsafe fn wrap_copy(&mut self, dst: usize, src: usize, len: usize) {
        let cap = self.cap();
        debug_assert!(cmp::min(dst.abs_diff(src), cap - dst.abs_diff(src)) + len <= cap,
                      "wrc dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      cap);

        if src == dst || len == 0 {
            return;
        }

        let dst_after_src = self.wrap_sub(dst, src) < len;

        let src_pre_wrap_len = cap - src;
        let dst_pre_wrap_len = cap - dst;
        let src_wraps = src_pre_wrap_len < len;
        let dst_wraps = dst_pre_wrap_len < len;

        match (dst_after_src, src_wraps, dst_wraps) {
            (_, false, false) => {
                //        S . . .
                // 1 [_ _ A A B B C C _]
                // 2 [_ _ A A A A B B _]
                //            D . . .
                self.copy(dst, src, len);
            }
            (false, false, true) => {
                //    S . . .
                // 1 [A A B B _ _ _ C C]
                // 2 [A A B B _ _ _ A A]
                // 3 [B B B B _ _ _ A A]
                //    . .           D .
                self.copy(dst, src, dst_pre_wrap_len);
                self.copy(0, src + dst_pre_wrap_len, len - dst_pre_wrap_len);
            }
            (true, false, true) => {
                //              S . . .
                // 1 [C C _ _ _ A A B B]
                // 2 [B B _ _ _ A A B B]
                // 3 [B B _ _ _ A A A A]
                //    . .           D .
                self.copy(0, src + dst_pre_wrap_len, len - dst_pre_wrap_len);
                self.copy(dst, src, dst_pre_wrap_len);
            }
            (false, true, false) => {
                //    . .           S .
                // 1 [C C _ _ _ A A B B]
                // 2 [C C _ _ _ B B B B]
                // 3 [C C _ _ _ B B C C]
                //              D . . .
                self.copy(dst, src, src_pre_wrap_len);
                self.copy(dst + src_pre_wrap_len, 0, len - src_pre_wrap_len);
            }
            (true, true, false) => {
                //    . .           S .
                // 1 [A A B B _ _ _ C C]
                // 2 [A A A A _ _ _ C C]
                // 3 [C C A A _ _ _ C C]
                //    D . . .
                self.copy(dst + src_pre_wrap_len, 0, len - src_pre_wrap_len);
                self.copy(dst, src, src_pre_wrap_len);
            }
            (false, true, true) => {
                //    . . .         S .
                // 1 [A B C D _ E F G H]
                // 2 [A B C D _ E G H H]
                // 3 [A B C D _ E G H A]
                // 4 [B C C D _ E G H A]
                //    . .         D . .
                debug_assert!(dst_pre_wrap_len > src_pre_wrap_len);
                let delta = dst_pre_wrap_len - src_pre_wrap_len;
                self.copy(dst, src, src_pre_wrap_len);
                self.copy(dst + src_pre_wrap_len, 0, delta);
                self.copy(0, delta, len - dst_pre_wrap_len);
            }
            (true, true, true) => {
                //    . .         S . .
                // 1 [A B C D _ E F G H]
                // 2 [A A B D _ E F G H]
                // 3 [H A B D _ E F G H]
                // 4 [H A B D _ E F F G]
                //    . . .         D .
                debug_assert!(src_pre_wrap_len > dst_pre_wrap_len);
                let delta = src_pre_wrap_len - dst_pre_wrap_len;
                self.copy(delta, 0, len - src_pre_wrap_len);
                self.copy(0, cap - delta, delta);
                self.copy(dst, src, dst_pre_wrap_len);
            }
        }
    }

    /// Moves every element into a fresh slot array of `new_capacity` slots,
    /// front element first at slot 0.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        assert!(new_capacity >= self.len && new_capacity > 0,
                "cannot reallocate {} elements into {} slots",
                self.len,
                new_capacity);

        let mut slots = new_slots::<T>(new_capacity);
        let dst = slots.as_mut_ptr() as *mut T;
        for i in 0..self.len {
            let src = self.to_physical(i);
            unsafe {
                ptr::write(dst.add(i), ptr::read(self.ptr().add(src)));
            }
        }

        trace!("ring buffer reallocated: {} -> {} slots, {} live",
               self.cap(),
               new_capacity,
               self.len);

        // the old slots are MaybeUninit, dropping them does not touch the moved values
        self.buf = slots;
        self.head = 0;
    }

    /// Doubles the number of slots.
    pub(crate) fn grow(&mut self) {
        let new_capacity = match self.cap().checked_mul(2) {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        };
        self.reallocate(new_capacity);
    }

    pub(crate) fn push_front_expecting_space_available(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let new_head = self.wrap_sub(self.head, 1);
        self.head = new_head;
        self.len += 1;
        unsafe { self.buffer_write(new_head, element) }
    }

    pub(crate) fn push_back_expecting_space_available(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let tail = self.tail();
        self.len += 1;
        unsafe { self.buffer_write(tail, element) }
    }

    pub(crate) fn insert_expecting_space_available(&mut self, index: usize, element: T) {
        debug_assert!(!self.is_full());
        assert!(index <= self.len, "index out of bounds");

        // Shift whichever side of `index` is shorter by one slot to open a gap.
        //
        // Key: H - self.head
        //      I - insertion point
        //      M - moved
        //
        // front side shorter:
        //
        //             H   I
        //      [. . . o o A o o o o . . . . . .]
        //           H
        //      [. . o o I A o o o o . . . . . .]
        //           M M
        //
        // back side shorter:
        //
        //             H       I
        //      [. . . o o o o A o o . . . . . .]
        //             H
        //      [. . . o o o o I A o o . . . . .]
        //                       M M M
        let distance_to_front = index;
        let distance_to_back = self.len - index;

        unsafe {
            if distance_to_front < distance_to_back {
                let old_head = self.head;
                let new_head = self.wrap_sub(old_head, 1);
                self.wrap_copy(new_head, old_head, distance_to_front);
                self.head = new_head;
            } else {
                let src = self.to_physical(index);
                let dst = self.wrap_add(src, 1);
                self.wrap_copy(dst, src, distance_to_back);
            }
            self.len += 1;

            // head might've been changed so we need to recalculate
            let idx = self.to_physical(index);
            self.buffer_write(idx, element);
        }
    }

    pub(crate) fn remove_existing(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);

        // Mirror of insertion: the shorter side closes over the hole.
        //
        //             H   R
        //      [. . . o o x o o o o . . . . . .]
        //               H
        //      [. . . . o o o o o o . . . . . .]
        //               M M
        let idx = self.to_physical(index);
        let elem = unsafe { self.buffer_read(idx) };

        let distance_to_front = index;
        let distance_to_back = self.len - index - 1;

        unsafe {
            if distance_to_front < distance_to_back {
                let old_head = self.head;
                let new_head = self.wrap_add(old_head, 1);
                self.wrap_copy(new_head, old_head, distance_to_front);
                self.head = new_head;
            } else {
                let src = self.wrap_add(idx, 1);
                self.wrap_copy(idx, src, distance_to_back);
            }
        }
        self.len -= 1;

        elem
    }
}
