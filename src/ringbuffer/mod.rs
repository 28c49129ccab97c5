use alloc::boxed::Box;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ptr::NonNull;
use std::slice;

use crate::behavior::{Behavior, Growing, Wrapping};
use crate::error::{CapacityError, ZeroCapacityError};
use crate::RangeArgument;

mod internal;
mod iterator_impls;
mod trait_impls;

/// Capacity used by `RingBuffer::default()`.
pub(crate) const DEFAULT_CAPACITY: usize = 8;

/// A ring buffer whose capacity is chosen at run time.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto
/// the back in this manner, and iterating over `RingBuffer` goes front to back.
///
/// What happens when a full buffer is written to is decided by `B`:
/// [`Growing`](struct.Growing.html) (the default) doubles the capacity,
/// [`Wrapping`](struct.Wrapping.html) overwrites the element at the other end.
///
/// # Capacity
///
/// Unlike many ring buffers every slot is usable: a buffer created with
/// capacity `n` holds `n` elements before it is full.
pub struct RingBuffer<T, B: Behavior = Growing> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    len: usize,
    phantom: PhantomData<B>,
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [MaybeUninit<T>],
    front: usize,
    len: usize,
}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    ring: &'a mut [MaybeUninit<T>],
    front: usize,
    len: usize,
}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T, B: Behavior> {
    inner: RingBuffer<T, B>,
}

/// A draining `RingBuffer` iterator
pub struct Drain<'a, T: 'a, B: Behavior + 'a> {
    deque: NonNull<RingBuffer<T, B>>,
    // logical bounds of the elements still to be yielded
    front: usize,
    back: usize,
    drain_start: usize,
    drain_end: usize,
    orig_len: usize,
    phantom: PhantomData<&'a mut RingBuffer<T, B>>,
}

impl<T, B: Behavior> RingBuffer<T, B> {
    /// Creates an empty `RingBuffer` with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](#method.try_new) to get
    /// an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let buffer: RingBuffer<usize> = RingBuffer::new(3);
    /// assert_eq!(buffer.capacity(), 3);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates an empty `RingBuffer`, or fails if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, ZeroCapacityError};
    ///
    /// assert!(RingBuffer::<u8>::try_new(4).is_ok());
    /// assert_eq!(RingBuffer::<u8>::try_new(0).err(), Some(ZeroCapacityError));
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ZeroCapacityError> {
        if capacity == 0 {
            return Err(ZeroCapacityError);
        }
        Ok(RingBuffer {
            buf: internal::new_slots(capacity),
            head: 0,
            len: 0,
            phantom: PhantomData,
        })
    }

    /// Retrieves an element in the `RingBuffer` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    /// buffer.push_back(5);
    /// assert_eq!(buffer.get(1), Some(&4));
    /// assert_eq!(buffer.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.to_physical(index);
            unsafe { Some(&*self.ptr().add(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingBuffer` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    /// if let Some(elem) = buffer.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(buffer[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.to_physical(index);
            unsafe { Some(&mut *self.ptr_mut().add(idx)) }
        } else {
            None
        }
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    ///
    /// Panics if there is no element with either index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    /// buffer.push_back(5);
    /// buffer.swap(0, 2);
    /// assert_eq!(buffer[0], 5);
    /// assert_eq!(buffer[2], 3);
    /// ```
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len);
        assert!(j < self.len);
        let ri = self.to_physical(i);
        let rj = self.to_physical(j);
        self.buf.swap(ri, rj);
    }

    /// Returns the number of elements the buffer can hold before it
    /// wraps or grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let buffer: RingBuffer<usize> = RingBuffer::new(4);
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap()
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(5);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buffer.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &self.buf,
            front: self.head,
            len: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(5);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    /// for num in buffer.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 3, &mut 1, &mut 2];
    /// assert_eq!(&buffer.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.head,
            len: self.len,
            ring: &mut self.buf,
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(6);
    ///
    /// buffer.push_back(0);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    ///
    /// assert_eq!(buffer.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// buffer.push_front(10);
    /// buffer.push_front(9);
    ///
    /// assert_eq!(buffer.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = self.first_run_len();
        unsafe {
            let first = slice::from_raw_parts(self.ptr().add(self.head), first_len);
            let second = slice::from_raw_parts(self.ptr(), self.len - first_len);
            (first, second)
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    ///
    /// buffer.push_back(0);
    /// buffer.push_back(1);
    ///
    /// buffer.push_front(10);
    /// buffer.push_front(9);
    ///
    /// buffer.as_mut_slices().0[0] = 42;
    /// buffer.as_mut_slices().1[0] = 24;
    /// assert_eq!(buffer.as_slices(), (&[42, 10][..], &[24, 1][..]));
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first_len = self.first_run_len();
        let head = self.head;
        let second_len = self.len - first_len;
        let ptr = self.ptr_mut();
        // [head, head + first_len) and [0, second_len) never overlap since len <= capacity
        unsafe {
            let first = slice::from_raw_parts_mut(ptr.add(head), first_len);
            let second = slice::from_raw_parts_mut(ptr, second_len);
            (first, second)
        }
    }

    #[inline]
    fn first_run_len(&self) -> usize {
        if self.is_contiguous() {
            self.len
        } else {
            self.cap() - self.head
        }
    }

    /// Rearranges the storage so the contents occupy one slice, front first,
    /// and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// buffer.push_front(1);
    ///
    /// assert_eq!(buffer.make_contiguous(), &mut [1, 2, 3][..]);
    /// assert_eq!(buffer.as_slices(), (&[1, 2, 3][..], &[][..]));
    /// ```
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if !self.is_contiguous() {
            let head = self.head;
            self.buf.rotate_left(head);
            self.head = 0;
        }
        let (first, second) = self.as_mut_slices();
        debug_assert!(second.is_empty());
        first
    }

    /// Sorts the buffer in place, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, Wrapping};
    ///
    /// let mut buffer: RingBuffer<_, Wrapping> = RingBuffer::new(5);
    /// buffer.extend(0..10);
    /// buffer.sort_by(|a, b| b.cmp(a));
    ///
    /// assert_eq!(buffer, vec![9, 8, 7, 6, 5]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
        where F: FnMut(&T, &T) -> std::cmp::Ordering
    {
        self.make_contiguous().sort_by(compare);
    }

    /// Sorts the buffer in ascending order.
    pub fn sort(&mut self)
        where T: Ord
    {
        self.make_contiguous().sort();
    }

    /// Sorts the buffer with a key extraction function.
    pub fn sort_by_key<K, F>(&mut self, f: F)
        where F: FnMut(&T) -> K,
              K: Ord
    {
        self.make_contiguous().sort_by_key(f);
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut v: RingBuffer<_> = RingBuffer::new(4);
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut v: RingBuffer<_> = RingBuffer::new(4);
    /// assert!(v.is_empty());
    /// v.push_front(1);
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(1);
    ///
    /// assert!(!buffer.is_full());
    ///
    /// buffer.push_back(1);
    ///
    /// assert!(buffer.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Create a draining iterator that removes the specified range in the
    /// `RingBuffer` and yields the removed items.
    ///
    /// Note 1: The element range is removed even if the iterator is not
    /// consumed until the end.
    ///
    /// Note 2: It is unspecified how many elements are removed from the buffer,
    /// if the `Drain` value is not dropped, but the borrow it holds expires
    /// (eg. due to mem::forget).
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// let drain1: Vec<_> = buffer.drain(2..).collect();
    /// assert_eq!(drain1, vec![3]);
    ///
    /// // A full range clears all contents
    /// let drain2: Vec<_> = buffer.drain(..).collect();
    /// assert_eq!(drain2, vec![1, 2]);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, B>
        where R: RangeArgument<usize>
    {
        let len = self.len;
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Only the part before the range stays owned by the buffer until the
        // `Drain` is dropped.
        self.len = start;

        Drain {
            deque: NonNull::from(&mut *self),
            front: start,
            back: end,
            drain_start: start,
            drain_end: end,
            orig_len: len,
            phantom: PhantomData,
        }
    }

    /// Clears the buffer, removing all values.
    ///
    /// The capacity is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut v: RingBuffer<_> = RingBuffer::new(4);
    /// v.push_back(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.drain(..);
    }

    /// Shortens the buffer to `len` elements, dropping the rest from the back.
    ///
    /// Does nothing if the buffer is already shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = (0..5).collect();
    /// buffer.truncate(2);
    /// assert_eq!(buffer, vec![0, 1]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop_back();
        }
    }

    /// Returns `true` if the `RingBuffer` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(3);
    ///
    /// buffer.push_back(0);
    /// buffer.push_back(1);
    ///
    /// assert_eq!(buffer.contains(&1), true);
    /// assert_eq!(buffer.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq<T>
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Provides a reference to the front element, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(3);
    /// assert_eq!(buffer.front(), None);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// assert_eq!(buffer.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// buffer is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(3);
    /// assert_eq!(buffer.back(), None);
    ///
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// assert_eq!(buffer.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if !self.is_empty() {
            self.get(self.len - 1)
        } else {
            None
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// if let Some(x) = buffer.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(buffer.back(), Some(&9));
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let len = self.len;
        if !self.is_empty() {
            self.get_mut(len - 1)
        } else {
            None
        }
    }

    /// Removes an element from anywhere in the `RingBuffer` and returns it,
    /// replacing it with the last element.
    ///
    /// This does not preserve ordering, but is O(1).
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// assert_eq!(buffer.swap_remove_back(0), None);
    /// buffer.extend(vec![1, 2, 3]);
    ///
    /// assert_eq!(buffer.swap_remove_back(0), Some(1));
    /// assert_eq!(buffer, vec![3, 2]);
    /// ```
    pub fn swap_remove_back(&mut self, index: usize) -> Option<T> {
        let length = self.len;
        if length > 0 && index < length - 1 {
            self.swap(index, length - 1);
        } else if index >= length {
            return None;
        }
        self.pop_back()
    }

    /// Removes an element from anywhere in the `RingBuffer` and returns it,
    /// replacing it with the first element.
    ///
    /// This does not preserve ordering, but is O(1).
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// assert_eq!(buffer.swap_remove_front(0), None);
    /// buffer.extend(vec![1, 2, 3]);
    ///
    /// assert_eq!(buffer.swap_remove_front(2), Some(3));
    /// assert_eq!(buffer, vec![2, 1]);
    /// ```
    pub fn swap_remove_front(&mut self, index: usize) -> Option<T> {
        let length = self.len;
        if length > 0 && index < length && index != 0 {
            self.swap(index, 0);
        } else if index >= length {
            return None;
        }
        self.pop_front()
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns false.
    /// This method operates in place and preserves the order of the retained
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(5);
    /// buffer.extend(1..5);
    /// buffer.retain(|&x| x % 2 == 0);
    ///
    /// assert_eq!(buffer, vec![2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
        where F: FnMut(&T) -> bool
    {
        let len = self.len;
        let mut del = 0;
        for i in 0..len {
            if !f(&self[i]) {
                del += 1;
            } else if del > 0 {
                self.swap(i - del, i);
            }
        }
        if del > 0 {
            self.truncate(len - del);
        }
    }

    /// Removes the first element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    ///
    /// assert_eq!(buffer.pop_front(), Some(1));
    /// assert_eq!(buffer.pop_front(), Some(2));
    /// assert_eq!(buffer.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head;
        self.head = self.wrap_add(head, 1);
        self.len -= 1;
        unsafe { Some(self.buffer_read(head)) }
    }

    /// Removes the last element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(3);
    /// assert_eq!(buffer.pop_back(), None);
    /// buffer.push_back(1);
    /// buffer.push_back(3);
    /// assert_eq!(buffer.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let tail = self.tail();
        unsafe { Some(self.buffer_read(tail)) }
    }

    /// Removes and returns the element at `index` from the `RingBuffer`.
    /// Whichever end is closer to the removal point will be moved to close
    /// the gap. Returns `None` if `index` is out of bounds.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(4);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    ///
    /// assert_eq!(buffer.remove(1), Some(2));
    /// assert_eq!(buffer.get(1), Some(&3));
    /// assert_eq!(buffer.remove(5), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        Some(self.remove_existing(index))
    }

    /// Moves the contents into a buffer of another behavior, keeping the
    /// storage as it is.
    fn into_behavior<C: Behavior>(self) -> RingBuffer<T, C> {
        let mut this = ManuallyDrop::new(self);
        let buf = mem::replace(&mut this.buf, internal::new_slots(0));
        RingBuffer {
            buf,
            head: this.head,
            len: this.len,
            phantom: PhantomData,
        }
    }
}

impl<T> RingBuffer<T, Growing> {
    /// Converts `self` into a `RingBuffer<T, Wrapping>` of the same capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(2);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    ///
    /// let mut wrapping = buffer.wrapping();
    /// assert_eq!(wrapping.push_back(3), Some(1));
    /// ```
    pub fn wrapping(self) -> RingBuffer<T, Wrapping> {
        self.into_behavior()
    }

    /// Adds an element to the front of the buffer, doubling the capacity
    /// first if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _] => [1, _]
    /// 2 -(+)-> [1, _] => [2, 1]
    /// 3 -(+)-> [2, 1] => [3, 2, 1, _]
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, Growing};
    ///
    /// let mut buffer: RingBuffer<_, Growing> = RingBuffer::new(2);
    /// buffer.push_front(1);
    /// buffer.push_front(2);
    /// buffer.push_front(3);
    ///
    /// assert_eq!(buffer, vec![3, 2, 1]);
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    pub fn push_front(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        self.push_front_expecting_space_available(element);
    }

    /// Adds an element to the back of the buffer, doubling the capacity
    /// first if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _] <-(+)- 1 => [1, _]
    /// [1, _] <-(+)- 2 => [1, 2]
    /// [1, 2] <-(+)- 3 => [1, 2, 3, _]
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, Growing};
    ///
    /// let mut buffer: RingBuffer<_, Growing> = RingBuffer::new(2);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    ///
    /// assert_eq!(buffer.back(), Some(&3));
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    pub fn push_back(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        self.push_back_expecting_space_available(element);
    }

    /// Inserts an element at `index` within the `RingBuffer`, doubling the
    /// capacity first if the buffer is full. Whichever end is closer to the
    /// insertion point will be moved to make room.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the `RingBuffer`'s length
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(2);
    /// buffer.push_back(10);
    /// buffer.push_back(12);
    /// buffer.insert(1, 11);
    ///
    /// assert_eq!(buffer, vec![10, 11, 12]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        assert!(index <= self.len, "index out of bounds");
        if self.is_full() {
            self.grow();
        }
        self.insert_expecting_space_available(index, element);
    }

    /// Makes room for at least `additional` more elements without another
    /// reallocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<u8> = RingBuffer::new(2);
    /// buffer.reserve(5);
    /// assert!(buffer.capacity() >= 5);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let needed = match self.len.checked_add(additional) {
            Some(needed) => needed,
            None => panic!("capacity overflow"),
        };
        if needed > self.cap() {
            let doubled = self.cap().saturating_mul(2);
            self.reallocate(std::cmp::max(needed, doubled));
        }
    }

    /// Shrinks the capacity down to the number of elements, keeping at least
    /// one slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = RingBuffer::new(16);
    /// buffer.extend(0..3);
    /// buffer.shrink_to_fit();
    /// assert_eq!(buffer.capacity(), 3);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let target = std::cmp::max(self.len, 1);
        if target < self.cap() {
            self.reallocate(target);
        }
    }
}

impl<T> RingBuffer<T, Wrapping> {
    /// Converts `self` into a `RingBuffer<T, Growing>` of the same capacity.
    pub fn growing(self) -> RingBuffer<T, Growing> {
        self.into_behavior()
    }

    /// Adds an element to the front of the buffer.
    ///
    /// Return `None` if the buffer still had capacity, or `Some(existing)`
    /// if it is full, where `existing` is the back element being dropped out.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _] -> None
    /// 2 -(+)-> [1, _, _] => [2, 1, _] -> None
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1] -> None
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, Wrapping};
    ///
    /// let mut buffer: RingBuffer<_, Wrapping> = RingBuffer::new(2);
    /// buffer.push_front(1);
    /// buffer.push_front(2);
    /// let overflow = buffer.push_front(3);
    ///
    /// assert_eq!(buffer.front(), Some(&3));
    /// assert_eq!(overflow, Some(1));
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<T> {
        let existing = if self.is_full() {
            self.pop_back()
        } else {
            None
        };
        self.push_front_expecting_space_available(element);
        existing
    }

    /// Adds an element to the back of the buffer.
    ///
    /// Return `None` if the buffer still had capacity, or `Some(existing)`
    /// if it is full, where `existing` is the front element being overwritten.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [_, _, 1] -> None
    /// [_, _, 1] <-(+)- 2 => [_, 1, 2] -> None
    /// [_, 1, 2] <-(+)- 3 => [1, 2, 3] -> None
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, Wrapping};
    ///
    /// let mut buffer: RingBuffer<_, Wrapping> = RingBuffer::new(2);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// let overflow = buffer.push_back(3);
    ///
    /// assert_eq!(buffer.back(), Some(&3));
    /// assert_eq!(overflow, Some(1));
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<T> {
        let existing = if self.is_full() {
            self.pop_front()
        } else {
            None
        };
        self.push_back_expecting_space_available(element);
        existing
    }

    /// Inserts an element at `index` within the `RingBuffer`. Whichever
    /// end is closer to the insertion point will be moved to make room.
    ///
    /// Returns `Err` carrying the element back, without touching the
    /// buffer, if it is full.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the `RingBuffer`'s length
    ///
    /// # Examples
    ///
    /// ```text
    /// [0, _, _] <-(+)- 1 @ 0 => [1, 0, _] -> Ok
    /// [1, 0, _] <-(+)- 3 @ 1 => [1, 3, 0] -> Ok
    /// [1, 3, 0] <-(+)- 2 @ 1 => [1, 3, 0] -> Err(2)
    /// ```
    ///
    /// ```
    /// use ringbuf_deque::{RingBuffer, Wrapping};
    ///
    /// let mut buffer: RingBuffer<_, Wrapping> = RingBuffer::new(3);
    /// buffer.push_back(10);
    /// buffer.push_back(12);
    /// assert!(buffer.insert(1, 11).is_ok());
    /// let overflow = buffer.insert(0, 9);
    ///
    /// assert_eq!(Some(&11), buffer.get(1));
    /// assert_eq!(overflow.unwrap_err().element, 9);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CapacityError<T>> {
        assert!(index <= self.len, "index out of bounds");
        if self.is_full() {
            return Err(CapacityError { element });
        }
        self.insert_expecting_space_available(index, element);
        Ok(())
    }
}

#[cfg(test)]
impl<T, B: Behavior> RingBuffer<T, B> {
    /// Moves an empty buffer's starting slot, to exercise wraparound.
    pub(crate) fn set_head(&mut self, head: usize) {
        assert!(self.is_empty());
        assert!(head < self.cap());
        self.head = head;
    }

    pub(crate) fn head(&self) -> usize {
        self.head
    }

    pub(crate) fn tail_slot(&self) -> usize {
        self.tail()
    }
}
