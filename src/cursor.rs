//! Random-access positions into a `RingBuffer`.
//!
//! A `Cursor` is a logical offset from the front of one particular buffer.
//! It borrows that buffer, so the buffer cannot be mutated (or reallocated)
//! while any cursor into it is alive.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use odds::ref_eq;

use crate::behavior::Behavior;
use crate::ringbuffer::RingBuffer;

/// A random-access position in a `RingBuffer`.
///
/// Valid positions run from `begin()` (the front element) to `end()` (one
/// past the back element). Moving a cursor outside that range panics.
///
/// Two cursors are equal when they point into the same buffer at the same
/// position. Cursors into different buffers never compare equal and have no
/// ordering.
///
/// # Examples
///
/// ```
/// use ringbuf_deque::RingBuffer;
///
/// let buffer: RingBuffer<_> = (10..15).collect();
///
/// let mut cursor = buffer.begin();
/// let mut steps = 0;
/// while cursor != buffer.end() {
///     cursor.move_next();
///     steps += 1;
/// }
/// assert_eq!(steps, buffer.len());
///
/// let third = buffer.begin() + 2;
/// assert_eq!(third.get(), Some(&12));
/// assert_eq!(third.at(-1), Some(&11));
/// assert_eq!(buffer.end() - third, 3);
/// ```
pub struct Cursor<'a, T: 'a, B: Behavior + 'a> {
    ring: &'a RingBuffer<T, B>,
    index: usize,
}

impl<'a, T: 'a, B: Behavior + 'a> Cursor<'a, T, B> {
    #[inline]
    fn new(ring: &'a RingBuffer<T, B>, index: usize) -> Self {
        assert!(index <= ring.len(),
                "cursor out of bounds: the len is {} but the position is {}",
                ring.len(),
                index);
        Cursor { ring, index }
    }

    /// Logical position of the cursor, 0 being the front element.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Storage slot the cursor maps onto.
    #[inline]
    pub fn physical(&self) -> usize {
        self.ring.to_physical(self.index)
    }

    /// Returns true if the cursor is one past the back element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.ring.len()
    }

    /// The element under the cursor, or `None` at `end()`.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.ring.get(self.index)
    }

    /// The element `n` positions away from the cursor, or `None` if that
    /// position holds no element.
    pub fn at(&self, n: isize) -> Option<&'a T> {
        self.checked_offset(n).and_then(|index| self.ring.get(index))
    }

    /// Steps one position towards the back.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at `end()`.
    #[inline]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Steps one position towards the front.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at `begin()`.
    #[inline]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Signed number of steps from `other` to `self`.
    ///
    /// # Panics
    ///
    /// Panics if the cursors point into different buffers.
    pub fn distance(&self, other: &Self) -> isize {
        assert!(ref_eq(self.ring, other.ring),
                "cursors point into different buffers");
        self.index as isize - other.index as isize
    }

    fn checked_offset(&self, n: isize) -> Option<usize> {
        let index = if n >= 0 {
            self.index.checked_add(n as usize)
        } else {
            self.index.checked_sub(n.unsigned_abs())
        };
        index.filter(|&index| index <= self.ring.len())
    }

    fn offset(&self, n: isize) -> usize {
        match self.checked_offset(n) {
            Some(index) => index,
            None => panic!("cursor moved out of bounds: position {} offset by {} with len {}",
                           self.index,
                           n,
                           self.ring.len()),
        }
    }
}

impl<T, B: Behavior> RingBuffer<T, B> {
    /// A cursor at the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, B> {
        Cursor::new(self, 0)
    }

    /// A cursor one past the back element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, B> {
        Cursor::new(self, self.len())
    }

    /// A cursor at logical position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let buffer: RingBuffer<_> = vec!['a', 'b', 'c'].into_iter().collect();
    /// let at = buffer.iter().position(|&c| c == 'b').unwrap();
    /// assert_eq!(buffer.cursor(at).get(), Some(&'b'));
    /// ```
    ///
    /// Cursors borrow the buffer, so take the position out with `index()`
    /// before inserting or removing there:
    ///
    /// ```
    /// use ringbuf_deque::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<_> = vec![1, 2, 4].into_iter().collect();
    /// let at = (buffer.end() - 1).index();
    /// buffer.insert(at, 3);
    /// assert_eq!(buffer, vec![1, 2, 3, 4]);
    ///
    /// let at = buffer.begin().index();
    /// assert_eq!(buffer.remove(at), Some(1));
    /// ```
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, B> {
        Cursor::new(self, index)
    }
}

impl<'a, T, B: Behavior> Clone for Cursor<'a, T, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, B: Behavior> Copy for Cursor<'a, T, B> {}

impl<'a, T, B: Behavior> PartialEq for Cursor<'a, T, B> {
    fn eq(&self, other: &Self) -> bool {
        ref_eq(self.ring, other.ring) && self.index == other.index
    }
}

impl<'a, T, B: Behavior> Eq for Cursor<'a, T, B> {}

impl<'a, T, B: Behavior> PartialOrd for Cursor<'a, T, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ref_eq(self.ring, other.ring) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<'a, T, B: Behavior> Add<isize> for Cursor<'a, T, B> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, T, B: Behavior> Sub<isize> for Cursor<'a, T, B> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<'a, T, B: Behavior> AddAssign<isize> for Cursor<'a, T, B> {
    fn add_assign(&mut self, n: isize) {
        self.index = self.offset(n);
    }
}

impl<'a, T, B: Behavior> SubAssign<isize> for Cursor<'a, T, B> {
    fn sub_assign(&mut self, n: isize) {
        let n = match n.checked_neg() {
            Some(n) => n,
            None => panic!("cursor offset overflow"),
        };
        self.index = self.offset(n);
    }
}

impl<'a, T, B: Behavior> Sub for Cursor<'a, T, B> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        self.distance(&other)
    }
}

impl<'a, T, B: Behavior> fmt::Debug for Cursor<'a, T, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.ring.len())
            .finish()
    }
}
