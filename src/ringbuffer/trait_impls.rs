use alloc::vec::Vec;
use std::cmp::{self, Ordering};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use super::*;

impl<T: Clone, B: Behavior> Clone for RingBuffer<T, B> {
    fn clone(&self) -> Self {
        let mut cloned = RingBuffer::new(self.capacity());
        for elt in self.iter() {
            cloned.push_back_expecting_space_available(elt.clone());
        }
        cloned
    }
}

impl<T, B: Behavior> Drop for RingBuffer<T, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, B: Behavior> Default for RingBuffer<T, B> {
    #[inline]
    fn default() -> Self {
        RingBuffer::new(DEFAULT_CAPACITY)
    }
}

impl<T: PartialEq, B: Behavior> PartialEq for RingBuffer<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T: PartialEq, B: Behavior> PartialEq<&'a [T]> for RingBuffer<T, B> {
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, B: Behavior> PartialEq<Vec<T>> for RingBuffer<T, B> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T: Eq, B: Behavior> Eq for RingBuffer<T, B> {}

impl<T: PartialOrd, B: Behavior> PartialOrd for RingBuffer<T, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, B: Behavior> Ord for RingBuffer<T, B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, B: Behavior> Hash for RingBuffer<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

impl<T, B: Behavior> Index<usize> for RingBuffer<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T, B: Behavior> IndexMut<usize> for RingBuffer<T, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

/// Collects into a buffer sized to the iterator's lower bound, growing as
/// needed.
impl<T> iter::FromIterator<T> for RingBuffer<T, Growing> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buffer = RingBuffer::new(cmp::max(iter.size_hint().0, 1));
        buffer.extend(iter);
        buffer
    }
}

impl<T, B: Behavior> IntoIterator for RingBuffer<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, B: Behavior> IntoIterator for &'a RingBuffer<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, B: Behavior> IntoIterator for &'a mut RingBuffer<T, B> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Extend the `RingBuffer` with an iterator, growing as needed.
impl<T> Extend<T> for RingBuffer<T, Growing> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for elt in iter {
            self.push_back(elt);
        }
    }
}

/// Extend the `RingBuffer` with an iterator.
///
/// Once the buffer is full every new element overwrites the front, so only
/// the last `capacity()` elements survive.
impl<T> Extend<T> for RingBuffer<T, Wrapping> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<T: fmt::Debug, B: Behavior> fmt::Debug for RingBuffer<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
