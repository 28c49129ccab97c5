use super::*;
use crate::utils::wrap_add;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            front: self.front,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let front = self.front;
        self.front = wrap_add(self.front, 1, self.ring.len());
        self.len -= 1;
        unsafe { Some(&*self.ring.get_unchecked(front).as_ptr()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let back = wrap_add(self.front, self.len, self.ring.len());
        unsafe { Some(&*self.ring.get_unchecked(back).as_ptr()) }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let front = self.front;
        self.front = wrap_add(self.front, 1, self.ring.len());
        self.len -= 1;

        unsafe {
            let elem = self.ring.get_unchecked_mut(front);
            Some(&mut *elem.as_mut_ptr())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let back = wrap_add(self.front, self.len, self.ring.len());

        unsafe {
            let elem = self.ring.get_unchecked_mut(back);
            Some(&mut *elem.as_mut_ptr())
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T, B: Behavior> Iterator for IntoIter<T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, B: Behavior> DoubleEndedIterator for IntoIter<T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, B: Behavior> ExactSizeIterator for IntoIter<T, B> {}

impl<'a, T: 'a, B: Behavior + 'a> Drop for Drain<'a, T, B> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        let source = unsafe { self.deque.as_mut() };

        // H = source head; s = drain_start; e = drain_end; L = orig_len
        //
        //        H   s   e   L
        // [. . . o o x x o o . . .]
        //
        let head_len = self.drain_start;
        let tail_len = self.orig_len - self.drain_end;
        let drained = self.drain_end - self.drain_start;

        unsafe {
            match (head_len, tail_len) {
                (0, 0) => source.head = 0,
                (0, _) => source.head = source.to_physical(self.drain_end),
                (_, 0) => {}
                _ => {
                    if head_len <= tail_len {
                        let old_head = source.head;
                        let new_head = source.wrap_add(old_head, drained);
                        source.wrap_copy(new_head, old_head, head_len);
                        source.head = new_head;
                    } else {
                        let dst = source.to_physical(self.drain_start);
                        let src = source.to_physical(self.drain_end);
                        source.wrap_copy(dst, src, tail_len);
                    }
                }
            }
        }
        source.len = head_len + tail_len;
    }
}

impl<'a, T: 'a, B: Behavior + 'a> Iterator for Drain<'a, T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let source = unsafe { self.deque.as_mut() };
        let idx = source.to_physical(self.front);
        self.front += 1;
        unsafe { Some(source.buffer_read(idx)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: 'a, B: Behavior + 'a> DoubleEndedIterator for Drain<'a, T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let source = unsafe { self.deque.as_mut() };
        self.back -= 1;
        let idx = source.to_physical(self.back);
        unsafe { Some(source.buffer_read(idx)) }
    }
}

impl<'a, T: 'a, B: Behavior + 'a> ExactSizeIterator for Drain<'a, T, B> {}
