use crate::storage::Slots;
use core::iter::Peekable;

/// Ring buffer state without any synchronization.
///
/// Live items occupy `count` slots starting from `head` and wrapping around the end of storage.
/// Zero-length storage means that the ring buffer is not initialized.
pub struct RawRb<T> {
    slots: Slots<T>,
    /// Index of the oldest item.
    head: usize,
    /// Index of the next vacant slot.
    tail: usize,
    count: usize,
}

impl<T> RawRb<T> {
    pub fn uninit() -> Self {
        Self::from_slots(Slots::empty())
    }

    pub fn from_slots(slots: Slots<T>) -> Self {
        Self {
            slots,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.capacity() - self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Index that is `offset` slots after `index`.
    ///
    /// Requires `index < capacity` and `offset <= capacity`. Never overflows.
    #[inline]
    fn wrap_add(&self, index: usize, offset: usize) -> usize {
        let rest = self.capacity() - index;
        if offset < rest {
            index + offset
        } else {
            offset - rest
        }
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        self.wrap_add(index, 1)
    }

    /// Writes an item into the vacant slot at `tail`.
    fn push_unchecked(&mut self, elem: T) {
        debug_assert!(!self.is_full());
        self.slots.write(self.tail, elem);
        self.tail = self.next(self.tail);
        self.count += 1;
        self.debug_check();
    }

    /// Appends an item.
    ///
    /// Returns item back if there is no vacant slot.
    pub fn push(&mut self, elem: T) -> Result<(), T> {
        if self.is_full() {
            return Err(elem);
        }
        self.push_unchecked(elem);
        Ok(())
    }

    /// Appends items while there are vacant slots. Items not taken remain in the iterator.
    ///
    /// Only for iterators that don't run foreign code, e.g. over a slice.
    pub fn push_iter<I: Iterator<Item = T>>(&mut self, iter: &mut I) -> usize {
        let mut count = 0;
        while !self.is_full() {
            match iter.next() {
                Some(elem) => self.push_unchecked(elem),
                None => break,
            }
            count += 1;
        }
        count
    }

    /// Moves the peeked item out of `iter` if there is a vacant slot.
    ///
    /// Peekable yields an already peeked item without advancing the underlying iterator.
    pub fn push_peeked<I: Iterator<Item = T>>(&mut self, iter: &mut Peekable<I>) -> bool {
        if self.is_full() {
            return false;
        }
        match iter.next() {
            Some(elem) => {
                self.push_unchecked(elem);
                true
            }
            None => false,
        }
    }

    /// Removes the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // Slot at `head` is live while `count > 0`.
        let elem = unsafe { self.slots.read(self.head) };
        self.head = self.next(self.head);
        self.count -= 1;
        self.debug_check();
        Some(elem)
    }

    /// Moves the oldest items into `elems` until it is filled or the ring buffer is empty.
    pub fn pop_slice(&mut self, elems: &mut [T]) -> usize
    where
        T: Copy,
    {
        let mut count = 0;
        for place in elems.iter_mut() {
            match self.pop() {
                Some(elem) => *place = elem,
                None => break,
            }
            count += 1;
        }
        count
    }

    /// Drops all items keeping storage.
    ///
    /// Cursors are reset before any item is dropped,
    /// so a panicking destructor leaks the rest of items instead of leaving them reachable.
    pub fn clear(&mut self) {
        let (head, count) = (self.head, self.count);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        for i in 0..count {
            let index = self.wrap_add(head, i);
            unsafe { self.slots.drop_in_place(index) };
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.count <= self.capacity());
        debug_assert!(self.capacity() > 0);
        debug_assert_eq!(self.tail, self.wrap_add(self.head, self.count));
    }

    #[cfg(test)]
    pub fn cursors(&self) -> (usize, usize) {
        (self.head, self.tail)
    }

    #[cfg(test)]
    pub fn set_cursors(&mut self, index: usize) {
        assert!(self.is_empty());
        self.head = index;
        self.tail = index;
    }
}

impl<T> Default for RawRb<T> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T> Drop for RawRb<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
