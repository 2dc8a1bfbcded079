use super::observer::Observer;
use crate::error::PopError;
use crossbeam_utils::Backoff;

/// Consumer part of ring buffer.
pub trait Consumer: Observer {
    /// Removes the oldest item from the ring buffer and returns it.
    ///
    /// Returns [`PopError::Empty`] if the ring buffer is empty.
    fn try_pop(&self) -> Result<Self::Item, PopError>;

    /// Removes items from the ring buffer and writes them into a slice.
    ///
    /// Returns count of items been removed from the ring buffer.
    ///
    /// *Items are removed atomically, no other operation can be observed in between.*
    fn pop_slice(&self, elems: &mut [Self::Item]) -> usize
    where
        Self::Item: Copy;

    /// Returns an iterator that removes items one by one from the ring buffer.
    ///
    /// Iterator ends when the ring buffer becomes empty.
    fn pop_iter(&self) -> PopIter<'_, Self>
    where
        Self: Sized,
    {
        PopIter { target: self }
    }

    /// Removes an item retrying until there is one.
    ///
    /// Spins first and then yields the thread between attempts.
    /// Never returns if nobody pushes items into the ring buffer.
    fn pop_spin(&self) -> Self::Item {
        let backoff = Backoff::new();
        loop {
            if let Ok(elem) = self.try_pop() {
                break elem;
            }
            backoff.snooze();
        }
    }
}

/// An iterator that removes items from the ring buffer.
pub struct PopIter<'a, C: Consumer> {
    target: &'a C,
}

impl<C: Consumer> Iterator for PopIter<'_, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.target.try_pop().ok()
    }
}
