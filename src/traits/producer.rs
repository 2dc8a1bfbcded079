use super::observer::Observer;
use crate::error::PushError;
use core::iter::Peekable;
use crossbeam_utils::Backoff;

/// Producer part of ring buffer.
pub trait Producer: Observer {
    /// Appends an item to the ring buffer.
    ///
    /// If buffer is full returns [`PushError::Full`] containing the item that hasn't been appended.
    fn try_push(&self, elem: Self::Item) -> Result<(), PushError<Self::Item>>;

    /// Moves the item already peeked from `iter` into the ring buffer if there is a vacant place.
    ///
    /// Returns `false` if the ring buffer is full or the iterator has ended.
    ///
    /// *`iter` must be peeked right before the call,
    /// otherwise the underlying iterator is advanced while the ring buffer is locked.*
    fn push_peeked<I: Iterator<Item = Self::Item>>(&self, iter: &mut Peekable<I>) -> bool;

    /// Appends items from an iterator to the ring buffer while there are vacant places.
    /// Elements that haven't been added to the ring buffer remain in the iterator.
    ///
    /// Returns count of items been appended to the ring buffer.
    ///
    /// Each item is taken from the underlying iterator before the ring buffer is locked,
    /// so the iterator may access this or other ring buffers.
    /// Items are appended one by one and other operations may be observed in between.
    fn push_iter<I: Iterator<Item = Self::Item>>(&self, iter: &mut Peekable<I>) -> usize {
        let mut count = 0;
        while iter.peek().is_some() && self.push_peeked(iter) {
            count += 1;
        }
        count
    }

    /// Appends items from slice to the ring buffer.
    ///
    /// Returns count of items been appended to the ring buffer.
    fn push_slice(&self, elems: &[Self::Item]) -> usize
    where
        Self::Item: Copy,
    {
        self.push_iter(&mut elems.iter().copied().peekable())
    }

    /// Appends an item retrying until there is a vacant place.
    ///
    /// Spins first and then yields the thread between attempts.
    /// Never returns if nobody pops items from the ring buffer.
    fn push_spin(&self, mut elem: Self::Item) {
        let backoff = Backoff::new();
        loop {
            match self.try_push(elem) {
                Ok(()) => break,
                Err(PushError::Full(e)) => elem = e,
            }
            backoff.snooze();
        }
    }
}
