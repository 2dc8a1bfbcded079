use crate::{
    rb::BlockingRb,
    sync::{Semaphore, TimeoutIterator},
    WaitError,
};
use locked_ringbuf::{
    traits::{Observer, Producer},
    PushError,
};
use std::time::Duration;

/// Producer that can wait for vacant places in the ring buffer.
///
/// Every operation first tries to proceed without waiting,
/// so zero or already expired timeout still succeeds if there is room.
pub trait BlockingProducer: Producer {
    /// Waits until there are at least `count` vacant places in the ring buffer.
    ///
    /// `None` timeout means wait forever.
    fn wait_vacant(&self, count: usize, timeout: Option<Duration>) -> Result<(), WaitError>;

    /// Appends an item waiting for a vacant place.
    ///
    /// On timeout returns the item back.
    fn push(&self, item: Self::Item, timeout: Option<Duration>) -> Result<(), Self::Item> {
        let mut item = match self.try_push(item) {
            Ok(()) => return Ok(()),
            Err(PushError::Full(elem)) => elem,
        };
        // Another producer may take the place between wait and push, so retry.
        for timeout in TimeoutIterator::new(timeout) {
            if self.wait_vacant(1, timeout).is_ok() {
                match self.try_push(item) {
                    Ok(()) => return Ok(()),
                    Err(PushError::Full(elem)) => item = elem,
                }
            }
        }
        Err(item)
    }

    /// Appends all items from an iterator waiting for vacant places.
    ///
    /// Returns the number of items appended before the iterator ended or timeout expired.
    fn push_iter_all<I: Iterator<Item = Self::Item>>(&self, iter: I, timeout: Option<Duration>) -> usize {
        let mut iter = iter.peekable();
        let mut count = self.push_iter(&mut iter);
        for timeout in TimeoutIterator::new(timeout) {
            if iter.peek().is_none() {
                break;
            }
            if self.wait_vacant(1, timeout).is_ok() {
                count += self.push_iter(&mut iter);
            }
        }
        count
    }

    /// Appends all items from a slice waiting for vacant places.
    ///
    /// Returns the number of items appended before timeout expired.
    fn push_slice_all(&self, mut slice: &[Self::Item], timeout: Option<Duration>) -> usize
    where
        Self::Item: Copy,
    {
        let mut count = self.push_slice(slice);
        slice = &slice[count..];
        for timeout in TimeoutIterator::new(timeout) {
            if slice.is_empty() {
                break;
            }
            if self.wait_vacant(1, timeout).is_ok() {
                let n = self.push_slice(slice);
                slice = &slice[n..];
                count += n;
            }
        }
        count
    }
}

impl<T, X: Semaphore> BlockingProducer for BlockingRb<T, X> {
    fn wait_vacant(&self, count: usize, timeout: Option<Duration>) -> Result<(), WaitError> {
        if self.write_sem().wait(|| self.vacant_len() >= count, timeout) {
            Ok(())
        } else {
            tracing::trace!(count, ?timeout, "wait for vacant places timed out");
            Err(WaitError::TimedOut)
        }
    }
}
