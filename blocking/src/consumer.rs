use crate::{
    rb::BlockingRb,
    sync::{Semaphore, TimeoutIterator},
    WaitError,
};
use locked_ringbuf::traits::{Consumer, Observer};
use std::{mem, time::Duration};

/// Consumer that can wait for items to appear in the ring buffer.
///
/// Every operation first tries to proceed without waiting,
/// so zero or already expired timeout still succeeds if there are items.
pub trait BlockingConsumer: Consumer {
    /// Waits until there are at least `count` items in the ring buffer.
    ///
    /// `None` timeout means wait forever.
    fn wait_occupied(&self, count: usize, timeout: Option<Duration>) -> Result<(), WaitError>;

    /// Removes the oldest item waiting for it to appear.
    fn pop(&self, timeout: Option<Duration>) -> Result<Self::Item, WaitError> {
        if let Ok(elem) = self.try_pop() {
            return Ok(elem);
        }
        // Another consumer may take the item between wait and pop, so retry.
        for timeout in TimeoutIterator::new(timeout) {
            if self.wait_occupied(1, timeout).is_ok() {
                if let Ok(elem) = self.try_pop() {
                    return Ok(elem);
                }
            }
        }
        Err(WaitError::TimedOut)
    }

    /// Returns an iterator that removes items waiting for each of them.
    ///
    /// Iterator ends when the ring buffer stays empty until timeout expires. `timeout` is shared by all items.
    fn pop_iter_all(&self, timeout: Option<Duration>) -> PopAllIter<'_, Self>
    where
        Self: Sized,
    {
        PopAllIter {
            target: self,
            timeout: TimeoutIterator::new(timeout),
        }
    }

    /// Fills the whole slice with removed items waiting for them to appear.
    ///
    /// Returns the number of items removed before timeout expired.
    fn pop_slice_all(&self, mut slice: &mut [Self::Item], timeout: Option<Duration>) -> usize
    where
        Self::Item: Copy,
    {
        let mut count = self.pop_slice(slice);
        slice = &mut mem::take(&mut slice)[count..];
        for timeout in TimeoutIterator::new(timeout) {
            if slice.is_empty() {
                break;
            }
            if self.wait_occupied(1, timeout).is_ok() {
                let n = self.pop_slice(slice);
                slice = &mut mem::take(&mut slice)[n..];
                count += n;
            }
        }
        count
    }
}

/// Iterator returned by [`BlockingConsumer::pop_iter_all`].
pub struct PopAllIter<'a, C: Consumer> {
    target: &'a C,
    timeout: TimeoutIterator,
}

impl<C: BlockingConsumer> Iterator for PopAllIter<'_, C> {
    type Item = C::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if let Ok(elem) = self.target.try_pop() {
            return Some(elem);
        }
        for timeout in &mut self.timeout {
            if self.target.wait_occupied(1, timeout).is_ok() {
                if let Ok(elem) = self.target.try_pop() {
                    return Some(elem);
                }
            }
        }
        None
    }
}

impl<T, X: Semaphore> BlockingConsumer for BlockingRb<T, X> {
    fn wait_occupied(&self, count: usize, timeout: Option<Duration>) -> Result<(), WaitError> {
        if self.read_sem().wait(|| self.occupied_len() >= count, timeout) {
            Ok(())
        } else {
            tracing::trace!(count, ?timeout, "wait for items timed out");
            Err(WaitError::TimedOut)
        }
    }
}
