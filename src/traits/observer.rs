/// Ring buffer observer.
///
/// Can observe ring buffer state but cannot access its data.
///
/// *Results may become irrelevant at any time because of concurring activity of other threads.*
pub trait Observer {
    type Item: Sized;

    /// Capacity of the ring buffer.
    ///
    /// Zero if the ring buffer isn't initialized.
    fn capacity(&self) -> usize;

    /// The number of items stored in the buffer.
    fn occupied_len(&self) -> usize;

    /// The number of remaining free places in the buffer.
    fn vacant_len(&self) -> usize {
        self.capacity().saturating_sub(self.occupied_len())
    }

    /// Checks if the ring buffer is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.occupied_len() == 0
    }

    /// Checks if the ring buffer is full.
    #[inline]
    fn is_full(&self) -> bool {
        self.vacant_len() == 0
    }
}
