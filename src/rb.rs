use crate::{
    error::{InitError, PopError, PushError},
    raw::RawRb,
    storage::Slots,
    sync::{Mutex, MutexGuard},
    traits::{Consumer, Observer, Producer},
};
use core::{fmt, iter::Peekable, mem, num::NonZeroUsize};
use std::sync::PoisonError;

/// Fixed-capacity FIFO ring buffer that can be shared between many producers and consumers.
///
/// Whole state is protected by a single mutex and every operation holds it for its entire duration,
/// so operations are linearizable. Nothing ever waits for a vacant place or for an item:
/// pushing into full buffer and popping from empty one return an error immediately.
///
/// Ring buffer is created uninitialized (with zero capacity) by [`Self::new`],
/// storage is allocated by [`Self::init`] and released by [`Self::cleanup`].
pub struct RingBuffer<T> {
    state: Mutex<RawRb<T>>,
    limit: Option<NonZeroUsize>,
}

impl<T> RingBuffer<T> {
    /// Creates uninitialized ring buffer without capacity limit.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RawRb::uninit()),
            limit: None,
        }
    }

    /// Creates uninitialized ring buffer that refuses to be initialized with capacity greater than `limit`.
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            state: Mutex::new(RawRb::uninit()),
            limit: Some(limit),
        }
    }

    /// Creates ring buffer and initializes it with `capacity`.
    pub fn with_capacity(capacity: usize) -> Result<Self, InitError> {
        let this = Self::new();
        this.init(capacity)?;
        Ok(this)
    }

    /// Maximal capacity allowed for [`Self::init`], if any.
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    fn lock(&self) -> MutexGuard<'_, RawRb<T>> {
        // State is consistent at any point where panic may occur.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocates storage for `capacity` items and resets the ring buffer to empty state.
    ///
    /// Previous items are dropped and previous storage is released.
    ///
    /// On error the ring buffer remains untouched.
    pub fn init(&self, capacity: usize) -> Result<(), InitError> {
        let limit = self.limit;
        if capacity == 0 || limit.map_or(false, |max| capacity > max.get()) {
            tracing::warn!(capacity, ?limit, "ring buffer init rejected: invalid capacity");
            return Err(InitError::InvalidCapacity { requested: capacity, limit });
        }
        let slots = Slots::try_alloc(capacity).map_err(|error| {
            tracing::warn!(capacity, %error, "ring buffer init rejected: allocation failure");
            InitError::AllocationFailure { capacity }
        })?;

        let old = mem::replace(&mut *self.lock(), RawRb::from_slots(slots));
        // Guard is released here, so items of old state are dropped outside of critical section.
        drop(old);

        tracing::debug!(capacity, "ring buffer initialized");
        Ok(())
    }

    /// Drops all items and releases storage. The ring buffer becomes uninitialized.
    ///
    /// It's safe to call it many times or on never initialized ring buffer.
    pub fn cleanup(&self) {
        let old = mem::take(&mut *self.lock());
        let capacity = old.capacity();
        drop(old);
        tracing::debug!(capacity, "ring buffer cleaned up");
    }

    /// Removes and drops all items keeping storage.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Whether storage is allocated.
    pub fn is_initialized(&self) -> bool {
        self.lock().capacity() > 0
    }

    #[cfg(test)]
    pub(crate) fn cursors(&self) -> (usize, usize) {
        self.lock().cursors()
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observer for RingBuffer<T> {
    type Item = T;

    #[inline]
    fn capacity(&self) -> usize {
        self.lock().capacity()
    }
    #[inline]
    fn occupied_len(&self) -> usize {
        self.lock().occupied_len()
    }
    #[inline]
    fn vacant_len(&self) -> usize {
        self.lock().vacant_len()
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
    #[inline]
    fn is_full(&self) -> bool {
        self.lock().is_full()
    }
}

impl<T> Producer for RingBuffer<T> {
    fn try_push(&self, elem: T) -> Result<(), PushError<T>> {
        self.lock().push(elem).map_err(PushError::Full)
    }

    fn push_peeked<I: Iterator<Item = T>>(&self, iter: &mut Peekable<I>) -> bool {
        self.lock().push_peeked(iter)
    }

    fn push_slice(&self, elems: &[T]) -> usize
    where
        T: Copy,
    {
        self.lock().push_iter(&mut elems.iter().copied())
    }
}

impl<T> Consumer for RingBuffer<T> {
    fn try_pop(&self) -> Result<T, PopError> {
        self.lock().pop().ok_or(PopError::Empty)
    }

    fn pop_slice(&self, elems: &mut [T]) -> usize
    where
        T: Copy,
    {
        self.lock().pop_slice(elems)
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("RingBuffer")
            .field("capacity", &state.capacity())
            .field("occupied_len", &state.occupied_len())
            .field("limit", &self.limit)
            .finish()
    }
}
