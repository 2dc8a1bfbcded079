use crate::sync::{Semaphore, StdSemaphore};
use locked_ringbuf::{
    traits::{Consumer, Observer, Producer},
    InitError, PopError, PushError, RingBuffer,
};
use std::{fmt, iter::Peekable};

/// Ring buffer that allows producers and consumers to wait for vacant places or items.
///
/// Every state change is performed inside a semaphore notification, so no wakeup is lost.
pub struct BlockingRb<T, X: Semaphore = StdSemaphore> {
    base: RingBuffer<T>,
    /// Notified when items are added.
    read_sem: X,
    /// Notified when places are vacated.
    write_sem: X,
}

impl<T, X: Semaphore> From<RingBuffer<T>> for BlockingRb<T, X> {
    fn from(base: RingBuffer<T>) -> Self {
        Self {
            base,
            read_sem: X::new(),
            write_sem: X::new(),
        }
    }
}

impl<T, X: Semaphore> BlockingRb<T, X> {
    /// Creates uninitialized ring buffer.
    pub fn new() -> Self {
        Self::from(RingBuffer::new())
    }

    /// Creates ring buffer and initializes it with `capacity`.
    pub fn with_capacity(capacity: usize) -> Result<Self, InitError> {
        RingBuffer::with_capacity(capacity).map(Self::from)
    }

    pub fn into_inner(self) -> RingBuffer<T> {
        self.base
    }

    /// See [`RingBuffer::init`].
    pub fn init(&self, capacity: usize) -> Result<(), InitError> {
        self.write_sem.notify(|| self.base.init(capacity))
    }

    /// See [`RingBuffer::cleanup`].
    ///
    /// Threads that are waiting at the moment continue to wait until the ring buffer is initialized again.
    pub fn cleanup(&self) {
        self.base.cleanup()
    }

    /// See [`RingBuffer::clear`].
    pub fn clear(&self) {
        self.write_sem.notify(|| self.base.clear())
    }

    pub(crate) fn read_sem(&self) -> &X {
        &self.read_sem
    }
    pub(crate) fn write_sem(&self) -> &X {
        &self.write_sem
    }
}

impl<T, X: Semaphore> Default for BlockingRb<T, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, X: Semaphore> Observer for BlockingRb<T, X> {
    type Item = T;

    #[inline]
    fn capacity(&self) -> usize {
        self.base.capacity()
    }
    #[inline]
    fn occupied_len(&self) -> usize {
        self.base.occupied_len()
    }
    #[inline]
    fn vacant_len(&self) -> usize {
        self.base.vacant_len()
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
    #[inline]
    fn is_full(&self) -> bool {
        self.base.is_full()
    }
}

impl<T, X: Semaphore> Producer for BlockingRb<T, X> {
    fn try_push(&self, elem: T) -> Result<(), PushError<T>> {
        self.read_sem.notify(|| self.base.try_push(elem))
    }
    fn push_peeked<I: Iterator<Item = T>>(&self, iter: &mut Peekable<I>) -> bool {
        self.read_sem.notify(|| self.base.push_peeked(iter))
    }
    fn push_slice(&self, elems: &[T]) -> usize
    where
        T: Copy,
    {
        self.read_sem.notify(|| self.base.push_slice(elems))
    }
}

impl<T, X: Semaphore> Consumer for BlockingRb<T, X> {
    fn try_pop(&self) -> Result<T, PopError> {
        self.write_sem.notify(|| self.base.try_pop())
    }
    fn pop_slice(&self, elems: &mut [T]) -> usize
    where
        T: Copy,
    {
        self.write_sem.notify(|| self.base.pop_slice(elems))
    }
}

impl<T, X: Semaphore> fmt::Debug for BlockingRb<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlockingRb").field(&self.base).finish()
    }
}
