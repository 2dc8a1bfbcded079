use core::{fmt, num::NonZeroUsize};
use std::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// `RingBuffer::init` error.
///
/// When returned, the ring buffer is left exactly as it was before the call.
pub enum InitError {
    /// Requested capacity is zero or exceeds the configured limit.
    InvalidCapacity {
        requested: usize,
        limit: Option<NonZeroUsize>,
    },
    /// Storage for requested capacity cannot be allocated.
    AllocationFailure { capacity: usize },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidCapacity { requested, limit: None } => {
                write!(f, "invalid ring buffer capacity {}", requested)
            }
            InitError::InvalidCapacity {
                requested,
                limit: Some(limit),
            } => write!(f, "invalid ring buffer capacity {}, must be in range 1..={}", requested, limit),
            InitError::AllocationFailure { capacity } => {
                write!(f, "cannot allocate storage for {} items", capacity)
            }
        }
    }
}

impl Error for InitError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// `Producer::try_push` error.
pub enum PushError<T: Sized> {
    /// Cannot push: ring buffer is full. Contains the rejected item.
    Full(T),
}

impl<T> PushError<T> {
    /// Get back the item that hasn't been pushed.
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(elem) => elem,
        }
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(_) => f.write_str("ring buffer is full"),
        }
    }
}

impl<T: fmt::Debug> Error for PushError<T> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// `Consumer::try_pop` error.
pub enum PopError {
    /// Cannot pop: ring buffer is empty.
    Empty,
}

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopError::Empty => f.write_str("ring buffer is empty"),
        }
    }
}

impl Error for PopError {}
