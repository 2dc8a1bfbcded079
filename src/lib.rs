//! Bounded FIFO ring buffer for many producers and many consumers.
//!
//! The whole ring buffer state lives behind a single mutex.
//! Operations never wait: [`Producer::try_push`] on a full buffer returns [`PushError::Full`]
//! and [`Consumer::try_pop`] on an empty one returns [`PopError::Empty`].
//! Callers that need to wait may retry ([`Producer::push_spin`], [`Consumer::pop_spin`])
//! or use the `locked-ringbuf-blocking` crate.
//!
//! ```
//! use locked_ringbuf::{traits::*, IntRb};
//!
//! let rb = IntRb::with_capacity(2).unwrap();
//!
//! rb.try_push(0).unwrap();
//! rb.try_push(1).unwrap();
//! assert!(rb.try_push(2).is_err());
//!
//! assert_eq!(rb.try_pop(), Ok(0));
//! rb.try_push(2).unwrap();
//!
//! assert_eq!(rb.try_pop(), Ok(1));
//! assert_eq!(rb.try_pop(), Ok(2));
//! assert!(rb.try_pop().is_err());
//! ```

mod alias;
pub mod error;
mod raw;
pub mod rb;
mod storage;
mod sync;
pub mod traits;

pub use alias::*;
pub use error::{InitError, PopError, PushError};
pub use rb::RingBuffer;
pub use traits::{Consumer, Observer, Producer};

#[cfg(all(test, not(loom)))]
mod tests;
