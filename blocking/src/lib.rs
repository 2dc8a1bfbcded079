//! Blocking layer for [`locked_ringbuf`].
//!
//! [`BlockingRb`] allows producers to wait for vacant places and consumers to wait for items,
//! optionally with a timeout.

mod alias;
pub mod consumer;
mod error;
pub mod producer;
pub mod rb;
pub mod sync;

pub mod traits {
    pub use crate::consumer::BlockingConsumer;
    pub use crate::producer::BlockingProducer;
    pub use locked_ringbuf::traits::*;
}

pub use alias::*;
pub use error::WaitError;
pub use rb::BlockingRb;

#[cfg(test)]
mod tests;
