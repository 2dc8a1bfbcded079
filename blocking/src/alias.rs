use crate::rb::BlockingRb;

/// Blocking ring buffer of integers.
pub type BlockingIntRb = BlockingRb<i32>;
