use crate::rb::RingBuffer;

/// Ring buffer of integers.
pub type IntRb = RingBuffer<i32>;
