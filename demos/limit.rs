use locked_ringbuf::{traits::*, InitError, IntRb};
use std::num::NonZeroUsize;

const MAX_CAPACITY: usize = 1024;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let rb = IntRb::with_limit(NonZeroUsize::new(MAX_CAPACITY).unwrap());
    rb.init(4).unwrap();
    rb.try_push(42).unwrap();

    match rb.init(MAX_CAPACITY + 1) {
        Err(InitError::InvalidCapacity { requested, limit }) => {
            tracing::info!(requested, ?limit, "capacity rejected, contents kept");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(rb.try_pop(), Ok(42));

    rb.cleanup();
    rb.cleanup();
    assert_eq!(rb.capacity(), 0);
}
