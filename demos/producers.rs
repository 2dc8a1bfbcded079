use locked_ringbuf::{traits::*, IntRb};
use std::{sync::Arc, thread};

const ITEMS_PER_PRODUCER: i32 = 100;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let rb = Arc::new(IntRb::with_capacity(5).unwrap());

    let producers = [0, ITEMS_PER_PRODUCER].map(|start| {
        let rb = rb.clone();
        thread::spawn(move || {
            for i in start..(start + ITEMS_PER_PRODUCER) {
                while rb.try_push(i).is_err() {
                    thread::yield_now();
                }
            }
        })
    });

    let consumer = thread::spawn({
        let rb = rb.clone();
        move || (0..2 * ITEMS_PER_PRODUCER).map(|_| rb.pop_spin()).collect::<Vec<_>>()
    });

    for producer in producers {
        producer.join().unwrap();
    }
    let mut values = consumer.join().unwrap();
    values.sort();
    assert_eq!(values, (0..2 * ITEMS_PER_PRODUCER).collect::<Vec<_>>());

    tracing::info!(count = values.len(), "all items consumed");
    rb.cleanup();
}
