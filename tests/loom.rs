#![cfg(loom)]

use locked_ringbuf::{traits::*, IntRb};
use loom::{sync::Arc, thread};

#[test]
fn two_producers_one_consumer() {
    let mut builder = loom::model::Builder::new();
    builder.preemption_bound = Some(3);
    builder.check(|| {
        let rb = Arc::new(IntRb::with_capacity(1).unwrap());

        let pjhs = [0, 1].map(|start| {
            let rb = rb.clone();
            thread::spawn(move || {
                for i in [start, start + 2] {
                    while rb.try_push(i).is_err() {
                        thread::yield_now();
                    }
                }
            })
        });

        let mut values = Vec::new();
        while values.len() < 4 {
            match rb.try_pop() {
                Ok(v) => values.push(v),
                Err(_) => thread::yield_now(),
            }
        }
        for pjh in pjhs {
            pjh.join().unwrap();
        }

        assert!(values.iter().position(|&v| v == 0) < values.iter().position(|&v| v == 2));
        assert!(values.iter().position(|&v| v == 1) < values.iter().position(|&v| v == 3));
        values.sort();
        assert_eq!(values, [0, 1, 2, 3]);
        assert!(rb.is_empty());
    });
}

#[test]
fn concurrent_reinit() {
    loom::model(|| {
        let rb = Arc::new(IntRb::with_capacity(2).unwrap());

        let pjh = thread::spawn({
            let rb = rb.clone();
            move || rb.try_push(1).is_ok()
        });
        let ijh = thread::spawn({
            let rb = rb.clone();
            move || rb.init(3).unwrap()
        });

        let pushed = pjh.join().unwrap();
        ijh.join().unwrap();

        assert!(pushed);
        assert_eq!(rb.capacity(), 3);
        assert!(rb.occupied_len() <= 1);
        assert_eq!(rb.vacant_len() + rb.occupied_len(), 3);
    });
}

#[test]
fn cleanup_races_push() {
    loom::model(|| {
        let rb = Arc::new(IntRb::with_capacity(1).unwrap());

        let cjh = thread::spawn({
            let rb = rb.clone();
            move || rb.cleanup()
        });
        let _ = rb.try_push(1);
        cjh.join().unwrap();

        assert_eq!(rb.capacity(), 0);
        assert_eq!(rb.occupied_len(), 0);
        assert!(rb.try_push(2).is_err());
    });
}
