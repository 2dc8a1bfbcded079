use crate::{traits::*, BlockingIntRb, BlockingRb, WaitError};
use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
    vec::Vec,
};

type ByteRb = BlockingRb<u8>;

const N_ITEMS: i32 = 1000;

const TIMEOUT: Option<Duration> = Some(Duration::from_millis(1000));
const SHORT: Duration = Duration::from_millis(20);

#[test]
fn push_pop() {
    let rb = Arc::new(BlockingIntRb::with_capacity(7).unwrap());

    let pjh = thread::spawn({
        let rb = rb.clone();
        move || {
            for i in 0..N_ITEMS {
                assert_eq!(rb.push(i, TIMEOUT), Ok(()));
            }
        }
    });

    let cjh = thread::spawn({
        let rb = rb.clone();
        move || (0..N_ITEMS).map(|_| rb.pop(TIMEOUT).unwrap()).collect::<Vec<_>>()
    });

    pjh.join().unwrap();
    let values = cjh.join().unwrap();

    assert_eq!(values, (0..N_ITEMS).collect::<Vec<_>>());
}

#[test]
fn push_timeout() {
    let rb = BlockingIntRb::with_capacity(1).unwrap();
    rb.push(1, TIMEOUT).unwrap();

    let start = Instant::now();
    assert_eq!(rb.push(2, Some(SHORT)), Err(2));
    assert!(start.elapsed() >= SHORT);
    assert_eq!(rb.wait_vacant(1, Some(SHORT)), Err(WaitError::TimedOut));

    assert_eq!(rb.pop(Some(SHORT)), Ok(1));
    assert_eq!(rb.wait_vacant(1, Some(SHORT)), Ok(()));
}

#[test]
fn pop_timeout() {
    let rb = BlockingIntRb::with_capacity(1).unwrap();

    let start = Instant::now();
    assert_eq!(rb.pop(Some(SHORT)), Err(WaitError::TimedOut));
    assert!(start.elapsed() >= SHORT);

    assert_eq!(rb.pop(Some(Duration::ZERO)), Err(WaitError::TimedOut));
}

#[test]
fn zero_timeout_when_ready() {
    let rb = BlockingIntRb::with_capacity(2).unwrap();

    assert_eq!(rb.push(1, Some(Duration::ZERO)), Ok(()));
    assert_eq!(rb.pop(Some(Duration::ZERO)), Ok(1));

    rb.try_push(5).unwrap();
    assert_eq!(rb.pop(Some(Duration::ZERO)), Ok(5));

    assert_eq!(rb.push_slice_all(&[1, 2, 3], Some(Duration::ZERO)), 2);
    assert_eq!(rb.push(3, Some(Duration::ZERO)), Err(3));
    assert_eq!(rb.pop_iter_all(Some(Duration::ZERO)).collect::<Vec<_>>(), [1, 2]);

    assert_eq!(rb.push_iter_all(6..8, Some(Duration::ZERO)), 2);
    let mut buf = [0; 3];
    assert_eq!(rb.pop_slice_all(&mut buf, Some(Duration::ZERO)), 2);
    assert_eq!(buf[..2], [6, 7]);
}

#[test]
fn uninitialized_times_out() {
    let rb = BlockingIntRb::new();
    assert_eq!(rb.push(1, Some(SHORT)), Err(1));
    assert_eq!(rb.pop(Some(SHORT)), Err(WaitError::TimedOut));
}

#[test]
fn wakes_on_pop() {
    let rb = Arc::new(BlockingIntRb::with_capacity(1).unwrap());
    rb.push(1, None).unwrap();

    let pjh = thread::spawn({
        let rb = rb.clone();
        move || rb.push(2, None)
    });

    thread::sleep(SHORT);
    assert_eq!(rb.pop(None), Ok(1));
    assert_eq!(pjh.join().unwrap(), Ok(()));
    assert_eq!(rb.pop(None), Ok(2));
}

#[test]
fn wakes_on_init() {
    let rb = Arc::new(BlockingIntRb::with_capacity(1).unwrap());
    rb.push(1, None).unwrap();

    let pjh = thread::spawn({
        let rb = rb.clone();
        move || rb.push(2, TIMEOUT)
    });

    thread::sleep(SHORT);
    rb.init(2).unwrap();
    assert_eq!(pjh.join().unwrap(), Ok(()));
    assert_eq!(rb.pop(None), Ok(2));
    assert!(rb.is_empty());
}

#[test]
fn many_producers_many_consumers() {
    const PRODUCERS: i32 = 3;
    const CONSUMERS: i32 = 3;
    let rb = Arc::new(BlockingIntRb::with_capacity(4).unwrap());

    let pjhs = (0..PRODUCERS)
        .map(|p| {
            let rb = rb.clone();
            thread::spawn(move || {
                for i in (p * N_ITEMS)..((p + 1) * N_ITEMS) {
                    rb.push(i, None).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    let cjhs = (0..CONSUMERS)
        .map(|_| {
            let rb = rb.clone();
            thread::spawn(move || (0..N_ITEMS).map(|_| rb.pop(None).unwrap()).collect::<Vec<_>>())
        })
        .collect::<Vec<_>>();

    for pjh in pjhs {
        pjh.join().unwrap();
    }
    let mut values = cjhs.into_iter().flat_map(|cjh| cjh.join().unwrap()).collect::<Vec<_>>();
    values.sort();
    assert_eq!(values, (0..(PRODUCERS * N_ITEMS)).collect::<Vec<_>>());
}

#[test]
fn slice_all() {
    let rb = Arc::new(ByteRb::with_capacity(7).unwrap());
    let smsg = Arc::new((0..=255u8).cycle().take(4096).collect::<Vec<_>>());

    let pjh = thread::spawn({
        let rb = rb.clone();
        let smsg = smsg.clone();
        move || {
            assert_eq!(rb.push_slice_all(&smsg, TIMEOUT), smsg.len());
        }
    });

    let cjh = thread::spawn({
        let rb = rb.clone();
        let len = smsg.len();
        move || {
            let mut bytes = vec![0u8; len];
            assert_eq!(rb.pop_slice_all(&mut bytes, TIMEOUT), len);
            bytes
        }
    });

    pjh.join().unwrap();
    let rmsg = cjh.join().unwrap();

    assert_eq!(*smsg, rmsg);
}

#[test]
fn iter_all() {
    let rb = Arc::new(BlockingIntRb::with_capacity(7).unwrap());

    let pjh = thread::spawn({
        let rb = rb.clone();
        move || {
            assert_eq!(rb.push_iter_all(0..N_ITEMS, TIMEOUT), N_ITEMS as usize);
        }
    });

    let cjh = thread::spawn({
        let rb = rb.clone();
        move || rb.pop_iter_all(TIMEOUT).collect::<Vec<_>>()
    });

    pjh.join().unwrap();
    let values = cjh.join().unwrap();

    assert_eq!(values, (0..N_ITEMS).collect::<Vec<_>>());
}
