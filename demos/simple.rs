use locked_ringbuf::{traits::*, IntRb, PopError, PushError};

fn main() {
    let rb = IntRb::with_capacity(2).unwrap();

    rb.try_push(0).unwrap();
    rb.try_push(1).unwrap();
    assert_eq!(rb.try_push(2), Err(PushError::Full(2)));

    assert_eq!(rb.try_pop().unwrap(), 0);

    rb.try_push(2).unwrap();

    assert_eq!(rb.try_pop().unwrap(), 1);
    assert_eq!(rb.try_pop().unwrap(), 2);
    assert_eq!(rb.try_pop(), Err(PopError::Empty));
}
