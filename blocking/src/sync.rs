use std::{
    sync::{Condvar, Mutex, PoisonError},
    time::{Duration, Instant},
};

/// Wakes up waiting threads when the ring buffer state changes.
pub trait Semaphore {
    fn new() -> Self;

    /// Blocks until `f` returns `true` or `timeout` expires.
    ///
    /// Returns the last value of `f`.
    fn wait<F: Fn() -> bool>(&self, f: F, timeout: Option<Duration>) -> bool;

    /// Runs `f` and wakes up waiting threads.
    fn notify<R, F: FnOnce() -> R>(&self, f: F) -> R;
}

#[derive(Default)]
pub struct StdSemaphore {
    condvar: Condvar,
    mutex: Mutex<()>,
}

impl Semaphore for StdSemaphore {
    fn new() -> Self {
        Self {
            condvar: Condvar::new(),
            mutex: Mutex::new(()),
        }
    }

    fn wait<F: Fn() -> bool>(&self, f: F, timeout: Option<Duration>) -> bool {
        if f() {
            return true;
        }
        // Mutex guards no data, so poisoning is meaningless.
        let mut guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        for timeout in TimeoutIterator::new(timeout) {
            if f() {
                return true;
            }
            guard = match timeout {
                Some(t) => self.condvar.wait_timeout(guard, t).unwrap_or_else(PoisonError::into_inner).0,
                None => self.condvar.wait(guard).unwrap_or_else(PoisonError::into_inner),
            };
        }
        f()
    }

    fn notify<R, F: FnOnce() -> R>(&self, f: F) -> R {
        let _guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        let ret = f();
        // There may be many waiters and not all of them can proceed.
        self.condvar.notify_all();
        ret
    }
}

/// Yields remaining time on each step until `timeout` expires.
///
/// `None` timeout means wait forever, in that case iterator is infinite and yields `None`.
#[derive(Clone, Debug)]
pub struct TimeoutIterator {
    start: Instant,
    timeout: Option<Duration>,
}

impl TimeoutIterator {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }
}

impl Iterator for TimeoutIterator {
    type Item = Option<Duration>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.timeout {
            Some(dur) => {
                let elapsed = self.start.elapsed();
                if dur > elapsed {
                    Some(Some(dur - elapsed))
                } else {
                    None
                }
            }
            None => Some(None),
        }
    }
}
