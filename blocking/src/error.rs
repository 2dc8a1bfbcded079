use core::fmt;
use std::error::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// Blocking operation error.
pub enum WaitError {
    /// Timeout expired before the condition was met.
    TimedOut,
}

impl fmt::Display for WaitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitError::TimedOut => f.write_str("wait timed out"),
        }
    }
}

impl Error for WaitError {}
