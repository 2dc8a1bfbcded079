//! Locking primitives.
//!
//! Built with `--cfg loom` these are loom's model-checked versions.

#[cfg(loom)]
pub(crate) use loom::sync::{Mutex, MutexGuard};

#[cfg(not(loom))]
pub(crate) use std::sync::{Mutex, MutexGuard};
