use std::{boxed::Box, collections::TryReserveError, mem::MaybeUninit, vec::Vec};

/// Fixed-length heap memory for ring buffer items.
///
/// Slots don't track which of them are initialized, this is up to the owner.
pub struct Slots<T> {
    buf: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    /// Storage of zero length. Doesn't allocate.
    pub fn empty() -> Self {
        Self { buf: Box::default() }
    }

    /// Allocate `capacity` uninitialized slots.
    ///
    /// Fails instead of aborting if memory cannot be allocated or the size overflows.
    pub fn try_alloc(capacity: usize) -> Result<Self, TryReserveError> {
        let mut vec = Vec::<MaybeUninit<T>>::new();
        vec.try_reserve_exact(capacity)?;
        // `MaybeUninit` slots need no initialization.
        unsafe { vec.set_len(capacity) };
        Ok(Self {
            buf: vec.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Put item into slot. Previous slot contents is overwritten without dropping.
    #[inline]
    pub fn write(&mut self, index: usize, elem: T) {
        self.buf[index].write(elem);
    }

    /// Move item out of slot.
    ///
    /// # Safety
    ///
    /// Slot must be initialized. After the call it must be treated as uninitialized.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        self.buf[index].assume_init_read()
    }

    /// Drop item in slot.
    ///
    /// # Safety
    ///
    /// Slot must be initialized. After the call it must be treated as uninitialized.
    #[inline]
    pub unsafe fn drop_in_place(&mut self, index: usize) {
        self.buf[index].assume_init_drop();
    }
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self::empty()
    }
}
