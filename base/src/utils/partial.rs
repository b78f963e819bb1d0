use super::mem::{assume_init_array, uninit_array};
use crate::Array;
use core::mem::{ManuallyDrop, MaybeUninit};

/// Array which is being filled from the front.
///
/// Items pushed so far are dropped if the array is never finished.
pub struct Partial<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> Partial<T, N> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            data: uninit_array(),
            len: 0,
        }
    }

    /// Number of initialized items.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Append `value`. If the array is already full then `value` is returned back.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        match self.data.get_mut(self.len) {
            Some(slot) => {
                slot.write(value);
                self.len += 1;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Complete array. If some items are still missing then `self` is returned back.
    pub fn finish(self) -> Result<Array<T, N>, Self> {
        if !self.is_full() {
            return Err(self);
        }
        let this = ManuallyDrop::new(self);
        // Moving out of `ManuallyDrop` by copying bytes, the original is never used again.
        let data = unsafe { core::ptr::read(&this.data) };
        Ok(Array::new(unsafe { assume_init_array(data) }))
    }
}

impl<T, const N: usize> Drop for Partial<T, N> {
    fn drop(&mut self) {
        for slot in &mut self.data[..self.len] {
            unsafe { slot.assume_init_drop() };
        }
    }
}
