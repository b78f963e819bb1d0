//! Bulk operations between arrays.
//!
//! Copying and moving go through [`Assign::assign_slice`] and [`MoveAssign::move_array`].
//! Which of them copies raw bytes and which goes item by item is decided by the implementation
//! for the particular pair of element types, so the choice is made once, at compile time.

use crate::{
    traits::{Assign, Bulk, MoveAssign, Plain},
    utils::mem,
    Array,
};
use core::{
    mem::{size_of, take},
    ptr,
};

impl<T, const N: usize> Array<T, N> {
    /// Assign `value` to every item, in ascending order.
    ///
    /// Integer literals fall back to `i32`, so arrays of other integer types may need a typed literal (`&7u8`).
    pub fn fill<V: ?Sized>(&mut self, value: &V)
    where
        T: Assign<V>,
    {
        for item in self.iter_mut() {
            item.assign(value);
        }
    }

    /// Copy items of `other` into `self`.
    pub fn copy<V>(&mut self, other: &Array<V, N>)
    where
        T: Assign<V>,
    {
        <T as Assign<V>>::assign_slice(self.as_mut_slice(), other.as_slice());
    }

    /// Move items of `other` into `self`.
    ///
    /// For plain types this is a single overlap-safe byte move.
    pub fn move_from<V>(&mut self, other: Array<V, N>)
    where
        T: MoveAssign<V>,
    {
        <T as MoveAssign<V>>::move_array(self.as_mut_array(), other.into_inner());
    }

    /// Exchange contents with `other` by three moves: temporary from `other`, `other` from `self`, `self` from temporary.
    ///
    /// Element types may differ if they can be moved into each other.
    /// Moved-out arrays are left in their default state in between.
    pub fn swap<V>(&mut self, other: &mut Array<V, N>)
    where
        T: MoveAssign<V> + Default,
        V: MoveAssign<T> + Default,
    {
        let temp = take(other);
        other.move_from(take(self));
        self.move_from(temp);
    }

    /// Create a new array of another element type copying items of `self` into it.
    ///
    /// `self` is left untouched.
    pub fn convert<V>(&self) -> Array<V, N>
    where
        V: Assign<T> + Default,
    {
        let mut conversion = Array::<V, N>::default();
        conversion.copy(self);
        conversion
    }

    /// The same as [`Self::convert`] but moves items instead of copying them.
    pub fn convert_into<V>(self) -> Array<V, N>
    where
        V: MoveAssign<T> + Default,
    {
        let mut conversion = Array::<V, N>::default();
        conversion.move_from(self);
        conversion
    }

    /// Overwrite binary representation of `self` with the one of `other`.
    pub fn copy_raw<V: Plain>(&mut self, other: &Array<V, N>)
    where
        T: Bulk<V>,
    {
        #[allow(clippy::let_unit_value)]
        let () = <T as Bulk<V>>::SAME_SIZE;
        mem::copy_bytes(self.as_mut_slice(), other.as_slice());
    }

    /// Create a new array reinterpreting items as another plain type of the same size.
    pub fn cast<V>(&self) -> Array<V, N>
    where
        T: Plain,
        V: Bulk<T>,
    {
        #[allow(clippy::let_unit_value)]
        let () = <V as Bulk<T>>::SAME_SIZE;
        let mut conversion = Array::<V, N>::uninit();
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr() as *const u8, conversion.as_mut_ptr() as *mut u8, size_of::<Self>());
            // Every byte is written and any bytes are a valid `V`.
            conversion.assume_init()
        }
    }
}
