use crate::traits::Plain;
use core::{
    mem::{size_of_val, MaybeUninit},
    ptr,
    slice::{from_raw_parts, from_raw_parts_mut},
};

/// Bytes of a plain slice.
pub fn as_bytes<T: Plain>(slice: &[T]) -> &[u8] {
    #[allow(clippy::let_unit_value)]
    let () = T::LAYOUT_CHECK;
    unsafe { from_raw_parts(slice.as_ptr() as *const u8, size_of_val(slice)) }
}

/// Mutable bytes of a plain slice.
///
/// Safe because any byte pattern is a valid `T`.
pub fn as_mut_bytes<T: Plain>(slice: &mut [T]) -> &mut [u8] {
    #[allow(clippy::let_unit_value)]
    let () = T::LAYOUT_CHECK;
    unsafe { from_raw_parts_mut(slice.as_mut_ptr() as *mut u8, size_of_val(slice)) }
}

/// Copy `src` bytes over `dst` bytes (memcpy).
///
/// # Panics
///
/// Panics if slices have different size in bytes.
pub fn copy_bytes<T: Plain, V: Plain>(dst: &mut [T], src: &[V]) {
    #[allow(clippy::let_unit_value)]
    let ((), ()) = (T::LAYOUT_CHECK, V::LAYOUT_CHECK);
    assert_eq!(size_of_val(dst), size_of_val(src));
    unsafe { ptr::copy_nonoverlapping(src.as_ptr() as *const u8, dst.as_mut_ptr() as *mut u8, size_of_val(src)) };
}

/// Array of uninitialized items.
pub fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
    // An array of `MaybeUninit` requires no initialization.
    unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
}

/// # Safety
///
/// All items must be initialized.
pub unsafe fn assume_init_array<T, const N: usize>(array: [MaybeUninit<T>; N]) -> [T; N] {
    // `MaybeUninit<T>` has the same layout as `T` and no drop glue.
    ptr::read(&array as *const [MaybeUninit<T>; N] as *const [T; N])
}
