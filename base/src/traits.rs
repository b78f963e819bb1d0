//! Capability traits.
//!
//! Each trait answers a yes/no question about a pair of types at compile time:
//! an implementation exists or the build fails with a message naming the missing capability.
//! [`Array`](crate::Array) uses these traits both to reject invalid operations and to select
//! between the bulk (raw bytes) and the elementwise implementation of a transfer.

use crate::utils::mem;
use core::{mem::size_of, ptr};

/// Plain old data.
///
/// *Prefer `#[derive(Plain)]` to a manual implementation, it checks the layout for you.*
///
/// # Safety
///
/// By implementing this trait you guarantee:
///
/// + `Self` doesn't own any resources and has no drop glue (ensured by [`Copy`]).
/// + `Self` contains no padding bytes, so all of its bytes are initialized.
/// + Any sequence of `size_of::<Self>()` bytes is a valid `Self`.
///
/// The last two points allow reinterpreting values of one plain type as another plain type of the same size.
pub unsafe trait Plain: Copy + 'static {
    /// Evaluated by every bulk path. Derived implementations place their padding check here.
    #[doc(hidden)]
    const LAYOUT_CHECK: () = ();
}

/// `V` can be transferred into `Self` as raw bytes.
///
/// Implemented for every pair of [`Plain`] types.
/// Sizes are compared when a bulk operation is instantiated, so using it on types of different size fails the build.
#[diagnostic::on_unimplemented(
    message = "`{V}` cannot be bulk-transferred into `{Self}`",
    note = "both element types must implement `Plain`"
)]
pub unsafe trait Bulk<V: Plain>: Plain {
    #[doc(hidden)]
    const SAME_SIZE: () = {
        assert!(
            size_of::<Self>() == size_of::<V>(),
            "bulk transfer requires element types of the same size"
        );
        let () = Self::LAYOUT_CHECK;
        let () = V::LAYOUT_CHECK;
    };
}

unsafe impl<T: Plain, V: Plain> Bulk<V> for T {}

/// `Self` is copy-assignable from `&V`.
///
/// [`Self::assign_slice`] is the transfer strategy used by [`Array::copy`](crate::Array::copy) and friends.
/// By default it assigns elements one by one, [`Plain`] types override it with a byte copy.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not copy-assignable from `{V}`",
    label = "requires `{Self}: Assign<{V}>`",
    note = "derive `Plain` for bulk copying or use `impl_assign!` for elementwise copying"
)]
pub trait Assign<V: ?Sized = Self> {
    /// Overwrite `self` with a copy of `value`.
    fn assign(&mut self, value: &V);

    /// Overwrite every item of `dst` with the matching item of `src`, in ascending order.
    ///
    /// Slices must have the same length.
    fn assign_slice(dst: &mut [Self], src: &[V])
    where
        Self: Sized,
        V: Sized,
    {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            d.assign(s);
        }
    }
}

/// `Self` is move-assignable from `V`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not move-assignable from `{V}`",
    label = "requires `{Self}: MoveAssign<{V}>`",
    note = "derive `Plain` for bulk moving or use `impl_assign!` for elementwise moving"
)]
pub trait MoveAssign<V = Self> {
    /// Overwrite `self` with `value`, taking ownership of it.
    fn move_assign(&mut self, value: V);

    /// Move every item of `src` into the matching item of `dst`, in ascending order.
    fn move_array<const N: usize>(dst: &mut [Self; N], src: [V; N])
    where
        Self: Sized,
    {
        for (d, s) in dst.iter_mut().zip(src) {
            d.move_assign(s);
        }
    }
}

impl<T: Plain> Assign<T> for T {
    fn assign(&mut self, value: &T) {
        *self = *value;
    }

    fn assign_slice(dst: &mut [T], src: &[T]) {
        #[allow(clippy::let_unit_value)]
        let () = <T as Bulk<T>>::SAME_SIZE;
        mem::copy_bytes(dst, src);
    }
}

impl<T: Plain> MoveAssign<T> for T {
    fn move_assign(&mut self, value: T) {
        *self = value;
    }

    fn move_array<const N: usize>(dst: &mut [T; N], src: [T; N]) {
        #[allow(clippy::let_unit_value)]
        let () = <T as Bulk<T>>::SAME_SIZE;
        // `T: Copy`, so `src` has nothing to drop afterwards.
        unsafe { ptr::copy(src.as_ptr(), dst.as_mut_ptr(), N) };
    }
}

/// Value that is broadcast to every element when used as an operand of an array operator.
///
/// [`Array`](crate::Array) itself never implements this trait,
/// that is what keeps array-array and array-scalar operators apart.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a scalar operand",
    note = "derive `Scalar` for the type to broadcast it over arrays"
)]
pub trait Scalar: Copy {}
