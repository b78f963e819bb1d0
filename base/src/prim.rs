use crate::traits::{Assign, MoveAssign, Plain, Scalar};
use core::marker::PhantomData;

/// Macro for implementing [`Plain`] and [`Scalar`] for primitive types.
///
/// # Safety
///
/// Any possible memory state of the variable of the type must be valid.
macro_rules! impl_plain_prim {
    ($($ty:ty),+ $(,)?) => {$(
        unsafe impl Plain for $ty {}
        impl Scalar for $ty {}
    )+};
}

impl_plain_prim!(u8, u16, u32, u64, u128, usize);
impl_plain_prim!(i8, i16, i32, i64, i128, isize);
impl_plain_prim!(f32, f64);

unsafe impl Plain for () {}
unsafe impl<T: ?Sized + 'static> Plain for PhantomData<T> {}
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {
    const LAYOUT_CHECK: () = T::LAYOUT_CHECK;
}

/// Implement [`Assign`] and [`MoveAssign`] for types that are copied element by element.
///
/// Copying uses [`Clone::clone_from`], moving simply replaces the value.
///
/// ```
/// # use fixarray_base::{impl_assign, Array};
/// #[derive(Clone, Default, Debug, PartialEq)]
/// struct Name(&'static str);
///
/// impl_assign!(Name);
///
/// let mut names = Array::<Name, 2>::default();
/// names.fill(&Name("x"));
/// assert_eq!(names, Array::new([Name("x"), Name("x")]));
/// ```
#[macro_export]
macro_rules! impl_assign {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::traits::Assign for $ty {
            fn assign(&mut self, value: &Self) {
                ::core::clone::Clone::clone_from(self, value);
            }
        }
        impl $crate::traits::MoveAssign for $ty {
            fn move_assign(&mut self, value: Self) {
                *self = value;
            }
        }
    )+};
}

/// Implement bulk [`Assign`] and [`MoveAssign`] in both directions between distinct [`Plain`] types of the same size.
///
/// Arrays of such types are then copied and moved into each other as raw bytes.
/// Types of different size fail to build once a transfer between them is used.
///
/// ```
/// # use fixarray_base::{impl_bulk_assign, Array, Plain};
/// #[derive(Clone, Copy, Default, Debug, PartialEq)]
/// #[repr(transparent)]
/// struct Id(u32);
/// unsafe impl Plain for Id {}
///
/// impl_bulk_assign!(Id => u32);
///
/// let mut ids = Array::<Id, 2>::default();
/// ids.copy(&Array::new([7u32, 8]));
/// assert_eq!(ids.into_inner(), [Id(7), Id(8)]);
/// ```
#[macro_export]
macro_rules! impl_bulk_assign {
    (@one $dst:ty, $src:ty) => {
        impl $crate::traits::Assign<$src> for $dst {
            fn assign(&mut self, value: &$src) {
                let (dst, src) = (::core::slice::from_mut(self), ::core::slice::from_ref(value));
                <$dst as $crate::traits::Assign<$src>>::assign_slice(dst, src);
            }
            fn assign_slice(dst: &mut [$dst], src: &[$src]) {
                #[allow(clippy::let_unit_value)]
                let () = <$dst as $crate::traits::Bulk<$src>>::SAME_SIZE;
                $crate::utils::mem::copy_bytes(dst, src);
            }
        }
        impl $crate::traits::MoveAssign<$src> for $dst {
            fn move_assign(&mut self, value: $src) {
                <$dst as $crate::traits::Assign<$src>>::assign(self, &value);
            }
            fn move_array<const N: usize>(dst: &mut [$dst; N], src: [$src; N]) {
                <$dst as $crate::traits::Assign<$src>>::assign_slice(dst, &src);
            }
        }
    };
    ($($a:ty => $($b:ty),+);+ $(;)?) => {$($(
        $crate::impl_bulk_assign!(@one $a, $b);
        $crate::impl_bulk_assign!(@one $b, $a);
    )+)+};
}

impl_bulk_assign!(
    u8 => i8;
    u16 => i16, [u8; 2];
    i16 => [u8; 2];
    u32 => i32, f32, [u8; 4];
    i32 => f32, [u8; 4];
    f32 => [u8; 4];
    u64 => i64, f64, [u8; 8];
    i64 => f64, [u8; 8];
    f64 => [u8; 8];
    u128 => i128, [u8; 16];
    i128 => [u8; 16];
    usize => isize;
);

// Not every bit pattern is valid for these, so they are copied elementwise.
impl_assign!(bool, char);
impl Scalar for bool {}
impl Scalar for char {}

/// Lossless conversions between primitives, performed elementwise.
macro_rules! impl_widening {
    ($src:ty => $($dst:ty),+ $(,)?) => {$(
        impl Assign<$src> for $dst {
            fn assign(&mut self, value: &$src) {
                *self = <$dst>::from(*value);
            }
        }
        impl MoveAssign<$src> for $dst {
            fn move_assign(&mut self, value: $src) {
                *self = <$dst>::from(value);
            }
        }
    )+};
}

impl_widening!(u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64);
impl_widening!(u16 => u32, u64, u128, usize, i32, i64, i128, f32, f64);
impl_widening!(u32 => u64, u128, i64, i128, f64);
impl_widening!(u64 => u128, i128);
impl_widening!(i8 => i16, i32, i64, i128, isize, f32, f64);
impl_widening!(i16 => i32, i64, i128, isize, f32, f64);
impl_widening!(i32 => i64, i128, f64);
impl_widening!(i64 => i128);
impl_widening!(f32 => f64);
impl_widening!(bool => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(feature = "alloc")]
mod alloc_impls {
    use crate::traits::{Assign, MoveAssign};
    use alloc::{string::String, vec::Vec};

    impl_assign!(String);

    impl Assign<str> for String {
        fn assign(&mut self, value: &str) {
            self.clear();
            self.push_str(value);
        }
    }
    impl Assign<&str> for String {
        fn assign(&mut self, value: &&str) {
            self.assign(*value);
        }
    }

    impl<T: Clone> Assign for Vec<T> {
        fn assign(&mut self, value: &Self) {
            self.clone_from(value);
        }
    }
    impl<T: Clone> Assign<[T]> for Vec<T> {
        fn assign(&mut self, value: &[T]) {
            self.clear();
            self.extend_from_slice(value);
        }
    }
    impl<T> MoveAssign for Vec<T> {
        fn move_assign(&mut self, value: Self) {
            *self = value;
        }
    }
}
