//! Elementwise comparison and arithmetic.
//!
//! The right-hand operand is either an array of the same size or a [`Scalar`] that is applied to every item.
//! Resulting item type is whatever the per-item operation produces.

use crate::{traits::Scalar, Array};
use core::{
    mem::ManuallyDrop,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    ptr,
};

impl<T: PartialEq<V>, V, const N: usize> PartialEq<Array<V, N>> for Array<T, N> {
    fn eq(&self, other: &Array<V, N>) -> bool {
        self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize> Eq for Array<T, N> {}

/// Array equals to scalar when each of its items does.
impl<T: PartialEq<V>, V: Scalar, const N: usize> PartialEq<V> for Array<T, N> {
    fn eq(&self, value: &V) -> bool {
        self.iter().all(|a| a == value)
    }
}

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident $(,)?) => {
        impl<T: $Op<V>, V, const N: usize> $Op<Array<V, N>> for Array<T, N> {
            type Output = Array<T::Output, N>;
            fn $op(self, rhs: Array<V, N>) -> Self::Output {
                self.zip_with(rhs, |a, b| a.$op(b))
            }
        }

        impl<T: $Op<V>, V: Scalar, const N: usize> $Op<V> for Array<T, N> {
            type Output = Array<T::Output, N>;
            fn $op(self, rhs: V) -> Self::Output {
                self.map(|a| a.$op(rhs))
            }
        }

        impl<'a, 'b, T, V, const N: usize> $Op<&'b Array<V, N>> for &'a Array<T, N>
        where
            &'a T: $Op<&'b V>,
        {
            type Output = Array<<&'a T as $Op<&'b V>>::Output, N>;
            fn $op(self, rhs: &'b Array<V, N>) -> Self::Output {
                let (lhs, rhs) = (self.as_array(), rhs.as_array());
                Array::from_fn(|i| $Op::$op(&lhs[i], &rhs[i]))
            }
        }

        impl<'a, T, V: Scalar, const N: usize> $Op<V> for &'a Array<T, N>
        where
            &'a T: $Op<V>,
        {
            type Output = Array<<&'a T as $Op<V>>::Output, N>;
            fn $op(self, rhs: V) -> Self::Output {
                let lhs = self.as_array();
                Array::from_fn(|i| $Op::$op(&lhs[i], rhs))
            }
        }

        impl<T: $OpAssign<V>, V, const N: usize> $OpAssign<Array<V, N>> for Array<T, N> {
            fn $op_assign(&mut self, rhs: Array<V, N>) {
                let rhs = ManuallyDrop::new(rhs);
                // Each item of `rhs` is read exactly once.
                self.apply(|a, i| a.$op_assign(unsafe { ptr::read(rhs.as_ptr().add(i)) }));
            }
        }

        impl<T: $OpAssign<V>, V: Scalar, const N: usize> $OpAssign<V> for Array<T, N> {
            fn $op_assign(&mut self, rhs: V) {
                self.apply(|a, _| a.$op_assign(rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl<T: Neg, const N: usize> Neg for Array<T, N> {
    type Output = Array<T::Output, N>;
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl<'a, T, const N: usize> Neg for &'a Array<T, N>
where
    &'a T: Neg,
{
    type Output = Array<<&'a T as Neg>::Output, N>;
    fn neg(self) -> Self::Output {
        let items = self.as_array();
        Array::from_fn(|i| -&items[i])
    }
}

/// Operators with a primitive scalar on the left-hand side.
macro_rules! impl_scalar_lhs_op {
    ($ty:ty, $Op:ident, $op:ident) => {
        impl<T, const N: usize> $Op<Array<T, N>> for $ty
        where
            $ty: $Op<T>,
        {
            type Output = Array<<$ty as $Op<T>>::Output, N>;
            fn $op(self, rhs: Array<T, N>) -> Self::Output {
                rhs.map(|b| $Op::$op(self, b))
            }
        }
    };
}

macro_rules! impl_scalar_lhs {
    ($($ty:ty),+ $(,)?) => {$(
        impl_scalar_lhs_op!($ty, Add, add);
        impl_scalar_lhs_op!($ty, Sub, sub);
        impl_scalar_lhs_op!($ty, Mul, mul);
        impl_scalar_lhs_op!($ty, Div, div);
    )+};
}

impl_scalar_lhs!(u8, u16, u32, u64, u128, usize);
impl_scalar_lhs!(i8, i16, i32, i64, i128, isize);
impl_scalar_lhs!(f32, f64);
