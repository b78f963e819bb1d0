use crate::{NativeCast, Portable};
use core::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt::{self, Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use fixarray_base::traits::{Assign, MoveAssign, Plain, Scalar};
use num_traits::{Bounded, One, Zero};

/// Generic portable integer. Has alignment == 1.
///
/// Parameters:
/// + `BE`: Endianness. `false` => little-endian, `true` => big-endian.
/// + `N`: Width in bytes.
/// + `S`: Whether this type is signed (`true`) or unsigned (`false`).
///
/// Copying between arrays of the same portable type is a raw byte copy.
/// Copying between portable and native arrays converts byte order of each item.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int<const BE: bool, const N: usize, const S: bool> {
    bytes: [u8; N],
}

impl<const BE: bool, const N: usize, const S: bool> Default for Int<BE, N, S> {
    fn default() -> Self {
        Self { bytes: [0; N] }
    }
}

impl<const BE: bool, const N: usize, const S: bool> Int<BE, N, S> {
    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }
    pub fn to_bytes(self) -> [u8; N] {
        self.bytes
    }
}

unsafe impl<const BE: bool, const N: usize, const S: bool> Plain for Int<BE, N, S> {}
unsafe impl<const BE: bool, const N: usize, const S: bool> Portable for Int<BE, N, S> {}
impl<const BE: bool, const N: usize, const S: bool> Scalar for Int<BE, N, S> {}

macro_rules! derive_int {
    ($self:ty, $native:ty, $from_bytes:ident, $to_bytes:ident $(,)?) => {
        impl NativeCast for $self {
            type Native = $native;
            fn from_native(n: $native) -> Self {
                Int::from_bytes(n.$to_bytes())
            }
            fn to_native(&self) -> $native {
                <$native>::$from_bytes(self.to_bytes())
            }
        }

        impl From<$native> for $self {
            fn from(n: $native) -> Self {
                Self::from_native(n)
            }
        }
        impl From<$self> for $native {
            fn from(s: $self) -> Self {
                s.to_native()
            }
        }

        impl Assign<$native> for $self {
            fn assign(&mut self, value: &$native) {
                *self = Self::from_native(*value);
            }
        }
        impl MoveAssign<$native> for $self {
            fn move_assign(&mut self, value: $native) {
                *self = Self::from_native(value);
            }
        }
        impl Assign<$self> for $native {
            fn assign(&mut self, value: &$self) {
                *self = value.to_native();
            }
        }
        impl MoveAssign<$self> for $native {
            fn move_assign(&mut self, value: $self) {
                *self = value.to_native();
            }
        }

        impl Bounded for $self {
            fn min_value() -> Self {
                Self::from_native(<$native>::MIN)
            }
            fn max_value() -> Self {
                Self::from_native(<$native>::MAX)
            }
        }

        impl One for $self {
            fn one() -> Self {
                Self::from_native(1)
            }
        }
        impl Zero for $self {
            fn zero() -> Self {
                Self::default()
            }
            fn is_zero(&self) -> bool {
                self.bytes.iter().all(|b| *b == 0)
            }
        }
    };
}

/// Arithmetic is performed on native values, so it follows native overflow rules.
macro_rules! impl_native_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident $(,)?) => {
        impl<const BE: bool, const N: usize, const S: bool> $Op for Int<BE, N, S>
        where
            Self: NativeCast,
            <Self as NativeCast>::Native: $Op<Output = <Self as NativeCast>::Native>,
        {
            type Output = Self;
            fn $op(self, rhs: Self) -> Self {
                Self::from_native(self.to_native().$op(rhs.to_native()))
            }
        }

        impl<const BE: bool, const N: usize, const S: bool> $OpAssign for Int<BE, N, S>
        where
            Self: NativeCast,
            <Self as NativeCast>::Native: $Op<Output = <Self as NativeCast>::Native>,
        {
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_native_op!(Add, add, AddAssign, add_assign);
impl_native_op!(Sub, sub, SubAssign, sub_assign);
impl_native_op!(Mul, mul, MulAssign, mul_assign);
impl_native_op!(Div, div, DivAssign, div_assign);

/// Only signed integers can be negated.
impl<const BE: bool, const N: usize, const S: bool> Neg for Int<BE, N, S>
where
    Self: NativeCast,
    <Self as NativeCast>::Native: Neg<Output = <Self as NativeCast>::Native>,
{
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_native(-self.to_native())
    }
}

impl<const BE: bool, const N: usize, const S: bool> Ord for Int<BE, N, S>
where
    Self: NativeCast,
    <Self as NativeCast>::Native: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_native().cmp(&other.to_native())
    }
}
impl<const BE: bool, const N: usize, const S: bool> PartialOrd for Int<BE, N, S>
where
    Self: NativeCast,
    <Self as NativeCast>::Native: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Formatted as the native value.
impl<const BE: bool, const N: usize, const S: bool> Debug for Int<BE, N, S>
where
    Self: NativeCast,
    <Self as NativeCast>::Native: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_native(), f)
    }
}
impl<const BE: bool, const N: usize, const S: bool> Display for Int<BE, N, S>
where
    Self: NativeCast,
    <Self as NativeCast>::Native: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_native(), f)
    }
}

derive_int!(Int<false, 2, false>, u16, from_le_bytes, to_le_bytes);
derive_int!(Int<false, 4, false>, u32, from_le_bytes, to_le_bytes);
derive_int!(Int<false, 8, false>, u64, from_le_bytes, to_le_bytes);
derive_int!(Int<false, 2, true>, i16, from_le_bytes, to_le_bytes);
derive_int!(Int<false, 4, true>, i32, from_le_bytes, to_le_bytes);
derive_int!(Int<false, 8, true>, i64, from_le_bytes, to_le_bytes);

derive_int!(Int<true, 2, false>, u16, from_be_bytes, to_be_bytes);
derive_int!(Int<true, 4, false>, u32, from_be_bytes, to_be_bytes);
derive_int!(Int<true, 8, false>, u64, from_be_bytes, to_be_bytes);
derive_int!(Int<true, 2, true>, i16, from_be_bytes, to_be_bytes);
derive_int!(Int<true, 4, true>, i32, from_be_bytes, to_be_bytes);
derive_int!(Int<true, 8, true>, i64, from_be_bytes, to_be_bytes);

unsafe impl Portable for u8 {}
unsafe impl Portable for i8 {}

pub mod le {
    pub type Int<const N: usize, const S: bool> = super::Int<false, N, S>;

    pub type U16 = Int<2, false>;
    pub type U32 = Int<4, false>;
    pub type U64 = Int<8, false>;
    pub type I16 = Int<2, true>;
    pub type I32 = Int<4, true>;
    pub type I64 = Int<8, true>;
}

pub mod be {
    pub type Int<const N: usize, const S: bool> = super::Int<true, N, S>;

    pub type U16 = Int<2, false>;
    pub type U32 = Int<4, false>;
    pub type U64 = Int<8, false>;
    pub type I16 = Int<2, true>;
    pub type I32 = Int<4, true>;
    pub type I64 = Int<8, true>;
}
