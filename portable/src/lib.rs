#![no_std]

mod int;

use fixarray_base::{traits::Plain, Array};

/// Type that can be safely transferred between different machines.
///
/// # Safety
///
/// Implementing this trait must guarantee that `Self` has the same binary representation on any target platform this crate could be built for.
pub unsafe trait Portable: Plain {}

/// Trait for casting portable type to/from native counterparts.
pub trait NativeCast: Portable + Copy {
    type Native: Copy;
    fn from_native(n: Self::Native) -> Self;
    fn to_native(&self) -> Self::Native;
}

unsafe impl<T: Portable, const N: usize> Portable for [T; N] {}
unsafe impl<T: Portable, const N: usize> Portable for Array<T, N> {}

pub use int::Int;

/// Little-endian types.
pub mod le {
    pub use super::int::le::*;
}

/// Big-endian types.
pub mod be {
    pub use super::int::be::*;
}

pub mod traits {
    pub use super::{NativeCast, Portable};
}

pub mod prelude {
    pub use super::traits::*;
}
