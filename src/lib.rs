//! Fixed-size arrays stored inline, with operations that are checked against the item types at compile time.
//!
//! # Main types
//!
//! + [`Array<T, N>`](Array) - exactly `N` items of type `T`, same layout as `[T; N]`.
//! + [`Plain`] - plain old data. Arrays of plain types are copied and moved as raw bytes.
//! + [`Assign`] and [`MoveAssign`] - whether one item type can be copied or moved into another.
//! + [`Scalar`] - type that is applied to every item when used as an operand of an array operator.
//!
//! # Construction and access
//!
//! ```rust
//! use fixarray::{array, Array};
//!
//! let mut a: Array<i32, 4> = array![1, 2, 3, 4];
//! let b = Array::<usize, 4>::from_fn(|i| i * i);
//!
//! a[0] = 10;
//! assert_eq!(*a.front(), 10);
//! assert_eq!(*a.back(), 4);
//! assert_eq!(b.into_inner(), [0, 1, 4, 9]);
//! assert_eq!(Array::<u8, 16>::size(), 16);
//! ```
//!
//! The number of items in a literal must match the array size.
//!
//! ```compile_fail
//! let a: fixarray::Array<i32, 3> = fixarray::array![1, 2, 3, 4];
//! ```
//!
//! There is no first or last item of an empty array.
//!
//! ```compile_fail
//! let a = fixarray::Array::<i32, 0>::new([]);
//! let _ = a.front();
//! ```
//!
//! # Fill, copy, move and swap
//!
//! Which implementation is used depends on item types only.
//! Arrays of [`Plain`] items are transferred as raw bytes, other items are transferred one by one.
//!
//! ```rust
//! use fixarray::{array, Array};
//!
//! let mut a = Array::<String, 2>::default();
//! a.fill("abc");
//!
//! let mut b: Array<u32, 3> = array![1, 2, 3];
//! let mut c = Array::<u32, 3>::default();
//! c.copy(&b);
//! b.fill(&0u32);
//! b.swap(&mut c);
//! assert_eq!(b.into_inner(), [1, 2, 3]);
//!
//! // Lossless conversion between item types.
//! let wide: Array<i64, 3> = b.convert();
//! assert_eq!(wide.into_inner(), [1, 2, 3]);
//! ```
//!
//! Item types that cannot be assigned to each other are rejected.
//!
//! ```compile_fail
//! let mut a = fixarray::Array::<u8, 2>::default();
//! a.copy(&fixarray::Array::new([1u32, 2]));
//! ```
//!
//! # Elementwise operators
//!
//! ```rust
//! use fixarray::{array, Array};
//!
//! let a: Array<i32, 3> = array![1, 2, 3];
//! let b: Array<i32, 3> = array![4, 5, 6];
//!
//! assert_eq!(a + b, array![5, 7, 9]);
//! assert_eq!(b / a, array![4, 2, 2]);
//! assert_eq!(a * 2, array![2, 4, 6]);
//! assert_eq!(-a, array![-1, -2, -3]);
//! assert!(a != b);
//! assert!(Array::new([7u8; 4]) == 7);
//! ```
//!
//! Operator is available only if items support it.
//!
//! ```compile_fail
//! let a = fixarray::Array::new([true, false]);
//! let _ = a + a;
//! ```
//!
//! # User-defined item types
//!
//! ```rust
//! use fixarray::{Array, Plain};
//!
//! #[derive(Clone, Copy, Default, Debug, PartialEq, Plain)]
//! #[repr(C)]
//! struct Rgba {
//!     r: u8,
//!     g: u8,
//!     b: u8,
//!     a: u8,
//! }
//!
//! let mut pixels = Array::<Rgba, 2>::default();
//! pixels.fill(&Rgba { r: 1, g: 2, b: 3, a: 4 });
//! assert_eq!(pixels.cast::<u32>().into_inner(), [u32::from_ne_bytes([1, 2, 3, 4]); 2]);
//! ```
//!
//! Types with padding bytes are not plain.
//!
//! ```compile_fail
//! #[derive(Clone, Copy, Default, fixarray::Plain)]
//! #[repr(C)]
//! struct Padded {
//!     a: u8,
//!     b: u32,
//! }
//!
//! let mut a = fixarray::Array::<Padded, 2>::default();
//! a.copy(&fixarray::Array::<Padded, 2>::default());
//! ```
//!
//! Their bytes cannot be viewed either.
//!
//! ```compile_fail
//! #[derive(Clone, Copy, Default, fixarray::Plain)]
//! #[repr(C)]
//! struct Padded {
//!     a: u8,
//!     b: u32,
//! }
//!
//! let a = fixarray::Array::<Padded, 2>::default();
//! let _ = a.as_bytes().len();
//! ```
#![no_std]

pub use fixarray_base::{
    array,
    error::{self, Error, ErrorKind},
    impl_assign,
    impl_bulk_assign,
    traits::{self, Assign, Bulk, MoveAssign, Plain, Scalar},
    utils, Array,
};
pub use fixarray_macros::{Plain, Scalar};
pub use fixarray_portable as portable;

pub use portable::Portable;

pub mod prelude {
    pub use fixarray_base::prelude::*;
    pub use fixarray_portable::prelude::*;
}
