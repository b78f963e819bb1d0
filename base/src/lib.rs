#![no_std]
#![allow(clippy::missing_safety_doc)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod array;
pub mod error;
mod num;
mod ops;
mod prim;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod traits;
mod transfer;
/// Utility functions used by macros, so they must be publicly available.
///
/// *Please, don't use them by yourself because they aren't stable.*
pub mod utils;

pub use array::Array;
pub use error::{Error, ErrorKind};
pub use traits::{Assign, Bulk, MoveAssign, Plain, Scalar};

pub mod prelude {
    pub use crate::traits::*;
}
