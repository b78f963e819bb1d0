mod impl_;
mod parts;
mod utils;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `Plain` for a struct, so that arrays of it are copied and moved as raw bytes.
///
/// The struct must be `#[repr(C)]` or `#[repr(transparent)]`, must implement `Copy`,
/// and all of its fields must be `Plain` themselves.
/// Presence of padding bytes fails the build once the type is used in a bulk operation.
///
/// ```rust_no_check
/// #[derive(Clone, Copy, Default, fixarray::Plain)]
/// #[repr(C)]
/// struct Pixel {
///     r: u8,
///     g: u8,
///     b: u8,
///     a: u8,
/// }
/// ```
#[proc_macro_derive(Plain)]
pub fn derive_plain(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(impl_::plain(&input).unwrap_or_else(|e| e.to_compile_error()))
}

/// Derive `Scalar`: the type is applied to every item when used as an operand of an array operator.
#[proc_macro_derive(Scalar)]
pub fn derive_scalar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(impl_::scalar(&input))
}
