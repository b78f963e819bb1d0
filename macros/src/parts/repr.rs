use syn::{parenthesized, Attribute, Result};

/// Layout hints found in `#[repr(...)]` attributes.
#[derive(Clone, Copy, Default, Debug)]
pub struct Repr {
    pub c: bool,
    pub transparent: bool,
}

impl Repr {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut repr = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("C") {
                    repr.c = true;
                } else if meta.path.is_ident("transparent") {
                    repr.transparent = true;
                } else if meta.input.peek(syn::token::Paren) {
                    // Arguments of other hints, e.g. `align(8)`.
                    let content;
                    parenthesized!(content in meta.input);
                    content.parse::<proc_macro2::TokenStream>()?;
                }
                Ok(())
            })?;
        }
        Ok(repr)
    }

    /// Field order and offsets are fixed.
    pub fn is_stable(&self) -> bool {
        self.c || self.transparent
    }
}
