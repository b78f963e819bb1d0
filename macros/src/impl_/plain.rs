use crate::{parts::repr::Repr, utils::generic};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error};

pub fn impl_(input: &DeriveInput) -> Result<TokenStream, Error> {
    let struct_data = match &input.data {
        Data::Struct(struct_data) => struct_data,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "`Plain` cannot be derived for enums: not every bit pattern is a valid discriminant",
            ))
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(&input.ident, "`Plain` cannot be derived for unions"));
        }
    };
    if !Repr::parse(&input.attrs)?.is_stable() {
        return Err(Error::new_spanned(
            &input.ident,
            "`Plain` requires `#[repr(C)]` or `#[repr(transparent)]`",
        ));
    }

    let self_ident = &input.ident;
    let generics = generic::without_defaults(&input.generics);
    let generic_params = &generics.params;
    let generic_args = generic::args(&input.generics);
    let where_clause = generic::where_clause(input, Some(quote! { ::fixarray::Plain }));

    let field_types = struct_data.fields.iter().map(|f| &f.ty).collect::<Vec<_>>();

    Ok(quote! {
        unsafe impl<#generic_params> ::fixarray::Plain for #self_ident<#generic_args>
        #where_clause
        {
            #[allow(clippy::let_unit_value)]
            const LAYOUT_CHECK: () = {
                ::core::assert!(
                    ::core::mem::size_of::<Self>() == 0 #( + ::core::mem::size_of::<#field_types>() )*,
                    "`Plain` type must not contain padding bytes",
                );
                #( let () = <#field_types as ::fixarray::Plain>::LAYOUT_CHECK; )*
            };
        }
    })
}
