use crate::utils::generic;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn impl_(input: &DeriveInput) -> TokenStream {
    let self_ident = &input.ident;
    let generics = generic::without_defaults(&input.generics);
    let generic_params = &generics.params;
    let generic_args = generic::args(&input.generics);
    let where_clause = generic::where_clause(input, None);

    quote! {
        impl<#generic_params> ::fixarray::Scalar for #self_ident<#generic_args>
        #where_clause
        {
        }
    }
}
