use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, GenericParam, Generics};

/// Generic parameters suitable for `impl<...>`.
pub fn without_defaults(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for param in generics.params.iter_mut() {
        match param {
            GenericParam::Type(p) => {
                p.eq_token = None;
                p.default = None;
            }
            GenericParam::Const(p) => {
                p.eq_token = None;
                p.default = None;
            }
            GenericParam::Lifetime(_) => (),
        }
    }
    generics
}

pub fn args(generics: &Generics) -> TokenStream {
    generics.params.iter().fold(quote! {}, |accum, param| {
        let param = match param {
            GenericParam::Type(type_param) => {
                let param = &type_param.ident;
                quote! { #param }
            }
            GenericParam::Lifetime(lifetime_param) => {
                let param = &lifetime_param.lifetime;
                quote! { #param }
            }
            GenericParam::Const(const_param) => {
                let param = &const_param.ident;
                quote! { #param }
            }
        };
        quote! { #accum #param, }
    })
}

/// Existing where-clause extended with `field_type: bound` for every field, if `bound` is set.
pub fn where_clause(input: &DeriveInput, bound: Option<TokenStream>) -> TokenStream {
    let existing = input.generics.where_clause.as_ref().map_or(quote! {}, |w| {
        let wp = &w.predicates;
        let comma = if wp.trailing_punct() || wp.is_empty() {
            quote! {}
        } else {
            quote! {,}
        };
        quote! { #wp #comma }
    });

    let generated = match (&input.data, bound) {
        (Data::Struct(struct_data), Some(bound)) => struct_data.fields.iter().fold(quote! {}, |accum, field| {
            let ty = &field.ty;
            quote! {
                #accum
                #ty: #bound,
            }
        }),
        _ => quote! {},
    };

    quote! { where #existing #generated }
}
