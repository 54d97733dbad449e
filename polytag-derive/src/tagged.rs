//! Implementation of the `#[derive(Tagged)]` macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::attributes::parse_tagged_tag;

/// Main implementation of the Tagged derive macro.
pub fn derive_tagged_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let tag = match parse_tagged_tag(&input.attrs) {
        Ok(Some(tag)) => quote! { #tag },
        Ok(None) => quote! { Self },
        Err(error) => return error.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    TokenStream::from(quote! {
        impl #impl_generics ::polytag::dispatch::Tagged for #name #type_generics #where_clause {
            type Tag = #tag;
        }
    })
}
