//! Implementation of the `#[derive(Tag)]` macro.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Generics, parse_macro_input, parse_quote};

use crate::attributes::parse_tag_options;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a.
pub fn fnv1a(text: &str) -> u32 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// `::polytag::tag_id![...]` for the hash of `name`, most significant bit
/// first.
pub fn identity_tokens(name: &str) -> TokenStream2 {
    let hash = fnv1a(name);
    let bits = (0..32)
        .rev()
        .map(|shift| Literal::u8_unsuffixed(u8::from(hash >> shift & 1 == 1)));
    quote! { ::polytag::tag_id![#(#bits)*] }
}

/// `generics` with every type parameter bounded by `'static`.
pub fn with_static_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for parameter in generics.type_params_mut() {
        parameter.bounds.push(parse_quote!('static));
    }
    generics
}

/// Main implementation of the Tag derive macro.
pub fn derive_tag_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };
    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let options = parse_tag_options(&input.attrs, true)?;
    let name = &input.ident;
    let hashed = options
        .name
        .map_or_else(|| name.to_string(), |literal| literal.value());
    let identity = identity_tokens(&hashed);
    let embeds = options
        .embeds
        .map_or_else(|| quote! { ::polytag::dispatch::Top }, |ty| quote! { #ty });

    let generics = with_static_bounds(&input.generics);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::polytag::dispatch::Tag for #name #type_generics #where_clause {
            type Id = #identity;
            type Embeds = #embeds;
        }
    })
}
