//! Implementation of the `string!` macro.

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// The longest text accepted, matching `polytag::datatype::MAX_STRING_LEN`.
const MAX_LEN: usize = 63;

/// Main implementation of the string macro.
pub fn string_impl(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    let expanded = match expand(&literal.value(), literal.span()) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };
    TokenStream::from(expanded)
}

/// Checks that `text` fits in a compile-time string.
fn validate(text: &str, span: Span) -> syn::Result<()> {
    if let Some(position) = text.find(|c: char| !c.is_ascii()) {
        return Err(syn::Error::new(
            span,
            format!("string! text must be ASCII, found a non-ASCII character at byte {position}"),
        ));
    }
    if let Some(position) = text.find('\0') {
        return Err(syn::Error::new(
            span,
            format!("string! text must not contain NUL, found one at byte {position}"),
        ));
    }
    if text.len() > MAX_LEN {
        return Err(syn::Error::new(
            span,
            format!(
                "string! text is {} characters long, the limit is {MAX_LEN}",
                text.len()
            ),
        ));
    }
    Ok(())
}

/// `::polytag::tag_id![...]` spelling a 7-bit character code.
fn code_tokens(byte: u8) -> TokenStream2 {
    let bits = (0..7)
        .rev()
        .map(|shift| Literal::u8_unsuffixed(byte >> shift & 1));
    quote! { ::polytag::tag_id![#(#bits)*] }
}

fn expand(text: &str, span: Span) -> syn::Result<TokenStream2> {
    validate(text, span)?;
    let chars = text.bytes().rev().fold(
        quote! { ::polytag::datatype::Nil },
        |tail, byte| {
            let code = code_tokens(byte);
            quote! {
                ::polytag::datatype::Cons {
                    head: ::polytag::datatype::Char::<#code>::new(),
                    tail: #tail,
                }
            }
        },
    );
    Ok(quote! { ::polytag::datatype::Chars::from_chars(#chars) })
}
