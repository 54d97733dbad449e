//! Implementation of the `#[derive(Struct)]` macro.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Index, LitStr, Member, Type, parse_macro_input};

use crate::attributes::parse_tag_options;
use crate::tag::{identity_tokens, with_static_bounds};

/// One field: how to reach it, its key and its type.
struct Field<'a> {
    member: Member,
    key: String,
    binding: Ident,
    ty: &'a Type,
}

/// Main implementation of the Struct derive macro.
pub fn derive_struct_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };
    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Struct can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "Struct cannot be derived for unions."));
        }
    };

    let options = parse_tag_options(&input.attrs, false)?;
    let hashed = options
        .name
        .map_or_else(|| name.to_string(), |literal| literal.value());
    let identity = identity_tokens(&hashed);

    let fields = collect_fields(fields);
    let generics = with_static_bounds(&input.generics);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let this = quote! { #name #type_generics };

    let types: Vec<&Type> = fields.iter().map(|field| field.ty).collect();
    let members: Vec<&Member> = fields.iter().map(|field| &field.member).collect();
    let bindings: Vec<&Ident> = fields.iter().map(|field| &field.binding).collect();
    let keys: Vec<LitStr> = fields
        .iter()
        .map(|field| LitStr::new(&field.key, Span::call_site()))
        .collect();

    let members_pattern = bindings.iter().rev().fold(
        quote! { ::polytag::datatype::Nil },
        |tail, binding| quote! { ::polytag::datatype::Cons { head: #binding, tail: #tail } },
    );
    let rebuilt = match fields_style(&input.data) {
        Style::Named => quote! { Self { #(#members: #bindings),* } },
        Style::Unnamed => quote! { Self(#(#bindings),*) },
        Style::Unit => quote! { Self },
    };
    let equality = expand_equality(&fields, &this, &generics);

    Ok(quote! {
        impl #impl_generics ::polytag::dispatch::Tagged for #this #where_clause {
            type Tag = ::polytag::datatype::StructTag<Self>;
        }

        impl #impl_generics ::polytag::datatype::Struct for #this #where_clause {
            type Id = #identity;
            type Members = ::polytag::Tuple![#(#types),*];

            const KEYS: &'static [::polytag::datatype::Str] = &[#(::polytag::text!(#keys)),*];

            fn into_members(self) -> Self::Members {
                ::polytag::tuple!(#(self.#members),*)
            }

            fn from_members(members: Self::Members) -> Self {
                let #members_pattern = members;
                #rebuilt
            }
        }

        impl #impl_generics ::polytag::dispatch::Convert<::polytag::datatype::TupleTag> for #this #where_clause {
            type Output = <Self as ::polytag::datatype::Struct>::Members;

            fn convert(self) -> Self::Output {
                ::polytag::datatype::Struct::into_members(self)
            }
        }

        #equality
    })
}

enum Style {
    Named,
    Unnamed,
    Unit,
}

const fn fields_style(data: &Data) -> Style {
    match data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(_) => Style::Named,
            Fields::Unnamed(_) => Style::Unnamed,
            Fields::Unit => Style::Unit,
        },
        Data::Enum(_) | Data::Union(_) => Style::Unit,
    }
}

fn collect_fields(fields: &Fields) -> Vec<Field<'_>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, key) = field.ident.as_ref().map_or_else(
                || (Member::Unnamed(Index::from(index)), index.to_string()),
                |ident| {
                    let key = ident.to_string();
                    let key = key.strip_prefix("r#").unwrap_or(&key).to_owned();
                    (Member::Named(ident.clone()), key)
                },
            );
            Field {
                member,
                key,
                binding: format_ident!("member_{}", index),
                ty: &field.ty,
            }
        })
        .collect()
}

/// `EqualImpl<Self, Self>` for `StructTag<Self>`.
///
/// The result is the conjunction of the member equalities, nested from the
/// right and closed by `True`, so it stays a type-level answer when every
/// member's is.
fn expand_equality(
    fields: &[Field<'_>],
    this: &TokenStream2,
    generics: &syn::Generics,
) -> TokenStream2 {
    let mut output = quote! { ::polytag::dispatch::True };
    let mut body = quote! { ::polytag::dispatch::True };
    let mut bounds = Vec::new();

    for field in fields.iter().rev() {
        let ty = field.ty;
        let member = &field.member;
        let member_equal = quote! { <#ty as ::polytag::typeclass::Equal<#ty>>::Output };
        bounds.push(quote! { #ty: ::polytag::typeclass::Equal<#ty> });
        bounds.push(quote! { #member_equal: ::polytag::typeclass::LogicalAnd<#output> });
        body = quote! {
            <#member_equal as ::polytag::typeclass::LogicalAnd<#output>>::and_then(
                ::polytag::typeclass::Equal::equal_to(&left.#member, &right.#member),
                || #body,
            )
        };
        output = quote! { ::polytag::typeclass::AndOutput<#member_equal, #output> };
    }

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let existing = where_clause.map(|clause| {
        let predicates = clause.predicates.iter();
        quote! { #(#predicates,)* }
    });

    quote! {
        impl #impl_generics ::polytag::typeclass::EqualImpl<#this, #this>
            for ::polytag::datatype::StructTag<#this>
        where
            #existing
            #(#bounds,)*
        {
            type Output = #output;

            fn equal(left: &#this, right: &#this) -> Self::Output {
                #body
            }
        }
    }
}
