//! Derive macros for polytag.
//!
//! # Available Derive Macros
//!
//! - [`Tag`]: makes a type a dispatch tag with a unique identity
//! - [`Tagged`]: maps a type to its tag
//! - [`Struct`]: exposes a struct's fields as a heterogeneous tuple, with
//!   memberwise equality
//!
//! and the function-like [`string!`](macro@string), spelling an ASCII
//! literal as a compile-time string.
//!
//! # Example: a custom tag
//!
//! ```rust,ignore
//! use polytag::{Tag, Tagged};
//!
//! #[derive(Tag, Tagged)]
//! struct Celsius(f64);
//!
//! #[derive(Tagged)]
//! #[tagged(tag = Celsius)]
//! struct Reading(f64);
//! ```
//!
//! # Example: a struct
//!
//! ```rust,ignore
//! use polytag::Struct;
//! use polytag::typeclass::equal;
//!
//! #[derive(Struct)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! assert!(equal(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod attributes;
mod record;
mod string;
mod tag;
mod tagged;

use proc_macro::TokenStream;

/// Derive macro making a type a tag.
///
/// The tag's identity is a 32-bit FNV-1a hash of the type name, so two
/// derived tags compare as the same tag only when their names match.
///
/// # Attributes
///
/// - `#[tag(embeds = Type)]`: the tag this one embeds into (default: none)
/// - `#[tag(name = "...")]`: hash this string instead of the type name,
///   to tell apart same-named tags from different modules
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::polytag::dispatch::Tag for Celsius {
///     type Id = ::polytag::tag_id![/* 32 bits */];
///     type Embeds = ::polytag::dispatch::Top;
/// }
/// ```
#[proc_macro_derive(Tag, attributes(tag))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    tag::derive_tag_impl(input)
}

/// Derive macro mapping a type to its tag.
///
/// Without attributes the type is its own tag, which then also needs
/// `#[derive(Tag)]`.
///
/// # Attributes
///
/// - `#[tagged(tag = Type)]`: the tag to dispatch on
#[proc_macro_derive(Tagged, attributes(tagged))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    tagged::derive_tagged_impl(input)
}

/// Derive macro for heterogeneous structs.
///
/// Works on structs with named fields, tuple structs and unit structs.
///
/// # Generated Code
///
/// - `Tagged` with tag `StructTag<Self>`
/// - `Struct`: the fields as a tuple in declaration order, their names as
///   keys (`"0"`, `"1"`, ... for tuple structs) and a tag identity hashed
///   from the type name
/// - `EqualImpl<Self, Self>` for `StructTag<Self>`: memberwise equality,
///   stopping at the first member that differs
/// - `Convert<TupleTag>`: the members as a tuple
///
/// # Attributes
///
/// - `#[tag(name = "...")]`: as for [`Tag`]
///
/// # Example
///
/// ```rust,ignore
/// use polytag::Struct;
/// use polytag::datatype::{keys, N1};
/// use polytag::dispatch::True;
/// use polytag::typeclass::equal;
///
/// #[derive(Struct)]
/// struct Marker(N1, char);
///
/// let _: bool = equal(&Marker(N1, 'a'), &Marker(N1, 'b'));
/// assert_eq!(keys::<Marker>()[1].as_str(), "1");
/// ```
#[proc_macro_derive(Struct, attributes(tag))]
pub fn derive_struct(input: TokenStream) -> TokenStream {
    record::derive_struct_impl(input)
}

/// Builds a compile-time string from an ASCII literal.
///
/// Every character becomes a `Char` constant whose code is part of its
/// type, so two such strings compare with a `True` or `False` result.
/// Non-ASCII text, NUL and text longer than 63 characters are rejected.
///
/// # Generated Code
///
/// ```rust,ignore
/// // string!("ab")
/// ::polytag::datatype::Chars::from_chars(::polytag::datatype::Cons {
///     head: ::polytag::datatype::Char::<::polytag::tag_id![1 1 0 0 0 0 1]>::new(),
///     tail: ::polytag::datatype::Cons {
///         head: ::polytag::datatype::Char::<::polytag::tag_id![1 1 0 0 0 1 0]>::new(),
///         tail: ::polytag::datatype::Nil,
///     },
/// })
/// ```
#[proc_macro]
pub fn string(input: TokenStream) -> TokenStream {
    string::string_impl(input)
}
