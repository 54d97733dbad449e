//! Explicit conversions between tags and tag-directed construction.
//!
//! [`to`] converts a value into another tag's representation, for example
//! a range into the tuple of its elements. Unlike [`Embed`](super::Embed),
//! a conversion may lose structure (a set converted to a tuple forgets that
//! order is irrelevant), so conversions are never applied implicitly.
//!
//! [`make`] builds a value of a given tag from a standard Rust tuple of
//! arguments.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{SetTag, TupleTag, N1, N2};
//! use polytag::dispatch::{make, to};
//! use polytag::typeclass::equal;
//! use polytag::{set, tuple};
//!
//! let numbers = make::<TupleTag, _>((1, 'a', 2.5));
//! assert_eq!(numbers, tuple!(1, 'a', 2.5));
//!
//! let from_tuple = to::<SetTag, _>(tuple!(N1, N2, N1));
//! let _: polytag::dispatch::True = equal(&from_tuple, &set!(N2, N1));
//! ```

use super::tag::Tag;

/// Conversion of `Self` into the representation of tag `C`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted to tag `{C}`",
    note = "conversions are declared by implementing `polytag::dispatch::Convert<{C}>`"
)]
pub trait Convert<C: Tag> {
    /// The converted value.
    type Output;

    /// Performs the conversion.
    fn convert(self) -> Self::Output;
}

/// Converts `value` into the representation of tag `C`.
pub fn to<C, X>(value: X) -> X::Output
where
    C: Tag,
    X: Convert<C>,
{
    value.convert()
}

/// Construction of a value of tag `Self` from the arguments `Args`.
///
/// `Args` is a standard tuple so that every arity goes through one trait.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` cannot be built from `{Args}`",
    note = "pass the constructor arguments as a standard tuple, e.g. `make::<TupleTag, _>((1, 2))`"
)]
pub trait Make<Args>: Tag {
    /// The constructed value.
    type Output;

    /// Builds the value.
    fn make(args: Args) -> Self::Output;
}

/// Builds a value of tag `T` from a standard tuple of arguments.
pub fn make<T, Args>(args: Args) -> T::Output
where
    T: Make<Args>,
{
    T::make(args)
}
