//! Monad: flattening nested structures.
//!
//! A tag models `Monad` by implementing [`FlattenImpl`]. `chain` is
//! `flatten` after `transform`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! chain(lift::<T>(x), f) == f(x)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! chain(m, |x| lift::<T>(x)) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, Nothing};
//! use polytag::tuple;
//! use polytag::typeclass::{chain, flatten};
//!
//! assert_eq!(flatten(tuple!(tuple!(1, 'a'), tuple!(), tuple!("b"))), tuple!(1, 'a', "b"));
//! assert_eq!(flatten(Just(Just(4))), Just(4));
//!
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//! assert_eq!(chain(Some(8), halve), Some(4));
//! assert_eq!(chain(Some(3), halve), None);
//! let _: Nothing = flatten(Just(Nothing));
//! ```

use crate::dispatch::{TagOf, Tagged};

use super::applicative::Applicative;
use super::functor::Transform;

/// Applicatives whose nested structures can be flattened.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Monad",
    note = "implement `polytag::typeclass::Monad` and `FlattenImpl` for the tag"
)]
pub trait Monad: Applicative {}

/// `flatten` implemented by the tag.
pub trait FlattenImpl<Xss>: Monad {
    /// The flattened structure.
    type Output;

    /// Removes one level of nesting.
    fn flatten(xss: Xss) -> Self::Output;
}

/// The `flatten` dispatcher.
pub trait Flatten {
    /// The flattened structure.
    type Output;

    /// Removes one level of nesting.
    fn flatten_nested(self) -> Self::Output;
}

impl<Xss> Flatten for Xss
where
    Xss: Tagged,
    TagOf<Xss>: FlattenImpl<Xss>,
{
    type Output = <TagOf<Xss> as FlattenImpl<Xss>>::Output;

    fn flatten_nested(self) -> Self::Output {
        <TagOf<Xss> as FlattenImpl<Xss>>::flatten(self)
    }
}

/// Removes one level of nesting from `xss`.
pub fn flatten<Xss: Flatten>(xss: Xss) -> Xss::Output {
    xss.flatten_nested()
}

/// The `chain` dispatcher.
pub trait Chain<F> {
    /// The flattened result.
    type Output;

    /// Transforms `self` with `function` and flattens the result.
    fn chain_with(self, function: &mut F) -> Self::Output;
}

impl<Xs, F> Chain<F> for Xs
where
    Xs: Transform<F>,
    Xs::Output: Flatten,
{
    type Output = <Xs::Output as Flatten>::Output;

    fn chain_with(self, function: &mut F) -> Self::Output {
        self.transform_with(function).flatten_nested()
    }
}

/// Applies `function` to every element of `xs` and flattens the
/// structures it returns.
pub fn chain<Xs, F>(xs: Xs, mut function: F) -> Xs::Output
where
    Xs: Chain<F>,
{
    xs.chain_with(&mut function)
}
