//! Applicative: lifting values into a structure and applying structures of
//! functions.
//!
//! A tag models `Applicative` by implementing [`LiftImpl`], which wraps a
//! single value. `ap` is derived from [`Monad`](super::Monad): every
//! function of the first structure is applied to every value of the second,
//! and the results are flattened in order.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(lift::<T>(Id), xs) == xs
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(lift::<T>(f), lift::<T>(x)) == lift::<T>(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, Nothing, OptionalTag, TupleTag};
//! use polytag::tuple;
//! use polytag::typeclass::{ap, lift};
//!
//! assert_eq!(lift::<TupleTag, _>('x'), tuple!('x'));
//! assert_eq!(lift::<OptionalTag, _>(3), Just(3));
//!
//! let double = |n: i32| n * 2;
//! assert_eq!(ap(Just(double), Just(21)), Just(42));
//! assert_eq!(ap(Just(double), Nothing), Nothing);
//!
//! let applied = ap(tuple!(|n: i32| n + 1, |n: i32| n * 10), tuple!(1, 2));
//! assert_eq!(applied, tuple!(2, 3, 10, 20));
//! ```

use crate::dispatch::Function;

use super::functor::{Functor, Transform};
use super::monad::Chain;

/// Functors into which a single value can be lifted.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Applicative",
    note = "implement `polytag::typeclass::Applicative` and `LiftImpl` for the tag"
)]
pub trait Applicative: Functor {}

/// `lift` implemented by the tag.
pub trait LiftImpl<X>: Applicative {
    /// The structure holding `X`.
    type Output;

    /// Wraps `value`.
    fn lift(value: X) -> Self::Output;
}

/// Wraps `value` in the structure of tag `A`.
pub fn lift<A, X>(value: X) -> A::Output
where
    A: LiftImpl<X>,
{
    A::lift(value)
}

/// Applies one function to every element of a cloned structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyTo<Xs>(pub Xs);

impl<Xs, F> Function<(F,)> for ApplyTo<Xs>
where
    Xs: Clone + Transform<F>,
{
    type Output = Xs::Output;

    fn apply(&mut self, (mut function,): (F,)) -> Self::Output {
        self.0.clone().transform_with(&mut function)
    }
}

/// Applies every function in `functions` to every value in `xs`.
pub fn ap<Fs, Xs>(functions: Fs, xs: Xs) -> Fs::Output
where
    Fs: Chain<ApplyTo<Xs>>,
{
    functions.chain_with(&mut ApplyTo(xs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{Just, N1, N2, Nothing, OptionalTag, Succ, TupleTag};
    use crate::dispatch::Id;
    use crate::tuple;
    use rstest::rstest;

    #[rstest]
    fn identity_law() {
        assert_eq!(ap(lift::<OptionalTag, _>(Id), Just(5)), Just(5));
        assert_eq!(ap(lift::<TupleTag, _>(Id), tuple!(1, 'b')), tuple!(1, 'b'));
    }

    #[rstest]
    fn homomorphism_law() {
        assert_eq!(
            ap(lift::<OptionalTag, _>(Succ), lift::<OptionalTag, _>(N1)),
            lift::<OptionalTag, _>(N2)
        );
    }

    #[rstest]
    fn nothing_absorbs() {
        let _: Nothing = ap(Nothing, Just(1));
        assert_eq!(ap(tuple!(), tuple!(1, 2)), tuple!());
    }
}
