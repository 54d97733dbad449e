//! MonadPlus: monads with an empty structure and concatenation.
//!
//! A tag models `MonadPlus` by implementing [`EmptyImpl`] and
//! [`ConcatImpl`]. [`cycle`] and [`replicate`] are built from them,
//! recursing on a type-level count.
//!
//! # Laws
//!
//! ```text
//! concat(empty::<M>(), xs) == xs
//! concat(xs, empty::<M>()) == xs
//! concat(xs, concat(ys, zs)) == concat(concat(xs, ys), zs)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, N0, N3, Nothing, OptionalTag, TupleTag};
//! use polytag::tuple;
//! use polytag::typeclass::{concat, cycle, empty, replicate};
//!
//! assert_eq!(concat(tuple!(1, 'a'), tuple!("b")), tuple!(1, 'a', "b"));
//! assert_eq!(concat(Nothing, Just(2)), Just(2));
//! assert_eq!(concat(Just(1), Just(2)), Just(1));
//! let _: Nothing = empty::<OptionalTag>();
//!
//! assert_eq!(cycle(tuple!(1, 'x'), N3), tuple!(1, 'x', 1, 'x', 1, 'x'));
//! assert_eq!(replicate::<TupleTag, _, _>('z', N3), tuple!('z', 'z', 'z'));
//! assert_eq!(cycle(tuple!(1), N0), tuple!());
//! ```

use crate::datatype::{S, Z};
use crate::dispatch::{TagOf, Tagged};

use super::applicative::LiftImpl;
use super::monad::Monad;

/// Monads with an identity structure and an associative concatenation.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model MonadPlus",
    note = "implement `polytag::typeclass::MonadPlus`, `EmptyImpl` and `ConcatImpl` for the tag"
)]
pub trait MonadPlus: Monad {}

/// `empty` implemented by the tag.
pub trait EmptyImpl: MonadPlus {
    /// The empty structure.
    type Output;

    /// Builds the empty structure.
    fn empty() -> Self::Output;
}

/// `concat` implemented by the tag.
pub trait ConcatImpl<Xs, Ys>: MonadPlus {
    /// The combined structure.
    type Output;

    /// Combines `xs` and `ys`, `xs` first.
    fn concat(xs: Xs, ys: Ys) -> Self::Output;
}

/// The empty structure of tag `M`.
pub fn empty<M: EmptyImpl>() -> M::Output {
    M::empty()
}

/// The result of concatenating `Xs` and `Ys`.
pub type ConcatOutput<Xs, Ys> = <TagOf<Xs> as ConcatImpl<Xs, Ys>>::Output;

/// `xs` followed by `ys`.
pub fn concat<Xs, Ys>(xs: Xs, ys: Ys) -> ConcatOutput<Xs, Ys>
where
    Xs: Tagged,
    TagOf<Xs>: ConcatImpl<Xs, Ys>,
{
    <TagOf<Xs> as ConcatImpl<Xs, Ys>>::concat(xs, ys)
}

/// Repeated concatenation, keyed on the type-level count.
pub trait CycleBy<Xs> {
    /// `Self` copies of `Xs`, concatenated.
    type Output;

    /// Concatenates `Self` copies of `xs`.
    fn cycle_of(xs: Xs) -> Self::Output;
}

impl<Xs> CycleBy<Xs> for Z
where
    Xs: Tagged,
    TagOf<Xs>: EmptyImpl,
{
    type Output = <TagOf<Xs> as EmptyImpl>::Output;

    fn cycle_of(_: Xs) -> Self::Output {
        <TagOf<Xs> as EmptyImpl>::empty()
    }
}

impl<Xs, N> CycleBy<Xs> for S<N>
where
    N: CycleBy<Xs>,
    Xs: Tagged + Clone,
    TagOf<Xs>: ConcatImpl<Xs, N::Output>,
{
    type Output = ConcatOutput<Xs, N::Output>;

    fn cycle_of(xs: Xs) -> Self::Output {
        let rest = N::cycle_of(xs.clone());
        <TagOf<Xs> as ConcatImpl<Xs, N::Output>>::concat(xs, rest)
    }
}

/// `xs` concatenated with itself `times` times; empty for zero.
pub fn cycle<Xs, N>(xs: Xs, _times: N) -> N::Output
where
    N: CycleBy<Xs>,
{
    N::cycle_of(xs)
}

/// `times` copies of `value` in a structure of tag `M`.
pub fn replicate<M, X, N>(value: X, times: N) -> N::Output
where
    M: LiftImpl<X>,
    N: CycleBy<M::Output>,
{
    cycle(M::lift(value), times)
}
