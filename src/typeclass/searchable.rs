//! Searchable: looking for elements satisfying a predicate.
//!
//! Like [`Foldable`](super::Foldable), a tag chooses through
//! [`Searchable::Mcd`] between deriving the search from
//! [`Iterable`](super::Iterable) ([`SearchFromIterable`]) and implementing
//! [`FindIfImpl`]/[`AnyOfImpl`] itself ([`NativeSearch`]).
//!
//! On a heterogeneous structure `find_if` needs a predicate answering at
//! compile time: the element found decides the result type, which is
//! [`Just`](crate::datatype::Just) of that element or
//! [`Nothing`](crate::datatype::Nothing). On a runtime structure it answers
//! with an `Option`.
//!
//! `any_of` stops at the first element for which the predicate holds. With
//! a type-level predicate, elements after that point are never tested and
//! may not even support the predicate.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, N1, N2, N3, Nothing};
//! use polytag::dispatch::{False, True};
//! use polytag::tuple;
//! use polytag::typeclass::{all_of, any_of, contains, find};
//!
//! let _: True = contains(tuple!(N1, 'x', N3), N3);
//! let _: False = contains(tuple!(N1, 'x', N3), N2);
//!
//! let found: Just<N3> = find(tuple!(N1, 'x', N3), N3);
//! let _: Nothing = find(tuple!(N1, 'x'), N2);
//! assert_eq!(found, Just(N3));
//!
//! assert!(any_of(tuple!(1, 5, 9), |n: &i32| *n > 4));
//! assert!(!all_of(tuple!(1, 5, 9), |n: &i32| *n > 4));
//! ```

use crate::datatype::{Just, Nothing};
use crate::dispatch::{Complement, False, Predicate, Tag, TagOf, Tagged, TestOutput, True};

use super::comparable::EqualTo;
use super::iterable::{IsEmpty, Uncons};
use super::logical::{Logical, LogicalNot};

// =============================================================================
// Concept and implementation traits
// =============================================================================

/// Searching derived from [`Iterable`](super::Iterable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFromIterable;

/// Searching implemented by the tag through [`FindIfImpl`] and
/// [`AnyOfImpl`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeSearch;

/// Tags whose values can be searched.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Searchable",
    note = "implement `polytag::typeclass::Searchable` for the tag, choosing `SearchFromIterable` or `NativeSearch`"
)]
pub trait Searchable: Tag {
    /// [`SearchFromIterable`] or [`NativeSearch`].
    type Mcd;
}

/// `find_if` implemented by the tag.
pub trait FindIfImpl<Xs, P>: Searchable {
    /// The optional element found.
    type Output;

    /// Returns the first element satisfying `predicate`.
    fn find_if(xs: Xs, predicate: &mut P) -> Self::Output;
}

/// `any_of` implemented by the tag.
pub trait AnyOfImpl<Xs, P>: Searchable {
    /// The answer.
    type Output: Logical;

    /// Whether some element satisfies `predicate`.
    fn any_of(xs: Xs, predicate: &mut P) -> Self::Output;
}

// =============================================================================
// Strategies
// =============================================================================

/// How `find_if` resolves for one minimal complete definition.
pub trait FindIfBy<Xs, P> {
    /// The optional element found.
    type Output;

    /// Searches `xs`.
    fn find_if_by(xs: Xs, predicate: &mut P) -> Self::Output;
}

impl<Xs, P> FindIfBy<Xs, P> for NativeSearch
where
    Xs: Tagged,
    TagOf<Xs>: FindIfImpl<Xs, P>,
{
    type Output = <TagOf<Xs> as FindIfImpl<Xs, P>>::Output;

    fn find_if_by(xs: Xs, predicate: &mut P) -> Self::Output {
        <TagOf<Xs> as FindIfImpl<Xs, P>>::find_if(xs, predicate)
    }
}

impl<Xs, P> FindIfBy<Xs, P> for SearchFromIterable
where
    Xs: IsEmpty,
    Xs::Output: FindStep<Xs, P>,
{
    type Output = <Xs::Output as FindStep<Xs, P>>::Output;

    fn find_if_by(xs: Xs, predicate: &mut P) -> Self::Output {
        xs.emptiness().find_step(xs, predicate)
    }
}

/// How `any_of` resolves for one minimal complete definition.
pub trait AnyOfBy<Xs, P> {
    /// The answer.
    type Output: Logical;

    /// Searches `xs`.
    fn any_of_by(xs: Xs, predicate: &mut P) -> Self::Output;
}

impl<Xs, P> AnyOfBy<Xs, P> for NativeSearch
where
    Xs: Tagged,
    TagOf<Xs>: AnyOfImpl<Xs, P>,
{
    type Output = <TagOf<Xs> as AnyOfImpl<Xs, P>>::Output;

    fn any_of_by(xs: Xs, predicate: &mut P) -> Self::Output {
        <TagOf<Xs> as AnyOfImpl<Xs, P>>::any_of(xs, predicate)
    }
}

impl<Xs, P> AnyOfBy<Xs, P> for SearchFromIterable
where
    Xs: IsEmpty,
    Xs::Output: AnyStep<Xs, P>,
{
    type Output = <Xs::Output as AnyStep<Xs, P>>::Output;

    fn any_of_by(xs: Xs, predicate: &mut P) -> Self::Output {
        xs.emptiness().any_step(xs, predicate)
    }
}

// =============================================================================
// Searching an Iterable
// =============================================================================

/// One step of `find_if` over an iterable, dispatched on emptiness.
pub trait FindStep<Xs, P>: Logical {
    /// The optional element found.
    type Output;

    /// Gives up on an empty `xs`, otherwise tests the head.
    fn find_step(self, xs: Xs, predicate: &mut P) -> Self::Output;
}

impl<Xs, P> FindStep<Xs, P> for True {
    type Output = Nothing;

    fn find_step(self, _: Xs, _: &mut P) -> Nothing {
        Nothing
    }
}

impl<Xs, P> FindStep<Xs, P> for False
where
    Xs: Uncons,
    P: Predicate<Xs::Head>,
    TestOutput<P, Xs::Head>: FoundStep<Xs::Head, Xs::Tail, P>,
{
    type Output = <TestOutput<P, Xs::Head> as FoundStep<Xs::Head, Xs::Tail, P>>::Output;

    fn find_step(self, xs: Xs, predicate: &mut P) -> Self::Output {
        let (first, rest) = xs.split_first();
        predicate.test(&first).found_step(first, rest, predicate)
    }
}

impl<Xs, P> FindStep<Xs, P> for bool
where
    Xs: Uncons<Tail = Xs> + IsEmpty<Output = Self>,
    P: Predicate<Xs::Head>,
{
    type Output = Option<Xs::Head>;

    fn find_step(self, xs: Xs, predicate: &mut P) -> Option<Xs::Head> {
        let mut exhausted = self;
        let mut remaining = xs;
        while !exhausted {
            let (first, rest) = remaining.split_first();
            if predicate.test(&first).to_bool() {
                return Some(first);
            }
            remaining = rest;
            exhausted = remaining.emptiness();
        }
        None
    }
}

/// Continues `find_if` after testing one element, dispatched on the
/// predicate's answer.
#[diagnostic::on_unimplemented(
    message = "`find_if` over a heterogeneous structure needs a compile-time predicate",
    label = "the predicate answered with `{Self}`",
    note = "the element found decides the result type; use a predicate answering `True` or `False`, or use `any_of`"
)]
pub trait FoundStep<H, T, P>: Logical {
    /// The optional element found.
    type Output;

    /// Returns `first` if it matched, otherwise searches `rest`.
    fn found_step(self, first: H, rest: T, predicate: &mut P) -> Self::Output;
}

impl<H, T, P> FoundStep<H, T, P> for True {
    type Output = Just<H>;

    fn found_step(self, first: H, _: T, _: &mut P) -> Just<H> {
        Just(first)
    }
}

impl<H, T, P> FoundStep<H, T, P> for False
where
    T: IsEmpty,
    T::Output: FindStep<T, P>,
{
    type Output = <T::Output as FindStep<T, P>>::Output;

    fn found_step(self, _: H, rest: T, predicate: &mut P) -> Self::Output {
        rest.emptiness().find_step(rest, predicate)
    }
}

/// One step of `any_of` over an iterable, dispatched on emptiness.
pub trait AnyStep<Xs, P>: Logical {
    /// The answer.
    type Output: Logical;

    /// Answers `False` for an empty `xs`, otherwise tests the head and only
    /// continues if it did not match.
    fn any_step(self, xs: Xs, predicate: &mut P) -> Self::Output;
}

impl<Xs, P> AnyStep<Xs, P> for True {
    type Output = False;

    fn any_step(self, _: Xs, _: &mut P) -> False {
        False
    }
}

impl<Xs, P> AnyStep<Xs, P> for False
where
    Xs: Uncons,
    P: Predicate<Xs::Head>,
    TestOutput<P, Xs::Head>: AnyHit<Xs::Tail, P>,
{
    type Output = <TestOutput<P, Xs::Head> as AnyHit<Xs::Tail, P>>::Output;

    fn any_step(self, xs: Xs, predicate: &mut P) -> Self::Output {
        let (first, rest) = xs.split_first();
        predicate.test(&first).any_hit(rest, predicate)
    }
}

impl<Xs, P> AnyStep<Xs, P> for bool
where
    Xs: Uncons<Tail = Xs> + IsEmpty<Output = Self>,
    P: Predicate<Xs::Head>,
{
    type Output = Self;

    fn any_step(self, xs: Xs, predicate: &mut P) -> Self {
        let mut exhausted = self;
        let mut remaining = xs;
        while !exhausted {
            let (first, rest) = remaining.split_first();
            if predicate.test(&first).to_bool() {
                return true;
            }
            remaining = rest;
            exhausted = remaining.emptiness();
        }
        false
    }
}

/// Continues `any_of` after testing one element, dispatched on the
/// predicate's answer.
///
/// A static `True` ends the search without placing any requirement on the
/// remaining elements.
pub trait AnyHit<T, P>: Logical {
    /// The answer.
    type Output: Logical;

    /// Answers for the whole structure given the answer for its head.
    fn any_hit(self, rest: T, predicate: &mut P) -> Self::Output;
}

impl<T, P> AnyHit<T, P> for True {
    type Output = Self;

    fn any_hit(self, _: T, _: &mut P) -> Self {
        Self
    }
}

impl<T, P> AnyHit<T, P> for False
where
    T: IsEmpty,
    T::Output: AnyStep<T, P>,
{
    type Output = <T::Output as AnyStep<T, P>>::Output;

    fn any_hit(self, rest: T, predicate: &mut P) -> Self::Output {
        rest.emptiness().any_step(rest, predicate)
    }
}

impl<T, P> AnyHit<T, P> for bool
where
    T: IsEmpty,
    T::Output: AnyStep<T, P>,
{
    type Output = Self;

    fn any_hit(self, rest: T, predicate: &mut P) -> Self {
        self || rest.emptiness().any_step(rest, predicate).to_bool()
    }
}

// =============================================================================
// Dispatchers
// =============================================================================

/// The `find_if` dispatcher.
pub trait FindIf<P> {
    /// The optional element found.
    type Output;

    /// Returns the first element satisfying `predicate`.
    fn find_if_with(self, predicate: &mut P) -> Self::Output;
}

impl<Xs, P> FindIf<P> for Xs
where
    Xs: Tagged,
    TagOf<Xs>: Searchable,
    <TagOf<Xs> as Searchable>::Mcd: FindIfBy<Xs, P>,
{
    type Output = <<TagOf<Xs> as Searchable>::Mcd as FindIfBy<Xs, P>>::Output;

    fn find_if_with(self, predicate: &mut P) -> Self::Output {
        <<TagOf<Xs> as Searchable>::Mcd as FindIfBy<Xs, P>>::find_if_by(self, predicate)
    }
}

/// The `any_of` dispatcher.
pub trait AnyOf<P> {
    /// The answer.
    type Output: Logical;

    /// Whether some element satisfies `predicate`.
    fn any_of_with(self, predicate: &mut P) -> Self::Output;
}

impl<Xs, P> AnyOf<P> for Xs
where
    Xs: Tagged,
    TagOf<Xs>: Searchable,
    <TagOf<Xs> as Searchable>::Mcd: AnyOfBy<Xs, P>,
{
    type Output = <<TagOf<Xs> as Searchable>::Mcd as AnyOfBy<Xs, P>>::Output;

    fn any_of_with(self, predicate: &mut P) -> Self::Output {
        <<TagOf<Xs> as Searchable>::Mcd as AnyOfBy<Xs, P>>::any_of_by(self, predicate)
    }
}

/// The result of `any_of(Xs, P)`.
pub type AnyOfOutput<Xs, P> = <Xs as AnyOf<P>>::Output;

/// The first element of `xs` satisfying `predicate`.
pub fn find_if<Xs, P>(xs: Xs, mut predicate: P) -> Xs::Output
where
    Xs: FindIf<P>,
{
    xs.find_if_with(&mut predicate)
}

/// Whether some element of `xs` satisfies `predicate`.
pub fn any_of<Xs, P>(xs: Xs, mut predicate: P) -> Xs::Output
where
    Xs: AnyOf<P>,
{
    xs.any_of_with(&mut predicate)
}

/// Whether every element of `xs` satisfies `predicate`.
pub fn all_of<Xs, P>(xs: Xs, predicate: P) -> <AnyOfOutput<Xs, Complement<P>> as LogicalNot>::Output
where
    Xs: AnyOf<Complement<P>>,
    AnyOfOutput<Xs, Complement<P>>: LogicalNot,
{
    any_of(xs, Complement(predicate)).not()
}

/// Whether no element of `xs` satisfies `predicate`.
pub fn none_of<Xs, P>(xs: Xs, predicate: P) -> <AnyOfOutput<Xs, P> as LogicalNot>::Output
where
    Xs: AnyOf<P>,
    AnyOfOutput<Xs, P>: LogicalNot,
{
    any_of(xs, predicate).not()
}

/// The first element of `xs` equal to `key`.
pub fn find<Xs, K>(xs: Xs, key: K) -> Xs::Output
where
    Xs: FindIf<EqualTo<K>>,
{
    find_if(xs, EqualTo(key))
}

/// Whether `xs` has an element equal to `key`.
pub fn contains<Xs, K>(xs: Xs, key: K) -> Xs::Output
where
    Xs: AnyOf<EqualTo<K>>,
{
    any_of(xs, EqualTo(key))
}

/// `contains` with the arguments flipped.
pub fn in_<K, Xs>(key: K, xs: Xs) -> Xs::Output
where
    Xs: AnyOf<EqualTo<K>>,
{
    contains(xs, key)
}

/// A predicate testing membership in a searchable structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainedIn<Ys>(pub Ys);

impl<Ys, X> Predicate<X> for ContainedIn<Ys>
where
    Ys: Clone + AnyOf<EqualTo<X>>,
    X: Clone,
{
    type Output = AnyOfOutput<Ys, EqualTo<X>>;

    fn test(&mut self, value: &X) -> Self::Output {
        contains(self.0.clone(), value.clone())
    }
}

/// Whether every element of `xs` is contained in `ys`.
pub fn is_subset<Xs, Ys>(
    xs: Xs,
    ys: Ys,
) -> <AnyOfOutput<Xs, Complement<ContainedIn<Ys>>> as LogicalNot>::Output
where
    Xs: AnyOf<Complement<ContainedIn<Ys>>>,
    AnyOfOutput<Xs, Complement<ContainedIn<Ys>>>: LogicalNot,
{
    all_of(xs, ContainedIn(ys))
}

/// The result of `contains(Xs, K)`.
pub type ContainsOutput<Xs, K> = AnyOfOutput<Xs, EqualTo<K>>;
