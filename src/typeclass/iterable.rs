//! Iterable: structures with a first element and a rest.
//!
//! The minimal complete definition is [`IsEmptyImpl`] and [`UnconsImpl`].
//! `uncons` hands out the head and the tail together, which lets an
//! implementation move both out of one value. From these two, tags that
//! choose the [`FoldFromIterable`](super::FoldFromIterable) and
//! [`SearchFromIterable`](super::SearchFromIterable) strategies get
//! [`Foldable`](super::Foldable) and [`Searchable`](super::Searchable) for
//! free.
//!
//! `is_empty` answers with a [`Logical`]. Heterogeneous structures answer
//! at compile time, and every operation on them is unrolled by the
//! compiler. Runtime structures answer with a `bool`, and the derived
//! operations become ordinary loops.
//!
//! # Laws
//!
//! For a non-empty `xs`:
//!
//! ```text
//! uncons(xs) == (head(xs), tail(xs))
//! at(xs, N0) == head(xs)
//! drop_front(xs, N1) == tail(xs)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N2, range, N4, N9};
//! use polytag::dispatch::{False, True};
//! use polytag::tuple;
//! use polytag::typeclass::{at, drop_front, head, is_empty, last, tail};
//!
//! let items = tuple!(1, "two", 3.0);
//! let _: False = is_empty(&items);
//! assert_eq!(head(items), 1);
//! assert_eq!(tail(items), tuple!("two", 3.0));
//! assert_eq!(at(items, N2), 3.0);
//! assert_eq!(last(items), 3.0);
//! assert_eq!(drop_front(items, N2), tuple!(3.0));
//!
//! let numbers = range(N4, N9);
//! let _: N4 = head(numbers);
//! let _: True = is_empty(&drop_front(numbers, N9));
//! ```

use crate::dispatch::{False, Tag, TagOf, Tagged, True};

use super::logical::Logical;

// =============================================================================
// Concept and implementation traits
// =============================================================================

/// Tags whose values can be taken apart one element at a time.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Iterable",
    note = "implement `polytag::typeclass::Iterable`, `IsEmptyImpl` and `UnconsImpl` for the tag"
)]
pub trait Iterable: Tag {}

/// Whether `Xs` has no elements.
pub trait IsEmptyImpl<Xs>: Iterable {
    /// The answer; a type-level boolean for heterogeneous structures.
    type Output: Logical;

    /// Checks for emptiness.
    fn is_empty(xs: &Xs) -> Self::Output;
}

/// Splits a non-empty `Xs` into its first element and the rest.
#[diagnostic::on_unimplemented(
    message = "`{Xs}` cannot be split into a head and a tail",
    note = "the structure may be statically empty"
)]
pub trait UnconsImpl<Xs>: Iterable {
    /// The first element.
    type Head;

    /// Everything after the first element.
    type Tail;

    /// Splits the structure.
    fn uncons(xs: Xs) -> (Self::Head, Self::Tail);
}

/// The element at index `N`.
#[diagnostic::on_unimplemented(
    message = "`{Xs}` has no element at index `{N}`",
    note = "indices are compile-time naturals and must be below the length"
)]
pub trait AtImpl<Xs, N>: Iterable {
    /// The element.
    type Output;

    /// Extracts the element.
    fn at(xs: Xs) -> Self::Output;
}

/// `Xs` without its first `N` elements (all of them if there are fewer).
pub trait DropFrontImpl<Xs, N>: Iterable {
    /// The remaining structure.
    type Output;

    /// Drops the elements.
    fn drop_front(xs: Xs) -> Self::Output;
}

// =============================================================================
// Dispatchers
// =============================================================================

/// The `is_empty` dispatcher.
pub trait IsEmpty {
    /// The answer.
    type Output: Logical;

    /// Checks for emptiness.
    fn emptiness(&self) -> Self::Output;
}

impl<Xs> IsEmpty for Xs
where
    Xs: Tagged,
    TagOf<Xs>: IsEmptyImpl<Xs>,
{
    type Output = <TagOf<Xs> as IsEmptyImpl<Xs>>::Output;

    fn emptiness(&self) -> Self::Output {
        <TagOf<Xs> as IsEmptyImpl<Xs>>::is_empty(self)
    }
}

/// The `uncons` dispatcher.
pub trait Uncons {
    /// The first element.
    type Head;

    /// Everything after the first element.
    type Tail;

    /// Splits the structure.
    fn split_first(self) -> (Self::Head, Self::Tail);
}

impl<Xs> Uncons for Xs
where
    Xs: Tagged,
    TagOf<Xs>: UnconsImpl<Xs>,
{
    type Head = <TagOf<Xs> as UnconsImpl<Xs>>::Head;
    type Tail = <TagOf<Xs> as UnconsImpl<Xs>>::Tail;

    fn split_first(self) -> (Self::Head, Self::Tail) {
        <TagOf<Xs> as UnconsImpl<Xs>>::uncons(self)
    }
}

/// Whether `xs` has no elements.
pub fn is_empty<Xs: IsEmpty>(xs: &Xs) -> Xs::Output {
    xs.emptiness()
}

/// The first element of `xs` and the rest.
pub fn uncons<Xs: Uncons>(xs: Xs) -> (Xs::Head, Xs::Tail) {
    xs.split_first()
}

/// The first element of `xs`.
pub fn head<Xs: Uncons>(xs: Xs) -> Xs::Head {
    xs.split_first().0
}

/// Everything after the first element of `xs`.
pub fn tail<Xs: Uncons>(xs: Xs) -> Xs::Tail {
    xs.split_first().1
}

/// The element of `xs` at the compile-time index `index`.
pub fn at<Xs, N>(xs: Xs, _index: N) -> <TagOf<Xs> as AtImpl<Xs, N>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: AtImpl<Xs, N>,
{
    <TagOf<Xs> as AtImpl<Xs, N>>::at(xs)
}

/// `xs` without its first `count` elements.
pub fn drop_front<Xs, N>(xs: Xs, _count: N) -> <TagOf<Xs> as DropFrontImpl<Xs, N>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: DropFrontImpl<Xs, N>,
{
    <TagOf<Xs> as DropFrontImpl<Xs, N>>::drop_front(xs)
}

// =============================================================================
// last
// =============================================================================

/// The last element of a non-empty iterable.
pub trait Last {
    /// The element.
    type Output;

    /// Walks to the last element.
    fn last_element(self) -> Self::Output;
}

impl<Xs> Last for Xs
where
    Xs: Uncons,
    Xs::Tail: IsEmpty,
    <Xs::Tail as IsEmpty>::Output: LastStep<Xs::Head, Xs::Tail>,
{
    type Output = <<Xs::Tail as IsEmpty>::Output as LastStep<Xs::Head, Xs::Tail>>::Output;

    fn last_element(self) -> Self::Output {
        let (first, rest) = self.split_first();
        rest.emptiness().last_step(first, rest)
    }
}

/// One step of [`last`], dispatched on whether the rest is empty.
pub trait LastStep<H, T>: Logical {
    /// The last element.
    type Output;

    /// Returns `first` if `rest` is empty, otherwise keeps walking.
    fn last_step(self, first: H, rest: T) -> Self::Output;
}

impl<H, T> LastStep<H, T> for True {
    type Output = H;

    fn last_step(self, first: H, _: T) -> H {
        first
    }
}

impl<H, T: Last> LastStep<H, T> for False {
    type Output = T::Output;

    fn last_step(self, _: H, rest: T) -> T::Output {
        rest.last_element()
    }
}

impl<H, T> LastStep<H, T> for bool
where
    T: Uncons<Head = H, Tail = T> + IsEmpty<Output = Self>,
{
    type Output = H;

    fn last_step(self, first: H, rest: T) -> H {
        let mut current = first;
        let mut remaining = rest;
        let mut exhausted = self;
        while !exhausted {
            let (next, after) = remaining.split_first();
            current = next;
            remaining = after;
            exhausted = remaining.emptiness();
        }
        current
    }
}

/// The last element of `xs`.
pub fn last<Xs: Last>(xs: Xs) -> Xs::Output {
    xs.last_element()
}
