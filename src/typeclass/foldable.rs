//! Foldable: reducing a structure to a single value.
//!
//! A tag picks how it folds through [`Foldable::Mcd`]:
//!
//! - [`FoldFromIterable`]: folds are derived from
//!   [`Iterable`](super::Iterable) by taking the structure apart one
//!   element at a time
//! - [`NativeFold`]: the tag implements [`FoldLeftImpl`] and
//!   [`FoldRightImpl`] itself
//!
//! The folding function is called once per element and may return a
//! different type every time, so folding a tuple of naturals with
//! [`PlusFn`](super::PlusFn) yields a natural computed by the compiler.
//!
//! # Laws
//!
//! ```text
//! fold_left(xs, s, f) == f(...f(f(s, x1), x2)..., xn)
//! fold_right(xs, s, f) == f(x1, f(x2, ...f(xn, s)...))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{IntegralConstantTag, N1, N2, N3, N6};
//! use polytag::tuple;
//! use polytag::typeclass::{fold_left, fold_right, length, sum};
//!
//! let digits = fold_left(tuple!(1, 2, 3), String::new(), |text: String, digit: i32| {
//!     format!("{text}{digit}")
//! });
//! assert_eq!(digits, "123");
//!
//! let nested = fold_right(tuple!(1, 2, 3), 0, |digit: i32, rest: i32| digit - rest);
//! assert_eq!(nested, 2);
//!
//! let _: N6 = sum::<IntegralConstantTag, _>(tuple!(N1, N2, N3));
//! assert_eq!(length(tuple!('a', "b", 3u8)), 3);
//! ```

use std::marker::PhantomData;

use crate::dispatch::{CallOutput, False, Function, Predicate, Tag, TagOf, Tagged, True};

use super::iterable::{IsEmpty, Uncons};
use super::logical::Logical;
use super::monoid::{MultFn, OneImpl, PlusFn, ZeroImpl};

// =============================================================================
// Concept and implementation traits
// =============================================================================

/// Folding derived from [`Iterable`](super::Iterable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldFromIterable;

/// Folding implemented by the tag through [`FoldLeftImpl`] and
/// [`FoldRightImpl`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeFold;

/// Tags whose values can be folded.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Foldable",
    note = "implement `polytag::typeclass::Foldable` for the tag, choosing `FoldFromIterable` or `NativeFold`"
)]
pub trait Foldable: Tag {
    /// [`FoldFromIterable`] or [`NativeFold`].
    type Mcd;
}

/// A left fold implemented by the tag.
pub trait FoldLeftImpl<Xs, S, F>: Foldable {
    /// The final state.
    type Output;

    /// Folds `xs` from the left.
    fn fold_left(xs: Xs, state: S, function: &mut F) -> Self::Output;
}

/// A right fold implemented by the tag.
pub trait FoldRightImpl<Xs, S, F>: Foldable {
    /// The final state.
    type Output;

    /// Folds `xs` from the right.
    fn fold_right(xs: Xs, state: S, function: &mut F) -> Self::Output;
}

// =============================================================================
// Strategies
// =============================================================================

/// How a left fold resolves for one minimal complete definition.
pub trait FoldLeftBy<Xs, S, F> {
    /// The final state.
    type Output;

    /// Folds from the left.
    fn fold_left_by(xs: Xs, state: S, function: &mut F) -> Self::Output;
}

impl<Xs, S, F> FoldLeftBy<Xs, S, F> for NativeFold
where
    Xs: Tagged,
    TagOf<Xs>: FoldLeftImpl<Xs, S, F>,
{
    type Output = <TagOf<Xs> as FoldLeftImpl<Xs, S, F>>::Output;

    fn fold_left_by(xs: Xs, state: S, function: &mut F) -> Self::Output {
        <TagOf<Xs> as FoldLeftImpl<Xs, S, F>>::fold_left(xs, state, function)
    }
}

impl<Xs, S, F> FoldLeftBy<Xs, S, F> for FoldFromIterable
where
    Xs: IsEmpty,
    Xs::Output: FoldLeftStep<Xs, S, F>,
{
    type Output = <Xs::Output as FoldLeftStep<Xs, S, F>>::Output;

    fn fold_left_by(xs: Xs, state: S, function: &mut F) -> Self::Output {
        xs.emptiness().fold_left_step(xs, state, function)
    }
}

/// How a right fold resolves for one minimal complete definition.
pub trait FoldRightBy<Xs, S, F> {
    /// The final state.
    type Output;

    /// Folds from the right.
    fn fold_right_by(xs: Xs, state: S, function: &mut F) -> Self::Output;
}

impl<Xs, S, F> FoldRightBy<Xs, S, F> for NativeFold
where
    Xs: Tagged,
    TagOf<Xs>: FoldRightImpl<Xs, S, F>,
{
    type Output = <TagOf<Xs> as FoldRightImpl<Xs, S, F>>::Output;

    fn fold_right_by(xs: Xs, state: S, function: &mut F) -> Self::Output {
        <TagOf<Xs> as FoldRightImpl<Xs, S, F>>::fold_right(xs, state, function)
    }
}

impl<Xs, S, F> FoldRightBy<Xs, S, F> for FoldFromIterable
where
    Xs: IsEmpty,
    Xs::Output: FoldRightStep<Xs, S, F>,
{
    type Output = <Xs::Output as FoldRightStep<Xs, S, F>>::Output;

    fn fold_right_by(xs: Xs, state: S, function: &mut F) -> Self::Output {
        xs.emptiness().fold_right_step(xs, state, function)
    }
}

// =============================================================================
// Folding an Iterable
// =============================================================================

/// One step of a left fold over an iterable, dispatched on emptiness.
pub trait FoldLeftStep<Xs, S, F>: Logical {
    /// The final state.
    type Output;

    /// Returns `state` for an empty `xs`, otherwise combines the head and
    /// continues with the tail.
    fn fold_left_step(self, xs: Xs, state: S, function: &mut F) -> Self::Output;
}

impl<Xs, S, F> FoldLeftStep<Xs, S, F> for True {
    type Output = S;

    fn fold_left_step(self, _: Xs, state: S, _: &mut F) -> S {
        state
    }
}

impl<Xs, S, F> FoldLeftStep<Xs, S, F> for False
where
    Xs: Uncons,
    F: Function<(S, Xs::Head)>,
    Xs::Tail: IsEmpty,
    <Xs::Tail as IsEmpty>::Output: FoldLeftStep<Xs::Tail, CallOutput<F, (S, Xs::Head)>, F>,
{
    type Output = <<Xs::Tail as IsEmpty>::Output as FoldLeftStep<
        Xs::Tail,
        CallOutput<F, (S, Xs::Head)>,
        F,
    >>::Output;

    fn fold_left_step(self, xs: Xs, state: S, function: &mut F) -> Self::Output {
        let (first, rest) = xs.split_first();
        let next = function.apply((state, first));
        rest.emptiness().fold_left_step(rest, next, function)
    }
}

impl<Xs, S, F> FoldLeftStep<Xs, S, F> for bool
where
    Xs: Uncons<Tail = Xs> + IsEmpty<Output = Self>,
    F: Function<(S, Xs::Head), Output = S>,
{
    type Output = S;

    fn fold_left_step(self, xs: Xs, state: S, function: &mut F) -> S {
        let mut exhausted = self;
        let mut remaining = xs;
        let mut state = state;
        while !exhausted {
            let (first, rest) = remaining.split_first();
            state = function.apply((state, first));
            remaining = rest;
            exhausted = remaining.emptiness();
        }
        state
    }
}

/// One step of a right fold over an iterable, dispatched on emptiness.
pub trait FoldRightStep<Xs, S, F>: Logical {
    /// The final state.
    type Output;

    /// Returns `state` for an empty `xs`, otherwise folds the tail first
    /// and combines the head with the result.
    fn fold_right_step(self, xs: Xs, state: S, function: &mut F) -> Self::Output;
}

impl<Xs, S, F> FoldRightStep<Xs, S, F> for True {
    type Output = S;

    fn fold_right_step(self, _: Xs, state: S, _: &mut F) -> S {
        state
    }
}

impl<Xs, S, F> FoldRightStep<Xs, S, F> for False
where
    Xs: Uncons,
    Xs::Tail: IsEmpty,
    <Xs::Tail as IsEmpty>::Output: FoldRightStep<Xs::Tail, S, F>,
    F: Function<(
        Xs::Head,
        <<Xs::Tail as IsEmpty>::Output as FoldRightStep<Xs::Tail, S, F>>::Output,
    )>,
{
    type Output = <F as Function<(
        Xs::Head,
        <<Xs::Tail as IsEmpty>::Output as FoldRightStep<Xs::Tail, S, F>>::Output,
    )>>::Output;

    fn fold_right_step(self, xs: Xs, state: S, function: &mut F) -> Self::Output {
        let (first, rest) = xs.split_first();
        let folded = rest.emptiness().fold_right_step(rest, state, function);
        function.apply((first, folded))
    }
}

impl<Xs, S, F> FoldRightStep<Xs, S, F> for bool
where
    Xs: Uncons<Tail = Xs> + IsEmpty<Output = Self>,
    F: Function<(Xs::Head, S), Output = S>,
{
    type Output = S;

    fn fold_right_step(self, xs: Xs, state: S, function: &mut F) -> S {
        let mut elements = Vec::new();
        let mut exhausted = self;
        let mut remaining = xs;
        while !exhausted {
            let (first, rest) = remaining.split_first();
            elements.push(first);
            remaining = rest;
            exhausted = remaining.emptiness();
        }
        elements
            .into_iter()
            .rev()
            .fold(state, |state, element| function.apply((element, state)))
    }
}

// =============================================================================
// Dispatchers
// =============================================================================

/// The `fold_left` dispatcher.
pub trait FoldLeft<S, F> {
    /// The final state.
    type Output;

    /// Folds `self` from the left.
    fn fold_left_with(self, state: S, function: &mut F) -> Self::Output;
}

impl<Xs, S, F> FoldLeft<S, F> for Xs
where
    Xs: Tagged,
    TagOf<Xs>: Foldable,
    <TagOf<Xs> as Foldable>::Mcd: FoldLeftBy<Xs, S, F>,
{
    type Output = <<TagOf<Xs> as Foldable>::Mcd as FoldLeftBy<Xs, S, F>>::Output;

    fn fold_left_with(self, state: S, function: &mut F) -> Self::Output {
        <<TagOf<Xs> as Foldable>::Mcd as FoldLeftBy<Xs, S, F>>::fold_left_by(self, state, function)
    }
}

/// The `fold_right` dispatcher.
pub trait FoldRight<S, F> {
    /// The final state.
    type Output;

    /// Folds `self` from the right.
    fn fold_right_with(self, state: S, function: &mut F) -> Self::Output;
}

impl<Xs, S, F> FoldRight<S, F> for Xs
where
    Xs: Tagged,
    TagOf<Xs>: Foldable,
    <TagOf<Xs> as Foldable>::Mcd: FoldRightBy<Xs, S, F>,
{
    type Output = <<TagOf<Xs> as Foldable>::Mcd as FoldRightBy<Xs, S, F>>::Output;

    fn fold_right_with(self, state: S, function: &mut F) -> Self::Output {
        <<TagOf<Xs> as Foldable>::Mcd as FoldRightBy<Xs, S, F>>::fold_right_by(
            self, state, function,
        )
    }
}

/// Folds `xs` from the left, calling `function(state, element)`.
pub fn fold_left<Xs, S, F>(xs: Xs, state: S, mut function: F) -> Xs::Output
where
    Xs: FoldLeft<S, F>,
{
    xs.fold_left_with(state, &mut function)
}

/// Folds `xs` from the right, calling `function(element, state)`.
pub fn fold_right<Xs, S, F>(xs: Xs, state: S, mut function: F) -> Xs::Output
where
    Xs: FoldRight<S, F>,
{
    xs.fold_right_with(state, &mut function)
}

/// Same as [`fold_left`].
pub fn fold<Xs, S, F>(xs: Xs, state: S, function: F) -> Xs::Output
where
    Xs: FoldLeft<S, F>,
{
    fold_left(xs, state, function)
}

// =============================================================================
// Derived operations
// =============================================================================

/// Counts every element it is folded over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountFn;

impl<X> Function<(usize, X)> for CountFn {
    type Output = usize;

    fn apply(&mut self, (count, _): (usize, X)) -> usize {
        count + 1
    }
}

/// The number of elements in `xs`.
pub fn length<Xs>(xs: Xs) -> usize
where
    Xs: FoldLeft<usize, CountFn, Output = usize>,
{
    fold_left(xs, 0, CountFn)
}

/// Counts the elements satisfying the predicate `P`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountIf<P>(pub P);

impl<P, X> Function<(usize, X)> for CountIf<P>
where
    P: Predicate<X>,
{
    type Output = usize;

    fn apply(&mut self, (count, element): (usize, X)) -> usize {
        count + usize::from(self.0.test(&element).to_bool())
    }
}

/// The number of elements of `xs` satisfying `predicate`.
pub fn count_if<Xs, P>(xs: Xs, predicate: P) -> usize
where
    Xs: FoldLeft<usize, CountIf<P>, Output = usize>,
{
    fold_left(xs, 0, CountIf(predicate))
}

/// The sum of the elements of `xs` in the monoid `M`.
///
/// The fold starts from `zero::<M>()`, so summing an empty structure gives
/// the monoid's identity.
pub fn sum<M, Xs>(xs: Xs) -> Xs::Output
where
    M: ZeroImpl,
    Xs: FoldLeft<M::Output, PlusFn>,
{
    fold_left(xs, M::zero(), PlusFn)
}

/// The product of the elements of `xs` in the ring `R`.
pub fn product<R, Xs>(xs: Xs) -> Xs::Output
where
    R: OneImpl,
    Xs: FoldLeft<R::Output, MultFn>,
{
    fold_left(xs, R::one(), MultFn)
}

/// Calls `F` on every element for its side effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForEach<F>(pub F);

impl<F, X> Function<((), X)> for ForEach<F>
where
    F: Function<(X,)>,
{
    type Output = ();

    fn apply(&mut self, ((), element): ((), X)) {
        self.0.apply((element,));
    }
}

/// Calls `function` on every element of `xs`, in order.
pub fn for_each<Xs, F>(xs: Xs, function: F)
where
    Xs: FoldLeft<(), ForEach<F>, Output = ()>,
{
    fold_left(xs, (), ForEach(function));
}

/// Appends every element it is folded over to a vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushFn<T>(PhantomData<fn(T)>);

impl<T> Function<(Vec<T>, T)> for PushFn<T> {
    type Output = Vec<T>;

    fn apply(&mut self, (mut elements, element): (Vec<T>, T)) -> Vec<T> {
        elements.push(element);
        elements
    }
}

/// Collects the elements of `xs`, which must all have type `T`.
pub fn to_vec<T, Xs>(xs: Xs) -> Vec<T>
where
    Xs: FoldLeft<Vec<T>, PushFn<T>, Output = Vec<T>>,
{
    fold_left(xs, Vec::new(), PushFn(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{IntegralConstantTag, N0, N2, N3, N4, N5, N9, Nil, range};
    use crate::poly_fn;
    use crate::tuple;
    use rstest::rstest;

    poly_fn! {
        struct Describe;
        fn(text: String, value: i32) -> String { format!("{text}i{value}") }
        fn(text: String, value: char) -> String { format!("{text}c{value}") }
        fn(text: String, value: &'static str) -> String { format!("{text}s{value}") }
    }

    #[rstest]
    fn left_fold_visits_heterogeneous_elements_in_order() {
        let described = fold_left(tuple!(1, 'x', "yz"), String::new(), Describe);
        assert_eq!(described, "i1cxsyz");
    }

    #[rstest]
    fn right_fold_nests_to_the_right() {
        let folded = fold_right(tuple!(1, 2, 3, 4), 10, |element: i32, state: i32| element - state);
        assert_eq!(folded, 1 - (2 - (3 - (4 - 10))));
    }

    #[rstest]
    fn folding_empty_returns_the_state() {
        assert_eq!(fold_left(Nil, 7, |state: i32, _: i32| state + 1), 7);
        assert_eq!(length(Nil), 0);
    }

    #[rstest]
    fn sum_and_product_of_naturals_are_static() {
        let _: N9 = sum::<IntegralConstantTag, _>(tuple!(N2, N3, N4));
        let _: N0 = product::<IntegralConstantTag, _>(tuple!(N2, N0, N4));
        let _: N5 = sum::<IntegralConstantTag, _>(range(N2, N4));
    }

    #[rstest]
    fn sum_of_runtime_integers() {
        assert_eq!(sum::<i64, _>(tuple!(1i64, 2i64, 3i64)), 6);
        assert_eq!(product::<i64, _>(tuple!(2i64, 5i64)), 10);
    }

    #[rstest]
    fn count_if_mixes_static_and_runtime_answers() {
        let count = count_if(tuple!(1, 6, 8, 3), |value: &i32| *value > 4);
        assert_eq!(count, 2);
    }

    #[rstest]
    fn for_each_and_to_vec_preserve_order() {
        let mut seen = Vec::new();
        for_each(tuple!(3, 1, 2), |value: i32| seen.push(value));
        assert_eq!(seen, vec![3, 1, 2]);
        assert_eq!(to_vec::<i32, _>(tuple!(5, 6)), vec![5, 6]);
    }
}
