//! Half-open ranges of compile-time naturals.
//!
//! `range(N2, N5)` holds the naturals `N2`, `N3` and `N4`. Its bounds are
//! types, so every operation is arithmetic done by the compiler: `at`
//! computes `From + n` and rejects indices past the end, `drop_front` moves
//! the lower bound, and a range is empty exactly when both bounds are equal.
//!
//! A range never stores its elements. Folding or transforming one unrolls
//! over the naturals it denotes; `transform` produces a tuple.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{IntegralConstantTag, N0, N1, N2, N3, N4, N5, N9, TupleTag, range};
//! use polytag::dispatch::{False, True, to};
//! use polytag::tuple;
//! use polytag::typeclass::{at, equal, sum};
//!
//! let numbers = range(N2, N5);
//! assert_eq!(numbers.len(), 3);
//! let _: N3 = at(numbers, N1);
//! let _: N9 = sum::<IntegralConstantTag, _>(numbers);
//! assert_eq!(to::<TupleTag, _>(numbers), tuple!(N2, N3, N4));
//!
//! let _: True = equal(&range(N0, N0), &range(N5, N5));
//! let _: False = equal(&range(N0, N2), &range(N0, N3));
//! ```
//!
//! ```rust,compile_fail
//! use polytag::datatype::{N2, N5, range};
//!
//! let backwards = range(N5, N2);
//! ```
//!
//! ```rust,compile_fail
//! use polytag::datatype::{N2, N3, N5, range};
//! use polytag::typeclass::at;
//!
//! let past_the_end = at(range(N2, N5), N3);
//! ```

use std::fmt;

use crate::dispatch::{Bool, Convert, False, Make, Tagged, True, builtin_tag};
use crate::typeclass::{
    AtImpl, Comparable, DropFrontImpl, EqualImpl, FoldFromIterable, FoldRight, Foldable, Functor,
    IsEmptyImpl, Iterable, SearchFromIterable, Searchable, Transform, TransformImpl,
    TransformOutput, UnconsImpl,
};

use super::integral::{DifferenceOf, Nat, NatAdd, NatEq, NatLt, NatMin, NatSub, S, SumOf};
use super::tuple::{Nil, PrependFn, TupleTag};

/// The tag of [`Range`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RangeTag;

builtin_tag!(RangeTag => [0 0 1 0 0 1 0 1]);

/// The naturals from `From` (included) to `To` (excluded).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range<From, To> {
    from: From,
    to: To,
}

impl<From: Nat, To: Nat> Tagged for Range<From, To> {
    type Tag = RangeTag;
}

/// The range `[from, to)`; `to` must not be below `from`.
pub fn range<From, To>(from: From, to: To) -> Range<From, To>
where
    From: Nat,
    To: Nat + NatLt<From, Output = False>,
{
    Range { from, to }
}

impl<From: Nat, To: Nat> Range<From, To> {
    /// The lower bound.
    pub const fn start(&self) -> From {
        self.from
    }

    /// The upper bound.
    pub const fn end(&self) -> To {
        self.to
    }

    /// The number of elements.
    pub const fn len(&self) -> usize {
        To::VALUE - From::VALUE
    }

    /// Whether the range has no elements.
    pub const fn is_empty(&self) -> bool {
        To::VALUE == From::VALUE
    }

    /// The elements as runtime values.
    pub const fn iter(&self) -> std::ops::Range<usize> {
        From::VALUE..To::VALUE
    }
}

impl<From: Nat, To: Nat> IntoIterator for Range<From, To> {
    type Item = usize;
    type IntoIter = std::ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<From: Nat, To: Nat> fmt::Debug for Range<From, To> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "range({}, {})", From::VALUE, To::VALUE)
    }
}

/// The number of elements of `Range<From, To>` as a natural.
pub type RangeLen<From, To> = DifferenceOf<To, From>;

impl<From, To> Make<(From, To)> for RangeTag
where
    From: Nat,
    To: Nat + NatLt<From, Output = False>,
{
    type Output = Range<From, To>;

    fn make((from, to): (From, To)) -> Self::Output {
        range(from, to)
    }
}

// =============================================================================
// Comparable
// =============================================================================

impl Comparable for RangeTag {}

type BothEmpty<F1, T1, F2, T2> =
    <<F1 as NatEq<T1>>::Output as Bool>::And<<F2 as NatEq<T2>>::Output>;
type SameBounds<F1, T1, F2, T2> =
    <<F1 as NatEq<F2>>::Output as Bool>::And<<T1 as NatEq<T2>>::Output>;

impl<F1, T1, F2, T2> EqualImpl<Range<F1, T1>, Range<F2, T2>> for RangeTag
where
    F1: NatEq<T1> + NatEq<F2>,
    F2: NatEq<T2>,
    T1: NatEq<T2>,
{
    type Output = <BothEmpty<F1, T1, F2, T2> as Bool>::Or<SameBounds<F1, T1, F2, T2>>;

    fn equal(_: &Range<F1, T1>, _: &Range<F2, T2>) -> Self::Output {
        Default::default()
    }
}

// =============================================================================
// Iterable, Foldable, Searchable
// =============================================================================

impl Iterable for RangeTag {}

impl<From: Nat + NatEq<To>, To: Nat> IsEmptyImpl<Range<From, To>> for RangeTag {
    type Output = <From as NatEq<To>>::Output;

    fn is_empty(_: &Range<From, To>) -> Self::Output {
        Default::default()
    }
}

impl<From, To> UnconsImpl<Range<From, To>> for RangeTag
where
    From: Nat + NatLt<To, Output = True>,
    To: Nat,
{
    type Head = From;
    type Tail = Range<S<From>, To>;

    fn uncons(xs: Range<From, To>) -> (From, Range<S<From>, To>) {
        (
            xs.from,
            Range {
                from: S(xs.from),
                to: xs.to,
            },
        )
    }
}

impl<From, To, N> AtImpl<Range<From, To>, N> for RangeTag
where
    From: Nat + NatAdd<N>,
    To: Nat,
    SumOf<From, N>: NatLt<To, Output = True>,
{
    type Output = SumOf<From, N>;

    fn at(_: Range<From, To>) -> Self::Output {
        Default::default()
    }
}

type DroppedStart<From, To, N> = <SumOf<From, N> as NatMin<To>>::Output;

impl<From, To, N> DropFrontImpl<Range<From, To>, N> for RangeTag
where
    From: Nat + NatAdd<N>,
    To: Nat,
    SumOf<From, N>: NatMin<To>,
    DroppedStart<From, To, N>: Nat,
{
    type Output = Range<DroppedStart<From, To, N>, To>;

    fn drop_front(xs: Range<From, To>) -> Self::Output {
        Range {
            from: Default::default(),
            to: xs.to,
        }
    }
}

impl Foldable for RangeTag {
    type Mcd = FoldFromIterable;
}

impl Searchable for RangeTag {
    type Mcd = SearchFromIterable;
}

// =============================================================================
// Conversion and Functor
// =============================================================================

type RangeTuple<From, To> = <Range<From, To> as FoldRight<Nil, PrependFn>>::Output;

impl<From: Nat, To: Nat> Convert<TupleTag> for Range<From, To>
where
    Self: FoldRight<Nil, PrependFn>,
{
    type Output = RangeTuple<From, To>;

    fn convert(self) -> Self::Output {
        self.fold_right_with(Nil, &mut PrependFn)
    }
}

impl Functor for RangeTag {}

impl<From: Nat, To: Nat, F> TransformImpl<Range<From, To>, F> for RangeTag
where
    Range<From, To>: FoldRight<Nil, PrependFn>,
    RangeTuple<From, To>: Transform<F>,
{
    type Output = TransformOutput<RangeTuple<From, To>, F>;

    fn transform(xs: Range<From, To>, function: &mut F) -> Self::Output {
        xs.fold_right_with(Nil, &mut PrependFn)
            .transform_with(function)
    }
}

/// The length of `range` as a natural.
pub fn range_len<From: Nat, To: Nat + NatSub<From>>(_: &Range<From, To>) -> RangeLen<From, To> {
    Default::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{IntegralConstantTag, Just, N0, N1, N2, N3, N4, N5, N6, N7, Succ};
    use crate::dispatch::{make, to};
    use crate::tuple;
    use crate::typeclass::{
        at, contains, drop_front, equal, equal_to, find_if, head, is_empty, last, length,
        less_equal, product, tail, transform,
    };
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(RangeLen<N2, N7>, N5);
    assert_type_eq_all!(<Range<N1, N3> as Convert<TupleTag>>::Output, crate::Tuple![N1, N2]);

    #[rstest]
    fn iterable_operations_are_arithmetic() {
        let numbers = range(N1, N5);
        let _: False = is_empty(&numbers);
        let _: N1 = head(numbers);
        let _: Range<N2, N5> = tail(numbers);
        let _: N4 = at(numbers, N3);
        let _: N4 = last(numbers);
        let _: Range<N3, N5> = drop_front(numbers, N2);
        let _: Range<N5, N5> = drop_front(numbers, N7);
        let _: N4 = range_len(&numbers);
    }

    #[rstest]
    fn empty_ranges_are_equal_whatever_their_bounds() {
        let _: True = equal(&range(N3, N3), &range(N0, N0));
        let _: True = equal(&range(N1, N4), &make::<RangeTag, _>((N1, N4)));
        let _: False = equal(&range(N1, N4), &range(N0, N4));
        let _: True = is_empty(&range(N6, N6));
    }

    #[rstest]
    fn folds_and_searches_unroll() {
        let _: N6 = product::<IntegralConstantTag, _>(range(N1, N4));
        assert_eq!(length(range(N2, N6)), 4);
        let _: True = contains(range(N0, N3), N2);
        let _: False = contains(range(N0, N3), N3);
        let _: Just<N3> = find_if(range(N0, N5), equal_to(N3));
    }

    #[rstest]
    fn transform_produces_a_tuple() {
        assert_eq!(transform(range(N0, N3), Succ), tuple!(N1, N2, N3));
        assert_eq!(to::<TupleTag, _>(range(N4, N4)), tuple!());
    }

    #[rstest]
    #[case(range(N0, N0).iter().collect::<Vec<_>>(), vec![])]
    #[case(range(N2, N5).into_iter().collect::<Vec<_>>(), vec![2, 3, 4])]
    fn runtime_iteration(#[case] actual: Vec<usize>, #[case] expected: Vec<usize>) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn bounds_and_debug() {
        let numbers = range(N2, N5);
        assert_eq!(numbers.start(), N2);
        assert_eq!(numbers.end(), N5);
        let _: True = less_equal(&numbers.start(), &numbers.end());
        assert_eq!(format!("{numbers:?}"), "range(2, 5)");
    }
}
