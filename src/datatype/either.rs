//! Values of one of two kinds, decided at compile time.
//!
//! [`Left<X>`] and [`Right<X>`] share [`EitherTag`] but are different
//! types, the way [`Just`](super::Just) and [`Nothing`](super::Nothing)
//! are. By convention `Left` carries a failure and `Right` a result:
//! `transform` and `chain` act on `Right` and pass `Left` through.
//!
//! Two values of different sides are never equal, and every `Left` sorts
//! before every `Right`.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{EitherTag, Left, Right, either, left, right};
//! use polytag::dispatch::{False, True};
//! use polytag::typeclass::{chain, equal, less, lift, transform};
//!
//! let parsed = right::<i32>(4);
//! assert_eq!(transform(parsed, |n: i32| n * 2), Right(8));
//! assert_eq!(transform(left("bad"), |n: i32| n * 2), Left("bad"));
//!
//! let mut describe = either(|e: &str| format!("error: {e}"), |n: i32| format!("ok: {n}"));
//! assert_eq!(describe.apply_to(right(1i32)), "ok: 1");
//! assert_eq!(describe.apply_to(left("eof")), "error: eof");
//!
//! let _: False = equal(&left(1i32), &right(1i32));
//! let _: Right<u8> = chain(lift::<EitherTag, _>(3u8), |n: u8| right(n + 1));
//! let _: True = less(&Left(9i32), &Right(0i32));
//! ```

use crate::dispatch::{False, Function, Tagged, True, builtin_tag};
use crate::typeclass::{
    Applicative, Comparable, Equal, EqualImpl, EqualOutput, FlattenImpl, Functor, Less, LessImpl,
    LessOutput, LiftImpl, Monad, Orderable, TransformImpl,
};

/// The tag of [`Left`] and [`Right`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EitherTag;

builtin_tag!(EitherTag => [0 0 1 0 1 0 1 1]);

/// The left alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Left<X>(pub X);

/// The right alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Right<X>(pub X);

impl<X> Tagged for Left<X> {
    type Tag = EitherTag;
}

impl<X> Tagged for Right<X> {
    type Tag = EitherTag;
}

/// Wraps `value` as a [`Left`].
pub const fn left<X>(value: X) -> Left<X> {
    Left(value)
}

/// Wraps `value` as a [`Right`].
pub const fn right<X>(value: X) -> Right<X> {
    Right(value)
}

/// A value known to be a [`Left`] or a [`Right`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an either value",
    note = "expected `Left<X>` or `Right<X>`"
)]
pub trait Either {
    /// `True` for [`Right`], `False` for [`Left`].
    type IsRight: crate::dispatch::Bool;
}

impl<X> Either for Left<X> {
    type IsRight = False;
}

impl<X> Either for Right<X> {
    type IsRight = True;
}

/// A pair of functions, one per side. Built by [`either`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EitherFn<F, G> {
    on_left: F,
    on_right: G,
}

/// Handles both sides: `on_left` for a [`Left`], `on_right` for a
/// [`Right`].
pub const fn either<F, G>(on_left: F, on_right: G) -> EitherFn<F, G> {
    EitherFn { on_left, on_right }
}

/// Applies the function of the matching side.
pub trait EitherDispatch<E> {
    /// The applied function's result.
    type Output;

    /// Calls the function matching the side of `value`.
    fn dispatch(&mut self, value: E) -> Self::Output;
}

impl<F: Function<(X,)>, G, X> EitherDispatch<Left<X>> for EitherFn<F, G> {
    type Output = F::Output;

    fn dispatch(&mut self, value: Left<X>) -> F::Output {
        self.on_left.apply((value.0,))
    }
}

impl<F, G: Function<(X,)>, X> EitherDispatch<Right<X>> for EitherFn<F, G> {
    type Output = G::Output;

    fn dispatch(&mut self, value: Right<X>) -> G::Output {
        self.on_right.apply((value.0,))
    }
}

impl<F, G> EitherFn<F, G> {
    /// Calls the function matching the side of `value`.
    pub fn apply_to<E>(&mut self, value: E) -> <Self as EitherDispatch<E>>::Output
    where
        Self: EitherDispatch<E>,
    {
        self.dispatch(value)
    }
}

impl<F, G, E> Function<(E,)> for EitherFn<F, G>
where
    Self: EitherDispatch<E>,
{
    type Output = <Self as EitherDispatch<E>>::Output;

    fn apply(&mut self, (value,): (E,)) -> Self::Output {
        self.dispatch(value)
    }
}

// =============================================================================
// Comparable and Orderable
// =============================================================================

impl Comparable for EitherTag {}

impl<A: Equal<B>, B> EqualImpl<Left<A>, Left<B>> for EitherTag {
    type Output = EqualOutput<A, B>;

    fn equal(left: &Left<A>, right: &Left<B>) -> Self::Output {
        left.0.equal_to(&right.0)
    }
}

impl<A: Equal<B>, B> EqualImpl<Right<A>, Right<B>> for EitherTag {
    type Output = EqualOutput<A, B>;

    fn equal(left: &Right<A>, right: &Right<B>) -> Self::Output {
        left.0.equal_to(&right.0)
    }
}

impl<A, B> EqualImpl<Left<A>, Right<B>> for EitherTag {
    type Output = False;

    fn equal(_: &Left<A>, _: &Right<B>) -> False {
        False
    }
}

impl<A, B> EqualImpl<Right<A>, Left<B>> for EitherTag {
    type Output = False;

    fn equal(_: &Right<A>, _: &Left<B>) -> False {
        False
    }
}

impl Orderable for EitherTag {}

impl<A: Less<B>, B> LessImpl<Left<A>, Left<B>> for EitherTag {
    type Output = LessOutput<A, B>;

    fn less(left: &Left<A>, right: &Left<B>) -> Self::Output {
        left.0.less_than(&right.0)
    }
}

impl<A: Less<B>, B> LessImpl<Right<A>, Right<B>> for EitherTag {
    type Output = LessOutput<A, B>;

    fn less(left: &Right<A>, right: &Right<B>) -> Self::Output {
        left.0.less_than(&right.0)
    }
}

impl<A, B> LessImpl<Left<A>, Right<B>> for EitherTag {
    type Output = True;

    fn less(_: &Left<A>, _: &Right<B>) -> True {
        True
    }
}

impl<A, B> LessImpl<Right<A>, Left<B>> for EitherTag {
    type Output = False;

    fn less(_: &Right<A>, _: &Left<B>) -> False {
        False
    }
}

// =============================================================================
// Functor, Applicative, Monad
// =============================================================================

impl Functor for EitherTag {}

impl<X, F: Function<(X,)>> TransformImpl<Right<X>, F> for EitherTag {
    type Output = Right<F::Output>;

    fn transform(xs: Right<X>, function: &mut F) -> Self::Output {
        Right(function.apply((xs.0,)))
    }
}

impl<X, F> TransformImpl<Left<X>, F> for EitherTag {
    type Output = Left<X>;

    fn transform(xs: Left<X>, _: &mut F) -> Left<X> {
        xs
    }
}

impl Applicative for EitherTag {}

impl<X> LiftImpl<X> for EitherTag {
    type Output = Right<X>;

    fn lift(value: X) -> Right<X> {
        Right(value)
    }
}

impl Monad for EitherTag {}

impl<Inner: Either> FlattenImpl<Right<Inner>> for EitherTag {
    type Output = Inner;

    fn flatten(xss: Right<Inner>) -> Inner {
        xss.0
    }
}

impl<X> FlattenImpl<Left<X>> for EitherTag {
    type Output = Left<X>;

    fn flatten(xss: Left<X>) -> Left<X> {
        xss
    }
}

#[cfg(feature = "serde")]
impl<X: serde::Serialize> serde::Serialize for Left<X> {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_newtype_variant("Either", 0, "Left", &self.0)
    }
}

#[cfg(feature = "serde")]
impl<X: serde::Serialize> serde::Serialize for Right<X> {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_newtype_variant("Either", 1, "Right", &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N1, N2};
    use crate::tuple;
    use crate::typeclass::{chain, equal, flatten, less, lift, transform};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Left<u8> as Either>::IsRight, False);
    assert_type_eq_all!(<Right<u8> as Either>::IsRight, True);

    #[rstest]
    fn sides_never_compare_equal() {
        let _: False = equal(&Left(1i32), &Right(1i32));
        let _: False = equal(&Right('a'), &Left('a'));
        let _: True = equal(&Left(N1), &Left(N1));
        let _: False = equal(&Right(N1), &Right(N2));
        assert!(equal(&Right(3i32), &Right(3i32)));
    }

    #[rstest]
    #[case(Left(5), Left(9), true)]
    #[case(Left(9), Left(5), false)]
    #[case(Left(7), Left(7), false)]
    fn lefts_order_by_value(
        #[case] smaller: Left<i32>,
        #[case] larger: Left<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(less(&smaller, &larger), expected);
    }

    #[rstest]
    fn every_left_sorts_before_every_right() {
        let _: True = less(&Left(100i32), &Right(-100i32));
        let _: False = less(&Right(-100i32), &Left(100i32));
        let _: True = less(&Right(N1), &Right(N2));
    }

    #[rstest]
    fn transform_acts_on_right_only() {
        assert_eq!(transform(Right(2u8), |n: u8| n + 1), Right(3u8));
        assert_eq!(transform(Left("kept"), |n: u8| n + 1), Left("kept"));
    }

    #[rstest]
    fn monad_laws_hold_on_either() {
        let checked = |n: i32| if n > 0 { Right(n) } else { Right(0) };
        assert_eq!(chain(lift::<EitherTag, _>(4i32), checked), checked(4));
        assert_eq!(chain(Right(4i32), |n: i32| lift::<EitherTag, _>(n)), Right(4));
        assert_eq!(chain(Left('e'), checked), Left('e'));
        assert_eq!(flatten(Right(Left(1u8))), Left(1u8));
        assert_eq!(flatten(Right(Right(1u8))), Right(1u8));
    }

    #[rstest]
    fn either_handles_both_sides_in_a_tuple() {
        let mut handler = either(|code: u8| -i64::from(code), |value: i64| value);
        assert_eq!(handler.apply((Left(3u8),)), -3);
        assert_eq!(handler.apply((Right(10i64),)), 10);
        let handled = transform(
            tuple!(Left(2u8), Right(20i64)),
            either(|code: u8| -i64::from(code), |value: i64| value),
        );
        assert_eq!(handled, tuple!(-2i64, 20i64));
    }
}
