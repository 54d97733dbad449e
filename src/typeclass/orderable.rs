//! Orderable: strict ordering across tags.
//!
//! `less(x, y)` resolves like [`equal`](super::equal), with one deliberate
//! difference: two values whose tags share no common embedding cannot be
//! ordered, and asking for it is a compile error. Equality may answer
//! "no" for unrelated values; an order has no sensible default.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of the same tag:
//!
//! - Irreflexivity: `!less(a, a)`
//! - Asymmetry: `less(a, b)` implies `!less(b, a)`
//! - Transitivity: `less(a, b) && less(b, c)` implies `less(a, c)`
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N2, N5};
//! use polytag::dispatch::True;
//! use polytag::typeclass::{less, max, min};
//!
//! assert!(less(&1i32, &2i32));
//! let _: True = less(&N2, &N5);
//!
//! // With a static comparison, `min` may pick between values of different types.
//! let smallest: N2 = min(N5, N2);
//! let largest: i32 = max(3i32, 9i32);
//! assert_eq!((smallest, largest), (N2, 9));
//! ```
//!
//! Ordering unrelated values does not compile:
//!
//! ```compile_fail
//! use polytag::typeclass::less;
//!
//! let _ = less(&1.5f64, &'a');
//! ```

use crate::dispatch::{
    Common, Embed, EmbedBoth, EmbedLeft, EmbedRight, Embedded, Function, Predicate, RelationOf,
    Same, Tag, TagOf, Tagged,
};

use super::comparable::Comparable;
use super::logical::{Logical, LogicalNot, Select};

// =============================================================================
// Concept and implementation trait
// =============================================================================

/// Tags whose values are totally ordered.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Orderable",
    note = "implement `polytag::typeclass::Orderable` and `LessImpl` for the tag"
)]
pub trait Orderable: Comparable {}

/// Strict order between `X` and `Y`, both of tag `Self`.
#[diagnostic::on_unimplemented(
    message = "no `less` implementation for `{X}` and `{Y}` under tag `{Self}`",
    note = "implement `polytag::typeclass::LessImpl<{X}, {Y}>` for `{Self}`"
)]
pub trait LessImpl<X, Y>: Orderable {
    /// The answer, at runtime or compile time.
    type Output: Logical;

    /// Whether `left` is strictly below `right`.
    fn less(left: &X, right: &Y) -> Self::Output;
}

// =============================================================================
// Dispatch
// =============================================================================

/// How `less` resolves for one [`Common`] relation.
#[diagnostic::on_unimplemented(
    message = "cannot order `{X}` and `{Y}`",
    label = "their tags have no common embedding",
    note = "`less` requires both operands to embed into a common Orderable tag"
)]
pub trait LessBy<X, Y> {
    /// The answer.
    type Output: Logical;

    /// Compares the values.
    fn less_by(left: &X, right: &Y) -> Self::Output;
}

impl<T, X, Y> LessBy<X, Y> for Same<T>
where
    T: LessImpl<X, Y>,
{
    type Output = T::Output;

    fn less_by(left: &X, right: &Y) -> Self::Output {
        T::less(left, right)
    }
}

impl<X, Y> LessBy<X, Y> for EmbedLeft
where
    Y: Tagged,
    X: Embed<TagOf<Y>>,
    Embedded<X, TagOf<Y>>: Less<Y>,
{
    type Output = LessOutput<Embedded<X, TagOf<Y>>, Y>;

    fn less_by(left: &X, right: &Y) -> Self::Output {
        <X as Embed<TagOf<Y>>>::embed(left).less_than(right)
    }
}

impl<X, Y> LessBy<X, Y> for EmbedRight
where
    X: Tagged,
    Y: Embed<TagOf<X>>,
    X: Less<Embedded<Y, TagOf<X>>>,
{
    type Output = LessOutput<X, Embedded<Y, TagOf<X>>>;

    fn less_by(left: &X, right: &Y) -> Self::Output {
        left.less_than(&<Y as Embed<TagOf<X>>>::embed(right))
    }
}

impl<C, X, Y> LessBy<X, Y> for EmbedBoth<C>
where
    C: Tag,
    X: Embed<C>,
    Y: Embed<C>,
    Embedded<X, C>: Less<Embedded<Y, C>>,
{
    type Output = LessOutput<Embedded<X, C>, Embedded<Y, C>>;

    fn less_by(left: &X, right: &Y) -> Self::Output {
        <X as Embed<C>>::embed(left).less_than(&<Y as Embed<C>>::embed(right))
    }
}

/// The `less` dispatcher.
pub trait Less<Y> {
    /// The answer.
    type Output: Logical;

    /// Whether `self` is strictly below `other`.
    fn less_than(&self, other: &Y) -> Self::Output;
}

impl<X, Y> Less<Y> for X
where
    X: Tagged,
    Y: Tagged,
    TagOf<X>: Common<TagOf<Y>>,
    RelationOf<X, Y>: LessBy<X, Y>,
{
    type Output = <RelationOf<X, Y> as LessBy<X, Y>>::Output;

    fn less_than(&self, other: &Y) -> Self::Output {
        <RelationOf<X, Y> as LessBy<X, Y>>::less_by(self, other)
    }
}

/// The result of `less(&X, &Y)`.
pub type LessOutput<X, Y> = <X as Less<Y>>::Output;

/// Whether `left < right`.
pub fn less<X, Y>(left: &X, right: &Y) -> LessOutput<X, Y>
where
    X: Less<Y>,
{
    left.less_than(right)
}

/// Whether `left <= right`, as `!(right < left)`.
pub fn less_equal<X, Y>(left: &X, right: &Y) -> <LessOutput<Y, X> as LogicalNot>::Output
where
    Y: Less<X>,
    LessOutput<Y, X>: LogicalNot,
{
    right.less_than(left).not()
}

/// Whether `left > right`, as `right < left`.
pub fn greater<X, Y>(left: &X, right: &Y) -> LessOutput<Y, X>
where
    Y: Less<X>,
{
    right.less_than(left)
}

/// Whether `left >= right`, as `!(left < right)`.
pub fn greater_equal<X, Y>(left: &X, right: &Y) -> <LessOutput<X, Y> as LogicalNot>::Output
where
    X: Less<Y>,
    LessOutput<X, Y>: LogicalNot,
{
    left.less_than(right).not()
}

/// The smaller of two values; `left` when they are equivalent.
pub fn min<X, Y>(left: X, right: Y) -> <LessOutput<Y, X> as Select<Y, X>>::Output
where
    Y: Less<X>,
    LessOutput<Y, X>: Select<Y, X>,
{
    right.less_than(&left).select(right, left)
}

/// The larger of two values; `right` when they are equivalent.
pub fn max<X, Y>(left: X, right: Y) -> <LessOutput<X, Y> as Select<Y, X>>::Output
where
    X: Less<Y>,
    LessOutput<X, Y>: Select<Y, X>,
{
    left.less_than(&right).select(right, left)
}

// =============================================================================
// Function objects
// =============================================================================

/// `less` as a two-argument function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessFn;

impl<X, Y> Function<(X, Y)> for LessFn
where
    X: Less<Y>,
{
    type Output = LessOutput<X, Y>;

    fn apply(&mut self, (left, right): (X, Y)) -> Self::Output {
        left.less_than(&right)
    }
}

/// A predicate testing whether a value sorts before a fixed bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessThan<K>(pub K);

/// Builds the predicate `|x| less(x, bound)`.
pub const fn less_than<K>(bound: K) -> LessThan<K> {
    LessThan(bound)
}

impl<K, X> Predicate<X> for LessThan<K>
where
    X: Less<K>,
{
    type Output = LessOutput<X, K>;

    fn test(&mut self, value: &X) -> Self::Output {
        value.less_than(&self.0)
    }
}

/// Ordering after projecting both sides through `F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordering<F>(pub F);

/// Builds `|x, y| less(f(x), f(y))`.
pub const fn ordering<F>(projection: F) -> Ordering<F> {
    Ordering(projection)
}

impl<F, X, Y> Function<(X, Y)> for Ordering<F>
where
    F: Function<(X,)> + Function<(Y,)>,
    <F as Function<(X,)>>::Output: Less<<F as Function<(Y,)>>::Output>,
{
    type Output = LessOutput<<F as Function<(X,)>>::Output, <F as Function<(Y,)>>::Output>;

    fn apply(&mut self, (left, right): (X, Y)) -> Self::Output {
        let left = Function::<(X,)>::apply(&mut self.0, (left,));
        let right = Function::<(Y,)>::apply(&mut self.0, (right,));
        left.less_than(&right)
    }
}

// =============================================================================
// Primitive instances
// =============================================================================

macro_rules! primitive_orderable {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Orderable for $primitive {}

            impl LessImpl<$primitive, $primitive> for $primitive {
                type Output = bool;

                fn less(left: &$primitive, right: &$primitive) -> bool {
                    left < right
                }
            }
        )*
    };
}

primitive_orderable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);
