//! Comparable: equality across tags.
//!
//! `equal(x, y)` is defined for any two tagged values. The dispatcher asks
//! [`Common`](crate::dispatch::Common) how the two tags relate:
//!
//! - same tag: the tag's [`EqualImpl`] decides
//! - one side (or both) embeds into the other's tag: the operands are
//!   converted and the comparison is dispatched again
//! - unrelated tags: the answer is [`False`], known at compile time
//!
//! The last rule makes `equal` total, so it can be used to search
//! heterogeneous structures. Ordering does not follow it; see
//! [`orderable`](super::orderable).
//!
//! The result is a [`Logical`]: a runtime `bool` for runtime values, and a
//! type-level [`True`](crate::dispatch::True)/[`False`] when equality is
//! decided by the types alone.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of the same tag:
//!
//! - Reflexivity: `equal(a, a)`
//! - Symmetry: `equal(a, b) == equal(b, a)`
//! - Transitivity: `equal(a, b) && equal(b, c)` implies `equal(a, c)`
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::N1;
//! use polytag::dispatch::{False, True};
//! use polytag::typeclass::equal;
//!
//! assert!(equal(&3i32, &3i32));
//! assert!(equal(&N1, &1usize));
//! assert!(equal(&N1, &1i32));
//!
//! let _: True = equal(&N1, &N1);
//! let _: False = equal(&2.5f64, &'c');
//! ```

use crate::dispatch::{
    Common, Embed, EmbedBoth, EmbedLeft, EmbedRight, Embedded, False, Function, Predicate,
    RelationOf, Same, Tag, TagOf, Tagged, Unrelated,
};

use super::logical::{Logical, LogicalNot};

// =============================================================================
// Concept and implementation trait
// =============================================================================

/// Tags whose values can be compared for equality.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Comparable",
    note = "implement `polytag::typeclass::Comparable` and `EqualImpl` for the tag, or derive `Struct`"
)]
pub trait Comparable: Tag {}

/// Equality between `X` and `Y`, both of tag `Self`.
#[diagnostic::on_unimplemented(
    message = "no `equal` implementation for `{X}` and `{Y}` under tag `{Self}`",
    note = "implement `polytag::typeclass::EqualImpl<{X}, {Y}>` for `{Self}`"
)]
pub trait EqualImpl<X, Y>: Comparable {
    /// The answer, at runtime or compile time.
    type Output: Logical;

    /// Compares the values.
    fn equal(left: &X, right: &Y) -> Self::Output;
}

// =============================================================================
// Dispatch
// =============================================================================

/// How `equal` resolves for one [`Common`] relation.
pub trait EqualBy<X, Y> {
    /// The answer.
    type Output: Logical;

    /// Compares the values.
    fn equal_by(left: &X, right: &Y) -> Self::Output;
}

impl<T, X, Y> EqualBy<X, Y> for Same<T>
where
    T: EqualImpl<X, Y>,
{
    type Output = T::Output;

    fn equal_by(left: &X, right: &Y) -> Self::Output {
        T::equal(left, right)
    }
}

impl<X, Y> EqualBy<X, Y> for EmbedLeft
where
    Y: Tagged,
    X: Embed<TagOf<Y>>,
    Embedded<X, TagOf<Y>>: Equal<Y>,
{
    type Output = EqualOutput<Embedded<X, TagOf<Y>>, Y>;

    fn equal_by(left: &X, right: &Y) -> Self::Output {
        <X as Embed<TagOf<Y>>>::embed(left).equal_to(right)
    }
}

impl<X, Y> EqualBy<X, Y> for EmbedRight
where
    X: Tagged,
    Y: Embed<TagOf<X>>,
    X: Equal<Embedded<Y, TagOf<X>>>,
{
    type Output = EqualOutput<X, Embedded<Y, TagOf<X>>>;

    fn equal_by(left: &X, right: &Y) -> Self::Output {
        left.equal_to(&<Y as Embed<TagOf<X>>>::embed(right))
    }
}

impl<C, X, Y> EqualBy<X, Y> for EmbedBoth<C>
where
    C: Tag,
    X: Embed<C>,
    Y: Embed<C>,
    Embedded<X, C>: Equal<Embedded<Y, C>>,
{
    type Output = EqualOutput<Embedded<X, C>, Embedded<Y, C>>;

    fn equal_by(left: &X, right: &Y) -> Self::Output {
        <X as Embed<C>>::embed(left).equal_to(&<Y as Embed<C>>::embed(right))
    }
}

impl<X, Y> EqualBy<X, Y> for Unrelated {
    type Output = False;

    fn equal_by(_: &X, _: &Y) -> False {
        False
    }
}

/// The `equal` dispatcher.
///
/// Implemented for every pair of tagged values whose equality resolves;
/// use it as a bound in generic code.
pub trait Equal<Y> {
    /// The answer.
    type Output: Logical;

    /// Compares `self` with `other`.
    fn equal_to(&self, other: &Y) -> Self::Output;
}

impl<X, Y> Equal<Y> for X
where
    X: Tagged,
    Y: Tagged,
    TagOf<X>: Common<TagOf<Y>>,
    RelationOf<X, Y>: EqualBy<X, Y>,
{
    type Output = <RelationOf<X, Y> as EqualBy<X, Y>>::Output;

    fn equal_to(&self, other: &Y) -> Self::Output {
        <RelationOf<X, Y> as EqualBy<X, Y>>::equal_by(self, other)
    }
}

/// The result of `equal(&X, &Y)`.
pub type EqualOutput<X, Y> = <X as Equal<Y>>::Output;

/// Whether `left` equals `right`.
pub fn equal<X, Y>(left: &X, right: &Y) -> EqualOutput<X, Y>
where
    X: Equal<Y>,
{
    left.equal_to(right)
}

/// Whether `left` differs from `right`.
pub fn not_equal<X, Y>(left: &X, right: &Y) -> <EqualOutput<X, Y> as LogicalNot>::Output
where
    X: Equal<Y>,
    EqualOutput<X, Y>: LogicalNot,
{
    left.equal_to(right).not()
}

// =============================================================================
// Function objects
// =============================================================================

/// `equal` as a two-argument function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualFn;

impl<X, Y> Function<(X, Y)> for EqualFn
where
    X: Equal<Y>,
{
    type Output = EqualOutput<X, Y>;

    fn apply(&mut self, (left, right): (X, Y)) -> Self::Output {
        left.equal_to(&right)
    }
}

/// A predicate testing equality with a fixed key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualTo<K>(pub K);

/// Builds the predicate `|x| equal(x, key)`.
pub const fn equal_to<K>(key: K) -> EqualTo<K> {
    EqualTo(key)
}

impl<K, X> Predicate<X> for EqualTo<K>
where
    X: Equal<K>,
{
    type Output = EqualOutput<X, K>;

    fn test(&mut self, value: &X) -> Self::Output {
        value.equal_to(&self.0)
    }
}

/// Equality after projecting both sides through `F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparing<F>(pub F);

/// Builds `|x, y| equal(f(x), f(y))`.
pub const fn comparing<F>(projection: F) -> Comparing<F> {
    Comparing(projection)
}

impl<F, X, Y> Function<(X, Y)> for Comparing<F>
where
    F: Function<(X,)> + Function<(Y,)>,
    <F as Function<(X,)>>::Output: Equal<<F as Function<(Y,)>>::Output>,
{
    type Output = EqualOutput<<F as Function<(X,)>>::Output, <F as Function<(Y,)>>::Output>;

    fn apply(&mut self, (left, right): (X, Y)) -> Self::Output {
        let left = Function::<(X,)>::apply(&mut self.0, (left,));
        let right = Function::<(Y,)>::apply(&mut self.0, (right,));
        left.equal_to(&right)
    }
}

// =============================================================================
// Primitive instances
// =============================================================================

macro_rules! primitive_comparable {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Comparable for $primitive {}

            impl EqualImpl<$primitive, $primitive> for $primitive {
                type Output = bool;

                #[allow(clippy::float_cmp)]
                fn equal(left: &$primitive, right: &$primitive) -> bool {
                    left == right
                }
            }
        )*
    };
}

primitive_comparable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::True;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    #[case(-7, -7, true)]
    fn integers_compare_at_runtime(#[case] left: i64, #[case] right: i64, #[case] expected: bool) {
        assert_eq!(equal(&left, &right), expected);
        assert_eq!(not_equal(&left, &right), !expected);
    }

    #[rstest]
    fn unrelated_primitives_are_statically_unequal() {
        let _: False = equal(&1u8, &1u16);
        let _: False = equal(&'a', &97u32);
        let _: True = not_equal(&0.5f32, &false);
    }

    #[rstest]
    fn bool_constants_embed_into_bool() {
        assert!(equal(&True, &true));
        assert!(!equal(&false, &True));
    }

    #[rstest]
    fn equal_to_builds_a_predicate() {
        let mut is_four = equal_to(4i32);
        assert!(is_four.test(&4i32));
        assert!(!is_four.test(&5i32));
        let _: False = is_four.test(&'4');
    }

    #[rstest]
    fn comparing_projects_before_comparing() {
        let mut same_parity = comparing(|n: i32| n % 2);
        assert!(same_parity.apply((3i32, 7i32)));
        assert!(!same_parity.apply((3i32, 8i32)));
        assert!(EqualFn.apply(('x', 'x')));
    }
}
