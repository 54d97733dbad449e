//! Functor: applying a function to every element.
//!
//! `transform` keeps the shape of the structure and replaces each element
//! with the function's result, which may have a different type for every
//! element. Everything else in this module is derived from it.
//!
//! # Laws
//!
//! ```text
//! transform(xs, Id) == xs
//! transform(xs, compose(f, g)) == transform(transform(xs, g), f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, N2, N3, Succ};
//! use polytag::tuple;
//! use polytag::typeclass::{adjust_if, fill, transform};
//!
//! assert_eq!(transform(tuple!(1, 2), |n: i32| n * 10), tuple!(10, 20));
//! assert_eq!(transform(Just(N2), Succ), Just(N3));
//! assert_eq!(fill(tuple!(1, 'a', "b"), 0u8), tuple!(0u8, 0u8, 0u8));
//! assert_eq!(adjust_if(tuple!(1, 8, 3), |n: &i32| *n > 2, |n: i32| -n), tuple!(1, -8, -3));
//! ```

use crate::dispatch::{Always, Function, Predicate, Tag, TagOf, Tagged, TestOutput};

use super::logical::ApplyIf;

/// Tags whose values can be mapped over.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Functor",
    note = "implement `polytag::typeclass::Functor` and `TransformImpl` for the tag"
)]
pub trait Functor: Tag {}

/// `transform` implemented by the tag.
pub trait TransformImpl<Xs, F>: Functor {
    /// The transformed structure.
    type Output;

    /// Applies `function` to every element of `xs`.
    fn transform(xs: Xs, function: &mut F) -> Self::Output;
}

/// The `transform` dispatcher.
pub trait Transform<F> {
    /// The transformed structure.
    type Output;

    /// Applies `function` to every element of `self`.
    fn transform_with(self, function: &mut F) -> Self::Output;
}

impl<Xs, F> Transform<F> for Xs
where
    Xs: Tagged,
    TagOf<Xs>: TransformImpl<Xs, F>,
{
    type Output = <TagOf<Xs> as TransformImpl<Xs, F>>::Output;

    fn transform_with(self, function: &mut F) -> Self::Output {
        <TagOf<Xs> as TransformImpl<Xs, F>>::transform(self, function)
    }
}

/// The result of `transform(Xs, F)`.
pub type TransformOutput<Xs, F> = <Xs as Transform<F>>::Output;

/// Applies `function` to every element of `xs`.
pub fn transform<Xs, F>(xs: Xs, mut function: F) -> Xs::Output
where
    Xs: Transform<F>,
{
    xs.transform_with(&mut function)
}

/// Replaces every element of `xs` with a clone of `value`.
pub fn fill<Xs, V>(xs: Xs, value: V) -> Xs::Output
where
    Xs: Transform<Always<V>>,
{
    transform(xs, Always(value))
}

/// Applies `F` to the elements satisfying `P` and leaves the others alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustIf<P, F> {
    predicate: P,
    function: F,
}

impl<P, F, X> Function<(X,)> for AdjustIf<P, F>
where
    P: Predicate<X>,
    TestOutput<P, X>: ApplyIf<X, F>,
{
    type Output = <TestOutput<P, X> as ApplyIf<X, F>>::Output;

    fn apply(&mut self, (value,): (X,)) -> Self::Output {
        self.predicate
            .test(&value)
            .apply_if(value, &mut self.function)
    }
}

/// Applies `function` to the elements of `xs` satisfying `predicate`.
///
/// With a runtime predicate `function` must return the element's own type;
/// with a type-level predicate it may change it.
pub fn adjust_if<Xs, P, F>(xs: Xs, predicate: P, function: F) -> Xs::Output
where
    Xs: Transform<AdjustIf<P, F>>,
{
    transform(xs, AdjustIf { predicate, function })
}

/// Replaces the elements of `xs` satisfying `predicate` with `value`.
pub fn replace_if<Xs, P, V>(xs: Xs, predicate: P, value: V) -> Xs::Output
where
    Xs: Transform<AdjustIf<P, Always<V>>>,
{
    adjust_if(xs, predicate, Always(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N1, N2, N3, Nil, Succ};
    use crate::dispatch::{False, Id, True, compose};
    use crate::tuple;
    use crate::typeclass::equal_to;
    use rstest::rstest;

    #[rstest]
    fn identity_and_composition_laws_hold_on_tuples() {
        let values = tuple!(1, 2, 3);
        assert_eq!(transform(values, Id), values);
        let double = |n: i32| n * 2;
        let increment = |n: i32| n + 1;
        assert_eq!(
            transform(values, compose(double, increment)),
            transform(transform(values, increment), double)
        );
    }

    #[rstest]
    fn transform_may_change_element_types() {
        let _: crate::Tuple![N2, N3] = transform(tuple!(N1, N2), Succ);
        assert_eq!(transform(Nil, Succ), Nil);
    }

    #[rstest]
    fn static_predicates_adjust_selected_types() {
        let adjusted = adjust_if(tuple!(N1, 'a', N2), equal_to(N1), Succ);
        assert_eq!(adjusted, tuple!(N2, 'a', N2));
        let _: crate::Tuple![String] = adjust_if(tuple!(7), |_: &i32| True, |n: i32| n.to_string());
    }

    #[rstest]
    fn replace_if_with_runtime_predicate() {
        assert_eq!(replace_if(tuple!(4, -1, 6), |n: &i32| *n < 0, 0), tuple!(4, 0, 6));
        let _: crate::Tuple![char] = replace_if(tuple!('x'), |_: &char| False, 'y');
    }
}
