//! Function objects.
//!
//! Algorithms over heterogeneous structures call the same function with
//! arguments of different types, which a Rust closure cannot accept. The
//! algorithms therefore take any [`Function`], implemented for every
//! `FnMut` closure and for zero-sized polymorphic function objects declared
//! with [`poly_fn!`](crate::poly_fn).
//!
//! # Examples
//!
//! ```rust
//! use polytag::dispatch::Function;
//! use polytag::poly_fn;
//!
//! poly_fn! {
//!     struct Describe;
//!     fn(value: i32) -> String { format!("int {value}") }
//!     fn(value: char) -> String { format!("char {value}") }
//! }
//!
//! let mut describe = Describe;
//! assert_eq!(describe.apply((3,)), "int 3");
//! assert_eq!(describe.apply(('x',)), "char x");
//! ```

use crate::typeclass::{Logical, LogicalNot};

/// A callable taking `Args` as a standard tuple.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    note = "heterogeneous algorithms call the function once per element type; declare a polymorphic function with `poly_fn!`"
)]
pub trait Function<Args> {
    /// The return type.
    type Output;

    /// Calls the function.
    fn apply(&mut self, args: Args) -> Self::Output;
}

impl<F, A, R> Function<(A,)> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    fn apply(&mut self, (argument,): (A,)) -> R {
        self(argument)
    }
}

impl<F, A, B, R> Function<(A, B)> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    fn apply(&mut self, (first, second): (A, B)) -> R {
        self(first, second)
    }
}

/// The result of calling `F` with `Args`.
pub type CallOutput<F, Args> = <F as Function<Args>>::Output;

/// A test on a borrowed value, answering with a [`Logical`].
///
/// The answer may be a runtime `bool` or a type-level
/// [`True`](super::True)/[`False`](super::False); several algorithms
/// (filtering a tuple, finding in a set) require the latter.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over `{X}`",
    note = "a predicate is a `FnMut(&{X}) -> L` where `L` is `bool`, `True` or `False`"
)]
pub trait Predicate<X> {
    /// The answer.
    type Output: Logical;

    /// Tests `value`.
    fn test(&mut self, value: &X) -> Self::Output;
}

impl<F, X, L> Predicate<X> for F
where
    F: FnMut(&X) -> L,
    L: Logical,
{
    type Output = L;

    fn test(&mut self, value: &X) -> L {
        self(value)
    }
}

/// The result of testing `X` with `P`.
pub type TestOutput<P, X> = <P as Predicate<X>>::Output;

/// The identity function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Id;

impl<X> Function<(X,)> for Id {
    type Output = X;

    fn apply(&mut self, (value,): (X,)) -> X {
        value
    }
}

/// A function ignoring its argument and returning a clone of `V`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always<V>(pub V);

impl<V: Clone, X> Function<(X,)> for Always<V> {
    type Output = V;

    fn apply(&mut self, _: (X,)) -> V {
        self.0.clone()
    }
}

/// `f` applied after `g`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compose<F, G> {
    /// Applied second.
    pub outer: F,
    /// Applied first.
    pub inner: G,
}

/// Builds `outer` applied after `inner`.
pub const fn compose<F, G>(outer: F, inner: G) -> Compose<F, G> {
    Compose { outer, inner }
}

impl<F, G, X> Function<(X,)> for Compose<F, G>
where
    G: Function<(X,)>,
    F: Function<(G::Output,)>,
{
    type Output = F::Output;

    fn apply(&mut self, (value,): (X,)) -> Self::Output {
        let intermediate = self.inner.apply((value,));
        self.outer.apply((intermediate,))
    }
}

/// The negation of a predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complement<P>(pub P);

impl<P, X> Predicate<X> for Complement<P>
where
    P: Predicate<X>,
    P::Output: LogicalNot,
{
    type Output = <P::Output as LogicalNot>::Output;

    fn test(&mut self, value: &X) -> Self::Output {
        self.0.test(value).not()
    }
}

/// Declares a zero-sized function object with one body per argument list.
///
/// Each `fn(...) -> R { ... }` line becomes an implementation of
/// [`Function`] for that argument list.
#[macro_export]
macro_rules! poly_fn {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
        $(
            fn($($argument:ident : $argument_type:ty),+ $(,)?) -> $output:ty $body:block
        )+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        $(
            impl $crate::dispatch::Function<($($argument_type,)+)> for $name {
                type Output = $output;

                #[allow(unused_variables)]
                fn apply(&mut self, ($($argument,)+): ($($argument_type,)+)) -> $output $body
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{False, True};
    use rstest::rstest;

    poly_fn! {
        struct Widen;
        fn(value: u8) -> u64 { u64::from(value) }
        fn(value: u16) -> u64 { u64::from(value) * 10 }
        fn(left: u8, right: u8) -> u64 { u64::from(left) + u64::from(right) }
    }

    #[rstest]
    #[case(3u8, 3)]
    #[case(200u8, 200)]
    fn poly_fn_dispatches_on_argument_type(#[case] input: u8, #[case] expected: u64) {
        assert_eq!(Widen.apply((input,)), expected);
        assert_eq!(Widen.apply((u16::from(input),)), expected * 10);
    }

    #[rstest]
    fn poly_fn_supports_several_arguments() {
        assert_eq!(Widen.apply((1u8, 2u8)), 3);
    }

    #[rstest]
    fn closures_are_functions() {
        let mut offset = 0;
        let mut counter = |value: i32| {
            offset += 1;
            value + offset
        };
        assert_eq!(counter.apply((10,)), 11);
        assert_eq!(counter.apply((10,)), 12);

        let mut add = |left: i32, right: i32| left + right;
        assert_eq!(add.apply((2, 3)), 5);
    }

    #[rstest]
    fn composition_applies_inner_first() {
        let mut function = compose(|value: i32| value * 2, |value: i32| value + 1);
        assert_eq!(function.apply((4,)), 10);
        assert_eq!(Id.apply(("same",)), "same");
        assert_eq!(Always('k').apply((1.5,)), 'k');
    }

    #[rstest]
    fn complement_negates_runtime_and_static_answers() {
        let mut is_odd = Complement(|value: &i32| value % 2 == 0);
        assert!(is_odd.test(&3));
        assert!(!is_odd.test(&4));

        let mut never = Complement(|_: &char| True);
        let _: False = never.test(&'a');
    }
}
