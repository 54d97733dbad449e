//! Property-based tests for the Functor, Applicative and Monad laws.
//!
//! - **Functor identity**: `transform(xs, Id) == xs`
//! - **Functor composition**: `transform(transform(xs, f), g) == transform(xs, compose(g, f))`
//! - **Monad left identity**: `chain(lift(x), f) == f(x)`
//! - **Monad right identity**: `chain(m, lift) == m`
//! - **Monad associativity**: `chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))`

use polytag::datatype::{Just, N1, N2, N3, Nothing, OptionalTag, Succ, TupleTag, just, succ};
use polytag::dispatch::{Id, compose};
use polytag::interop::{StdOptionTag, VecTag};
use polytag::tuple;
use polytag::typeclass::{ap, chain, flatten, lift, transform};
use proptest::prelude::*;
use rstest::rstest;

fn halve(value: i32) -> Option<i32> {
    (value % 2 == 0).then_some(value / 2)
}

fn below_ten(value: i32) -> Option<i32> {
    (value < 10).then_some(value)
}

// =============================================================================
// Option<T>
// =============================================================================

proptest! {
    /// Identity law for Option
    #[test]
    fn prop_option_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(transform(value, Id), value);
    }

    /// Composition law for Option
    #[test]
    fn prop_option_composition(value in any::<Option<i32>>()) {
        let increment = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);
        let left = transform(transform(value, increment), double);
        let right = transform(value, compose(double, increment));
        prop_assert_eq!(left, right);
    }

    /// Left identity for Option
    #[test]
    fn prop_option_left_identity(value in -50i32..50) {
        prop_assert_eq!(chain(lift::<StdOptionTag, _>(value), halve), halve(value));
    }

    /// Right identity for Option
    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(chain(value, |n: i32| lift::<StdOptionTag, _>(n)), value);
    }

    /// Associativity for Option
    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let left = chain(chain(value, halve), below_ten);
        let right = chain(value, |n: i32| chain(halve(n), below_ten));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec<T>
// =============================================================================

proptest! {
    /// Identity law for Vec
    #[test]
    fn prop_vec_identity(values in prop::collection::vec(any::<i16>(), 0..8)) {
        prop_assert_eq!(transform(values.clone(), Id), values);
    }

    /// Composition law for Vec
    #[test]
    fn prop_vec_composition(values in prop::collection::vec(any::<i16>(), 0..8)) {
        let widen = |n: i16| i32::from(n);
        let negate = |n: i32| -n;
        let left = transform(transform(values.clone(), widen), negate);
        let right = transform(values, compose(negate, widen));
        prop_assert_eq!(left, right);
    }

    /// flatten concatenates in order
    #[test]
    fn prop_vec_flatten(values in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..3), 0..4)) {
        let expected: Vec<u8> = values.iter().flatten().copied().collect();
        prop_assert_eq!(flatten(values), expected);
    }

    /// Left identity for Vec
    #[test]
    fn prop_vec_left_identity(value in any::<u8>()) {
        let repeat = |n: u8| vec![n; usize::from(n % 3)];
        prop_assert_eq!(chain(lift::<VecTag, _>(value), repeat), repeat(value));
    }

    /// ap applies every function to every value, functions first
    #[test]
    fn prop_vec_ap(values in prop::collection::vec(-100i32..100, 0..4)) {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 2];
        let expected: Vec<i32> = functions
            .iter()
            .flat_map(|function| values.iter().map(move |value| function(*value)))
            .collect();
        prop_assert_eq!(ap(functions, values), expected);
    }
}

// =============================================================================
// Compile-time structures
// =============================================================================

proptest! {
    /// Transforming a tuple keeps its shape and order
    #[test]
    fn prop_tuple_transform(a in any::<i8>(), b in any::<i8>()) {
        let widened = transform(tuple!(a, b), |n: i8| i16::from(n));
        prop_assert_eq!(widened, tuple!(i16::from(a), i16::from(b)));
        prop_assert_eq!(transform(tuple!(a, b), Id), tuple!(a, b));
    }

    /// A Just holds exactly one value through transform and chain
    #[test]
    fn prop_just_laws(value in any::<u32>()) {
        prop_assert_eq!(transform(just(value), Id), Just(value));
        let wrap = |n: u32| lift::<OptionalTag, _>(n.wrapping_add(1));
        prop_assert_eq!(chain(lift::<OptionalTag, _>(value), wrap), wrap(value));
    }
}

#[rstest]
fn polymorphic_functions_transform_heterogeneous_tuples() {
    let _: polytag::Tuple![N2, N3] = transform(tuple!(N1, N2), Succ);
    let _: Nothing = transform(Nothing, Succ);
    let _: Just<N2> = chain(just(N1), |n: N1| just(succ(n)));
    let nested = lift::<TupleTag, _>(lift::<TupleTag, _>('x'));
    assert_eq!(flatten(nested), tuple!('x'));
}
