//! Property-based tests for Foldable and Searchable.
//!
//! Folds must visit elements exactly once and in order:
//!
//! - `fold_left(xs, s, f) == f(...f(f(s, x1), x2)..., xn)`
//! - `fold_right(xs, s, f) == f(x1, f(x2, ...f(xn, s)...))`
//!
//! Searches must agree with a fold that tests every element.

use polytag::tuple;
use polytag::typeclass::{
    all_of, any_of, contains, count_if, equal_to, find, find_if, fold_left, fold_right, length,
    none_of, sum, to_vec,
};
use proptest::prelude::*;

// =============================================================================
// Folds
// =============================================================================

proptest! {
    /// fold_left over a Vec agrees with Iterator::fold
    #[test]
    fn prop_vec_fold_left(values in prop::collection::vec(-100i32..100, 0..16)) {
        let folded = fold_left(values.clone(), String::new(), |text: String, value: i32| {
            format!("{text},{value}")
        });
        let expected = values.iter().fold(String::new(), |text, value| format!("{text},{value}"));
        prop_assert_eq!(folded, expected);
    }

    /// fold_right over a Vec visits elements from the back
    #[test]
    fn prop_vec_fold_right(values in prop::collection::vec(any::<u8>(), 0..16)) {
        let visited = fold_right(values.clone(), Vec::new(), |value: u8, mut seen: Vec<u8>| {
            seen.push(value);
            seen
        });
        let expected: Vec<u8> = values.into_iter().rev().collect();
        prop_assert_eq!(visited, expected);
    }

    /// fold_left over a tuple of runtime values keeps the element order
    #[test]
    fn prop_tuple_fold_left(a in 0i64..10, b in 0i64..10, c in 0i64..10) {
        let digits = fold_left(tuple!(a, b, c), 0i64, |number: i64, digit: i64| number * 10 + digit);
        prop_assert_eq!(digits, a * 100 + b * 10 + c);
    }

    /// fold_right over a tuple of runtime values nests from the right
    #[test]
    fn prop_tuple_fold_right(a in -5i32..5, b in -5i32..5, c in -5i32..5) {
        let alternating = fold_right(tuple!(a, b, c), 0, |value: i32, rest: i32| value - rest);
        prop_assert_eq!(alternating, a - (b - c));
    }

    /// length, sum and to_vec agree with the standard library
    #[test]
    fn prop_derived_folds(values in prop::collection::vec(-1000i32..1000, 0..16)) {
        prop_assert_eq!(length(values.clone()), values.len());
        prop_assert_eq!(sum::<i32, _>(values.clone()), values.iter().sum::<i32>());
        prop_assert_eq!(
            count_if(values.clone(), |value: &i32| *value > 0),
            values.iter().filter(|value| **value > 0).count()
        );
    }

    /// to_vec on a tuple lists its elements in order
    #[test]
    fn prop_tuple_to_vec(a in any::<char>(), b in any::<char>()) {
        prop_assert_eq!(to_vec(tuple!(a, b)), vec![a, b]);
    }

    /// Option folds like a collection of zero or one element
    #[test]
    fn prop_option_fold(value in any::<Option<i16>>()) {
        let folded = fold_left(value, 1i32, |state: i32, held: i16| state + i32::from(held));
        prop_assert_eq!(folded, 1 + value.map_or(0, i32::from));
    }
}

// =============================================================================
// Searches
// =============================================================================

proptest! {
    /// find_if returns the first match
    #[test]
    fn prop_vec_find_if(values in prop::collection::vec(0u8..20, 0..12)) {
        let found = find_if(values.clone(), |value: &u8| *value > 10);
        prop_assert_eq!(found, values.iter().copied().find(|value| *value > 10));
    }

    /// any_of, all_of and none_of agree with the iterator adapters
    #[test]
    fn prop_vec_quantifiers(values in prop::collection::vec(-3i8..3, 0..8)) {
        let positive = |value: &i8| *value > 0;
        prop_assert_eq!(any_of(values.clone(), positive), values.iter().any(positive));
        prop_assert_eq!(all_of(values.clone(), positive), values.iter().all(positive));
        prop_assert_eq!(none_of(values.clone(), positive), !values.iter().any(positive));
    }

    /// contains and find test elements with `equal`
    #[test]
    fn prop_vec_contains(values in prop::collection::vec(0u16..5, 0..8), key in 0u16..5) {
        prop_assert_eq!(contains(values.clone(), key), values.contains(&key));
        prop_assert_eq!(find(values.clone(), key), values.contains(&key).then_some(key));
    }

    /// Searching a runtime tuple answers at runtime
    #[test]
    fn prop_tuple_search(a in 0i32..3, b in 0i32..3, key in 0i32..3) {
        prop_assert_eq!(any_of(tuple!(a, b), equal_to(key)), a == key || b == key);
        prop_assert_eq!(contains(tuple!(a, b), key), a == key || b == key);
    }
}
