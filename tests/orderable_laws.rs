//! Property-based tests for the Orderable laws.
//!
//! `less` must be a strict total order on each tag:
//!
//! - **Irreflexivity**: `!less(a, a)`
//! - **Asymmetry**: `less(a, b)` implies `!less(b, a)`
//! - **Transitivity**: `less(a, b) && less(b, c)` implies `less(a, c)`
//! - **Totality**: exactly one of `less(a, b)`, `equal(a, b)`, `less(b, a)`

use polytag::datatype::{N4, Str};
use polytag::text;
use polytag::typeclass::{equal, greater, greater_equal, less, less_equal, max, min};
use proptest::prelude::*;

const WORDS: [Str; 6] = [
    text!(""),
    text!("a"),
    text!("ab"),
    text!("abc"),
    text!("abcde"),
    text!("abfde"),
];

proptest! {
    /// Irreflexivity and asymmetry for i32
    #[test]
    fn prop_i32_strict(left in any::<i32>(), right in any::<i32>()) {
        prop_assert!(!less(&left, &left));
        if less(&left, &right) {
            prop_assert!(!less(&right, &left));
        }
    }

    /// Transitivity for u8
    #[test]
    fn prop_u8_transitive(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        if less(&a, &b) && less(&b, &c) {
            prop_assert!(less(&a, &c));
        }
    }

    /// Totality for i16
    #[test]
    fn prop_i16_total(left in -2i16..2, right in -2i16..2) {
        let answers = [less(&left, &right), equal(&left, &right), less(&right, &left)];
        prop_assert_eq!(answers.iter().filter(|answer| **answer).count(), 1);
    }

    /// The derived comparisons agree with `less`
    #[test]
    fn prop_derived_comparisons(left in any::<i64>(), right in any::<i64>()) {
        prop_assert_eq!(greater(&left, &right), less(&right, &left));
        prop_assert_eq!(less_equal(&left, &right), !less(&right, &left));
        prop_assert_eq!(greater_equal(&left, &right), !less(&left, &right));
        prop_assert_eq!(min(left, right), left.min(right));
        prop_assert_eq!(max(left, right), left.max(right));
    }
}

proptest! {
    /// Runtime text orders like the standard library orders `str`
    #[test]
    fn prop_str_matches_std(left in 0usize..6, right in 0usize..6) {
        let (left, right) = (WORDS[left], WORDS[right]);
        prop_assert_eq!(less(&left, &right), left.as_str() < right.as_str());
        prop_assert_eq!(equal(&left, &right), left.as_str() == right.as_str());
    }

    /// Owned strings order lexicographically
    #[test]
    fn prop_string_lexicographic(left in "[a-c]{0,4}", right in "[a-c]{0,4}") {
        prop_assert_eq!(less(&left, &right), left < right);
    }

    /// `None` is below every `Some`, and `Some` values compare by content
    #[test]
    fn prop_option_order(left in any::<Option<u16>>(), right in any::<Option<u16>>()) {
        prop_assert_eq!(less(&left, &right), left < right);
    }

    /// Vectors order lexicographically
    #[test]
    fn prop_vec_lexicographic(
        left in prop::collection::vec(0u8..3, 0..4),
        right in prop::collection::vec(0u8..3, 0..4),
    ) {
        prop_assert_eq!(less(&left, &right), left < right);
    }

    /// A natural orders against the `usize` it embeds into
    #[test]
    fn prop_natural_order(value in 0usize..10) {
        prop_assert_eq!(less(&N4, &value), 4 < value);
        prop_assert_eq!(less(&value, &N4), value < 4);
    }
}
