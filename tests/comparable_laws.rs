//! Property-based tests for the Comparable laws.
//!
//! - **Reflexivity**: `equal(a, a)`
//! - **Symmetry**: `equal(a, b) == equal(b, a)`
//! - **Transitivity**: `equal(a, b) && equal(b, c)` implies `equal(a, c)`
//!
//! Every value here is a runtime value, so every answer is a `bool`. The
//! compile-time answers are covered by the scenario tests.

use polytag::datatype::{N0, N3, N7};
use polytag::tuple;
use polytag::typeclass::{equal, not_equal};
use proptest::prelude::*;

// =============================================================================
// Primitives
// =============================================================================

proptest! {
    /// Reflexivity for i64
    #[test]
    fn prop_i64_reflexive(value in any::<i64>()) {
        prop_assert!(equal(&value, &value));
    }

    /// Symmetry for i64, over a small domain so that equal pairs occur
    #[test]
    fn prop_i64_symmetric(left in -3i64..3, right in -3i64..3) {
        prop_assert_eq!(equal(&left, &right), equal(&right, &left));
    }

    /// Transitivity for char
    #[test]
    fn prop_char_transitive(
        a in prop::char::range('a', 'c'),
        b in prop::char::range('a', 'c'),
        c in prop::char::range('a', 'c'),
    ) {
        if equal(&a, &b) && equal(&b, &c) {
            prop_assert!(equal(&a, &c));
        }
    }

    /// `not_equal` is the negation of `equal`
    #[test]
    fn prop_not_equal_negates(left in any::<u8>(), right in any::<u8>()) {
        prop_assert_eq!(not_equal(&left, &right), !equal(&left, &right));
    }
}

// =============================================================================
// Strings
// =============================================================================

proptest! {
    /// Owned and borrowed strings compare by their characters
    #[test]
    fn prop_string_equality_matches_str(left in "[ab]{0,3}", right in "[ab]{0,3}") {
        prop_assert_eq!(equal(&left, &right), left == right);
        prop_assert_eq!(equal(&left, &right.as_str()), left == right);
    }

    /// Symmetry for strings
    #[test]
    fn prop_string_symmetric(left in "[xy]{0,2}", right in "[xy]{0,2}") {
        prop_assert_eq!(equal(&left, &right), equal(&right, &left));
    }
}

// =============================================================================
// Containers
// =============================================================================

proptest! {
    /// Tuples of runtime values compare elementwise
    #[test]
    fn prop_tuple_elementwise(
        number in 0i32..3,
        letter in prop::char::range('a', 'b'),
        other_number in 0i32..3,
        other_letter in prop::char::range('a', 'b'),
    ) {
        let left = tuple!(number, letter);
        let right = tuple!(other_number, other_letter);
        prop_assert_eq!(
            equal(&left, &right),
            number == other_number && letter == other_letter
        );
        prop_assert!(equal(&left, &left));
    }

    /// Option compares like the standard library does
    #[test]
    fn prop_option_matches_partial_eq(left in any::<Option<i8>>(), right in any::<Option<i8>>()) {
        prop_assert_eq!(equal(&left, &right), left == right);
    }

    /// Vec compares like the standard library does
    #[test]
    fn prop_vec_matches_partial_eq(
        left in prop::collection::vec(0i16..2, 0..4),
        right in prop::collection::vec(0i16..2, 0..4),
    ) {
        prop_assert_eq!(equal(&left, &right), left == right);
        prop_assert_eq!(equal(&left, &right), equal(&right, &left));
    }
}

// =============================================================================
// Embeddings
// =============================================================================

proptest! {
    /// A natural equals exactly the `usize` it embeds into, from either side
    #[test]
    fn prop_natural_equals_its_value(value in 0usize..10) {
        prop_assert_eq!(equal(&N3, &value), value == 3);
        prop_assert_eq!(equal(&value, &N7), value == 7);
        prop_assert_eq!(equal(&N0, &value), equal(&value, &N0));
    }
}
