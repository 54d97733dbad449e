#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Compile-time values serialize as the runtime value they stand for:
//! naturals as numbers, type-level booleans as booleans, optionals as a
//! value or `null`, tuples as JSON arrays.

use polytag::datatype::{N0, N7, N42, Nothing, just, left, pair, right};
use polytag::dispatch::{False, True};
use polytag::{string, text, tuple};
use rstest::rstest;

// =============================================================================
// Constants
// =============================================================================

#[rstest]
fn test_naturals_serialize_as_numbers() {
    assert_eq!(serde_json::to_string(&N0).unwrap(), "0");
    assert_eq!(serde_json::to_string(&N7).unwrap(), "7");
    assert_eq!(serde_json::to_string(&N42).unwrap(), "42");
}

#[rstest]
fn test_booleans_serialize_as_booleans() {
    assert_eq!(serde_json::to_string(&True).unwrap(), "true");
    assert_eq!(serde_json::to_string(&False).unwrap(), "false");
}

// =============================================================================
// Containers
// =============================================================================

#[rstest]
fn test_tuple_serializes_as_array() {
    let mixed = tuple!(1, 'x', N7, "four", true);
    assert_eq!(
        serde_json::to_string(&mixed).unwrap(),
        r#"[1,"x",7,"four",true]"#
    );
    assert_eq!(serde_json::to_string(&tuple!()).unwrap(), "[]");
}

#[rstest]
fn test_nested_tuples_stay_nested() {
    let nested = tuple!(tuple!(1, 2), tuple!(), 3);
    assert_eq!(serde_json::to_string(&nested).unwrap(), "[[1,2],[],3]");
}

#[rstest]
fn test_pair_serializes_as_object() {
    let json = serde_json::to_value(pair(N7, "seven")).unwrap();
    assert_eq!(json, serde_json::json!({ "first": 7, "second": "seven" }));
}

#[rstest]
fn test_optional_serializes_like_option() {
    assert_eq!(serde_json::to_string(&just(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&Nothing).unwrap(), "null");
    assert_eq!(
        serde_json::to_string(&tuple!(just('a'), Nothing)).unwrap(),
        r#"["a",null]"#
    );
}

#[rstest]
fn test_text_serializes_without_terminator() {
    assert_eq!(serde_json::to_string(&text!("polytag")).unwrap(), r#""polytag""#);
    assert_eq!(serde_json::to_string(&text!("")).unwrap(), r#""""#);
}

#[rstest]
fn test_compile_time_strings_serialize_as_their_text() {
    assert_eq!(serde_json::to_string(&string!("key")).unwrap(), r#""key""#);
    assert_eq!(
        serde_json::to_string(&tuple!(string!("a"), string!(""))).unwrap(),
        r#"["a",""]"#
    );
}

#[rstest]
fn test_either_serializes_as_a_tagged_variant() {
    assert_eq!(serde_json::to_string(&left("eof")).unwrap(), r#"{"Left":"eof"}"#);
    assert_eq!(serde_json::to_string(&right(N7)).unwrap(), r#"{"Right":7}"#);
}
