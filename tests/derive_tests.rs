#![cfg(feature = "derive")]

//! Integration tests for `#[derive(Tag)]`, `#[derive(Tagged)]` and
//! `#[derive(Struct)]`.

use polytag::datatype::{
    Just, N1, N2, N3, Nothing, Str, Struct, StructTag, Text, TextTag, TupleTag, keys, members,
};
use polytag::dispatch::{Embed, False, True, make, same_tag, to};
use polytag::typeclass::{
    Comparable, EqualImpl, any_of, equal, equal_to, find_if, fold_left, length, less, not_equal,
};
use polytag::{Struct, Tag, Tagged, set, tuple};
use rstest::rstest;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Struct)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Struct)]
struct Bounds(N1, N3);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Struct)]
struct Red;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Struct)]
struct Green;

#[derive(Debug, Clone, PartialEq, Struct)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Debug, Clone, PartialEq, Struct)]
struct Record {
    id: u32,
    r#type: char,
    level: N2,
}

mod geometry {
    use polytag::Struct;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Struct)]
    #[tag(name = "geometry::Point")]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }
}

/// A length in meters that embeds into `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Tag, Tagged)]
#[tag(embeds = i64)]
struct Meters(i64);

impl Embed<i64> for Meters {
    type Target = i64;

    fn embed(&self) -> i64 {
        self.0
    }
}

impl Comparable for Meters {}

impl EqualImpl<Meters, Meters> for Meters {
    type Output = bool;

    fn equal(left: &Meters, right: &Meters) -> bool {
        left.0 == right.0
    }
}

/// A label dispatched as a string.
#[derive(Debug, Clone, Copy, Tagged)]
#[tagged(tag = TextTag)]
struct Label(&'static str);

impl Text for Label {
    fn text(&self) -> &str {
        self.0
    }
}

// =============================================================================
// Struct
// =============================================================================

#[rstest]
fn keys_name_the_fields_in_order() {
    let names: Vec<&str> = keys::<Point>().iter().map(Str::as_str).collect();
    assert_eq!(names, ["x", "y"]);

    let names: Vec<&str> = keys::<Bounds>().iter().map(Str::as_str).collect();
    assert_eq!(names, ["0", "1"]);

    let names: Vec<&str> = keys::<Record>().iter().map(Str::as_str).collect();
    assert_eq!(names, ["id", "type", "level"]);

    assert!(keys::<Red>().is_empty());
}

#[rstest]
fn members_move_in_and_out() {
    let point = Point { x: 3, y: 4 };
    assert_eq!(members(point), tuple!(3, 4));
    assert_eq!(Point::from_members(tuple!(5, 6)), Point { x: 5, y: 6 });
    assert_eq!(to::<TupleTag, _>(Bounds(N1, N3)), tuple!(N1, N3));
    assert_eq!(make::<StructTag<Point>, _>((1, 2)), Point { x: 1, y: 2 });
    assert_eq!(make::<StructTag<Red>, _>(()), Red);
}

#[rstest]
#[case(Point { x: 1, y: 2 }, Point { x: 1, y: 2 }, true)]
#[case(Point { x: 1, y: 2 }, Point { x: 1, y: 3 }, false)]
#[case(Point { x: 0, y: 2 }, Point { x: 1, y: 2 }, false)]
fn runtime_members_compare_at_runtime(
    #[case] left: Point,
    #[case] right: Point,
    #[case] expected: bool,
) {
    assert_eq!(equal(&left, &right), expected);
    assert_eq!(not_equal(&left, &right), !expected);
}

#[rstest]
fn constant_members_compare_at_compile_time() {
    let _: True = equal(&Bounds(N1, N3), &Bounds(N1, N3));
    let _: True = equal(&Red, &Red);
    let _: False = equal(&Red, &Green);
    let _: True = equal(&Wrapper { inner: N2 }, &Wrapper { inner: N2 });
}

#[rstest]
fn generic_structs_compare_memberwise() {
    assert!(equal(&Wrapper { inner: 'a' }, &Wrapper { inner: 'a' }));
    assert!(!equal(&Wrapper { inner: 7u8 }, &Wrapper { inner: 8u8 }));
}

#[rstest]
fn raw_identifiers_are_supported() {
    let record = Record {
        id: 7,
        r#type: 'q',
        level: N2,
    };
    assert!(equal(&record, &record.clone()));
    assert_eq!(members(record), tuple!(7, 'q', N2));
}

#[rstest]
fn unit_structs_are_set_keys() {
    let colors = set!(Red, Green, Red);
    assert_eq!(colors.len(), 2);
    let _: True = colors.contains(&Green);
    let _: True = equal(&colors, &set!(Green, Red));
}

#[rstest]
fn structs_fold_and_search_their_members() {
    assert_eq!(fold_left(Point { x: 3, y: 4 }, 0, |sum: i32, n: i32| sum + n), 7);
    assert_eq!(length(Bounds(N1, N3)), 2);
    let _: Just<N3> = find_if(Bounds(N1, N3), equal_to(N3));
    let _: Nothing = find_if(Bounds(N1, N3), equal_to(N2));
    assert!(any_of(Point { x: 3, y: 4 }, |n: &i32| *n > 3));
}

#[rstest]
fn structs_are_unrelated_to_other_tags() {
    let _: False = equal(&2.5f64, &Point { x: 1, y: 2 });
    let _: False = equal(&Point { x: 1, y: 2 }, &tuple!(1, 2));
    let _: False = same_tag(&Red, &Green);
}

#[rstest]
fn tag_names_tell_same_named_structs_apart() {
    let _: False = same_tag(&Point { x: 0, y: 0 }, &geometry::Point { x: 0, y: 0 });
    let _: False = equal(&Point { x: 0, y: 0 }, &geometry::Point { x: 0, y: 0 });
    assert!(equal(
        &geometry::Point { x: 1, y: 1 },
        &geometry::Point { x: 1, y: 1 }
    ));
}

// =============================================================================
// Tag and Tagged
// =============================================================================

#[rstest]
#[case(Meters(3), 3, true)]
#[case(Meters(3), 4, false)]
fn derived_tags_embed_into_their_target(
    #[case] meters: Meters,
    #[case] raw: i64,
    #[case] expected: bool,
) {
    assert_eq!(equal(&meters, &raw), expected);
    assert_eq!(equal(&raw, &meters), expected);
    assert_eq!(equal(&meters, &Meters(raw)), expected);
}

#[rstest]
fn embedding_bridges_ordering_too() {
    assert!(less(&Meters(2), &5i64));
    assert!(!less(&9i64, &Meters(5)));
}

#[rstest]
fn naturals_meet_derived_tags_through_their_integer() {
    assert!(equal(&N3, &Meters(3)));
    assert!(!equal(&Meters(4), &N3));
    assert!(less(&Meters(2), &N3));
    assert!(!less(&N3, &Meters(3)));
}

#[rstest]
fn tagged_types_join_an_existing_tag() {
    let _: True = same_tag(&Label("x"), &"x");
    assert!(equal(&Label("abc"), &"abc"));
    assert!(!equal(&Label("abc"), &String::from("abd")));
    assert!(less(&Label("abc"), &"abd"));
}
