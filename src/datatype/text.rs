//! Runtime text.
//!
//! [`Str`] is a view of a `'static` ASCII string that keeps its NUL
//! terminator, so [`Str::c_str`] hands out a `&CStr` without copying.
//! Build one with [`text!`](crate::text): the literal is validated
//! during constant evaluation, and a non-ASCII literal or one containing
//! NUL fails to compile.
//!
//! `Str`, `&str` and `String` share [`TextTag`], so they compare with
//! each other. Equality is byte equality and `less` is lexicographic.
//! `Str` is also an Iterable of `char`. Its emptiness is only known at
//! runtime, so folds and searches over it are ordinary loops producing
//! runtime results.
//!
//! Strings whose characters are known to the compiler are
//! [`Chars`](super::Chars), built with [`string!`](crate::string); they
//! embed into `TextTag` as a `Str`.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, Str};
//! use polytag::text;
//! use polytag::typeclass::{at, equal, find_if, less};
//!
//! const GREETING: Str = text!("hello");
//! assert_eq!(GREETING.len(), 5);
//! assert_eq!(GREETING.c_str().to_bytes(), b"hello");
//!
//! assert!(equal(&GREETING, &"hello"));
//! assert!(less(&text!("abc"), &text!("abfde")));
//! assert_eq!(at(GREETING, N1), 'e');
//! assert_eq!(find_if(GREETING, |c: &char| *c == 'l'), Some('l'));
//! ```
//!
//! ```rust,compile_fail
//! use polytag::text;
//!
//! let accented = text!("caf\u{e9}");
//! ```

use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;

use crate::assert::{CheckFailure, report_and_abort};
use crate::dispatch::{Convert, Tagged, builtin_tag};
use crate::error::StrError;
use crate::interop::VecTag;
use crate::typeclass::{
    AtImpl, Comparable, DropFrontImpl, EqualImpl, FoldFromIterable, Foldable, IsEmptyImpl,
    Iterable, LessImpl, Orderable, SearchFromIterable, Searchable, UnconsImpl,
};

use super::integral::Nat;

/// The tag of [`Str`], `&str` and `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextTag;

builtin_tag!(TextTag => [0 0 1 0 1 0 0 1]);

/// A `'static` ASCII string stored with its NUL terminator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Str {
    bytes: &'static [u8],
}

impl Tagged for Str {
    type Tag = TextTag;
}

impl Tagged for &str {
    type Tag = TextTag;
}

impl Tagged for String {
    type Tag = TextTag;
}

/// Builds a [`Str`] from a string literal during constant evaluation.
///
/// ```rust
/// use polytag::datatype::Str;
/// use polytag::text;
///
/// const EMPTY: Str = text!("");
/// assert!(EMPTY.is_empty());
/// assert_eq!(text!("abc").as_str(), "abc");
/// ```
#[macro_export]
macro_rules! text {
    ($text:literal) => {{
        const TEXT: $crate::datatype::Str =
            $crate::datatype::Str::from_literal(concat!($text, "\0"));
        TEXT
    }};
}

const fn validate(bytes: &[u8]) -> Result<(), StrError> {
    let Some((&terminator, text)) = bytes.split_last() else {
        return Err(StrError::MissingNul);
    };
    if terminator != 0 {
        return Err(StrError::MissingNul);
    }
    let mut position = 0;
    while position < text.len() {
        let byte = text[position];
        if byte == 0 {
            return Err(StrError::InteriorNul { position });
        }
        if !byte.is_ascii() {
            return Err(StrError::NonAscii { position });
        }
        position += 1;
    }
    Ok(())
}

impl Str {
    /// Wraps NUL-terminated ASCII bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`StrError`] naming the first offending byte, or
    /// [`StrError::MissingNul`] if the last byte is not NUL.
    pub const fn from_bytes_with_nul(bytes: &'static [u8]) -> Result<Self, StrError> {
        match validate(bytes) {
            Ok(()) => Ok(Self { bytes }),
            Err(error) => Err(error),
        }
    }

    /// Wraps a C string, which must be ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`StrError::NonAscii`] for the first byte above `0x7f`.
    pub fn from_c_str(text: &'static CStr) -> Result<Self, StrError> {
        Self::from_bytes_with_nul(text.to_bytes_with_nul())
    }

    /// Wraps a literal that already ends with `"\0"`. Used by
    /// [`text!`](crate::text).
    ///
    /// # Panics
    ///
    /// Panics if `text` is not ASCII, contains an interior NUL or lacks the
    /// terminator. In a constant this is a compile error.
    pub const fn from_literal(text: &'static str) -> Self {
        match Self::from_bytes_with_nul(text.as_bytes()) {
            Ok(string) => string,
            Err(StrError::MissingNul) => panic!("string literal is missing its NUL terminator"),
            Err(StrError::InteriorNul { .. }) => panic!("text! literal must not contain NUL"),
            Err(StrError::NonAscii { .. }) => panic!("text! literal must be ASCII"),
        }
    }

    /// The number of characters.
    pub const fn len(&self) -> usize {
        self.bytes.len().saturating_sub(1)
    }

    /// Whether the string has no characters.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The characters as bytes, without the terminator.
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self.bytes.split_last() {
            Some((_, text)) => text,
            None => &[],
        }
    }

    /// The characters as a `str`.
    pub const fn as_str(&self) -> &'static str {
        // ASCII is always valid UTF-8.
        match std::str::from_utf8(self.as_bytes()) {
            Ok(text) => text,
            Err(_) => "",
        }
    }

    /// The string as a C string, terminator included.
    pub const fn c_str(&self) -> &'static CStr {
        match CStr::from_bytes_with_nul(self.bytes) {
            Ok(text) => text,
            Err(_) => c"",
        }
    }

    /// Byte equality, usable in constants.
    pub const fn equals(&self, other: &Self) -> bool {
        let (left, right) = (self.as_bytes(), other.as_bytes());
        if left.len() != right.len() {
            return false;
        }
        let mut index = 0;
        while index < left.len() {
            if left[index] != right[index] {
                return false;
            }
            index += 1;
        }
        true
    }

    /// Lexicographic comparison, usable in constants.
    pub const fn compare(&self, other: &Self) -> Ordering {
        let (left, right) = (self.as_bytes(), other.as_bytes());
        let shared = if left.len() < right.len() {
            left.len()
        } else {
            right.len()
        };
        let mut index = 0;
        while index < shared {
            if left[index] < right[index] {
                return Ordering::Less;
            }
            if left[index] > right[index] {
                return Ordering::Greater;
            }
            index += 1;
        }
        if left.len() < right.len() {
            Ordering::Less
        } else if left.len() > right.len() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// The characters, in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + 'static {
        self.as_bytes().iter().map(|&byte| char::from(byte))
    }

    fn suffix(&self, start: usize) -> Self {
        let start = start.min(self.len());
        Self {
            bytes: self.bytes.split_at(start).1,
        }
    }
}

impl Default for Str {
    fn default() -> Self {
        Self { bytes: b"\0" }
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), formatter)
    }
}

impl fmt::Display for Str {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Str> for &'static str {
    fn from(text: Str) -> Self {
        text.as_str()
    }
}

impl From<Str> for String {
    fn from(text: Str) -> Self {
        text.as_str().to_owned()
    }
}

impl TryFrom<&'static CStr> for Str {
    type Error = StrError;

    fn try_from(text: &'static CStr) -> Result<Self, StrError> {
        Self::from_c_str(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Str {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================================
// Comparable and Orderable
// =============================================================================

/// A value of [`TextTag`] read as text.
pub trait Text {
    /// The characters.
    fn text(&self) -> &str;
}

impl Text for Str {
    fn text(&self) -> &str {
        self.as_str()
    }
}

impl Text for &str {
    fn text(&self) -> &str {
        self
    }
}

impl Text for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}

impl Comparable for TextTag {}

impl<X: Text, Y: Text> EqualImpl<X, Y> for TextTag {
    type Output = bool;

    fn equal(left: &X, right: &Y) -> bool {
        left.text() == right.text()
    }
}

impl Orderable for TextTag {}

impl<X: Text, Y: Text> LessImpl<X, Y> for TextTag {
    type Output = bool;

    fn less(left: &X, right: &Y) -> bool {
        left.text() < right.text()
    }
}

// =============================================================================
// Iterable, Foldable, Searchable
// =============================================================================

fn out_of_bounds(expression: &'static str, message: String) -> ! {
    report_and_abort(&CheckFailure::new(expression, file!(), line!()).with_message(message))
}

impl Iterable for TextTag {}

impl IsEmptyImpl<Str> for TextTag {
    type Output = bool;

    fn is_empty(xs: &Str) -> bool {
        xs.is_empty()
    }
}

impl UnconsImpl<Str> for TextTag {
    type Head = char;
    type Tail = Str;

    fn uncons(xs: Str) -> (char, Str) {
        match xs.as_bytes().first() {
            Some(&first) => (char::from(first), xs.suffix(1)),
            None => out_of_bounds("!is_empty(string)", "head of an empty string".to_owned()),
        }
    }
}

impl<N: Nat> AtImpl<Str, N> for TextTag {
    type Output = char;

    fn at(xs: Str) -> char {
        match xs.as_bytes().get(N::VALUE) {
            Some(&byte) => char::from(byte),
            None => out_of_bounds(
                "index < len(string)",
                format!(
                    "index {} is out of bounds for a string of length {}",
                    N::VALUE,
                    xs.len()
                ),
            ),
        }
    }
}

impl<N: Nat> DropFrontImpl<Str, N> for TextTag {
    type Output = Str;

    fn drop_front(xs: Str) -> Str {
        xs.suffix(N::VALUE)
    }
}

impl Foldable for TextTag {
    type Mcd = FoldFromIterable;
}

impl Searchable for TextTag {
    type Mcd = SearchFromIterable;
}

impl Convert<VecTag> for Str {
    type Output = Vec<char>;

    fn convert(self) -> Vec<char> {
        self.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N0, N2, N9};
    use crate::dispatch::{False, to};
    use crate::text;
    use crate::typeclass::{
        any_of, at, contains, drop_front, equal, fold_left, fold_right, head, is_empty, length,
        less, tail,
    };
    use rstest::rstest;

    #[rstest]
    #[case(text!(""), text!("a"))]
    #[case(text!("a"), text!("ab"))]
    #[case(text!("ab"), text!("abc"))]
    #[case(text!("abc"), text!("abcde"))]
    #[case(text!("abc"), text!("abfde"))]
    fn ordering_is_lexicographic(#[case] smaller: Str, #[case] larger: Str) {
        assert!(less(&smaller, &larger));
        assert!(!less(&larger, &smaller));
        assert_eq!(smaller.compare(&larger), Ordering::Less);
        assert_eq!(larger.compare(&smaller), Ordering::Greater);
        assert_eq!(smaller.cmp(&larger), Ordering::Less);
    }

    #[rstest]
    fn equality_spans_every_string_type() {
        let text = text!("abc");
        assert!(equal(&text, &"abc"));
        assert!(equal(&String::from("abc"), &text));
        assert!(!equal(&text, &"abd"));
        assert!(text.equals(&text!("abc")));
        assert!(!text.equals(&text!("ab")));
        let _: False = equal(&text, &'a');
    }

    #[rstest]
    fn const_construction() {
        const NAME: Str = text!("polytag");
        const NAME_LENGTH: usize = NAME.len();
        assert_eq!(NAME_LENGTH, 7);
        assert_eq!(NAME.as_bytes(), b"polytag");
        assert_eq!(NAME.c_str(), c"polytag");
        assert_eq!(format!("{NAME:?} {NAME}"), "\"polytag\" polytag");
        assert_eq!(Str::default(), text!(""));
    }

    #[rstest]
    #[case(b"ok\0", Ok("ok"))]
    #[case(b"\0", Ok(""))]
    #[case(b"", Err(StrError::MissingNul))]
    #[case(b"no terminator", Err(StrError::MissingNul))]
    #[case(b"a\0b\0", Err(StrError::InteriorNul { position: 1 }))]
    #[case(b"ab\xff\0", Err(StrError::NonAscii { position: 2 }))]
    fn runtime_construction_is_validated(
        #[case] bytes: &'static [u8],
        #[case] expected: Result<&str, StrError>,
    ) {
        assert_eq!(Str::from_bytes_with_nul(bytes).map(|text| text.as_str()), expected);
    }

    #[rstest]
    fn c_strings_round_trip() {
        let text = Str::from_c_str(c"round trip");
        assert_eq!(text, Ok(text!("round trip")));
        assert_eq!(Str::try_from(c"caf\xc3\xa9"), Err(StrError::NonAscii { position: 3 }));
    }

    #[rstest]
    fn iterating_characters() {
        let word = text!("abc");
        assert!(!is_empty(&word));
        assert!(is_empty(&text!("")));
        assert_eq!(head(word), 'a');
        assert_eq!(tail(word), text!("bc"));
        assert_eq!(at(word, N2), 'c');
        assert_eq!(drop_front(word, N2), text!("c"));
        assert_eq!(drop_front(word, N9), text!(""));
        assert_eq!(at(drop_front(word, N0), N0), 'a');
    }

    #[rstest]
    fn folding_and_searching_run_at_runtime() {
        let word = text!("fold");
        let forwards = fold_left(word, String::new(), |mut text: String, c: char| {
            text.push(c);
            text
        });
        let backwards = fold_right(word, String::new(), |c: char, mut text: String| {
            text.push(c);
            text
        });
        assert_eq!(forwards, "fold");
        assert_eq!(backwards, "dlof");
        assert_eq!(length(word), 4);
        assert!(contains(word, 'o'));
        assert!(!any_of(word, |c: &char| c.is_ascii_digit()));
        assert_eq!(to::<VecTag, _>(word), vec!['f', 'o', 'l', 'd']);
    }
}
