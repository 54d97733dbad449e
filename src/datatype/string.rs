//! Compile-time strings.
//!
//! A [`Chars`] is a tuple of [`Char`] constants, each carrying its ASCII
//! code in its type. Two compile-time strings compare with a [`True`] or
//! [`False`] result, so they work as keys of a [`Set`](super::Set) or a
//! [`Map`](super::Map). Build one with [`string!`](crate::string), which
//! rejects non-ASCII text, NUL and text longer than [`MAX_STRING_LEN`].
//!
//! `Chars` is tagged [`StringTag`], which embeds into
//! [`TextTag`](super::TextTag): comparing a compile-time string with a
//! runtime `&str`, `String` or [`Str`] compares its text at runtime.
//! [`Chars::TEXT`] is that text as a constant, terminator included.
//!
//! # Examples
//!
//! ```rust
//! use polytag::dispatch::{False, True};
//! use polytag::string;
//! use polytag::typeclass::{equal, less, plus};
//!
//! let name = string!("polytag");
//! assert_eq!(name.as_str(), "polytag");
//! assert_eq!(name.c_str(), c"polytag");
//!
//! let _: True = equal(&string!("abc"), &string!("abc"));
//! let _: False = equal(&string!("abc"), &string!("abd"));
//! let _: True = less(&string!("ab"), &string!("abc"));
//! assert!(equal(&string!("abc"), &"abc"));
//!
//! let joined = plus(string!("poly"), string!("tag"));
//! assert_eq!(joined.as_str(), "polytag");
//! ```
//!
//! ```rust,compile_fail
//! use polytag::string;
//!
//! let accented = string!("caf\u{e9}");
//! ```
//!
//! [`True`]: crate::dispatch::True
//! [`False`]: crate::dispatch::False

use std::ffi::CStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::dispatch::{
    B0, B1, Convert, Embed, IdCons, IdNil, LessId, LessIdOutput, SameId, SameIdOutput, Tagged,
    builtin_tag,
};
use crate::typeclass::{
    AtImpl, Comparable, Constant, DropFrontImpl, Equal, EqualImpl, EqualOutput, FoldFromIterable,
    Foldable, IsEmptyImpl, Iterable, Less, LessImpl, LessOutput, Monoid, Orderable, PlusImpl,
    SearchFromIterable, Searchable, UnconsImpl, ZeroImpl,
};

use super::text::{Str, TextTag};
use super::tuple::{Concat, Cons, HList, Nil, TupleAt, TupleDrop, TupleTag};

/// The longest text a [`Chars`] holds.
pub const MAX_STRING_LEN: usize = 63;

const BUFFER_LEN: usize = MAX_STRING_LEN + 1;

// =============================================================================
// Characters
// =============================================================================

/// The tag of [`Char`] constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharConstantTag;

builtin_tag!(CharConstantTag => [0 0 1 0 1 0 1 0], embeds char);

/// Reads a character code out of a 7-bit identity.
pub trait CharCode {
    /// The code point.
    const CODE: u32;

    /// The number of bits read.
    const WIDTH: u32;
}

impl CharCode for IdNil {
    const CODE: u32 = 0;
    const WIDTH: u32 = 0;
}

impl<Rest: CharCode> CharCode for IdCons<B0, Rest> {
    const CODE: u32 = Rest::CODE;
    const WIDTH: u32 = Rest::WIDTH + 1;
}

impl<Rest: CharCode> CharCode for IdCons<B1, Rest> {
    const CODE: u32 = (1 << Rest::WIDTH) | Rest::CODE;
    const WIDTH: u32 = Rest::WIDTH + 1;
}

/// An ASCII character known to the compiler.
///
/// `Code` spells the character's code most significant bit first, as
/// produced by [`string!`](crate::string).
///
/// ```rust
/// use polytag::datatype::Char;
/// use polytag::tag_id;
///
/// type LowerA = Char<tag_id![1 1 0 0 0 0 1]>;
/// assert_eq!(LowerA::VALUE, 'a');
/// ```
pub struct Char<Code>(PhantomData<Code>);

impl<Code> Char<Code> {
    /// The character.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Code: CharCode> Char<Code> {
    /// The character as a runtime `char`.
    pub const VALUE: char = match char::from_u32(Code::CODE) {
        Some(value) => value,
        None => panic!("character code out of range"),
    };
}

impl<Code> Clone for Char<Code> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Code> Copy for Char<Code> {}

impl<Code> Default for Char<Code> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Code> PartialEq for Char<Code> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<Code> Eq for Char<Code> {}

impl<Code> Hash for Char<Code> {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<Code: CharCode> fmt::Debug for Char<Code> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Char<{:?}>", Self::VALUE)
    }
}

impl<Code: CharCode> fmt::Display for Char<Code> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", Self::VALUE)
    }
}

impl<Code> Tagged for Char<Code> {
    type Tag = CharConstantTag;
}

impl<Code: CharCode> Constant for Char<Code> {
    type Value = char;

    fn value(&self) -> char {
        Self::VALUE
    }
}

impl<Code: CharCode> Embed<char> for Char<Code> {
    type Target = char;

    fn embed(&self) -> char {
        Self::VALUE
    }
}

impl Comparable for CharConstantTag {}

impl<A: SameId<B>, B> EqualImpl<Char<A>, Char<B>> for CharConstantTag {
    type Output = SameIdOutput<A, B>;

    fn equal(_: &Char<A>, _: &Char<B>) -> Self::Output {
        Default::default()
    }
}

impl Orderable for CharConstantTag {}

impl<A: LessId<B>, B> LessImpl<Char<A>, Char<B>> for CharConstantTag {
    type Output = LessIdOutput<A, B>;

    fn less(_: &Char<A>, _: &Char<B>) -> Self::Output {
        Default::default()
    }
}

#[cfg(feature = "serde")]
impl<Code: CharCode> serde::Serialize for Char<Code> {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_char(Self::VALUE)
    }
}

// =============================================================================
// Strings
// =============================================================================

/// The tag of [`Chars`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringTag;

builtin_tag!(StringTag => [0 0 1 0 0 1 1 1], embeds TextTag);

const fn prepend(byte: u8, rest: [u8; BUFFER_LEN]) -> [u8; BUFFER_LEN] {
    let mut buffer = [0; BUFFER_LEN];
    buffer[0] = byte;
    let mut position = 1;
    while position < BUFFER_LEN {
        buffer[position] = rest[position - 1];
        position += 1;
    }
    buffer
}

/// A tuple of [`Char`] constants, spelled out as NUL-padded bytes.
pub trait CharList: HList + 'static {
    /// The characters followed by NUL padding.
    const BUFFER: [u8; BUFFER_LEN];
}

impl CharList for Nil {
    const BUFFER: [u8; BUFFER_LEN] = [0; BUFFER_LEN];
}

impl<Code, T> CharList for Cons<Char<Code>, T>
where
    Code: CharCode + 'static,
    T: CharList,
{
    #[allow(clippy::cast_possible_truncation)]
    const BUFFER: [u8; BUFFER_LEN] = prepend(Code::CODE as u8, T::BUFFER);
}

/// A string whose characters are part of its type.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Chars<Cs>(Cs);

impl<Cs> Chars<Cs> {
    /// Wraps a tuple of characters. Used by [`string!`](crate::string).
    pub const fn from_chars(chars: Cs) -> Self {
        Self(chars)
    }

    /// The characters as a tuple.
    pub fn into_chars(self) -> Cs {
        self.0
    }
}

impl<Cs: CharList> Chars<Cs> {
    const BUFFER: &'static [u8; BUFFER_LEN] = &Cs::BUFFER;

    /// The text as a runtime [`Str`].
    pub const TEXT: Str = {
        assert!(Cs::LEN <= MAX_STRING_LEN, "compile-time string is too long");
        match Str::from_bytes_with_nul(Self::BUFFER.as_slice().split_at(Cs::LEN + 1).0) {
            Ok(text) => text,
            Err(_) => panic!("compile-time string is not NUL-terminated ASCII"),
        }
    };

    /// The number of characters.
    pub const fn len(&self) -> usize {
        Cs::LEN
    }

    /// Whether there are no characters.
    pub const fn is_empty(&self) -> bool {
        Cs::LEN == 0
    }

    /// The text.
    pub const fn as_str(&self) -> &'static str {
        Self::TEXT.as_str()
    }

    /// The text as a runtime [`Str`].
    pub const fn to_str(&self) -> Str {
        Self::TEXT
    }

    /// The text as a C string.
    pub const fn c_str(&self) -> &'static CStr {
        Self::TEXT.c_str()
    }
}

impl<Cs: CharList> fmt::Debug for Chars<Cs> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "string!({:?})", self.as_str())
    }
}

impl<Cs: CharList> fmt::Display for Chars<Cs> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl<Cs> Tagged for Chars<Cs> {
    type Tag = StringTag;
}

impl<Cs: CharList + Copy + Default> Constant for Chars<Cs> {
    type Value = Str;

    fn value(&self) -> Str {
        Self::TEXT
    }
}

impl<Cs: CharList> Embed<TextTag> for Chars<Cs> {
    type Target = Str;

    fn embed(&self) -> Str {
        Self::TEXT
    }
}

impl<Cs> Convert<TupleTag> for Chars<Cs> {
    type Output = Cs;

    fn convert(self) -> Cs {
        self.0
    }
}

impl Comparable for StringTag {}

impl<A: Equal<B>, B> EqualImpl<Chars<A>, Chars<B>> for StringTag {
    type Output = EqualOutput<A, B>;

    fn equal(left: &Chars<A>, right: &Chars<B>) -> Self::Output {
        left.0.equal_to(&right.0)
    }
}

impl Orderable for StringTag {}

impl<A: Less<B>, B> LessImpl<Chars<A>, Chars<B>> for StringTag {
    type Output = LessOutput<A, B>;

    fn less(left: &Chars<A>, right: &Chars<B>) -> Self::Output {
        left.0.less_than(&right.0)
    }
}

impl Iterable for StringTag {}

impl<Cs> IsEmptyImpl<Chars<Cs>> for StringTag
where
    TupleTag: IsEmptyImpl<Cs>,
{
    type Output = <TupleTag as IsEmptyImpl<Cs>>::Output;

    fn is_empty(xs: &Chars<Cs>) -> Self::Output {
        TupleTag::is_empty(&xs.0)
    }
}

impl<H, T: HList> UnconsImpl<Chars<Cons<H, T>>> for StringTag {
    type Head = H;
    type Tail = Chars<T>;

    fn uncons(xs: Chars<Cons<H, T>>) -> (H, Chars<T>) {
        (xs.0.head, Chars(xs.0.tail))
    }
}

impl<Cs: TupleAt<N>, N> AtImpl<Chars<Cs>, N> for StringTag {
    type Output = Cs::Output;

    fn at(xs: Chars<Cs>) -> Self::Output {
        xs.0.at_index()
    }
}

impl<Cs: TupleDrop<N>, N> DropFrontImpl<Chars<Cs>, N> for StringTag {
    type Output = Chars<Cs::Output>;

    fn drop_front(xs: Chars<Cs>) -> Self::Output {
        Chars(xs.0.drop_leading())
    }
}

impl Foldable for StringTag {
    type Mcd = FoldFromIterable;
}

impl Searchable for StringTag {
    type Mcd = SearchFromIterable;
}

impl Monoid for StringTag {}

impl<A: Concat<B>, B> PlusImpl<Chars<A>, Chars<B>> for StringTag {
    type Output = Chars<A::Output>;

    fn plus(left: Chars<A>, right: Chars<B>) -> Self::Output {
        Chars(left.0.concat_with(right.0))
    }
}

impl ZeroImpl for StringTag {
    type Output = Chars<Nil>;

    fn zero() -> Chars<Nil> {
        Chars(Nil)
    }
}

#[cfg(feature = "serde")]
impl<Cs: CharList> serde::Serialize for Chars<Cs> {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{Map, N0, N2, Nothing, just};
    use crate::dispatch::{False, True, to};
    use crate::typeclass::{at, drop_front, equal, head, is_empty, length, less, plus, tail, zero};
    use crate::{map, set, string, tag_id};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    type LowerA = Char<tag_id![1 1 0 0 0 0 1]>;
    type LowerB = Char<tag_id![1 1 0 0 0 1 0]>;

    assert_type_eq_all!(EqualOutput<LowerA, LowerA>, True);
    assert_type_eq_all!(EqualOutput<LowerA, LowerB>, False);
    assert_type_eq_all!(LessOutput<LowerA, LowerB>, True);
    assert_type_eq_all!(LessOutput<LowerB, LowerA>, False);

    #[rstest]
    fn characters_read_their_code() {
        assert_eq!(LowerA::VALUE, 'a');
        assert_eq!(LowerB::new().value(), 'b');
        assert_eq!(format!("{:?} {}", LowerA::new(), LowerB::new()), "Char<'a'> b");
        assert!(equal(&LowerA::new(), &'a'));
        assert!(less(&'a', &LowerB::new()));
    }

    #[rstest]
    fn text_is_built_during_constant_evaluation() {
        const EMPTY_LEN: usize = <Chars<Nil>>::TEXT.len();
        let word = string!("tagged");
        assert_eq!(EMPTY_LEN, 0);
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
        assert_eq!(word.to_str(), crate::text!("tagged"));
        assert_eq!(word.c_str().to_bytes(), b"tagged");
        assert_eq!(format!("{word:?} {word}"), "string!(\"tagged\") tagged");
    }

    #[rstest]
    fn comparisons_between_compile_time_strings_are_static() {
        let _: True = equal(&string!("key"), &string!("key"));
        let _: False = equal(&string!("key"), &string!("kez"));
        let _: False = equal(&string!("key"), &string!("keys"));
        let _: True = less(&string!("abc"), &string!("abd"));
        let _: True = less(&string!(""), &string!("a"));
        let _: False = less(&string!("b"), &string!("abc"));
    }

    #[rstest]
    #[case("abc", true)]
    #[case("abd", false)]
    #[case("", false)]
    fn compile_time_strings_meet_runtime_text(#[case] runtime: &str, #[case] expected: bool) {
        assert_eq!(equal(&string!("abc"), &runtime), expected);
        assert_eq!(equal(&runtime, &string!("abc")), expected);
        assert_eq!(equal(&string!("abc"), &String::from(runtime)), expected);
    }

    #[rstest]
    fn strings_iterate_over_their_characters() {
        let word = string!("hey");
        let _: False = is_empty(&word);
        let _: True = is_empty(&string!(""));
        assert_eq!(length(word), 3);
        assert_eq!(head(word).value(), 'h');
        assert_eq!(tail(word).as_str(), "ey");
        assert_eq!(at(word, N2).value(), 'y');
        assert_eq!(drop_front(word, N0), word);
    }

    #[rstest]
    fn concatenation_forms_a_monoid() {
        let joined = plus(string!("ab"), string!("cd"));
        let _: True = equal(&joined, &string!("abcd"));
        let _: True = equal(&plus(zero::<StringTag>(), string!("x")), &string!("x"));
        assert_eq!(to::<TupleTag, _>(string!("")), Nil);
    }

    #[rstest]
    fn strings_key_sets_in_any_order() {
        let forwards = set!(string!("alpha"), string!("beta"), string!("alpha"));
        let backwards = set!(string!("beta"), string!("alpha"));
        assert_eq!(forwards.len(), 2);
        let _: True = equal(&forwards, &backwards);
        let _: True = forwards.contains(&string!("beta"));
        let _: False = forwards.contains(&string!("gamma"));
    }

    #[rstest]
    fn strings_key_maps() {
        let settings = Map::new()
            .insert(string!("width"), 640u32)
            .insert(string!("title"), "polytag");
        assert_eq!(*settings.at_key(&string!("width")), 640);
        assert_eq!(*settings.at_key(&string!("title")), "polytag");
        let _: True = settings.contains(&string!("title"));
        let _: False = settings.contains(&string!("height"));
        assert_eq!(settings.find(string!("width")), just(640u32));
        assert_eq!(settings.find(string!("height")), Nothing);
        assert!(equal(
            &settings,
            &map!(string!("title") => "polytag", string!("width") => 640u32),
        ));
    }
}
