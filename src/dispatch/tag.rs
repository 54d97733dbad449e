//! Tag resolution.
//!
//! Every value that takes part in dispatch maps to exactly one *tag*: a type
//! that names the family of implementations used for it. All tuples share
//! [`TupleTag`](crate::datatype::TupleTag) whatever their element types, so a
//! single `EqualImpl` on `TupleTag` serves all of them.
//!
//! Primitive types are their own tags, which keeps the convention that the
//! tag of a tag is itself.
//!
//! # Examples
//!
//! ```rust
//! use polytag::dispatch::{TagOf, Tagged};
//! use polytag::datatype::TupleTag;
//! use polytag::tuple;
//! use static_assertions::assert_type_eq_all;
//!
//! fn tag_of<T: Tagged>(_: &T) -> std::marker::PhantomData<TagOf<T>> {
//!     std::marker::PhantomData
//! }
//!
//! let _: std::marker::PhantomData<TupleTag> = tag_of(&tuple!(1, 'x', "three"));
//! assert_type_eq_all!(TagOf<i32>, i32);
//! ```

use super::id::{SameId, SameIdOutput, TagId};

/// A dispatch key.
///
/// `Id` identifies the tag at the type level and `Embeds` names the tag that
/// values of this tag can be losslessly converted into ([`Top`] when there is
/// none). Conversions along `Embeds` are what make binary operations between
/// two different tags meaningful; see [`Common`](super::Common).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a tag",
    note = "tags are declared with `#[derive(Tag)]` or by implementing `polytag::dispatch::Tag`"
)]
pub trait Tag: 'static {
    /// The type-level identity of the tag.
    type Id: TagId;

    /// The tag this one embeds into.
    type Embeds: Tag;
}

/// Maps a value type to its tag.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no tag",
    label = "cannot dispatch on this value",
    note = "derive `Tagged` (or `Struct`) for your type, or implement `polytag::dispatch::Tagged`"
)]
pub trait Tagged {
    /// The tag used for dispatch.
    type Tag: Tag;
}

/// The tag of `T`.
pub type TagOf<T> = <T as Tagged>::Tag;

/// The tag `T`'s tag embeds into.
pub type EmbedsOf<T> = <TagOf<T> as Tag>::Embeds;

/// The sentinel tag meaning "embeds into nothing".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Top;

impl Tag for Top {
    type Id = crate::tag_id![1 1 1 1 1 1 1 1];
    type Embeds = Self;
}

/// Whether two values share a tag, decided at compile time.
///
/// ```rust
/// use polytag::dispatch::{same_tag, False, True};
/// use polytag::{text, tuple};
///
/// let _: True = same_tag(&tuple!(1), &tuple!('a', 2.5));
/// let _: True = same_tag(&text!("abc"), &"abc");
/// let _: False = same_tag(&1i32, &1i64);
/// ```
pub fn same_tag<X, Y>(_: &X, _: &Y) -> SameIdOutput<<TagOf<X> as Tag>::Id, <TagOf<Y> as Tag>::Id>
where
    X: Tagged,
    Y: Tagged,
    <TagOf<X> as Tag>::Id: SameId<<TagOf<Y> as Tag>::Id>,
{
    Default::default()
}

/// The Rust type name of `T`'s tag, for diagnostics.
pub fn tag_name<T: Tagged>() -> &'static str {
    std::any::type_name::<TagOf<T>>()
}

/// Implements [`Tag`] for a builtin tag with a fixed identity.
macro_rules! builtin_tag {
    ($tag:ty => [$($bit:tt)*]) => {
        $crate::dispatch::builtin_tag!($tag => [$($bit)*], embeds $crate::dispatch::Top);
    };
    ($tag:ty => [$($bit:tt)*], embeds $embeds:ty) => {
        impl $crate::dispatch::Tag for $tag {
            type Id = $crate::tag_id![$($bit)*];
            type Embeds = $embeds;
        }
    };
}

pub(crate) use builtin_tag;

/// Makes a primitive type its own tag.
///
/// Integer types share the prefix `0100`, matched by
/// [`AnyInteger`](crate::datatype::AnyInteger).
macro_rules! self_tagged {
    ($($primitive:ty => [$($bit:tt)*]),* $(,)?) => {
        $(
            builtin_tag!($primitive => [$($bit)*]);

            impl Tagged for $primitive {
                type Tag = $primitive;
            }
        )*
    };
}

self_tagged! {
    i8 => [0 1 0 0 0 0 0 0],
    i16 => [0 1 0 0 0 0 0 1],
    i32 => [0 1 0 0 0 0 1 0],
    i64 => [0 1 0 0 0 0 1 1],
    i128 => [0 1 0 0 0 1 0 0],
    isize => [0 1 0 0 0 1 0 1],
    u8 => [0 1 0 0 0 1 1 0],
    u16 => [0 1 0 0 0 1 1 1],
    u32 => [0 1 0 0 1 0 0 0],
    u64 => [0 1 0 0 1 0 0 1],
    u128 => [0 1 0 0 1 0 1 0],
    usize => [0 1 0 0 1 0 1 1],
    f32 => [0 0 0 0 1 1 0 1],
    f64 => [0 0 0 0 1 1 1 0],
    bool => [0 0 0 0 1 1 1 1],
    char => [0 0 0 1 0 0 0 0],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{False, True};
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    assert_type_eq_all!(TagOf<u64>, u64);
    assert_type_eq_all!(TagOf<TagOf<char>>, char);
    assert_type_eq_all!(EmbedsOf<f32>, Top);
    assert_impl_all!(Top: Tag);

    #[rstest]
    fn primitives_are_distinct_tags() {
        let _: False = same_tag(&1u8, &1i8);
        let _: False = same_tag(&1.0f32, &1.0f64);
        let _: True = same_tag(&'a', &'b');
    }

    #[rstest]
    fn tag_name_reports_the_tag_type() {
        assert_eq!(tag_name::<i32>(), "i32");
        assert_eq!(tag_name::<bool>(), "bool");
    }
}
