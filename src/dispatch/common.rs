//! Cross-tag bridging.
//!
//! A binary operation between values of two different tags is resolved by
//! looking for a tag both sides can be losslessly converted into. For tags
//! `T` and `U`, [`Common`] computes a [`Relation`](Common::Relation), tried
//! in this order:
//!
//! 1. [`Same`]: `T` and `U` are the same tag, use its implementation directly.
//! 2. [`EmbedLeft`]: `T` embeds into `U`, so convert the left operand.
//! 3. [`EmbedRight`]: `U` embeds into `T`, so convert the right operand.
//! 4. [`EmbedBoth`]: both embed into the same tag `C` (other than [`Top`]).
//! 5. [`Unrelated`]: no common tag exists.
//!
//! What `Unrelated` means is up to each operation. Equality answers
//! [`False`](super::False) while ordering and arithmetic refuse to compile.
//!
//! A tag may embed into a family of tags, written as an identity with
//! wildcard bits (see [`BAny`](super::BAny)). Compile-time naturals embed into
//! [`AnyInteger`](crate::datatype::AnyInteger), so a natural meets every
//! primitive integer type through `EmbedLeft`/`EmbedRight`, and meets a tag
//! embedding into one of them through `EmbedBoth` on that integer type.
//!
//! # Examples
//!
//! ```rust
//! use polytag::dispatch::{Common, EmbedLeft, EmbedRight, Same, Unrelated};
//! use polytag::datatype::IntegralConstantTag;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(<i32 as Common<i32>>::Relation, Same<i32>);
//! assert_type_eq_all!(<IntegralConstantTag as Common<usize>>::Relation, EmbedLeft);
//! assert_type_eq_all!(<u8 as Common<IntegralConstantTag>>::Relation, EmbedRight);
//! assert_type_eq_all!(<f64 as Common<char>>::Relation, Unrelated);
//! ```

use std::marker::PhantomData;

use super::id::{SameId, SameIdOutput, TagId};
use super::tag::{Tag, TagOf, Tagged, Top};
use super::when::{And, If, Not};

/// Both operands share the tag `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Same<T>(PhantomData<T>);

/// The left operand embeds into the right operand's tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedLeft;

/// The right operand embeds into the left operand's tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedRight;

/// Both operands embed into the tag `C`.
///
/// When one side embeds into a family, `C` is the other side's concrete
/// target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedBoth<C>(PhantomData<C>);

/// The operands have no common tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrelated;

type IdOf<T> = <T as Tag>::Id;
type EmbedsIdOf<T> = <<T as Tag>::Embeds as Tag>::Id;
type SharedTarget<T, U> =
    If<<EmbedsIdOf<T> as TagId>::Wildcard, <U as Tag>::Embeds, <T as Tag>::Embeds>;

/// The relation between two tags.
pub trait Common<U: Tag>: Tag {
    /// One of [`Same`], [`EmbedLeft`], [`EmbedRight`], [`EmbedBoth`] or
    /// [`Unrelated`].
    type Relation;
}

impl<T, U> Common<U> for T
where
    T: Tag,
    U: Tag,
    IdOf<T>: SameId<IdOf<U>>,
    EmbedsIdOf<T>: SameId<IdOf<U>> + SameId<EmbedsIdOf<U>> + SameId<IdOf<Top>>,
    EmbedsIdOf<U>: SameId<IdOf<T>>,
{
    type Relation = If<
        SameIdOutput<IdOf<T>, IdOf<U>>,
        Same<T>,
        If<
            SameIdOutput<EmbedsIdOf<T>, IdOf<U>>,
            EmbedLeft,
            If<
                SameIdOutput<EmbedsIdOf<U>, IdOf<T>>,
                EmbedRight,
                If<
                    And<
                        SameIdOutput<EmbedsIdOf<T>, EmbedsIdOf<U>>,
                        Not<SameIdOutput<EmbedsIdOf<T>, IdOf<Top>>>,
                    >,
                    EmbedBoth<SharedTarget<T, U>>,
                    Unrelated,
                >,
            >,
        >,
    >;
}

/// The relation between the tags of two values.
pub type RelationOf<X, Y> = <TagOf<X> as Common<TagOf<Y>>>::Relation;

/// Converts a value into the tag `C` its own tag embeds into.
///
/// `C` is the tag named by [`Tag::Embeds`], or, when that is a family such
/// as [`AnyInteger`](crate::datatype::AnyInteger), each member of the
/// family the value can reach.
///
/// An embedding must be injective and must preserve equality and order:
/// `equal(x, y) == equal(x.embed(), y.embed())`, and the same for `less`.
/// This is a promise made by the implementor and is not checked.
pub trait Embed<C: Tag>: Tagged {
    /// The embedded value.
    type Target: Tagged<Tag = C>;

    /// Performs the conversion.
    fn embed(&self) -> Self::Target;
}

/// The value `X` becomes when embedded into tag `C`.
pub type Embedded<X, C> = <X as Embed<C>>::Target;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{BoolConstantTag, IntegralConstantTag, TupleTag};
    use static_assertions::assert_type_eq_all;

    #[derive(Debug, Clone, Copy)]
    struct Metres;

    impl Tag for Metres {
        type Id = crate::tag_id![1 0 1 1 0 1 1 0 0 1];
        type Embeds = i64;
    }

    assert_type_eq_all!(<TupleTag as Common<TupleTag>>::Relation, Same<TupleTag>);
    assert_type_eq_all!(<usize as Common<IntegralConstantTag>>::Relation, EmbedRight);
    assert_type_eq_all!(<i32 as Common<IntegralConstantTag>>::Relation, EmbedRight);
    assert_type_eq_all!(<IntegralConstantTag as Common<i64>>::Relation, EmbedLeft);
    assert_type_eq_all!(<IntegralConstantTag as Common<u8>>::Relation, EmbedLeft);
    assert_type_eq_all!(<IntegralConstantTag as Common<f32>>::Relation, Unrelated);
    assert_type_eq_all!(<IntegralConstantTag as Common<Metres>>::Relation, EmbedBoth<i64>);
    assert_type_eq_all!(<Metres as Common<IntegralConstantTag>>::Relation, EmbedBoth<i64>);
    assert_type_eq_all!(<BoolConstantTag as Common<bool>>::Relation, EmbedLeft);
    assert_type_eq_all!(<bool as Common<IntegralConstantTag>>::Relation, Unrelated);
    assert_type_eq_all!(<i8 as Common<u8>>::Relation, Unrelated);
    assert_type_eq_all!(RelationOf<char, char>, Same<char>);
}
