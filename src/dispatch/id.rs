//! Tag identities.
//!
//! Rust has no stable way to compare two arbitrary types for equality inside
//! the trait solver, so every tag carries an identity made of bits: a list of
//! [`B0`]/[`B1`] built with [`tag_id!`](crate::tag_id). Two identities are the
//! same exactly when the lists match bit for bit and have the same length.
//!
//! Builtin tags use 8-bit identities. Tags produced by the derive macros use
//! a 32-bit hash of the type name, so the two families never collide.
//!
//! A third bit, [`BAny`], matches both `0` and `1`. It only appears in the
//! identity of a *family* tag such as
//! [`AnyInteger`](crate::datatype::AnyInteger), which no value is tagged
//! with but which other tags may embed into: embedding into a family means
//! embedding into every tag whose identity the pattern matches.

use std::marker::PhantomData;

use super::when::{And, Bool, False, Or, True};

/// The bit `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct B0;

/// The bit `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct B1;

/// A bit equal to both `0` and `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BAny;

/// The end of an identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdNil;

/// One bit followed by the rest of an identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdCons<B, Rest>(PhantomData<(B, Rest)>);

/// A single identity bit.
pub trait Bit: 'static {
    /// Compares two bits.
    type Eq<Other: Bit>: Bool;

    /// Whether the bit matches a `0`.
    type IsZero: Bool;

    /// Whether the bit matches a `1`.
    type IsOne: Bool;

    /// Whether the bit is [`BAny`].
    type IsAny: Bool;
}

impl Bit for B0 {
    type Eq<Other: Bit> = Or<Other::IsZero, Other::IsAny>;
    type IsZero = True;
    type IsOne = False;
    type IsAny = False;
}

impl Bit for B1 {
    type Eq<Other: Bit> = Or<Other::IsOne, Other::IsAny>;
    type IsZero = False;
    type IsOne = True;
    type IsAny = False;
}

impl Bit for BAny {
    type Eq<Other: Bit> = True;
    type IsZero = True;
    type IsOne = True;
    type IsAny = True;
}

/// A complete tag identity.
pub trait TagId: 'static {
    /// [`True`] when the identity contains a [`BAny`].
    type Wildcard: Bool;
}

impl TagId for IdNil {
    type Wildcard = False;
}

impl<B: Bit, Rest: TagId> TagId for IdCons<B, Rest> {
    type Wildcard = Or<B::IsAny, Rest::Wildcard>;
}

/// Compares two identities at the type level.
pub trait SameId<Other> {
    /// [`True`] when both identities are equal.
    type Output: Bool;
}

impl SameId<IdNil> for IdNil {
    type Output = True;
}

impl<B, Rest> SameId<IdCons<B, Rest>> for IdNil {
    type Output = False;
}

impl<B, Rest> SameId<IdNil> for IdCons<B, Rest> {
    type Output = False;
}

impl<Head1, Rest1, Head2, Rest2> SameId<IdCons<Head2, Rest2>> for IdCons<Head1, Rest1>
where
    Head1: Bit,
    Head2: Bit,
    Rest1: SameId<Rest2>,
{
    type Output = And<Head1::Eq<Head2>, <Rest1 as SameId<Rest2>>::Output>;
}

/// The result of comparing two identities.
pub type SameIdOutput<A, B> = <A as SameId<B>>::Output;

/// Orders two identities of equal length, most significant bit first.
///
/// Only used for types whose identity encodes a value, such as
/// [`Char`](crate::datatype::Char) constants.
pub trait LessId<Other> {
    /// [`True`] when `Self` sorts before `Other`.
    type Output: Bool;
}

impl LessId<IdNil> for IdNil {
    type Output = False;
}

impl<Head1, Rest1, Head2, Rest2> LessId<IdCons<Head2, Rest2>> for IdCons<Head1, Rest1>
where
    Head1: Bit,
    Head2: Bit,
    Rest1: LessId<Rest2>,
{
    type Output = Or<
        And<Head1::IsZero, Head2::IsOne>,
        And<Head1::Eq<Head2>, <Rest1 as LessId<Rest2>>::Output>,
    >;
}

/// The result of ordering two identities.
pub type LessIdOutput<A, B> = <A as LessId<B>>::Output;

/// Builds a tag identity type from a sequence of `0`, `1` and `_` tokens.
///
/// ```rust
/// use polytag::dispatch::{B0, B1, BAny, IdCons, IdNil};
/// use polytag::tag_id;
///
/// let _: tag_id![1 0] = IdCons::<B1, IdCons<B0, IdNil>>::default();
/// let _: tag_id![1 _] = IdCons::<B1, IdCons<BAny, IdNil>>::default();
/// ```
#[macro_export]
macro_rules! tag_id {
    () => { $crate::dispatch::IdNil };
    (_ $($rest:tt)*) => { $crate::dispatch::IdCons<$crate::dispatch::BAny, $crate::tag_id!($($rest)*)> };
    (0 $($rest:tt)*) => { $crate::dispatch::IdCons<$crate::dispatch::B0, $crate::tag_id!($($rest)*)> };
    (1 $($rest:tt)*) => { $crate::dispatch::IdCons<$crate::dispatch::B1, $crate::tag_id!($($rest)*)> };
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(SameIdOutput<tag_id![0 1 1], tag_id![0 1 1]>, True);
    assert_type_eq_all!(SameIdOutput<tag_id![0 1 1], tag_id![0 1 0]>, False);
    assert_type_eq_all!(SameIdOutput<tag_id![1 0], tag_id![1 0 0]>, False);
    assert_type_eq_all!(SameIdOutput<tag_id![], tag_id![]>, True);
    assert_type_eq_all!(<B1 as Bit>::Eq<B1>, True);
    assert_type_eq_all!(<B0 as Bit>::Eq<B1>, False);

    assert_type_eq_all!(SameIdOutput<tag_id![0 1 _ _], tag_id![0 1 1 0]>, True);
    assert_type_eq_all!(SameIdOutput<tag_id![0 1 1 0], tag_id![0 1 _ _]>, True);
    assert_type_eq_all!(SameIdOutput<tag_id![0 1 _ _], tag_id![1 1 1 0]>, False);
    assert_type_eq_all!(SameIdOutput<tag_id![_ _], tag_id![0 1 0]>, False);
    assert_type_eq_all!(<tag_id![0 _ 1] as TagId>::Wildcard, True);
    assert_type_eq_all!(<tag_id![0 0 1] as TagId>::Wildcard, False);

    assert_type_eq_all!(LessIdOutput<tag_id![0 1 1], tag_id![1 0 0]>, True);
    assert_type_eq_all!(LessIdOutput<tag_id![1 0 0], tag_id![0 1 1]>, False);
    assert_type_eq_all!(LessIdOutput<tag_id![1 0 1], tag_id![1 0 1]>, False);
    assert_type_eq_all!(LessIdOutput<tag_id![1 0 0], tag_id![1 0 1]>, True);
}
