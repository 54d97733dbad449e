//! User-defined structs as heterogeneous containers.
//!
//! A type implementing [`Struct`] exposes its fields, in declaration order,
//! as a tuple of members and their names as [`Str`] keys. Its tag is
//! [`StructTag<Self>`], under which it is Comparable (memberwise), Foldable
//! and Searchable (over its members).
//!
//! `#[derive(Struct)]` writes all of this, including the memberwise
//! `EqualImpl` and a `Convert<TupleTag>` impl. Implementing [`Struct`] by
//! hand only gives folding, searching and construction through
//! [`make`](crate::dispatch::make).
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Struct, keys};
//! use polytag::typeclass::{equal, fold_left};
//! use polytag::{Struct, tuple};
//!
//! #[derive(Debug, Struct)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let keys: Vec<&str> = keys::<Point>().iter().map(|key| key.as_str()).collect();
//! assert_eq!(keys, ["x", "y"]);
//!
//! let point = Point { x: 3, y: 4 };
//! assert!(equal(&point, &Point { x: 3, y: 4 }));
//! assert_eq!(fold_left(point, 0, |sum: i32, n: i32| sum + n), 7);
//! assert_eq!(Point::from_members(tuple!(1, 2)).into_members(), tuple!(1, 2));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::dispatch::{Make, Tag, TagId, Top};
use crate::typeclass::{
    AnyOf, AnyOfImpl, Comparable, FindIf, FindIfImpl, FoldLeft, FoldLeftImpl, FoldRight,
    FoldRightImpl, Foldable, NativeFold, NativeSearch, Searchable,
};

use super::text::Str;
use super::tuple::{HList, IntoTuple};

/// A struct whose fields can be taken out as a tuple and put back.
///
/// Implementors also implement `Tagged<Tag = StructTag<Self>>`.
pub trait Struct: Sized + 'static {
    /// The identity of the struct's tag.
    type Id: TagId;

    /// The field types, in declaration order.
    type Members: HList;

    /// The field names, in declaration order.
    const KEYS: &'static [Str];

    /// Moves the fields out.
    fn into_members(self) -> Self::Members;

    /// Builds the struct from its fields.
    fn from_members(members: Self::Members) -> Self;
}

/// The tag of the [`Struct`] `S`.
pub struct StructTag<S>(PhantomData<fn() -> S>);

impl<S> Default for StructTag<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S> Clone for StructTag<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StructTag<S> {}

impl<S> fmt::Debug for StructTag<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "StructTag<{}>", std::any::type_name::<S>())
    }
}

impl<S: Struct> Tag for StructTag<S> {
    type Id = S::Id;
    type Embeds = Top;
}

impl<S: Struct> Comparable for StructTag<S> {}

/// The field names of `S`.
pub fn keys<S: Struct>() -> &'static [Str] {
    S::KEYS
}

/// The fields of `value` as a tuple.
pub fn members<S: Struct>(value: S) -> S::Members {
    value.into_members()
}

impl<S, Args> Make<Args> for StructTag<S>
where
    S: Struct,
    Args: IntoTuple<Output = S::Members>,
{
    type Output = S;

    fn make(args: Args) -> S {
        S::from_members(args.into_tuple())
    }
}

// =============================================================================
// Foldable and Searchable over members
// =============================================================================

impl<S: Struct> Foldable for StructTag<S> {
    type Mcd = NativeFold;
}

impl<S, St, F> FoldLeftImpl<S, St, F> for StructTag<S>
where
    S: Struct,
    S::Members: FoldLeft<St, F>,
{
    type Output = <S::Members as FoldLeft<St, F>>::Output;

    fn fold_left(xs: S, state: St, function: &mut F) -> Self::Output {
        xs.into_members().fold_left_with(state, function)
    }
}

impl<S, St, F> FoldRightImpl<S, St, F> for StructTag<S>
where
    S: Struct,
    S::Members: FoldRight<St, F>,
{
    type Output = <S::Members as FoldRight<St, F>>::Output;

    fn fold_right(xs: S, state: St, function: &mut F) -> Self::Output {
        xs.into_members().fold_right_with(state, function)
    }
}

impl<S: Struct> Searchable for StructTag<S> {
    type Mcd = NativeSearch;
}

impl<S, P> FindIfImpl<S, P> for StructTag<S>
where
    S: Struct,
    S::Members: FindIf<P>,
{
    type Output = <S::Members as FindIf<P>>::Output;

    fn find_if(xs: S, predicate: &mut P) -> Self::Output {
        xs.into_members().find_if_with(predicate)
    }
}

impl<S, P> AnyOfImpl<S, P> for StructTag<S>
where
    S: Struct,
    S::Members: AnyOf<P>,
{
    type Output = <S::Members as AnyOf<P>>::Output;

    fn any_of(xs: S, predicate: &mut P) -> Self::Output {
        xs.into_members().any_of_with(predicate)
    }
}
