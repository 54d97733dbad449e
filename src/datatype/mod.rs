//! Data types.
//!
//! Every structure here is a plain value whose type carries as much as
//! possible: the element types of a [`Cons`] tuple, the keys of a [`Set`],
//! the bounds of a [`Range`], whether an optional is [`Just`] or
//! [`Nothing`]. Each has its own tag and models the concepts of
//! [`typeclass`](crate::typeclass) that make sense for it.
//!
//! | Type                | Tag                   | Models                                                        |
//! |---------------------|-----------------------|---------------------------------------------------------------|
//! | [`True`]/[`False`]  | [`BoolConstantTag`]   | Comparable, Orderable, Constant                               |
//! | [`Z`]/[`S<N>`](S)   | [`IntegralConstantTag`] | Comparable, Orderable, Ring, Constant                       |
//! | [`Nil`]/[`Cons`]    | [`TupleTag`]          | Comparable, Orderable, Iterable, Foldable, Searchable, MonadPlus |
//! | [`Pair`]            | [`PairTag`]           | Comparable, Orderable                                         |
//! | [`Just`]/[`Nothing`]| [`OptionalTag`]       | Comparable, Orderable, Foldable, Searchable, MonadPlus        |
//! | [`Left`]/[`Right`]  | [`EitherTag`]         | Comparable, Orderable, Monad                                  |
//! | [`Lazy`]            | [`LazyTag`]           | Monad                                                         |
//! | [`Set`]             | [`SetTag`]            | Comparable, Foldable, Searchable                              |
//! | [`Map`]             | [`MapTag`]            | Comparable, Functor, Foldable, Searchable                     |
//! | [`Range`]           | [`RangeTag`]          | Comparable, Iterable, Foldable, Searchable, Functor           |
//! | [`Char`]            | [`CharConstantTag`]   | Comparable, Orderable, Constant                               |
//! | [`Chars`]           | [`StringTag`]         | Comparable, Orderable, Iterable, Foldable, Searchable, Monoid |
//! | [`Str`]             | [`TextTag`]           | Comparable, Orderable, Iterable, Foldable, Searchable         |
//! | a [`Struct`]        | [`StructTag`]         | Comparable, Foldable, Searchable                              |
//!
//! [`True`]: crate::dispatch::True
//! [`False`]: crate::dispatch::False

mod either;
mod integral;
mod keyed;
mod lazy;
mod map;
mod optional;
mod pair;
mod range;
mod record;
mod sequence;
mod set;
mod string;
mod text;
mod tuple;

pub use either::{Either, EitherDispatch, EitherFn, EitherTag, Left, Right, either, left, right};
pub use integral::{
    AnyInteger, BoolConstantTag, DifferenceOf, DivStep, IntegralConstantTag, Nat, NatAdd, NatDiv,
    NatEq, NatLt, NatMin, NatMul, NatSub, Pred, S, Succ, SumOf, Z, pred, succ,
};
pub use integral::{
    N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N16, N17, N18, N19, N20,
    N21, N22, N23, N24, N25, N26, N27, N28, N29, N30, N31, N32, N33, N34, N35, N36, N37, N38, N39,
    N40, N41, N42, N43, N44, N45, N46, N47, N48, N49, N50, N51, N52, N53, N54, N55, N56, N57, N58,
    N59, N60, N61, N62, N63, N64, N65, N66, N67, N68, N69, N70, N71, N72, N73, N74, N75, N76, N77,
    N78, N79, N80, N81, N82, N83, N84, N85, N86, N87, N88, N89, N90, N91, N92, N93, N94, N95, N96,
    N97, N98, N99, N100,
};
pub use keyed::{
    AllKeysIn, FindKey, FindKeyStep, FirstKey, GetKey, GetStep, HasKey, InsertStep, KeyProjection,
    RemoveKey, RemoveStep, SelfKey,
};
pub use lazy::{Defer, Joined, Lazy, LazyTag, Ready, Then, Thunk, lazy};
pub use map::{
    Entry, FindValueIf, FindValueStep, Map, MapEqualStep, MapTag, MapValues, ValuesEqualIn,
};
pub use optional::{
    FromJust, FromMaybe, Just, KeepIf, Maybe, Nothing, OnlyWhen, Optional, OptionalTag, from_just,
    from_maybe, is_just, is_nothing, just, maybe, only_when,
};
pub use pair::{FirstFn, Pair, PairTag, SecondFn, first, pair, second};
pub use range::{Range, RangeLen, RangeTag, range, range_len};
pub use record::{Struct, StructTag, keys, members};
pub use sequence::{
    InsertSorted, Partition, PartitionStep, ScanLeft, Sort, SortStep, TupleTake, Unpack, ZipFn,
    ZipWith, partition, scan_left, sort, take_front, unpack, zip, zip_with,
};
pub use set::{Insert, InsertAll, Set, SetTag};
pub use string::{Char, CharCode, CharConstantTag, CharList, Chars, MAX_STRING_LEN, StringTag};
pub use text::{Str, Text, TextTag};
pub use tuple::{
    Concat, Cons, DebugElements, Filter, FilterStep, HList, IntoTuple, Nil, PrependFn,
    ReverseOnto, TupleAt, TupleDrop, TupleTag, append, filter, prepend, reverse,
};

#[cfg(feature = "serde")]
pub use tuple::SerializeElements;
