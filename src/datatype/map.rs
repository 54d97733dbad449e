//! Maps from compile-time keys to values of any type.
//!
//! A [`Map`] is a tuple of [`Pair`]s whose first components are distinct
//! keys. As for [`Set`](super::Set), keys must compare at compile time; the
//! values are ordinary runtime values and may all have different types.
//!
//! Looking a key up is resolved by the compiler: [`Map::find`] answers
//! [`Just`] or [`Nothing`], and [`Map::at_key`] refuses to compile when the
//! key is missing.
//!
//! Concept instances act on the values, except searching, which tests the
//! keys and yields the value stored under the first key found:
//!
//! - Comparable: same keys and equal values under each key, in any order
//! - Functor and Foldable: over the values, keys untouched
//! - Searchable: over the keys
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, N1, N2, N3, Nothing};
//! use polytag::map;
//! use polytag::typeclass::{equal, transform};
//!
//! let names = map! { N1 => "one", N2 => "two" };
//! assert_eq!(*names.at_key(&N2), "two");
//! assert_eq!(names.find(N1), Just("one"));
//! let _: Nothing = names.find(N3);
//!
//! assert!(equal(&names, &map! { N2 => "two", N1 => "one" }));
//! assert!(!equal(&names, &map! { N2 => "deux", N1 => "one" }));
//!
//! let lengths = transform(names, |name: &str| name.len());
//! assert_eq!(lengths.values(), polytag::tuple!(3, 3));
//! ```
//!
//! ```rust,compile_fail
//! use polytag::datatype::{N1, N2};
//! use polytag::map;
//!
//! let names = map! { N1 => "one" };
//! let _ = names.at_key(&N2);
//! ```

use std::fmt;

use crate::dispatch::{
    Bool, Convert, False, Function, Make, Predicate, Tagged, TestOutput, True, builtin_tag,
};
use crate::typeclass::{
    AnyOf, AnyOfImpl, Comparable, Equal, EqualImpl, EqualOutput, FindIfImpl, FoldLeft,
    FoldLeftImpl, FoldRight, FoldRightImpl, Foldable, Functor, Logical, LogicalAnd, NativeFold,
    NativeSearch, Searchable, Transform, TransformImpl, TransformOutput,
};

use super::integral::NatEq;
use super::keyed::{AllKeysIn, FindKey, FirstKey, GetKey, HasKey, InsertStep, RemoveKey};
use super::optional::{Just, Nothing};
use super::pair::{FirstFn, Pair, SecondFn};
use super::set::{Insert, InsertAll};
use super::tuple::{Cons, DebugElements, HList, IntoTuple, Nil, TupleTag};

/// The tag of [`Map`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MapTag;

builtin_tag!(MapTag => [0 0 1 0 0 1 0 0]);

/// A map whose keys are compared at compile time.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Map<Entries> {
    entries: Entries,
}

impl<Entries: HList> Tagged for Map<Entries> {
    type Tag = MapTag;
}

/// Builds a map; when a key repeats, its first value is kept.
///
/// ```rust
/// use polytag::datatype::{N1, N2};
/// use polytag::map;
///
/// let ages = map! { N1 => 30u8, N2 => 'x', N1 => 99u8 };
/// assert_eq!(ages.len(), 2);
/// assert_eq!(*ages.at_key(&N1), 30);
/// ```
#[macro_export]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::datatype::Map::new()$(.insert($key, $value))*
    };
}

/// A key-value entry of a map.
pub trait Entry {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// Borrows the value.
    fn value(&self) -> &Self::Value;

    /// Moves the value out.
    fn into_value(self) -> Self::Value;
}

impl<K, V> Entry for Pair<K, V> {
    type Key = K;
    type Value = V;

    fn value(&self) -> &V {
        &self.second
    }

    fn into_value(self) -> V {
        self.second
    }
}

type Found<Entries, K> = <Entries as FindKey<K, FirstKey>>::Output;

type ValueAt<Entries, K> = <<Entries as GetKey<K, FirstKey>>::Output as Entry>::Value;

impl Map<Nil> {
    /// The empty map.
    pub const fn new() -> Self {
        Self { entries: Nil }
    }
}

impl<Entries: HList> Map<Entries> {
    /// The number of entries.
    pub fn len(&self) -> usize {
        Entries::LEN
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        Entries::LEN == 0
    }

    /// Borrows the entries, in insertion order.
    pub const fn as_tuple(&self) -> &Entries {
        &self.entries
    }

    /// The entries, in insertion order.
    pub fn into_tuple(self) -> Entries {
        self.entries
    }

    /// The map with `value` stored under `key`, unchanged if `key` is
    /// already present.
    pub fn insert<K, V>(self, key: K, value: V) -> <Self as Insert<Pair<K, V>>>::Output
    where
        Self: Insert<Pair<K, V>>,
    {
        self.insert_element(Pair { first: key, second: value })
    }

    /// The map without the entry for `key`.
    pub fn erase_key<K>(self, _key: K) -> Map<<Entries as RemoveKey<K, FirstKey>>::Output>
    where
        Entries: RemoveKey<K, FirstKey>,
    {
        Map {
            entries: self.entries.remove_key(),
        }
    }

    /// Whether `key` has an entry, decided at compile time.
    pub fn contains<K>(&self, _key: &K) -> <Entries as HasKey<K, FirstKey>>::Output
    where
        Entries: HasKey<K, FirstKey>,
    {
        Default::default()
    }

    /// The value stored under `key`, as `Just` or `Nothing`.
    pub fn find<K>(self, _key: K) -> TransformOutput<Found<Entries, K>, SecondFn>
    where
        Entries: FindKey<K, FirstKey>,
        <Entries as FindKey<K, FirstKey>>::Output: Transform<SecondFn>,
    {
        self.entries.find_key().transform_with(&mut SecondFn)
    }

    /// Borrows the value stored under `key`, which must be present.
    pub fn at_key<'a, K>(&'a self, _key: &K) -> &'a ValueAt<Entries, K>
    where
        Entries: GetKey<K, FirstKey>,
        <Entries as GetKey<K, FirstKey>>::Output: Entry + 'a,
        ValueAt<Entries, K>: 'a,
    {
        self.entries.get_key().value()
    }

    /// Moves out the value stored under `key`, which must be present.
    pub fn take_key<K>(self, _key: K) -> ValueAt<Entries, K>
    where
        Entries: GetKey<K, FirstKey>,
        <Entries as GetKey<K, FirstKey>>::Output: Entry,
    {
        self.entries.take_key().into_value()
    }

    /// The keys, in insertion order.
    pub fn keys(self) -> TransformOutput<Entries, FirstFn>
    where
        Entries: Transform<FirstFn>,
    {
        self.entries.transform_with(&mut FirstFn)
    }

    /// The values, in insertion order.
    pub fn values(self) -> TransformOutput<Entries, SecondFn>
    where
        Entries: Transform<SecondFn>,
    {
        self.entries.transform_with(&mut SecondFn)
    }
}

type KeyPresent<Entries, K> = <Entries as HasKey<K, FirstKey>>::Output;

impl<Entries, K, V> Insert<Pair<K, V>> for Map<Entries>
where
    Entries: HasKey<K, FirstKey>,
    KeyPresent<Entries, K>: InsertStep<Entries, Pair<K, V>>,
{
    type Output = Map<<KeyPresent<Entries, K> as InsertStep<Entries, Pair<K, V>>>::Output>;

    fn insert_element(self, entry: Pair<K, V>) -> Self::Output {
        Map {
            entries: <KeyPresent<Entries, K> as InsertStep<Entries, Pair<K, V>>>::insert_step(
                self.entries,
                entry,
            ),
        }
    }
}

impl<Entries: DebugElements> fmt::Debug for Map<Entries> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = formatter.debug_tuple("Map");
        self.entries.debug_elements(&mut builder);
        builder.finish()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<Entries: HList> Convert<TupleTag> for Map<Entries> {
    type Output = Entries;

    fn convert(self) -> Entries {
        self.entries
    }
}

impl Convert<MapTag> for Nil {
    type Output = Map<Nil>;

    fn convert(self) -> Map<Nil> {
        Map::new()
    }
}

impl<H, T> Convert<MapTag> for Cons<H, T>
where
    Map<Nil>: InsertAll<Self>,
{
    type Output = <Map<Nil> as InsertAll<Self>>::Output;

    fn convert(self) -> Self::Output {
        Map::new().insert_all(self)
    }
}

impl<Args> Make<Args> for MapTag
where
    Args: IntoTuple,
    Map<Nil>: InsertAll<Args::Output>,
{
    type Output = <Map<Nil> as InsertAll<Args::Output>>::Output;

    fn make(args: Args) -> Self::Output {
        Map::new().insert_all(args.into_tuple())
    }
}

// =============================================================================
// Comparable
// =============================================================================

/// Whether every entry of `Self` has an equal value under the same key in
/// `Ys`.
pub trait ValuesEqualIn<Ys> {
    /// The answer.
    type Output: Logical;

    /// Compares the values key by key.
    fn values_equal_in(&self, others: &Ys) -> Self::Output;
}

impl<Ys> ValuesEqualIn<Ys> for Nil {
    type Output = True;

    fn values_equal_in(&self, _: &Ys) -> True {
        True
    }
}

impl<K, V, T, Ys> ValuesEqualIn<Ys> for Cons<Pair<K, V>, T>
where
    Ys: GetKey<K, FirstKey>,
    Ys::Output: Entry,
    V: Equal<ValueAt<Ys, K>>,
    T: ValuesEqualIn<Ys>,
    EqualOutput<V, ValueAt<Ys, K>>: LogicalAnd<T::Output>,
{
    type Output = <EqualOutput<V, ValueAt<Ys, K>> as LogicalAnd<T::Output>>::Output;

    fn values_equal_in(&self, others: &Ys) -> Self::Output {
        let other = others.get_key().value();
        self.head
            .second
            .equal_to(other)
            .and_then(|| self.tail.values_equal_in(others))
    }
}

/// Compares values once the keys are known to match.
pub trait MapEqualStep<Xs, Ys> {
    /// The answer.
    type Output: Logical;

    /// Compares the entries of `left` and `right`.
    fn map_equal_step(left: &Xs, right: &Ys) -> Self::Output;
}

impl<Xs: ValuesEqualIn<Ys>, Ys> MapEqualStep<Xs, Ys> for True {
    type Output = Xs::Output;

    fn map_equal_step(left: &Xs, right: &Ys) -> Self::Output {
        left.values_equal_in(right)
    }
}

impl<Xs, Ys> MapEqualStep<Xs, Ys> for False {
    type Output = Self;

    fn map_equal_step(_: &Xs, _: &Ys) -> Self {
        Self
    }
}

type KeysMatch<Xs, Ys> = <<<Xs as HList>::Len as NatEq<<Ys as HList>::Len>>::Output as Bool>::And<
    <Xs as AllKeysIn<Ys, FirstKey>>::Output,
>;

impl Comparable for MapTag {}

impl<Xs, Ys> EqualImpl<Map<Xs>, Map<Ys>> for MapTag
where
    Xs: HList + AllKeysIn<Ys, FirstKey>,
    Ys: HList,
    Xs::Len: NatEq<Ys::Len>,
    KeysMatch<Xs, Ys>: MapEqualStep<Xs, Ys>,
{
    type Output = <KeysMatch<Xs, Ys> as MapEqualStep<Xs, Ys>>::Output;

    fn equal(left: &Map<Xs>, right: &Map<Ys>) -> Self::Output {
        <KeysMatch<Xs, Ys> as MapEqualStep<Xs, Ys>>::map_equal_step(&left.entries, &right.entries)
    }
}

// =============================================================================
// Functor and Foldable, over the values
// =============================================================================

/// Applies a function to the value of every entry.
pub trait MapValues<F> {
    /// The entries with transformed values.
    type Output: HList;

    /// Transforms the values, keeping the keys.
    fn map_values(self, function: &mut F) -> Self::Output;
}

impl<F> MapValues<F> for Nil {
    type Output = Self;

    fn map_values(self, _: &mut F) -> Self {
        self
    }
}

impl<K, V, T, F> MapValues<F> for Cons<Pair<K, V>, T>
where
    F: Function<(V,)>,
    T: MapValues<F>,
{
    type Output = Cons<Pair<K, F::Output>, T::Output>;

    fn map_values(self, function: &mut F) -> Self::Output {
        let Pair { first, second } = self.head;
        let head = Pair {
            first,
            second: function.apply((second,)),
        };
        Cons {
            head,
            tail: self.tail.map_values(function),
        }
    }
}

impl Functor for MapTag {}

impl<Entries: HList + MapValues<F>, F> TransformImpl<Map<Entries>, F> for MapTag {
    type Output = Map<Entries::Output>;

    fn transform(xs: Map<Entries>, function: &mut F) -> Self::Output {
        Map {
            entries: xs.entries.map_values(function),
        }
    }
}

impl Foldable for MapTag {
    type Mcd = NativeFold;
}

impl<Entries, S, F> FoldLeftImpl<Map<Entries>, S, F> for MapTag
where
    Entries: HList + Transform<SecondFn>,
    TransformOutput<Entries, SecondFn>: FoldLeft<S, F>,
{
    type Output = <TransformOutput<Entries, SecondFn> as FoldLeft<S, F>>::Output;

    fn fold_left(xs: Map<Entries>, state: S, function: &mut F) -> Self::Output {
        xs.values().fold_left_with(state, function)
    }
}

impl<Entries, S, F> FoldRightImpl<Map<Entries>, S, F> for MapTag
where
    Entries: HList + Transform<SecondFn>,
    TransformOutput<Entries, SecondFn>: FoldRight<S, F>,
{
    type Output = <TransformOutput<Entries, SecondFn> as FoldRight<S, F>>::Output;

    fn fold_right(xs: Map<Entries>, state: S, function: &mut F) -> Self::Output {
        xs.values().fold_right_with(state, function)
    }
}

// =============================================================================
// Searchable, over the keys
// =============================================================================

/// Finds the value stored under the first key satisfying a predicate.
pub trait FindValueIf<P> {
    /// `Just` of the value, or `Nothing`.
    type Output;

    /// Tests the keys in order.
    fn find_value_if(self, predicate: &mut P) -> Self::Output;
}

impl<P> FindValueIf<P> for Nil {
    type Output = Nothing;

    fn find_value_if(self, _: &mut P) -> Nothing {
        Nothing
    }
}

impl<K, V, T, P> FindValueIf<P> for Cons<Pair<K, V>, T>
where
    P: Predicate<K>,
    TestOutput<P, K>: FindValueStep<V, T, P>,
{
    type Output = <TestOutput<P, K> as FindValueStep<V, T, P>>::Output;

    fn find_value_if(self, predicate: &mut P) -> Self::Output {
        let Pair { first, second } = self.head;
        predicate
            .test(&first)
            .find_value_step(second, self.tail, predicate)
    }
}

/// Stops at or walks past one entry during [`FindValueIf`].
#[diagnostic::on_unimplemented(
    message = "searching a map needs a compile-time predicate on its keys",
    label = "the predicate answered with `{Self}`"
)]
pub trait FindValueStep<V, T, P> {
    /// `Just` of the value, or `Nothing`.
    type Output;

    /// Returns `Just(value)` if `self` is `True`, otherwise searches `rest`.
    fn find_value_step(self, value: V, rest: T, predicate: &mut P) -> Self::Output;
}

impl<V, T, P> FindValueStep<V, T, P> for True {
    type Output = Just<V>;

    fn find_value_step(self, value: V, _: T, _: &mut P) -> Just<V> {
        Just(value)
    }
}

impl<V, T: FindValueIf<P>, P> FindValueStep<V, T, P> for False {
    type Output = T::Output;

    fn find_value_step(self, _: V, rest: T, predicate: &mut P) -> T::Output {
        rest.find_value_if(predicate)
    }
}

impl Searchable for MapTag {
    type Mcd = NativeSearch;
}

impl<Entries: HList + FindValueIf<P>, P> FindIfImpl<Map<Entries>, P> for MapTag {
    type Output = Entries::Output;

    fn find_if(xs: Map<Entries>, predicate: &mut P) -> Self::Output {
        xs.entries.find_value_if(predicate)
    }
}

impl<Entries, P> AnyOfImpl<Map<Entries>, P> for MapTag
where
    Entries: HList + Transform<FirstFn>,
    TransformOutput<Entries, FirstFn>: AnyOf<P>,
{
    type Output = <TransformOutput<Entries, FirstFn> as AnyOf<P>>::Output;

    fn any_of(xs: Map<Entries>, predicate: &mut P) -> Self::Output {
        xs.keys().any_of_with(predicate)
    }
}
