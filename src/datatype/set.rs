//! Sets of compile-time distinct keys.
//!
//! A [`Set`] stores its elements in a tuple, in insertion order, with no
//! two elements equal. Whether two keys are equal must be decided by their
//! types (naturals, type-level booleans, unit-like structs with a derived
//! tag), so inserting a key that is already present is a no-op decided by
//! the compiler.
//!
//! Equality between sets ignores order: two sets are equal when they have
//! the same number of elements and every element of one is in the other.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, N2, N3};
//! use polytag::dispatch::{False, True};
//! use polytag::set;
//! use polytag::typeclass::equal;
//!
//! let numbers = set!(N1, N2);
//! let _: True = numbers.contains(&N2);
//!
//! let same = numbers.insert(N1);
//! assert_eq!(same.len(), 2);
//!
//! let grown = numbers.insert(N3);
//! let _: True = equal(&grown, &set!(N3, N2, N1));
//! let _: False = equal(&grown, &numbers);
//! let _: True = equal(&grown.erase_key(N3), &numbers);
//! ```

use std::fmt;

use crate::dispatch::{Bool, Convert, Make, Tagged, builtin_tag};
use crate::typeclass::{
    AnyOf, AnyOfImpl, Comparable, EqualImpl, FindIf, FindIfImpl, FoldLeft, FoldLeftImpl,
    FoldRight, FoldRightImpl, Foldable, NativeFold, NativeSearch, Searchable,
};

use super::integral::NatEq;
use super::keyed::{AllKeysIn, HasKey, InsertStep, RemoveKey, SelfKey};
use super::tuple::{Cons, DebugElements, HList, IntoTuple, Nil, TupleTag};

/// The tag of [`Set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SetTag;

builtin_tag!(SetTag => [0 0 1 0 0 0 1 1]);

/// A set of keys compared at compile time.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Set<Xs> {
    elements: Xs,
}

impl<Xs: HList> Tagged for Set<Xs> {
    type Tag = SetTag;
}

/// Builds a set, dropping repeated keys.
///
/// ```rust
/// use polytag::datatype::{N1, N2};
/// use polytag::set;
///
/// assert_eq!(set!(N1, N2, N1).len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    ($($element:expr),* $(,)?) => {
        $crate::datatype::Set::new()$(.insert($element))*
    };
}

impl Set<Nil> {
    /// The empty set.
    pub const fn new() -> Self {
        Self { elements: Nil }
    }
}

impl<Xs: HList> Set<Xs> {
    /// The number of elements.
    pub fn len(&self) -> usize {
        Xs::LEN
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        Xs::LEN == 0
    }

    /// Borrows the elements, in insertion order.
    pub const fn as_tuple(&self) -> &Xs {
        &self.elements
    }

    /// The elements, in insertion order.
    pub fn into_tuple(self) -> Xs {
        self.elements
    }

    /// Whether `key` is an element, decided at compile time.
    pub fn contains<K>(&self, _key: &K) -> <Xs as HasKey<K, SelfKey>>::Output
    where
        Xs: HasKey<K, SelfKey>,
    {
        Default::default()
    }

    /// The set with `key` added, unchanged if `key` is already present.
    pub fn insert<K>(self, key: K) -> <Self as Insert<K>>::Output
    where
        Self: Insert<K>,
    {
        self.insert_element(key)
    }

    /// The set without `key`, unchanged if `key` is absent.
    pub fn erase_key<K>(self, _key: K) -> Set<<Xs as RemoveKey<K, SelfKey>>::Output>
    where
        Xs: RemoveKey<K, SelfKey>,
    {
        Set {
            elements: self.elements.remove_key(),
        }
    }
}

/// Insertion of one element into a keyed container.
pub trait Insert<X> {
    /// The container after insertion.
    type Output;

    /// Inserts `element` unless its key is already present.
    fn insert_element(self, element: X) -> Self::Output;
}

type Inserted<Xs, K> = <<Xs as HasKey<K, SelfKey>>::Output as InsertStep<Xs, K>>::Output;

impl<Xs, K> Insert<K> for Set<Xs>
where
    Xs: HasKey<K, SelfKey>,
    <Xs as HasKey<K, SelfKey>>::Output: InsertStep<Xs, K>,
{
    type Output = Set<Inserted<Xs, K>>;

    fn insert_element(self, key: K) -> Self::Output {
        Set {
            elements: <<Xs as HasKey<K, SelfKey>>::Output as InsertStep<Xs, K>>::insert_step(
                self.elements,
                key,
            ),
        }
    }
}

/// Inserts every element of a tuple, left to right.
pub trait InsertAll<Xs> {
    /// The container after every insertion.
    type Output;

    /// Inserts the elements of `xs` in order.
    fn insert_all(self, xs: Xs) -> Self::Output;
}

impl<C> InsertAll<Nil> for C {
    type Output = C;

    fn insert_all(self, _: Nil) -> C {
        self
    }
}

impl<C, H, T> InsertAll<Cons<H, T>> for C
where
    C: Insert<H>,
    C::Output: InsertAll<T>,
{
    type Output = <C::Output as InsertAll<T>>::Output;

    fn insert_all(self, xs: Cons<H, T>) -> Self::Output {
        self.insert_element(xs.head).insert_all(xs.tail)
    }
}

impl<Xs: DebugElements> fmt::Debug for Set<Xs> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = formatter.debug_tuple("Set");
        self.elements.debug_elements(&mut builder);
        builder.finish()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<Xs: HList> Convert<TupleTag> for Set<Xs> {
    type Output = Xs;

    fn convert(self) -> Xs {
        self.elements
    }
}

impl Convert<SetTag> for Nil {
    type Output = Set<Nil>;

    fn convert(self) -> Set<Nil> {
        Set::new()
    }
}

impl<H, T> Convert<SetTag> for Cons<H, T>
where
    Set<Nil>: InsertAll<Self>,
{
    type Output = <Set<Nil> as InsertAll<Self>>::Output;

    fn convert(self) -> Self::Output {
        Set::new().insert_all(self)
    }
}

impl<Xs: HList> Convert<SetTag> for Set<Xs> {
    type Output = Self;

    fn convert(self) -> Self {
        self
    }
}

impl<Args> Make<Args> for SetTag
where
    Args: IntoTuple,
    Set<Nil>: InsertAll<Args::Output>,
{
    type Output = <Set<Nil> as InsertAll<Args::Output>>::Output;

    fn make(args: Args) -> Self::Output {
        Set::new().insert_all(args.into_tuple())
    }
}

// =============================================================================
// Comparable
// =============================================================================

impl Comparable for SetTag {}

type SameLength<Xs, Ys> = <<Xs as HList>::Len as NatEq<<Ys as HList>::Len>>::Output;

impl<Xs, Ys> EqualImpl<Set<Xs>, Set<Ys>> for SetTag
where
    Xs: HList + AllKeysIn<Ys, SelfKey>,
    Ys: HList,
    Xs::Len: NatEq<Ys::Len>,
{
    type Output = <SameLength<Xs, Ys> as Bool>::And<<Xs as AllKeysIn<Ys, SelfKey>>::Output>;

    fn equal(_: &Set<Xs>, _: &Set<Ys>) -> Self::Output {
        Default::default()
    }
}

// =============================================================================
// Foldable and Searchable
// =============================================================================

impl Foldable for SetTag {
    type Mcd = NativeFold;
}

impl<Xs: HList + FoldLeft<S, F>, S, F> FoldLeftImpl<Set<Xs>, S, F> for SetTag {
    type Output = Xs::Output;

    fn fold_left(xs: Set<Xs>, state: S, function: &mut F) -> Self::Output {
        xs.elements.fold_left_with(state, function)
    }
}

impl<Xs: HList + FoldRight<S, F>, S, F> FoldRightImpl<Set<Xs>, S, F> for SetTag {
    type Output = Xs::Output;

    fn fold_right(xs: Set<Xs>, state: S, function: &mut F) -> Self::Output {
        xs.elements.fold_right_with(state, function)
    }
}

impl Searchable for SetTag {
    type Mcd = NativeSearch;
}

impl<Xs: HList + FindIf<P>, P> FindIfImpl<Set<Xs>, P> for SetTag {
    type Output = Xs::Output;

    fn find_if(xs: Set<Xs>, predicate: &mut P) -> Self::Output {
        xs.elements.find_if_with(predicate)
    }
}

impl<Xs: HList + AnyOf<P>, P> AnyOfImpl<Set<Xs>, P> for SetTag {
    type Output = Xs::Output;

    fn any_of(xs: Set<Xs>, predicate: &mut P) -> Self::Output {
        xs.elements.any_of_with(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{Just, N0, N1, N2, N3, Nothing};
    use crate::dispatch::{False, True, make, to};
    use crate::typeclass::{contains, equal, find, length};
    use crate::{Tuple, tuple};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Tuple![N1, N2] as HasKey<N1, SelfKey>>::Output, True);
    assert_type_eq_all!(Inserted<Tuple![N1, N2], N1>, Tuple![N1, N2]);
    assert_type_eq_all!(Inserted<Tuple![N1, N2], N3>, Tuple![N1, N2, N3]);

    #[rstest]
    fn insertion_keeps_the_first_occurrence() {
        let keys = set!(N2, N0, N2, N1, N0);
        assert_eq!(keys.into_tuple(), tuple!(N2, N0, N1));
        assert!(set!().is_empty());
    }

    #[rstest]
    fn equality_ignores_order() {
        let _: True = equal(&set!(N1, N2, N3), &set!(N3, N1, N2));
        let _: False = equal(&set!(N1, N2), &set!(N1, N2, N3));
        let _: False = equal(&set!(N1, N2, N3), &set!(N1, N2));
        let _: True = equal(&set!(), &set!());
    }

    #[rstest]
    fn searching_a_set() {
        let keys = set!(N1, N3);
        let _: True = contains(keys, N3);
        let _: False = keys.contains(&N2);
        let _: Just<N1> = find(keys, N1);
        let _: Nothing = find(keys, N0);
        assert_eq!(length(keys), 2);
    }

    #[rstest]
    fn erasing_missing_keys_changes_nothing() {
        let keys = set!(N1, N2);
        let _: True = equal(&keys.erase_key(N3), &keys);
        assert_eq!(keys.erase_key(N1).into_tuple(), tuple!(N2));
    }

    #[rstest]
    fn conversions_deduplicate() {
        let from_tuple = to::<SetTag, _>(tuple!(N1, N1, N2));
        assert_eq!(from_tuple.len(), 2);
        assert_eq!(to::<TupleTag, _>(from_tuple), tuple!(N1, N2));
        let _: True = equal(&make::<SetTag, _>((N2, N1)), &from_tuple);
        assert_eq!(format!("{:?}", set!(N1, N2)), "Set(S(Z), S(S(Z)))");
    }
}
