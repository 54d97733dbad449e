//! Key lookup in tuples, shared by [`Set`](super::Set) and
//! [`Map`](super::Map).
//!
//! Both containers store their elements in a tuple and decide membership
//! from types alone: two keys are the same key when `equal` on them is
//! [`True`]. A [`KeyProjection`] tells the lookup what the key of an
//! element is: the element itself in a set ([`SelfKey`]), the first
//! component of a [`Pair`] in a map ([`FirstKey`]).

use crate::dispatch::{Bool, False, Or, True};
use crate::typeclass::{Equal, EqualOutput};

use super::optional::{Just, Nothing};
use super::pair::Pair;
use super::tuple::{Concat, Cons, HList, Nil};

/// Names the key of an element.
pub trait KeyProjection<X> {
    /// The key type.
    type Key;
}

/// Elements are their own keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfKey;

impl<X> KeyProjection<X> for SelfKey {
    type Key = X;
}

/// The key of a pair is its first component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstKey;

impl<K, V> KeyProjection<Pair<K, V>> for FirstKey {
    type Key = K;
}

/// Whether a tuple holds an element whose key equals `K`.
#[diagnostic::on_unimplemented(
    message = "cannot decide at compile time whether `{Self}` has the key `{K}`",
    note = "keys of sets and maps must compare with a `True` or `False` result"
)]
pub trait HasKey<K, By> {
    /// The answer.
    type Output: Bool;
}

impl<K, By> HasKey<K, By> for Nil {
    type Output = False;
}

impl<H, T, K, By> HasKey<K, By> for Cons<H, T>
where
    By: KeyProjection<H>,
    By::Key: Equal<K>,
    EqualOutput<By::Key, K>: Bool,
    T: HasKey<K, By>,
{
    type Output = Or<EqualOutput<By::Key, K>, T::Output>;
}

/// Whether every key of `Self` is a key of `Ys`.
pub trait AllKeysIn<Ys, By> {
    /// The answer.
    type Output: Bool;
}

impl<Ys, By> AllKeysIn<Ys, By> for Nil {
    type Output = True;
}

impl<H, T, Ys, By> AllKeysIn<Ys, By> for Cons<H, T>
where
    By: KeyProjection<H>,
    Ys: HasKey<By::Key, By>,
    T: AllKeysIn<Ys, By>,
{
    type Output = <Ys::Output as Bool>::And<T::Output>;
}

/// Appends an element unless its key is already present.
pub trait InsertStep<Xs, X> {
    /// The resulting tuple.
    type Output: HList;

    /// Keeps `xs` as is or appends `element`.
    fn insert_step(xs: Xs, element: X) -> Self::Output;
}

impl<Xs: HList, X> InsertStep<Xs, X> for True {
    type Output = Xs;

    fn insert_step(xs: Xs, _: X) -> Xs {
        xs
    }
}

impl<Xs, X> InsertStep<Xs, X> for False
where
    Xs: Concat<Cons<X, Nil>>,
{
    type Output = Xs::Output;

    fn insert_step(xs: Xs, element: X) -> Self::Output {
        xs.concat_with(Cons {
            head: element,
            tail: Nil,
        })
    }
}

/// `Self` with the first element whose key equals `K` removed.
pub trait RemoveKey<K, By> {
    /// The remaining elements.
    type Output: HList;

    /// Removes the element.
    fn remove_key(self) -> Self::Output;
}

impl<K, By> RemoveKey<K, By> for Nil {
    type Output = Self;

    fn remove_key(self) -> Self {
        self
    }
}

impl<H, T, K, By> RemoveKey<K, By> for Cons<H, T>
where
    By: KeyProjection<H>,
    By::Key: Equal<K>,
    EqualOutput<By::Key, K>: RemoveStep<H, T, K, By>,
{
    type Output = <EqualOutput<By::Key, K> as RemoveStep<H, T, K, By>>::Output;

    fn remove_key(self) -> Self::Output {
        <EqualOutput<By::Key, K> as RemoveStep<H, T, K, By>>::remove_step(self.head, self.tail)
    }
}

/// Drops or keeps one element during [`RemoveKey`].
pub trait RemoveStep<H, T, K, By> {
    /// The remaining elements.
    type Output: HList;

    /// Drops `head` if `Self` is `True`, otherwise keeps looking in `tail`.
    fn remove_step(head: H, tail: T) -> Self::Output;
}

impl<H, T: HList, K, By> RemoveStep<H, T, K, By> for True {
    type Output = T;

    fn remove_step(_: H, tail: T) -> T {
        tail
    }
}

impl<H, T: RemoveKey<K, By>, K, By> RemoveStep<H, T, K, By> for False {
    type Output = Cons<H, T::Output>;

    fn remove_step(head: H, tail: T) -> Self::Output {
        Cons {
            head,
            tail: tail.remove_key(),
        }
    }
}

/// Borrows the element whose key equals `K`.
#[diagnostic::on_unimplemented(
    message = "no element with key `{K}` in `{Self}`",
    label = "key not found at compile time",
    note = "use `find` to get `Nothing` for a missing key instead of an error"
)]
pub trait GetKey<K, By> {
    /// The element found.
    type Output;

    /// Borrows the element.
    fn get_key(&self) -> &Self::Output;

    /// Moves the element out.
    fn take_key(self) -> Self::Output;
}

impl<H, T, K, By> GetKey<K, By> for Cons<H, T>
where
    By: KeyProjection<H>,
    By::Key: Equal<K>,
    EqualOutput<By::Key, K>: GetStep<H, T, K, By>,
{
    type Output = <EqualOutput<By::Key, K> as GetStep<H, T, K, By>>::Output;

    fn get_key(&self) -> &Self::Output {
        <EqualOutput<By::Key, K> as GetStep<H, T, K, By>>::get_step(&self.head, &self.tail)
    }

    fn take_key(self) -> Self::Output {
        <EqualOutput<By::Key, K> as GetStep<H, T, K, By>>::take_step(self.head, self.tail)
    }
}

/// Stops at or walks past one element during [`GetKey`].
pub trait GetStep<H, T, K, By> {
    /// The element found.
    type Output;

    /// Borrows `head` if `Self` is `True`, otherwise looks in `tail`.
    fn get_step<'a>(head: &'a H, tail: &'a T) -> &'a Self::Output;

    /// Moves `head` out if `Self` is `True`, otherwise looks in `tail`.
    fn take_step(head: H, tail: T) -> Self::Output;
}

impl<H, T, K, By> GetStep<H, T, K, By> for True {
    type Output = H;

    fn get_step<'a>(head: &'a H, _: &'a T) -> &'a H {
        head
    }

    fn take_step(head: H, _: T) -> H {
        head
    }
}

impl<H, T: GetKey<K, By>, K, By> GetStep<H, T, K, By> for False {
    type Output = T::Output;

    fn get_step<'a>(_: &'a H, tail: &'a T) -> &'a T::Output {
        tail.get_key()
    }

    fn take_step(_: H, tail: T) -> T::Output {
        tail.take_key()
    }
}

/// Moves out the element whose key equals `K`, as `Just` or `Nothing`.
pub trait FindKey<K, By> {
    /// `Just` of the element, or `Nothing`.
    type Output;

    /// Looks the key up.
    fn find_key(self) -> Self::Output;
}

impl<K, By> FindKey<K, By> for Nil {
    type Output = Nothing;

    fn find_key(self) -> Nothing {
        Nothing
    }
}

impl<H, T, K, By> FindKey<K, By> for Cons<H, T>
where
    By: KeyProjection<H>,
    By::Key: Equal<K>,
    EqualOutput<By::Key, K>: FindKeyStep<H, T, K, By>,
{
    type Output = <EqualOutput<By::Key, K> as FindKeyStep<H, T, K, By>>::Output;

    fn find_key(self) -> Self::Output {
        <EqualOutput<By::Key, K> as FindKeyStep<H, T, K, By>>::find_key_step(self.head, self.tail)
    }
}

/// Stops at or walks past one element during [`FindKey`].
pub trait FindKeyStep<H, T, K, By> {
    /// `Just` of the element, or `Nothing`.
    type Output;

    /// Returns `Just(head)` if `Self` is `True`, otherwise looks in `tail`.
    fn find_key_step(head: H, tail: T) -> Self::Output;
}

impl<H, T, K, By> FindKeyStep<H, T, K, By> for True {
    type Output = Just<H>;

    fn find_key_step(head: H, _: T) -> Just<H> {
        Just(head)
    }
}

impl<H, T: FindKey<K, By>, K, By> FindKeyStep<H, T, K, By> for False {
    type Output = T::Output;

    fn find_key_step(_: H, tail: T) -> T::Output {
        tail.find_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{Just, N1, N2, N3, pair};
    use crate::{Tuple, tuple};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    type Keys = Tuple![N1, N2, char];

    assert_type_eq_all!(<Keys as HasKey<N2, SelfKey>>::Output, True);
    assert_type_eq_all!(<Keys as HasKey<N3, SelfKey>>::Output, False);
    assert_type_eq_all!(<Tuple![N2, N1] as AllKeysIn<Keys, SelfKey>>::Output, True);
    assert_type_eq_all!(<Keys as RemoveKey<N1, SelfKey>>::Output, Tuple![N2, char]);

    #[rstest]
    fn pairs_are_looked_up_by_first_component() {
        let entries = tuple!(pair(N1, "one"), pair(N2, "two"));
        let found: &Pair<N2, &str> = GetKey::<N2, FirstKey>::get_key(&entries);
        assert_eq!(found.second, "two");
        let taken = FindKey::<N1, FirstKey>::find_key(entries);
        assert_eq!(taken, Just(pair(N1, "one")));
    }
}
