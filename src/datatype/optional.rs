//! Optional values whose presence is known at compile time.
//!
//! [`Just<T>`] holds a value and [`Nothing`] holds none. Both share
//! [`OptionalTag`], but they are different types, so whether a value is
//! present is decided by the compiler: `from_just(Nothing)` does not
//! compile, and `equal(&Just(1), &Nothing)` is [`False`] without looking at
//! the value.
//!
//! Searching a heterogeneous structure produces an optional, and the
//! functions here consume one:
//!
//! - [`maybe`]: applies a function to the value, or returns a default
//! - [`from_maybe`]: the value, or a default
//! - [`from_just`]: the value, rejected at compile time on `Nothing`
//! - [`only_when`]: `Just(f(x))` if a predicate holds, `Nothing` otherwise
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{Just, N2, N3, Nothing, from_just, from_maybe, is_just, maybe};
//! use polytag::dispatch::{False, True};
//! use polytag::tuple;
//! use polytag::typeclass::find;
//!
//! let found = find(tuple!(N3, 'x'), N3);
//! let _: True = is_just(&found);
//! assert_eq!(from_just(found), N3);
//!
//! let missing = find(tuple!(N3, 'x'), N2);
//! let _: False = is_just(&missing);
//! assert_eq!(from_maybe(0usize, missing), 0);
//!
//! assert_eq!(maybe("none", |_: i32| "some", Just(5)), "some");
//! assert_eq!(maybe("none", |_: i32| "some", Nothing), "none");
//! ```
//!
//! ```rust,compile_fail
//! use polytag::datatype::{Nothing, from_just};
//!
//! let _ = from_just(Nothing);
//! ```

use crate::dispatch::{False, Function, Predicate, Tagged, TestOutput, True, builtin_tag};
use crate::typeclass::{
    AnyOfImpl, Applicative, Comparable, ConcatImpl, EmptyImpl, Equal, EqualImpl, EqualOutput,
    FindIfImpl, FlattenImpl, FoldLeftImpl, FoldRightImpl, Foldable, Functor, Less, LessImpl,
    LessOutput, LiftImpl, Logical, Monad, MonadPlus, NativeFold, NativeSearch, Orderable,
    Searchable, TransformImpl,
};

// =============================================================================
// Representation
// =============================================================================

/// The tag of [`Just`] and [`Nothing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionalTag;

builtin_tag!(OptionalTag => [0 0 1 0 0 1 1 0]);

/// An optional value that is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Just<T>(pub T);

/// An optional value that is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nothing;

impl<T> Tagged for Just<T> {
    type Tag = OptionalTag;
}

impl Tagged for Nothing {
    type Tag = OptionalTag;
}

/// Wraps `value` in [`Just`].
pub const fn just<T>(value: T) -> Just<T> {
    Just(value)
}

impl<T> From<Just<T>> for Option<T> {
    fn from(Just(value): Just<T>) -> Self {
        Some(value)
    }
}

impl Nothing {
    /// The empty `Option` of any element type.
    pub const fn into_option<T>(self) -> Option<T> {
        None
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Compile-time presence of an optional value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an optional value",
    note = "expected `Just<T>` or `Nothing`"
)]
pub trait Optional: Tagged<Tag = OptionalTag> {
    /// `True` for [`Just`], `False` for [`Nothing`].
    type IsJust: crate::dispatch::Bool;
}

impl<T> Optional for Just<T> {
    type IsJust = True;
}

impl Optional for Nothing {
    type IsJust = False;
}

/// Whether `optional` holds a value.
pub fn is_just<O: Optional>(_: &O) -> O::IsJust {
    Default::default()
}

/// Whether `optional` holds no value.
pub fn is_nothing<O: Optional>(_: &O) -> <O::IsJust as crate::dispatch::Bool>::Not {
    Default::default()
}

/// Extraction of the value of a [`Just`].
#[diagnostic::on_unimplemented(
    message = "`from_just` called on `{Self}`",
    label = "this optional is statically empty",
    note = "use `from_maybe` or `maybe` to supply a value for `Nothing`"
)]
pub trait FromJust {
    /// The held value.
    type Output;

    /// Unwraps the value.
    fn into_value(self) -> Self::Output;
}

impl<T> FromJust for Just<T> {
    type Output = T;

    fn into_value(self) -> T {
        self.0
    }
}

/// The value held by `optional`, which must be a [`Just`].
pub fn from_just<O: FromJust>(optional: O) -> O::Output {
    optional.into_value()
}

/// Extraction with a fallback for [`Nothing`].
pub trait FromMaybe<D> {
    /// The held value or the default.
    type Output;

    /// Unwraps the value or returns `default`.
    fn value_or(self, default: D) -> Self::Output;
}

impl<T, D> FromMaybe<D> for Just<T> {
    type Output = T;

    fn value_or(self, _: D) -> T {
        self.0
    }
}

impl<D> FromMaybe<D> for Nothing {
    type Output = D;

    fn value_or(self, default: D) -> D {
        default
    }
}

/// The value held by `optional`, or `default` if there is none.
pub fn from_maybe<D, O: FromMaybe<D>>(default: D, optional: O) -> O::Output {
    optional.value_or(default)
}

/// Case analysis on an optional value.
pub trait Maybe<D, F> {
    /// The result of either case.
    type Output;

    /// Applies `function` to the held value, or returns `default`.
    fn maybe_with(self, default: D, function: F) -> Self::Output;
}

impl<T, D, F> Maybe<D, F> for Just<T>
where
    F: Function<(T,)>,
{
    type Output = F::Output;

    fn maybe_with(self, _: D, mut function: F) -> Self::Output {
        function.apply((self.0,))
    }
}

impl<D, F> Maybe<D, F> for Nothing {
    type Output = D;

    fn maybe_with(self, default: D, _: F) -> D {
        default
    }
}

/// `function(x)` for `Just(x)`, `default` for `Nothing`.
pub fn maybe<D, F, O>(default: D, function: F, optional: O) -> O::Output
where
    O: Maybe<D, F>,
{
    optional.maybe_with(default, function)
}

/// Wraps a value or discards it, dispatched on a [`Logical`].
///
/// A runtime answer produces an `Option`, a type-level one [`Just`] or
/// [`Nothing`].
pub trait KeepIf<X>: Logical {
    /// The optional value.
    type Output;

    /// Wraps `value` if `self` holds.
    fn keep(self, value: X) -> Self::Output;
}

impl<X> KeepIf<X> for True {
    type Output = Just<X>;

    fn keep(self, value: X) -> Just<X> {
        Just(value)
    }
}

impl<X> KeepIf<X> for False {
    type Output = Nothing;

    fn keep(self, _: X) -> Nothing {
        Nothing
    }
}

impl<X> KeepIf<X> for bool {
    type Output = Option<X>;

    fn keep(self, value: X) -> Option<X> {
        self.then_some(value)
    }
}

/// `Just(function(value))` if `predicate` holds for `value`, `Nothing`
/// otherwise.
///
/// `function` is only called when the predicate holds.
pub fn only_when<P, F, X>(
    mut predicate: P,
    mut function: F,
    value: X,
) -> <TestOutput<P, X> as OnlyWhen<X, F>>::Output
where
    P: Predicate<X>,
    TestOutput<P, X>: OnlyWhen<X, F>,
{
    predicate.test(&value).only_when(value, &mut function)
}

/// The lazy half of [`only_when`], dispatched on the predicate's answer.
pub trait OnlyWhen<X, F>: Logical {
    /// The optional result.
    type Output;

    /// Applies `function` only if `self` holds.
    fn only_when(self, value: X, function: &mut F) -> Self::Output;
}

impl<X, F: Function<(X,)>> OnlyWhen<X, F> for True {
    type Output = Just<F::Output>;

    fn only_when(self, value: X, function: &mut F) -> Self::Output {
        Just(function.apply((value,)))
    }
}

impl<X, F> OnlyWhen<X, F> for False {
    type Output = Nothing;

    fn only_when(self, _: X, _: &mut F) -> Nothing {
        Nothing
    }
}

impl<X, F: Function<(X,)>> OnlyWhen<X, F> for bool {
    type Output = Option<F::Output>;

    fn only_when(self, value: X, function: &mut F) -> Self::Output {
        self.then(|| function.apply((value,)))
    }
}

// =============================================================================
// Comparable and Orderable
// =============================================================================

impl Comparable for OptionalTag {}

impl<A: Equal<B>, B> EqualImpl<Just<A>, Just<B>> for OptionalTag {
    type Output = EqualOutput<A, B>;

    fn equal(left: &Just<A>, right: &Just<B>) -> Self::Output {
        left.0.equal_to(&right.0)
    }
}

impl<A> EqualImpl<Just<A>, Nothing> for OptionalTag {
    type Output = False;

    fn equal(_: &Just<A>, _: &Nothing) -> False {
        False
    }
}

impl<B> EqualImpl<Nothing, Just<B>> for OptionalTag {
    type Output = False;

    fn equal(_: &Nothing, _: &Just<B>) -> False {
        False
    }
}

impl EqualImpl<Nothing, Nothing> for OptionalTag {
    type Output = True;

    fn equal(_: &Nothing, _: &Nothing) -> True {
        True
    }
}

impl Orderable for OptionalTag {}

impl<A: Less<B>, B> LessImpl<Just<A>, Just<B>> for OptionalTag {
    type Output = LessOutput<A, B>;

    fn less(left: &Just<A>, right: &Just<B>) -> Self::Output {
        left.0.less_than(&right.0)
    }
}

impl<A> LessImpl<Just<A>, Nothing> for OptionalTag {
    type Output = False;

    fn less(_: &Just<A>, _: &Nothing) -> False {
        False
    }
}

impl<B> LessImpl<Nothing, Just<B>> for OptionalTag {
    type Output = True;

    fn less(_: &Nothing, _: &Just<B>) -> True {
        True
    }
}

impl LessImpl<Nothing, Nothing> for OptionalTag {
    type Output = False;

    fn less(_: &Nothing, _: &Nothing) -> False {
        False
    }
}

// =============================================================================
// Functor, Applicative, Monad
// =============================================================================

impl Functor for OptionalTag {}

impl<X, F: Function<(X,)>> TransformImpl<Just<X>, F> for OptionalTag {
    type Output = Just<F::Output>;

    fn transform(xs: Just<X>, function: &mut F) -> Self::Output {
        Just(function.apply((xs.0,)))
    }
}

impl<F> TransformImpl<Nothing, F> for OptionalTag {
    type Output = Nothing;

    fn transform(xs: Nothing, _: &mut F) -> Nothing {
        xs
    }
}

impl Applicative for OptionalTag {}

impl<X> LiftImpl<X> for OptionalTag {
    type Output = Just<X>;

    fn lift(value: X) -> Just<X> {
        Just(value)
    }
}

impl Monad for OptionalTag {}

impl<Inner: Optional> FlattenImpl<Just<Inner>> for OptionalTag {
    type Output = Inner;

    fn flatten(xss: Just<Inner>) -> Inner {
        xss.0
    }
}

impl FlattenImpl<Nothing> for OptionalTag {
    type Output = Nothing;

    fn flatten(xss: Nothing) -> Nothing {
        xss
    }
}

impl MonadPlus for OptionalTag {}

impl EmptyImpl for OptionalTag {
    type Output = Nothing;

    fn empty() -> Nothing {
        Nothing
    }
}

impl<X, Ys: Optional> ConcatImpl<Just<X>, Ys> for OptionalTag {
    type Output = Just<X>;

    fn concat(xs: Just<X>, _: Ys) -> Just<X> {
        xs
    }
}

impl<Ys: Optional> ConcatImpl<Nothing, Ys> for OptionalTag {
    type Output = Ys;

    fn concat(_: Nothing, ys: Ys) -> Ys {
        ys
    }
}

// =============================================================================
// Foldable and Searchable
// =============================================================================

impl Foldable for OptionalTag {
    type Mcd = NativeFold;
}

impl<X, S, F: Function<(S, X)>> FoldLeftImpl<Just<X>, S, F> for OptionalTag {
    type Output = F::Output;

    fn fold_left(xs: Just<X>, state: S, function: &mut F) -> Self::Output {
        function.apply((state, xs.0))
    }
}

impl<S, F> FoldLeftImpl<Nothing, S, F> for OptionalTag {
    type Output = S;

    fn fold_left(_: Nothing, state: S, _: &mut F) -> S {
        state
    }
}

impl<X, S, F: Function<(X, S)>> FoldRightImpl<Just<X>, S, F> for OptionalTag {
    type Output = F::Output;

    fn fold_right(xs: Just<X>, state: S, function: &mut F) -> Self::Output {
        function.apply((xs.0, state))
    }
}

impl<S, F> FoldRightImpl<Nothing, S, F> for OptionalTag {
    type Output = S;

    fn fold_right(_: Nothing, state: S, _: &mut F) -> S {
        state
    }
}

impl Searchable for OptionalTag {
    type Mcd = NativeSearch;
}

impl<X, P> FindIfImpl<Just<X>, P> for OptionalTag
where
    P: Predicate<X>,
    TestOutput<P, X>: KeepIf<X>,
{
    type Output = <TestOutput<P, X> as KeepIf<X>>::Output;

    fn find_if(xs: Just<X>, predicate: &mut P) -> Self::Output {
        predicate.test(&xs.0).keep(xs.0)
    }
}

impl<P> FindIfImpl<Nothing, P> for OptionalTag {
    type Output = Nothing;

    fn find_if(_: Nothing, _: &mut P) -> Nothing {
        Nothing
    }
}

impl<X, P: Predicate<X>> AnyOfImpl<Just<X>, P> for OptionalTag {
    type Output = P::Output;

    fn any_of(xs: Just<X>, predicate: &mut P) -> P::Output {
        predicate.test(&xs.0)
    }
}

impl<P> AnyOfImpl<Nothing, P> for OptionalTag {
    type Output = False;

    fn any_of(_: Nothing, _: &mut P) -> False {
        False
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Just<T> {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_some(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Nothing {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        serializer.serialize_none()
    }
}
