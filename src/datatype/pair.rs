//! Pairs.
//!
//! [`Pair`] is the element type of [`Map`](super::Map) and a small product
//! type in its own right. Pairs compare componentwise and order
//! lexicographically, first component first.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, first, pair, second};
//! use polytag::typeclass::{equal, less};
//!
//! let entry = pair(N1, "one");
//! assert_eq!(first(entry), N1);
//! assert_eq!(second(entry), "one");
//!
//! assert!(equal(&pair(1i32, 'a'), &pair(1i32, 'a')));
//! assert!(less(&pair(1i32, 'z'), &pair(2i32, 'a')));
//! ```

use crate::dispatch::{Function, Make, Tagged, builtin_tag};
use crate::typeclass::{
    AndOutput, Comparable, Equal, EqualImpl, EqualOutput, Less, LessImpl, LessOutput, LogicalAnd,
    LogicalNot, LogicalOr, Orderable,
};

/// The tag of [`Pair`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairTag;

builtin_tag!(PairTag => [0 0 1 0 1 0 0 0]);

/// Two values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pair<A, B> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
}

impl<A, B> Tagged for Pair<A, B> {
    type Tag = PairTag;
}

/// Builds a pair.
pub const fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair { first, second }
}

/// The first component of `pair`.
pub fn first<A, B>(pair: Pair<A, B>) -> A {
    pair.first
}

/// The second component of `pair`.
pub fn second<A, B>(pair: Pair<A, B>) -> B {
    pair.second
}

/// [`first`] as a function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstFn;

impl<A, B> Function<(Pair<A, B>,)> for FirstFn {
    type Output = A;

    fn apply(&mut self, (pair,): (Pair<A, B>,)) -> A {
        pair.first
    }
}

/// [`second`] as a function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondFn;

impl<A, B> Function<(Pair<A, B>,)> for SecondFn {
    type Output = B;

    fn apply(&mut self, (pair,): (Pair<A, B>,)) -> B {
        pair.second
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A, B> Make<(A, B)> for PairTag {
    type Output = Pair<A, B>;

    fn make((first, second): (A, B)) -> Self::Output {
        Pair { first, second }
    }
}

impl Comparable for PairTag {}

impl<A1, B1, A2, B2> EqualImpl<Pair<A1, B1>, Pair<A2, B2>> for PairTag
where
    A1: Equal<A2>,
    B1: Equal<B2>,
    EqualOutput<A1, A2>: LogicalAnd<EqualOutput<B1, B2>>,
{
    type Output = AndOutput<EqualOutput<A1, A2>, EqualOutput<B1, B2>>;

    fn equal(left: &Pair<A1, B1>, right: &Pair<A2, B2>) -> Self::Output {
        left.first
            .equal_to(&right.first)
            .and_then(|| left.second.equal_to(&right.second))
    }
}

impl Orderable for PairTag {}

type NotGreater<A1, A2> = <LessOutput<A2, A1> as LogicalNot>::Output;

impl<A1, B1, A2, B2> LessImpl<Pair<A1, B1>, Pair<A2, B2>> for PairTag
where
    A1: Less<A2>,
    A2: Less<A1>,
    B1: Less<B2>,
    LessOutput<A2, A1>: LogicalNot,
    NotGreater<A1, A2>: LogicalAnd<LessOutput<B1, B2>>,
    LessOutput<A1, A2>: LogicalOr<AndOutput<NotGreater<A1, A2>, LessOutput<B1, B2>>>,
{
    type Output = <LessOutput<A1, A2> as LogicalOr<
        AndOutput<NotGreater<A1, A2>, LessOutput<B1, B2>>,
    >>::Output;

    fn less(left: &Pair<A1, B1>, right: &Pair<A2, B2>) -> Self::Output {
        left.first.less_than(&right.first).or_else(|| {
            right
                .first
                .less_than(&left.first)
                .not()
                .and_then(|| left.second.less_than(&right.second))
        })
    }
}
