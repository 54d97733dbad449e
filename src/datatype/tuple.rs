//! Heterogeneous tuples.
//!
//! A tuple is a cons list: [`Nil`] is the empty tuple and [`Cons`] holds a
//! head and the rest of the tuple. The element types are part of the tuple's
//! type, so the length and every element type are known to the compiler, and
//! algorithms over tuples are unrolled into straight-line code.
//!
//! Build tuples with [`tuple!`](crate::tuple) and name their types with
//! [`Tuple!`](crate::Tuple). Standard Rust tuples of up to twelve elements
//! convert through [`IntoTuple`].
//!
//! Tuples model every concept of the crate:
//!
//! - Comparable and Orderable elementwise (lexicographically for `less`)
//! - Iterable, and through it Foldable and Searchable
//! - Functor, Applicative (`lift` makes a one-element tuple), Monad
//!   (`flatten` concatenates) and MonadPlus (`empty` is [`Nil`])
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{HList, IntoTuple, N1, N2, append, filter, reverse};
//! use polytag::typeclass::{at, concat, equal, equal_to, less};
//! use polytag::{Tuple, tuple};
//!
//! let mixed: Tuple![i32, char, &str] = tuple!(1, 'b', "c");
//! assert_eq!(<Tuple![i32, char, &str] as HList>::LEN, 3);
//! assert_eq!(at(mixed, N2), "c");
//!
//! assert_eq!(reverse(mixed), tuple!("c", 'b', 1));
//! assert_eq!(append(tuple!(1), 2), tuple!(1, 2));
//! assert_eq!(concat(tuple!(1), tuple!('x')), tuple!(1, 'x'));
//! assert_eq!((1, 'x').into_tuple(), tuple!(1, 'x'));
//!
//! assert!(!equal(&tuple!(1i32, 2i32), &tuple!(2i32, 1i32)));
//! assert!(less(&tuple!(1i32, 2i32), &tuple!(1i32, 3i32)));
//!
//! let only_two = filter(tuple!(N1, 'a', N2), equal_to(N2));
//! assert_eq!(only_two, tuple!(N2));
//! ```
//!
//! `filter` needs a predicate answering at compile time for every element,
//! since each answer decides whether an element type stays in the result.

use std::fmt;

use crate::dispatch::{
    Convert, False, Function, Make, Predicate, Tagged, TestOutput, True, builtin_tag,
};
use crate::typeclass::{
    AndOutput, Applicative, AtImpl, Comparable, DropFrontImpl, Equal, EqualImpl, EqualOutput,
    ConcatImpl, EmptyImpl, FlattenImpl, FoldFromIterable, Foldable, Functor, IsEmptyImpl, Iterable,
    Less, LessImpl, LessOutput, LiftImpl, LogicalAnd, LogicalNot, LogicalOr, Monad, MonadPlus,
    Orderable, SearchFromIterable, Searchable, TransformImpl, UnconsImpl,
};

use super::integral::{Nat, S, Z};

// =============================================================================
// Representation
// =============================================================================

/// The tag of every tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TupleTag;

builtin_tag!(TupleTag => [0 0 1 0 0 0 1 0]);

/// The empty tuple.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nil;

/// A non-empty tuple: its first element and the remaining elements.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

impl Tagged for Nil {
    type Tag = TupleTag;
}

impl<H, T: HList> Tagged for Cons<H, T> {
    type Tag = TupleTag;
}

/// Builds a tuple value.
///
/// ```rust
/// use polytag::tuple;
///
/// let empty = tuple!();
/// let three = tuple!(1, "two", 3.0);
/// # let _ = (empty, three);
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::datatype::Nil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::datatype::Cons {
            head: $head,
            tail: $crate::tuple!($($tail),*),
        }
    };
}

/// Names a tuple type.
///
/// `Tuple![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
#[macro_export]
macro_rules! Tuple {
    () => {
        $crate::datatype::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::datatype::Cons<$head, $crate::Tuple!($($tail),*)>
    };
}

/// Structural facts about a tuple type.
pub trait HList: Sized {
    /// The number of elements.
    const LEN: usize;

    /// The number of elements as a type-level natural.
    type Len: Nat;

    /// The number of elements.
    fn len(&self) -> usize {
        Self::LEN
    }

    /// Whether the tuple has no elements.
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl HList for Nil {
    const LEN: usize = 0;
    type Len = Z;
}

impl<H, T: HList> HList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
    type Len = S<T::Len>;
}

// =============================================================================
// Formatting
// =============================================================================

/// Writes the elements of a tuple into a debug tuple builder.
pub trait DebugElements {
    /// Adds every element as a field.
    fn debug_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugElements for Nil {
    fn debug_elements(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<H: fmt::Debug, T: DebugElements> DebugElements for Cons<H, T> {
    fn debug_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>) {
        builder.field(&self.head);
        self.tail.debug_elements(builder);
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl<H: fmt::Debug, T: DebugElements> fmt::Debug for Cons<H, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = formatter.debug_tuple("");
        self.debug_elements(&mut builder);
        builder.finish()
    }
}

// =============================================================================
// Structural operations
// =============================================================================

/// Prepends `value` to `xs`.
pub fn prepend<Xs: HList, X>(xs: Xs, value: X) -> Cons<X, Xs> {
    Cons {
        head: value,
        tail: xs,
    }
}

/// [`prepend`] as a function object taking the element first, the shape
/// `fold_right` calls it with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrependFn;

impl<X, Xs: HList> Function<(X, Xs)> for PrependFn {
    type Output = Cons<X, Xs>;

    fn apply(&mut self, (value, xs): (X, Xs)) -> Cons<X, Xs> {
        prepend(xs, value)
    }
}

/// Concatenation of two tuples.
pub trait Concat<Ys> {
    /// The concatenated tuple.
    type Output: HList;

    /// Appends every element of `ys`.
    fn concat_with(self, ys: Ys) -> Self::Output;
}

impl<Ys: HList> Concat<Ys> for Nil {
    type Output = Ys;

    fn concat_with(self, ys: Ys) -> Ys {
        ys
    }
}

impl<H, T: Concat<Ys>, Ys> Concat<Ys> for Cons<H, T> {
    type Output = Cons<H, T::Output>;

    fn concat_with(self, ys: Ys) -> Self::Output {
        Cons {
            head: self.head,
            tail: self.tail.concat_with(ys),
        }
    }
}

/// Appends `value` at the end of `xs`.
pub fn append<Xs, X>(xs: Xs, value: X) -> Xs::Output
where
    Xs: Concat<Cons<X, Nil>>,
{
    xs.concat_with(Cons {
        head: value,
        tail: Nil,
    })
}

/// Reversal of a tuple onto an accumulator.
pub trait ReverseOnto<Acc> {
    /// The reversed tuple followed by `Acc`.
    type Output: HList;

    /// Moves every element, last first, in front of `accumulator`.
    fn reverse_onto(self, accumulator: Acc) -> Self::Output;
}

impl<Acc: HList> ReverseOnto<Acc> for Nil {
    type Output = Acc;

    fn reverse_onto(self, accumulator: Acc) -> Acc {
        accumulator
    }
}

impl<H, T, Acc> ReverseOnto<Acc> for Cons<H, T>
where
    T: ReverseOnto<Cons<H, Acc>>,
{
    type Output = T::Output;

    fn reverse_onto(self, accumulator: Acc) -> Self::Output {
        self.tail.reverse_onto(Cons {
            head: self.head,
            tail: accumulator,
        })
    }
}

/// The elements of `xs` in reverse order.
pub fn reverse<Xs: ReverseOnto<Nil>>(xs: Xs) -> Xs::Output {
    xs.reverse_onto(Nil)
}

/// Keeps the elements for which a type-level predicate holds.
pub trait Filter<P> {
    /// The remaining elements.
    type Output: HList;

    /// Filters with `predicate`.
    fn filter_with(self, predicate: &mut P) -> Self::Output;
}

impl<P> Filter<P> for Nil {
    type Output = Self;

    fn filter_with(self, _: &mut P) -> Self {
        self
    }
}

impl<H, T, P> Filter<P> for Cons<H, T>
where
    P: Predicate<H>,
    TestOutput<P, H>: FilterStep<H, T, P>,
{
    type Output = <TestOutput<P, H> as FilterStep<H, T, P>>::Output;

    fn filter_with(self, predicate: &mut P) -> Self::Output {
        predicate
            .test(&self.head)
            .filter_step(self.head, self.tail, predicate)
    }
}

/// Keeps or drops one element, dispatched on the predicate's answer.
#[diagnostic::on_unimplemented(
    message = "`filter` needs a compile-time predicate",
    label = "the predicate answered with `{Self}`",
    note = "each answer decides whether an element type stays in the resulting tuple; return `True` or `False`"
)]
pub trait FilterStep<H, T, P> {
    /// The filtered tuple.
    type Output: HList;

    /// Keeps `head` if `self` is `True`, then filters `tail`.
    fn filter_step(self, head: H, tail: T, predicate: &mut P) -> Self::Output;
}

impl<H, T: Filter<P>, P> FilterStep<H, T, P> for True {
    type Output = Cons<H, T::Output>;

    fn filter_step(self, head: H, tail: T, predicate: &mut P) -> Self::Output {
        Cons {
            head,
            tail: tail.filter_with(predicate),
        }
    }
}

impl<H, T: Filter<P>, P> FilterStep<H, T, P> for False {
    type Output = T::Output;

    fn filter_step(self, _: H, tail: T, predicate: &mut P) -> Self::Output {
        tail.filter_with(predicate)
    }
}

/// The elements of `xs` satisfying `predicate`.
pub fn filter<Xs: Filter<P>, P>(xs: Xs, mut predicate: P) -> Xs::Output {
    xs.filter_with(&mut predicate)
}

/// Indexed access with a type-level index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element at index `{N}`",
    note = "the index must be below the length of the tuple"
)]
pub trait TupleAt<N> {
    /// The element's type.
    type Output;

    /// Moves the element out.
    fn at_index(self) -> Self::Output;

    /// Borrows the element.
    fn at_ref(&self) -> &Self::Output;
}

impl<H, T> TupleAt<Z> for Cons<H, T> {
    type Output = H;

    fn at_index(self) -> H {
        self.head
    }

    fn at_ref(&self) -> &H {
        &self.head
    }
}

impl<H, T: TupleAt<N>, N> TupleAt<S<N>> for Cons<H, T> {
    type Output = T::Output;

    fn at_index(self) -> T::Output {
        self.tail.at_index()
    }

    fn at_ref(&self) -> &T::Output {
        self.tail.at_ref()
    }
}

/// Dropping a type-level number of leading elements, saturating at the end.
pub trait TupleDrop<N> {
    /// The remaining elements.
    type Output: HList;

    /// Drops the elements.
    fn drop_leading(self) -> Self::Output;
}

impl<N> TupleDrop<N> for Nil {
    type Output = Self;

    fn drop_leading(self) -> Self {
        self
    }
}

impl<H, T: HList> TupleDrop<Z> for Cons<H, T> {
    type Output = Self;

    fn drop_leading(self) -> Self {
        self
    }
}

impl<H, T: TupleDrop<N>, N> TupleDrop<S<N>> for Cons<H, T> {
    type Output = T::Output;

    fn drop_leading(self) -> T::Output {
        self.tail.drop_leading()
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Conversion of a standard Rust tuple into a tuple of this crate.
pub trait IntoTuple {
    /// The converted tuple.
    type Output: HList;

    /// Converts, keeping the element order.
    fn into_tuple(self) -> Self::Output;
}

macro_rules! std_tuple_conversions {
    ($(($($element:ident),*)),* $(,)?) => {
        $(
            impl<$($element),*> IntoTuple for ($($element,)*) {
                type Output = crate::Tuple!($($element),*);

                fn into_tuple(self) -> Self::Output {
                    paste::paste! {
                        let ($([<$element:lower>],)*) = self;
                        crate::tuple!($([<$element:lower>]),*)
                    }
                }
            }

            impl<$($element),*> From<($($element,)*)> for crate::Tuple!($($element),*) {
                fn from(value: ($($element,)*)) -> Self {
                    value.into_tuple()
                }
            }
        )*
    };
}

std_tuple_conversions! {
    (),
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
}

impl<Args: IntoTuple> Make<Args> for TupleTag {
    type Output = Args::Output;

    fn make(args: Args) -> Self::Output {
        args.into_tuple()
    }
}

impl Convert<TupleTag> for Nil {
    type Output = Self;

    fn convert(self) -> Self {
        self
    }
}

impl<H, T: HList> Convert<TupleTag> for Cons<H, T> {
    type Output = Self;

    fn convert(self) -> Self {
        self
    }
}

// =============================================================================
// Comparable and Orderable
// =============================================================================

impl Comparable for TupleTag {}

impl EqualImpl<Nil, Nil> for TupleTag {
    type Output = True;

    fn equal(_: &Nil, _: &Nil) -> True {
        True
    }
}

impl<H, T> EqualImpl<Nil, Cons<H, T>> for TupleTag {
    type Output = False;

    fn equal(_: &Nil, _: &Cons<H, T>) -> False {
        False
    }
}

impl<H, T> EqualImpl<Cons<H, T>, Nil> for TupleTag {
    type Output = False;

    fn equal(_: &Cons<H, T>, _: &Nil) -> False {
        False
    }
}

type TailEqual<T1, T2> = <TupleTag as EqualImpl<T1, T2>>::Output;

impl<H1, T1, H2, T2> EqualImpl<Cons<H1, T1>, Cons<H2, T2>> for TupleTag
where
    H1: Equal<H2>,
    Self: EqualImpl<T1, T2>,
    EqualOutput<H1, H2>: LogicalAnd<TailEqual<T1, T2>>,
{
    type Output = AndOutput<EqualOutput<H1, H2>, TailEqual<T1, T2>>;

    fn equal(left: &Cons<H1, T1>, right: &Cons<H2, T2>) -> Self::Output {
        left.head
            .equal_to(&right.head)
            .and_then(|| Self::equal(&left.tail, &right.tail))
    }
}

impl Orderable for TupleTag {}

impl LessImpl<Nil, Nil> for TupleTag {
    type Output = False;

    fn less(_: &Nil, _: &Nil) -> False {
        False
    }
}

impl<H, T> LessImpl<Nil, Cons<H, T>> for TupleTag {
    type Output = True;

    fn less(_: &Nil, _: &Cons<H, T>) -> True {
        True
    }
}

impl<H, T> LessImpl<Cons<H, T>, Nil> for TupleTag {
    type Output = False;

    fn less(_: &Cons<H, T>, _: &Nil) -> False {
        False
    }
}

type NotGreater<H1, H2> = <LessOutput<H2, H1> as LogicalNot>::Output;
type TailLess<T1, T2> = <TupleTag as LessImpl<T1, T2>>::Output;

impl<H1, T1, H2, T2> LessImpl<Cons<H1, T1>, Cons<H2, T2>> for TupleTag
where
    H1: Less<H2>,
    H2: Less<H1>,
    LessOutput<H2, H1>: LogicalNot,
    Self: LessImpl<T1, T2>,
    NotGreater<H1, H2>: LogicalAnd<TailLess<T1, T2>>,
    LessOutput<H1, H2>: LogicalOr<AndOutput<NotGreater<H1, H2>, TailLess<T1, T2>>>,
{
    type Output =
        <LessOutput<H1, H2> as LogicalOr<AndOutput<NotGreater<H1, H2>, TailLess<T1, T2>>>>::Output;

    fn less(left: &Cons<H1, T1>, right: &Cons<H2, T2>) -> Self::Output {
        left.head.less_than(&right.head).or_else(|| {
            right
                .head
                .less_than(&left.head)
                .not()
                .and_then(|| Self::less(&left.tail, &right.tail))
        })
    }
}

// =============================================================================
// Iterable, Foldable, Searchable
// =============================================================================

impl Iterable for TupleTag {}

impl IsEmptyImpl<Nil> for TupleTag {
    type Output = True;

    fn is_empty(_: &Nil) -> True {
        True
    }
}

impl<H, T: HList> IsEmptyImpl<Cons<H, T>> for TupleTag {
    type Output = False;

    fn is_empty(_: &Cons<H, T>) -> False {
        False
    }
}

impl<H, T: HList> UnconsImpl<Cons<H, T>> for TupleTag {
    type Head = H;
    type Tail = T;

    fn uncons(xs: Cons<H, T>) -> (H, T) {
        (xs.head, xs.tail)
    }
}

impl<Xs: TupleAt<N>, N> AtImpl<Xs, N> for TupleTag {
    type Output = Xs::Output;

    fn at(xs: Xs) -> Self::Output {
        xs.at_index()
    }
}

impl<Xs: TupleDrop<N>, N> DropFrontImpl<Xs, N> for TupleTag {
    type Output = Xs::Output;

    fn drop_front(xs: Xs) -> Self::Output {
        xs.drop_leading()
    }
}

impl Foldable for TupleTag {
    type Mcd = FoldFromIterable;
}

impl Searchable for TupleTag {
    type Mcd = SearchFromIterable;
}

// =============================================================================
// Functor, Applicative, Monad
// =============================================================================

impl Functor for TupleTag {}

impl<F> TransformImpl<Nil, F> for TupleTag {
    type Output = Nil;

    fn transform(xs: Nil, _: &mut F) -> Nil {
        xs
    }
}

impl<H, T, F> TransformImpl<Cons<H, T>, F> for TupleTag
where
    F: Function<(H,)>,
    Self: TransformImpl<T, F>,
    <Self as TransformImpl<T, F>>::Output: HList,
{
    type Output = Cons<F::Output, <Self as TransformImpl<T, F>>::Output>;

    fn transform(xs: Cons<H, T>, function: &mut F) -> Self::Output {
        let head = function.apply((xs.head,));
        Cons {
            head,
            tail: Self::transform(xs.tail, function),
        }
    }
}

impl Applicative for TupleTag {}

impl<X> LiftImpl<X> for TupleTag {
    type Output = Cons<X, Nil>;

    fn lift(value: X) -> Self::Output {
        Cons {
            head: value,
            tail: Nil,
        }
    }
}

impl Monad for TupleTag {}

impl FlattenImpl<Nil> for TupleTag {
    type Output = Nil;

    fn flatten(xss: Nil) -> Nil {
        xss
    }
}

impl<H, T> FlattenImpl<Cons<H, T>> for TupleTag
where
    Self: FlattenImpl<T>,
    H: Concat<<Self as FlattenImpl<T>>::Output>,
{
    type Output = H::Output;

    fn flatten(xss: Cons<H, T>) -> Self::Output {
        xss.head.concat_with(Self::flatten(xss.tail))
    }
}

impl MonadPlus for TupleTag {}

impl EmptyImpl for TupleTag {
    type Output = Nil;

    fn empty() -> Nil {
        Nil
    }
}

impl<Xs: Concat<Ys>, Ys> ConcatImpl<Xs, Ys> for TupleTag {
    type Output = Xs::Output;

    fn concat(xs: Xs, ys: Ys) -> Self::Output {
        xs.concat_with(ys)
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serializes the elements of a tuple in order.
#[cfg(feature = "serde")]
pub trait SerializeElements {
    /// Writes every element into `builder`.
    fn serialize_elements<B: serde::ser::SerializeTuple>(&self, builder: &mut B)
    -> Result<(), B::Error>;
}

#[cfg(feature = "serde")]
impl SerializeElements for Nil {
    fn serialize_elements<B: serde::ser::SerializeTuple>(&self, _: &mut B) -> Result<(), B::Error> {
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<H: serde::Serialize, T: SerializeElements> SerializeElements for Cons<H, T> {
    fn serialize_elements<B: serde::ser::SerializeTuple>(
        &self,
        builder: &mut B,
    ) -> Result<(), B::Error> {
        builder.serialize_element(&self.head)?;
        self.tail.serialize_elements(builder)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Nil {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        use serde::ser::SerializeTuple;

        serializer.serialize_tuple(0)?.end()
    }
}

#[cfg(feature = "serde")]
impl<H: serde::Serialize, T: SerializeElements + HList> serde::Serialize for Cons<H, T> {
    fn serialize<Sr: serde::Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        use serde::ser::SerializeTuple;

        let mut builder = serializer.serialize_tuple(Self::LEN)?;
        self.serialize_elements(&mut builder)?;
        builder.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N0, N1, N2, N3, N5};
    use crate::dispatch::make;
    use crate::typeclass::{
        at, drop_front, equal, flatten, greater, head, is_empty, last, less, tail,
    };
    use crate::{Tuple, tuple};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Tuple![u8, char], Cons<u8, Cons<char, Nil>>);
    assert_type_eq_all!(<Tuple![u8, char, bool] as HList>::Len, N3);
    assert_type_eq_all!(<Tuple![(), ()] as Concat<Tuple![u8]>>::Output, Tuple![(), (), u8]);

    #[rstest]
    #[case(tuple!(1, 2), tuple!(1, 2), true)]
    #[case(tuple!(1, 2), tuple!(2, 1), false)]
    #[case(tuple!(0, 0), tuple!(0, 1), false)]
    fn equality_is_elementwise(
        #[case] left: Tuple![i32, i32],
        #[case] right: Tuple![i32, i32],
        #[case] expected: bool,
    ) {
        assert_eq!(equal(&left, &right), expected);
        assert_eq!(equal(&right, &left), expected);
    }

    #[rstest]
    fn equality_with_static_elements_is_static() {
        let _: True = equal(&tuple!(N1, True), &tuple!(N1, True));
        let _: False = equal(&tuple!(N1, N2), &tuple!(N1, N3));
        assert!(!equal(&tuple!(1i32), &tuple!(1i32, 2i32)));
        let _: False = equal(&tuple!('a'), &tuple!("a"));
    }

    #[rstest]
    #[case(tuple!(1, 2), tuple!(1, 3), true)]
    #[case(tuple!(1, 3), tuple!(1, 2), false)]
    #[case(tuple!(0, 9), tuple!(1, 0), true)]
    #[case(tuple!(4, 4), tuple!(4, 4), false)]
    fn ordering_is_lexicographic(
        #[case] left: Tuple![i32, i32],
        #[case] right: Tuple![i32, i32],
        #[case] expected: bool,
    ) {
        assert_eq!(less(&left, &right), expected);
        assert_eq!(greater(&right, &left), expected);
    }

    #[rstest]
    fn shorter_prefix_orders_first() {
        let _: True = less(&tuple!(), &tuple!(N1));
        let _: True = less(&tuple!(N1), &tuple!(N1, N0));
        assert!(!less(&tuple!(2i32, 1i32), &tuple!(2i32)));
    }

    #[rstest]
    fn iterable_operations() {
        let values = tuple!('a', 2u8, "three");
        let _: False = is_empty(&values);
        let _: True = is_empty(&tuple!());
        assert_eq!(head(values), 'a');
        assert_eq!(tail(values), tuple!(2u8, "three"));
        assert_eq!(at(values, N1), 2u8);
        assert_eq!(last(values), "three");
        assert_eq!(drop_front(values, N2), tuple!("three"));
        assert_eq!(drop_front(values, N5), tuple!());
        assert_eq!(*TupleAt::<N2>::at_ref(&values), "three");
    }

    #[rstest]
    fn structural_operations() {
        assert_eq!(prepend(tuple!(2), 1), tuple!(1, 2));
        assert_eq!(append(tuple!(), 'z'), tuple!('z'));
        assert_eq!(tuple!(1, 2).concat_with(tuple!()), tuple!(1, 2));
        assert_eq!(reverse(tuple!(1, 'b', "c")), tuple!("c", 'b', 1));
        assert_eq!(reverse(tuple!()), tuple!());
        assert_eq!(filter(tuple!(N1, N2), crate::typeclass::equal_to(N3)), tuple!());
    }

    #[rstest]
    fn filter_keeps_statically_selected_elements() {
        let kept = filter(tuple!(N1, 'x', N3, 'y'), crate::typeclass::equal_to(N3));
        assert_eq!(kept, tuple!(N3));
    }

    #[rstest]
    fn flatten_concatenates() {
        let nested = tuple!(tuple!(1), tuple!(), tuple!('a', "b"));
        assert_eq!(flatten(nested), tuple!(1, 'a', "b"));
    }

    #[rstest]
    fn standard_tuples_convert() {
        assert_eq!(().into_tuple(), tuple!());
        assert_eq!(make::<TupleTag, _>((1, 'a', 2.5)), tuple!(1, 'a', 2.5));
        let converted: Tuple![u8, u16] = (1u8, 2u16).into();
        assert_eq!(converted, tuple!(1u8, 2u16));
        let twelve = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12).into_tuple();
        assert_eq!(twelve.len(), 12);
    }

    #[rstest]
    fn debug_prints_like_a_standard_tuple() {
        assert_eq!(format!("{:?}", tuple!()), "()");
        assert_eq!(format!("{:?}", tuple!(1)), "(1,)");
        assert_eq!(format!("{:?}", tuple!(1, 'a', "b")), "(1, 'a', \"b\")");
    }
}
