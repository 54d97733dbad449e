//! Tuple algorithms beyond the Iterable interface.
//!
//! Each algorithm recurses on the structure of the tuple, so the shape of
//! its result is a type: `zip` of two three-element tuples is a
//! three-element tuple of pairs, `take_front(xs, N2)` has two elements,
//! and `partition` and `sort` rearrange element *types*. The last two
//! therefore need answers known at compile time, just like
//! [`filter`](super::filter).
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, N2, N3, N5, partition, scan_left, sort, take_front, unpack, zip};
//! use polytag::typeclass::less_than;
//! use polytag::tuple;
//!
//! assert_eq!(unpack(tuple!(1, 2, 3), |a: i32, b: i32, c: i32| a + b * c), 7);
//! assert_eq!(zip(tuple!(1, 'a'), tuple!("one", N1)), tuple!(tuple!(1, "one"), tuple!('a', N1)));
//! assert_eq!(take_front(tuple!(1, 'b', "c"), N2), tuple!(1, 'b'));
//! assert_eq!(scan_left(tuple!(1, 2, 3), 0, |sum: i32, n: i32| sum + n), tuple!(0, 1, 3, 6));
//!
//! let split = partition(tuple!(N1, N5, N2), less_than(N3));
//! assert_eq!((split.first, split.second), (tuple!(N1, N2), tuple!(N5)));
//! assert_eq!(sort(tuple!(N3, N1, N2)), tuple!(N1, N2, N3));
//! ```

use crate::dispatch::{False, Function, Predicate, TestOutput, True};
use crate::typeclass::{Less, LessOutput};

use super::integral::{S, Z};
use super::pair::Pair;
use super::tuple::{Cons, HList, Nil};

// =============================================================================
// unpack
// =============================================================================

/// Calls a function with the elements of a tuple as its arguments.
#[diagnostic::on_unimplemented(
    message = "`{F}` cannot be called with the elements of `{Self}`",
    note = "`unpack` passes every element as a separate argument, for tuples of up to twelve elements"
)]
pub trait Unpack<F> {
    /// The function's result.
    type Output;

    /// Moves the elements into `function`.
    fn unpack_into(self, function: F) -> Self::Output;
}

// Pattern-position counterpart of `tuple!`, whose `expr` fragments cannot
// appear in patterns.
macro_rules! tuple_pattern {
    () => {
        crate::datatype::Nil
    };
    ($head:ident $(, $tail:ident)* $(,)?) => {
        crate::datatype::Cons {
            head: $head,
            tail: tuple_pattern!($($tail),*),
        }
    };
}

macro_rules! unpack_arities {
    ($(($($element:ident),*)),* $(,)?) => {
        $(
            impl<Func, R, $($element),*> Unpack<Func> for crate::Tuple!($($element),*)
            where
                Func: FnOnce($($element),*) -> R,
            {
                type Output = R;

                fn unpack_into(self, function: Func) -> R {
                    paste::paste! {
                        let tuple_pattern!($([<$element:lower>]),*) = self;
                        function($([<$element:lower>]),*)
                    }
                }
            }
        )*
    };
}

unpack_arities! {
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

/// Calls `function` with the elements of `xs`, in order.
pub fn unpack<Xs: Unpack<F>, F>(xs: Xs, function: F) -> Xs::Output {
    xs.unpack_into(function)
}

// =============================================================================
// zip
// =============================================================================

/// Combines two tuples of the same length element by element.
#[diagnostic::on_unimplemented(
    message = "cannot zip `{Self}` with `{Ys}`",
    note = "both tuples must have the same length"
)]
pub trait ZipWith<Ys, F> {
    /// One combined element per position.
    type Output: HList;

    /// Calls `function` on each pair of elements.
    fn zip_with_fn(self, ys: Ys, function: &mut F) -> Self::Output;
}

impl<F> ZipWith<Nil, F> for Nil {
    type Output = Self;

    fn zip_with_fn(self, _: Nil, _: &mut F) -> Self {
        self
    }
}

impl<X, Xs, Y, Ys, F> ZipWith<Cons<Y, Ys>, F> for Cons<X, Xs>
where
    F: Function<(X, Y)>,
    Xs: ZipWith<Ys, F>,
{
    type Output = Cons<F::Output, Xs::Output>;

    fn zip_with_fn(self, ys: Cons<Y, Ys>, function: &mut F) -> Self::Output {
        let head = function.apply((self.head, ys.head));
        Cons {
            head,
            tail: self.tail.zip_with_fn(ys.tail, function),
        }
    }
}

/// Makes a two-element tuple. The combining function of [`zip`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZipFn;

impl<X, Y> Function<(X, Y)> for ZipFn {
    type Output = Cons<X, Cons<Y, Nil>>;

    fn apply(&mut self, (x, y): (X, Y)) -> Self::Output {
        crate::tuple!(x, y)
    }
}

/// `function(x, y)` for every position of `xs` and `ys`.
pub fn zip_with<Xs, Ys, F>(xs: Xs, ys: Ys, mut function: F) -> Xs::Output
where
    Xs: ZipWith<Ys, F>,
{
    xs.zip_with_fn(ys, &mut function)
}

/// The elements of `xs` and `ys` side by side, as two-element tuples.
pub fn zip<Xs, Ys>(xs: Xs, ys: Ys) -> Xs::Output
where
    Xs: ZipWith<Ys, ZipFn>,
{
    xs.zip_with_fn(ys, &mut ZipFn)
}

// =============================================================================
// take_front
// =============================================================================

/// The leading elements of a tuple, up to a type-level count.
pub trait TupleTake<N> {
    /// The kept elements.
    type Output: HList;

    /// Keeps the first `N` elements, or all of them if there are fewer.
    fn take_leading(self) -> Self::Output;
}

impl<N> TupleTake<N> for Nil {
    type Output = Self;

    fn take_leading(self) -> Self {
        self
    }
}

impl<H, T: HList> TupleTake<Z> for Cons<H, T> {
    type Output = Nil;

    fn take_leading(self) -> Nil {
        Nil
    }
}

impl<H, T: TupleTake<N>, N> TupleTake<S<N>> for Cons<H, T> {
    type Output = Cons<H, T::Output>;

    fn take_leading(self) -> Self::Output {
        Cons {
            head: self.head,
            tail: self.tail.take_leading(),
        }
    }
}

/// The first `count` elements of `xs`; all of them when `xs` is shorter.
pub fn take_front<Xs: TupleTake<N>, N>(xs: Xs, _count: N) -> Xs::Output {
    xs.take_leading()
}

// =============================================================================
// scan_left
// =============================================================================

/// Every intermediate state of a left fold.
pub trait ScanLeft<St, F> {
    /// The initial state followed by each successive state.
    type Output: HList;

    /// Folds from the left, keeping every state.
    fn scan_left_with(self, state: St, function: &mut F) -> Self::Output;
}

impl<St, F> ScanLeft<St, F> for Nil {
    type Output = Cons<St, Nil>;

    fn scan_left_with(self, state: St, _: &mut F) -> Self::Output {
        Cons {
            head: state,
            tail: Nil,
        }
    }
}

impl<H, T, St, F> ScanLeft<St, F> for Cons<H, T>
where
    St: Clone,
    F: Function<(St, H)>,
    T: ScanLeft<F::Output, F>,
{
    type Output = Cons<St, T::Output>;

    fn scan_left_with(self, state: St, function: &mut F) -> Self::Output {
        let next = function.apply((state.clone(), self.head));
        Cons {
            head: state,
            tail: self.tail.scan_left_with(next, function),
        }
    }
}

/// `state`, then the state after each element of a left fold over `xs`.
pub fn scan_left<Xs, St, F>(xs: Xs, state: St, mut function: F) -> Xs::Output
where
    Xs: ScanLeft<St, F>,
{
    xs.scan_left_with(state, &mut function)
}

// =============================================================================
// partition
// =============================================================================

/// Splits a tuple by a type-level predicate.
pub trait Partition<P> {
    /// The elements satisfying the predicate.
    type Kept: HList;

    /// The other elements.
    type Rest: HList;

    /// Splits with `predicate`, keeping the relative order on both sides.
    fn partition_with(self, predicate: &mut P) -> Pair<Self::Kept, Self::Rest>;
}

impl<P> Partition<P> for Nil {
    type Kept = Self;
    type Rest = Self;

    fn partition_with(self, _: &mut P) -> Pair<Nil, Nil> {
        Pair {
            first: Nil,
            second: Nil,
        }
    }
}

impl<H, T, P> Partition<P> for Cons<H, T>
where
    P: Predicate<H>,
    T: Partition<P>,
    TestOutput<P, H>: PartitionStep<H, T::Kept, T::Rest>,
{
    type Kept = <TestOutput<P, H> as PartitionStep<H, T::Kept, T::Rest>>::Kept;
    type Rest = <TestOutput<P, H> as PartitionStep<H, T::Kept, T::Rest>>::Rest;

    fn partition_with(self, predicate: &mut P) -> Pair<Self::Kept, Self::Rest> {
        let answer = predicate.test(&self.head);
        let Pair { first, second } = self.tail.partition_with(predicate);
        answer.partition_step(self.head, first, second)
    }
}

/// Places one element on the side named by the predicate's answer.
#[diagnostic::on_unimplemented(
    message = "`partition` needs a compile-time predicate",
    label = "the predicate answered with `{Self}`",
    note = "each answer decides which side an element type lands on; return `True` or `False`"
)]
pub trait PartitionStep<H, Kept, Rest> {
    /// The satisfying side.
    type Kept: HList;

    /// The other side.
    type Rest: HList;

    /// Prepends `head` to `kept` if `self` is `True`, to `rest` otherwise.
    fn partition_step(self, head: H, kept: Kept, rest: Rest) -> Pair<Self::Kept, Self::Rest>;
}

impl<H, Kept: HList, Rest: HList> PartitionStep<H, Kept, Rest> for True {
    type Kept = Cons<H, Kept>;
    type Rest = Rest;

    fn partition_step(self, head: H, kept: Kept, rest: Rest) -> Pair<Self::Kept, Rest> {
        Pair {
            first: Cons { head, tail: kept },
            second: rest,
        }
    }
}

impl<H, Kept: HList, Rest: HList> PartitionStep<H, Kept, Rest> for False {
    type Kept = Kept;
    type Rest = Cons<H, Rest>;

    fn partition_step(self, head: H, kept: Kept, rest: Rest) -> Pair<Kept, Self::Rest> {
        Pair {
            first: kept,
            second: Cons { head, tail: rest },
        }
    }
}

/// The elements of `xs` satisfying `predicate`, paired with the others.
pub fn partition<Xs, P>(xs: Xs, mut predicate: P) -> Pair<Xs::Kept, Xs::Rest>
where
    Xs: Partition<P>,
{
    xs.partition_with(&mut predicate)
}

// =============================================================================
// sort
// =============================================================================

/// Stable insertion sort on compile-time `less`.
pub trait Sort {
    /// The elements in ascending order.
    type Output: HList;

    /// Sorts the elements.
    fn sort_elements(self) -> Self::Output;
}

impl Sort for Nil {
    type Output = Self;

    fn sort_elements(self) -> Self {
        self
    }
}

impl<H, T> Sort for Cons<H, T>
where
    T: Sort,
    T::Output: InsertSorted<H>,
{
    type Output = <T::Output as InsertSorted<H>>::Output;

    fn sort_elements(self) -> Self::Output {
        self.tail.sort_elements().insert_sorted(self.head)
    }
}

/// Inserts an element into a sorted tuple, before every element it does
/// not follow.
pub trait InsertSorted<X> {
    /// The tuple with the element in place.
    type Output: HList;

    /// Inserts `element`.
    fn insert_sorted(self, element: X) -> Self::Output;
}

impl<X> InsertSorted<X> for Nil {
    type Output = Cons<X, Nil>;

    fn insert_sorted(self, element: X) -> Self::Output {
        Cons {
            head: element,
            tail: Nil,
        }
    }
}

impl<H, T, X> InsertSorted<X> for Cons<H, T>
where
    H: Less<X>,
    LessOutput<H, X>: SortStep<H, T, X>,
{
    type Output = <LessOutput<H, X> as SortStep<H, T, X>>::Output;

    fn insert_sorted(self, element: X) -> Self::Output {
        <LessOutput<H, X> as SortStep<H, T, X>>::sort_step(self.head, self.tail, element)
    }
}

/// Moves past `H` when it sorts strictly before `X`.
#[diagnostic::on_unimplemented(
    message = "`sort` needs elements ordered at compile time",
    label = "comparing two elements gave `{Self}`",
    note = "each comparison decides where an element type lands; the elements must compare with a `True` or `False` result"
)]
pub trait SortStep<H, T, X> {
    /// The tuple with `X` in place.
    type Output: HList;

    /// Places `element` relative to `head`.
    fn sort_step(head: H, tail: T, element: X) -> Self::Output;
}

impl<H, T: InsertSorted<X>, X> SortStep<H, T, X> for True {
    type Output = Cons<H, T::Output>;

    fn sort_step(head: H, tail: T, element: X) -> Self::Output {
        Cons {
            head,
            tail: tail.insert_sorted(element),
        }
    }
}

impl<H, T: HList, X> SortStep<H, T, X> for False {
    type Output = Cons<X, Cons<H, T>>;

    fn sort_step(head: H, tail: T, element: X) -> Self::Output {
        Cons {
            head: element,
            tail: Cons { head, tail },
        }
    }
}

/// The elements of `xs` in ascending order; equal elements keep their
/// relative order.
pub fn sort<Xs: Sort>(xs: Xs) -> Xs::Output {
    xs.sort_elements()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N0, N1, N2, N3, N4, N5, N9};
    use crate::dispatch::True;
    use crate::typeclass::{equal, equal_to, less_than};
    use crate::{Tuple, string, tuple};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Tuple![u8, char] as TupleTake<N5>>::Output, Tuple![u8, char]);
    assert_type_eq_all!(<Tuple![u8, char] as TupleTake<N0>>::Output, Tuple![]);
    assert_type_eq_all!(<Tuple![N3, N1, N2, N1] as Sort>::Output, Tuple![N1, N1, N2, N3]);

    #[rstest]
    fn unpack_spreads_every_element() {
        assert_eq!(unpack(tuple!(), || "empty"), "empty");
        assert_eq!(unpack(tuple!('x'), |c: char| c.to_ascii_uppercase()), 'X');
        assert_eq!(
            unpack(tuple!(2u8, "ab", 'c'), |n: u8, s: &str, c: char| format!("{n}{s}{c}")),
            "2abc"
        );
        let letters = unpack(
            tuple!('a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l'),
            |a: char,
             b: char,
             c: char,
             d: char,
             e: char,
             f: char,
             g: char,
             h: char,
             i: char,
             j: char,
             k: char,
             l: char| [a, b, c, d, e, f, g, h, i, j, k, l].iter().collect::<String>(),
        );
        assert_eq!(letters, "abcdefghijkl");
    }

    #[rstest]
    fn zip_pairs_up_positions() {
        assert_eq!(zip(tuple!(), tuple!()), tuple!());
        assert_eq!(
            zip(tuple!(1u8, 'b'), tuple!(N1, "two")),
            tuple!(tuple!(1u8, N1), tuple!('b', "two"))
        );
    }

    #[rstest]
    #[case(tuple!(1, 2, 3), tuple!(10, 20, 30), tuple!(11, 22, 33))]
    #[case(tuple!(0, 0, 0), tuple!(-1, 5, 9), tuple!(-1, 5, 9))]
    fn zip_with_combines_positions(
        #[case] xs: Tuple![i32, i32, i32],
        #[case] ys: Tuple![i32, i32, i32],
        #[case] expected: Tuple![i32, i32, i32],
    ) {
        assert_eq!(zip_with(xs, ys, |x: i32, y: i32| x + y), expected);
    }

    #[rstest]
    fn take_front_saturates() {
        let values = tuple!(1u8, 'b', "c");
        assert_eq!(take_front(values, N0), tuple!());
        assert_eq!(take_front(values, N2), tuple!(1u8, 'b'));
        assert_eq!(take_front(values, N9), values);
        assert_eq!(take_front(tuple!(), N4), tuple!());
    }

    #[rstest]
    fn scan_left_keeps_every_state() {
        assert_eq!(scan_left(tuple!(), 'z', |_: char, n: u8| n), tuple!('z'));
        let lengths = scan_left(tuple!("a", "bcd"), 0usize, |total: usize, s: &str| {
            total + s.len()
        });
        assert_eq!(lengths, tuple!(0, 1, 4));
    }

    #[rstest]
    fn partition_splits_by_static_answers() {
        let split = partition(tuple!(N4, N1, N3, N0), less_than(N2));
        assert_eq!(split.first, tuple!(N1, N0));
        assert_eq!(split.second, tuple!(N4, N3));

        let nothing_matches = partition(tuple!(N1, N2), equal_to(N9));
        assert_eq!(nothing_matches.first, tuple!());
        assert_eq!(nothing_matches.second, tuple!(N1, N2));
    }

    #[rstest]
    fn sort_orders_static_elements() {
        assert_eq!(sort(tuple!()), tuple!());
        assert_eq!(sort(tuple!(N5, N0, N9, N2)), tuple!(N0, N2, N5, N9));
        let words = sort(tuple!(string!("pear"), string!("apple"), string!("fig")));
        let _: True = equal(&words, &tuple!(string!("apple"), string!("fig"), string!("pear")));
    }
}
