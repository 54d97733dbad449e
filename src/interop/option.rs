//! `Option<T>` under [`StdOptionTag`].

use crate::dispatch::{Function, Predicate, Tagged, builtin_tag};
use crate::typeclass::{
    AnyOfImpl, Applicative, Comparable, Equal, EqualImpl, FindIfImpl, FlattenImpl, FoldLeftImpl,
    FoldRightImpl, Foldable, Functor, Less, LessImpl, LiftImpl, Logical, Monad, NativeFold,
    NativeSearch, Orderable, Searchable, TransformImpl,
};

/// The tag of `Option<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StdOptionTag;

builtin_tag!(StdOptionTag => [0 0 1 1 0 0 0 0]);

impl<T> Tagged for Option<T> {
    type Tag = StdOptionTag;
}

impl Comparable for StdOptionTag {}

impl<A: Equal<B>, B> EqualImpl<Option<A>, Option<B>> for StdOptionTag {
    type Output = bool;

    fn equal(left: &Option<A>, right: &Option<B>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left.equal_to(right).to_bool(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Orderable for StdOptionTag {}

impl<A: Less<B>, B> LessImpl<Option<A>, Option<B>> for StdOptionTag {
    type Output = bool;

    fn less(left: &Option<A>, right: &Option<B>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left.less_than(right).to_bool(),
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

impl Functor for StdOptionTag {}

impl<T, F: Function<(T,)>> TransformImpl<Option<T>, F> for StdOptionTag {
    type Output = Option<F::Output>;

    fn transform(xs: Option<T>, function: &mut F) -> Self::Output {
        xs.map(|value| function.apply((value,)))
    }
}

impl Applicative for StdOptionTag {}

impl<X> LiftImpl<X> for StdOptionTag {
    type Output = Option<X>;

    fn lift(value: X) -> Option<X> {
        Some(value)
    }
}

impl Monad for StdOptionTag {}

impl<T> FlattenImpl<Option<Option<T>>> for StdOptionTag {
    type Output = Option<T>;

    fn flatten(xss: Option<Option<T>>) -> Option<T> {
        xss.flatten()
    }
}

impl Foldable for StdOptionTag {
    type Mcd = NativeFold;
}

impl<T, S, F: Function<(S, T), Output = S>> FoldLeftImpl<Option<T>, S, F> for StdOptionTag {
    type Output = S;

    fn fold_left(xs: Option<T>, state: S, function: &mut F) -> S {
        match xs {
            Some(value) => function.apply((state, value)),
            None => state,
        }
    }
}

impl<T, S, F: Function<(T, S), Output = S>> FoldRightImpl<Option<T>, S, F> for StdOptionTag {
    type Output = S;

    fn fold_right(xs: Option<T>, state: S, function: &mut F) -> S {
        match xs {
            Some(value) => function.apply((value, state)),
            None => state,
        }
    }
}

impl Searchable for StdOptionTag {
    type Mcd = NativeSearch;
}

impl<T, P: Predicate<T>> FindIfImpl<Option<T>, P> for StdOptionTag {
    type Output = Option<T>;

    fn find_if(xs: Option<T>, predicate: &mut P) -> Option<T> {
        xs.filter(|value| predicate.test(value).to_bool())
    }
}

impl<T, P: Predicate<T>> AnyOfImpl<Option<T>, P> for StdOptionTag {
    type Output = bool;

    fn any_of(xs: Option<T>, predicate: &mut P) -> bool {
        xs.is_some_and(|value| predicate.test(&value).to_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N1, N2};
    use crate::dispatch::Id;
    use crate::typeclass::{
        all_of, any_of, chain, contains, equal, find, flatten, fold_left, length, less, lift, max,
        transform,
    };
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(1), true)]
    #[case(Some(1), Some(2), false)]
    #[case(None, Some(2), false)]
    #[case(None, None, true)]
    fn equality_compares_contents(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(equal(&left, &right), expected);
        assert_eq!(equal(&right, &left), expected);
    }

    #[rstest]
    fn contents_compare_across_tags() {
        assert!(equal(&Some(N1), &Some(1usize)));
        assert!(!equal(&Some(N1), &Some(N2)));
        assert!(!equal(&Some('a'), &Some(1.0f64)));
    }

    #[rstest]
    fn none_orders_first() {
        assert!(less(&None::<u8>, &Some(0u8)));
        assert!(!less(&Some(0u8), &None::<u8>));
        assert!(less(&Some(1u8), &Some(2u8)));
        assert_eq!(max(Some(3i32), None::<i32>), Some(3));
    }

    #[rstest]
    fn monad_operations() {
        let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
        assert_eq!(chain(Some(8), halve), Some(4));
        assert_eq!(chain(Some(3), halve), None);
        assert_eq!(chain(lift::<StdOptionTag, _>(6), halve), halve(6));
        assert_eq!(flatten(Some(Some('x'))), Some('x'));
        assert_eq!(flatten(Some(None::<char>)), None);
        assert_eq!(transform(Some(5), Id), Some(5));
    }

    #[rstest]
    fn folds_and_searches_see_at_most_one_element() {
        assert_eq!(fold_left(Some(4), 10, |total: i32, n: i32| total + n), 14);
        assert_eq!(fold_left(None, 10, |total: i32, n: i32| total + n), 10);
        assert_eq!(length(Some('z')), 1);
        assert_eq!(find(Some(7u8), 7u8), Some(7));
        assert!(contains(Some(7u8), 7u8));
        assert!(!any_of(None::<i32>, |n: &i32| *n > 0));
        assert!(all_of(None::<i32>, |n: &i32| *n > 0));
    }
}
