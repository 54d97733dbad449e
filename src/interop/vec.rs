//! `Vec<T>` under [`VecTag`].

use crate::datatype::{Cons, HList};
use crate::dispatch::{Convert, Function, Predicate, Tagged, builtin_tag};
use crate::typeclass::{
    AnyOfImpl, Applicative, Comparable, Equal, EqualImpl, FindIfImpl, FlattenImpl, FoldLeft,
    FoldLeftImpl, FoldRightImpl, Foldable, Functor, Less, LessImpl, LiftImpl, Logical, Monad,
    NativeFold, NativeSearch, Orderable, PushFn, Searchable, TransformImpl, to_vec,
};

/// The tag of `Vec<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecTag;

builtin_tag!(VecTag => [0 0 1 1 0 0 0 1]);

impl<T> Tagged for Vec<T> {
    type Tag = VecTag;
}

impl Comparable for VecTag {}

impl<A: Equal<B>, B> EqualImpl<Vec<A>, Vec<B>> for VecTag {
    type Output = bool;

    fn equal(left: &Vec<A>, right: &Vec<B>) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .zip(right)
                .all(|(left, right)| left.equal_to(right).to_bool())
    }
}

impl Orderable for VecTag {}

impl<A: Less<B>, B: Less<A>> LessImpl<Vec<A>, Vec<B>> for VecTag {
    type Output = bool;

    fn less(left: &Vec<A>, right: &Vec<B>) -> bool {
        for (left, right) in left.iter().zip(right) {
            if left.less_than(right).to_bool() {
                return true;
            }
            if right.less_than(left).to_bool() {
                return false;
            }
        }
        left.len() < right.len()
    }
}

impl Functor for VecTag {}

impl<T, F: Function<(T,)>> TransformImpl<Vec<T>, F> for VecTag {
    type Output = Vec<F::Output>;

    fn transform(xs: Vec<T>, function: &mut F) -> Self::Output {
        xs.into_iter()
            .map(|element| function.apply((element,)))
            .collect()
    }
}

impl Applicative for VecTag {}

impl<X> LiftImpl<X> for VecTag {
    type Output = Vec<X>;

    fn lift(value: X) -> Vec<X> {
        vec![value]
    }
}

impl Monad for VecTag {}

impl<T> FlattenImpl<Vec<Vec<T>>> for VecTag {
    type Output = Vec<T>;

    fn flatten(xss: Vec<Vec<T>>) -> Vec<T> {
        xss.into_iter().flatten().collect()
    }
}

impl Foldable for VecTag {
    type Mcd = NativeFold;
}

impl<T, S, F: Function<(S, T), Output = S>> FoldLeftImpl<Vec<T>, S, F> for VecTag {
    type Output = S;

    fn fold_left(xs: Vec<T>, state: S, function: &mut F) -> S {
        xs.into_iter()
            .fold(state, |state, element| function.apply((state, element)))
    }
}

impl<T, S, F: Function<(T, S), Output = S>> FoldRightImpl<Vec<T>, S, F> for VecTag {
    type Output = S;

    fn fold_right(xs: Vec<T>, state: S, function: &mut F) -> S {
        xs.into_iter()
            .rev()
            .fold(state, |state, element| function.apply((element, state)))
    }
}

impl Searchable for VecTag {
    type Mcd = NativeSearch;
}

impl<T, P: Predicate<T>> FindIfImpl<Vec<T>, P> for VecTag {
    type Output = Option<T>;

    fn find_if(xs: Vec<T>, predicate: &mut P) -> Option<T> {
        xs.into_iter()
            .find(|element| predicate.test(element).to_bool())
    }
}

impl<T, P: Predicate<T>> AnyOfImpl<Vec<T>, P> for VecTag {
    type Output = bool;

    fn any_of(xs: Vec<T>, predicate: &mut P) -> bool {
        xs.iter().any(|element| predicate.test(element).to_bool())
    }
}

impl<H, T: HList> Convert<VecTag> for Cons<H, T>
where
    Self: FoldLeft<Vec<H>, PushFn<H>, Output = Vec<H>>,
{
    type Output = Vec<H>;

    fn convert(self) -> Vec<H> {
        to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N1, N3};
    use crate::dispatch::to;
    use crate::tuple;
    use crate::typeclass::{
        ap, chain, equal, flatten, fold_left, fold_right, less, lift, none_of, product, transform,
    };
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![1], true)]
    #[case(vec![1, 2], vec![1, 3], true)]
    #[case(vec![1, 2], vec![1, 2], false)]
    #[case(vec![2], vec![1, 9], false)]
    #[case(vec![1], vec![1, 0], true)]
    fn ordering_is_lexicographic(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(less(&left, &right), expected);
    }

    #[rstest]
    fn equality_needs_equal_lengths() {
        assert!(equal(&vec![1i32, 2], &vec![1i32, 2]));
        assert!(!equal(&vec![1i32, 2], &vec![1i32]));
        assert!(equal(&vec![N1, N1], &vec![1usize, 1]));
        assert!(!equal(&vec![N3], &vec![N1]));
    }

    #[rstest]
    fn fold_order() {
        let left = fold_left(vec!['a', 'b', 'c'], String::new(), |mut text: String, c: char| {
            text.push(c);
            text
        });
        let right = fold_right(vec!['a', 'b', 'c'], String::new(), |c: char, mut text: String| {
            text.push(c);
            text
        });
        assert_eq!((left.as_str(), right.as_str()), ("abc", "cba"));
        assert_eq!(product::<i64, _>(vec![2i64, 3, 7]), 42);
    }

    #[rstest]
    fn functor_and_monad() {
        assert_eq!(transform(vec![1, 2], |n: i32| n.to_string()), vec!["1", "2"]);
        assert_eq!(flatten(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
        assert_eq!(chain(lift::<VecTag, _>(2), |n: i32| vec![n, -n]), vec![2, -2]);
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 2];
        assert_eq!(ap(functions, vec![10, 20]), vec![11, 21, 20, 40]);
        assert!(none_of(vec![1, 3, 5], |n: &i32| n % 2 == 0));
    }

    #[rstest]
    fn homogeneous_tuples_convert() {
        assert_eq!(to::<VecTag, _>(tuple!(3, 1, 2)), vec![3, 1, 2]);
    }
}
