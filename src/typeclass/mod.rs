//! Concepts and the operations defined on them.
//!
//! Each concept is a marker trait implemented on a tag, with one
//! implementation trait per operation (`EqualImpl`, `UnconsImpl`, ...). The
//! free functions in this module dispatch on the tags of their arguments
//! and forward to those implementations.
//!
//! - [`Logical`]: runtime and compile-time truth values, branching, loops
//! - [`Constant`]: values determined by their type
//! - [`Comparable`] / [`Orderable`]: equality and strict ordering
//! - [`Monoid`] / [`Group`] / [`Ring`] / [`IntegralDomain`]: arithmetic,
//!   with truncating division on integral domains
//! - [`Functor`] / [`Applicative`] / [`Monad`]: mapping, lifting and
//!   flattening
//! - [`MonadPlus`]: an empty structure and concatenation
//! - [`Iterable`]: structures taken apart element by element
//! - [`Foldable`] / [`Searchable`]: reductions and searches, either native
//!   or derived from `Iterable`
//!
//! A concept's supertraits are its requirements. Implementing
//! `Orderable` for a tag that is not `Comparable` does not compile, so
//! every tag implementing a concept is checked once, where it is declared.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, N2, N3};
//! use polytag::dispatch::{Id, True};
//! use polytag::tuple;
//! use polytag::typeclass::{equal, fold_left, less, transform};
//!
//! let _: True = less(&N1, &N3);
//! let total = fold_left(tuple!(1, 2, 3), 0, |sum: i32, n: i32| sum + n);
//! assert_eq!(total, 6);
//! let _: True = equal(&transform(tuple!(N1, N2), Id), &tuple!(N1, N2));
//! ```

mod applicative;
mod comparable;
mod constant;
mod foldable;
mod functor;
mod iterable;
mod logical;
mod monad;
mod monad_plus;
mod monoid;
mod orderable;
mod searchable;

pub use applicative::{Applicative, ApplyTo, LiftImpl, ap, lift};
pub use comparable::{
    Comparable, Comparing, Equal, EqualBy, EqualFn, EqualImpl, EqualOutput, EqualTo, comparing,
    equal, equal_to, not_equal,
};
pub use constant::{Constant, value};
pub use foldable::{
    CountFn, CountIf, FoldFromIterable, FoldLeft, FoldLeftBy, FoldLeftImpl, FoldLeftStep,
    FoldRight, FoldRightBy, FoldRightImpl, FoldRightStep, Foldable, ForEach, NativeFold, PushFn,
    count_if, fold, fold_left, fold_right, for_each, length, product, sum, to_vec,
};
pub use functor::{
    AdjustIf, Functor, Transform, TransformImpl, TransformOutput, adjust_if, fill, replace_if,
    transform,
};
pub use iterable::{
    AtImpl, DropFrontImpl, IsEmpty, IsEmptyImpl, Iterable, Last, LastStep, Uncons, UnconsImpl, at,
    drop_front, head, is_empty, last, tail, uncons,
};
pub use logical::{
    AndOutput, ApplyIf, EvalIf, Logical, LogicalAnd, LogicalNot, LogicalOr, OrOutput, Select,
    WhileStep, and_, eval_if, if_, not_, or_, to_bool, until_, while_,
};
pub use monad::{Chain, Flatten, FlattenImpl, Monad, chain, flatten};
pub use monad_plus::{
    ConcatImpl, ConcatOutput, CycleBy, EmptyImpl, MonadPlus, concat, cycle, empty, replicate,
};
pub use monoid::{
    Group, IntegralDomain, Minus, MinusBy, MinusImpl, MinusOutput, Monoid, Mult, MultBy, MultFn,
    MultImpl, MultOutput, NegateImpl, OneImpl, Plus, PlusBy, PlusFn, PlusImpl, PlusOutput, PowerBy,
    Quot, QuotBy, QuotImpl, QuotOutput, Rem, RemBy, RemImpl, RemOutput, Ring, ZeroImpl, minus,
    mult, negate, one, plus, power, quot, rem, zero,
};
pub use orderable::{
    Less, LessBy, LessFn, LessImpl, LessOutput, LessThan, Orderable, Ordering, greater,
    greater_equal, less, less_equal, less_than, max, min, ordering,
};
pub use searchable::{
    AnyHit, AnyOf, AnyOfBy, AnyOfImpl, AnyOfOutput, AnyStep, ContainedIn, ContainsOutput, FindIf,
    FindIfBy, FindIfImpl, FindStep, FoundStep, NativeSearch, SearchFromIterable, Searchable,
    all_of, any_of, contains, find, find_if, in_, is_subset, none_of,
};
