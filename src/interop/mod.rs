//! Standard library types in the tag system.
//!
//! This crate does not own `Option` or `Vec`, but both are given a tag
//! here and take part in dispatch like any builtin structure:
//!
//! - `Option<T>` ([`StdOptionTag`]): Comparable, Orderable, Functor,
//!   Applicative, Monad, Foldable and Searchable
//! - `Vec<T>` ([`VecTag`]): the same concepts, with lexicographic ordering
//!
//! Which variant an `Option` holds and how long a `Vec` is are runtime
//! facts, so every answer about them is a `bool` or an `Option`, never a
//! type-level boolean. For a compile-time optional use
//! [`Just`](crate::datatype::Just) and [`Nothing`](crate::datatype::Nothing).
//!
//! # Examples
//!
//! ```rust
//! use polytag::interop::VecTag;
//! use polytag::typeclass::{chain, equal, find_if, less, lift, sum, transform};
//!
//! assert!(equal(&Some(3i32), &Some(3i32)));
//! assert!(less(&None::<i32>, &Some(0i32)));
//! assert_eq!(transform(Some(2), |n: i32| n * 10), Some(20));
//!
//! let numbers = vec![3, 1, 4];
//! assert_eq!(sum::<i32, _>(numbers.clone()), 8);
//! assert_eq!(find_if(numbers.clone(), |n: &i32| *n > 3), Some(4));
//! assert_eq!(chain(numbers, |n: i32| vec![n; 2]), vec![3, 3, 1, 1, 4, 4]);
//! assert_eq!(lift::<VecTag, _>('x'), vec!['x']);
//! ```

mod option;
mod vec;

pub use option::StdOptionTag;
pub use vec::VecTag;
