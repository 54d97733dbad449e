//! # polytag
//!
//! Heterogeneous data structures and a uniform algebra of operations over
//! them, dispatched at compile time on type-level tags.
//!
//! ## Overview
//!
//! Every value maps to a *tag*, and every operation (`equal`, `fold_left`,
//! `find_if`, `transform`, ...) is a family of implementations registered on
//! tags. Calling an operation selects the implementation from the types of
//! its arguments, so there is no runtime dispatch at all:
//!
//! - **Dispatch**: tags, type-level booleans, cross-tag bridging through
//!   embeddings, function objects
//! - **Concepts**: Logical, Comparable, Orderable, Monoid/Group/Ring,
//!   Functor/Applicative/Monad, Iterable, Foldable, Searchable
//! - **Data types**: compile-time booleans, naturals and strings, tuples,
//!   pairs, optionals, sets, maps, ranges, runtime text and user structs
//! - **Interop**: `Option` and `Vec` under their own tags
//! - **Assertions**: checks that run at compile time when the condition's
//!   type decides it, at runtime otherwise
//!
//! When an answer is decided by types alone it is a type: `equal(&N1, &N2)`
//! has type [`False`](dispatch::False), and searching a tuple for a key
//! produces [`Just`](datatype::Just) or [`Nothing`](datatype::Nothing)
//! depending on where the key is.
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Tag, Tagged, Struct)]`
//! - `serde`: `Serialize` for tuples, pairs, optionals, strings and constants
//! - `tracing`: failed runtime checks are also emitted as `tracing` events
//! - `disable-assertions`: runtime checks are compiled out
//! - `full`: `derive`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use polytag::prelude::*;
//! use polytag::{set, string, tuple};
//!
//! let mixed = tuple!(1.5f64, 'x', N3, "four");
//! let _: Just<N3> = find_if(mixed, equal_to(N3));
//! let _: Nothing = find_if(mixed, equal_to(N4));
//! assert_eq!(length(mixed), 4);
//!
//! // A natural meets a runtime integer of any width at runtime.
//! assert!(equal(&N3, &3i64));
//! assert!(less(&N3, &200u8));
//!
//! let _: True = equal(&set!(N1, N2), &set!(N2, N1));
//! let _: True = equal(&set!(string!("key"), N1), &set!(N1, string!("key")));
//! assert_eq!(at(range(N4, N90), N46), N50);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![recursion_limit = "256"]

extern crate self as polytag;

#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use static_assertions;

#[cfg(feature = "derive")]
pub use polytag_derive::{Struct, Tag, Tagged};

pub use polytag_derive::string;

/// Prelude module for convenient imports.
///
/// Re-exports the dispatch vocabulary, every concept and operation, and
/// every data type.
///
/// # Usage
///
/// ```rust
/// use polytag::prelude::*;
///
/// let _: True = less(&N1, &N2);
/// ```
pub mod prelude {
    pub use crate::datatype::*;
    pub use crate::dispatch::{
        Bool, Common, Convert, Embed, False, Function, Id, Make, Predicate, Tag, TagOf, Tagged,
        True, make, same_tag, to,
    };
    pub use crate::interop::{StdOptionTag, VecTag};
    pub use crate::typeclass::*;
}

pub mod assert;
pub mod datatype;
pub mod dispatch;
pub mod error;
pub mod interop;
pub mod typeclass;
