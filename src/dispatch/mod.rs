//! The dispatch core.
//!
//! This module holds the machinery every operation in the crate is built
//! on:
//!
//! - [`Tagged`] / [`Tag`]: mapping a value to the key its implementations
//!   are registered under
//! - [`True`] / [`False`] / [`Bool`]: type-level booleans used to select
//!   between implementations
//! - [`SameId`]: type-level comparison of tag identities
//! - [`Common`] / [`Embed`]: bridging binary operations across tags
//! - [`Convert`] / [`Make`]: explicit conversions and tag-directed
//!   construction
//! - [`Function`] / [`Predicate`]: the callables algorithms accept
//!
//! ## How an operation is dispatched
//!
//! Each operation has an implementation trait implemented *on the tag*
//! (`EqualImpl<X, Y> for TupleTag`) and a public dispatcher trait with a
//! single blanket implementation (`Equal<Y> for X`). The dispatcher resolves
//! the operand tags, asks [`Common`] how they relate, and forwards to the
//! implementation trait of the resulting tag, converting operands through
//! [`Embed`] on the way when needed.

mod common;
mod convert;
mod function;
mod id;
mod tag;
mod when;

pub use common::{
    Common, Embed, EmbedBoth, EmbedLeft, EmbedRight, Embedded, RelationOf, Same, Unrelated,
};
pub use convert::{Convert, Make, make, to};
pub use function::{
    Always, CallOutput, Complement, Compose, Function, Id, Predicate, TestOutput, compose,
};
pub use id::{
    B0, B1, BAny, Bit, IdCons, IdNil, LessId, LessIdOutput, SameId, SameIdOutput, TagId,
};
pub use tag::{EmbedsOf, Tag, TagOf, Tagged, Top, same_tag, tag_name};
pub use when::{And, Bool, False, If, IsFalse, IsTrue, Not, Or, True};

pub(crate) use tag::builtin_tag;
