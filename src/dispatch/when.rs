//! Type-level booleans.
//!
//! [`True`] and [`False`] are zero-sized values whose *type* carries the
//! truth value. They are the selector used throughout the crate to pick one
//! implementation over another: a trait is implemented once for `True` and
//! once for `False`, and the compiler picks the branch while resolving the
//! call. Only the selected branch contributes to the result type.
//!
//! # Examples
//!
//! ```rust
//! use polytag::dispatch::{And, Bool, False, If, Not, True};
//!
//! assert!(<And<True, Not<False>> as Bool>::VALUE);
//!
//! let picked: If<True, u8, String> = 7;
//! assert_eq!(picked, 7u8);
//! ```

use std::fmt;

/// The type-level `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct True;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct False;

/// A boolean known while the program is being compiled.
///
/// Implemented only by [`True`] and [`False`]. The associated types form a
/// small boolean algebra evaluated by the trait solver.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a compile-time boolean",
    label = "expected `True` or `False` here",
    note = "operations that decide structure (set membership, map lookup, filtering) need a result known at compile time"
)]
pub trait Bool: crate::typeclass::Logical + Copy + Default + fmt::Debug + 'static {
    /// The runtime value of this boolean.
    const VALUE: bool;

    /// Negation.
    type Not: Bool;

    /// Conjunction with `B`.
    type And<B: Bool>: Bool;

    /// Disjunction with `B`.
    type Or<B: Bool>: Bool;

    /// `Then` if this is `True`, `Else` otherwise.
    type If<Then, Else>;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = Self;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = Self;
    type Or<B: Bool> = B;
    type If<Then, Else> = Else;
}

/// `Then` when `C` is [`True`], `Else` when it is [`False`].
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

/// Type-level conjunction.
pub type And<A, B> = <A as Bool>::And<B>;

/// Type-level disjunction.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// Type-level negation.
pub type Not<A> = <A as Bool>::Not;

/// Implemented only by [`True`].
///
/// Used as a bound to reject a program whose condition is statically false.
#[diagnostic::on_unimplemented(
    message = "condition is statically false",
    label = "this evaluates to `{Self}` at compile time",
    note = "a compile-time check requires the expression to have type `True`"
)]
pub trait IsTrue: Bool {}

impl IsTrue for True {}

/// Implemented only by [`False`].
#[diagnostic::on_unimplemented(
    message = "condition is statically true",
    label = "this evaluates to `{Self}` at compile time"
)]
pub trait IsFalse: Bool {}

impl IsFalse for False {}

impl fmt::Display for True {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "true")
    }
}

impl fmt::Display for False {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "false")
    }
}

impl From<True> for bool {
    fn from(_: True) -> Self {
        true
    }
}

impl From<False> for bool {
    fn from(_: False) -> Self {
        false
    }
}
