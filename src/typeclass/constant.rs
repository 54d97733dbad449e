//! Compile-time constants viewed as values.
//!
//! A [`Constant`] is a zero-sized value whose type determines a runtime
//! value: [`True`](crate::dispatch::True) is `true`, the natural
//! [`N3`](crate::datatype::N3) is `3usize`. Constants are what allow the
//! same algorithm to produce a type-level answer for type-level inputs and
//! a runtime answer for runtime inputs.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::N42;
//! use polytag::dispatch::False;
//! use polytag::typeclass::value;
//!
//! assert_eq!(value(&N42), 42usize);
//! assert!(!value(&False));
//! ```

use crate::dispatch::Tagged;

/// A value fully determined by its type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a compile-time Constant",
    note = "only `True`, `False` and the naturals `Z`/`S<N>` are Constants"
)]
pub trait Constant: Tagged + Copy + Default {
    /// The runtime type of the constant.
    type Value;

    /// The runtime value.
    fn value(&self) -> Self::Value;
}

/// Returns the runtime value of a [`Constant`].
pub fn value<C: Constant>(constant: &C) -> C::Value {
    constant.value()
}
