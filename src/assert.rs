//! Assertions that pick compile time or runtime from the type of the
//! condition.
//!
//! | Macro              | Condition                  | Failure                       |
//! |--------------------|----------------------------|-------------------------------|
//! | [`static_check!`]  | must have type `True`      | compile error                 |
//! | [`const_check!`]   | const-evaluable `bool`     | compile error                 |
//! | [`runtime_check!`] | any [`Logical`]            | message on stderr, then abort |
//! | [`check!`]         | `True`, `False` or `bool`  | whichever applies             |
//!
//! A failed runtime check never unwinds. It prints a [`CheckFailure`] to
//! standard error and calls [`std::process::abort`]. With the `tracing`
//! feature the failure is also emitted as a `tracing` event at `ERROR`
//! level, carrying `expression`, `file` and `line` fields.
//!
//! The `disable-assertions` feature turns [`runtime_check!`] and the
//! runtime half of [`check!`] into no-ops whose condition is never
//! evaluated. Compile-time checks cannot be disabled.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, N2};
//! use polytag::typeclass::{equal, less};
//! use polytag::{check, const_check, runtime_check, static_check};
//!
//! static_check!(less(&N1, &N2));
//! const_check!(1 + 1 == 2);
//!
//! let count = 3i32;
//! runtime_check!(count > 2, "count was {}", count);
//! check!(equal(&N2, &N2));
//! check!(equal(&count, &3i32));
//! ```
//!
//! ```rust,compile_fail
//! use polytag::datatype::{N1, N2};
//! use polytag::static_check;
//! use polytag::typeclass::less;
//!
//! static_check!(less(&N2, &N1));
//! ```
//!
//! ```rust,compile_fail
//! use polytag::datatype::{N1, N2};
//! use polytag::check;
//! use polytag::typeclass::equal;
//!
//! check!(equal(&N1, &N2));
//! ```

use std::fmt;

use crate::dispatch::{IsTrue, True};
use crate::typeclass::Logical;

/// A failed runtime check: what was checked, where, and an optional
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// The source text of the condition.
    pub expression: &'static str,
    /// The file containing the check.
    pub file: &'static str,
    /// The line of the check.
    pub line: u32,
    /// The formatted message given to the macro, if any.
    pub message: Option<String>,
}

impl CheckFailure {
    /// A failure without a message.
    pub const fn new(expression: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            expression,
            file,
            line,
            message: None,
        }
    }

    /// Attaches a message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}:{}: check failed: `{}`",
            self.file, self.line, self.expression
        )?;
        if let Some(message) = &self.message {
            write!(formatter, ": {message}")?;
        }
        Ok(())
    }
}

/// Whether runtime checks are compiled in.
pub const fn assertions_enabled() -> bool {
    !cfg!(feature = "disable-assertions")
}

/// Reports `failure` and aborts the process.
#[cold]
pub fn report_and_abort(failure: &CheckFailure) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        expression = failure.expression,
        file = failure.file,
        line = failure.line,
        message = failure.message.as_deref().unwrap_or_default(),
        "runtime check failed"
    );
    eprintln!("{failure}");
    std::process::abort()
}

/// The runtime half of [`check!`], dispatched on the condition's type.
#[diagnostic::on_unimplemented(
    message = "`check!` needs a `True`, `False` or `bool` condition, found `{Self}`",
    note = "a condition of type `False` fails at compile time"
)]
pub trait Check {
    /// Reports `failure()` and aborts if the condition does not hold.
    fn check(self, failure: impl FnOnce() -> CheckFailure);
}

impl Check for True {
    fn check(self, _: impl FnOnce() -> CheckFailure) {}
}

impl Check for bool {
    fn check(self, failure: impl FnOnce() -> CheckFailure) {
        if !self {
            report_and_abort(&failure());
        }
    }
}

/// Reports the failure if `condition` is false.
#[doc(hidden)]
pub fn verify<L: Logical>(condition: &L, failure: impl FnOnce() -> CheckFailure) {
    if !condition.to_bool() {
        report_and_abort(&failure());
    }
}

/// Accepts only `True`.
#[doc(hidden)]
pub fn require_true<L: IsTrue>(_: L) {}

/// Checks a condition of type `True` at compile time.
///
/// Any other type, `False` and `bool` included, is a compile error.
#[macro_export]
macro_rules! static_check {
    ($condition:expr $(,)?) => {
        $crate::assert::require_true($condition)
    };
}

/// Checks a const-evaluable `bool` at compile time.
#[macro_export]
macro_rules! const_check {
    ($($condition:tt)+) => {
        $crate::static_assertions::const_assert!($($condition)+);
    };
}

/// Checks a runtime condition; prints and aborts when it is false.
///
/// The optional trailing arguments are a `format!` message.
#[macro_export]
macro_rules! runtime_check {
    ($condition:expr $(,)?) => {
        if $crate::assert::assertions_enabled() {
            $crate::assert::verify(&$condition, || {
                $crate::assert::CheckFailure::new(stringify!($condition), file!(), line!())
            });
        }
    };
    ($condition:expr, $($message:tt)+) => {
        if $crate::assert::assertions_enabled() {
            $crate::assert::verify(&$condition, || {
                $crate::assert::CheckFailure::new(stringify!($condition), file!(), line!())
                    .with_message(format!($($message)+))
            });
        }
    };
}

/// Checks a condition at compile time when its type decides it, at
/// runtime otherwise.
///
/// `True` passes, `False` is a compile error and `bool` becomes a
/// [`runtime_check!`].
#[macro_export]
macro_rules! check {
    ($condition:expr $(,)?) => {
        if $crate::assert::assertions_enabled() {
            $crate::assert::Check::check($condition, || {
                $crate::assert::CheckFailure::new(stringify!($condition), file!(), line!())
            });
        }
    };
}

/// Asserts that a tag models every listed concept.
///
/// ```rust
/// use polytag::assert_models;
/// use polytag::datatype::{OptionalTag, TupleTag};
/// use polytag::typeclass::{Comparable, Foldable, Monad, Searchable};
///
/// assert_models!(TupleTag: Comparable, Foldable, Searchable, Monad);
/// assert_models!(OptionalTag: Monad);
/// ```
#[macro_export]
macro_rules! assert_models {
    ($tag:ty: $($concept:path),+ $(,)?) => {
        $crate::static_assertions::assert_impl_all!($tag: $($concept),+);
    };
}
