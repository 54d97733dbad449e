//! Deferred computations.
//!
//! A [`Lazy`] holds a computation that has not run yet. `transform` and
//! `chain` extend the computation without running it; [`Lazy::eval`] runs
//! the whole pipeline once, consuming it.
//!
//! Nothing is memoized: a `Lazy` is evaluated at most once because `eval`
//! takes it by value.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use polytag::datatype::{LazyTag, lazy};
//! use polytag::typeclass::{chain, lift, transform};
//!
//! let runs = Cell::new(0);
//! let pending = transform(
//!     lazy(|| {
//!         runs.set(runs.get() + 1);
//!         20
//!     }),
//!     |n: i32| n + 1,
//! );
//! let pending = chain(pending, |n: i32| lift::<LazyTag, _>(n * 2));
//! assert_eq!(runs.get(), 0);
//! assert_eq!(pending.eval(), 42);
//! assert_eq!(runs.get(), 1);
//! ```

use std::fmt;

use crate::dispatch::{Function, Tagged, builtin_tag};
use crate::typeclass::{Applicative, FlattenImpl, Functor, LiftImpl, Monad, TransformImpl};

/// The tag of [`Lazy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LazyTag;

builtin_tag!(LazyTag => [0 0 1 0 1 1 0 0]);

/// A computation that produces a value when run.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a deferred computation",
    note = "build lazy values with `polytag::datatype::lazy`"
)]
pub trait Thunk {
    /// The value produced.
    type Output;

    /// Runs the computation.
    fn run(self) -> Self::Output;
}

/// A closure taking no arguments.
#[derive(Clone, Copy)]
pub struct Defer<F>(F);

impl<F: FnOnce() -> X, X> Thunk for Defer<F> {
    type Output = X;

    fn run(self) -> X {
        (self.0)()
    }
}

/// A value that is already computed.
#[derive(Clone, Copy)]
pub struct Ready<X>(X);

impl<X> Thunk for Ready<X> {
    type Output = X;

    fn run(self) -> X {
        self.0
    }
}

/// `function` applied to the result of `thunk`.
#[derive(Clone, Copy)]
pub struct Then<T, G> {
    thunk: T,
    function: G,
}

impl<T: Thunk, G: Function<(T::Output,)>> Thunk for Then<T, G> {
    type Output = G::Output;

    fn run(mut self) -> G::Output {
        let value = self.thunk.run();
        self.function.apply((value,))
    }
}

/// A computation producing a [`Lazy`], run through both layers.
#[derive(Clone, Copy)]
pub struct Joined<T>(T);

impl<T, U> Thunk for Joined<T>
where
    T: Thunk<Output = Lazy<U>>,
    U: Thunk,
{
    type Output = U::Output;

    fn run(self) -> U::Output {
        self.0.run().eval()
    }
}

/// A deferred computation. Built by [`lazy`] or by `lift::<LazyTag, _>`.
#[derive(Clone, Copy)]
pub struct Lazy<T>(T);

impl<T> Tagged for Lazy<T> {
    type Tag = LazyTag;
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Lazy(<pending>)")
    }
}

/// Defers `thunk` until [`Lazy::eval`].
pub const fn lazy<F>(thunk: F) -> Lazy<Defer<F>> {
    Lazy(Defer(thunk))
}

impl<T: Thunk> Lazy<T> {
    /// Runs the computation.
    pub fn eval(self) -> T::Output {
        self.0.run()
    }
}

impl Functor for LazyTag {}

impl<T, F> TransformImpl<Lazy<T>, F> for LazyTag
where
    T: Thunk,
    F: Function<(T::Output,)> + Clone,
{
    type Output = Lazy<Then<T, F>>;

    fn transform(xs: Lazy<T>, function: &mut F) -> Self::Output {
        Lazy(Then {
            thunk: xs.0,
            function: function.clone(),
        })
    }
}

impl Applicative for LazyTag {}

impl<X> LiftImpl<X> for LazyTag {
    type Output = Lazy<Ready<X>>;

    fn lift(value: X) -> Self::Output {
        Lazy(Ready(value))
    }
}

impl Monad for LazyTag {}

impl<T, U> FlattenImpl<Lazy<T>> for LazyTag
where
    T: Thunk<Output = Lazy<U>>,
    U: Thunk,
{
    type Output = Lazy<Joined<T>>;

    fn flatten(xss: Lazy<T>) -> Self::Output {
        Lazy(Joined(xss.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N2, N3, N5};
    use crate::typeclass::{chain, flatten, lift, plus, transform};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn nothing_runs_before_eval() {
        let runs = Cell::new(0);
        let pending = lazy(|| {
            runs.set(runs.get() + 1);
            'x'
        });
        let pending = transform(pending, |c: char| c.to_ascii_uppercase());
        assert_eq!(runs.get(), 0);
        assert_eq!(pending.eval(), 'X');
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(4, 25)]
    #[case(-6, 25)]
    fn transforms_compose_in_order(#[case] start: i32, #[case] expected: i32) {
        let pending = transform(lazy(move || start), |n: i32| n + 1);
        let pending = transform(pending, |n: i32| n * n);
        assert_eq!(pending.eval(), expected);
    }

    #[rstest]
    fn monad_laws_hold_after_eval() {
        let double = |n: u32| lift::<LazyTag, _>(n * 2);
        assert_eq!(chain(lift::<LazyTag, _>(7u32), double).eval(), double(7).eval());
        assert_eq!(
            chain(lazy(|| 7u32), |n: u32| lift::<LazyTag, _>(n)).eval(),
            7
        );
        assert_eq!(flatten(lazy(|| lazy(|| "inner"))).eval(), "inner");
    }

    #[rstest]
    fn results_may_be_type_level() {
        let pending = transform(lazy(|| N2), |n: N2| plus(n, N3));
        let _: N5 = pending.eval();
    }
}
