//! Logical values and branching.
//!
//! A [`Logical`] is either a runtime `bool` or a type-level
//! [`True`]/[`False`]. Every branching combinator works on both: with a
//! type-level condition only the selected branch is used and the branches
//! may have unrelated types; with a runtime condition both branches must
//! agree on a type.
//!
//! `Logical` is a trait on values rather than on tags because `True` and
//! `False` share the tag [`BoolConstantTag`](crate::datatype::BoolConstantTag)
//! but must select different implementations.
//!
//! # Laws
//!
//! For type-level and runtime conditions alike:
//!
//! - `if_(True, a, b) == a` and `if_(False, a, b) == b`
//! - `not_(not_(c)) == c`
//! - `and_then` and `or_else` only evaluate their right operand when the
//!   left one does not already decide the result
//!
//! # Examples
//!
//! ```rust
//! use polytag::dispatch::{False, True};
//! use polytag::typeclass::{eval_if, if_, while_};
//!
//! // Branches of different types are fine when the condition is static.
//! let number: i32 = if_(True, 1, "one");
//! let text: &str = if_(False, 1, "one");
//! assert_eq!((number, text), (1, "one"));
//!
//! // Only the selected branch runs.
//! let value = eval_if(2 > 1, || 10, || 0);
//! assert_eq!(value, 10);
//!
//! assert_eq!(while_(|n: &u32| *n < 100, 1, |n: u32| n * 3), 243);
//! ```

use crate::dispatch::{False, Function, Predicate, True};

// =============================================================================
// Logical
// =============================================================================

/// A truth value known either at compile time or at runtime.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Logical",
    label = "expected `bool`, `True` or `False`",
    note = "conditions and predicate results must be `bool`, `polytag::dispatch::True` or `polytag::dispatch::False`"
)]
pub trait Logical: Sized {
    /// The runtime value of this truth value.
    fn to_bool(&self) -> bool;
}

impl Logical for True {
    fn to_bool(&self) -> bool {
        true
    }
}

impl Logical for False {
    fn to_bool(&self) -> bool {
        false
    }
}

impl Logical for bool {
    fn to_bool(&self) -> bool {
        *self
    }
}

/// Returns the runtime value of a [`Logical`].
pub fn to_bool<L: Logical>(logical: &L) -> bool {
    logical.to_bool()
}

// =============================================================================
// Negation, conjunction, disjunction
// =============================================================================

/// Logical negation.
pub trait LogicalNot: Logical {
    /// The negated truth value.
    type Output: Logical;

    /// Negates.
    fn not(self) -> Self::Output;
}

impl LogicalNot for True {
    type Output = False;

    fn not(self) -> False {
        False
    }
}

impl LogicalNot for False {
    type Output = True;

    fn not(self) -> True {
        True
    }
}

impl LogicalNot for bool {
    type Output = Self;

    fn not(self) -> Self {
        !self
    }
}

/// Conjunction with a lazily computed right operand.
pub trait LogicalAnd<R: Logical>: Logical {
    /// The conjunction.
    type Output: Logical;

    /// Evaluates `rhs` only if `self` does not already decide the result.
    fn and_then<F: FnOnce() -> R>(self, rhs: F) -> Self::Output;
}

impl<R: Logical> LogicalAnd<R> for True {
    type Output = R;

    fn and_then<F: FnOnce() -> R>(self, rhs: F) -> R {
        rhs()
    }
}

impl<R: Logical> LogicalAnd<R> for False {
    type Output = Self;

    fn and_then<F: FnOnce() -> R>(self, _: F) -> Self {
        Self
    }
}

impl<R: Logical> LogicalAnd<R> for bool {
    type Output = Self;

    fn and_then<F: FnOnce() -> R>(self, rhs: F) -> Self {
        self && rhs().to_bool()
    }
}

/// Disjunction with a lazily computed right operand.
pub trait LogicalOr<R: Logical>: Logical {
    /// The disjunction.
    type Output: Logical;

    /// Evaluates `rhs` only if `self` does not already decide the result.
    fn or_else<F: FnOnce() -> R>(self, rhs: F) -> Self::Output;
}

impl<R: Logical> LogicalOr<R> for True {
    type Output = Self;

    fn or_else<F: FnOnce() -> R>(self, _: F) -> Self {
        Self
    }
}

impl<R: Logical> LogicalOr<R> for False {
    type Output = R;

    fn or_else<F: FnOnce() -> R>(self, rhs: F) -> R {
        rhs()
    }
}

impl<R: Logical> LogicalOr<R> for bool {
    type Output = Self;

    fn or_else<F: FnOnce() -> R>(self, rhs: F) -> Self {
        self || rhs().to_bool()
    }
}

/// The conjunction of `L` and `R`.
pub type AndOutput<L, R> = <L as LogicalAnd<R>>::Output;

/// The disjunction of `L` and `R`.
pub type OrOutput<L, R> = <L as LogicalOr<R>>::Output;

/// Negates a [`Logical`].
pub fn not_<L: LogicalNot>(logical: L) -> L::Output {
    logical.not()
}

/// Conjunction of two already evaluated truth values.
pub fn and_<L, R>(left: L, right: R) -> L::Output
where
    L: LogicalAnd<R>,
    R: Logical,
{
    left.and_then(|| right)
}

/// Disjunction of two already evaluated truth values.
pub fn or_<L, R>(left: L, right: R) -> L::Output
where
    L: LogicalOr<R>,
    R: Logical,
{
    left.or_else(|| right)
}

// =============================================================================
// Branching
// =============================================================================

/// Selection between two values.
#[diagnostic::on_unimplemented(
    message = "cannot branch on `{Self}` between `{A}` and `{B}`",
    note = "a runtime `bool` condition requires both branches to have the same type"
)]
pub trait Select<A, B>: Logical {
    /// The selected value's type.
    type Output;

    /// Picks `then` or `otherwise`.
    fn select(self, then: A, otherwise: B) -> Self::Output;
}

impl<A, B> Select<A, B> for True {
    type Output = A;

    fn select(self, then: A, _: B) -> A {
        then
    }
}

impl<A, B> Select<A, B> for False {
    type Output = B;

    fn select(self, _: A, otherwise: B) -> B {
        otherwise
    }
}

impl<A> Select<A, A> for bool {
    type Output = A;

    fn select(self, then: A, otherwise: A) -> A {
        if self { then } else { otherwise }
    }
}

/// `then` if `condition` holds, `otherwise` if it does not.
pub fn if_<C, A, B>(condition: C, then: A, otherwise: B) -> C::Output
where
    C: Select<A, B>,
{
    condition.select(then, otherwise)
}

/// Lazy selection: only the chosen closure is invoked.
#[diagnostic::on_unimplemented(
    message = "cannot lazily branch on `{Self}`",
    note = "a runtime `bool` condition requires both closures to return the same type"
)]
pub trait EvalIf<Then, Otherwise>: Logical {
    /// The chosen closure's return type.
    type Output;

    /// Invokes `then` or `otherwise`.
    fn eval_if(self, then: Then, otherwise: Otherwise) -> Self::Output;
}

impl<Then, Otherwise, A> EvalIf<Then, Otherwise> for True
where
    Then: FnOnce() -> A,
{
    type Output = A;

    fn eval_if(self, then: Then, _: Otherwise) -> A {
        then()
    }
}

impl<Then, Otherwise, B> EvalIf<Then, Otherwise> for False
where
    Otherwise: FnOnce() -> B,
{
    type Output = B;

    fn eval_if(self, _: Then, otherwise: Otherwise) -> B {
        otherwise()
    }
}

impl<Then, Otherwise, A> EvalIf<Then, Otherwise> for bool
where
    Then: FnOnce() -> A,
    Otherwise: FnOnce() -> A,
{
    type Output = A;

    fn eval_if(self, then: Then, otherwise: Otherwise) -> A {
        if self { then() } else { otherwise() }
    }
}

/// Calls `then` if `condition` holds and `otherwise` if it does not.
pub fn eval_if<C, Then, Otherwise>(condition: C, then: Then, otherwise: Otherwise) -> C::Output
where
    C: EvalIf<Then, Otherwise>,
{
    condition.eval_if(then, otherwise)
}

/// Applies `F` to a value when `Self` holds, returns the value unchanged
/// otherwise.
pub trait ApplyIf<X, F>: Logical {
    /// The resulting value.
    type Output;

    /// Applies `function` to `value` if `self` holds.
    fn apply_if(self, value: X, function: &mut F) -> Self::Output;
}

impl<X, F> ApplyIf<X, F> for True
where
    F: Function<(X,)>,
{
    type Output = F::Output;

    fn apply_if(self, value: X, function: &mut F) -> F::Output {
        function.apply((value,))
    }
}

impl<X, F> ApplyIf<X, F> for False {
    type Output = X;

    fn apply_if(self, value: X, _: &mut F) -> X {
        value
    }
}

impl<X, F> ApplyIf<X, F> for bool
where
    F: Function<(X,), Output = X>,
{
    type Output = X;

    fn apply_if(self, value: X, function: &mut F) -> X {
        if self { function.apply((value,)) } else { value }
    }
}

// =============================================================================
// Loops
// =============================================================================

/// One step of [`while_`], dispatched on the current condition.
///
/// With a type-level condition the loop is unrolled by the compiler and
/// the state may change type on every iteration. With a runtime condition
/// it is an ordinary loop over a state of one type.
pub trait WhileStep<P, S, F>: Logical {
    /// The final state.
    type Output;

    /// Continues or stops the loop.
    fn step(self, predicate: P, state: S, function: F) -> Self::Output;
}

impl<P, S, F> WhileStep<P, S, F> for False {
    type Output = S;

    fn step(self, _: P, state: S, _: F) -> S {
        state
    }
}

impl<P, S, F> WhileStep<P, S, F> for True
where
    F: Function<(S,)>,
    P: Predicate<F::Output>,
    P::Output: WhileStep<P, F::Output, F>,
{
    type Output = <P::Output as WhileStep<P, F::Output, F>>::Output;

    fn step(self, mut predicate: P, state: S, mut function: F) -> Self::Output {
        let next = function.apply((state,));
        let condition = predicate.test(&next);
        condition.step(predicate, next, function)
    }
}

impl<P, S, F> WhileStep<P, S, F> for bool
where
    F: Function<(S,), Output = S>,
    P: Predicate<S, Output = Self>,
{
    type Output = S;

    fn step(self, mut predicate: P, mut state: S, mut function: F) -> S {
        let mut running = self;
        while running {
            state = function.apply((state,));
            running = predicate.test(&state);
        }
        state
    }
}

/// Applies `function` to `state` as long as `predicate` holds.
pub fn while_<P, S, F>(
    mut predicate: P,
    state: S,
    function: F,
) -> <P::Output as WhileStep<P, S, F>>::Output
where
    P: Predicate<S>,
    P::Output: WhileStep<P, S, F>,
{
    let condition = predicate.test(&state);
    condition.step(predicate, state, function)
}

/// Applies `function` to `state` until `predicate` holds.
pub fn until_<P, S, F>(
    predicate: P,
    state: S,
    function: F,
) -> <<P::Output as LogicalNot>::Output as WhileStep<crate::dispatch::Complement<P>, S, F>>::Output
where
    P: Predicate<S>,
    P::Output: LogicalNot,
    <P::Output as LogicalNot>::Output: WhileStep<crate::dispatch::Complement<P>, S, F>,
{
    while_(crate::dispatch::Complement(predicate), state, function)
}
