//! Monoid, Group, Ring and IntegralDomain: arithmetic across tags.
//!
//! - [`Monoid`]: an associative `plus` with an identity `zero`
//! - [`Group`]: a Monoid where every value has an inverse (`negate`, `minus`)
//! - [`Ring`]: a Monoid with a second associative `mult` and its identity `one`
//! - [`IntegralDomain`]: a Ring with Euclidean division (`quot`, `rem`)
//!
//! Binary operations resolve across tags like [`less`](super::less): through
//! a common embedding or not at all. Adding a natural to a `usize` embeds the
//! natural; adding a `char` to an `f64` does not compile.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of a Monoid tag `M`:
//!
//! ```text
//! plus(zero::<M>(), a) == a
//! plus(a, zero::<M>()) == a
//! plus(plus(a, b), c) == plus(a, plus(b, c))
//! ```
//!
//! For a Group, additionally `plus(a, negate(a)) == zero::<M>()` and
//! `minus(a, b) == plus(a, negate(b))`. For a Ring, `one` and `mult` satisfy
//! the Monoid laws and `mult` distributes over `plus`. For an IntegralDomain
//! and a non-zero `b`, `plus(mult(quot(a, b), b), rem(a, b)) == a`.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N2, N3, N5, N6, N8};
//! use polytag::typeclass::{mult, plus, power, quot, rem, zero};
//!
//! assert_eq!(plus(2i32, 3i32), 5);
//! assert_eq!(zero::<f64>(), 0.0);
//! assert_eq!((quot(17u32, 5u32), rem(17u32, 5u32)), (3, 2));
//!
//! // Naturals are added at compile time.
//! let five: N5 = plus(N2, N3);
//! let six: N6 = mult(N2, N3);
//! let eight: N8 = power(N2, N3);
//! assert_eq!((five, six, eight), (N5, N6, N8));
//!
//! // Mixed operands meet in the common tag.
//! assert_eq!(plus(N2, 40usize), 42usize);
//! assert_eq!(power(3i64, N3), 27);
//! ```

use crate::datatype::{S, Z};
use crate::dispatch::{
    Common, Embed, EmbedBoth, EmbedLeft, EmbedRight, Embedded, Function, RelationOf, Same, Tag,
    TagOf, Tagged,
};

// =============================================================================
// Concepts and implementation traits
// =============================================================================

/// Tags with an associative `plus` and an identity `zero`.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Monoid",
    note = "implement `polytag::typeclass::Monoid`, `PlusImpl` and `ZeroImpl` for the tag"
)]
pub trait Monoid: Tag {}

/// Tags whose values have additive inverses.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Group",
    note = "unsigned integers and naturals have no additive inverse"
)]
pub trait Group: Monoid {}

/// Tags with a multiplication distributing over `plus`.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model Ring",
    note = "implement `polytag::typeclass::Ring`, `MultImpl` and `OneImpl` for the tag"
)]
pub trait Ring: Monoid {}

/// Rings with Euclidean division.
#[diagnostic::on_unimplemented(
    message = "tag `{Self}` does not model IntegralDomain",
    note = "only integers and naturals divide with a quotient and a remainder"
)]
pub trait IntegralDomain: Ring {}

/// Addition of `X` and `Y` under tag `Self`.
pub trait PlusImpl<X, Y>: Monoid {
    /// The sum.
    type Output;

    /// Adds the values.
    fn plus(left: X, right: Y) -> Self::Output;
}

/// The additive identity of tag `Self`.
pub trait ZeroImpl: Monoid {
    /// The identity's type.
    type Output;

    /// Returns the identity.
    fn zero() -> Self::Output;
}

/// Subtraction of `Y` from `X` under tag `Self`.
pub trait MinusImpl<X, Y>: Group {
    /// The difference.
    type Output;

    /// Subtracts `right` from `left`.
    fn minus(left: X, right: Y) -> Self::Output;
}

/// The additive inverse of `X` under tag `Self`.
pub trait NegateImpl<X>: Group {
    /// The inverse.
    type Output;

    /// Negates the value.
    fn negate(value: X) -> Self::Output;
}

/// Multiplication of `X` and `Y` under tag `Self`.
pub trait MultImpl<X, Y>: Ring {
    /// The product.
    type Output;

    /// Multiplies the values.
    fn mult(left: X, right: Y) -> Self::Output;
}

/// The multiplicative identity of tag `Self`.
pub trait OneImpl: Ring {
    /// The identity's type.
    type Output;

    /// Returns the identity.
    fn one() -> Self::Output;
}

/// The quotient of `X` by `Y` under tag `Self`, rounded toward zero.
pub trait QuotImpl<X, Y>: IntegralDomain {
    /// The quotient.
    type Output;

    /// Divides `left` by `right`.
    fn quot(left: X, right: Y) -> Self::Output;
}

/// The remainder of `X` by `Y` under tag `Self`, with the sign of `X`.
pub trait RemImpl<X, Y>: IntegralDomain {
    /// The remainder.
    type Output;

    /// The remainder of `left` divided by `right`.
    fn rem(left: X, right: Y) -> Self::Output;
}

// =============================================================================
// Binary dispatch
// =============================================================================

/// Generates the relation strategy trait, the dispatcher trait and the free
/// function of one binary arithmetic operation.
macro_rules! binary_operation {
    (
        $(#[$function_meta:meta])*
        fn $function:ident;
        dispatcher $dispatcher:ident :: $method:ident, output $output:ident;
        strategy $strategy:ident :: $strategy_method:ident;
        implementation $implementation:ident :: $implementation_method:ident;
        message $message:literal;
    ) => {
        #[doc = concat!("How `", stringify!($function), "` resolves for one [`Common`] relation.")]
        #[diagnostic::on_unimplemented(
            message = $message,
            label = "their tags have no common embedding",
            note = "both operands must embed into a common tag modeling the operation's concept"
        )]
        pub trait $strategy<X, Y> {
            /// The result.
            type Output;

            /// Performs the operation.
            fn $strategy_method(left: X, right: Y) -> Self::Output;
        }

        impl<T, X, Y> $strategy<X, Y> for Same<T>
        where
            T: $implementation<X, Y>,
        {
            type Output = T::Output;

            fn $strategy_method(left: X, right: Y) -> Self::Output {
                T::$implementation_method(left, right)
            }
        }

        impl<X, Y> $strategy<X, Y> for EmbedLeft
        where
            Y: Tagged,
            X: Embed<TagOf<Y>>,
            Embedded<X, TagOf<Y>>: $dispatcher<Y>,
        {
            type Output = $output<Embedded<X, TagOf<Y>>, Y>;

            fn $strategy_method(left: X, right: Y) -> Self::Output {
                <X as Embed<TagOf<Y>>>::embed(&left).$method(right)
            }
        }

        impl<X, Y> $strategy<X, Y> for EmbedRight
        where
            X: Tagged,
            Y: Embed<TagOf<X>>,
            X: $dispatcher<Embedded<Y, TagOf<X>>>,
        {
            type Output = $output<X, Embedded<Y, TagOf<X>>>;

            fn $strategy_method(left: X, right: Y) -> Self::Output {
                left.$method(<Y as Embed<TagOf<X>>>::embed(&right))
            }
        }

        impl<C, X, Y> $strategy<X, Y> for EmbedBoth<C>
        where
            C: Tag,
            X: Embed<C>,
            Y: Embed<C>,
            Embedded<X, C>: $dispatcher<Embedded<Y, C>>,
        {
            type Output = $output<Embedded<X, C>, Embedded<Y, C>>;

            fn $strategy_method(left: X, right: Y) -> Self::Output {
                <X as Embed<C>>::embed(&left).$method(<Y as Embed<C>>::embed(&right))
            }
        }

        #[doc = concat!("The `", stringify!($function), "` dispatcher.")]
        pub trait $dispatcher<Y> {
            /// The result.
            type Output;

            /// Performs the operation.
            fn $method(self, other: Y) -> Self::Output;
        }

        impl<X, Y> $dispatcher<Y> for X
        where
            X: Tagged,
            Y: Tagged,
            TagOf<X>: Common<TagOf<Y>>,
            RelationOf<X, Y>: $strategy<X, Y>,
        {
            type Output = <RelationOf<X, Y> as $strategy<X, Y>>::Output;

            fn $method(self, other: Y) -> Self::Output {
                <RelationOf<X, Y> as $strategy<X, Y>>::$strategy_method(self, other)
            }
        }

        #[doc = concat!("The result of `", stringify!($function), "(X, Y)`.")]
        pub type $output<X, Y> = <X as $dispatcher<Y>>::Output;

        $(#[$function_meta])*
        pub fn $function<X, Y>(left: X, right: Y) -> $output<X, Y>
        where
            X: $dispatcher<Y>,
        {
            left.$method(right)
        }
    };
}

binary_operation! {
    /// Adds two values.
    fn plus;
    dispatcher Plus::plus_with, output PlusOutput;
    strategy PlusBy::plus_by;
    implementation PlusImpl::plus;
    message "cannot add `{X}` and `{Y}`";
}

binary_operation! {
    /// Subtracts `right` from `left`.
    fn minus;
    dispatcher Minus::minus_with, output MinusOutput;
    strategy MinusBy::minus_by;
    implementation MinusImpl::minus;
    message "cannot subtract `{Y}` from `{X}`";
}

binary_operation! {
    /// Multiplies two values.
    fn mult;
    dispatcher Mult::mult_with, output MultOutput;
    strategy MultBy::mult_by;
    implementation MultImpl::mult;
    message "cannot multiply `{X}` by `{Y}`";
}

binary_operation! {
    /// The quotient of `left` by `right`.
    ///
    /// # Panics
    ///
    /// Panics if a runtime divisor is zero. A zero natural divisor does not
    /// compile.
    fn quot;
    dispatcher Quot::quot_with, output QuotOutput;
    strategy QuotBy::quot_by;
    implementation QuotImpl::quot;
    message "cannot divide `{X}` by `{Y}`";
}

binary_operation! {
    /// The remainder of `left` divided by `right`.
    ///
    /// # Panics
    ///
    /// Panics if a runtime divisor is zero. A zero natural divisor does not
    /// compile.
    fn rem;
    dispatcher Rem::rem_with, output RemOutput;
    strategy RemBy::rem_by;
    implementation RemImpl::rem;
    message "cannot take the remainder of `{X}` by `{Y}`";
}

/// The additive identity of tag `M`.
pub fn zero<M: ZeroImpl>() -> M::Output {
    M::zero()
}

/// The multiplicative identity of tag `R`.
pub fn one<R: OneImpl>() -> R::Output {
    R::one()
}

/// The additive inverse of `value`.
pub fn negate<X>(value: X) -> <TagOf<X> as NegateImpl<X>>::Output
where
    X: Tagged,
    TagOf<X>: NegateImpl<X>,
{
    <TagOf<X> as NegateImpl<X>>::negate(value)
}

// =============================================================================
// Powers
// =============================================================================

/// Raising a value of type `X` to the natural exponent `Self`, by repeated
/// `mult`.
#[diagnostic::on_unimplemented(
    message = "cannot raise `{X}` to the power `{Self}`",
    note = "the exponent must be a compile-time natural and the base's tag must model Ring"
)]
pub trait PowerBy<X> {
    /// The power.
    type Output;

    /// Computes `base` to the `Self`.
    fn power_of(base: X) -> Self::Output;
}

impl<X> PowerBy<X> for Z
where
    X: Tagged,
    TagOf<X>: OneImpl,
{
    type Output = <TagOf<X> as OneImpl>::Output;

    fn power_of(_: X) -> Self::Output {
        <TagOf<X> as OneImpl>::one()
    }
}

impl<X, N> PowerBy<X> for S<N>
where
    N: PowerBy<X>,
    X: Clone + Mult<N::Output>,
{
    type Output = MultOutput<X, N::Output>;

    fn power_of(base: X) -> Self::Output {
        let rest = N::power_of(base.clone());
        base.mult_with(rest)
    }
}

/// `base` multiplied by itself `exponent` times (`one` for zero).
pub fn power<X, N>(base: X, _exponent: N) -> N::Output
where
    N: PowerBy<X>,
{
    N::power_of(base)
}

// =============================================================================
// Function objects
// =============================================================================

/// `plus` as a two-argument function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlusFn;

impl<X, Y> Function<(X, Y)> for PlusFn
where
    X: Plus<Y>,
{
    type Output = PlusOutput<X, Y>;

    fn apply(&mut self, (left, right): (X, Y)) -> Self::Output {
        left.plus_with(right)
    }
}

/// `mult` as a two-argument function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultFn;

impl<X, Y> Function<(X, Y)> for MultFn
where
    X: Mult<Y>,
{
    type Output = MultOutput<X, Y>;

    fn apply(&mut self, (left, right): (X, Y)) -> Self::Output {
        left.mult_with(right)
    }
}

// =============================================================================
// Primitive instances
// =============================================================================

macro_rules! primitive_ring {
    ($zero:literal, $one:literal => $($primitive:ty),* $(,)?) => {
        $(
            impl Monoid for $primitive {}

            impl PlusImpl<$primitive, $primitive> for $primitive {
                type Output = $primitive;

                fn plus(left: $primitive, right: $primitive) -> $primitive {
                    left + right
                }
            }

            impl ZeroImpl for $primitive {
                type Output = $primitive;

                fn zero() -> $primitive {
                    $zero
                }
            }

            impl Ring for $primitive {}

            impl MultImpl<$primitive, $primitive> for $primitive {
                type Output = $primitive;

                fn mult(left: $primitive, right: $primitive) -> $primitive {
                    left * right
                }
            }

            impl OneImpl for $primitive {
                type Output = $primitive;

                fn one() -> $primitive {
                    $one
                }
            }
        )*
    };
}

macro_rules! primitive_group {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Group for $primitive {}

            impl MinusImpl<$primitive, $primitive> for $primitive {
                type Output = $primitive;

                fn minus(left: $primitive, right: $primitive) -> $primitive {
                    left - right
                }
            }

            impl NegateImpl<$primitive> for $primitive {
                type Output = $primitive;

                fn negate(value: $primitive) -> $primitive {
                    -value
                }
            }
        )*
    };
}

macro_rules! primitive_integral_domain {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl IntegralDomain for $primitive {}

            impl QuotImpl<$primitive, $primitive> for $primitive {
                type Output = $primitive;

                fn quot(left: $primitive, right: $primitive) -> $primitive {
                    left / right
                }
            }

            impl RemImpl<$primitive, $primitive> for $primitive {
                type Output = $primitive;

                fn rem(left: $primitive, right: $primitive) -> $primitive {
                    left % right
                }
            }
        )*
    };
}

primitive_ring!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
primitive_ring!(0.0, 1.0 => f32, f64);
primitive_group!(i8, i16, i32, i64, i128, isize, f32, f64);
primitive_integral_domain!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{N0, N1, N2, N3, N4, N8, N9, N10, N16, N27, N81};
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(3, 4)]
    #[case(-8, 13)]
    fn integer_group_laws(#[case] left: i64, #[case] right: i64) {
        assert_eq!(plus(zero::<i64>(), left), left);
        assert_eq!(plus(left, right), plus(right, left));
        assert_eq!(minus(left, right), plus(left, negate(right)));
        assert_eq!(plus(left, negate(left)), zero::<i64>());
        assert_eq!(mult(one::<i64>(), left), left);
    }

    #[rstest]
    #[case(2.0, 3, 8.0)]
    #[case(5.0, 0, 1.0)]
    fn float_powers(#[case] base: f64, #[case] exponent: u32, #[case] expected: f64) {
        let computed = match exponent {
            0 => power(base, Z),
            _ => power(base, S(S(S(Z)))),
        };
        assert!((computed - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn powers_of_runtime_integers() {
        assert_eq!(power(2usize, N0), 1);
        assert_eq!(power(2usize, N10), 1024);
        assert_eq!(power(-3i32, N3), -27);
    }

    #[rstest]
    fn powers_of_naturals_are_static() {
        let _: N1 = power(N9, N0);
        let _: N8 = power(N2, N3);
        let _: N16 = power(N4, N2);
        let _: N81 = power(N3, N4);
        let _: N27 = power(N3, N3);
    }

    #[rstest]
    #[case(17, 5, 3, 2)]
    #[case(-17, 5, -3, -2)]
    #[case(4, 9, 0, 4)]
    fn quot_rounds_toward_zero(
        #[case] left: i32,
        #[case] right: i32,
        #[case] quotient: i32,
        #[case] remainder: i32,
    ) {
        assert_eq!(quot(left, right), quotient);
        assert_eq!(rem(left, right), remainder);
    }

    proptest! {
        #[test]
        fn division_reconstructs_the_dividend(left in any::<i64>(), right in 1i64..1000) {
            prop_assert_eq!(plus(mult(quot(left, right), right), rem(left, right)), left);
        }
    }

    #[rstest]
    fn function_objects_forward() {
        assert_eq!(PlusFn.apply((2u8, 3u8)), 5);
        assert_eq!(MultFn.apply((2.5f32, 2.0f32)), 5.0);
    }
}
