//! Compile-time integral constants.
//!
//! Two families of zero-sized values whose type is their value:
//!
//! - the booleans [`True`] and [`False`], tagged [`BoolConstantTag`] and
//!   embedding into `bool`
//! - the naturals [`Z`], [`S<N>`](S) (aliases [`N0`] to [`N100`]), tagged
//!   [`IntegralConstantTag`] and embedding into every primitive integer type
//!   through the [`AnyInteger`] family
//!
//! Comparison and arithmetic between two constants happen in the trait
//! solver and produce constants. Against a runtime value, the constant is
//! embedded into the value's type first and the operation happens at
//! runtime. Embedding a natural into a type too narrow for it is rejected
//! when the embedding is instantiated.
//!
//! Negative constants are not represented.
//!
//! # Examples
//!
//! ```rust
//! use polytag::datatype::{N1, N2, N3, N4, N7, Nat};
//! use polytag::dispatch::{False, True};
//! use polytag::typeclass::{equal, less, plus, quot, rem};
//!
//! let seven: N7 = plus(N3, N4);
//! assert_eq!(N7::VALUE, 7);
//! let _: True = equal(&seven, &N7);
//! let _: False = less(&N4, &N3);
//! let _: N1 = rem(N7, N3);
//! let _: N2 = quot(N7, N3);
//!
//! assert!(equal(&N3, &3usize));
//! assert!(equal(&N3, &3i64));
//! assert!(!less(&200u8, &N7));
//! ```

use std::fmt;

use crate::dispatch::{Bool, Embed, False, Function, Tagged, True, builtin_tag};
use crate::typeclass::{
    Comparable, Constant, EqualImpl, IntegralDomain, LessImpl, Monoid, MultImpl, OneImpl,
    Orderable, PlusImpl, QuotImpl, RemImpl, Ring, ZeroImpl,
};

// =============================================================================
// Boolean constants
// =============================================================================

/// The tag of [`True`] and [`False`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolConstantTag;

builtin_tag!(BoolConstantTag => [0 0 1 0 0 0 0 0], embeds bool);

impl Tagged for True {
    type Tag = BoolConstantTag;
}

impl Tagged for False {
    type Tag = BoolConstantTag;
}

impl Constant for True {
    type Value = bool;

    fn value(&self) -> bool {
        true
    }
}

impl Constant for False {
    type Value = bool;

    fn value(&self) -> bool {
        false
    }
}

impl Embed<bool> for True {
    type Target = bool;

    fn embed(&self) -> bool {
        true
    }
}

impl Embed<bool> for False {
    type Target = bool;

    fn embed(&self) -> bool {
        false
    }
}

impl Comparable for BoolConstantTag {}

impl<X: Bool, Y: Bool> EqualImpl<X, Y> for BoolConstantTag {
    type Output =
        <<X as Bool>::And<Y> as Bool>::Or<<<X as Bool>::Not as Bool>::And<<Y as Bool>::Not>>;

    fn equal(_: &X, _: &Y) -> Self::Output {
        Default::default()
    }
}

impl Orderable for BoolConstantTag {}

impl<X: Bool, Y: Bool> LessImpl<X, Y> for BoolConstantTag {
    type Output = <<X as Bool>::Not as Bool>::And<Y>;

    fn less(_: &X, _: &Y) -> Self::Output {
        Default::default()
    }
}

// =============================================================================
// Naturals
// =============================================================================

/// The family of primitive integer tags, `i8` to `usize`.
///
/// No value is tagged `AnyInteger`. A tag embedding into it promises an
/// [`Embed`] into each integer type it can reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnyInteger;

builtin_tag!(AnyInteger => [0 1 0 0 _ _ _ _]);

/// The tag of the naturals [`Z`] and [`S<N>`](S).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntegralConstantTag;

builtin_tag!(IntegralConstantTag => [0 0 1 0 0 0 0 1], embeds AnyInteger);

/// Zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Z;

/// The successor of `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct S<N>(pub N);

/// A natural number encoded in unary.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a compile-time natural",
    note = "naturals are `Z` and `S<N>`, aliased as `N0` to `N100`"
)]
pub trait Nat: Copy + Default + fmt::Debug + 'static {
    /// The runtime value.
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

impl Tagged for Z {
    type Tag = IntegralConstantTag;
}

impl<N: Nat> Tagged for S<N> {
    type Tag = IntegralConstantTag;
}

impl Constant for Z {
    type Value = usize;

    fn value(&self) -> usize {
        0
    }
}

impl<N: Nat> Constant for S<N> {
    type Value = usize;

    fn value(&self) -> usize {
        Self::VALUE
    }
}

macro_rules! natural_embeddings {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Embed<$integer> for Z {
                type Target = $integer;

                fn embed(&self) -> $integer {
                    0
                }
            }

            impl<N: Nat> Embed<$integer> for S<N> {
                type Target = $integer;

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn embed(&self) -> $integer {
                    const {
                        assert!(
                            Self::VALUE <= <$integer>::MAX as usize,
                            concat!("natural does not fit in `", stringify!($integer), "`")
                        );
                    }
                    Self::VALUE as $integer
                }
            }
        )*
    };
}

natural_embeddings!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl fmt::Display for Z {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "0")
    }
}

impl<N: Nat> fmt::Display for S<N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", Self::VALUE)
    }
}

// =============================================================================
// Type-level arithmetic
// =============================================================================

/// `Self == M`.
pub trait NatEq<M> {
    /// The answer.
    type Output: Bool;
}

impl NatEq<Z> for Z {
    type Output = True;
}

impl<M> NatEq<S<M>> for Z {
    type Output = False;
}

impl<N> NatEq<Z> for S<N> {
    type Output = False;
}

impl<N: NatEq<M>, M> NatEq<S<M>> for S<N> {
    type Output = N::Output;
}

/// `Self < M`.
pub trait NatLt<M> {
    /// The answer.
    type Output: Bool;
}

impl NatLt<Z> for Z {
    type Output = False;
}

impl<M> NatLt<S<M>> for Z {
    type Output = True;
}

impl<N> NatLt<Z> for S<N> {
    type Output = False;
}

impl<N: NatLt<M>, M> NatLt<S<M>> for S<N> {
    type Output = N::Output;
}

/// `Self + M`.
pub trait NatAdd<M> {
    /// The sum.
    type Output: Nat;
}

impl<M: Nat> NatAdd<M> for Z {
    type Output = M;
}

impl<N: NatAdd<M>, M> NatAdd<M> for S<N> {
    type Output = S<N::Output>;
}

/// `Self - M`, saturating at zero.
pub trait NatSub<M> {
    /// The difference.
    type Output: Nat;
}

impl<N: Nat> NatSub<Z> for N {
    type Output = N;
}

impl<M> NatSub<S<M>> for Z {
    type Output = Self;
}

impl<N: NatSub<M>, M> NatSub<S<M>> for S<N> {
    type Output = N::Output;
}

/// `Self * M`.
pub trait NatMul<M> {
    /// The product.
    type Output: Nat;
}

impl<M> NatMul<M> for Z {
    type Output = Self;
}

impl<N, M> NatMul<M> for S<N>
where
    N: NatMul<M>,
    M: NatAdd<N::Output>,
{
    type Output = <M as NatAdd<N::Output>>::Output;
}

/// `min(Self, M)`.
pub trait NatMin<M> {
    /// The smaller natural.
    type Output;
}

impl<N: NatLt<M>, M> NatMin<M> for N {
    type Output = <<N as NatLt<M>>::Output as Bool>::If<N, M>;
}

/// Euclidean division by a non-zero natural `M`.
#[diagnostic::on_unimplemented(
    message = "cannot divide `{Self}` by `{M}`",
    note = "the divisor of a compile-time division must be a non-zero natural"
)]
pub trait NatDiv<M> {
    /// `Self / M`.
    type Quotient: Nat;

    /// `Self % M`.
    type Remainder: Nat;
}

impl<N, M> NatDiv<S<M>> for N
where
    N: NatLt<S<M>>,
    <N as NatLt<S<M>>>::Output: DivStep<N, S<M>>,
{
    type Quotient = <<N as NatLt<S<M>>>::Output as DivStep<N, S<M>>>::Quotient;
    type Remainder = <<N as NatLt<S<M>>>::Output as DivStep<N, S<M>>>::Remainder;
}

/// One step of [`NatDiv`], selected by whether the dividend is already
/// smaller than the divisor.
pub trait DivStep<N, D> {
    /// The quotient from this step on.
    type Quotient: Nat;

    /// The final remainder.
    type Remainder: Nat;
}

impl<N: Nat, D> DivStep<N, D> for True {
    type Quotient = Z;
    type Remainder = N;
}

impl<N, D> DivStep<N, D> for False
where
    N: NatSub<D>,
    DifferenceOf<N, D>: NatDiv<D>,
{
    type Quotient = S<<DifferenceOf<N, D> as NatDiv<D>>::Quotient>;
    type Remainder = <DifferenceOf<N, D> as NatDiv<D>>::Remainder;
}

/// The sum of two naturals.
pub type SumOf<N, M> = <N as NatAdd<M>>::Output;

/// The saturating difference of two naturals.
pub type DifferenceOf<N, M> = <N as NatSub<M>>::Output;

/// The successor of a natural.
pub const fn succ<N: Nat>(value: N) -> S<N> {
    S(value)
}

/// The predecessor of a non-zero natural.
pub const fn pred<N: Nat>(value: S<N>) -> N {
    value.0
}

/// [`succ`] as a function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Succ;

impl<N: Nat> Function<(N,)> for Succ {
    type Output = S<N>;

    fn apply(&mut self, (value,): (N,)) -> S<N> {
        S(value)
    }
}

/// [`pred`] as a function object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pred;

impl<N: Nat> Function<(S<N>,)> for Pred {
    type Output = N;

    fn apply(&mut self, (value,): (S<N>,)) -> N {
        value.0
    }
}

// =============================================================================
// Concept instances for naturals
// =============================================================================

impl Comparable for IntegralConstantTag {}

impl<X: Nat + NatEq<Y>, Y: Nat> EqualImpl<X, Y> for IntegralConstantTag {
    type Output = <X as NatEq<Y>>::Output;

    fn equal(_: &X, _: &Y) -> Self::Output {
        Default::default()
    }
}

impl Orderable for IntegralConstantTag {}

impl<X: Nat + NatLt<Y>, Y: Nat> LessImpl<X, Y> for IntegralConstantTag {
    type Output = <X as NatLt<Y>>::Output;

    fn less(_: &X, _: &Y) -> Self::Output {
        Default::default()
    }
}

impl Monoid for IntegralConstantTag {}

impl<X: Nat + NatAdd<Y>, Y: Nat> PlusImpl<X, Y> for IntegralConstantTag {
    type Output = <X as NatAdd<Y>>::Output;

    fn plus(_: X, _: Y) -> Self::Output {
        Default::default()
    }
}

impl ZeroImpl for IntegralConstantTag {
    type Output = Z;

    fn zero() -> Z {
        Z
    }
}

impl Ring for IntegralConstantTag {}

impl<X: Nat + NatMul<Y>, Y: Nat> MultImpl<X, Y> for IntegralConstantTag {
    type Output = <X as NatMul<Y>>::Output;

    fn mult(_: X, _: Y) -> Self::Output {
        Default::default()
    }
}

impl OneImpl for IntegralConstantTag {
    type Output = S<Z>;

    fn one() -> S<Z> {
        S(Z)
    }
}

impl IntegralDomain for IntegralConstantTag {}

impl<X: Nat + NatDiv<Y>, Y: Nat> QuotImpl<X, Y> for IntegralConstantTag {
    type Output = <X as NatDiv<Y>>::Quotient;

    fn quot(_: X, _: Y) -> Self::Output {
        Default::default()
    }
}

impl<X: Nat + NatDiv<Y>, Y: Nat> RemImpl<X, Y> for IntegralConstantTag {
    type Output = <X as NatDiv<Y>>::Remainder;

    fn rem(_: X, _: Y) -> Self::Output {
        Default::default()
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for True {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_bool(true)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for False {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_bool(false)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Z {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_u64(0)
    }
}

#[cfg(feature = "serde")]
impl<N: Nat> serde::Serialize for S<N> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_u64(Self::VALUE as u64)
    }
}

// =============================================================================
// Aliases
// =============================================================================

/// The natural `0`.
pub type N0 = Z;

/// The natural `0`.
pub const N0: N0 = Z;

macro_rules! naturals {
    ($($name:ident = $previous:ident),* $(,)?) => {
        $(
            #[doc = concat!("The natural `", stringify!($name), "`.")]
            pub type $name = S<$previous>;

            #[doc = concat!("The natural `", stringify!($name), "`.")]
            pub const $name: $name = S($previous);
        )*
    };
}

naturals! {
    N1 = N0, N2 = N1, N3 = N2, N4 = N3, N5 = N4, N6 = N5, N7 = N6, N8 = N7, N9 = N8, N10 = N9,
    N11 = N10, N12 = N11, N13 = N12, N14 = N13, N15 = N14, N16 = N15, N17 = N16, N18 = N17,
    N19 = N18, N20 = N19, N21 = N20, N22 = N21, N23 = N22, N24 = N23, N25 = N24, N26 = N25,
    N27 = N26, N28 = N27, N29 = N28, N30 = N29, N31 = N30, N32 = N31, N33 = N32, N34 = N33,
    N35 = N34, N36 = N35, N37 = N36, N38 = N37, N39 = N38, N40 = N39, N41 = N40, N42 = N41,
    N43 = N42, N44 = N43, N45 = N44, N46 = N45, N47 = N46, N48 = N47, N49 = N48, N50 = N49,
    N51 = N50, N52 = N51, N53 = N52, N54 = N53, N55 = N54, N56 = N55, N57 = N56, N58 = N57,
    N59 = N58, N60 = N59, N61 = N60, N62 = N61, N63 = N62, N64 = N63, N65 = N64, N66 = N65,
    N67 = N66, N68 = N67, N69 = N68, N70 = N69, N71 = N70, N72 = N71, N73 = N72, N74 = N73,
    N75 = N74, N76 = N75, N77 = N76, N78 = N77, N79 = N78, N80 = N79, N81 = N80, N82 = N81,
    N83 = N82, N84 = N83, N85 = N84, N86 = N85, N87 = N86, N88 = N87, N89 = N88, N90 = N89,
    N91 = N90, N92 = N91, N93 = N92, N94 = N93, N95 = N94, N96 = N95, N97 = N96, N98 = N97,
    N99 = N98, N100 = N99
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{equal, less, mult, plus, quot, rem, value};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(SumOf<N2, N3>, N5);
    assert_type_eq_all!(DifferenceOf<N7, N3>, N4);
    assert_type_eq_all!(DifferenceOf<N2, N9>, N0);
    assert_type_eq_all!(<N4 as NatMul<N3>>::Output, N12);
    assert_type_eq_all!(<N4 as NatMin<N9>>::Output, N4);
    assert_type_eq_all!(<N9 as NatMin<N4>>::Output, N4);
    assert_type_eq_all!(<N6 as NatEq<N6>>::Output, True);
    assert_type_eq_all!(<N6 as NatLt<N6>>::Output, False);
    assert_type_eq_all!(<N17 as NatDiv<N5>>::Quotient, N3);
    assert_type_eq_all!(<N17 as NatDiv<N5>>::Remainder, N2);
    assert_type_eq_all!(<N4 as NatDiv<N9>>::Quotient, N0);
    assert_type_eq_all!(<N0 as NatDiv<N1>>::Remainder, N0);

    #[rstest]
    #[case(N0::VALUE, 0)]
    #[case(N1::VALUE, 1)]
    #[case(N46::VALUE, 46)]
    #[case(N100::VALUE, 100)]
    fn aliases_have_their_value(#[case] actual: usize, #[case] expected: usize) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn successor_and_predecessor_are_inverse() {
        let four: N4 = succ(N3);
        assert_eq!(pred(four), N3);
        let _: N5 = Succ.apply((four,));
        let _: N2 = Pred.apply((N3,));
    }

    #[rstest]
    fn constants_report_runtime_values() {
        assert_eq!(value(&N12), 12);
        assert!(value(&True));
        assert_eq!(N12.to_string(), "12");
        assert_eq!(Z.to_string(), "0");
    }

    #[rstest]
    fn bool_constants_compare_statically() {
        let _: True = <BoolConstantTag as EqualImpl<False, False>>::equal(&False, &False);
        let _: False = <BoolConstantTag as EqualImpl<True, False>>::equal(&True, &False);
        let _: True = <BoolConstantTag as LessImpl<False, True>>::less(&False, &True);
        let _: False = <BoolConstantTag as LessImpl<True, True>>::less(&True, &True);
    }

    #[rstest]
    fn naturals_equal_integers_of_every_width() {
        assert!(equal(&N7, &7i8));
        assert!(equal(&N7, &7i64));
        assert!(equal(&N7, &7u8));
        assert!(equal(&7usize, &N7));
        assert!(equal(&7i128, &N7));
        assert!(!equal(&N7, &8u16));
        assert!(equal(&N0, &0isize));
        assert!(equal(&N100, &100u64));
    }

    #[rstest]
    #[case(3, true, false)]
    #[case(7, false, false)]
    #[case(9, false, true)]
    fn naturals_order_against_integers(
        #[case] runtime: i64,
        #[case] below_seven: bool,
        #[case] above_seven: bool,
    ) {
        assert_eq!(less(&runtime, &N7), below_seven);
        assert_eq!(less(&N7, &runtime), above_seven);

        let narrow = u8::try_from(runtime).unwrap();
        assert_eq!(less(&narrow, &N7), below_seven);
        assert_eq!(less(&N7, &narrow), above_seven);

        let wide = usize::try_from(runtime).unwrap();
        assert_eq!(less(&wide, &N7), below_seven);
        assert_eq!(less(&N7, &wide), above_seven);
    }

    #[rstest]
    fn naturals_compare_with_signed_runtime_values() {
        assert!(equal(&N1, &1i32));
        assert!(!equal(&N1, &-1i32));
        assert!(less(&-5i32, &N0));
        assert!(less(&N2, &i16::MAX));
    }

    #[rstest]
    fn arithmetic_with_runtime_integers_embeds_the_natural() {
        assert_eq!(plus(N2, 40u8), 42u8);
        assert_eq!(mult(-3i64, N4), -12i64);
        assert_eq!(quot(17u32, N5), 3u32);
        assert_eq!(rem(N17, 5usize), 2usize);
    }

    #[rstest]
    fn division_of_naturals_is_static() {
        let _: N3 = quot(N17, N5);
        let _: N2 = rem(N17, N5);
        let _: N0 = quot(N4, N9);
        let _: N4 = rem(N4, N9);
    }
}
