//! Prime field arithmetic in the Montgomery domain with `R = 2^256`, implemented using
//! `crypto-bigint`'s [`FixedMontyForm`].
//!
//! The atomic point formulas only ever talk to the field through [`FieldArithmetic`], which
//! captures the contract of a constant-time field library: multiply-with-reduction, add,
//! subtract, invert and copy. [`MontgomeryField`] is the provider used for the NIST curves
//! in [`crate::curve`].

use crate::{CurveParameters, Error, Result};
use bigint::{
    Odd, U256,
    modular::{FixedMontyForm, FixedMontyParams},
};
use core::fmt::{self, Debug};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use zeroize::DefaultIsZeroes;

const LIMBS: usize = U256::LIMBS;

/// Operations the atomic point formulas consume from a prime field implementation.
///
/// Every operation must run in time independent of its operands.
pub trait FieldArithmetic {
    /// Field element type. Always canonically reduced.
    type Element: Copy + Debug + Default + ConstantTimeEq + ConditionallySelectable + DefaultIsZeroes;

    /// Multiply with modular reduction: `a * b mod p`.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Modular addition: `a + b mod p`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Modular subtraction: `a - b mod p`.
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Modular inversion. `None` for zero.
    fn invert(&self, a: &Self::Element) -> CtOption<Self::Element>;

    /// Fixed-width copy.
    #[inline]
    fn copy(&self, a: &Self::Element) -> Self::Element {
        *a
    }

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Decode an integer, returning `None` if it is not reduced modulo `p`.
    fn from_uint(&self, uint: &U256) -> CtOption<Self::Element>;

    /// Encode an element as its canonical integer.
    fn to_uint(&self, element: &Self::Element) -> U256;
}

/// Element of a prime field, stored in Montgomery form: `FieldElement(a) = aR mod p`.
///
/// Only the Montgomery representative is kept; the modulus lives in the [`MontgomeryField`]
/// that produced the element, and elements are only meaningful together with it.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(U256);

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl DefaultIsZeroes for FieldElement {}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", self.0)
    }
}

/// Prime field with a modulus chosen at runtime.
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryField {
    params: FixedMontyParams<LIMBS>,
}

impl MontgomeryField {
    /// Set up the field for the given curve.
    ///
    /// The Montgomery constant carried by `params` is checked against the one derived from the
    /// modulus, so a mistyped override is rejected instead of silently miscomputing.
    pub fn new(params: &CurveParameters) -> Result<Self> {
        let modulus = Odd::new(*params.modulus())
            .into_option()
            .ok_or(Error::UnknownCurve)?;
        let monty = FixedMontyParams::new_vartime(modulus);

        if monty.r2() != params.r_squared() {
            return Err(Error::MontgomeryConstantMismatch);
        }

        Ok(Self { params: monty })
    }

    /// Field modulus.
    pub fn modulus(&self) -> U256 {
        *self.params.modulus().as_ref()
    }

    /// Additive identity.
    pub const fn zero(&self) -> FieldElement {
        FieldElement(U256::ZERO)
    }

    /// Big-endian encoding of the canonical integer value of `element`.
    pub fn to_be_bytes(&self, element: &FieldElement) -> [u8; U256::BYTES] {
        let mut bytes = [0u8; U256::BYTES];
        bytes.copy_from_slice(&self.to_uint(element).to_be_bytes());
        bytes
    }

    #[inline]
    fn monty(&self, element: &FieldElement) -> FixedMontyForm<LIMBS> {
        FixedMontyForm::from_montgomery(element.0, &self.params)
    }
}

impl FieldArithmetic for MontgomeryField {
    type Element = FieldElement;

    #[inline]
    fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement(*(self.monty(a) * self.monty(b)).as_montgomery())
    }

    #[inline]
    fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement(*(self.monty(a) + self.monty(b)).as_montgomery())
    }

    #[inline]
    fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement(*(self.monty(a) - self.monty(b)).as_montgomery())
    }

    fn invert(&self, a: &FieldElement) -> CtOption<FieldElement> {
        CtOption::from(self.monty(a).invert().map(|inverse| FieldElement(*inverse.as_montgomery())))
    }

    fn one(&self) -> FieldElement {
        FieldElement(*self.params.one())
    }

    fn from_uint(&self, uint: &U256) -> CtOption<FieldElement> {
        let is_reduced = uint.ct_lt(&self.modulus());
        let element = FixedMontyForm::new(uint, &self.params);
        CtOption::new(FieldElement(*element.as_montgomery()), is_reduced)
    }

    fn to_uint(&self, element: &FieldElement) -> U256 {
        self.monty(element).retrieve()
    }
}
