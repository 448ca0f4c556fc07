//! Point representations shared by the atomic primitives.

use crate::{CurveParameters, Error, FieldArithmetic, Result, curve::parse_hex};
use bigint::U256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// A point in affine coordinates.
///
/// The base point of a scalar multiplication stays in this form for the whole run and is the
/// fixed second operand of every mixed addition.
#[derive(Clone, Copy, Debug, Default)]
pub struct AffinePoint<E> {
    pub(crate) x: E,
    pub(crate) y: E,
}

impl<E: Copy> AffinePoint<E> {
    /// Create a point from coordinates already known to satisfy the curve equation.
    pub const fn from_coordinates(x: E, y: E) -> Self {
        Self { x, y }
    }

    /// Affine `x`-coordinate.
    pub fn x(&self) -> E {
        self.x
    }

    /// Affine `y`-coordinate.
    pub fn y(&self) -> E {
        self.y
    }
}

impl<E: ConstantTimeEq> AffinePoint<E> {
    /// Decode and validate a point on `y^2 = x^3 - 3x + b`.
    pub fn from_uints<F>(field: &F, params: &CurveParameters, x: &U256, y: &U256) -> Result<Self>
    where
        F: FieldArithmetic<Element = E>,
    {
        let x = Option::<E>::from(field.from_uint(x)).ok_or(Error::CoordinateOutOfRange)?;
        let y = Option::<E>::from(field.from_uint(y)).ok_or(Error::CoordinateOutOfRange)?;
        let b = Option::<E>::from(field.from_uint(params.equation_b()))
            .ok_or(Error::CoordinateOutOfRange)?;

        let three_x = field.add(&field.add(&x, &x), &x);
        let lhs = field.mul(&y, &y);
        let rhs = field.add(&field.sub(&field.mul(&field.mul(&x, &x), &x), &three_x), &b);

        if bool::from(lhs.ct_eq(&rhs)) {
            Ok(Self { x, y })
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Decode and validate a point from big-endian hexadecimal coordinates.
    pub fn from_hex<F>(field: &F, params: &CurveParameters, x: &str, y: &str) -> Result<Self>
    where
        F: FieldArithmetic<Element = E>,
    {
        Self::from_uints(field, params, &parse_hex(x)?, &parse_hex(y)?)
    }

    /// The curve's generator point.
    pub fn generator<F>(field: &F, params: &CurveParameters) -> Result<Self>
    where
        F: FieldArithmetic<Element = E>,
    {
        let (x, y) = params.generator();
        Self::from_uints(field, params, x, y)
    }
}

impl<E: ConstantTimeEq> ConstantTimeEq for AffinePoint<E> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl<E: ConstantTimeEq> PartialEq for AffinePoint<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<E: ConstantTimeEq> Eq for AffinePoint<E> {}

/// A point in Jacobian coordinates `(X, Y, Z)` with the powers `Z2 = Z^2` and `Z3 = Z^3`
/// carried alongside, so that `x = X / Z2` and `y = Y / Z3`.
///
/// Doubling leaves the cached powers valid. Mixed addition leaves them stale: they are
/// reused as filler destinations so that both primitives share an instruction shape.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point<E> {
    pub(crate) x: E,
    pub(crate) y: E,
    pub(crate) z: E,
    pub(crate) z2: E,
    pub(crate) z3: E,
}

impl<E: Copy> Point<E> {
    /// Lift an affine point with `Z = Z2 = Z3 = 1`.
    pub fn from_affine<F>(field: &F, point: &AffinePoint<E>) -> Self
    where
        F: FieldArithmetic<Element = E>,
    {
        let one = field.one();

        Self {
            x: point.x,
            y: point.y,
            z: one,
            z2: one,
            z3: one,
        }
    }

    /// Jacobian `X`.
    pub fn x(&self) -> E {
        self.x
    }

    /// Jacobian `Y`.
    pub fn y(&self) -> E {
        self.y
    }

    /// Jacobian `Z`.
    pub fn z(&self) -> E {
        self.z
    }

    /// Cached `Z^2`. Stale after a mixed addition.
    pub fn z2(&self) -> E {
        self.z2
    }

    /// Cached `Z^3`. Stale after a mixed addition.
    pub fn z3(&self) -> E {
        self.z3
    }
}

impl<E: ConditionallySelectable> ConditionallySelectable for Point<E> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: E::conditional_select(&a.x, &b.x, choice),
            y: E::conditional_select(&a.y, &b.y, choice),
            z: E::conditional_select(&a.z, &b.z, choice),
            z2: E::conditional_select(&a.z2, &b.z2, choice),
            z3: E::conditional_select(&a.z3, &b.z3, choice),
        }
    }
}

impl<E: Zeroize> Zeroize for Point<E> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
        self.z2.zeroize();
        self.z3.zeroize();
    }
}

/// The scratch registers `R0..R3` and `tempR0`.
///
/// Both primitives write and read these in their fixed order. No value survives from one
/// invocation to the next.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScratchRegisters<E> {
    pub(crate) r0: E,
    pub(crate) r1: E,
    pub(crate) r2: E,
    pub(crate) r3: E,
    pub(crate) temp_r0: E,
}

impl<E: Zeroize> Zeroize for ScratchRegisters<E> {
    fn zeroize(&mut self) {
        self.r0.zeroize();
        self.r1.zeroize();
        self.r2.zeroize();
        self.r3.zeroize();
        self.temp_r0.zeroize();
    }
}
