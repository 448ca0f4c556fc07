//! Conversion of the accumulator back to affine coordinates.

use crate::{AffinePoint, Error, FieldArithmetic, Point, Result};
use subtle::ConstantTimeEq;

/// How the powers of `Z` used by the normalization are obtained.
///
/// Selected by the final digit the multiplier processed: after a `'1'` the accumulator's
/// last update was a mixed addition, which leaves the cached powers stale, so they are
/// recomputed from `Z`. After a `'0'` the last update was a doubling and the cache is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NormalizationBranch {
    /// `Z^2` and `Z^3` recomputed from `Z`.
    Recomputed,
    /// `Z^2` and `Z^3` read from the point's cache.
    Cached,
}

impl NormalizationBranch {
    /// Branch selected by the final processed scalar digit.
    pub fn from_digit(digit: char) -> Result<Self> {
        match digit {
            '1' => Ok(Self::Recomputed),
            '0' => Ok(Self::Cached),
            digit => Err(Error::UnsupportedNormalizationBranch { digit }),
        }
    }

    /// The digit selecting this branch.
    pub fn digit(self) -> char {
        match self {
            Self::Recomputed => '1',
            Self::Cached => '0',
        }
    }
}

/// A normalized point, tagged with the branch that produced it.
#[derive(Clone, Copy, Debug)]
pub struct Affine<E> {
    /// Affine coordinates.
    pub point: AffinePoint<E>,
    /// Normalization branch taken.
    pub branch: NormalizationBranch,
}

impl<E: ConstantTimeEq> PartialEq for Affine<E> {
    fn eq(&self, other: &Self) -> bool {
        self.branch == other.branch && self.point == other.point
    }
}

impl<E: ConstantTimeEq> Eq for Affine<E> {}

impl<E: Copy> Point<E> {
    /// Convert to affine coordinates on the branch selected by `last_digit`.
    ///
    /// Returns [`Error::NotInvertible`] if the power of `Z` being inverted is zero, i.e. the
    /// accumulator is the point at infinity.
    pub fn normalize<F>(&self, field: &F, last_digit: char) -> Result<Affine<E>>
    where
        F: FieldArithmetic<Element = E>,
    {
        let branch = NormalizationBranch::from_digit(last_digit)?;
        let invert = |e: &E| Option::<E>::from(field.invert(e)).ok_or(Error::NotInvertible);

        let (x, y) = match branch {
            NormalizationBranch::Recomputed => {
                let z2 = field.mul(&self.z, &self.z);
                let x = field.mul(&self.x, &invert(&z2)?);
                let z3 = field.mul(&self.z, &z2);
                let y = field.mul(&self.y, &invert(&z3)?);
                (x, y)
            }
            NormalizationBranch::Cached => {
                let x = field.mul(&self.x, &invert(&self.z2)?);
                let y = field.mul(&self.y, &invert(&self.z3)?);
                (x, y)
            }
        };

        Ok(Affine {
            point: AffinePoint::from_coordinates(x, y),
            branch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::NormalizationBranch;
    use crate::{
        AffinePoint, CurveParameters, Error, MontgomeryField, Point, ScratchRegisters, double,
    };

    fn setup() -> (MontgomeryField, CurveParameters) {
        let params = CurveParameters::load("secp256r1").unwrap();
        (MontgomeryField::new(&params).unwrap(), params)
    }

    #[test]
    fn branch_from_digit() {
        assert_eq!(
            NormalizationBranch::from_digit('1'),
            Ok(NormalizationBranch::Recomputed)
        );
        assert_eq!(
            NormalizationBranch::from_digit('0'),
            Ok(NormalizationBranch::Cached)
        );
        assert_eq!(
            NormalizationBranch::from_digit('2'),
            Err(Error::UnsupportedNormalizationBranch { digit: '2' })
        );
    }

    #[test]
    fn lifted_point_round_trips() {
        let (field, params) = setup();
        let g = AffinePoint::generator(&field, &params).unwrap();
        let lifted = Point::from_affine(&field, &g);

        for digit in ['0', '1'] {
            assert_eq!(lifted.normalize(&field, digit).unwrap().point, g);
        }
    }

    #[test]
    fn branches_agree_after_doubling() {
        let (field, params) = setup();
        let g = AffinePoint::generator(&field, &params).unwrap();
        let mut p = Point::from_affine(&field, &g);
        double(&field, &mut p, &mut ScratchRegisters::default(), &mut ());

        let cached = p.normalize(&field, '0').unwrap();
        let recomputed = p.normalize(&field, '1').unwrap();
        assert_eq!(cached.point, recomputed.point);
        assert_eq!(cached.branch, NormalizationBranch::Cached);
    }

    #[test]
    fn zero_z_is_not_invertible() {
        let (field, _) = setup();
        let mut p = Point::from_affine(&field, &AffinePoint::default());
        p.z = field.zero();

        assert_eq!(p.normalize(&field, '1'), Err(Error::NotInvertible));
    }
}
