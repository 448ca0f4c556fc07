//! Scalar multiplication tests.

use atomic_kp::{
    AffinePoint, CurveParameters, Error, FieldArithmetic, FieldElement, MontgomeryField,
    MultiplierConfig, NormalizationBranch, Point, ScalarDigits, ScalarMultiplier, Schedule,
    ScratchRegisters, Status, double, scalar_mul,
};
use hex_literal::hex;
use p256::{ProjectivePoint, Scalar, elliptic_curve::sec1::ToSec1Point};
use proptest::prelude::*;

/// `0x23BDFD * G` on secp256r1.
const GOLDEN_SCALAR: &str = "1000111011110111111101";
const GOLDEN_X: [u8; 32] = hex!("2279468335067aff50369bb45e4dc02316a8b029ad219845625b33dc18228f16");
const GOLDEN_Y: [u8; 32] = hex!("05ca25c759fad701056f23cf4ea4231c8cb00c31e3562831ad555a4b4ed68df3");

const CURVES: [&str; 3] = ["secp256r1", "secp224r1", "secp192r1"];

fn setup(curve: &str) -> (CurveParameters, MontgomeryField, AffinePoint<FieldElement>) {
    let params = CurveParameters::load(curve).unwrap();
    let field = MontgomeryField::new(&params).unwrap();
    let g = AffinePoint::generator(&field, &params).unwrap();
    (params, field, g)
}

fn mul(
    field: &MontgomeryField,
    g: &AffinePoint<FieldElement>,
    digits: &str,
    schedule: Schedule,
) -> AffinePoint<FieldElement> {
    scalar_mul(field, g, digits, MultiplierConfig { schedule })
        .unwrap()
        .point
}

/// Textbook affine double-and-add, `None` standing for the point at infinity.
fn reference_mul(
    field: &MontgomeryField,
    g: &AffinePoint<FieldElement>,
    k: u64,
) -> Option<AffinePoint<FieldElement>> {
    let add = |p: Option<AffinePoint<FieldElement>>, q: AffinePoint<FieldElement>| {
        let Some(p) = p else { return Some(q) };
        let lambda = if p == q {
            let x2 = field.mul(&p.x(), &p.x());
            let three_x2 = field.add(&field.add(&x2, &x2), &x2);
            let one = field.one();
            let three = field.add(&field.add(&one, &one), &one);
            let num = field.sub(&three_x2, &three);
            let den = field.add(&p.y(), &p.y());
            field.mul(&num, &Option::<FieldElement>::from(field.invert(&den))?)
        } else {
            let num = field.sub(&q.y(), &p.y());
            let den = field.sub(&q.x(), &p.x());
            field.mul(&num, &Option::<FieldElement>::from(field.invert(&den))?)
        };
        let x = field.sub(&field.sub(&field.mul(&lambda, &lambda), &p.x()), &q.x());
        let y = field.sub(&field.mul(&lambda, &field.sub(&p.x(), &x)), &p.y());
        Some(AffinePoint::from_coordinates(x, y))
    };

    let mut acc = None;
    for i in (0..64).rev() {
        if let Some(p) = acc {
            acc = add(Some(p), p);
        }
        if (k >> i) & 1 == 1 {
            acc = add(acc, *g);
        }
    }
    acc
}

#[test]
fn golden_vector() {
    let (_, field, g) = setup("secp256r1");
    let result = scalar_mul(&field, &g, GOLDEN_SCALAR, MultiplierConfig::default()).unwrap();

    assert_eq!(result.branch, NormalizationBranch::Recomputed);
    assert_eq!(field.to_be_bytes(&result.point.x()), GOLDEN_X);
    assert_eq!(field.to_be_bytes(&result.point.y()), GOLDEN_Y);
}

#[test]
fn golden_vector_other_curves() {
    for curve in ["secp224r1", "secp192r1"] {
        let (_, field, g) = setup(curve);
        assert_eq!(
            mul(&field, &g, GOLDEN_SCALAR, Schedule::Asymmetric),
            reference_mul(&field, &g, 0x23BDFD).unwrap()
        );
    }
}

#[test]
fn identity_scalar() {
    for curve in CURVES {
        let (_, field, g) = setup(curve);
        let result = scalar_mul(&field, &g, "1", MultiplierConfig::default()).unwrap();
        assert_eq!(result.point, g);
        assert_eq!(result.branch, NormalizationBranch::Recomputed);
    }
}

#[test]
fn power_of_two_scalar() {
    for curve in CURVES {
        let (_, field, g) = setup(curve);
        let mut p = Point::from_affine(&field, &g);
        let mut regs = ScratchRegisters::default();
        for _ in 0..16 {
            double(&field, &mut p, &mut regs, &mut ());
        }

        let expected = p.normalize(&field, '0').unwrap().point;
        let digits = format!("1{}", "0".repeat(16));
        assert_eq!(mul(&field, &g, &digits, Schedule::Asymmetric), expected);
        assert_eq!(Some(expected), reference_mul(&field, &g, 1 << 16));
    }
}

#[test]
fn normalization_branches() {
    let (_, field, g) = setup("secp256r1");
    let multiplier = ScalarMultiplier::new(&field);

    // after a trailing '0' the cache is valid and both branches agree
    let even = multiplier.multiply(&g, &ScalarDigits::new("10110").unwrap());
    assert_eq!(
        even.point.normalize(&field, '0').unwrap().point,
        even.point.normalize(&field, '1').unwrap().point
    );

    // after a trailing '1' only the recomputing branch is correct
    let odd = multiplier.multiply(&g, &ScalarDigits::new("10111").unwrap());
    let recomputed = odd.normalize(&field).unwrap();
    assert_eq!(recomputed.branch, NormalizationBranch::Recomputed);
    assert_eq!(Some(recomputed.point), reference_mul(&field, &g, 0b10111));
    assert_ne!(
        odd.point.normalize(&field, '0').unwrap().point,
        recomputed.point
    );

    assert_eq!(
        odd.point.normalize(&field, '2'),
        Err(Error::UnsupportedNormalizationBranch { digit: '2' })
    );
}

#[test]
fn malformed_digit() {
    let (_, field, g) = setup("secp256r1");

    assert_eq!(
        scalar_mul(&field, &g, "101x01", MultiplierConfig::default()),
        Err(Error::MalformedScalarDigit {
            position: 3,
            digit: 'x'
        })
    );

    // the loop stops after doubling 5G, so the partial accumulator holds 10G
    let digits = ScalarDigits::new("101x01").unwrap();
    let partial = ScalarMultiplier::new(&field).multiply(&g, &digits);
    assert_eq!(
        partial.status,
        Status::Halted {
            position: 3,
            digit: 'x'
        }
    );
    assert_eq!(
        partial.normalize(&field).unwrap().point,
        mul(&field, &g, "1010", Schedule::Asymmetric)
    );
}

#[test]
fn empty_and_leading_digit() {
    let (_, field, g) = setup("secp256r1");
    let config = MultiplierConfig::default();

    assert_eq!(scalar_mul(&field, &g, "", config), Err(Error::EmptyScalar));
    assert_eq!(
        scalar_mul(&field, &g, "011", config),
        Err(Error::MalformedScalarDigit {
            position: 0,
            digit: '0'
        })
    );
}

#[test]
fn custom_base_point() {
    let (params, field, g) = setup("secp256r1");
    let five_g = mul(&field, &g, "101", Schedule::Asymmetric);

    let x = format!("{:X}", field.to_uint(&five_g.x()));
    let y = format!("{:X}", field.to_uint(&five_g.y()));
    let base = AffinePoint::from_hex(&field, &params, &x, &y).unwrap();

    // 3 * (5G) = 15G
    assert_eq!(
        mul(&field, &base, "11", Schedule::Asymmetric),
        mul(&field, &g, "1111", Schedule::Asymmetric)
    );
}

#[test]
fn montgomery_constant_override() {
    let params = CurveParameters::load("secp256r1").unwrap();
    let r2 = *params.r_squared();

    assert!(MontgomeryField::new(&params.with_r_squared(r2)).is_ok());
    assert_eq!(
        MontgomeryField::new(&params.with_r_squared(atomic_kp::U256::ONE)).err(),
        Some(Error::MontgomeryConstantMismatch)
    );
}

proptest! {
    #[test]
    fn matches_p256(k in 1u64..) {
        let (_, field, g) = setup("secp256r1");
        let digits = format!("{k:b}");

        let expected = (ProjectivePoint::GENERATOR * Scalar::from(k))
            .to_affine()
            .to_sec1_point(false);
        let expected = expected.as_bytes();

        for schedule in [Schedule::Asymmetric, Schedule::Balanced] {
            let actual = mul(&field, &g, &digits, schedule);
            prop_assert_eq!(&field.to_be_bytes(&actual.x())[..], &expected[1..33]);
            prop_assert_eq!(&field.to_be_bytes(&actual.y())[..], &expected[33..65]);
        }
    }

    #[test]
    fn matches_reference(k in 2u64..(1 << 40), curve in 1usize..3) {
        let (_, field, g) = setup(CURVES[curve]);
        let digits = format!("{k:b}");

        prop_assert_eq!(
            Some(mul(&field, &g, &digits, Schedule::Asymmetric)),
            reference_mul(&field, &g, k)
        );
    }
}
