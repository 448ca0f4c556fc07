//! Domain parameters for the supported curves.
//!
//! The atomic doubling formula computes `3(X - Z^2)(X + Z^2)`, which is only the tangent slope
//! numerator when the curve's `a` coefficient is `-3`, and field elements are 256-bit
//! integers. The registry therefore holds the NIST prime curves satisfying both.

use crate::{Error, Result};
use bigint::U256;

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 - 3x + b` over a prime field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    name: &'static str,
    bits: u32,
    modulus: U256,
    r_squared: U256,
    equation_b: U256,
    generator: (U256, U256),
}

/// NIST P-256 (a.k.a. secp256r1, prime256v1).
pub const SECP256R1: CurveParameters = CurveParameters {
    name: "secp256r1",
    bits: 256,
    modulus: U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    r_squared: U256::from_be_hex(
        "00000004fffffffdfffffffffffffffefffffffbffffffff0000000000000003",
    ),
    equation_b: U256::from_be_hex(
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    ),
    generator: (
        U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
};

/// NIST P-224 (a.k.a. secp224r1).
pub const SECP224R1: CurveParameters = CurveParameters {
    name: "secp224r1",
    bits: 224,
    modulus: U256::from_be_hex("00000000ffffffffffffffffffffffffffffffff000000000000000000000001"),
    r_squared: U256::from_be_hex(
        "00000000fffffffffffffffe00000000ffffffff00000000ffffffff00000001",
    ),
    equation_b: U256::from_be_hex(
        "00000000b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    ),
    generator: (
        U256::from_be_hex("00000000b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        U256::from_be_hex("00000000bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    ),
};

/// NIST P-192 (a.k.a. secp192r1, prime192v1).
pub const SECP192R1: CurveParameters = CurveParameters {
    name: "secp192r1",
    bits: 192,
    modulus: U256::from_be_hex("0000000000000000fffffffffffffffffffffffffffffffeffffffffffffffff"),
    r_squared: U256::from_be_hex(
        "0000000000000000000000000000000200000000000000030000000000000002",
    ),
    equation_b: U256::from_be_hex(
        "000000000000000064210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    ),
    generator: (
        U256::from_be_hex("0000000000000000188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        U256::from_be_hex("000000000000000007192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    ),
};

const REGISTRY: &[(&[&str], CurveParameters)] = &[
    (&["secp256r1", "prime256v1", "P-256"], SECP256R1),
    (&["secp224r1", "P-224"], SECP224R1),
    (&["secp192r1", "prime192v1", "P-192"], SECP192R1),
];

impl CurveParameters {
    /// Look up a curve by name or alias, ignoring ASCII case.
    pub fn load(name: &str) -> Result<Self> {
        REGISTRY
            .iter()
            .find(|(aliases, _)| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name)))
            .map(|(_, params)| *params)
            .ok_or(Error::UnknownCurve)
    }

    /// Replace the Montgomery constant `R^2 mod p` with an externally supplied value.
    #[must_use]
    pub fn with_r_squared(mut self, r_squared: U256) -> Self {
        self.r_squared = r_squared;
        self
    }

    /// Canonical curve name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bit length of the field modulus.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of 64-bit words needed to hold a field element.
    pub fn word_width(&self) -> usize {
        self.bits.div_ceil(64) as usize
    }

    /// Number of bytes needed to hold a field element.
    pub fn byte_len(&self) -> usize {
        self.bits.div_ceil(8) as usize
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &U256 {
        &self.modulus
    }

    /// Montgomery constant `R^2 mod p` for `R = 2^256`.
    pub fn r_squared(&self) -> &U256 {
        &self.r_squared
    }

    /// Coefficient `b` in the curve equation.
    pub fn equation_b(&self) -> &U256 {
        &self.equation_b
    }

    /// Generator point's affine coordinates: (x, y).
    pub fn generator(&self) -> &(U256, U256) {
        &self.generator
    }
}

/// Parse a big-endian hexadecimal integer of up to 256 bits.
///
/// Accepts an optional `0x` prefix and any number of leading zeros.
pub fn parse_hex(hex: &str) -> Result<U256> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex);
    }

    let digits = digits.trim_start_matches('0');
    if digits.len() > 64 {
        return Err(Error::InvalidHex);
    }

    let mut padded = [b'0'; 64];
    padded[64 - digits.len()..].copy_from_slice(digits.as_bytes());
    let padded = core::str::from_utf8(&padded).map_err(|_| Error::InvalidHex)?;

    Ok(U256::from_be_hex(padded))
}
