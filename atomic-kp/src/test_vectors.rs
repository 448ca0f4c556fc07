//! Scalar multiplication test vectors.

use hex_literal::hex;

/// Expected affine result of multiplying a curve's generator by a scalar.
#[derive(Clone, Copy, Debug)]
pub struct MultiplicationVector {
    /// Curve name, as accepted by [`CurveParameters::load`][crate::CurveParameters::load].
    pub curve: &'static str,
    /// Scalar as binary digits, most significant first.
    pub scalar: &'static str,
    /// Big-endian `x`, one byte per `byte_len` of the curve.
    pub x: &'static [u8],
    /// Big-endian `y`, one byte per `byte_len` of the curve.
    pub y: &'static [u8],
}

/// `0x23BDFD * G` on each supported curve.
///
/// The secp256r1 entry is the reference output of the Rondepierre atomic pattern demo in
/// the FLECC_IN_C library. The others were computed independently with textbook affine
/// arithmetic.
pub const GOLDEN_VECTORS: &[MultiplicationVector] = &[
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "1000111011110111111101",
        x: &hex!("2279468335067aff50369bb45e4dc02316a8b029ad219845625b33dc18228f16"),
        y: &hex!("05ca25c759fad701056f23cf4ea4231c8cb00c31e3562831ad555a4b4ed68df3"),
    },
    MultiplicationVector {
        curve: "secp224r1",
        scalar: "1000111011110111111101",
        x: &hex!("0c9bc4c54aad9830d18bda714d728eb28e600cee7440b051bf8609a5"),
        y: &hex!("83d1dbe1580da8edf5ab26a706fd74b72fc0aeeda6243f7f8cababb8"),
    },
    MultiplicationVector {
        curve: "secp192r1",
        scalar: "1000111011110111111101",
        x: &hex!("7c41f01bb1908fe2982d307eace6b408b64bf8400d5ce290"),
        y: &hex!("0d1df160d56a0d35433b26a9014e039e8123fffe3bd62f37"),
    },
];

/// Small multiples of the secp256r1 generator, covering both normalization branches and
/// runs of zero digits.
pub const SMALL_MULTIPLES: &[MultiplicationVector] = &[
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "11",
        x: &hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        y: &hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    },
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "101",
        x: &hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        y: &hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    },
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "1010",
        x: &hex!("cef66d6b2a3a993e591214d1ea223fb545ca6c471c48306e4c36069404c5723f"),
        y: &hex!("878662a229aaae906e123cdd9d3b4c10590ded29fe751eeeca34bbaa44af0773"),
    },
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "1011",
        x: &hex!("3ed113b7883b4c590638379db0c21cda16742ed0255048bf433391d374bc21d1"),
        y: &hex!("9099209accc4c8a224c843afa4f4c68a090d04da5e9889dae2f8eefce82a3740"),
    },
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "100000",
        x: &hex!("2377c7d690a242ca6c45074e8ea5beefaa557fd5b68371d9d1475bd52a7ed0e1"),
        y: &hex!("47a13fb98413a4393f8d90e9bf901b7e6658a6cdecf46716e7c067b1ddb8d2b2"),
    },
    MultiplicationVector {
        curve: "secp256r1",
        scalar: "1000000000",
        x: &hex!("04c490528be759e4e8897bbd818d459aa416b9ae0b3c5dfc3469cea39f3f98de"),
        y: &hex!("30e50b46405cc74fade84c66242a8107471d9d7b4a4605eeebd949434e8d6e96"),
    },
];
