#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use atomic_kp::{AffinePoint, CurveParameters, MontgomeryField, MultiplierConfig, scalar_mul};
//!
//! let params = CurveParameters::load("secp256r1")?;
//! let field = MontgomeryField::new(&params)?;
//! let g = AffinePoint::generator(&field, &params)?;
//!
//! // 5 * G
//! let five_g = scalar_mul(&field, &g, "101", MultiplierConfig::default())?;
//! assert_eq!(
//!     field.to_be_bytes(&five_g.point.x())[..4],
//!     [0x51, 0x59, 0x0b, 0x7a]
//! );
//! # Ok::<(), atomic_kp::Error>(())
//! ```

#[cfg(test)]
extern crate std;

mod affine;
mod atomic;
mod curve;
mod error;
mod field;
mod multiplier;
mod point;
pub mod trace;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use bigint::U256;

pub use crate::{
    affine::{Affine, NormalizationBranch},
    atomic::{add, double},
    curve::{CurveParameters, SECP192R1, SECP224R1, SECP256R1, parse_hex},
    error::{Error, Result},
    field::{FieldArithmetic, FieldElement, MontgomeryField},
    multiplier::{
        Multiplication, MultiplierConfig, ScalarDigits, ScalarMultiplier, Schedule, Status,
        scalar_mul, scalar_mul_with_probe,
    },
    point::{AffinePoint, Point, ScratchRegisters},
};
