//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The scalar digit string is empty, so there is no leading digit to start from.
    EmptyScalar,

    /// A scalar digit other than `'0'` or `'1'`.
    MalformedScalarDigit {
        /// Character index of the offending digit.
        position: usize,
        /// The offending digit.
        digit: char,
    },

    /// The final scalar digit selects neither normalization branch.
    UnsupportedNormalizationBranch {
        /// The final digit.
        digit: char,
    },

    /// Inversion of zero: the accumulator reached an exceptional point.
    NotInvertible,

    /// No curve is registered under the requested name.
    UnknownCurve,

    /// Malformed hexadecimal integer.
    InvalidHex,

    /// A coordinate is not reduced modulo the field prime.
    CoordinateOutOfRange,

    /// The base point does not satisfy the curve equation.
    PointNotOnCurve,

    /// The supplied `R^2 mod p` does not match the field modulus.
    MontgomeryConstantMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyScalar => write!(f, "scalar digit string is empty"),
            Error::MalformedScalarDigit { position, digit } => {
                write!(f, "malformed scalar digit {digit:?} at position {position}")
            }
            Error::UnsupportedNormalizationBranch { digit } => {
                write!(f, "no normalization branch for final scalar digit {digit:?}")
            }
            Error::NotInvertible => write!(f, "attempted to invert zero"),
            Error::UnknownCurve => write!(f, "unknown curve"),
            Error::InvalidHex => write!(f, "invalid hexadecimal integer"),
            Error::CoordinateOutOfRange => write!(f, "coordinate overflows the field modulus"),
            Error::PointNotOnCurve => write!(f, "point is not on the curve"),
            Error::MontgomeryConstantMismatch => {
                write!(f, "Montgomery constant does not match the field modulus")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
