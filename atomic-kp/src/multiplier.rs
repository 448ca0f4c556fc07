//! Left-to-right double-and-add scalar multiplication.

use crate::{
    Affine, AffinePoint, Error, FieldArithmetic, Point, Result, ScratchRegisters,
    atomic::{add, double},
    trace::Probe,
};
use core::str::Chars;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// A scalar as a string of binary digits, most significant first.
///
/// The leading digit is consumed by initializing the accumulator to the base point and is
/// not otherwise inspected. Every later digit drives one iteration of the multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarDigits<'a> {
    digits: &'a str,
    first: char,
    last: char,
}

impl<'a> ScalarDigits<'a> {
    /// Wrap a digit string.
    ///
    /// Only emptiness is checked here: other symbols are reported when the multiplier
    /// reaches them.
    pub fn new(digits: &'a str) -> Result<Self> {
        let mut chars = digits.chars();
        let first = chars.next().ok_or(Error::EmptyScalar)?;
        let last = chars.next_back().unwrap_or(first);

        Ok(Self {
            digits,
            first,
            last,
        })
    }

    /// The leading digit.
    pub fn first(&self) -> char {
        self.first
    }

    /// The final digit of the string.
    pub fn last(&self) -> char {
        self.last
    }

    /// The digits after the leading one, paired with their position in the string.
    pub fn tail(&self) -> core::iter::Skip<core::iter::Enumerate<Chars<'a>>> {
        self.digits.chars().enumerate().skip(1)
    }
}

/// When the multiplier executes a mixed addition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// Add only for `'1'` digits.
    ///
    /// Each primitive is atomic, but the number of primitives per digit still follows the
    /// scalar.
    #[default]
    Asymmetric,

    /// Add for every digit. The sum is always computed on a copy of the accumulator and
    /// selected back in constant time when the digit is `'1'`, so both digit values run the
    /// same addition on the same sum register.
    Balanced,
}

/// Multiplier configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MultiplierConfig {
    /// Addition schedule.
    pub schedule: Schedule,
}

/// How the digit loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Every digit was processed.
    Completed {
        /// Doublings executed.
        doublings: usize,
        /// Additions executed, unselected balanced sums included.
        additions: usize,
    },

    /// A digit other than `'0'` or `'1'` stopped the loop after that iteration's doubling.
    Halted {
        /// Character index of the offending digit.
        position: usize,
        /// The offending digit.
        digit: char,
    },
}

/// Output of [`ScalarMultiplier::multiply`].
#[derive(Clone, Copy, Debug)]
pub struct Multiplication<E> {
    /// The accumulator after the last processed digit.
    pub point: Point<E>,
    /// Final digit of the input string, which selects the normalization branch.
    pub last_digit: char,
    /// How the digit loop ended.
    pub status: Status,
}

impl<E: Copy> Multiplication<E> {
    /// Whether every digit was processed.
    pub fn is_completed(&self) -> bool {
        matches!(self.status, Status::Completed { .. })
    }

    /// Normalize the accumulator on the branch selected by [`Self::last_digit`].
    ///
    /// Does not look at [`Self::status`]: a halted run normalizes its partial accumulator.
    pub fn normalize<F>(&self, field: &F) -> Result<Affine<E>>
    where
        F: FieldArithmetic<Element = E>,
    {
        self.point.normalize(field, self.last_digit)
    }
}

/// Runs the digit loop over a field implementation.
#[derive(Clone, Copy, Debug)]
pub struct ScalarMultiplier<'f, F> {
    field: &'f F,
    config: MultiplierConfig,
}

impl<'f, F: FieldArithmetic> ScalarMultiplier<'f, F> {
    /// Multiplier with the default configuration.
    pub fn new(field: &'f F) -> Self {
        Self::with_config(field, MultiplierConfig::default())
    }

    /// Multiplier with an explicit configuration.
    pub fn with_config(field: &'f F, config: MultiplierConfig) -> Self {
        Self { field, config }
    }

    /// Compute `k * base`, where `k` is given by `digits`.
    pub fn multiply(
        &self,
        base: &AffinePoint<F::Element>,
        digits: &ScalarDigits<'_>,
    ) -> Multiplication<F::Element> {
        self.multiply_with_probe(base, digits, &mut ())
    }

    /// Like [`Self::multiply`], reporting every digit and field operation to `probe`.
    pub fn multiply_with_probe<P: Probe>(
        &self,
        base: &AffinePoint<F::Element>,
        digits: &ScalarDigits<'_>,
        probe: &mut P,
    ) -> Multiplication<F::Element> {
        let field = self.field;
        let mut acc = Point::from_affine(field, base);
        let mut sum = Point::default();
        let mut regs = ScratchRegisters::default();
        let (mut doublings, mut additions) = (0, 0);
        let mut halted = None;

        for (position, digit) in digits.tail() {
            probe.digit(position, digit);
            double(field, &mut acc, &mut regs, probe);
            doublings += 1;

            match (digit, self.config.schedule) {
                ('1', Schedule::Asymmetric) => {
                    add(field, &mut acc, base, &mut regs, probe);
                    additions += 1;
                }
                ('0', Schedule::Asymmetric) => (),
                ('0' | '1', Schedule::Balanced) => {
                    sum = acc;
                    add(field, &mut sum, base, &mut regs, probe);
                    acc.conditional_assign(&sum, Choice::from(u8::from(digit == '1')));
                    additions += 1;
                }
                (digit, _) => {
                    halted = Some(Status::Halted { position, digit });
                    break;
                }
            }
        }

        regs.zeroize();
        sum.zeroize();

        Multiplication {
            point: acc,
            last_digit: digits.last(),
            status: halted.unwrap_or(Status::Completed {
                doublings,
                additions,
            }),
        }
    }
}

/// Compute `k * base` and normalize the result.
///
/// The leading digit of `digits` must be `'1'`. A malformed digit anywhere in the string is
/// reported as [`Error::MalformedScalarDigit`] and no point is produced.
pub fn scalar_mul<F: FieldArithmetic>(
    field: &F,
    base: &AffinePoint<F::Element>,
    digits: &str,
    config: MultiplierConfig,
) -> Result<Affine<F::Element>> {
    scalar_mul_with_probe(field, base, digits, config, &mut ())
}

/// Like [`scalar_mul`], reporting every digit and field operation to `probe`.
pub fn scalar_mul_with_probe<F: FieldArithmetic, P: Probe>(
    field: &F,
    base: &AffinePoint<F::Element>,
    digits: &str,
    config: MultiplierConfig,
    probe: &mut P,
) -> Result<Affine<F::Element>> {
    let digits = ScalarDigits::new(digits)?;
    if digits.first() != '1' {
        return Err(Error::MalformedScalarDigit {
            position: 0,
            digit: digits.first(),
        });
    }

    let result = ScalarMultiplier::with_config(field, config).multiply_with_probe(
        base,
        &digits,
        probe,
    );

    match result.status {
        Status::Completed { .. } => result.normalize(field),
        Status::Halted { position, digit } => {
            Err(Error::MalformedScalarDigit { position, digit })
        }
    }
}
