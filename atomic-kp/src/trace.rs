//! Instrumentation of the atomic primitives.
//!
//! Every field operation issued by [`double`][crate::double] and [`add`][crate::add] is
//! reported to a [`Probe`]. The unit type is the no-op probe used on the fast path, and
//! [`StepTrace`] records one primitive's operations without allocating.

/// Field operation type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Modular multiplication.
    Mul,
    /// Modular addition.
    Add,
    /// Modular subtraction.
    Sub,
    /// Register copy.
    Copy,
}

/// Destination register of a field operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    /// Scratch register `R0`.
    R0,
    /// Scratch register `R1`.
    R1,
    /// Scratch register `R2`.
    R2,
    /// Scratch register `R3`.
    R3,
    /// Scratch register `tempR0`, written once per primitive by a copy.
    TempR0,
    /// Jacobian `X` (`X1`).
    X,
    /// Jacobian `Y` (`X2`).
    Y,
    /// Jacobian `Z` (`X3`).
    Z,
    /// Cached `Z^2` (`Z1`).
    Z2,
    /// Cached `Z^3` (`Z2`).
    Z3,
}

/// One executed field operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Operation type.
    pub op: Op,
    /// Register receiving the result.
    pub dst: Register,
}

/// Which atomic primitive is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Point doubling.
    Double,
    /// Mixed point addition.
    Add,
}

/// Number of field operations in one atomic primitive, the `tempR0` copy included.
pub const STEPS: usize = 22;

/// Observer of the field operations issued during a scalar multiplication.
///
/// All methods default to doing nothing.
pub trait Probe {
    /// A primitive is about to run.
    fn begin(&mut self, _primitive: Primitive) {}

    /// A field operation ran.
    fn record(&mut self, _step: Step) {}

    /// The multiplier is about to consume the scalar digit at `position`.
    fn digit(&mut self, _position: usize, _digit: char) {}
}

impl Probe for () {}

impl<P: Probe + ?Sized> Probe for &mut P {
    fn begin(&mut self, primitive: Primitive) {
        (**self).begin(primitive)
    }

    fn record(&mut self, step: Step) {
        (**self).record(step)
    }

    fn digit(&mut self, position: usize, digit: char) {
        (**self).digit(position, digit)
    }
}

/// Records the steps of the most recent primitive.
#[derive(Clone, Copy, Debug)]
pub struct StepTrace {
    primitive: Option<Primitive>,
    steps: [Step; STEPS],
    len: usize,
    overflow: bool,
}

impl Default for StepTrace {
    fn default() -> Self {
        Self {
            primitive: None,
            steps: [Step {
                op: Op::Copy,
                dst: Register::R0,
            }; STEPS],
            len: 0,
            overflow: false,
        }
    }
}

impl StepTrace {
    /// The primitive that produced the recorded steps.
    pub fn primitive(&self) -> Option<Primitive> {
        self.primitive
    }

    /// Recorded steps, in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps[..self.len]
    }

    /// Operation types of the recorded steps.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps().iter().map(|step| step.op)
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the primitive issued more than [`STEPS`] operations.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }
}

impl Probe for StepTrace {
    fn begin(&mut self, primitive: Primitive) {
        self.primitive = Some(primitive);
        self.len = 0;
        self.overflow = false;
    }

    fn record(&mut self, step: Step) {
        match self.steps.get_mut(self.len) {
            Some(slot) => {
                *slot = step;
                self.len += 1;
            }
            None => self.overflow = true,
        }
    }
}
