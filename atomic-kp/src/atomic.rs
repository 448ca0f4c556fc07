//! Atomic point doubling and mixed point addition.
//!
//! Both primitives execute the same sequence of field operation types:
//!
//! ```text
//! mul add sub mul add copy mul mul add mul mul add add mul sub mul sub sub mul mul copy sub
//! ```
//!
//! with no branches, so the operation stream observed while the scalar is processed does not
//! reveal whether a doubling or an addition is running. The step numbers in the comments
//! follow Table 2 of Kabin, Dyka and Langendoerfer, "Atomicity and Regularity Principles Do
//! Not Ensure Full Resistance of ECC Designs against Single-Trace Attacks"; the unnumbered
//! copy into `tempR0` sits between steps 5 and 6.
//!
//! Register names: `X1 = X`, `X2 = Y`, `X3 = Z`, `Z1 = Z^2` and `Z2 = Z^3`.

use crate::{
    AffinePoint, FieldArithmetic, Point, ScratchRegisters,
    trace::{Op, Primitive, Probe, Register, Step},
};

/// Executes field operations and reports each one to the probe.
struct Alu<'a, F, P> {
    field: &'a F,
    probe: &'a mut P,
}

impl<F: FieldArithmetic, P: Probe> Alu<'_, F, P> {
    #[inline(always)]
    fn mul(&mut self, dst: Register, a: &F::Element, b: &F::Element) -> F::Element {
        self.probe.record(Step { op: Op::Mul, dst });
        self.field.mul(a, b)
    }

    #[inline(always)]
    fn add(&mut self, dst: Register, a: &F::Element, b: &F::Element) -> F::Element {
        self.probe.record(Step { op: Op::Add, dst });
        self.field.add(a, b)
    }

    #[inline(always)]
    fn sub(&mut self, dst: Register, a: &F::Element, b: &F::Element) -> F::Element {
        self.probe.record(Step { op: Op::Sub, dst });
        self.field.sub(a, b)
    }

    #[inline(always)]
    fn copy(&mut self, dst: Register, a: &F::Element) -> F::Element {
        self.probe.record(Step { op: Op::Copy, dst });
        self.field.copy(a)
    }
}

/// Replace `point` with `2 * point`.
///
/// The cached `Z2`/`Z3` are not read, and are valid again on return. Behavior on the point at
/// infinity or a point of order two is unspecified.
pub fn double<F, P>(
    field: &F,
    point: &mut Point<F::Element>,
    regs: &mut ScratchRegisters<F::Element>,
    probe: &mut P,
) where
    F: FieldArithmetic,
    P: Probe,
{
    use Register::*;

    probe.begin(Primitive::Double);
    let mut alu = Alu { field, probe };
    let (p, r) = (point, regs);

    r.r0 = alu.mul(R0, &p.z, &p.z); // 1: Z^2
    r.r2 = alu.add(R2, &p.y, &p.y); // 2: 2Y
    r.r1 = alu.sub(R1, &p.x, &r.r0); // 3: X - Z^2
    p.z2 = alu.mul(Z2, &p.y, &r.r2); // 4: 2Y^2
    p.y = alu.add(Y, &p.z2, &p.z2); // 5: 4Y^2
    r.temp_r0 = alu.copy(TempR0, &r.r0); // filler
    r.r3 = alu.mul(R3, &r.r2, &p.z); // 6: Z' = 2YZ
    r.r2 = alu.mul(R2, &p.y, &p.x); // 7: S = 4XY^2
    p.x = alu.add(X, &p.x, &r.r0); // 8: X + Z^2
    r.r0 = alu.mul(R0, &r.r1, &p.x); // 9: X^2 - Z^4
    r.r1 = alu.mul(R1, &p.z2, &p.y); // 10: 8Y^4
    p.x = alu.add(X, &r.r0, &r.r0); // 11
    r.r0 = alu.add(R0, &r.r0, &p.x); // 12: M = 3(X^2 - Z^4)
    p.x = alu.mul(X, &r.r0, &r.r0); // 13: M^2
    p.x = alu.sub(X, &p.x, &r.r2); // 14
    p.z2 = alu.mul(Z2, &r.r3, &r.r3); // 15: Z'^2
    p.x = alu.sub(X, &p.x, &r.r2); // 16: X' = M^2 - 2S
    r.r2 = alu.sub(R2, &r.r2, &p.x); // 17: S - X'
    p.z3 = alu.mul(Z3, &p.z2, &r.r3); // 18: Z'^3
    p.y = alu.mul(Y, &r.r0, &r.r2); // 19
    p.z = alu.copy(Z, &r.r3); // 20
    p.y = alu.sub(Y, &p.y, &r.r1); // 21: Y' = M(S - X') - 8Y^4
}

/// Replace `point` with `point + addend`.
///
/// Requires the cached `Z2`/`Z3` of `point` to be valid, which holds whenever the previous
/// primitive applied to `point` was [`double`]. Leaves them stale. Behavior is unspecified
/// when `point` is the point at infinity or `±addend`.
pub fn add<F, P>(
    field: &F,
    point: &mut Point<F::Element>,
    addend: &AffinePoint<F::Element>,
    regs: &mut ScratchRegisters<F::Element>,
    probe: &mut P,
) where
    F: FieldArithmetic,
    P: Probe,
{
    use Register::*;

    probe.begin(Primitive::Add);
    let mut alu = Alu { field, probe };
    let (p, q, r) = (point, addend, regs);

    r.r1 = alu.mul(R1, &q.x, &p.z2); // 1: U = x Z^2
    r.r2 = alu.add(R2, &p.y, &p.y); // 2: filler
    r.r1 = alu.sub(R1, &r.r1, &p.x); // 3: H = U - X
    r.r2 = alu.mul(R2, &r.r1, &r.r1); // 4: H^2
    r.r0 = alu.add(R0, &r.r2, &r.r2); // 5: 2H^2
    r.temp_r0 = alu.copy(TempR0, &r.r0);
    r.r3 = alu.mul(R3, &p.x, &r.r2); // 6: X H^2
    r.r0 = alu.mul(R0, &q.y, &p.z3); // 7: y Z^3
    p.z3 = alu.add(Z3, &p.z3, &r.temp_r0); // 8: filler
    p.z3 = alu.mul(Z3, &r.r1, &r.r2); // 9: H^3
    r.r2 = alu.mul(R2, &p.z, &r.r1); // 10: Z' = Z H
    p.x = alu.add(X, &r.r3, &r.r3); // 11
    p.x = alu.add(X, &p.z3, &p.x); // 12: H^3 + 2X H^2
    p.z2 = alu.mul(Z2, &p.x, &p.x); // 13: filler
    r.r0 = alu.sub(R0, &r.r0, &p.y); // 14: r = y Z^3 - Y
    r.r1 = alu.mul(R1, &r.r0, &r.r0); // 15: r^2
    p.x = alu.sub(X, &r.r1, &p.x); // 16: X' = r^2 - H^3 - 2X H^2
    r.r1 = alu.sub(R1, &r.r3, &p.x); // 17: X H^2 - X'
    r.r3 = alu.mul(R3, &r.r1, &r.r0); // 18
    r.r0 = alu.mul(R0, &p.y, &p.z3); // 19: Y H^3
    p.z = alu.copy(Z, &r.r2); // 20
    p.y = alu.sub(Y, &r.r3, &r.r0); // 21: Y' = r(X H^2 - X') - Y H^3
}
