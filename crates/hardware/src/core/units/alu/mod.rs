//! Arithmetic Logic Unit (ALU).
//!
//! A one-bit ALU that computes AND, OR, ADD and XOR of its operands in
//! parallel, then selects one result with a gate-level multiplexer:
//! each partial result is masked by one line of a 2-to-4 decoder driven by
//! the operation selector, and the four masked values are ORed together.
//!
//! - [`adder`]: the full adder supplying the ADD result and the carry-out.

/// One-bit full adder.
pub mod adder;

use crate::common::Bit;
use crate::core::gates::{and, decoder_2to4, or, xor};
use crate::core::pipeline::signals::AluOp;

use self::adder::full_adder;

/// Outputs of one ALU evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// Selected operation result.
    pub result: Bit,
    /// Carry-out of the full adder.
    ///
    /// Always the adder's carry, whichever operation was selected.
    pub cout: Bit,
}

/// One-bit Arithmetic Logic Unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Evaluates the ALU for selector `op = [op0, op1]`.
    ///
    /// | op0 | op1 | result    |
    /// |-----|-----|-----------|
    /// | 0   | 0   | `a & b`   |
    /// | 0   | 1   | `a \| b`  |
    /// | 1   | 0   | adder sum |
    /// | 1   | 1   | `a ^ b`   |
    ///
    /// # Examples
    ///
    /// ```
    /// use gatesim_core::common::Bit;
    /// use gatesim_core::core::pipeline::signals::AluOp;
    /// use gatesim_core::core::units::alu::Alu;
    ///
    /// let out = Alu::execute(Bit::One, Bit::One, Bit::Zero, AluOp::Add.select());
    /// assert_eq!(out.result, Bit::Zero);
    /// assert_eq!(out.cout, Bit::One);
    ///
    /// // The carry is reported even when ADD is not selected.
    /// let out = Alu::execute(Bit::One, Bit::One, Bit::Zero, AluOp::Xor.select());
    /// assert_eq!(out.result, Bit::Zero);
    /// assert_eq!(out.cout, Bit::One);
    /// ```
    pub const fn execute(a: Bit, b: Bit, cin: Bit, op: [Bit; 2]) -> AluOutput {
        let and_o = and(a, b);
        let or_o = or(a, b);
        let xor_o = xor(a, b);
        let add = full_adder(a, b, cin);

        let [sel_and, sel_or, sel_add, sel_xor] = decoder_2to4(op);
        let r0 = and(and_o, sel_and);
        let r1 = and(or_o, sel_or);
        let r2 = and(add.sum, sel_add);
        let r3 = and(xor_o, sel_xor);

        AluOutput {
            result: or(or(r0, r1), or(r2, r3)),
            cout: add.cout,
        }
    }

    /// Evaluates the ALU for a named operation.
    pub const fn execute_op(a: Bit, b: Bit, cin: Bit, op: AluOp) -> AluOutput {
        Self::execute(a, b, cin, op.select())
    }
}
