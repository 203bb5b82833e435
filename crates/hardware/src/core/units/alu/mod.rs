//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU for RV32I. It handles the
//! register-register (OP) and register-immediate (OP-IMM) computations:
//! arithmetic, logical operations, comparisons, and shifts on 32-bit operands.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::rv32i::{funct3, funct7};

/// Integer ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Logical shift left.
    Sll,
    /// Signed set-less-than.
    Slt,
    /// Unsigned set-less-than.
    Sltu,
    /// Bitwise exclusive or.
    Xor,
    /// Logical shift right.
    Srl,
    /// Arithmetic shift right.
    Sra,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
}

impl AluOp {
    /// Selects the operation for an OP (register-register) instruction.
    ///
    /// Only `funct7 == 0x00` is accepted, except that `0x20` selects SUB
    /// for `funct3 == 0` and SRA for `funct3 == 5`. Any other combination
    /// yields `None`.
    pub const fn from_reg(f3: u32, f7: u32) -> Option<Self> {
        let op = match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => Self::Add,
            (funct3::ADD_SUB, funct7::SUB) => Self::Sub,
            (funct3::SLL, funct7::DEFAULT) => Self::Sll,
            (funct3::SLT, funct7::DEFAULT) => Self::Slt,
            (funct3::SLTU, funct7::DEFAULT) => Self::Sltu,
            (funct3::XOR, funct7::DEFAULT) => Self::Xor,
            (funct3::SRL_SRA, funct7::DEFAULT) => Self::Srl,
            (funct3::SRL_SRA, funct7::SRA) => Self::Sra,
            (funct3::OR, funct7::DEFAULT) => Self::Or,
            (funct3::AND, funct7::DEFAULT) => Self::And,
            _ => return None,
        };
        Some(op)
    }

    /// Selects the operation for an OP-IMM instruction.
    ///
    /// `imm_hi` is `imm[11:5]`, which must be `0x00` for SLLI and SRLI and
    /// `0x20` for SRAI. It is ignored by the non-shift operations.
    pub const fn from_imm(f3: u32, imm_hi: u32) -> Option<Self> {
        let op = match f3 {
            funct3::ADD_SUB => Self::Add,
            funct3::SLT => Self::Slt,
            funct3::SLTU => Self::Sltu,
            funct3::XOR => Self::Xor,
            funct3::OR => Self::Or,
            funct3::AND => Self::And,
            funct3::SLL if imm_hi == funct7::DEFAULT => Self::Sll,
            funct3::SRL_SRA if imm_hi == funct7::DEFAULT => Self::Srl,
            funct3::SRL_SRA if imm_hi == funct7::SRA => Self::Sra,
            _ => return None,
        };
        Some(op)
    }

    /// Returns `true` for the three shift operations.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Stateless; every call is a pure function of its operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (only the low five bits are used by shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
