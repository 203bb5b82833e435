//! Branch Resolution Unit (BRU).
//!
//! Resolves the six RV32I conditional branches. The unit only decides
//! whether a branch is taken; target arithmetic belongs to the executor,
//! which knows the fetch PC.

use crate::isa::rv32i::funct3;

/// Branch comparison selected by `funct3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCond {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Signed less than.
    Lt,
    /// Signed greater than or equal.
    Ge,
    /// Unsigned less than.
    Ltu,
    /// Unsigned greater than or equal.
    Geu,
}

impl BranchCond {
    /// Maps a BRANCH `funct3` to its condition.
    ///
    /// Returns `None` for the undefined encodings `0b010` and `0b011`.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        match f3 {
            funct3::BEQ => Some(Self::Eq),
            funct3::BNE => Some(Self::Ne),
            funct3::BLT => Some(Self::Lt),
            funct3::BGE => Some(Self::Ge),
            funct3::BLTU => Some(Self::Ltu),
            funct3::BGEU => Some(Self::Geu),
            _ => None,
        }
    }
}

/// Branch resolution unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates `cond` on the two source register values.
    ///
    /// ```
    /// use rv32sim_core::core::units::bru::{BranchCond, Bru};
    ///
    /// assert!(Bru::evaluate(BranchCond::Lt, -1_i32 as u32, 0));
    /// assert!(!Bru::evaluate(BranchCond::Ltu, -1_i32 as u32, 0));
    /// ```
    pub const fn evaluate(cond: BranchCond, a: u32, b: u32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i32) < (b as i32),
            BranchCond::Ge => (a as i32) >= (b as i32),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }
}
