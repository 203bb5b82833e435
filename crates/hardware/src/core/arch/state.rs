//! Architectural Machine State.
//!
//! The complete state an RV32I program can observe besides memory: the
//! program counter and the integer register file. A step consumes one
//! snapshot and produces the next, so the value is small and `Copy`.

use serde::{Deserialize, Serialize};

use super::gpr::Gpr;

/// Program counter plus general-purpose registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineState {
    /// Address of the next instruction to fetch.
    pub pc: u32,
    /// Integer register file.
    pub regs: Gpr,
}

impl MachineState {
    /// Creates a state with all registers zero and the given PC.
    pub const fn new(pc: u32) -> Self {
        Self {
            pc,
            regs: Gpr::new(),
        }
    }

    /// Reads register `idx`; `x0` always reads zero.
    #[inline(always)]
    pub const fn reg(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Writes register `idx`; writes to `x0` are discarded.
    #[inline(always)]
    pub const fn set_reg(&mut self, idx: usize, val: u32) {
        self.regs.write(idx, val);
    }
}
