//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RV32I architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`), each 32 bits wide.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::common::constants::REGFILE_SIZE;
use crate::isa::abi;

/// Mask selecting the 5-bit register index.
const INDEX_MASK: usize = REGFILE_SIZE - 1;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gpr {
    regs: [u32; REGFILE_SIZE],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGFILE_SIZE],
        }
    }

    /// Creates a register file from raw values.
    ///
    /// Slot 0 is forced to zero so the `x0` invariant holds from the start.
    pub const fn from_raw(mut regs: [u32; REGFILE_SIZE]) -> Self {
        regs[0] = 0;
        Self { regs }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low five bits are used.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `x0` always returns 0.
    #[inline(always)]
    pub const fn read(&self, idx: usize) -> u32 {
        let idx = idx & INDEX_MASK;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low five bits are used.
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & INDEX_MASK;
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 registers, `x0` included.
    pub const fn as_array(&self) -> [u32; REGFILE_SIZE] {
        self.regs
    }

    /// Clears `x0`, restoring the hardwired-zero invariant.
    pub const fn hardwire_zero(&mut self) {
        self.regs[0] = 0;
    }

    /// Renders all registers in pairs with their ABI names.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in (0..REGFILE_SIZE).step_by(2) {
            let _ = writeln!(
                out,
                "x{:<2} ({:<4}) = {:#010x}    x{:<2} ({:<4}) = {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            );
        }
        out
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
