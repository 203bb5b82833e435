//! Global Simulator Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Memory Constants:** Reference memory capacity and access widths.
//! 2. **Instruction Constants:** Instruction size and register file size.
//! 3. **Simulation Constants:** Default step budget for the run loop.

/// Reference memory capacity in bytes (4 KiB).
pub const MEM_SIZE: usize = 4096;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers in the RV32I register file.
pub const REGFILE_SIZE: usize = 32;

/// Bit mask clearing the least-significant bit of a JALR target.
pub const JALR_TARGET_MASK: u32 = !1;

/// Default number of instructions the run loop executes before giving up.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;
