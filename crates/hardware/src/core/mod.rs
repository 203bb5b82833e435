//! CPU Core.
//!
//! This module groups everything that executes RV32I instructions:
//! 1. **Arch:** Architectural state (program counter and register file).
//! 2. **CPU:** The single-step engine.
//! 3. **Units:** The stateless ALU, branch, and load/store units the engine drives.

/// Architectural state (GPRs, machine state snapshot).
pub mod arch;

/// Single-step execution engine.
pub mod cpu;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::arch::MachineState;
pub use self::cpu::{Retired, execute, step, step_in_place};
