//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state of an RV32I hart.
//! It includes the following modules:
//! 1. **GPRs:** General-Purpose Register file implementation.
//! 2. **State:** The program counter and register file as one snapshot.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Architectural machine state (PC plus GPRs).
pub mod state;

pub use self::gpr::Gpr;
pub use self::state::MachineState;
