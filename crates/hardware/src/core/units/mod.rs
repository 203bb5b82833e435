//! Execution units and functional components.
//!
//! This module contains the stateless execution units an RV32I step is
//! built from: the integer ALU, the branch resolution unit, and the
//! load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
