//! RISC-V RV32I instruction-set simulator library.
//!
//! This crate implements a functional (not cycle-accurate) RV32I simulator with the following:
//! 1. **ISA:** Field extraction, immediate detangling, decoding, and disassembly of the 37
//!    base integer instructions that touch registers and memory.
//! 2. **Memory:** A fixed-capacity little-endian memory that rejects every access outside
//!    its configured window.
//! 3. **Core:** A single-step engine (`state -> next state`) driving ALU, branch, and
//!    load/store units, with `x0` hardwired to zero.
//! 4. **Simulation:** Loader, configuration, run loop, and statistics collection.
//!
//! # Example
//!
//! ```
//! use rv32sim_core::{Config, HaltReason, Simulator};
//!
//! // addi x1, x0, 5 ; jal x0, 0
//! let image = [0x0050_0093_u32, 0x0000_006F]
//!     .iter()
//!     .flat_map(|w| w.to_le_bytes())
//!     .collect::<Vec<u8>>();
//!
//! let mut sim = Simulator::new(&Config::default()).unwrap();
//! sim.load_image(&image).unwrap();
//! let summary = sim.run(100);
//! assert_eq!(summary.reason, HaltReason::SelfLoop);
//! assert_eq!(summary.state.reg(1), 5);
//! ```

/// Common types and constants (access types, widths, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-loadable structures).
pub mod config;
/// CPU core (architectural state, step engine, execution units).
pub mod core;
/// Instruction set (fields, immediates, decode, disassembly, ABI names).
pub mod isa;
/// Binary loader and run loop.
pub mod sim;
/// Guest memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state snapshot (PC plus registers).
pub use crate::core::MachineState;
/// Single-step entry points.
pub use crate::core::cpu::{execute, step, step_in_place};
/// Instruction decoder.
pub use crate::isa::decode::decode;
/// Run loop types.
pub use crate::sim::{HaltReason, RunSummary, SimError, Simulator};
/// Bounds-checked guest memory.
pub use crate::soc::Memory;
