//! Common utilities and types used throughout the RV32I simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Memory capacity, instruction size, and register file size.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write)
//!    and their widths.
//! 3. **Error Handling:** Memory, decode, and execution error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type and width definitions.
pub mod data;

/// Error types for memory, decode, and execution failures.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, MEM_SIZE, REGFILE_SIZE};
pub use data::{AccessType, AccessWidth};
pub use error::{DecodeError, ExecError, MemoryError};
