//! Memory, Decode, and Execution error definitions.
//!
//! This module defines the error handling for the simulator core. It provides:
//! 1. **Memory Errors:** Bounds violations and invalid memory configuration.
//! 2. **Decode Errors:** Instruction words whose opcode is not part of RV32I.
//! 3. **Execution Errors:** Failures raised while executing one step, wrapping the
//!    memory and decode errors together with the PC of the faulting instruction.
//!
//! Every error is recoverable at the step boundary: the engine returns it and the
//! caller decides whether to halt.

use thiserror::Error;

use super::data::{AccessType, AccessWidth};

/// Errors raised by the bounds-checked memory model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The access falls outside the inclusive `[lower, upper]` window.
    ///
    /// Raised before any byte is read or written.
    #[error(
        "out of bounds access at {addr:#010x} (width {width}) outside window [{lower:#010x}, {upper:#010x}]"
    )]
    OutOfBounds {
        /// First byte address of the access.
        addr: u32,
        /// Width of the access.
        width: AccessWidth,
        /// Lowest valid address.
        lower: u32,
        /// Highest valid address.
        upper: u32,
    },

    /// A program image does not fit into memory.
    #[error("image of {len} bytes exceeds memory capacity of {capacity} bytes")]
    ImageTooLarge {
        /// Length of the rejected image.
        len: usize,
        /// Capacity of the memory.
        capacity: usize,
    },

    /// A window is empty, inverted, or extends past the backing storage.
    #[error("invalid memory window [{lower:#010x}, {upper:#010x}] for capacity {capacity}")]
    InvalidWindow {
        /// Requested lowest valid address.
        lower: u32,
        /// Requested highest valid address.
        upper: u32,
        /// Capacity of the memory.
        capacity: usize,
    },
}

/// Errors raised by the instruction decoder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 7-bit opcode is not one of the RV32I base opcodes.
    #[error("unsupported opcode {opcode:#04x} in instruction word {word:#010x}")]
    UnsupportedOpcode {
        /// The opcode field (bits 6:0).
        opcode: u32,
        /// The complete instruction word.
        word: u32,
    },
}

/// Errors raised while executing a single step.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The instruction word could not be fetched.
    #[error("instruction fetch failed at pc {pc:#010x}")]
    Fetch {
        /// PC the fetch was attempted from.
        pc: u32,
        /// Underlying memory failure.
        #[source]
        source: MemoryError,
    },

    /// The fetched word could not be decoded.
    #[error("decode failed at pc {pc:#010x}")]
    Decode {
        /// PC of the undecodable word.
        pc: u32,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// A recognized opcode carries a function code the engine does not implement.
    #[error("illegal encoding {word:#010x} at pc {pc:#010x}")]
    IllegalEncoding {
        /// PC of the instruction.
        pc: u32,
        /// The complete instruction word.
        word: u32,
    },

    /// A load or store touched memory outside the valid window.
    #[error("{access} access failed at pc {pc:#010x}")]
    Memory {
        /// PC of the load or store instruction.
        pc: u32,
        /// Whether the failing access was a read or a write.
        access: AccessType,
        /// Underlying memory failure.
        #[source]
        source: MemoryError,
    },
}

impl ExecError {
    /// Returns the PC of the instruction that raised the error.
    pub const fn pc(&self) -> u32 {
        match self {
            Self::Fetch { pc, .. }
            | Self::Decode { pc, .. }
            | Self::IllegalEncoding { pc, .. }
            | Self::Memory { pc, .. } => *pc,
        }
    }
}
