//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Telling the caller whether a bounds violation came from a fetch,
//!    a load, or a store.
//! 2. **Width Selection:** Naming the three access widths RV32I supports so that an
//!    invalid width cannot reach the memory model.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when a memory access fails during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    Fetch,

    /// Data read access (load instructions).
    Read,

    /// Data write access (store instructions).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Width of a single memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// One byte (LB, LBU, SB).
    Byte,
    /// Two bytes (LH, LHU, SH).
    Half,
    /// Four bytes (LW, SW, instruction fetch).
    Word,
}

impl AccessWidth {
    /// Returns the access width in bytes.
    #[inline(always)]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Returns the access width in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bytes() * 8
    }

    /// Maps the two-bit size selector used by LOAD/STORE `funct3[1:0]` to a width.
    ///
    /// Returns `None` for the selector `0b11`, which RV32I does not define.
    pub const fn from_size_bits(bits: u32) -> Option<Self> {
        match bits & 0x3 {
            0 => Some(Self::Byte),
            1 => Some(Self::Half),
            2 => Some(Self::Word),
            _ => None,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}
