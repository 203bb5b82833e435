//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for memory access
//! operations. It maps LOAD and STORE `funct3` fields to an access width and
//! extension rule, performs the bounds-checked access through [`Memory`], and
//! widens loaded values to 32 bits.

use crate::common::data::AccessWidth;
use crate::common::error::MemoryError;
use crate::isa::immediate::{sign_extend, zero_extend};
use crate::isa::rv32i::funct3;
use crate::soc::Memory;

/// A decoded LOAD operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadOp {
    /// Number of bytes read.
    pub width: AccessWidth,
    /// Whether the loaded value is sign-extended.
    pub signed: bool,
}

impl LoadOp {
    /// Maps a LOAD `funct3` to its operation.
    ///
    /// `funct3[1:0]` selects the width and must not be `0b11`. `funct3[2]`
    /// requests zero extension, which only changes byte and halfword loads;
    /// a word load with bit 2 set behaves like LW.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        let Some(width) = AccessWidth::from_size_bits(f3 & funct3::MEM_WIDTH_MASK) else {
            return None;
        };
        Some(Self {
            width,
            signed: f3 & funct3::LOAD_UNSIGNED_BIT == 0,
        })
    }

    /// Widens a raw loaded value of this operation's width to 32 bits.
    pub const fn extend(self, raw: u32) -> u32 {
        if self.signed {
            sign_extend(raw, self.width.bits())
        } else {
            zero_extend(raw, self.width.bits())
        }
    }
}

/// A decoded STORE operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StoreOp {
    /// Number of bytes written.
    pub width: AccessWidth,
}

impl StoreOp {
    /// Maps a STORE `funct3` to its operation.
    ///
    /// The width is `1 << funct3[1:0]` bytes; a selector of `0b11` yields `None`.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        match AccessWidth::from_size_bits(f3 & funct3::MEM_WIDTH_MASK) {
            Some(width) => Some(Self { width }),
            None => None,
        }
    }
}

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Loads from `addr` and extends the value per `op`.
    ///
    /// # Errors
    ///
    /// Propagates [`MemoryError::OutOfBounds`] from the memory model.
    pub fn load(memory: &Memory, op: LoadOp, addr: u32) -> Result<u32, MemoryError> {
        memory.load(addr, op.width).map(|raw| op.extend(raw))
    }

    /// Stores the low `op.width` bytes of `value` at `addr`.
    ///
    /// # Errors
    ///
    /// Propagates [`MemoryError::OutOfBounds`] from the memory model; nothing
    /// is written in that case.
    pub fn store(memory: &mut Memory, op: StoreOp, addr: u32, value: u32) -> Result<(), MemoryError> {
        memory.store(addr, value, op.width)
    }
}
