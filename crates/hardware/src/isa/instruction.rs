//! Instruction encoding and decoded instruction structures.
//!
//! Provides bit extraction functions for the fixed-position fields of a 32-bit
//! RISC-V instruction word, and the [`Instruction`] type produced by the decoder.
//! Each format variant carries only the fields meaningful to that layout, so
//! execution cannot read a field the encoding does not define.

use crate::isa::immediate::{ImmFormat, sign_extend};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit position of the ALU "math bit" selecting SUB and SRA/SRAI.
pub const MATH_BIT_SHIFT: u32 = 30;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Register and function fields occupy the same bit positions in every
/// format, so they can be read without knowing the format first.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts bit 30, which selects SUB over ADD and arithmetic over logical right shifts.
    fn math_bit(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn math_bit(&self) -> bool {
        (self >> MATH_BIT_SHIFT) & 1 != 0
    }
}

/// Format-specific fields of a decoded instruction.
///
/// Immediates are stored as raw bit patterns at their natural width:
/// 12 bits for I and S, 13 bits for B (bit 0 clear), the upper 20 bits of a
/// word for U, and 21 bits for J (bit 0 clear).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register (OP).
    R {
        /// Destination register index.
        rd: usize,
        /// First source register index.
        rs1: usize,
        /// Second source register index.
        rs2: usize,
        /// Function code field 3.
        funct3: u32,
        /// Function code field 7.
        funct7: u32,
    },
    /// Register-immediate, load, and JALR.
    I {
        /// Destination register index.
        rd: usize,
        /// Source register index.
        rs1: usize,
        /// Function code field 3.
        funct3: u32,
        /// 12-bit immediate pattern.
        imm: u32,
    },
    /// Store.
    S {
        /// Base address register index.
        rs1: usize,
        /// Source data register index.
        rs2: usize,
        /// Function code field 3.
        funct3: u32,
        /// 12-bit immediate pattern.
        imm: u32,
    },
    /// Conditional branch.
    B {
        /// First compared register index.
        rs1: usize,
        /// Second compared register index.
        rs2: usize,
        /// Function code field 3.
        funct3: u32,
        /// 13-bit immediate pattern with bit 0 clear.
        imm: u32,
    },
    /// Upper immediate (LUI, AUIPC).
    U {
        /// Destination register index.
        rd: usize,
        /// Upper 20 bits in place, low 12 bits zero.
        imm: u32,
    },
    /// Jump (JAL).
    J {
        /// Destination register index.
        rd: usize,
        /// 21-bit immediate pattern with bit 0 clear.
        imm: u32,
    },
}

impl Format {
    /// Returns the immediate format of this variant, or `None` for R-type.
    pub const fn imm_format(&self) -> Option<ImmFormat> {
        match self {
            Self::R { .. } => None,
            Self::I { .. } => Some(ImmFormat::I),
            Self::S { .. } => Some(ImmFormat::S),
            Self::B { .. } => Some(ImmFormat::B),
            Self::U { .. } => Some(ImmFormat::U),
            Self::J { .. } => Some(ImmFormat::J),
        }
    }

    /// Returns the raw immediate pattern, or `None` for R-type.
    pub const fn raw_imm(&self) -> Option<u32> {
        match *self {
            Self::R { .. } => None,
            Self::I { imm, .. }
            | Self::S { imm, .. }
            | Self::B { imm, .. }
            | Self::U { imm, .. }
            | Self::J { imm, .. } => Some(imm),
        }
    }

    /// Returns the immediate sign-extended to 32 bits, or `None` for R-type.
    pub fn imm(&self) -> Option<i32> {
        let format = self.imm_format()?;
        let raw = self.raw_imm()?;
        Some(sign_extend(raw, format.width()) as i32)
    }
}

/// A decoded RV32I instruction.
///
/// Created fresh by [`decode`](crate::isa::decode::decode) for every fetched
/// word and consumed by one execution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field (bits 6:0).
    pub opcode: u32,
    /// Format-specific fields.
    pub format: Format,
}

impl Instruction {
    /// Returns bit 30 of the raw encoding (the ADD/SUB and SRL/SRA selector).
    #[inline(always)]
    pub fn math_bit(&self) -> bool {
        self.raw.math_bit()
    }

    /// Returns the destination register if the format writes one.
    pub const fn rd(&self) -> Option<usize> {
        match self.format {
            Format::R { rd, .. } | Format::I { rd, .. } | Format::U { rd, .. } | Format::J { rd, .. } => {
                Some(rd)
            }
            Format::S { .. } | Format::B { .. } => None,
        }
    }
}
