//! Immediate Field Detangling.
//!
//! RISC-V scatters the immediate bits of the S, B, and J formats across the
//! instruction word so that the sign bit is always bit 31 and register fields
//! never move. This module reassembles those fields into plain integers and
//! provides the sign extension used everywhere a narrow field is widened.
//!
//! All functions are pure and return unsigned bit patterns; the caller decides
//! whether to interpret a value as signed via [`sign_extend`].

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit mask for the 12-bit I-Type immediate.
const I_IMM_MASK: u32 = 0xFFF;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit position of imm[11:5] in the reconstructed S-Type immediate.
const S_IMM_HIGH_POS: u32 = 5;

/// Bit shift for extracting B-Type immediate bit 11 (bit 7 of instruction).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_11_SHIFT: u32 = 7;

/// Bit shift for extracting B-Type immediate bits 4-1 (bits 8-11 of instruction).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-Type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for extracting B-Type immediate bits 10-5 (bits 25-30 of instruction).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-Type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift for extracting B-Type immediate bit 12 (bit 31 of instruction).
const B_IMM_12_SHIFT: u32 = 31;

/// Bit mask for U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Bit shift for extracting J-Type immediate bits 19-12 (bits 12-19 of instruction).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_SHIFT: u32 = 12;

/// Bit mask for J-Type immediate bits 19-12 (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;

/// Bit shift for extracting J-Type immediate bit 11 (bit 20 of instruction).
const J_IMM_11_SHIFT: u32 = 20;

/// Bit shift for extracting J-Type immediate bits 10-1 (bits 21-30 of instruction).
const J_IMM_10_1_SHIFT: u32 = 21;

/// Bit mask for J-Type immediate bits 10-1 (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;

/// Bit shift for extracting J-Type immediate bit 20 (bit 31 of instruction).
const J_IMM_20_SHIFT: u32 = 31;

/// Instruction formats that carry an immediate.
///
/// R-type has no immediate and no variant here, so asking for
/// an R-type immediate does not type-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmFormat {
    /// Register-immediate, loads, and JALR.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// LUI and AUIPC.
    U,
    /// JAL.
    J,
}

impl ImmFormat {
    /// Returns the significant width of the detangled immediate in bits.
    ///
    /// The U-Type value already occupies the full 32-bit word.
    pub const fn width(self) -> u32 {
        match self {
            Self::I | Self::S => 12,
            Self::B => 13,
            Self::U => 32,
            Self::J => 21,
        }
    }
}

/// Reassembles the immediate of `word` according to `format`.
///
/// The result is the raw, unsigned bit pattern at the format's natural width
/// (see [`ImmFormat::width`]). B and J immediates always have bit 0 clear.
pub const fn detangle(word: u32, format: ImmFormat) -> u32 {
    match format {
        ImmFormat::I => (word >> I_IMM_SHIFT) & I_IMM_MASK,
        ImmFormat::S => {
            let low = (word >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
            let high = (word >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
            (high << S_IMM_HIGH_POS) | low
        }
        ImmFormat::B => {
            let bit_11 = (word >> B_IMM_11_SHIFT) & 1;
            let bits_4_1 = (word >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
            let bits_10_5 = (word >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
            let bit_12 = (word >> B_IMM_12_SHIFT) & 1;
            (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1)
        }
        ImmFormat::U => word & U_IMM_MASK,
        ImmFormat::J => {
            let bits_19_12 = (word >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
            let bit_11 = (word >> J_IMM_11_SHIFT) & 1;
            let bits_10_1 = (word >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
            let bit_20 = (word >> J_IMM_20_SHIFT) & 1;
            (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1)
        }
    }
}

/// Sign extends the low `bits` bits of `value` to a 32-bit two's-complement pattern.
///
/// Bits above the field are ignored. If bit `bits - 1` is set the result is
/// `field - 2^bits` modulo 2^32, otherwise the field itself.
///
/// # Arguments
///
/// * `value` - The value holding the field in its low bits.
/// * `bits` - The field width, in `1..=32`.
///
/// # Examples
///
/// ```
/// use rv32sim_core::isa::immediate::sign_extend;
///
/// assert_eq!(sign_extend(0xFFF, 12), 0xFFFF_FFFF);
/// assert_eq!(sign_extend(0x7FF, 12), 0x7FF);
/// assert_eq!(sign_extend(0x80, 8) as i32, -128);
/// ```
#[inline(always)]
pub const fn sign_extend(value: u32, bits: u32) -> u32 {
    let shift = 32 - bits;
    (((value << shift) as i32) >> shift) as u32
}

/// Zero extends the low `bits` bits of `value`, clearing everything above the field.
#[inline(always)]
pub const fn zero_extend(value: u32, bits: u32) -> u32 {
    if bits >= 32 {
        value
    } else {
        value & ((1 << bits) - 1)
    }
}
