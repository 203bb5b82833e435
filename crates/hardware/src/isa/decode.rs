//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit RV32I instruction words into a structured
//! [`Instruction`]. It classifies the word by its 7-bit opcode into one of the
//! six instruction formats (R, I, S, B, U, J), extracts the fixed-position
//! register and function fields, and detangles the immediate. Decoding is a pure
//! function of the word; it never touches memory or machine state.

use crate::common::error::DecodeError;
use crate::isa::immediate::{ImmFormat, detangle};
use crate::isa::instruction::{Format, Instruction, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedOpcode`] if bits 6:0 are not an RV32I
/// base opcode.
///
/// # Examples
///
/// ```
/// use rv32sim_core::isa::decode::decode;
/// use rv32sim_core::isa::instruction::Format;
///
/// // addi x1, x0, 5
/// let inst = decode(0x0050_0093).unwrap();
/// assert_eq!(inst.format, Format::I { rd: 1, rs1: 0, funct3: 0, imm: 5 });
/// ```
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let opcode = word.opcode();

    let format = match opcode {
        opcodes::OP_LUI | opcodes::OP_AUIPC => Format::U {
            rd: word.rd(),
            imm: detangle(word, ImmFormat::U),
        },
        opcodes::OP_JAL => Format::J {
            rd: word.rd(),
            imm: detangle(word, ImmFormat::J),
        },
        opcodes::OP_JALR | opcodes::OP_LOAD | opcodes::OP_IMM => Format::I {
            rd: word.rd(),
            rs1: word.rs1(),
            funct3: word.funct3(),
            imm: detangle(word, ImmFormat::I),
        },
        opcodes::OP_BRANCH => Format::B {
            rs1: word.rs1(),
            rs2: word.rs2(),
            funct3: word.funct3(),
            imm: detangle(word, ImmFormat::B),
        },
        opcodes::OP_STORE => Format::S {
            rs1: word.rs1(),
            rs2: word.rs2(),
            funct3: word.funct3(),
            imm: detangle(word, ImmFormat::S),
        },
        opcodes::OP_REG => Format::R {
            rd: word.rd(),
            rs1: word.rs1(),
            rs2: word.rs2(),
            funct3: word.funct3(),
            funct7: word.funct7(),
        },
        _ => return Err(DecodeError::UnsupportedOpcode { opcode, word }),
    };

    Ok(Instruction {
        raw: word,
        opcode,
        format,
    })
}
