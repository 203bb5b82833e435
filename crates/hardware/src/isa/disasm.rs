//! Instruction Disassembler for RISC-V RV32I.
//!
//! Converts decoded instructions into a one-line textual form for debug
//! tracing, register dumps, and test diagnostics. Mnemonics are upper-case,
//! registers are rendered as `xN`, and immediates are rendered in hexadecimal
//! (negative values as `-0x..`). Encodings the simulator cannot name render as
//! the literal [`INVALID`] instead of failing.
//!
//! # Usage
//!
//! ```
//! use rv32sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0050_0093), "ADDI x1, x0, 0x5");
//! assert_eq!(disassemble(0xFFFF_FFFF), "Invalid");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::{Format, Instruction};
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Marker rendered for unrecognized encodings.
pub const INVALID: &str = "Invalid";

/// Mask for the shift amount held in `imm[4:0]` of a shift-immediate.
const SHAMT_MASK: u32 = 0x1F;

/// Bit position of `imm[11:5]` within a 12-bit I-Type immediate.
const SHIFT_FUNCT7_POS: u32 = 5;

/// Disassembles a 32-bit RISC-V instruction word.
///
/// Returns [`INVALID`] for words the decoder rejects as well as for
/// unrecognized function codes.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| INVALID.to_string(), |inst| inst.to_string())
}

/// Renders a signed immediate in hexadecimal.
fn hex(value: i32) -> String {
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{value:#x}")
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match render(self) {
            Some(text) => f.write_str(&text),
            None => f.write_str(INVALID),
        }
    }
}

/// Renders an instruction, or `None` if its function codes name nothing.
fn render(inst: &Instruction) -> Option<String> {
    let imm = inst.format.imm().unwrap_or_default();
    match (inst.opcode, inst.format) {
        (
            op::OP_REG,
            Format::R {
                rd,
                rs1,
                rs2,
                funct3,
                funct7,
            },
        ) => {
            let mn = op_reg_mnemonic(funct3, funct7)?;
            Some(format!("{mn} x{rd}, x{rs1}, x{rs2}"))
        }
        (
            op::OP_IMM,
            Format::I {
                rd,
                rs1,
                funct3,
                imm: raw,
            },
        ) => render_op_imm(rd, rs1, funct3, raw, imm),
        (op::OP_LOAD, Format::I { rd, rs1, funct3, .. }) => {
            let mn = match funct3 {
                f3::LB => "LB",
                f3::LH => "LH",
                f3::LW => "LW",
                f3::LBU => "LBU",
                f3::LHU => "LHU",
                _ => return None,
            };
            Some(format!("{mn} x{rd}, {}(x{rs1})", hex(imm)))
        }
        (op::OP_JALR, Format::I { rd, rs1, funct3, .. }) => {
            (funct3 == 0).then(|| format!("JALR x{rd}, {}(x{rs1})", hex(imm)))
        }
        (op::OP_STORE, Format::S { rs1, rs2, funct3, .. }) => {
            let mn = match funct3 {
                f3::SB => "SB",
                f3::SH => "SH",
                f3::SW => "SW",
                _ => return None,
            };
            Some(format!("{mn} x{rs2}, {}(x{rs1})", hex(imm)))
        }
        (op::OP_BRANCH, Format::B { rs1, rs2, funct3, .. }) => {
            let mn = match funct3 {
                f3::BEQ => "BEQ",
                f3::BNE => "BNE",
                f3::BLT => "BLT",
                f3::BGE => "BGE",
                f3::BLTU => "BLTU",
                f3::BGEU => "BGEU",
                _ => return None,
            };
            Some(format!("{mn} x{rs1}, x{rs2}, {}", hex(imm)))
        }
        (op::OP_LUI, Format::U { rd, imm: raw }) => Some(format!("LUI x{rd}, {:#x}", raw >> 12)),
        (op::OP_AUIPC, Format::U { rd, imm: raw }) => {
            Some(format!("AUIPC x{rd}, {:#x}", raw >> 12))
        }
        (op::OP_JAL, Format::J { rd, .. }) => Some(format!("JAL x{rd}, {}", hex(imm))),
        _ => None,
    }
}

/// Returns the OP mnemonic for a `funct3`/`funct7` pair.
fn op_reg_mnemonic(funct3: u32, funct7: u32) -> Option<&'static str> {
    let mn = match (funct3, funct7) {
        (f3::ADD_SUB, f7::DEFAULT) => "ADD",
        (f3::ADD_SUB, f7::SUB) => "SUB",
        (f3::SLL, f7::DEFAULT) => "SLL",
        (f3::SLT, f7::DEFAULT) => "SLT",
        (f3::SLTU, f7::DEFAULT) => "SLTU",
        (f3::XOR, f7::DEFAULT) => "XOR",
        (f3::SRL_SRA, f7::DEFAULT) => "SRL",
        (f3::SRL_SRA, f7::SRA) => "SRA",
        (f3::OR, f7::DEFAULT) => "OR",
        (f3::AND, f7::DEFAULT) => "AND",
        _ => return None,
    };
    Some(mn)
}

/// Renders an OP-IMM instruction, including the shift-immediate forms.
fn render_op_imm(rd: usize, rs1: usize, funct3: u32, raw: u32, imm: i32) -> Option<String> {
    let shamt = raw & SHAMT_MASK;
    let upper = raw >> SHIFT_FUNCT7_POS;
    let mn = match funct3 {
        f3::ADD_SUB => "ADDI",
        f3::SLT => "SLTI",
        f3::SLTU => "SLTIU",
        f3::XOR => "XORI",
        f3::OR => "ORI",
        f3::AND => "ANDI",
        f3::SLL => {
            return (upper == f7::DEFAULT).then(|| format!("SLLI x{rd}, x{rs1}, {shamt:#x}"));
        }
        f3::SRL_SRA => {
            let mn = match upper {
                f7::DEFAULT => "SRLI",
                f7::SRA => "SRAI",
                _ => return None,
            };
            return Some(format!("{mn} x{rd}, x{rs1}, {shamt:#x}"));
        }
        _ => return None,
    };
    Some(format!("{mn} x{rd}, x{rs1}, {}", hex(imm)))
}
