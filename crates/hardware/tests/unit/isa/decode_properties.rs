//! Instruction Decode Properties.
//!
//! Verifies that `decode()` correctly extracts opcode, register fields,
//! function codes, and immediates for every RV32I instruction format, and
//! rejects opcodes outside the base set.
//!
//! # Coverage Matrix
//!
//! - R-type:  OP_REG
//! - I-type:  OP_IMM, OP_LOAD, OP_JALR
//! - S-type:  OP_STORE
//! - B-type:  OP_BRANCH
//! - U-type:  OP_LUI, OP_AUIPC
//! - J-type:  OP_JAL

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rv32sim_core::common::DecodeError;
use rv32sim_core::isa::decode::decode;
use rv32sim_core::isa::instruction::{Format, InstructionBits};
use rv32sim_core::isa::rv32i::opcodes as op;

use crate::common::InstructionBuilder;

// ══════════════════════════════════════════════════════════
// 1. InstructionBits trait: field extraction
// ══════════════════════════════════════════════════════════

#[test]
fn field_extraction_all_ones() {
    let inst: u32 = 0xFFFF_FFFF;
    assert_eq!(inst.opcode(), 0x7F);
    assert_eq!(inst.rd(), 31);
    assert_eq!(inst.funct3(), 7);
    assert_eq!(inst.rs1(), 31);
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct7(), 0x7F);
    assert!(inst.math_bit());
}

#[test]
fn field_extraction_all_zeros() {
    let inst: u32 = 0x0000_0000;
    assert_eq!(inst.opcode(), 0);
    assert_eq!(inst.rd(), 0);
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.rs1(), 0);
    assert_eq!(inst.rs2(), 0);
    assert_eq!(inst.funct7(), 0);
    assert!(!inst.math_bit());
}

// ══════════════════════════════════════════════════════════
// 2. R-Type
// ══════════════════════════════════════════════════════════

#[test]
fn decode_add() {
    let inst = decode(0x00A2_8033).unwrap();
    assert_eq!(inst.opcode, op::OP_REG);
    assert_eq!(
        inst.format,
        Format::R {
            rd: 0,
            rs1: 5,
            rs2: 10,
            funct3: 0,
            funct7: 0,
        }
    );
    assert!(!inst.math_bit());
    assert_eq!(inst.format.imm(), None);
}

#[test]
fn decode_sub() {
    let inst = decode(0x40A2_8033).unwrap();
    assert_eq!(
        inst.format,
        Format::R {
            rd: 0,
            rs1: 5,
            rs2: 10,
            funct3: 0,
            funct7: 0b0100000,
        }
    );
    assert!(inst.math_bit());
}

// ══════════════════════════════════════════════════════════
// 3. I-Type
// ══════════════════════════════════════════════════════════

#[test]
fn decode_addi_negative_immediate() {
    let word = InstructionBuilder::new().addi(3, 4, -1).build();
    let inst = decode(word).unwrap();
    assert_eq!(inst.opcode, op::OP_IMM);
    assert_eq!(
        inst.format,
        Format::I {
            rd: 3,
            rs1: 4,
            funct3: 0,
            imm: 0xFFF,
        }
    );
    assert_eq!(inst.format.imm(), Some(-1));
    assert_eq!(inst.rd(), Some(3));
}

#[test]
fn decode_load_and_jalr_are_i_type() {
    let lw = decode(InstructionBuilder::new().lw(1, 2, 4).build()).unwrap();
    assert_eq!(lw.opcode, op::OP_LOAD);
    assert!(matches!(lw.format, Format::I { rd: 1, rs1: 2, funct3: 2, imm: 4 }));

    let jalr = decode(InstructionBuilder::new().jalr(1, 2, -4).build()).unwrap();
    assert_eq!(jalr.opcode, op::OP_JALR);
    assert_eq!(jalr.format.imm(), Some(-4));
}

// ══════════════════════════════════════════════════════════
// 4. S/B-Type
// ══════════════════════════════════════════════════════════

#[test]
fn decode_store() {
    let inst = decode(InstructionBuilder::new().sw(2, 3, -8).build()).unwrap();
    assert_eq!(
        inst.format,
        Format::S {
            rs1: 3,
            rs2: 2,
            funct3: 2,
            imm: 0xFF8,
        }
    );
    assert_eq!(inst.format.imm(), Some(-8));
    assert_eq!(inst.rd(), None);
}

#[test]
fn decode_branch() {
    let inst = decode(InstructionBuilder::new().blt(1, 2, -16).build()).unwrap();
    assert_eq!(inst.opcode, op::OP_BRANCH);
    assert!(matches!(inst.format, Format::B { rs1: 1, rs2: 2, funct3: 4, .. }));
    assert_eq!(inst.format.imm(), Some(-16));
}

// ══════════════════════════════════════════════════════════
// 5. U/J-Type
// ══════════════════════════════════════════════════════════

#[test]
fn decode_lui_and_auipc() {
    let lui = decode(InstructionBuilder::new().lui(5, 0xFFFFF).build()).unwrap();
    assert_eq!(lui.format, Format::U { rd: 5, imm: 0xFFFF_F000 });

    let auipc = decode(InstructionBuilder::new().auipc(6, 1).build()).unwrap();
    assert_eq!(auipc.opcode, op::OP_AUIPC);
    assert_eq!(auipc.format, Format::U { rd: 6, imm: 0x1000 });
}

#[test]
fn decode_jal() {
    let inst = decode(InstructionBuilder::new().jal(1, 2048).build()).unwrap();
    assert_eq!(inst.format, Format::J { rd: 1, imm: 2048 });
    assert_eq!(inst.format.imm(), Some(2048));
}

// ══════════════════════════════════════════════════════════
// 6. Rejection
// ══════════════════════════════════════════════════════════

#[test]
fn decode_rejects_unknown_opcodes() {
    for word in [0xFFFF_FFFF_u32, 0x0000_0000, 0x0000_0073, 0x0000_000F] {
        assert_eq!(
            decode(word),
            Err(DecodeError::UnsupportedOpcode {
                opcode: word & 0x7F,
                word,
            })
        );
    }
}

proptest! {
    #[test]
    fn decode_preserves_raw_word(word in any::<u32>()) {
        if let Ok(inst) = decode(word) {
            prop_assert_eq!(inst.raw, word);
            prop_assert_eq!(inst.opcode, word & 0x7F);
        }
    }

    #[test]
    fn r_type_fields_round_trip(rd in 0u32..32, rs1 in 0u32..32, rs2 in 0u32..32) {
        let word = InstructionBuilder::new().xor(rd, rs1, rs2).build();
        let inst = decode(word).unwrap();
        prop_assert_eq!(
            inst.format,
            Format::R {
                rd: rd as usize,
                rs1: rs1 as usize,
                rs2: rs2 as usize,
                funct3: 0b100,
                funct7: 0,
            }
        );
    }
}
