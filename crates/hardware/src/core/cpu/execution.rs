//! Instruction Group Semantics.
//!
//! One function per RV32I opcode group. Each reads source registers from the
//! working copy of the state, writes at most one destination register or one
//! memory location, and returns the redirected PC for control transfers
//! (`None` means fall through to `pc + 4`).
//!
//! Function-code combinations that do not name an RV32I instruction are
//! rejected with [`ExecError::IllegalEncoding`] before any side effect.

use tracing::debug;

use crate::common::constants::{INSTRUCTION_SIZE, JALR_TARGET_MASK};
use crate::common::data::AccessType;
use crate::common::error::ExecError;
use crate::core::arch::MachineState;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::{BranchCond, Bru};
use crate::core::units::lsu::{LoadOp, Lsu, StoreOp};
use crate::isa::immediate::{ImmFormat, sign_extend, zero_extend};
use crate::isa::instruction::{Format, Instruction};
use crate::isa::rv32i::{funct3, opcodes};
use crate::soc::Memory;

/// Width of the I and S immediates in bits.
const IMM12_BITS: u32 = 12;

/// Position of `imm[11:5]` inside a 12-bit shift immediate.
const SHIFT_IMM_HI_POS: u32 = 5;

/// Redirected PC of a control transfer, or `None` to fall through.
type NextPc = Option<u32>;

/// Runs the semantics of `inst` on `next`, fetched from `pc`.
///
/// # Errors
///
/// Returns [`ExecError::IllegalEncoding`] for undefined function codes and
/// [`ExecError::Memory`] for failed loads and stores.
pub fn dispatch(
    memory: &mut Memory,
    next: &mut MachineState,
    inst: &Instruction,
    pc: u32,
) -> Result<NextPc, ExecError> {
    match inst.format {
        Format::R {
            rd,
            rs1,
            rs2,
            funct3,
            funct7,
        } => {
            let op = AluOp::from_reg(funct3, funct7).ok_or_else(|| illegal(inst, pc))?;
            let result = Alu::execute(op, next.reg(rs1), next.reg(rs2));
            next.set_reg(rd, result);
            Ok(None)
        }
        Format::I {
            rd,
            rs1,
            funct3,
            imm,
        } => match inst.opcode {
            opcodes::OP_IMM => op_imm(next, inst, pc, (rd, rs1, funct3, imm)),
            opcodes::OP_LOAD => load(memory, next, inst, pc, (rd, rs1, funct3, imm)),
            opcodes::OP_JALR => jalr(next, inst, pc, (rd, rs1, funct3, imm)),
            _ => Err(illegal(inst, pc)),
        },
        Format::S {
            rs1,
            rs2,
            funct3,
            imm,
        } => {
            let op = StoreOp::from_funct3(funct3).ok_or_else(|| illegal(inst, pc))?;
            let addr = effective_address(next, rs1, imm);
            Lsu::store(memory, op, addr, next.reg(rs2)).map_err(|source| ExecError::Memory {
                pc,
                access: AccessType::Write,
                source,
            })?;
            Ok(None)
        }
        Format::B {
            rs1,
            rs2,
            funct3,
            imm,
        } => {
            let cond = BranchCond::from_funct3(funct3).ok_or_else(|| illegal(inst, pc))?;
            let taken = Bru::evaluate(cond, next.reg(rs1), next.reg(rs2));
            Ok(taken.then(|| pc.wrapping_add(sign_extend(imm, ImmFormat::B.width()))))
        }
        Format::U { rd, imm } => {
            let value = match inst.opcode {
                opcodes::OP_LUI => imm,
                opcodes::OP_AUIPC => imm.wrapping_add(pc),
                _ => return Err(illegal(inst, pc)),
            };
            next.set_reg(rd, value);
            Ok(None)
        }
        Format::J { rd, imm } => {
            next.set_reg(rd, pc.wrapping_add(INSTRUCTION_SIZE));
            Ok(Some(pc.wrapping_add(sign_extend(imm, ImmFormat::J.width()))))
        }
    }
}

/// Fields of an I-type instruction: `(rd, rs1, funct3, imm)`.
type IFields = (usize, usize, u32, u32);

/// OP-IMM: ADDI, SLTI, SLTIU, XORI, ORI, ANDI, SLLI, SRLI, SRAI.
fn op_imm(
    next: &mut MachineState,
    inst: &Instruction,
    pc: u32,
    (rd, rs1, f3, imm): IFields,
) -> Result<NextPc, ExecError> {
    let op = AluOp::from_imm(f3, imm >> SHIFT_IMM_HI_POS).ok_or_else(|| illegal(inst, pc))?;
    let operand = match op {
        AluOp::Sltu => zero_extend(imm, IMM12_BITS),
        _ => sign_extend(imm, IMM12_BITS),
    };
    next.set_reg(rd, Alu::execute(op, next.reg(rs1), operand));
    Ok(None)
}

/// LOAD: LB, LH, LW, LBU, LHU.
fn load(
    memory: &Memory,
    next: &mut MachineState,
    inst: &Instruction,
    pc: u32,
    (rd, rs1, f3, imm): IFields,
) -> Result<NextPc, ExecError> {
    let op = LoadOp::from_funct3(f3).ok_or_else(|| illegal(inst, pc))?;
    let addr = effective_address(next, rs1, imm);
    let value = Lsu::load(memory, op, addr).map_err(|source| ExecError::Memory {
        pc,
        access: AccessType::Read,
        source,
    })?;
    next.set_reg(rd, value);
    Ok(None)
}

/// JALR: the target is computed from the old `rs1` before `rd` is written.
fn jalr(
    next: &mut MachineState,
    inst: &Instruction,
    pc: u32,
    (rd, rs1, f3, imm): IFields,
) -> Result<NextPc, ExecError> {
    if f3 != funct3::ADD_SUB {
        return Err(illegal(inst, pc));
    }
    let target = effective_address(next, rs1, imm) & JALR_TARGET_MASK;
    next.set_reg(rd, pc.wrapping_add(INSTRUCTION_SIZE));
    Ok(Some(target))
}

/// Returns `rs1 + sign_extend(imm12)` modulo 2^32.
#[inline(always)]
const fn effective_address(state: &MachineState, rs1: usize, imm: u32) -> u32 {
    state.reg(rs1).wrapping_add(sign_extend(imm, IMM12_BITS))
}

fn illegal(inst: &Instruction, pc: u32) -> ExecError {
    debug!(
        pc = format_args!("{pc:#010x}"),
        word = format_args!("{:#010x}", inst.raw),
        "illegal encoding"
    );
    ExecError::IllegalEncoding { pc, word: inst.raw }
}
