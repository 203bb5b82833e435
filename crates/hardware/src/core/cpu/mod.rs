//! Single-Step Execution Engine.
//!
//! This module defines the functional RV32I engine. One call executes exactly
//! one instruction:
//! 1. **Snapshot:** The previous state is copied; the caller's value is never mutated.
//! 2. **Fetch:** One bounds-checked word load at the current PC.
//! 3. **Decode:** The word is classified into an [`Instruction`].
//! 4. **Dispatch:** The instruction group runs on the copy (see [`execution`]).
//! 5. **Retire:** `x0` is cleared and the PC advances by 4 unless the
//!    instruction redirected control flow.
//!
//! Every failure is returned as an [`ExecError`] carrying the fetch PC. Memory
//! is only mutated by a store that passed its bounds check, so a failed step
//! leaves both the state and memory exactly as they were.

/// Per-group instruction semantics.
pub mod execution;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::data::AccessWidth;
use crate::common::error::ExecError;
use crate::core::arch::MachineState;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::rv32i::opcodes;
use crate::soc::Memory;

/// Instruction classes used for retirement statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// OP and OP-IMM.
    Alu,
    /// LOAD.
    Load,
    /// STORE.
    Store,
    /// Conditional branches.
    Branch,
    /// JAL and JALR.
    Jump,
    /// LUI and AUIPC.
    Upper,
}

impl InstClass {
    /// Classifies a decoded instruction by its opcode.
    pub const fn of(inst: &Instruction) -> Self {
        match inst.opcode {
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_JAL | opcodes::OP_JALR => Self::Jump,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Self::Upper,
            _ => Self::Alu,
        }
    }
}

/// The outcome of one successfully executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// State after the instruction.
    pub state: MachineState,
    /// The decoded instruction.
    pub inst: Instruction,
    /// PC the instruction was fetched from.
    pub pc: u32,
    /// Whether the instruction set the PC (taken branch, JAL, JALR).
    pub redirected: bool,
}

impl Retired {
    /// Returns the statistics class of the retired instruction.
    pub const fn class(&self) -> InstClass {
        InstClass::of(&self.inst)
    }

    /// Returns `true` if the instruction transferred control to its own address.
    pub const fn is_self_loop(&self) -> bool {
        self.redirected && self.state.pc == self.pc
    }
}

/// Executes one instruction starting from `previous` and returns the next state.
///
/// # Errors
///
/// Returns [`ExecError`] if the fetch, decode, or a data access fails, or if
/// the instruction carries an encoding RV32I does not define.
///
/// # Examples
///
/// ```
/// use rv32sim_core::core::arch::MachineState;
/// use rv32sim_core::core::cpu::step;
/// use rv32sim_core::soc::Memory;
///
/// let mut memory = Memory::default();
/// memory.load_image(&0x0050_0093_u32.to_le_bytes()).unwrap(); // addi x1, x0, 5
/// let next = step(&mut memory, &MachineState::new(0)).unwrap();
/// assert_eq!(next.reg(1), 5);
/// assert_eq!(next.pc, 4);
/// ```
pub fn step(memory: &mut Memory, previous: &MachineState) -> Result<MachineState, ExecError> {
    execute(memory, previous).map(|retired| retired.state)
}

/// Executes one instruction and reports what retired.
///
/// # Errors
///
/// See [`step`].
pub fn execute(memory: &mut Memory, previous: &MachineState) -> Result<Retired, ExecError> {
    let mut next = *previous;
    next.regs.hardwire_zero();
    let pc = next.pc;

    let word = memory
        .load(pc, AccessWidth::Word)
        .map_err(|source| ExecError::Fetch { pc, source })?;
    let inst = decode(word).map_err(|source| ExecError::Decode { pc, source })?;

    let target = execution::dispatch(memory, &mut next, &inst, pc)?;

    next.regs.hardwire_zero();
    next.pc = target.unwrap_or_else(|| pc.wrapping_add(INSTRUCTION_SIZE));

    Ok(Retired {
        state: next,
        inst,
        pc,
        redirected: target.is_some(),
    })
}

/// Executes one instruction on `state`, committing only on success.
///
/// On error `state` is left unchanged.
///
/// # Errors
///
/// See [`step`].
pub fn step_in_place(memory: &mut Memory, state: &mut MachineState) -> Result<Retired, ExecError> {
    let retired = execute(memory, state)?;
    *state = retired.state;
    Ok(retired)
}
