//! # Step Engine Tests
//!
//! The free-function engine works on snapshots: the previous state is never
//! mutated and `x0` reads as zero after every step.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rv32sim_core::common::AccessWidth;
use rv32sim_core::core::cpu::InstClass;
use rv32sim_core::core::{MachineState, execute, step, step_in_place};
use rv32sim_core::soc::Memory;

use crate::common::InstructionBuilder;

fn memory_with(program: &[u32]) -> Memory {
    let mut memory = Memory::default();
    for (i, inst) in program.iter().enumerate() {
        memory
            .store((i * 4) as u32, *inst, AccessWidth::Word)
            .unwrap();
    }
    memory
}

#[test]
fn test_step_returns_new_state() {
    let mut memory = memory_with(&[InstructionBuilder::new().addi(1, 0, 5).build()]);
    let previous = MachineState::new(0);
    let next = step(&mut memory, &previous).unwrap();

    assert_eq!(previous, MachineState::new(0));
    assert_eq!(next.reg(1), 5);
    assert_eq!(next.pc, 4);
}

#[test]
fn test_step_in_place_commits_on_success() {
    let mut memory = memory_with(&[InstructionBuilder::new().addi(1, 0, 5).build()]);
    let mut state = MachineState::new(0);
    let retired = step_in_place(&mut memory, &mut state).unwrap();
    assert_eq!(state, retired.state);
    assert_eq!(state.reg(1), 5);
}

#[test]
fn test_step_in_place_keeps_state_on_error() {
    let mut memory = memory_with(&[0xFFFF_FFFF]);
    let mut state = MachineState::new(0);
    state.set_reg(9, 99);
    let before = state;
    assert!(step_in_place(&mut memory, &mut state).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_x0_ignores_every_writer() {
    let program = [
        InstructionBuilder::new().addi(0, 0, 5).build(),
        InstructionBuilder::new().lui(0, 0xFFFFF).build(),
        InstructionBuilder::new().auipc(0, 1).build(),
        InstructionBuilder::new().lw(0, 0, 0).build(),
        InstructionBuilder::new().jal(0, 4).build(),
        InstructionBuilder::new().jalr(0, 0, 24).build(),
        InstructionBuilder::new().add(0, 1, 1).build(),
    ];
    let mut memory = memory_with(&program);
    let mut state = MachineState::new(0);
    state.set_reg(1, 7);
    for _ in 0..program.len() {
        let _ = step_in_place(&mut memory, &mut state).unwrap();
        assert_eq!(state.reg(0), 0, "x0 changed at pc {:#x}", state.pc);
    }
    assert_eq!(state.pc, 28);
}

#[test]
fn test_retired_reports_class_and_redirect() {
    let mut memory = memory_with(&[
        InstructionBuilder::new().bne(0, 0, 8).build(),
        InstructionBuilder::new().jal(0, 0).build(),
    ]);
    let first = execute(&mut memory, &MachineState::new(0)).unwrap();
    assert_eq!(first.class(), InstClass::Branch);
    assert_eq!(first.pc, 0);
    assert!(!first.redirected);
    assert!(!first.is_self_loop());

    let second = execute(&mut memory, &first.state).unwrap();
    assert_eq!(second.class(), InstClass::Jump);
    assert!(second.redirected);
    assert!(second.is_self_loop());
}

#[test]
fn test_jump_to_next_instruction_is_not_a_self_loop() {
    let mut memory = memory_with(&[InstructionBuilder::new().jal(0, 4).build()]);
    let retired = execute(&mut memory, &MachineState::new(0)).unwrap();
    assert!(retired.redirected);
    assert!(!retired.is_self_loop());
}

proptest! {
    #[test]
    fn x0_stays_zero_for_any_immediate(imm in -2048_i32..2048) {
        let mut memory = memory_with(&[InstructionBuilder::new().addi(0, 0, imm).build()]);
        let next = step(&mut memory, &MachineState::new(0)).unwrap();
        prop_assert_eq!(next.reg(0), 0);
        prop_assert_eq!(next.pc, 4);
    }

    #[test]
    fn addi_matches_wrapping_add(base in any::<u32>(), imm in -2048_i32..2048) {
        let mut memory = memory_with(&[InstructionBuilder::new().addi(2, 1, imm).build()]);
        let mut state = MachineState::new(0);
        state.set_reg(1, base);
        let next = step(&mut memory, &state).unwrap();
        prop_assert_eq!(next.reg(2), base.wrapping_add(imm as u32));
        prop_assert_eq!(next.reg(1), base);
    }
}
