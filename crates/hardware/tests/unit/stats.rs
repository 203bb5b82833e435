//! # Statistics Tests
//!
//! Counting retired instructions by class and rendering the report.

use pretty_assertions::assert_eq;
use rv32sim_core::core::MachineState;
use rv32sim_core::core::cpu::execute;
use rv32sim_core::common::AccessWidth;
use rv32sim_core::soc::Memory;
use rv32sim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::InstructionBuilder;

/// Executes each instruction at address 0 from a fresh state and records it.
fn record_all(program: &[u32]) -> SimStats {
    let mut stats = SimStats::default();
    for inst in program {
        let mut memory = Memory::default();
        memory.store(0, *inst, AccessWidth::Word).unwrap();
        let retired = execute(&mut memory, &MachineState::new(0)).unwrap();
        stats.record(&retired);
    }
    stats
}

#[test]
fn test_default_is_zeroed() {
    let stats = SimStats::default();
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.branches_taken, 0);
    assert!(stats.mips() >= 0.0);
}

#[test]
fn test_record_counts_by_class() {
    let stats = record_all(&[
        InstructionBuilder::new().add(1, 2, 3).build(),
        InstructionBuilder::new().slli(1, 2, 3).build(),
        InstructionBuilder::new().lw(1, 0, 16).build(),
        InstructionBuilder::new().sb(1, 0, 16).build(),
        InstructionBuilder::new().jalr(1, 0, 0).build(),
        InstructionBuilder::new().auipc(1, 0).build(),
    ]);
    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_upper, 1);
    assert_eq!(stats.inst_branch, 0);
}

#[test]
fn test_branches_taken_and_not_taken() {
    let stats = record_all(&[
        InstructionBuilder::new().beq(0, 0, 8).build(),
        InstructionBuilder::new().bne(0, 0, 8).build(),
        InstructionBuilder::new().bgeu(0, 0, 8).build(),
    ]);
    assert_eq!(stats.inst_branch, 3);
    assert_eq!(stats.branches_taken, 2);
}

#[test]
fn test_full_report_has_every_section() {
    let stats = record_all(&[InstructionBuilder::new().beq(0, 0, 8).build()]);
    let report = stats.report_sections(&[]);
    assert!(report.contains("RV32I SIMULATION STATISTICS"));
    assert!(report.contains("sim_insts                1"));
    assert!(report.contains("INSTRUCTION MIX"));
    assert!(report.contains("op.branch              1 (100.00%)"));
    assert!(report.contains("branch.taken           1 (100.00%)"));
    assert!(report.contains("branch.not_taken       0"));
}

#[test]
fn test_report_single_section() {
    let stats = SimStats::default();
    let report = stats.report_sections(&["branch".to_string()]);
    assert!(report.contains("BRANCHES"));
    assert!(!report.contains("INSTRUCTION MIX"));
    assert!(!report.contains("sim_insts"));
}

#[test]
fn test_section_names() {
    assert_eq!(STATS_SECTIONS, &["summary", "instruction_mix", "branch"]);
    let stats = SimStats::default();
    for section in STATS_SECTIONS {
        assert!(!stats.report_sections(&[(*section).to_string()]).is_empty());
    }
}
