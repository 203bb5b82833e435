//! ALU Logic and Comparison Tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv32sim_core::core::units::alu::{Alu, AluOp};

#[test]
fn bitwise_ops() {
    assert_eq!(Alu::execute(AluOp::And, 0xF0F0, 0xFF00), 0xF000);
    assert_eq!(Alu::execute(AluOp::Or, 0xF0F0, 0x0F0F), 0xFFFF);
    assert_eq!(Alu::execute(AluOp::Xor, 0xFFFF, 0x0F0F), 0xF0F0);
}

#[rstest]
#[case(AluOp::Slt, -1_i32 as u32, 0, 1)]
#[case(AluOp::Sltu, -1_i32 as u32, 0, 0)]
#[case(AluOp::Slt, 0, -1_i32 as u32, 0)]
#[case(AluOp::Sltu, 0, -1_i32 as u32, 1)]
#[case(AluOp::Slt, 5, 5, 0)]
#[case(AluOp::Sltu, 4, 5, 1)]
fn comparisons(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}
