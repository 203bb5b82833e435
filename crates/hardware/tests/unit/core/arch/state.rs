//! # Machine State Tests

use pretty_assertions::assert_eq;
use rv32sim_core::core::arch::MachineState;

#[test]
fn test_new_state() {
    let state = MachineState::new(0x40);
    assert_eq!(state.pc, 0x40);
    for i in 0..32 {
        assert_eq!(state.reg(i), 0);
    }
}

#[test]
fn test_state_is_a_value() {
    let mut a = MachineState::new(0);
    a.set_reg(5, 9);
    let b = a;
    a.set_reg(5, 10);
    assert_eq!(b.reg(5), 9);
    assert_eq!(a.reg(5), 10);
}

#[test]
fn test_state_json_round_trip() {
    let mut state = MachineState::new(8);
    state.set_reg(1, 5);
    state.set_reg(2, 15);
    let json = serde_json::to_string(&state).unwrap();
    let back: MachineState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_core_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MachineState>();
    assert_send_sync::<rv32sim_core::Memory>();
    assert_send_sync::<rv32sim_core::Simulator>();
    assert_send_sync::<rv32sim_core::isa::instruction::Instruction>();
}
