//! # General-Purpose Register Tests
//!
//! Tests for the RV32I general-purpose register file implementation.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rv32sim_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
    assert_eq!(gpr, Gpr::default());
}

#[test]
fn test_gpr_read_write_x0_always_zero() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn test_gpr_read_write_x31() {
    let mut gpr = Gpr::new();
    gpr.write(31, 0x9999_AAAA);
    assert_eq!(gpr.read(31), 0x9999_AAAA);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = (i as u32) << 16 | (i as u32);
        gpr.write(i, value);
        assert_eq!(gpr.read(i), value);
    }
}

#[test]
fn test_gpr_from_raw_clears_x0() {
    let mut raw = [7u32; 32];
    raw[0] = 0xFFFF_FFFF;
    let gpr = Gpr::from_raw(raw);
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.as_array()[0], 0);
    assert_eq!(gpr.read(1), 7);
}

#[test]
fn test_gpr_index_uses_low_five_bits() {
    let mut gpr = Gpr::new();
    gpr.write(33, 5);
    assert_eq!(gpr.read(1), 5);
}

#[test]
fn test_gpr_dump_uses_abi_names() {
    let mut gpr = Gpr::new();
    gpr.write(2, 0x0000_0FF0);
    let dump = gpr.dump();
    assert_eq!(dump.lines().count(), 16);
    assert!(dump.contains("x2  (sp  ) = 0x00000ff0"), "dump was:\n{dump}");
    assert!(dump.contains("x31 (t6  )"));
    assert_eq!(gpr.to_string(), dump);
}

proptest! {
    #[test]
    fn x0_never_observes_writes(value in any::<u32>()) {
        let mut gpr = Gpr::new();
        gpr.write(0, value);
        prop_assert_eq!(gpr.read(0), 0);
    }
}
