//! # Error Tests
//!
//! Display output and source chaining of the memory, decode, and execution errors.

use std::error::Error;

use pretty_assertions::assert_eq;
use rv32sim_core::common::{AccessType, AccessWidth, DecodeError, ExecError, MemoryError};

fn oob() -> MemoryError {
    MemoryError::OutOfBounds {
        addr: 0x1000,
        width: AccessWidth::Word,
        lower: 0,
        upper: 0xFFF,
    }
}

#[test]
fn test_out_of_bounds_display() {
    assert_eq!(
        oob().to_string(),
        "out of bounds access at 0x00001000 (width 4) outside window [0x00000000, 0x00000fff]"
    );
}

#[test]
fn test_decode_error_display() {
    let err = DecodeError::UnsupportedOpcode {
        opcode: 0x7F,
        word: 0xFFFF_FFFF,
    };
    assert_eq!(
        err.to_string(),
        "unsupported opcode 0x7f in instruction word 0xffffffff"
    );
}

#[test]
fn test_exec_error_carries_pc_and_source() {
    let err = ExecError::Memory {
        pc: 0x40,
        access: AccessType::Write,
        source: oob(),
    };
    assert_eq!(err.pc(), 0x40);
    assert_eq!(err.to_string(), "write access failed at pc 0x00000040");
    let source = err.source().expect("memory error must chain its source");
    assert_eq!(source.to_string(), oob().to_string());
}

#[test]
fn test_illegal_encoding_has_no_source() {
    let err = ExecError::IllegalEncoding {
        pc: 8,
        word: 0x0200_0033,
    };
    assert_eq!(err.pc(), 8);
    assert!(err.source().is_none());
}
