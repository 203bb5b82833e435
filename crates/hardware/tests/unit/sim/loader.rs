//! # Binary Loading Tests
//!
//! This module contains unit tests for loading raw images from disk and
//! placing them at address 0 of guest memory.

use std::io::Write;

use pretty_assertions::assert_eq;
use rv32sim_core::common::{AccessWidth, MemoryError};
use rv32sim_core::sim::{SimError, loader};
use rv32sim_core::soc::Memory;
use tempfile::NamedTempFile;

/// Helper function to create a temporary binary file for testing.
fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_binary_success() {
    let test_data = vec![0x13, 0x00, 0x00, 0x00]; // nop
    let temp_file = create_temp_binary(&test_data);

    let loaded_data = loader::load_binary(temp_file.path()).unwrap();
    assert_eq!(loaded_data, test_data);
}

#[test]
fn test_load_binary_empty_file() {
    let temp_file = create_temp_binary(&[]);
    let loaded_data = loader::load_binary(temp_file.path()).unwrap();
    assert!(loaded_data.is_empty());
}

#[test]
fn test_load_binary_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");
    match loader::load_binary(&path) {
        Err(SimError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_program_places_image_at_zero() {
    let temp_file = create_temp_binary(&[0x93, 0x00, 0x50, 0x00, 0xAA]);
    let mut memory = Memory::new(64);

    let len = loader::load_program(&mut memory, temp_file.path()).unwrap();
    assert_eq!(len, 5);
    assert_eq!(memory.load(0, AccessWidth::Word).unwrap(), 0x0050_0093);
    assert_eq!(memory.load(4, AccessWidth::Byte).unwrap(), 0xAA);
    assert_eq!(memory.load(5, AccessWidth::Byte).unwrap(), 0);
}

#[test]
fn test_load_program_ignores_window() {
    let temp_file = create_temp_binary(&[1, 2, 3, 4]);
    let mut memory = Memory::with_window(64, 32, 63).unwrap();
    let _ = loader::load_program(&mut memory, temp_file.path()).unwrap();

    memory.set_window(0, 63).unwrap();
    assert_eq!(memory.load(0, AccessWidth::Word).unwrap(), 0x0403_0201);
}

#[test]
fn test_load_program_too_large() {
    let temp_file = create_temp_binary(&[0u8; 65]);
    let mut memory = Memory::new(64);
    let err = loader::load_program(&mut memory, temp_file.path()).unwrap_err();
    assert!(matches!(
        err,
        SimError::Memory(MemoryError::ImageTooLarge {
            len: 65,
            capacity: 64
        })
    ));
    assert_eq!(memory, Memory::new(64));
}
