//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I encoding constants, the immediate detangler, the
//! decoder, and the disassembler.
//!
//! Only the RV32I base integer set is modelled. The compressed (C) extension,
//! the M extension, floating point, and CSR instructions are not decoded.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for the six RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Immediate detangling and sign extension.
pub mod immediate;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
