//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components that surround the core. The RV32I
//! simulator has a single flat memory and no memory-mapped devices.

/// Bounds-checked guest memory.
pub mod memory;

pub use memory::Memory;
