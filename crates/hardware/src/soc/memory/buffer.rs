//! Memory Buffer Implementation.
//!
//! This module provides the fixed-capacity backing storage for guest memory.
//! It performs no window enforcement of its own: every accessor returns `None`
//! instead of panicking when an offset falls outside the allocation, and the
//! bounds-checked [`Memory`](super::Memory) wrapper decides what is legal.

use std::ops::Index;

/// A fixed-capacity, zero-initialized byte buffer.
///
/// The capacity is chosen at construction and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryBuffer {
    bytes: Box<[u8]>,
}

impl MemoryBuffer {
    /// Creates a new zeroed buffer of the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has zero capacity.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads a single byte, or `None` past the end of the buffer.
    pub fn read_u8(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Writes a single byte; returns `None` (and writes nothing) past the end.
    pub fn write_u8(&mut self, offset: usize, val: u8) -> Option<()> {
        let slot = self.bytes.get_mut(offset)?;
        *slot = val;
        Some(())
    }

    /// Borrows `len` bytes starting at `offset`, or `None` if any byte is past the end.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }

    /// Copies `data` into the buffer at `offset`.
    ///
    /// Returns `None` and leaves the buffer untouched if the slice does not fit.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Option<()> {
        let end = offset.checked_add(data.len())?;
        self.bytes.get_mut(offset..end)?.copy_from_slice(data);
        Some(())
    }

    /// Zeroes the whole buffer.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Index<usize> for MemoryBuffer {
    /// Output type for indexing operations (u8).
    type Output = u8;

    /// Indexes into the buffer to read a byte; panics past the end like a slice.
    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[index]
    }
}
