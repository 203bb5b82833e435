//! Bounds-Checked Guest Memory.
//!
//! This module implements the simulated memory the guest program runs in. It provides:
//! 1. **Buffer:** Fixed-capacity backing storage ([`MemoryBuffer`]) for memory contents.
//! 2. **Window:** An inclusive `[lower_bound, upper_bound]` range of legal addresses.
//! 3. **Checked Access:** Little-endian 1/2/4-byte loads and stores that reject any
//!    access leaving the window before a single byte is touched.
//! 4. **Image Loading:** A separate, trusted bulk copy used once by the loader.
//!
//! Instruction fetch, loads, and stores only ever go through [`Memory::load`] and
//! [`Memory::store`]; there is no way to skip the window check from guest code.

/// Fixed-capacity byte storage backing [`Memory`].
pub mod buffer;

use tracing::debug;

use self::buffer::MemoryBuffer;
use crate::common::constants::MEM_SIZE;
use crate::common::data::AccessWidth;
use crate::common::error::MemoryError;

/// Guest memory with an enforced address window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: MemoryBuffer,
    lower_bound: u32,
    upper_bound: u32,
}

impl Default for Memory {
    /// Returns a zeroed memory of the reference capacity with the full window enabled.
    fn default() -> Self {
        Self::new(MEM_SIZE)
    }
}

impl Memory {
    /// Creates a zeroed memory whose window covers the whole capacity.
    ///
    /// A zero `capacity` produces a memory on which every access fails.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Size of the backing storage in bytes.
    pub fn new(capacity: usize) -> Self {
        let upper_bound = Self::last_address(capacity);
        let mut mem = Self {
            buffer: MemoryBuffer::new(capacity),
            lower_bound: 0,
            upper_bound,
        };
        if capacity == 0 {
            // An inverted window rejects everything.
            mem.lower_bound = 1;
        }
        mem
    }

    /// Creates a zeroed memory with an explicit `[lower, upper]` window.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidWindow`] if `lower > upper` or `upper`
    /// lies beyond the capacity.
    pub fn with_window(capacity: usize, lower: u32, upper: u32) -> Result<Self, MemoryError> {
        let mut mem = Self::new(capacity);
        mem.set_window(lower, upper)?;
        Ok(mem)
    }

    /// Replaces the valid address window.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidWindow`] and keeps the previous window if
    /// `lower > upper` or `upper` lies beyond the capacity.
    pub fn set_window(&mut self, lower: u32, upper: u32) -> Result<(), MemoryError> {
        let capacity = self.buffer.len();
        if lower > upper || upper as usize >= capacity {
            return Err(MemoryError::InvalidWindow {
                lower,
                upper,
                capacity,
            });
        }
        self.lower_bound = lower;
        self.upper_bound = upper;
        Ok(())
    }

    /// Returns the capacity of the backing storage in bytes.
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the lowest valid address.
    pub const fn lower_bound(&self) -> u32 {
        self.lower_bound
    }

    /// Returns the highest valid address.
    pub const fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    /// Reads `width` bytes starting at `addr`, little-endian, zero-extended.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if `addr < lower_bound` or
    /// `addr + width - 1 > upper_bound`. No byte is read in that case.
    pub fn load(&self, addr: u32, width: AccessWidth) -> Result<u32, MemoryError> {
        self.check(addr, width)?;
        let bytes = self
            .buffer
            .read_slice(addr as usize, width.bytes() as usize)
            .ok_or_else(|| self.out_of_bounds(addr, width))?;
        Ok(bytes
            .iter()
            .rev()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte)))
    }

    /// Writes the low `width` bytes of `value` at `addr`, little-endian.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] under the same rule as
    /// [`Memory::load`]. No byte is written in that case.
    pub fn store(&mut self, addr: u32, value: u32, width: AccessWidth) -> Result<(), MemoryError> {
        self.check(addr, width)?;
        let bytes = value.to_le_bytes();
        let len = width.bytes() as usize;
        match self.buffer.write_slice(addr as usize, &bytes[..len]) {
            Some(()) => Ok(()),
            None => Err(self.out_of_bounds(addr, width)),
        }
    }

    /// Copies a raw program image to address 0, ignoring the window.
    ///
    /// This is the trusted initialization path for the loader and is never
    /// reachable from executing instructions. Bytes past the image keep their
    /// previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ImageTooLarge`] if the image exceeds the capacity.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), MemoryError> {
        let capacity = self.buffer.len();
        if self.buffer.write_slice(0, image).is_none() {
            return Err(MemoryError::ImageTooLarge {
                len: image.len(),
                capacity,
            });
        }
        debug!(len = image.len(), capacity, "loaded program image");
        Ok(())
    }

    /// Zeroes the whole backing storage.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Verifies that `[addr, addr + width - 1]` lies inside the window.
    ///
    /// The end address is computed in 64 bits so accesses near `u32::MAX`
    /// cannot wrap back into the window.
    #[inline]
    fn check(&self, addr: u32, width: AccessWidth) -> Result<(), MemoryError> {
        let last = u64::from(addr) + u64::from(width.bytes()) - 1;
        if addr < self.lower_bound || last > u64::from(self.upper_bound) {
            return Err(self.out_of_bounds(addr, width));
        }
        Ok(())
    }

    const fn out_of_bounds(&self, addr: u32, width: AccessWidth) -> MemoryError {
        MemoryError::OutOfBounds {
            addr,
            width,
            lower: self.lower_bound,
            upper: self.upper_bound,
        }
    }

    /// Returns the highest address representable in a memory of `capacity` bytes.
    fn last_address(capacity: usize) -> u32 {
        u32::try_from(capacity.saturating_sub(1)).unwrap_or(u32::MAX)
    }
}
