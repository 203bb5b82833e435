//! Binary Loader.
//!
//! This module reads flat program images from disk. It performs:
//! 1. **Binary loading:** Reads a raw binary into a byte buffer.
//! 2. **Image placement:** Copies the bytes to address 0 of guest memory through
//!    the trusted [`Memory::load_image`] path.
//!
//! There is no header parsing: the first four bytes of the file are the
//! instruction at address 0.

use std::fs;
use std::path::Path;

use tracing::info;

use super::SimError;
use crate::soc::Memory;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// Returns [`SimError::Io`] carrying the path if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `path` and places it at address 0 of `memory`.
///
/// Returns the number of bytes loaded.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read and
/// [`SimError::Memory`] if the image exceeds the memory capacity.
pub fn load_program(memory: &mut Memory, path: impl AsRef<Path>) -> Result<usize, SimError> {
    let path = path.as_ref();
    let image = load_binary(path)?;
    memory.load_image(&image)?;
    info!(path = %path.display(), bytes = image.len(), "program loaded");
    Ok(image.len())
}
