//! Configuration system for the RV32I simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory capacity, start PC, step budget).
//! 2. **Structures:** `general` run settings and the `memory` window.
//! 3. **Loading:** JSON deserialization via [`Config::from_json`] and [`Config::from_file`].
//!
//! Every field is optional in JSON; `Config::default()` is what the CLI uses
//! when no configuration file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MAX_STEPS, MEM_SIZE};
use crate::sim::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden in JSON configuration files.
mod defaults {
    use super::{DEFAULT_MAX_STEPS, MEM_SIZE};

    /// Total size of guest memory in bytes (4 KiB).
    pub const MEM_BYTES: usize = MEM_SIZE;

    /// Address of the first instruction; images are loaded at address 0.
    pub const START_PC: u32 = 0;

    /// Number of instructions executed before the run loop stops.
    pub const MAX_STEPS: u64 = DEFAULT_MAX_STEPS;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rv32sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 64 },
///     "memory": { "size": 8192, "lower_bound": 256 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.window(), (256, 8191));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Guest memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
///
/// Contains high-level run configuration such as tracing, the initial
/// program counter, the step budget, and an optional initial stack pointer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction with its disassembly at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to 0, where the image is loaded)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Maximum number of instructions a run executes
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,

    /// Initial stack pointer written to `sp` before the first step. Left at zero if not set.
    #[serde(default)]
    pub initial_sp: Option<u32>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    /// Returns the default step budget.
    const fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            max_steps: defaults::MAX_STEPS,
            initial_sp: None,
        }
    }
}

/// Guest memory configuration.
///
/// Specifies the capacity of the backing storage and the inclusive window of
/// addresses loads, stores, and fetches may touch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Memory capacity in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Lowest valid address
    #[serde(default)]
    pub lower_bound: u32,

    /// Highest valid address; defaults to `size - 1`
    #[serde(default)]
    pub upper_bound: Option<u32>,
}

impl MemoryConfig {
    /// Returns the default memory capacity.
    const fn default_size() -> usize {
        defaults::MEM_BYTES
    }

    /// Returns the effective `(lower, upper)` window.
    pub fn window(&self) -> (u32, u32) {
        let upper = self.upper_bound.unwrap_or_else(|| {
            u32::try_from(self.size.saturating_sub(1)).unwrap_or(u32::MAX)
        });
        (self.lower_bound, upper)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEM_BYTES,
            lower_bound: 0,
            upper_bound: None,
        }
    }
}
