//! Simulation driver and program loading.
//!
//! Provides utilities for loading raw binaries into guest memory, the run
//! loop that repeatedly invokes the single-step engine, and the error type
//! for everything outside a single step.

/// Raw binary loader.
pub mod loader;

/// Run loop with halt detection and statistics.
pub mod simulator;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::common::error::MemoryError;

pub use self::simulator::{HaltReason, RunSummary, Simulator};

/// Errors raised while setting up or loading a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("could not read '{}'", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The memory could not be configured or the image did not fit.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// The configuration file is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
