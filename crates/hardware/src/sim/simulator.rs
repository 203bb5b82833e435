//! Simulator: owns guest memory and machine state side-by-side.
//!
//! The engine itself is a pure step function; this type supplies what a run
//! needs around it:
//! 1. **Setup:** Builds memory and the initial state from a [`Config`].
//! 2. **Run loop:** Steps until the budget runs out, the program parks itself
//!    in a self-loop, or a step faults.
//! 3. **Observability:** Per-instruction `trace!` output and [`SimStats`].

use std::path::Path;

use tracing::{debug, trace, warn};

use super::{SimError, loader};
use crate::common::error::ExecError;
use crate::config::Config;
use crate::core::arch::MachineState;
use crate::core::cpu::{self, Retired};
use crate::isa::abi;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Why a run stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// The step budget was exhausted.
    StepLimit,
    /// An instruction redirected control to its own address (e.g. `jal x0, 0`).
    SelfLoop,
    /// A step failed; the state is the last one that completed.
    Fault(ExecError),
}

/// Result of [`Simulator::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the run stopped.
    pub reason: HaltReason,
    /// Instructions retired during this run.
    pub steps: u64,
    /// Final machine state.
    pub state: MachineState,
}

/// Top-level simulator: guest memory, architectural state, and statistics.
#[derive(Debug)]
pub struct Simulator {
    /// Guest memory.
    pub memory: Memory,
    /// Current architectural state.
    pub state: MachineState,
    /// Execution statistics.
    pub stats: SimStats,
    trace: bool,
}

impl Simulator {
    /// Creates a simulator with zeroed memory and the configured initial state.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Memory`] if the configured window does not fit the
    /// configured capacity.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let (lower, upper) = config.memory.window();
        let memory = Memory::with_window(config.memory.size, lower, upper)?;

        let mut state = MachineState::new(config.general.start_pc);
        if let Some(sp) = config.general.initial_sp {
            state.set_reg(abi::REG_SP, sp);
        }

        debug!(
            capacity = memory.capacity(),
            lower = format_args!("{lower:#010x}"),
            upper = format_args!("{upper:#010x}"),
            start_pc = format_args!("{:#010x}", state.pc),
            "simulator created"
        );

        Ok(Self {
            memory,
            state,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        })
    }

    /// Copies a raw image to address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Memory`] if the image exceeds the capacity.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), SimError> {
        Ok(self.memory.load_image(image)?)
    }

    /// Reads a raw binary from disk and copies it to address 0.
    ///
    /// # Errors
    ///
    /// See [`loader::load_program`].
    pub fn load_program(&mut self, path: impl AsRef<Path>) -> Result<usize, SimError> {
        loader::load_program(&mut self.memory, path)
    }

    /// Executes one instruction, committing only on success.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`ExecError`]; the state is unchanged in that case.
    pub fn step(&mut self) -> Result<Retired, ExecError> {
        let retired = cpu::step_in_place(&mut self.memory, &mut self.state)?;
        if self.trace {
            trace!(
                pc = format_args!("{:#010x}", retired.pc),
                word = format_args!("{:#010x}", retired.inst.raw),
                "{}",
                retired.inst
            );
        }
        self.stats.record(&retired);
        Ok(retired)
    }

    /// Steps until `max_steps` instructions retire, a self-loop is reached,
    /// or a step faults.
    pub fn run(&mut self, max_steps: u64) -> RunSummary {
        let mut steps = 0;
        let reason = loop {
            if steps >= max_steps {
                break HaltReason::StepLimit;
            }
            match self.step() {
                Ok(retired) => {
                    steps += 1;
                    if retired.is_self_loop() {
                        break HaltReason::SelfLoop;
                    }
                }
                Err(err) => {
                    warn!(pc = format_args!("{:#010x}", err.pc()), error = %err, "step faulted");
                    break HaltReason::Fault(err);
                }
            }
        };
        debug!(?reason, steps, pc = format_args!("{:#010x}", self.state.pc), "run halted");
        RunSummary {
            reason,
            steps,
            state: self.state,
        }
    }
}
