//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the RV32I simulator. It provides:
//! 1. **Throughput:** Retired instructions and host-side MIPS.
//! 2. **Instruction mix:** Counts by class (ALU, load, store, branch, jump, upper-immediate).
//! 3. **Control flow:** Conditional branches taken versus not taken.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::core::cpu::{InstClass, Retired};

/// Simulation statistics structure tracking execution metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of OP and OP-IMM instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of JAL/JALR instructions retired.
    pub inst_jump: u64,
    /// Count of LUI/AUIPC instructions retired.
    pub inst_upper: u64,

    /// Number of conditional branches that were taken.
    pub branches_taken: u64,
}

impl Default for SimStats {
    /// Returns zeroed counters with the clock started now.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_upper: 0,
            branches_taken: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `report_sections` to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

const RULE: &str = "----------------------------------------------------------";

impl SimStats {
    /// Counts one retired instruction.
    pub const fn record(&mut self, retired: &Retired) {
        self.instructions_retired += 1;
        match retired.class() {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => {
                self.inst_branch += 1;
                if retired.redirected {
                    self.branches_taken += 1;
                }
            }
            InstClass::Jump => self.inst_jump += 1,
            InstClass::Upper => self.inst_upper += 1,
        }
    }

    /// Returns the wall-clock time since the counters were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns millions of retired instructions per host second.
    pub fn mips(&self) -> f64 {
        let seconds = self.elapsed().as_secs_f64();
        if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        }
    }

    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an
    /// empty slice selects all of them.
    pub fn report_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "RV32I SIMULATION STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "host_seconds             {:.4} s", self.elapsed().as_secs_f64());
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_mips                 {:.2}", self.mips());
            let _ = writeln!(out, "{RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.upper", self.inst_upper),
            ] {
                let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
            }
            let _ = writeln!(out, "{RULE}");
        }
        if want("branch") {
            let not_taken = self.inst_branch - self.branches_taken;
            let taken_pct = if self.inst_branch > 0 {
                100.0 * (self.branches_taken as f64 / self.inst_branch as f64)
            } else {
                0.0
            };
            let _ = writeln!(out, "BRANCHES");
            let _ = writeln!(out, "  branch.taken           {} ({taken_pct:.2}%)", self.branches_taken);
            let _ = writeln!(out, "  branch.not_taken       {not_taken}");
            let _ = writeln!(out, "{RULE}");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
