//! RV32I instruction-set simulator CLI.
//!
//! This binary provides a single entry point for running and inspecting raw
//! RV32I images. It performs:
//! 1. **Run:** Load a flat binary at address 0 and step it until it parks in a
//!    self-loop, exhausts its step budget, or faults.
//! 2. **Disassemble:** Print every word of an image as an instruction.
//!
//! Exit codes: `0` when a run halts on a self-loop or the step budget, `1` when
//! the guest faults, `2` when the image or configuration cannot be loaded.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rv32sim_core::config::Config;
use rv32sim_core::core::MachineState;
use rv32sim_core::isa::disasm::disassemble;
use rv32sim_core::sim::{HaltReason, SimError, Simulator, loader};

/// Exit code for a clean halt.
const EXIT_OK: i32 = 0;
/// Exit code for a guest fault.
const EXIT_FAULT: i32 = 1;
/// Exit code for load and configuration errors.
const EXIT_SETUP: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "RV32I instruction-set simulator",
    long_about = "Run or disassemble a flat RV32I binary loaded at address 0.\n\nExamples:\n  rv32sim run prog.bin\n  rv32sim run prog.bin --trace --dump-state json\n  rv32sim disasm prog.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a raw binary until it halts.
    Run {
        /// Raw binary image, loaded at address 0.
        image: PathBuf,

        /// JSON configuration file (defaults apply to missing fields).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured step budget.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Print the final machine state.
        #[arg(long, value_enum)]
        dump_state: Option<DumpFormat>,

        /// Print execution statistics after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Disassemble every word of a raw binary.
    Disasm {
        /// Raw binary image.
        image: PathBuf,
    },
}

/// Output format for `--dump-state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    /// Register table with ABI names.
    Text,
    /// The state serialized as JSON.
    Json,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Run { trace: true, .. } => "rv32sim_core=trace",
        _ => "rv32sim_core=warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Run {
            image,
            config,
            max_steps,
            trace,
            dump_state,
            stats,
        } => cmd_run(&image, config.as_deref(), max_steps, trace, dump_state, stats),
        Commands::Disasm { image } => cmd_disasm(&image),
    };

    process::exit(exit_code);
}

/// Loads the configuration and image, runs to a halt, and reports the outcome.
fn cmd_run(
    image: &Path,
    config_path: Option<&Path>,
    max_steps: Option<u64>,
    trace: bool,
    dump_state: Option<DumpFormat>,
    stats: bool,
) -> i32 {
    let (mut sim, configured_steps) = match setup(image, config_path, trace) {
        Ok(setup) => setup,
        Err(err) => {
            report_error(&err);
            return EXIT_SETUP;
        }
    };
    let budget = max_steps.unwrap_or(configured_steps);
    let summary = sim.run(budget);

    let code = match &summary.reason {
        HaltReason::SelfLoop => {
            println!(
                "[*] Halted: self-loop at {:#010x} after {} steps",
                summary.state.pc, summary.steps
            );
            EXIT_OK
        }
        HaltReason::StepLimit => {
            println!("[*] Halted: step limit of {budget} reached");
            EXIT_OK
        }
        HaltReason::Fault(err) => {
            eprintln!("[!] FAULT after {} steps: {err}", summary.steps);
            report_sources(err);
            EXIT_FAULT
        }
    };

    if let Some(format) = dump_state {
        print_state(&summary.state, format);
    }
    if stats {
        sim.stats.print();
    }
    code
}

/// Builds the simulator and loads the image; returns it with the configured step budget.
fn setup(
    image: &Path,
    config_path: Option<&Path>,
    trace: bool,
) -> Result<(Simulator, u64), SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;

    let mut sim = Simulator::new(&config)?;
    let _ = sim.load_program(image)?;
    Ok((sim, config.general.max_steps))
}

/// Prints each 4-byte word of the image with its address and disassembly.
///
/// Trailing bytes that do not form a whole word are ignored.
fn cmd_disasm(image: &Path) -> i32 {
    let bytes = match loader::load_binary(image) {
        Ok(bytes) => bytes,
        Err(err) => {
            report_error(&err);
            return EXIT_SETUP;
        }
    };
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        println!("{:08x}:  {word:08x}  {}", i * 4, disassemble(word));
    }
    EXIT_OK
}

fn print_state(state: &MachineState, format: DumpFormat) {
    match format {
        DumpFormat::Text => {
            println!("pc = {:#010x}", state.pc);
            print!("{}", state.regs);
        }
        DumpFormat::Json => match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("[!] could not serialize state: {err}"),
        },
    }
}

fn report_error(err: &SimError) {
    eprintln!("[!] {err}");
    report_sources(err);
}

fn report_sources(err: &dyn std::error::Error) {
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("    caused by: {cause}");
        source = cause.source();
    }
}
