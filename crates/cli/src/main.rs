//! Gate-level single-bit CPU simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Run:** Build a CPU, print the initial state, then one state line per step.
//! 2. **Disassemble:** List the ROM and mark addresses the 1-bit PC can never reach.
//!
//! With no subcommand the default run reproduces the demo trace (four steps,
//! five observations).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use gatesim_core::common::Bit;
use gatesim_core::common::constants::{REACHABLE_ROM_WORDS, ROM_WORDS};
use gatesim_core::config::Config;
use gatesim_core::isa::disasm::{disassemble, format_word};
use gatesim_core::sim::{Simulator, loader};
use gatesim_core::soc::Rom8;

#[derive(Parser, Debug)]
#[command(
    name = "gatesim",
    args_conflicts_with_subcommands = true,
    author,
    version,
    about = "Gate-level single-bit CPU simulator",
    long_about = "Simulate a tiny CPU built from logic gates: flip-flops, a full adder, a 1-bit ALU, a 4x4 RAM and an 8x8 ROM.\n\nExamples:\n  gatesim\n  gatesim run --steps 8 --stats\n  gatesim run --program prog.txt --json\n  gatesim disasm"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the CPU and print its state after every step (default).
    Run(RunArgs),

    /// List the ROM contents with mnemonics.
    Disasm {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Program listing (one 8-bit word per line); overrides the config.
        #[arg(short, long)]
        program: Option<PathBuf>,

        /// Log filter (e.g. `debug`); `RUST_LOG` takes precedence.
        #[arg(long, default_value = "warn")]
        log_level: String,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct RunArgs {
    /// Number of steps to execute (default: config `general.steps`).
    #[arg(short, long)]
    steps: Option<usize>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Program listing (one 8-bit word per line); overrides the config.
    #[arg(short, long)]
    program: Option<PathBuf>,

    /// Clock level applied during steps (0 or 1).
    #[arg(long, value_parser = parse_bit)]
    clock: Option<Bit>,

    /// Print the trace as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Log filter (e.g. `debug`, `gatesim_core=trace`); `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run(args)) => cmd_run(&args),
        Some(Commands::Disasm {
            config,
            program,
            log_level,
        }) => {
            init_tracing(&log_level);
            cmd_disasm(config.as_ref(), program.as_ref())
        }
        None => cmd_run(&cli.run),
    };

    if let Err(message) = result {
        error!("{message}");
        eprintln!("\n[!] FATAL: {message}");
        process::exit(1);
    }
}

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins over the `--log-level` fallback.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses a clock level given on the command line.
fn parse_bit(s: &str) -> Result<Bit, String> {
    let value: u8 = s.parse().map_err(|_| format!("expected 0 or 1, got {s:?}"))?;
    Bit::try_from(value).map_err(|e| e.to_string())
}

/// Builds the configuration from an optional JSON file and an optional listing.
///
/// # Errors
///
/// Returns a printable message if either file cannot be read or parsed.
fn build_config(
    config: Option<&PathBuf>,
    program: Option<&PathBuf>,
) -> Result<Config, String> {
    let mut cfg = match config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    if let Some(path) = program {
        let rom = loader::load_program(path).map_err(|e| format!("{}: {e}", path.display()))?;
        cfg.program = Some(rom.iter().map(|word| word.to_vec()).collect());
    }
    Ok(cfg)
}

/// Runs the simulator and prints the trace.
fn cmd_run(args: &RunArgs) -> Result<(), String> {
    init_tracing(&args.log_level);

    let mut config = build_config(args.config.as_ref(), args.program.as_ref())?;
    if let Some(clock) = args.clock {
        config.general.clock = clock;
    }
    let steps = args.steps.unwrap_or(config.general.steps);
    debug!(steps, clock = config.general.clock.as_u8(), "starting run");

    let mut sim = Simulator::new(&config).map_err(|e| e.to_string())?;
    if args.json {
        let trace = sim.run(steps).map_err(|e| e.to_string())?;
        let text = serde_json::to_string_pretty(&trace).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        print_trace(&mut sim, steps, &mut io::stdout().lock())?;
    }

    if args.stats {
        println!();
        println!("{}", sim.cpu.stats);
        let unvisited = sim.cpu.stats.unvisited();
        if !unvisited.is_empty() {
            println!("never fetched: {unvisited:?}");
        }
    }
    Ok(())
}

/// Writes the current state, then the state after each of `steps` steps.
///
/// Lines are written as the CPU runs, so nothing is buffered per step.
///
/// # Errors
///
/// Returns a printable message on a failing step or a closed output.
fn print_trace(sim: &mut Simulator, steps: usize, out: &mut impl Write) -> Result<(), String> {
    writeln!(out, "{}", sim.snapshot()).map_err(|e| e.to_string())?;
    for _ in 0..steps {
        let snapshot = sim.tick().map_err(|e| e.to_string())?;
        writeln!(out, "{snapshot}").map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Prints the ROM listing.
fn cmd_disasm(config: Option<&PathBuf>, program: Option<&PathBuf>) -> Result<(), String> {
    let config = build_config(config, program)?;
    let rom = Rom8::from_config(&config).map_err(|e| e.to_string())?;

    for (addr, word) in rom.words().iter().enumerate() {
        let mark = if addr < REACHABLE_ROM_WORDS {
            ""
        } else {
            "  (unreachable)"
        };
        println!("{addr}: {}  {}{mark}", format_word(word), disassemble(word));
    }
    debug!(words = ROM_WORDS, "listing complete");
    Ok(())
}
