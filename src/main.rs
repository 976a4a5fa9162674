//! Phasor - steady-state circuit solver
//!
//! Solves a `.netlist` file for node voltages and voltage source currents.
//!
//! # Usage
//!
//! ```bash
//! phasor circuit.netlist
//! phasor -v --omega 1000 circuit.netlist
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use phasor_spice::{
    error::Result,
    netlist,
    solver::{DEFAULT_ABSOLUTE_PIVOT_TOLERANCE, DEFAULT_RELATIVE_PIVOT_TOLERANCE},
    AnalysisMode, Analyzer, SolverConfig,
};

/// Steady-state DC/AC circuit solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file (.netlist)
    #[arg(value_name = "NETLIST_FILE")]
    netlist_file: PathBuf,

    /// Angular frequency in rad/s; overrides any .ac directive
    #[arg(long)]
    omega: Option<f64>,

    /// Smallest accepted LU pivot magnitude
    #[arg(long, default_value_t = DEFAULT_ABSOLUTE_PIVOT_TOLERANCE)]
    pivot_tolerance: f64,

    /// Smallest accepted LU pivot relative to the largest matrix entry
    #[arg(long, default_value_t = DEFAULT_RELATIVE_PIVOT_TOLERANCE)]
    relative_tolerance: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Parse the netlist file
    let mut netlist = netlist::parse_file(&args.netlist_file)?;
    if let Some(omega) = args.omega {
        netlist.mode = AnalysisMode::ac(omega)?;
    }
    log::info!(
        "solving {} ({} elements, {:?})",
        args.netlist_file.display(),
        netlist.elements.len(),
        netlist.mode
    );

    // Build the circuit
    let circuit = netlist.circuit()?;

    // Solve
    let config = SolverConfig::new()
        .with_absolute_pivot_tolerance(args.pivot_tolerance)
        .with_relative_pivot_tolerance(args.relative_tolerance);
    let solution = Analyzer::with_config(config).run(&circuit)?;

    print!("{}", solution);

    Ok(())
}
