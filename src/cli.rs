use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quantaboard",
    about = "Quantaboard state engine — simulate circuit snapshots, Bloch math, particle demos",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuantaboardCli {
    /// Global: path to config (TOML); default: ~/.quantaboard/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: machine-readable JSON on stdout where a command supports it
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate a circuit snapshot (JSON) and print amplitudes/probabilities
    ///
    /// Examples:
    ///   quantaboard simulate circuit.json
    ///   quantaboard simulate circuit.json --shots 2000 -o report.json
    Simulate {
        /// Circuit snapshot file (JSON, dashboard payload shape)
        #[arg(value_name = "CIRCUIT")]
        input: PathBuf,

        /// Also sample this many measurement shots
        #[arg(long, value_name = "N")]
        shots: Option<usize>,

        /// Write a JSON report (atomically) in addition to stdout
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Write an empty circuit snapshot sized from config
    Init {
        /// Destination file (stdout when omitted)
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Bloch coordinates for the manual-angle controls
    Bloch {
        /// Polar angle θ in radians, [0, π]
        #[arg(long)]
        theta: f64,

        /// Azimuthal angle φ in radians, (−π, π]
        #[arg(long, default_value_t = 0.0)]
        phi: f64,
    },

    /// Canonical Bell-state tutorial: H on q0, then CNOT 0→1
    Bell {
        /// Sample this many shots (default: config `shots`)
        #[arg(long, value_name = "N")]
        shots: Option<usize>,
    },

    /// Run the decorative particle field headlessly
    Particles {
        /// Animation ticks to run (60 per second of animation time)
        #[arg(long, default_value_t = 120)]
        ticks: usize,

        /// RNG seed (default: derived from the clock)
        #[arg(long)]
        seed: Option<u64>,
    },
}
