use clap::Parser;

use quantaboard::cli::{Command, QuantaboardCli};
use quantaboard::{commands, config};

fn main() -> anyhow::Result<()> {
    let args = QuantaboardCli::parse();
    let cfg = config::load(config::resolve_config_path(&args.config).as_deref())?;

    match args.cmd {
        Command::Simulate { input, shots, out } => {
            commands::simulate::run(&input, shots, out.as_deref(), args.json)
        }
        Command::Init { out } => commands::init::run(&cfg, out.as_deref()),
        Command::Bloch { theta, phi } => commands::bloch::run(theta, phi, args.json),
        Command::Bell { shots } => commands::bell::run(shots.unwrap_or(cfg.shots)),
        Command::Particles { ticks, seed } => {
            commands::particles::run(ticks, seed, cfg.tunnel_probability)
        }
    }
}
