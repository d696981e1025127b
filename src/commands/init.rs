//! `quantaboard init` — emit an empty snapshot the dashboard (or a hand
//! editor) can start from.

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::SimConfig;
use crate::engine::Circuit;
use crate::io::atomic::atomic_write;

pub fn run(cfg: &SimConfig, out: Option<&Path>) -> Result<()> {
    ensure!(
        cfg.qubits > 0 && cfg.positions > 0,
        "config grid must be nonzero (qubits = {}, positions = {})",
        cfg.qubits,
        cfg.positions
    );
    let circuit = Circuit::new(cfg.qubits, cfg.positions);
    let text = serde_json::to_string_pretty(&circuit)?;
    match out {
        Some(path) => {
            atomic_write(path, text.as_bytes())
                .with_context(|| format!("write snapshot {}", path.display()))?;
            eprintln!("{} wrote {}", "ok:".green().bold(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
