//! `quantaboard bell` — the tutorial scenario every product demo opens with:
//! H on the top wire, then CNOT, yielding the 50/50 entangled pair.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::simulate::{print_state, sample_counts};
use crate::engine::{compute_state, Circuit, EngineError};

pub fn circuit() -> Result<Circuit, EngineError> {
    let mut c = Circuit::new(2, 4);
    c.place(0, 0, "H")?;
    c.place(0, 1, "CNOT")?;
    Ok(c)
}

pub fn run(shots: usize) -> Result<()> {
    let c = circuit().context("build Bell circuit")?;
    let psi = compute_state(&c).context("simulate Bell circuit")?;
    println!("{}", "Bell state  (H q0; CNOT 0→1)".bold());
    print_state(&psi);

    let counts = sample_counts(&psi, shots, &mut rand::thread_rng());
    println!("{} {} shots", "measured:".bold(), shots);
    for (i, &n) in counts.iter().enumerate() {
        println!("|{}⟩  {:>6}  ({:.1}%)", psi.basis_label(i), n, 100.0 * n as f64 / shots as f64);
    }
    Ok(())
}
