//! `quantaboard simulate` — run a dashboard circuit snapshot through the
//! State Engine and report amplitudes, probabilities, and optional shots.

use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::fs;
use std::path::Path;

use crate::engine::{compute_state, Circuit, StateVector};
use crate::io::atomic::atomic_write;

pub fn run(input: &Path, shots: Option<usize>, out: Option<&Path>, json: bool) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("read circuit snapshot {}", input.display()))?;
    let circuit: Circuit = serde_json::from_str(&text)
        .with_context(|| format!("parse circuit snapshot {}", input.display()))?;

    let psi = compute_state(&circuit)
        .with_context(|| format!("simulate circuit {}", input.display()))?;

    let counts = shots.map(|n| sample_counts(&psi, n, &mut rand::thread_rng()));

    if json {
        println!("{}", serde_json::to_string_pretty(&report(&circuit, &psi, shots, counts.as_deref()))?);
    } else {
        print_state(&psi);
        if let (Some(n), Some(counts)) = (shots, counts.as_ref()) {
            print_counts(&psi, n, counts);
        }
    }

    if let Some(out) = out {
        let doc = report(&circuit, &psi, shots, counts.as_deref());
        atomic_write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("write report {}", out.display()))?;
        eprintln!("{} wrote {}", "ok:".green().bold(), out.display());
    }
    Ok(())
}

/// Amplitude table with probability bars, the CLI mirror of the dashboard's
/// state panel.
pub fn print_state(psi: &StateVector) {
    let probs = psi.probabilities();
    for (i, p) in probs.iter().enumerate() {
        let amp = psi.amplitude(i);
        let bar = "█".repeat((p * 24.0).round() as usize);
        println!(
            "|{}⟩  {:+.4}{:+.4}i  {:>7.3}%  {}",
            psi.basis_label(i).bold(),
            amp.re,
            amp.im,
            p * 100.0,
            bar.cyan()
        );
    }
}

fn print_counts(psi: &StateVector, shots: usize, counts: &[usize]) {
    println!("{} {} shots", "measured:".bold(), shots);
    for (i, &c) in counts.iter().enumerate() {
        println!("|{}⟩  {:>6}  ({:.1}%)", psi.basis_label(i), c, 100.0 * c as f64 / shots as f64);
    }
}

pub fn sample_counts<R: Rng>(psi: &StateVector, shots: usize, rng: &mut R) -> Vec<usize> {
    let mut counts = vec![0usize; psi.len()];
    for _ in 0..shots {
        counts[psi.sample(rng)] += 1;
    }
    counts
}

fn report(
    circuit: &Circuit,
    psi: &StateVector,
    shots: Option<usize>,
    counts: Option<&[usize]>,
) -> serde_json::Value {
    let amplitudes: Vec<_> = (0..psi.len())
        .map(|i| {
            let z = psi.amplitude(i);
            serde_json::json!({ "basis": psi.basis_label(i), "re": z.re, "im": z.im })
        })
        .collect();
    serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "qubits": circuit.qubits(),
        "positions": circuit.positions(),
        "amplitudes": amplitudes,
        "probabilities": psi.probabilities(),
        "shots": shots,
        "counts": counts,
    })
}
