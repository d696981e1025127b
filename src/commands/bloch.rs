//! `quantaboard bloch` — the CLI mirror of the sphere widget's angle sliders.

use anyhow::Result;
use colored::Colorize;

use crate::engine::{bloch, QubitState};

pub fn run(theta: f64, phi: f64, json: bool) -> Result<()> {
    let q = QubitState::from_angles(theta, phi);
    let coords = bloch(&q);
    if json {
        println!("{}", serde_json::to_string_pretty(&coords)?);
        return Ok(());
    }
    println!("{}", "qubit".bold());
    println!("  α = {:+.4}{:+.4}i", q.alpha.re, q.alpha.im);
    println!("  β = {:+.4}{:+.4}i", q.beta.re, q.beta.im);
    println!("{}", "bloch".bold());
    println!("  (x, y, z) = ({:+.4}, {:+.4}, {:+.4})", coords.x, coords.y, coords.z);
    println!("  θ = {:.4}  φ = {:.4}", coords.theta, coords.phi);
    Ok(())
}
