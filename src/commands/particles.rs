//! `quantaboard particles` — headless run of the decorative field, mostly a
//! tuning aid for the canvas parameters.

use anyhow::Result;
use colored::Colorize;

use crate::engine::particles::ParticleField;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 180.0;
const COUNT: usize = 64;
const DT: f64 = 1.0 / 60.0;

pub fn run(ticks: usize, seed: Option<u64>, tunnel_probability: f64) -> Result<()> {
    let seed = seed.unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    let mut field = ParticleField::new(WIDTH, HEIGHT, tunnel_probability, seed);
    field.spawn(COUNT);

    println!(
        "{} {}×{}, {} particles, tunnel p = {}, seed = {}",
        "field:".bold(),
        WIDTH,
        HEIGHT,
        COUNT,
        tunnel_probability,
        seed
    );
    for tick in 1..=ticks {
        field.step(DT);
        if tick % 30 == 0 || tick == ticks {
            let p0 = field.particles()[0];
            println!(
                "tick {:>5}  mean life {:>5.1}%  p0 at ({:>6.1}, {:>6.1})",
                tick,
                field.mean_life_fraction() * 100.0,
                p0.x,
                p0.y
            );
        }
    }
    Ok(())
}
