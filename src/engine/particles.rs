//! Decorative particle field behind the circuit canvas.
//!
//! Time-stepped on a single render loop; no shared state with the State
//! Engine. A particle leaving the field either "tunnels" to the opposite
//! edge with a fixed probability or reflects. Expired particles respawn in
//! place so the field density stays constant.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub max_life: f64,
    pub hue: f64,
    pub size: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    tunnel_probability: f64,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Seeded so demo runs and tests are reproducible tick-for-tick.
    pub fn new(width: f64, height: f64, tunnel_probability: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            tunnel_probability: tunnel_probability.clamp(0.0, 1.0),
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn spawn(&mut self, count: usize) {
        for _ in 0..count {
            let p = self.random_particle();
            self.particles.push(p);
        }
    }

    fn random_particle(&mut self) -> Particle {
        // Gaussian drift looks calmer than uniform velocities on the canvas.
        let drift = Normal::new(0.0, 12.0).unwrap();
        let max_life = self.rng.gen_range(2.0..6.0);
        Particle {
            x: self.rng.gen_range(0.0..self.width),
            y: self.rng.gen_range(0.0..self.height),
            vx: drift.sample(&mut self.rng),
            vy: drift.sample(&mut self.rng),
            life: max_life,
            max_life,
            hue: self.rng.gen_range(180.0..300.0),
            size: self.rng.gen_range(1.0..3.5),
        }
    }

    /// One explicit-Euler tick. `dt` is in seconds of animation time.
    pub fn step(&mut self, dt: f64) {
        for i in 0..self.particles.len() {
            let mut p = self.particles[i];
            p.x += p.vx * dt;
            p.y += p.vy * dt;

            if p.x < 0.0 || p.x > self.width {
                if self.rng.gen::<f64>() < self.tunnel_probability {
                    // tunnel to the far edge, keep velocity
                    p.x = if p.x < 0.0 { self.width } else { 0.0 };
                } else {
                    p.x = p.x.clamp(0.0, self.width);
                    p.vx = -p.vx;
                }
            }
            if p.y < 0.0 || p.y > self.height {
                if self.rng.gen::<f64>() < self.tunnel_probability {
                    p.y = if p.y < 0.0 { self.height } else { 0.0 };
                } else {
                    p.y = p.y.clamp(0.0, self.height);
                    p.vy = -p.vy;
                }
            }

            p.life -= dt;
            if p.life <= 0.0 {
                p = self.random_particle();
            }
            self.particles[i] = p;
        }
    }

    /// Mean remaining life fraction, for the demo's per-tick summary line.
    pub fn mean_life_fraction(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f64 = self.particles.iter().map(|p| p.life / p.max_life).sum();
        total / self.particles.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_trajectories() {
        let mut a = ParticleField::new(320.0, 180.0, 0.15, 7);
        let mut b = ParticleField::new(320.0, 180.0, 0.15, 7);
        a.spawn(16);
        b.spawn(16);
        for _ in 0..120 {
            a.step(1.0 / 60.0);
            b.step(1.0 / 60.0);
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn particles_stay_in_bounds() {
        let mut field = ParticleField::new(100.0, 50.0, 0.5, 42);
        field.spawn(32);
        for _ in 0..600 {
            field.step(1.0 / 30.0);
        }
        for p in field.particles() {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=50.0).contains(&p.y));
        }
    }

    #[test]
    fn life_stays_positive_and_bounded() {
        let mut field = ParticleField::new(100.0, 100.0, 0.15, 1);
        field.spawn(8);
        for _ in 0..1000 {
            field.step(0.05);
        }
        for p in field.particles() {
            assert!(p.life > 0.0);
            assert!(p.life <= p.max_life);
        }
    }
}
