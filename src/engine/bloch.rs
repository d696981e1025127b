//! Bloch-sphere coordinate math for the single-qubit widget.

use num_complex::Complex64 as C64;
use serde::Serialize;

use crate::engine::error::EngineError;
use crate::engine::state::{StateVector, EPS};

/// A single qubit α|0⟩ + β|1⟩.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QubitState {
    pub alpha: C64,
    pub beta: C64,
}

/// Derived, read-only view of a qubit on the unit sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlochCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub theta: f64,
    pub phi: f64,
}

impl QubitState {
    /// From raw amplitudes; same normalization rules as [`StateVector`].
    pub fn try_new(alpha: C64, beta: C64, auto_normalize: bool) -> Result<Self, EngineError> {
        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if (norm - 1.0).abs() < EPS {
            Ok(Self { alpha, beta })
        } else if auto_normalize {
            if norm < EPS {
                return Err(EngineError::NotNormalized(norm));
            }
            Ok(Self { alpha: alpha / norm, beta: beta / norm })
        } else {
            Err(EngineError::NotNormalized(norm))
        }
    }

    /// Inverse Bloch map, used by the manual-angle sliders:
    /// α = cos(θ/2), β = sin(θ/2)·e^{iφ}.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let half = theta / 2.0;
        Self {
            alpha: C64::new(half.cos(), 0.0),
            beta: C64::new(half.sin() * phi.cos(), half.sin() * phi.sin()),
        }
    }

    /// Phase-free reduction of one wire of a multi-qubit state, for feeding
    /// the sphere widget: α = √P(0), β = √P(1). Relative phase is dropped,
    /// which the widget accepts as an approximation.
    pub fn from_marginal(state: &StateVector, qubit: usize) -> Result<Self, EngineError> {
        let (p0, p1) = state.qubit_marginal(qubit)?;
        Self::try_new(C64::new(p0.sqrt(), 0.0), C64::new(p1.sqrt(), 0.0), true)
    }
}

/// Pauli-expectation coordinates of a qubit state.
///
/// For a maximally degenerate input (r ≈ 0) the polar angle is 0 by
/// convention rather than NaN.
pub fn bloch(q: &QubitState) -> BlochCoordinates {
    let (a, b) = (q.alpha, q.beta);
    let x = 2.0 * (a.re * b.re + a.im * b.im);
    let y = 2.0 * (a.im * b.re - a.re * b.im);
    let z = a.norm_sqr() - b.norm_sqr();
    let r = (x * x + y * y + z * z).sqrt();
    let theta = if r < EPS { 0.0 } else { (z / r).clamp(-1.0, 1.0).acos() };
    let phi = y.atan2(x);
    BlochCoordinates { x, y, z, theta, phi }
}
