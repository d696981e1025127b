//! Complex-amplitude state vectors.

use nalgebra::DVector;
use num_complex::Complex64 as C64;
use rand::Rng;
use std::fmt;

use crate::engine::error::EngineError;

pub const EPS: f64 = 1e-12;

/// An n-qubit state: 2^n complex amplitudes, unit norm.
///
/// Basis indices follow the engine-wide convention (qubit 0 = most
/// significant bit), so `basis_label` is just the index in binary.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    data: DVector<C64>,
}

impl StateVector {
    /// The fixed initial state |0…0⟩: amplitude 1 at index 0.
    pub fn ground(n_qubits: usize) -> Self {
        let dim = 1usize << n_qubits;
        let mut data = DVector::from_element(dim, C64::new(0.0, 0.0));
        data[0] = C64::new(1.0, 0.0);
        Self { data }
    }

    /// Create from raw amplitudes; rejects non-power-of-two lengths, and
    /// non-normalized vectors unless `auto_normalize = true`.
    pub fn try_new(vec: DVector<C64>, auto_normalize: bool) -> Result<Self, EngineError> {
        let len = vec.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(EngineError::dim("state length", len, len.next_power_of_two().max(2)));
        }
        let mut v = vec;
        let norm = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        if (norm - 1.0).abs() < EPS {
            Ok(Self { data: v })
        } else if auto_normalize {
            if norm < EPS {
                return Err(EngineError::NotNormalized(norm));
            }
            v /= C64::from(norm);
            Ok(Self { data: v })
        } else {
            Err(EngineError::NotNormalized(norm))
        }
    }

    /// Internal constructor for amplitudes produced by a unitary apply;
    /// normalization is preserved by construction there.
    pub(crate) fn from_raw(data: DVector<C64>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn num_qubits(&self) -> usize {
        self.data.len().trailing_zeros() as usize
    }

    pub fn amplitude(&self, index: usize) -> C64 {
        self.data[index]
    }

    pub fn as_vector(&self) -> &DVector<C64> {
        &self.data
    }

    /// Probability of each basis state: |αᵢ|².
    pub fn probabilities(&self) -> Vec<f64> {
        self.data.iter().map(|z| z.norm_sqr()).collect()
    }

    /// Should be ≈ 1 after any chain of unitary applications.
    pub fn total_probability(&self) -> f64 {
        self.data.iter().map(|z| z.norm_sqr()).sum()
    }

    /// Binary ket label for a basis index, top wire leftmost: 2 ⇒ "10".
    pub fn basis_label(&self, index: usize) -> String {
        format!("{index:0width$b}", width = self.num_qubits())
    }

    /// Reduced (P(0), P(1)) for a single wire, summing out the others.
    pub fn qubit_marginal(&self, qubit: usize) -> Result<(f64, f64), EngineError> {
        let n = self.num_qubits();
        if qubit >= n {
            return Err(EngineError::dim("qubit index", qubit, n));
        }
        let shift = n - 1 - qubit;
        let mut p = (0.0, 0.0);
        for (i, z) in self.data.iter().enumerate() {
            if (i >> shift) & 1 == 0 {
                p.0 += z.norm_sqr();
            } else {
                p.1 += z.norm_sqr();
            }
        }
        Ok(p)
    }

    /// Draw one measurement outcome (basis index) by inverse CDF.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let draw: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (index, z) in self.data.iter().enumerate() {
            cumulative += z.norm_sqr();
            if draw <= cumulative {
                return index;
            }
        }
        self.data.len() - 1 // rounding slack: land on the last state
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, z) in self.data.iter().enumerate() {
            writeln!(
                f,
                "{:+.4}{:+.4}i |{}⟩  p={:.4}",
                z.re,
                z.im,
                self.basis_label(i),
                z.norm_sqr()
            )?;
        }
        Ok(())
    }
}
