//! Kronecker products and controlled lifts.
//!
//! Bit convention, used everywhere in the engine: qubit 0 is the MOST
//! significant bit of a basis index, so the binary rendering of an index
//! reads top wire first. `lift_1q` and `cnot_n` must agree on this.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use crate::engine::error::EngineError;
use crate::engine::state::StateVector;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// A full-dimension unitary ready to apply to a state vector.
#[derive(Clone, Debug)]
pub struct Operator {
    pub m: DMatrix<C64>,
}

impl Operator {
    /// Wrap a matrix, checking squareness and unitarity (U†U = I).
    pub fn try_new_unitary(m: DMatrix<C64>) -> Result<Self, EngineError> {
        if m.nrows() != m.ncols() {
            return Err(EngineError::dim("operator rows", m.nrows(), m.ncols()));
        }
        let u_dag_u = m.adjoint() * &m;
        let id = DMatrix::<C64>::identity(m.nrows(), m.ncols());
        let max_diff = (u_dag_u - id).iter().map(|z| z.norm()).fold(0.0_f64, f64::max);
        if max_diff > 1e-8 {
            return Err(EngineError::NotUnitary(max_diff));
        }
        Ok(Self { m })
    }

    /// Apply to a full state vector (dimensions must match).
    pub fn apply(&self, psi: &StateVector) -> Result<StateVector, EngineError> {
        if self.m.ncols() != psi.len() {
            return Err(EngineError::dim("operator columns", self.m.ncols(), psi.len()));
        }
        let data: DVector<C64> = &self.m * psi.as_vector();
        Ok(StateVector::from_raw(data))
    }
}

/// Kronecker product A ⊗ B (A supplies the high-order index bits).
pub fn kron(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = DMatrix::<C64>::from_element(ar * br, ac * bc, c(0.0, 0.0));
    for i in 0..ar {
        for j in 0..ac {
            let aij = a[(i, j)];
            for k in 0..br {
                for l in 0..bc {
                    out[(i * br + k, j * bc + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    out
}

/// Promote a 1-qubit gate `u` onto `n_qubits`, acting on wire `target`.
///
/// Wires are kron'ed in ascending order, so wire 0 lands in the high-order
/// factor, matching the engine-wide bit convention.
pub fn lift_1q(u: &DMatrix<C64>, n_qubits: usize, target: usize) -> Result<Operator, EngineError> {
    if u.nrows() != 2 || u.ncols() != 2 {
        return Err(EngineError::dim("single-qubit gate rows", u.nrows(), 2));
    }
    if target >= n_qubits {
        return Err(EngineError::dim("qubit index", target, n_qubits));
    }

    let i2 = DMatrix::<C64>::identity(2, 2);
    let mut acc = DMatrix::<C64>::from_element(1, 1, c(1.0, 0.0));
    for q in 0..n_qubits {
        let m = if q == target { u.clone() } else { i2.clone() };
        acc = kron(&acc, &m);
    }
    Ok(Operator { m: acc })
}

/// Build an n-qubit CNOT as a full 2^n permutation (control → target).
pub fn cnot_n(n_qubits: usize, control: usize, target: usize) -> Result<Operator, EngineError> {
    if control >= n_qubits {
        return Err(EngineError::dim("cnot control", control, n_qubits));
    }
    if target >= n_qubits {
        return Err(EngineError::dim("cnot target", target, n_qubits));
    }
    if control == target {
        return Err(EngineError::dim("cnot target equals control", target, n_qubits));
    }
    let dim = 1usize << n_qubits;
    let shift_c = n_qubits - 1 - control;
    let shift_t = n_qubits - 1 - target;
    let mut m = DMatrix::<C64>::from_element(dim, dim, c(0.0, 0.0));
    for basis in 0..dim {
        let mut out = basis;
        if (basis >> shift_c) & 1 == 1 {
            // flip target bit
            out ^= 1usize << shift_t;
        }
        m[(out, basis)] = c(1.0, 0.0);
    }
    Ok(Operator { m })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::gate;

    #[test]
    fn kron_dimensions() {
        let a = gate::i2();
        let b = gate::h();
        let k = kron(&a, &b);
        assert_eq!(k.nrows(), 4);
        assert_eq!(k.ncols(), 4);
    }

    #[test]
    fn lifted_gates_are_unitary() {
        for u in [gate::h(), gate::x(), gate::y(), gate::z()] {
            let op = lift_1q(&u, 2, 1).unwrap();
            assert!(Operator::try_new_unitary(op.m).is_ok());
        }
    }

    #[test]
    fn cnot_is_a_permutation() {
        let op = cnot_n(2, 0, 1).unwrap();
        assert!(Operator::try_new_unitary(op.m.clone()).is_ok());
        // control bit 1 flips the target: |10⟩ → |11⟩, |11⟩ → |10⟩
        assert_eq!(op.m[(3, 2)], c(1.0, 0.0));
        assert_eq!(op.m[(2, 3)], c(1.0, 0.0));
        assert_eq!(op.m[(0, 0)], c(1.0, 0.0));
        assert_eq!(op.m[(1, 1)], c(1.0, 0.0));
    }

    #[test]
    fn cnot_rejects_overlapping_wires() {
        assert!(cnot_n(2, 1, 1).is_err());
    }
}
