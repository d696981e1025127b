//! The State Engine: circuit snapshot in, state vector out.
//!
//! Stateless and pure. All "state" lives in the caller-owned [`Circuit`];
//! every call recomputes from |0…0⟩, so the UI can invoke it on each grid
//! mutation without ordering hazards.

use crate::engine::circuit::Circuit;
use crate::engine::error::EngineError;
use crate::engine::gate::{self, GateKind};
use crate::engine::ops::{self, Operator};
use crate::engine::state::StateVector;

/// Apply every placement of `circuit` to |0…0⟩, in position order and in
/// wire order within a column.
///
/// Same-column gates are applied sequentially in wire order, not jointly.
/// That is exact for the supported set (single-qubit gates on distinct
/// wires commute) but it is a simplification, not a general guarantee; a
/// future non-commuting multi-wire gate would need a real column semantic.
pub fn compute_state(circuit: &Circuit) -> Result<StateVector, EngineError> {
    let n = circuit.qubits();
    let mut psi = StateVector::ground(n);
    for (qubit, _position, gate_id) in circuit.placements() {
        let def = gate::lookup(gate_id)?;
        let op = lift_placement(def.kind, n, qubit)?;
        psi = op.apply(&psi)?;
    }
    Ok(psi)
}

/// Per-basis-state measurement probabilities for a computed state.
pub fn probabilities(state: &StateVector) -> Vec<f64> {
    state.probabilities()
}

/// Resolve a placement to a full-dimension operator. CNOT placed on wire q
/// takes q as control and the next wire (wrapping) as target, the two-wire
/// convention the dashboard draws.
fn lift_placement(kind: GateKind, n_qubits: usize, qubit: usize) -> Result<Operator, EngineError> {
    match kind.single_qubit_matrix() {
        Some(u) => ops::lift_1q(&u, n_qubits, qubit),
        None => ops::cnot_n(n_qubits, qubit, (qubit + 1) % n_qubits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn empty_circuit_is_ground_state() {
        let c = Circuit::new(2, 4);
        let psi = compute_state(&c).unwrap();
        assert_eq!(psi, StateVector::ground(2));
    }

    #[test]
    fn hadamard_splits_the_top_wire() {
        let mut c = Circuit::new(2, 4);
        c.place(0, 0, "H").unwrap();
        let p = probabilities(&compute_state(&c).unwrap());
        assert!((p[0] - 0.5).abs() < TOL); // |00⟩
        assert!((p[2] - 0.5).abs() < TOL); // |10⟩
        assert!(p[1].abs() < TOL);
        assert!(p[3].abs() < TOL);
    }

    #[test]
    fn cnot_on_one_qubit_grid_is_rejected() {
        let mut c = Circuit::new(1, 4);
        c.place(0, 0, "CNOT").unwrap();
        assert!(matches!(
            compute_state(&c),
            Err(EngineError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn unknown_gate_does_not_act_as_identity() {
        let mut c = Circuit::new(2, 4);
        c.place(0, 0, "HADAMARD").unwrap();
        assert_eq!(
            compute_state(&c),
            Err(EngineError::unknown_gate("HADAMARD"))
        );
    }
}
