//! The qubits × positions placement grid the dashboard edits.
//!
//! Cells hold at most one gate id. The grid is plain data: the engine never
//! mutates it, the UI owns its lifecycle (click to place, click to remove,
//! reset to clear). JSON form matches the dashboard snapshot payload:
//! `{"qubits":2,"positions":4,"placements":[{"qubit":0,"position":0,"gate":"H"}]}`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::engine::error::EngineError;

/// One gate instance bound to a wire and a column, as serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePlacement {
    pub qubit: usize,
    pub position: usize,
    pub gate: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit {
    qubits: usize,
    positions: usize,
    cells: Vec<Option<String>>,
}

impl Circuit {
    /// Empty grid. Both dimensions must be nonzero.
    pub fn new(qubits: usize, positions: usize) -> Self {
        assert!(qubits > 0 && positions > 0, "circuit grid must be nonzero");
        Self { qubits, positions, cells: vec![None; qubits * positions] }
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    fn index(&self, qubit: usize, position: usize) -> Result<usize, EngineError> {
        if qubit >= self.qubits {
            return Err(EngineError::dim("qubit index", qubit, self.qubits));
        }
        if position >= self.positions {
            return Err(EngineError::dim("position index", position, self.positions));
        }
        Ok(qubit * self.positions + position)
    }

    /// Drop a gate onto a cell; an occupied cell is replaced (UI behavior)
    /// and the previous occupant is returned.
    pub fn place(
        &mut self,
        qubit: usize,
        position: usize,
        gate_id: &str,
    ) -> Result<Option<String>, EngineError> {
        let idx = self.index(qubit, position)?;
        Ok(self.cells[idx].replace(gate_id.to_string()))
    }

    /// Clear one cell; `Ok(false)` when it was already empty.
    pub fn remove(&mut self, qubit: usize, position: usize) -> Result<bool, EngineError> {
        let idx = self.index(qubit, position)?;
        Ok(self.cells[idx].take().is_some())
    }

    pub fn get(&self, qubit: usize, position: usize) -> Result<Option<&str>, EngineError> {
        let idx = self.index(qubit, position)?;
        Ok(self.cells[idx].as_deref())
    }

    /// Reset to an empty grid of the same shape.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Occupied cells in application order: position-major, then wire order
    /// within a column. This IS the engine's gate-application order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        (0..self.positions).flat_map(move |position| {
            (0..self.qubits).filter_map(move |qubit| {
                self.cells[qubit * self.positions + position]
                    .as_deref()
                    .map(|gate| (qubit, position, gate))
            })
        })
    }
}

impl Serialize for Circuit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = CircuitRepr {
            qubits: self.qubits,
            positions: self.positions,
            placements: self
                .placements()
                .map(|(qubit, position, gate)| GatePlacement {
                    qubit,
                    position,
                    gate: gate.to_string(),
                })
                .collect(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Circuit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CircuitRepr::deserialize(deserializer)?;
        if repr.qubits == 0 || repr.positions == 0 {
            return Err(D::Error::custom("circuit grid must be nonzero"));
        }
        let mut circuit = Circuit::new(repr.qubits, repr.positions);
        for p in repr.placements {
            circuit
                .place(p.qubit, p.position, &p.gate)
                .map_err(D::Error::custom)?;
        }
        Ok(circuit)
    }
}

#[derive(Serialize, Deserialize)]
struct CircuitRepr {
    qubits: usize,
    positions: usize,
    #[serde(default)]
    placements: Vec<GatePlacement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_remove_roundtrip() {
        let mut c = Circuit::new(2, 4);
        assert_eq!(c.place(0, 0, "H").unwrap(), None);
        assert_eq!(c.get(0, 0).unwrap(), Some("H"));
        assert!(c.remove(0, 0).unwrap());
        assert!(!c.remove(0, 0).unwrap());
        assert!(c.is_empty());
    }

    #[test]
    fn place_replaces_occupant() {
        let mut c = Circuit::new(2, 4);
        c.place(1, 2, "X").unwrap();
        assert_eq!(c.place(1, 2, "Z").unwrap(), Some("X".to_string()));
        assert_eq!(c.get(1, 2).unwrap(), Some("Z"));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut c = Circuit::new(2, 4);
        assert!(matches!(
            c.place(2, 0, "H"),
            Err(EngineError::DimensionMismatch { what: "qubit index", .. })
        ));
        assert!(matches!(
            c.get(0, 4),
            Err(EngineError::DimensionMismatch { what: "position index", .. })
        ));
    }

    #[test]
    fn placements_iterate_position_major() {
        let mut c = Circuit::new(2, 4);
        c.place(1, 0, "X").unwrap();
        c.place(0, 0, "H").unwrap();
        c.place(0, 1, "CNOT").unwrap();
        let order: Vec<_> = c.placements().collect();
        assert_eq!(order, vec![(0, 0, "H"), (1, 0, "X"), (0, 1, "CNOT")]);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut c = Circuit::new(2, 4);
        c.place(0, 3, "Y").unwrap();
        c.place(1, 1, "Z").unwrap();
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.qubits(), 2);
    }
}
