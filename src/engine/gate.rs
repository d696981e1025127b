//! Gate catalog and the standard 2×2 unitaries.
//!
//! The dashboard palette ships five gates. Ids are the strings the UI puts
//! into circuit snapshots; lookups against anything else are an error, never
//! a silent identity.

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::engine::error::EngineError;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GateKind {
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    Cnot,
}

/// Static catalog entry: id + display symbol + unitary action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GateDef {
    pub id: &'static str,
    pub symbol: &'static str,
    pub kind: GateKind,
}

static CATALOG: Lazy<BTreeMap<&'static str, GateDef>> = Lazy::new(|| {
    let defs = [
        GateDef { id: "H", symbol: "H", kind: GateKind::Hadamard },
        GateDef { id: "X", symbol: "X", kind: GateKind::PauliX },
        GateDef { id: "Y", symbol: "Y", kind: GateKind::PauliY },
        GateDef { id: "Z", symbol: "Z", kind: GateKind::PauliZ },
        GateDef { id: "CNOT", symbol: "●", kind: GateKind::Cnot },
    ];
    defs.iter().map(|d| (d.id, *d)).collect()
});

pub fn lookup(id: &str) -> Result<&'static GateDef, EngineError> {
    CATALOG.get(id).ok_or_else(|| EngineError::unknown_gate(id))
}

pub fn catalog() -> impl Iterator<Item = &'static GateDef> {
    CATALOG.values()
}

pub fn i2() -> DMatrix<C64> {
    DMatrix::identity(2, 2)
}
pub fn x() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
}
pub fn y() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
}
pub fn z() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
}
pub fn h() -> DMatrix<C64> {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DMatrix::from_row_slice(2, 2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)])
}

impl GateKind {
    /// 2×2 matrix for single-qubit kinds; `None` for CNOT, which is built
    /// directly at full dimension by `ops::cnot_n`.
    pub fn single_qubit_matrix(self) -> Option<DMatrix<C64>> {
        match self {
            GateKind::Hadamard => Some(h()),
            GateKind::PauliX => Some(x()),
            GateKind::PauliY => Some(y()),
            GateKind::PauliZ => Some(z()),
            GateKind::Cnot => None,
        }
    }
}
