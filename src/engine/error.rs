use std::fmt;

/// Failures the state engine can surface to a caller. Everything else in the
/// engine is total for well-formed inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A placement referenced a gate id that is not in the catalog.
    UnknownGate(String),
    /// A qubit/position/length fell outside the configured bounds.
    DimensionMismatch {
        what: &'static str,
        got: usize,
        bound: usize,
    },
    /// A state vector whose norm is not 1 (carries the offending norm).
    NotNormalized(f64),
    /// A matrix that fails the U†U = I check (carries the max deviation).
    NotUnitary(f64),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownGate(id) => {
                write!(f, "unknown gate id {id:?} (catalog: H, X, Y, Z, CNOT)")
            }
            EngineError::DimensionMismatch { what, got, bound } => {
                write!(f, "dimension mismatch: {what} {got} out of range (bound {bound})")
            }
            EngineError::NotNormalized(norm) => {
                write!(f, "state not normalized (||ψ|| = {norm})")
            }
            EngineError::NotUnitary(diff) => {
                write!(f, "operator not unitary (‖U†U−I‖∞ = {diff:e})")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    pub fn unknown_gate(id: &str) -> Self {
        EngineError::UnknownGate(id.to_string())
    }
    pub fn dim(what: &'static str, got: usize, bound: usize) -> Self {
        EngineError::DimensionMismatch { what, got, bound }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn unknown_gate_message() {
        let err = EngineError::unknown_gate("Q");
        assert_eq!(format!("{}", err), "unknown gate id \"Q\" (catalog: H, X, Y, Z, CNOT)");
    }
    #[test] fn dimension_message() {
        let err = EngineError::dim("qubit index", 3, 2);
        assert_eq!(format!("{}", err), "dimension mismatch: qubit index 3 out of range (bound 2)");
    }
    #[test] fn not_normalized_message() {
        let err = EngineError::NotNormalized(2.0);
        assert_eq!(format!("{}", err), "state not normalized (||ψ|| = 2)");
    }
}
