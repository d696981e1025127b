//! Pure computation core: circuit grids in, amplitudes/probabilities/Bloch
//! coordinates out. No I/O, no globals; every call is reentrant-safe.

pub mod bloch;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod ops;
pub mod particles;
pub mod simulate;
pub mod state;

pub use bloch::{bloch, BlochCoordinates, QubitState};
pub use circuit::{Circuit, GatePlacement};
pub use error::EngineError;
pub use simulate::{compute_state, probabilities};
pub use state::StateVector;
