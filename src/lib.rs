//! Quantaboard state engine: the computational core behind the dashboard's
//! circuit builder, Bloch sphere, and background particle canvas. The UI
//! layer (tables, charts, REST glue) lives elsewhere; this crate only takes
//! circuit snapshots in and hands amplitudes/probabilities/coordinates out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod io;
