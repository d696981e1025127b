use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Dashboard-side defaults. The engine itself is size-generic; these only
/// shape what the CLI builds when a snapshot doesn't say otherwise.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub qubits: usize,
    pub positions: usize,
    pub shots: usize,
    pub tunnel_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { qubits: 2, positions: 4, shots: 1024, tunnel_probability: 0.15 }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.quantaboard/config.toml (same shape on Windows under the profile dir)
    dirs_next::home_dir().map(|h| h.join(".quantaboard").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Missing file is fine (defaults); a present-but-malformed file is not.
pub fn load(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    if !path.exists() {
        return Ok(SimConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "shots = 64\n").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.shots, 64);
        assert_eq!(cfg.qubits, 2);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "qubitz = 3\n").unwrap();
        assert!(load(Some(&path)).is_err());
    }
}
