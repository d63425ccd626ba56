//! User configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::confetti::DEFAULT_PALETTE;
use crate::session::SessionParams;

/// User settings for the raffle widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// Candidate names for the draw.
    pub names: Vec<String>,
    /// How many winners each spin reveals.
    pub winner_count: usize,
    /// Delay between the spin trigger and the reveal, in milliseconds.
    pub spin_duration_ms: u64,
    /// Confetti ensemble size.
    pub confetti_count: usize,
    /// How long the ensemble stays on screen, in milliseconds.
    pub confetti_lifetime_ms: u64,
    /// Confetti colors as hex strings.
    pub palette: Vec<String>,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            names: ["Ashutosh", "Suresh", "Ezra", "Omprakash", "Afsal"]
                .iter()
                .map(|n| n.to_string())
                .collect(),
            winner_count: 2,
            spin_duration_ms: 3_000,
            confetti_count: 50,
            confetti_lifetime_ms: 5_000,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl RaffleConfig {
    /// Load settings from the default location. A missing file yields
    /// defaults; an unreadable or unparsable file is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("cannot parse config {}", path.display()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "raffle", "raffle") {
            Ok(proj_dirs.config_dir().join("config.json"))
        } else {
            Ok(PathBuf::from(".raffle-config.json"))
        }
    }

    /// Sequencer parameters derived from these settings.
    pub fn session_params(&self) -> SessionParams {
        SessionParams {
            winner_count: self.winner_count,
            spin_duration_ms: self.spin_duration_ms,
            confetti_count: self.confetti_count,
            confetti_lifetime_ms: self.confetti_lifetime_ms,
            palette: self.palette.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let config = RaffleConfig::default();
        assert_eq!(config.names.len(), 5);
        assert_eq!(config.winner_count, 2);
        assert_eq!(config.spin_duration_ms, 3_000);
        assert_eq!(config.confetti_count, 50);
        assert_eq!(config.confetti_lifetime_ms, 5_000);
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = RaffleConfig::default();
        config.winner_count = 3;
        config.names.push("Stuti".to_string());
        config.save_to(&path).unwrap();

        let loaded = RaffleConfig::load_from(&path).unwrap();
        assert_eq!(loaded.winner_count, 3);
        assert_eq!(loaded.names.last().unwrap(), "Stuti");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RaffleConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.winner_count, RaffleConfig::default().winner_count);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(RaffleConfig::load_from(&path).is_err());
    }
}
