//! Configuration file loading.
//!
//! Settings come from `checkers.toml` in the working directory. A missing file
//! yields the defaults, and command-line flags are applied on top.

use checkers_engine::{Evaluator, Material, Positional, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Deepest search the CLI accepts.
pub const MAX_DEPTH: u32 = 12;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Search depth outside `1..=MAX_DEPTH`.
    #[error("Invalid search depth {0}: expected 1 to 12")]
    InvalidDepth(u32),
}

/// Which static evaluator the search uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    /// One point per man, three per king.
    #[default]
    Material,
    /// Material plus centre control and advancement.
    Positional,
}

impl EvaluatorKind {
    /// Returns the evaluator this kind names.
    pub fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            EvaluatorKind::Material => &Material,
            EvaluatorKind::Positional => &Positional,
        }
    }
}

/// Settings for the `checkers` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckersConfig {
    /// Search depth in plies.
    pub depth: u32,
    /// Prune the search with alpha-beta.
    pub alpha_beta: bool,
    /// Static evaluator.
    pub evaluator: EvaluatorKind,
    /// Print the node count after each computer move.
    pub show_nodes: bool,
}

impl Default for CheckersConfig {
    fn default() -> Self {
        let search = SearchConfig::default();
        CheckersConfig {
            depth: search.depth,
            alpha_beta: search.alpha_beta,
            evaluator: EvaluatorKind::default(),
            show_nodes: true,
        }
    }
}

impl CheckersConfig {
    /// Loads the configuration from `path`, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it contains invalid TOML, or
    /// [`ConfigError::InvalidDepth`] if the depth is out of range.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the configuration file path used when none is given.
    pub fn config_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }

    /// Applies command-line overrides and re-validates.
    pub fn apply_overrides(
        &mut self,
        depth: Option<u32>,
        no_alpha_beta: bool,
        evaluator: Option<EvaluatorKind>,
    ) -> Result<(), ConfigError> {
        if let Some(depth) = depth {
            self.depth = depth;
        }
        if no_alpha_beta {
            self.alpha_beta = false;
        }
        if let Some(evaluator) = evaluator {
            self.evaluator = evaluator;
        }
        self.validate()
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    /// Search parameters for minimax agents.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            alpha_beta: self.alpha_beta,
        }
    }
}
