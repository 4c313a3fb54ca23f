//! Engine configuration
//!
//! Selects the AI variant and its search parameters. Values come from defaults, the command
//! line, or a JSON file:
//!
//! ```json
//! { "agent": "search", "depth": 3, "neighbor_radius": 2, "seed": null }
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;
use crate::error::{GomokuError, GomokuResult};
use crate::search::NEIGHBOR_RADIUS;

/// Default search depth bound
pub const DEFAULT_DEPTH: u8 = 3;

/// Largest accepted depth bound. The tree grows by roughly the candidate count per ply.
pub const MAX_DEPTH: u8 = 6;

/// Which AI variant plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Minimax with alpha-beta pruning
    #[default]
    Search,
    /// Uniformly random empty cell
    Random,
}

/// Configuration for creating an AI engine.
///
/// # Examples
///
/// ```
/// use gomoku::{AgentKind, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_agent(AgentKind::Search)
///     .with_depth(2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// AI variant
    pub agent: AgentKind,
    /// Search depth bound in plies (search agent only)
    pub depth: u8,
    /// Chebyshev radius of the candidate filter (search agent only)
    pub neighbor_radius: u8,
    /// Random seed for reproducibility (random agent only)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            agent: AgentKind::default(),
            depth: DEFAULT_DEPTH,
            neighbor_radius: NEIGHBOR_RADIUS,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_agent(mut self, agent: AgentKind) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_radius(mut self, radius: u8) -> Self {
        self.neighbor_radius = radius;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> GomokuResult<()> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(GomokuError::InvalidConfiguration {
                message: format!("depth must be between 1 and {MAX_DEPTH}, got {}", self.depth),
            });
        }
        if !(1..=BOARD_SIZE as u8).contains(&self.neighbor_radius) {
            return Err(GomokuError::InvalidConfiguration {
                message: format!(
                    "neighbor_radius must be between 1 and {BOARD_SIZE}, got {}",
                    self.neighbor_radius
                ),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> GomokuResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> GomokuResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| GomokuError::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
