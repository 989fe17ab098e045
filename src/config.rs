//! Configuration loading and typed config structures.
//!
//! Configuration is an optional YAML file. Every field has a default, so an
//! empty or missing file yields the stock 50x50 toroidal setup with a 300 ms
//! step interval.
//!
//! ```yaml
//! grid:
//!   width: 50
//!   height: 50
//!   topology: toroidal
//!   initial_density: 0.2
//! simulation:
//!   step_interval_ms: 300
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::Topology;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "LIFE_CONFIG";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "life.yaml";

/// Fastest allowed step interval.
pub const MIN_STEP_INTERVAL_MS: u32 = 10;

/// Slowest allowed step interval.
pub const MAX_STEP_INTERVAL_MS: u32 = 1000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LifeConfig {
    /// Grid shape and seeding.
    #[serde(default)]
    pub grid: GridConfig,

    /// Timer and stepping.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Metric history.
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Drawing.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl LifeConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config source: `LIFE_CONFIG` if set, else `life.yaml` in
    /// the working directory if present, else built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)) {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            None => {
                warn!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            fallback.is_file().then_some(fallback)
        })
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.width == 0 || grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                grid.width, grid.height
            )));
        }
        if !(0.0..=1.0).contains(&grid.initial_density) {
            return Err(ConfigError::Invalid(format!(
                "grid.initial_density must be within [0, 1], got {}",
                grid.initial_density
            )));
        }

        let interval = self.simulation.step_interval_ms;
        if !(MIN_STEP_INTERVAL_MS..=MAX_STEP_INTERVAL_MS).contains(&interval) {
            return Err(ConfigError::Invalid(format!(
                "simulation.step_interval_ms must be within {MIN_STEP_INTERVAL_MS}..={MAX_STEP_INTERVAL_MS}, got {interval}"
            )));
        }

        if self.metrics.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "metrics.history_capacity must be non-zero".to_owned(),
            ));
        }

        let cell_size = self.display.cell_size;
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "display.cell_size must be positive, got {cell_size}"
            )));
        }

        Ok(())
    }
}

/// Grid shape and seeding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridConfig {
    /// Width in cells.
    #[serde(default = "default_grid_side")]
    pub width: usize,

    /// Height in cells.
    #[serde(default = "default_grid_side")]
    pub height: usize,

    /// Edge policy for neighbor counting.
    #[serde(default)]
    pub topology: Topology,

    /// Chance that a cell starts alive on randomize.
    #[serde(default = "default_initial_density")]
    pub initial_density: f64,

    /// Seed for reproducible randomize; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_side(),
            height: default_grid_side(),
            topology: Topology::default(),
            initial_density: default_initial_density(),
            seed: None,
        }
    }
}

/// Timer and stepping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Milliseconds between generations while running.
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u32,

    /// Grids with at least this many cells step with rayon.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval_ms(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

/// Metric history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricsConfig {
    /// Samples kept in the rolling window.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
        }
    }
}

/// Drawing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    /// Cell edge length in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
        }
    }
}

const fn default_grid_side() -> usize {
    50
}

const fn default_initial_density() -> f64 {
    0.2
}

const fn default_step_interval_ms() -> u32 {
    300
}

const fn default_parallel_threshold() -> usize {
    40_000
}

const fn default_history_capacity() -> usize {
    1000
}

const fn default_cell_size() -> f32 {
    10.0
}
