//! Configuration loading and typed config structures for the Life simulation.
//!
//! The canonical configuration lives in `life-config.yaml` at the project
//! root. Every section and field has a default, so a missing or empty file
//! yields the reference setup: a 640x480 canvas, 10-pixel cells, a 60 Hz
//! host clock stepping 8 generations per second, and the dark palette.

use std::path::Path;
use std::time::Duration;

use life_types::ThemeId;
use serde::Deserialize;

use crate::error::LifeError;

/// Smallest cell edge, in canvas pixels, that a grid may be built with.
pub const MIN_CELL_SIZE: usize = 5;

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
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `life-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LifeConfig {
    /// Fixed canvas dimensions.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Grid resolution and initial contents.
    #[serde(default)]
    pub grid: GridConfig,

    /// Host clock rate and generation cadence.
    #[serde(default)]
    pub clock: ClockConfig,

    /// Initial cosmetic palette.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LifeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `LIFE_LOG` environment variable, when set, overrides
    /// `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Canvas dimensions in pixels. The grid is carved out of this area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_canvas_width")]
    pub width: usize,

    /// Canvas height in pixels.
    #[serde(default = "default_canvas_height")]
    pub height: usize,
}

impl CanvasConfig {
    /// Widest grid any valid cell size can produce on this canvas.
    pub const fn max_columns(&self) -> usize {
        self.width / MIN_CELL_SIZE
    }

    /// Tallest grid any valid cell size can produce on this canvas.
    pub const fn max_rows(&self) -> usize {
        self.height / MIN_CELL_SIZE
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Grid resolution and optional starting pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Cell edge in pixels. Must be at least [`MIN_CELL_SIZE`].
    #[serde(default = "default_cell_size")]
    pub cell_size: usize,

    /// Name of a built-in pattern to place at the grid center on startup.
    #[serde(default)]
    pub initial_pattern: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            initial_pattern: None,
        }
    }
}

/// Host clock rate and the derived generation cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Pulses per second delivered by the host loop.
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,

    /// Target generations per second while running.
    #[serde(default = "default_generations_per_second")]
    pub generations_per_second: u32,
}

impl ClockConfig {
    /// Number of clock pulses that make up one generation.
    ///
    /// Integer division of the two rates; any remainder is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if
    /// `generations_per_second` is zero or exceeds `ticks_per_second`, or
    /// if the pulse rate is unusable (see [`pulse_period`](Self::pulse_period)).
    pub fn ticks_per_generation(&self) -> Result<u32, LifeError> {
        self.pulse_period()?;
        let cadence = self
            .ticks_per_second
            .checked_div(self.generations_per_second)
            .ok_or_else(|| LifeError::invalid("generations_per_second must be at least 1"))?;
        if cadence == 0 {
            return Err(LifeError::invalid(format!(
                "generations_per_second ({}) must not exceed ticks_per_second ({})",
                self.generations_per_second, self.ticks_per_second
            )));
        }
        Ok(cadence)
    }

    /// Wall-clock time between two host pulses.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if `ticks_per_second` is
    /// zero or so large that the period rounds down to zero nanoseconds.
    pub fn pulse_period(&self) -> Result<Duration, LifeError> {
        pulse_period(self.ticks_per_second)
    }
}

/// Wall-clock time between pulses of a clock running at `ticks_per_second`.
///
/// # Errors
///
/// Returns [`LifeError::InvalidConfiguration`] if the period is not a
/// positive duration.
pub fn pulse_period(ticks_per_second: u32) -> Result<Duration, LifeError> {
    Duration::from_secs(1)
        .checked_div(ticks_per_second)
        .filter(|period| !period.is_zero())
        .ok_or_else(|| {
            LifeError::invalid(format!(
                "ticks_per_second must be between 1 and 1000000000, got {ticks_per_second}"
            ))
        })
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: default_ticks_per_second(),
            generations_per_second: default_generations_per_second(),
        }
    }
}

/// Initial palette selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    /// Palette selected at startup.
    #[serde(default)]
    pub initial: ThemeId,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// File receiving log output. The terminal is taken by the renderer.
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl LoggingConfig {
    /// Override the log level with `LIFE_LOG` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LIFE_LOG") {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_canvas_width() -> usize {
    640
}

const fn default_canvas_height() -> usize {
    480
}

const fn default_cell_size() -> usize {
    10
}

const fn default_ticks_per_second() -> u32 {
    60
}

const fn default_generations_per_second() -> u32 {
    8
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_log_file() -> String {
    "life-engine.log".to_owned()
}
