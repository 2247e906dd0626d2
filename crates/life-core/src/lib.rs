//! Simulation core for Conway's Game of Life on a bounded grid.
//!
//! The core never draws or reads input. A host owns one
//! [`SimulationController`], feeds it clock pulses and user commands, and
//! reads back the grid and status to render.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `life-config.yaml` into
//!   strongly-typed structs.
//! - [`controller`] -- Run/pause state machine, tick cadence, editing.
//! - [`error`] -- Error types for construction and cell addressing.
//! - [`grid`] -- The cell matrix, neighbor counting, and the step rule.
//! - [`pattern`] -- Built-in seed patterns.
//! - [`theme`] -- Cosmetic color palettes.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod theme;

// Re-export primary types at crate root.
pub use config::{ConfigError, LifeConfig, MIN_CELL_SIZE};
pub use controller::{SimulationController, TickOutcome};
pub use error::LifeError;
pub use grid::LifeGrid;
pub use pattern::Pattern;
pub use theme::Theme;
