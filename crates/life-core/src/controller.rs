//! Run/pause state machine and clock cadence for the Life simulation.
//!
//! The host calls [`SimulationController::tick`] exactly once per clock
//! pulse. While running, each pulse advances an internal counter by one;
//! when the counter reaches `ticks_per_generation` it resets to zero and
//! the grid steps once. The comparison is an equality check, so the
//! counter must never move by more than one per call.
//!
//! # State transitions
//!
//! - [`toggle_run_state`](SimulationController::toggle_run_state) flips
//!   `Paused` and `Running` and restarts the cadence.
//! - [`edit_cell`](SimulationController::edit_cell) forces `Paused`.
//! - [`reset`](SimulationController::reset) clears the grid, the generation
//!   count and the cadence, but leaves the run state alone. A running
//!   simulation keeps running on the empty grid.
//! - [`toggle_theme`](SimulationController::toggle_theme) is orthogonal to
//!   all of the above.

use life_types::{RunState, SimulationStatus, ThemeId};
use tracing::{debug, info};

use crate::config::LifeConfig;
use crate::error::LifeError;
use crate::grid::LifeGrid;
use crate::pattern;
use crate::theme::Theme;

/// What a single clock pulse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No generation was computed.
    Idle,
    /// The grid advanced to `generation`.
    Advanced {
        /// Generation count after the step.
        generation: u64,
    },
}

/// Owns the grid and every piece of state the host can change.
#[derive(Debug, Clone)]
pub struct SimulationController {
    /// The cell matrix.
    grid: LifeGrid,

    /// Whether pulses count toward the next generation.
    run_state: RunState,

    /// Pulses counted since the last generation (or toggle/reset).
    ticks: u32,

    /// Pulses per generation. Always at least 1.
    ticks_per_generation: u32,

    /// Generations applied since the last reset.
    generation: u64,

    /// Selected palette.
    theme: ThemeId,
}

impl SimulationController {
    /// Build a paused controller from configuration.
    ///
    /// If `grid.initial_pattern` is set, that pattern is placed at the
    /// center of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if the cell size is below
    /// the minimum, the cadence is not a positive integer, or the initial
    /// pattern is unknown or does not fit.
    pub fn new(config: &LifeConfig) -> Result<Self, LifeError> {
        let grid = LifeGrid::new(
            config.grid.cell_size,
            config.canvas.width,
            config.canvas.height,
        )?;
        let ticks_per_generation = config.clock.ticks_per_generation()?;
        let mut controller = Self::from_parts(grid, ticks_per_generation, config.theme.initial)?;

        if let Some(name) = config.grid.initial_pattern.as_deref() {
            controller.seed_centered(name)?;
        }

        info!(
            columns = controller.grid.columns(),
            rows = controller.grid.rows(),
            cell_size = controller.grid.cell_size(),
            ticks_per_generation,
            theme = ?controller.theme,
            "Simulation controller initialized"
        );
        Ok(controller)
    }

    /// Build a paused controller around an existing grid.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if `ticks_per_generation`
    /// is 0.
    pub fn from_parts(
        grid: LifeGrid,
        ticks_per_generation: u32,
        theme: ThemeId,
    ) -> Result<Self, LifeError> {
        if ticks_per_generation == 0 {
            return Err(LifeError::invalid("ticks_per_generation must be at least 1"));
        }
        Ok(Self {
            grid,
            run_state: RunState::Paused,
            ticks: 0,
            ticks_per_generation,
            generation: 0,
            theme,
        })
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Handle one host clock pulse.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::GenerationOverflow`] if the generation counter
    /// cannot be incremented. The grid is not stepped in that case.
    pub fn tick(&mut self) -> Result<TickOutcome, LifeError> {
        if self.run_state.is_running() {
            self.ticks = self.ticks.saturating_add(1);
        }
        if self.ticks != self.ticks_per_generation {
            return Ok(TickOutcome::Idle);
        }
        self.ticks = 0;
        self.advance_generation()
    }

    /// Flip between paused and running. Returns the new state.
    pub fn toggle_run_state(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        self.ticks = 0;
        info!(run_state = ?self.run_state, generation = self.generation, "Run state toggled");
        self.run_state
    }

    /// Flip one cell, pausing the simulation first if it is running.
    ///
    /// Returns the cell's new state. A rejected coordinate changes nothing,
    /// including the run state.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn edit_cell(&mut self, col: usize, row: usize) -> Result<bool, LifeError> {
        self.grid.is_alive(col, row)?;
        if self.run_state.is_running() {
            self.run_state = RunState::Paused;
            info!(col, row, "Edit paused the simulation");
        }
        self.grid.toggle_cell(col, row)
    }

    /// Clear the grid and zero the generation and cadence counters.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.generation = 0;
        self.ticks = 0;
        info!(run_state = ?self.run_state, "Simulation reset");
    }

    /// Switch to the other palette. Returns the new selection.
    pub fn toggle_theme(&mut self) -> ThemeId {
        self.theme = self.theme.toggled();
        info!(theme = ?self.theme, "Theme switched");
        self.theme
    }

    /// Place a built-in pattern at the center of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if no pattern has that
    /// name or it is larger than the grid.
    pub fn seed_centered(&mut self, name: &str) -> Result<(), LifeError> {
        let pattern = pattern::find(name)
            .ok_or_else(|| LifeError::invalid(format!("unknown pattern: {name}")))?;
        let (col, row) = self.grid.centered_origin(pattern).ok_or_else(|| {
            LifeError::invalid(format!(
                "pattern {} does not fit a {}x{} grid",
                pattern.name,
                self.grid.columns(),
                self.grid.rows()
            ))
        })?;
        self.grid.stamp(pattern, col, row)?;
        info!(pattern = pattern.name, col, row, "Pattern seeded");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Return the grid for rendering.
    pub const fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    /// Return the current run state.
    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Return the number of generations since the last reset.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Return the configured cadence.
    pub const fn ticks_per_generation(&self) -> u32 {
        self.ticks_per_generation
    }

    /// Return pulses counted toward the next generation.
    pub const fn tick_count(&self) -> u32 {
        self.ticks
    }

    /// Return the selected palette id.
    pub const fn theme_id(&self) -> ThemeId {
        self.theme
    }

    /// Return the selected palette.
    pub const fn theme(&self) -> Theme {
        Theme::for_id(self.theme)
    }

    /// Snapshot of the status fields for the host overlay.
    pub fn status(&self) -> SimulationStatus {
        SimulationStatus {
            columns: to_u32(self.grid.columns()),
            rows: to_u32(self.grid.rows()),
            cell_size: to_u32(self.grid.cell_size()),
            run_state: self.run_state,
            generation: self.generation,
            ticks_per_generation: self.ticks_per_generation,
            theme: self.theme,
            live_cells: to_u32(self.grid.live_count()),
        }
    }

    fn advance_generation(&mut self) -> Result<TickOutcome, LifeError> {
        let next = self
            .generation
            .checked_add(1)
            .ok_or(LifeError::GenerationOverflow)?;
        self.grid.step();
        self.generation = next;
        debug!(
            generation = next,
            live_cells = self.grid.live_count(),
            "Generation advanced"
        );
        Ok(TickOutcome::Advanced { generation: next })
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
