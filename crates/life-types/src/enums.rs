//! Enumeration types for the Life simulation.
//!
//! Both enums are closed sets with a single flip operation. Formatting for
//! display belongs to the host, so neither type implements `Display`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Run state
// ---------------------------------------------------------------------------

/// Whether the simulation clock is advancing generations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Clock pulses are ignored; the grid only changes through edits.
    #[default]
    Paused,
    /// Clock pulses accumulate toward the next generation step.
    Running,
}

impl RunState {
    /// Return the opposite state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Running,
            Self::Running => Self::Paused,
        }
    }

    /// Return `true` if the state is [`RunState::Running`].
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Selects one of the two cosmetic color palettes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    /// Light cells on a near-black background.
    #[default]
    Dark,
    /// Dark cells on a white background.
    Light,
}

impl ThemeId {
    /// Return the other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}
