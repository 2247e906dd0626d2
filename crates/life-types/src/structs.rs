//! Plain data structs shared with renderers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{RunState, ThemeId};

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::gray(255);
    /// Pure black.
    pub const BLACK: Self = Self::gray(0);

    /// Build a neutral gray with all channels set to `y`.
    pub const fn gray(y: u8) -> Self {
        Self { r: y, g: y, b: y }
    }
}

/// Read-only snapshot of everything a host needs to draw the status overlay.
///
/// Cell contents are not included; hosts read those row by row from the
/// grid itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationStatus {
    /// Active grid width in cells.
    pub columns: u32,
    /// Active grid height in cells.
    pub rows: u32,
    /// Edge length of one cell in canvas pixels.
    pub cell_size: u32,
    /// Current run state.
    pub run_state: RunState,
    /// Generations applied since the last reset.
    #[ts(type = "number")]
    pub generation: u64,
    /// Clock pulses per generation while running.
    pub ticks_per_generation: u32,
    /// Selected cosmetic palette.
    pub theme: ThemeId,
    /// Number of live cells in the active grid.
    pub live_cells: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn gray_sets_all_channels() {
        assert_eq!(Rgb::gray(31), Rgb { r: 31, g: 31, b: 31 });
        assert_eq!(Rgb::WHITE, Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn status_round_trips_through_json() {
        let status = SimulationStatus {
            columns: 64,
            rows: 48,
            cell_size: 10,
            run_state: RunState::Running,
            generation: 12,
            ticks_per_generation: 7,
            theme: ThemeId::Light,
            live_cells: 5,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"run_state\":\"running\""));
        let back: SimulationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
