//! Cosmetic color palettes.
//!
//! Palettes carry no simulation meaning. They live in the core only so the
//! controller can hand the host a complete description of what to draw.

use life_types::{Rgb, ThemeId};

/// Colors for one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Which palette this is.
    pub id: ThemeId,
    /// Canvas fill behind the grid.
    pub background: Rgb,
    /// Lines separating cells.
    pub grid_line: Rgb,
    /// Fill for live cells.
    pub live_cell: Rgb,
}

impl Theme {
    /// White cells on a near-black canvas.
    pub const fn dark() -> Self {
        Self {
            id: ThemeId::Dark,
            background: Rgb::gray(15),
            grid_line: Rgb::gray(31),
            live_cell: Rgb::WHITE,
        }
    }

    /// Black cells on a white canvas.
    pub const fn light() -> Self {
        Self {
            id: ThemeId::Light,
            background: Rgb::WHITE,
            grid_line: Rgb::gray(127),
            live_cell: Rgb::BLACK,
        }
    }

    /// Palette for the given selection.
    pub const fn for_id(id: ThemeId) -> Self {
        match id {
            ThemeId::Dark => Self::dark(),
            ThemeId::Light => Self::light(),
        }
    }
}
