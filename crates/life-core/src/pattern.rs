//! Built-in seed patterns.
//!
//! Offsets are `(column, row)` relative to the pattern's top-left corner.

/// A named arrangement of live cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Display name, matched case-insensitively by [`find`].
    pub name: &'static str,
    /// Live cell offsets.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Width of the bounding box in cells.
    pub fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|&(col, _)| col)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Height of the bounding box in cells.
    pub fn height(&self) -> usize {
        self.cells
            .iter()
            .map(|&(_, row)| row)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Horizontal period-2 oscillator.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Smallest spaceship, travelling down and to the right.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// Period-2 oscillator made of two diagonal blocks.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (3, 3),
    ],
};

/// Every built-in pattern.
pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, GLIDER, TOAD, BEACON];

/// Look up a built-in pattern by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
}
