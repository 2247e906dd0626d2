//! Terminal rendering of the grid and the status overlay.
//!
//! One character per cell: live cells are a full block in the palette's
//! cell color, dead cells a dot in its grid-line color. The status panel
//! sits to the right of the grid. Anything past the terminal edge is
//! clipped, so the terminal needs [`PANEL_GAP`] plus the widest status line
//! beyond the grid's column count.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use life_core::SimulationController;
use life_types::{Rgb, RunState, SimulationStatus, ThemeId};

/// Glyph for a live cell.
const LIVE_GLYPH: char = '█';

/// Glyph for a dead cell.
const DEAD_GLYPH: char = '·';

/// Blank columns between the grid and the status panel.
pub const PANEL_GAP: u16 = 2;

/// Host-side clock measurements shown in the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReadout {
    /// Measured pulses per second.
    pub actual_tps: f64,
    /// Configured pulses per second.
    pub target_tps: u32,
}

/// Draw one full frame.
///
/// `viewport` is the terminal size as `(columns, rows)`.
pub fn draw<W: Write>(
    out: &mut W,
    controller: &SimulationController,
    clock: ClockReadout,
    viewport: (u16, u16),
) -> io::Result<()> {
    let theme = controller.theme();
    let (view_cols, view_rows) = viewport;
    let background = color(theme.background);

    queue!(out, SetBackgroundColor(background), Clear(ClearType::All))?;

    let grid = controller.grid();
    for (y, cells) in (0..view_rows).zip(grid.iter_rows()) {
        queue!(out, MoveTo(0, y))?;
        let mut line = String::with_capacity(cells.len());
        let mut run_alive = None;
        for (_, &alive) in (0..view_cols).zip(cells) {
            if run_alive != Some(alive) {
                flush_run(out, &mut line, run_alive, theme.live_cell, theme.grid_line)?;
                run_alive = Some(alive);
            }
            line.push(if alive { LIVE_GLYPH } else { DEAD_GLYPH });
        }
        flush_run(out, &mut line, run_alive, theme.live_cell, theme.grid_line)?;
    }

    let panel_x = u16::try_from(grid.columns())
        .unwrap_or(u16::MAX)
        .saturating_add(PANEL_GAP);
    if panel_x < view_cols {
        queue!(out, SetForegroundColor(color(theme.live_cell)))?;
        for (y, text) in (0..view_rows).zip(status_lines(&controller.status(), clock)) {
            queue!(out, MoveTo(panel_x, y), Print(text))?;
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}

/// Overlay text, one entry per line.
pub fn status_lines(status: &SimulationStatus, clock: ClockReadout) -> Vec<String> {
    vec![
        format!("TPS: {:.2} ({})", clock.actual_tps, clock.target_tps),
        format!("TPG: {}", status.ticks_per_generation),
        format!("Generation: {}", status.generation),
        format!("Live cells: {}", status.live_cells),
        format!("Game State: {}", run_state_label(status.run_state)),
        format!("Theme: {}", theme_label(status.theme)),
        String::new(),
        "Press R to restart".to_owned(),
        "Press Space to pause".to_owned(),
        "Press T to switch themes".to_owned(),
        "Click a cell to toggle it".to_owned(),
        "Press Q to quit".to_owned(),
    ]
}

const fn run_state_label(state: RunState) -> &'static str {
    match state {
        RunState::Paused => "Paused",
        RunState::Running => "Running",
    }
}

const fn theme_label(theme: ThemeId) -> &'static str {
    match theme {
        ThemeId::Dark => "Dark",
        ThemeId::Light => "Light",
    }
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Emit a run of same-state cells in one write.
fn flush_run<W: Write>(
    out: &mut W,
    line: &mut String,
    alive: Option<bool>,
    live: Rgb,
    dead: Rgb,
) -> io::Result<()> {
    let Some(alive) = alive else {
        return Ok(());
    };
    if line.is_empty() {
        return Ok(());
    }
    let fg = if alive { live } else { dead };
    queue!(out, SetForegroundColor(color(fg)), Print(line.as_str()))?;
    line.clear();
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use life_core::{LifeGrid, SimulationController};

    fn controller() -> SimulationController {
        let grid = LifeGrid::new(10, 50, 30).unwrap();
        SimulationController::from_parts(grid, 2, ThemeId::Dark).unwrap()
    }

    fn readout() -> ClockReadout {
        ClockReadout {
            actual_tps: 59.5,
            target_tps: 60,
        }
    }

    #[test]
    fn shipped_config_fits_standard_terminal() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("life-config.yaml");
        let config = life_core::LifeConfig::from_file(&path).unwrap();
        let ctl = SimulationController::new(&config).unwrap();
        let lines = status_lines(&ctl.status(), readout());
        let panel_width = lines.iter().map(String::len).max().unwrap();

        let width = ctl
            .grid()
            .columns()
            .saturating_add(usize::from(PANEL_GAP))
            .saturating_add(panel_width);
        let height = ctl.grid().rows().max(lines.len());
        assert!(width <= 80, "needs {width} columns");
        assert!(height <= 24, "needs {height} rows");
    }

    #[test]
    fn status_lines_describe_controller() {
        let mut ctl = controller();
        ctl.toggle_run_state();
        ctl.toggle_theme();
        let lines = status_lines(&ctl.status(), readout());
        assert_eq!(lines[0], "TPS: 59.50 (60)");
        assert_eq!(lines[1], "TPG: 2");
        assert_eq!(lines[2], "Generation: 0");
        assert!(lines.contains(&"Game State: Running".to_owned()));
        assert!(lines.contains(&"Theme: Light".to_owned()));
    }

    #[test]
    fn frame_contains_cells_and_overlay() {
        let mut ctl = controller();
        ctl.edit_cell(1, 0).unwrap();
        let mut buf = Vec::new();
        draw(&mut buf, &ctl, readout(), (80, 24)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(LIVE_GLYPH));
        assert!(text.contains(DEAD_GLYPH));
        assert!(text.contains("Generation: 0"));
        assert!(text.contains("Game State: Paused"));
    }

    #[test]
    fn narrow_viewport_hides_overlay() {
        let ctl = controller();
        let mut buf = Vec::new();
        draw(&mut buf, &ctl, readout(), (5, 3)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("Generation"));
    }
}
