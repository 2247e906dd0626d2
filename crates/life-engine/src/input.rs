//! Translation of terminal events into simulation commands.
//!
//! The grid is drawn one character per cell starting at the top-left
//! corner of the terminal, so a mouse position maps directly to a cell.
//! Presses outside the drawn grid (the status panel) are ignored.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A user request the host applies to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Flip between paused and running.
    ToggleRun,
    /// Clear the grid and generation count.
    Reset,
    /// Switch palettes.
    ToggleTheme,
    /// Flip one cell.
    Edit {
        /// Target column.
        col: usize,
        /// Target row.
        row: usize,
    },
    /// Leave the application.
    Quit,
}

/// Map a terminal event to a command, given the active grid extent.
pub fn command_for(event: &Event, columns: usize, rows: usize) -> Option<HostCommand> {
    match event {
        Event::Key(key) => key_command(key),
        Event::Mouse(mouse) => mouse_command(mouse, columns, rows),
        _ => None,
    }
}

fn key_command(key: &KeyEvent) -> Option<HostCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(HostCommand::ToggleRun),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostCommand::Quit)
        }
        KeyCode::Char('r' | 'R') => Some(HostCommand::Reset),
        KeyCode::Char('t' | 'T') => Some(HostCommand::ToggleTheme),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(HostCommand::Quit),
        _ => None,
    }
}

fn mouse_command(mouse: &MouseEvent, columns: usize, rows: usize) -> Option<HostCommand> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let col = usize::from(mouse.column);
    let row = usize::from(mouse.row);
    (col < columns && row < rows).then_some(HostCommand::Edit { col, row })
}
