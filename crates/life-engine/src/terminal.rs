//! Terminal session setup and teardown.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use tracing::warn;

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture. Dropping the guard restores the original terminal state, even
/// when the render loop exits with an error.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter the interactive terminal session.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal refuses any mode change. Modes
    /// already applied are rolled back first.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen) {
            warn!(error = %e, "failed to restore terminal screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to leave raw mode");
        }
        let _ = stdout.flush();
    }
}
