use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};

use crate::error::Result;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the app runs. Raw mode and the alternate screen are
/// undone on drop, including when the event loop bails out with an error.
pub struct TerminalGuard {
    terminal: AppTerminal,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = crossterm::execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(out))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("failed to leave raw mode: {err}");
        }
        if let Err(err) = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = self.terminal.show_cursor() {
            tracing::warn!("failed to show cursor: {err}");
        }
    }
}
