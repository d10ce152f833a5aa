//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` switches the terminal into raw mode with mouse capture
//! (drags on the card are the swipe gesture) and restores it on drop. The
//! panic hook from [`setup_panic_hook`] covers the paths where drop never runs.
//!
//! # Example
//!
//! ```no_run
//! use pawswipe::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal when dropped, once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Leave TUI mode. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, with mouse capture.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let guard = TerminalGuard::new();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped, e.g. to print
    /// to stdout afterwards.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
