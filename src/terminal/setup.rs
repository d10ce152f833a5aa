//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and capture the mouse.
///
/// # Errors
///
/// Returns an error if any terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter_tui_mode`] and raw mode. Never fails; errors are ignored so
/// this is safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for panics.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
