//! Panic hook that gives the terminal back before the message is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Install this before creating the `TerminalManager` (and after
/// `color_eyre::install`, so its report is the one printed).
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
