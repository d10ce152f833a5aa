//! UI rendering for pawswipe
//!
//! One screen with three rows:
//! - Header with progress and the super-like budget
//! - The card (or the summary once the session is finished)
//! - Keybind hints

mod card;
mod controls;
mod helpers;
mod summary;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    decision_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISLIKE, COLOR_HEADER,
    COLOR_LIKE, COLOR_SUPER,
};

pub use controls::build_keybinds;
pub use helpers::{truncate_string, SPINNER_FRAMES};
pub use summary::summary_lines;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::imaging::{THUMBNAIL_COLS, THUMBNAIL_ROWS};
use card::render_card;
use controls::{render_controls, render_header};
use summary::render_summary;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen and remember where the card went.
pub fn render(frame: &mut Frame, app: &mut App) {
    let view = app.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &view, app.last_error.as_deref());

    match &view.summary {
        Some(summary) if app.exit.is_none() => {
            app.card_area = None;
            app.summary_scroll = render_summary(frame, chunks[1], summary, app.summary_scroll);
        }
        _ => {
            let area = card_rect(chunks[1]);
            app.card_area = Some(area);
            render_card(frame, area, app, &view);
        }
    }

    render_controls(frame, chunks[2], &view);
}

/// The card is sized for a full thumbnail plus its border.
fn card_rect(area: Rect) -> Rect {
    helpers::centered_rect(area, THUMBNAIL_COLS as u16 + 2, THUMBNAIL_ROWS as u16 + 2)
}
