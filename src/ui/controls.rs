//! Header and bottom keybind bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::truncate_string;
use super::theme::{
    direction_color, COLOR_ACCENT, COLOR_DIM, COLOR_DISLIKE, COLOR_HEADER, COLOR_LIKE,
    COLOR_SUPER, COLOR_WARNING,
};
use crate::session::{SessionPhase, SessionView};

/// Title, progress and super-like budget.
pub fn render_header(frame: &mut Frame, area: Rect, view: &SessionView, last_error: Option<&str>) {
    let mut spans = vec![Span::styled(
        " pawswipe ",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];

    if !view.phase.is_closed() {
        let shown = (view.position + 1).min(view.target);
        spans.push(Span::styled(
            format!(" cat {} of {} ", shown, view.target),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let stars = "★".repeat(view.super_like_budget);
    spans.push(Span::styled(" super likes ", Style::default().fg(COLOR_DIM)));
    spans.push(Span::styled(
        if stars.is_empty() { "none".to_string() } else { stars },
        Style::default().fg(COLOR_SUPER),
    ));

    if let Some(err) = last_error {
        let room = (area.width as usize).saturating_sub(Line::from(spans.clone()).width() + 3);
        if room > 8 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                truncate_string(err, room),
                Style::default().fg(COLOR_WARNING),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keybind hints for the current phase.
pub fn build_keybinds(view: &SessionView) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(COLOR_ACCENT));
    let dim = |t: &'static str| Span::styled(t, Style::default().fg(COLOR_DIM));

    if view.phase == SessionPhase::Finished {
        return Line::from(vec![
            key("[↑/↓]"),
            dim(" scroll  "),
            key("[r]"),
            dim(" restart  "),
            key("[u]"),
            dim(" undo  "),
            key("[q]"),
            dim(" quit"),
        ]);
    }

    if view.animation_locked {
        return Line::from(vec![Span::styled(
            "super liking…",
            Style::default().fg(COLOR_SUPER),
        )]);
    }

    let mut spans = vec![
        Span::styled("[←/h]", Style::default().fg(COLOR_DISLIKE)),
        dim(" nope  "),
        Span::styled("[↑/s]", Style::default().fg(COLOR_SUPER)),
        dim(" super  "),
        Span::styled("[→/l]", Style::default().fg(COLOR_LIKE)),
        dim(" like  "),
        key("[u]"),
        dim(" undo  "),
        key("[q]"),
        dim(" quit"),
    ];
    if let Some(direction) = view.overlay_direction {
        spans.push(Span::styled(
            format!("  {:>3.0}%", view.overlay_intensity * 100.0),
            Style::default().fg(direction_color(direction)),
        ));
    }
    Line::from(spans)
}

pub fn render_controls(frame: &mut Frame, area: Rect, view: &SessionView) {
    frame.render_widget(Paragraph::new(build_keybinds(view)), area);
}
