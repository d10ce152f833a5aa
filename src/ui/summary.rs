//! End-of-session summary screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISLIKE, COLOR_LIKE, COLOR_SUPER};
use crate::models::{Item, Summary};

/// Lines of the summary: headline, then each non-empty group.
pub fn summary_lines(summary: &Summary) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            summary.headline(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} cats rated, {} super likes left",
                summary.total(),
                summary.super_likes_left
            ),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let groups: [(&str, &[Item], _); 3] = [
        ("Super liked", &summary.superliked, COLOR_SUPER),
        ("Liked", &summary.liked, COLOR_LIKE),
        ("Disliked", &summary.disliked, COLOR_DISLIKE),
    ];
    for (title, items, color) in groups {
        if items.is_empty() {
            continue;
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} ({})", title, items.len()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for item in items {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(color)),
                Span::raw(item.name.clone()),
                Span::styled(format!(", {}", item.age), Style::default().fg(COLOR_DIM)),
            ]));
        }
    }
    lines
}

/// Render the summary starting at line `scroll`.
///
/// Returns the offset actually used, clamped so the last line stays at the
/// bottom of the box.
pub fn render_summary(frame: &mut Frame, area: Rect, summary: &Summary, scroll: u16) -> u16 {
    let lines = summary_lines(summary);
    let visible = area.height.saturating_sub(2);
    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(visible);
    let scroll = scroll.min(max_scroll);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Your cats ");
    if max_scroll > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {}/{} ↑↓ ", scroll + visible.min(lines.len() as u16), lines.len()),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
    scroll
}
