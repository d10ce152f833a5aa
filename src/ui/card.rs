//! The swipe card: image, name line and decision overlays.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::{blend, centered_rect, inner_rect, spinner_frame, truncate_string};
use super::theme::{
    decision_color, COLOR_ACCENT, COLOR_BORDER, COLOR_CARD_BG, COLOR_DIM,
    COLOR_SUPER,
};
use crate::app::App;
use crate::imaging::Thumbnail;
use crate::models::{Decision, Item};
use crate::session::{SessionPhase, SessionView};

/// Strongest tint applied to the image by a drag overlay.
const MAX_TINT: f32 = 0.55;

/// Render the card area for an open session.
pub fn render_card(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    if let Some(exit) = &app.exit {
        let shift = (exit.progress() * f32::from(area.width) / 2.0) as u16;
        let shifted = match exit.decision {
            Decision::Disliked => Rect {
                width: area.width.saturating_sub(shift),
                ..area
            },
            _ => Rect {
                x: area.x + shift.min(area.width),
                width: area.width.saturating_sub(shift),
                ..area
            },
        };
        let label = overlay_label(exit.decision);
        draw_item(frame, shifted, app, &exit.item, Some((exit.decision, 1.0)), Some(label));
        return;
    }

    match &view.current_item {
        Some(item) if view.image_loading => {
            draw_frame(frame, area, item);
            let text = format!("{} Loading {}…", spinner_frame(app.tick_count), item.name);
            draw_centered(frame, area, Line::from(Span::styled(text, Style::default().fg(COLOR_DIM))));
        }
        Some(item) => {
            if view.animation_locked {
                draw_item(
                    frame,
                    area,
                    app,
                    item,
                    Some((Decision::Superliked, MAX_TINT)),
                    Some("★ SUPER LIKED ★"),
                );
            } else {
                let overlay = view
                    .overlay_direction
                    .map(|d| (d.decision(), view.overlay_intensity * MAX_TINT));
                let label = view
                    .overlay_direction
                    .filter(|_| view.overlay_intensity > 0.0)
                    .map(|d| overlay_label(d.decision()));
                draw_item(frame, area, app, item, overlay, label);
            }
        }
        None => render_waiting(frame, area, app, view),
    }
}

/// Skeleton card shown while there is no current item.
fn render_waiting(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, area);

    let line = if view.is_stalled() {
        let text = if view.loaded == 0 {
            "No cats could be fetched.".to_string()
        } else {
            format!("Only {} of {} cats could be fetched.", view.loaded, view.target)
        };
        Line::from(Span::styled(text, Style::default().fg(COLOR_DIM)))
    } else {
        let text = match view.phase {
            SessionPhase::CatchingUp => "Fetching the next cat…",
            _ => "Fetching cats…",
        };
        Line::from(vec![
            Span::styled(spinner_frame(app.tick_count), Style::default().fg(COLOR_ACCENT)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(COLOR_DIM)),
        ])
    };
    draw_centered(frame, area, line);
}

fn overlay_label(decision: Decision) -> &'static str {
    match decision {
        Decision::Liked => "LIKE",
        Decision::Disliked => "NOPE",
        Decision::Superliked => "★ SUPER LIKED ★",
    }
}

fn draw_frame(frame: &mut Frame, area: Rect, item: &Item) -> Rect {
    let title = format!(" {}, {} ", item.name, item.age);
    let title = truncate_string(&title, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title_bottom(Line::from(Span::styled(
            title,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(COLOR_CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    inner
}

fn draw_item(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    item: &Item,
    overlay: Option<(Decision, f32)>,
    label: Option<&str>,
) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let inner = draw_frame(frame, area, item);

    match app.thumbnails.get(&item.id) {
        Some(Some(thumbnail)) => draw_thumbnail(frame.buffer_mut(), inner, thumbnail, overlay),
        _ => draw_centered(
            frame,
            inner,
            Line::from(Span::styled("(image unavailable)", Style::default().fg(COLOR_DIM))),
        ),
    }

    if let Some(label) = label {
        let color = overlay.map_or(COLOR_ACCENT, |(d, _)| decision_color(d));
        let width = (label.chars().count() as u16 + 4).min(inner.width);
        let badge = centered_rect(inner_rect(inner, 1), width, 1);
        let badge = Rect { y: inner.y + 1, ..badge };
        frame.render_widget(Clear, badge);
        frame.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)),
            badge,
        );
    }
}

/// Paint `thumbnail` with upper half-blocks, tinted by the overlay.
fn draw_thumbnail(buf: &mut Buffer, area: Rect, thumbnail: &Thumbnail, overlay: Option<(Decision, f32)>) {
    let cols = (thumbnail.width as u16).min(area.width);
    let rows = (thumbnail.cell_rows() as u16).min(area.height);
    let target = centered_rect(area, cols, rows);
    let (tint, amount) = overlay.map_or((COLOR_SUPER, 0.0), |(d, a)| (decision_color(d), a));

    for row in 0..target.height {
        for col in 0..target.width {
            let x = u32::from(col);
            let top = thumbnail.pixel(x, u32::from(row) * 2);
            let bottom = thumbnail.pixel(x, u32::from(row) * 2 + 1);
            if let Some(cell) = buf.cell_mut((target.x + col, target.y + row)) {
                if let Some(top) = top {
                    cell.set_symbol("▀").set_fg(blend(top, tint, amount));
                }
                if let Some(bottom) = bottom {
                    cell.set_bg(blend(bottom, tint, amount));
                }
            }
        }
    }
}

fn draw_centered(frame: &mut Frame, area: Rect, line: Line<'_>) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

