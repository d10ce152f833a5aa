//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for layout, truncation and colour blending.

use ratatui::layout::Rect;
use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for loading animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame
const SPINNER_SPEED: u64 = 4;

pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[((tick_count / SPINNER_SPEED) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width x height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to `max_width` display columns, adding an ellipsis if cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Mix `tint` into an RGB colour. `amount` is clamped to `0..=1`.
pub fn blend(rgb: [u8; 3], tint: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let Color::Rgb(tr, tg, tb) = tint else {
        return Color::Rgb(rgb[0], rgb[1], rgb[2]);
    };
    let mix = |base: u8, over: u8| -> u8 {
        (f32::from(base) * (1.0 - amount) + f32::from(over) * amount).round() as u8
    };
    Color::Rgb(mix(rgb[0], tr), mix(rgb[1], tg), mix(rgb[2], tb))
}
