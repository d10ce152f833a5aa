//! Color theme constants for the pawswipe UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::models::{Decision, SwipeDirection};

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Warnings in the status line
pub const COLOR_WARNING: Color = Color::Yellow;

// ============================================================================
// Decision Colors
// ============================================================================

/// Like - green
pub const COLOR_LIKE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Dislike - red
pub const COLOR_DISLIKE: Color = Color::Rgb(230, 72, 72);

/// Super-like - blue
pub const COLOR_SUPER: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Card background behind the image
pub const COLOR_CARD_BG: Color = Color::Rgb(10, 15, 35);

pub fn decision_color(decision: Decision) -> Color {
    match decision {
        Decision::Liked => COLOR_LIKE,
        Decision::Disliked => COLOR_DISLIKE,
        Decision::Superliked => COLOR_SUPER,
    }
}

pub fn direction_color(direction: SwipeDirection) -> Color {
    decision_color(direction.decision())
}
