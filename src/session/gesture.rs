//! Translating drags into decisions.

use crate::config::SessionConfig;
use crate::models::SwipeDirection;

/// Tracks a horizontal drag on the current card.
///
/// While dragging, the offset drives the overlay tint. A decision is only
/// produced on release, and only past the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    offset: f32,
    threshold: f32,
    overlay_max: f32,
}

impl DragGesture {
    pub fn new(threshold: f32, overlay_max: f32) -> Self {
        Self {
            offset: 0.0,
            threshold,
            overlay_max,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.swipe_threshold, config.overlay_max)
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.offset != 0.0
    }

    pub fn update(&mut self, x: f32) {
        self.offset = if x.is_finite() { x } else { 0.0 };
    }

    /// `min(|x| / overlay_max, 1)`.
    pub fn overlay_intensity(&self) -> f32 {
        if self.offset == 0.0 {
            return 0.0;
        }
        if self.overlay_max <= 0.0 {
            return 1.0;
        }
        (self.offset.abs() / self.overlay_max).min(1.0)
    }

    /// Which way the overlay leans, if at all.
    pub fn overlay_direction(&self) -> Option<SwipeDirection> {
        direction_of(self.offset)
    }

    /// End the drag at `x`. The offset always snaps back to zero.
    pub fn release(&mut self, x: f32) -> Option<SwipeDirection> {
        self.offset = 0.0;
        if !x.is_finite() || x.abs() <= self.threshold {
            return None;
        }
        direction_of(x)
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

fn direction_of(x: f32) -> Option<SwipeDirection> {
    if x > 0.0 {
        Some(SwipeDirection::Right)
    } else if x < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}
