//! Decisions and ratings.

use serde::Serialize;
use std::fmt;

use super::item::Item;

/// Outcome of a single swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Liked,
    Disliked,
    Superliked,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Liked => "liked",
            Decision::Disliked => "disliked",
            Decision::Superliked => "superliked",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a forward swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn decision(&self) -> Decision {
        match self {
            SwipeDirection::Right => Decision::Liked,
            SwipeDirection::Left => Decision::Disliked,
        }
    }
}

/// An item paired with the decision made on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    #[serde(flatten)]
    pub item: Item,
    pub decision: Decision,
}

impl Rating {
    pub fn new(item: Item, decision: Decision) -> Self {
        Self { item, decision }
    }
}
