//! Data models for the swipe deck.

pub mod handle;
pub mod item;
pub mod rating;
pub mod summary;

pub use handle::{HandleTracker, ImageHandle};
pub use item::{Age, Item, ItemId};
pub use rating::{Decision, Rating, SwipeDirection};
pub use summary::Summary;
