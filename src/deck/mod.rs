//! Background deck loading.

mod liveness;
mod loader;

pub use liveness::Liveness;
pub use loader::{spawn_deck_loader, DeckEvent, DeckLoader};
