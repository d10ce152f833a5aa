//! AppMessage enum for async communication within the application.

use crate::deck::DeckEvent;
use crate::imaging::Thumbnail;
use crate::models::ItemId;

/// Messages sent by background tasks back to the event loop.
///
/// Every message carries the epoch of the session that spawned the task.
/// Messages from an older epoch are dropped on arrival.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Progress from the deck loader
    Deck { epoch: u64, event: DeckEvent },
    /// A super-like settle delay ran out
    SettleElapsed { epoch: u64, ticket: u64 },
    /// An item image was decoded; `None` if decoding failed
    ImageDecoded {
        epoch: u64,
        id: ItemId,
        thumbnail: Option<Thumbnail>,
    },
}

impl AppMessage {
    pub fn epoch(&self) -> u64 {
        match self {
            AppMessage::Deck { epoch, .. }
            | AppMessage::SettleElapsed { epoch, .. }
            | AppMessage::ImageDecoded { epoch, .. } => *epoch,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::Deck {
                event: DeckEvent::Loaded(_),
                ..
            } => "deck-loaded",
            AppMessage::Deck {
                event: DeckEvent::Skipped(_),
                ..
            } => "deck-skipped",
            AppMessage::Deck {
                event: DeckEvent::Finished { .. },
                ..
            } => "deck-finished",
            AppMessage::SettleElapsed { .. } => "settle-elapsed",
            AppMessage::ImageDecoded { .. } => "image-decoded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_and_kind() {
        let msg = AppMessage::SettleElapsed {
            epoch: 3,
            ticket: 0,
        };
        assert_eq!(msg.epoch(), 3);
        assert_eq!(msg.kind(), "settle-elapsed");

        let msg = AppMessage::Deck {
            epoch: 1,
            event: DeckEvent::Finished { loaded: 2 },
        };
        assert_eq!(msg.epoch(), 1);
        assert_eq!(msg.kind(), "deck-finished");
    }
}
