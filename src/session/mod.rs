//! Swipe session state machine and gesture translation.

mod event;
mod gesture;
mod machine;
mod phase;
mod view;

pub use event::{Effect, LastAction, Outcome, Rejection, SessionEvent};
pub use gesture::DragGesture;
pub use machine::Session;
pub use phase::SessionPhase;
pub use view::SessionView;
