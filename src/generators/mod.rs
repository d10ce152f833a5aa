//! Name and age generation for fetched items.
//!
//! Pure helpers; the only shared state is the caller-owned set of names
//! already handed out in the current session.

mod age;
mod names;

pub use age::{format_age, next_age, MIN_KITTEN_MONTHS};
pub use names::{next_name, NAME_POOL};
