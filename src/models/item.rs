//! Deck items.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::handle::ImageHandle;

/// Stable identifier of a deck item, derived from its fetch index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn for_index(index: usize) -> Self {
        Self(format!("cat-{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generated age of an item.
///
/// `years` is in `0..=5`, `months` in `0..=11`, and an age with zero years
/// always has at least six months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: u8,
    pub months: u8,
}

impl Age {
    pub fn new(years: u8, months: u8) -> Self {
        Self { years, months }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::generators::format_age(*self))
    }
}

/// A displayable deck entry. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: ItemId,
    /// Position in the provider's fetch order.
    pub index: usize,
    pub name: String,
    pub age: Age,
    #[serde(skip)]
    pub handle: Arc<ImageHandle>,
}

impl Item {
    pub fn new(index: usize, handle: ImageHandle, name: impl Into<String>, age: Age) -> Self {
        Self {
            id: ItemId::for_index(index),
            index,
            name: name.into(),
            age,
            handle: Arc::new(handle),
        }
    }
}

// Two items are equal only if they share the same image handle.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.index == other.index
            && self.name == other.name
            && self.age == other.age
            && Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl Eq for Item {}
