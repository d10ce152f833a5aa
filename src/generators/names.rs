//! Unique display names for deck items.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Candidate names. Must hold at least as many entries as a session's
/// target item count, otherwise [`next_name`] never returns.
pub const NAME_POOL: [&str; 50] = [
    "Whiskers", "Mittens", "Shadow", "Simba", "Luna", "Oliver", "Leo", "Bella", "Chloe", "Max",
    "Tiger", "Smokey", "Milo", "Cleo", "Oscar", "Jasper", "Nala", "Socks", "Toby", "Daisy",
    "Gizmo", "Willow", "Pumpkin", "Coco", "Boots", "Felix", "Misty", "Ziggy", "Peanut", "Mochi",
    "Poppy", "Ruby", "Rosie", "Charlie", "George", "Maggie", "Loki", "Sasha", "Biscuit", "Mimi",
    "Tigger", "Penny", "Muffin", "Bubbles", "Cookie", "Pepper", "Waffles", "Honey", "Maple",
    "Sunny",
];

/// Draw a name from [`NAME_POOL`] that is not yet in `used`, and record it.
///
/// Sampling is uniform with rejection, so the caller must guarantee the pool
/// still has an unused entry.
pub fn next_name<R: Rng + ?Sized>(used: &mut HashSet<String>, rng: &mut R) -> String {
    loop {
        let Some(candidate) = NAME_POOL.choose(rng) else {
            unreachable!("name pool is a non-empty constant");
        };
        if !used.contains(*candidate) {
            used.insert(candidate.to_string());
            return candidate.to_string();
        }
    }
}
