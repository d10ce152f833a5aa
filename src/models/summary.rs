//! End-of-session summary, derived from the rating history.

use serde::Serialize;

use super::item::Item;
use super::rating::{Decision, Rating};

/// Counts and per-decision item lists shown once a session finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub liked: Vec<Item>,
    pub disliked: Vec<Item>,
    pub superliked: Vec<Item>,
    pub super_likes_left: usize,
}

impl Summary {
    /// Build a summary from ratings in the order they were made.
    pub fn from_ratings(ratings: &[Rating], super_likes_left: usize) -> Self {
        let mut summary = Summary {
            super_likes_left,
            ..Default::default()
        };
        for rating in ratings {
            let bucket = match rating.decision {
                Decision::Liked => &mut summary.liked,
                Decision::Disliked => &mut summary.disliked,
                Decision::Superliked => &mut summary.superliked,
            };
            bucket.push(rating.item.clone());
        }
        summary
    }

    /// Liked plus super-liked.
    pub fn loved_count(&self) -> usize {
        self.liked.len() + self.superliked.len()
    }

    pub fn total(&self) -> usize {
        self.liked.len() + self.disliked.len() + self.superliked.len()
    }

    pub fn headline(&self) -> String {
        match self.loved_count() {
            0 => "You didn't like any cats".to_string(),
            1 => "You loved 1 cat".to_string(),
            n => format!("You loved {} cats", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Age, ImageHandle};

    fn rating(index: usize, name: &str, decision: Decision) -> Rating {
        Rating::new(
            Item::new(index, ImageHandle::new(vec![0u8]), name, Age::new(1, 0)),
            decision,
        )
    }

    #[test]
    fn test_summary_buckets_preserve_order() {
        let ratings = vec![
            rating(0, "Luna", Decision::Liked),
            rating(1, "Max", Decision::Disliked),
            rating(2, "Milo", Decision::Liked),
            rating(3, "Coco", Decision::Superliked),
        ];
        let summary = Summary::from_ratings(&ratings, 1);

        let liked: Vec<_> = summary.liked.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(liked, vec!["Luna", "Milo"]);
        assert_eq!(summary.disliked.len(), 1);
        assert_eq!(summary.superliked[0].name, "Coco");
        assert_eq!(summary.loved_count(), 3);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.super_likes_left, 1);
    }

    #[test]
    fn test_headline_variants() {
        let none = Summary::from_ratings(&[rating(0, "Max", Decision::Disliked)], 2);
        assert_eq!(none.headline(), "You didn't like any cats");

        let one = Summary::from_ratings(&[rating(0, "Max", Decision::Superliked)], 1);
        assert_eq!(one.headline(), "You loved 1 cat");

        let many = Summary::from_ratings(
            &[
                rating(0, "Max", Decision::Liked),
                rating(1, "Leo", Decision::Liked),
            ],
            2,
        );
        assert_eq!(many.headline(), "You loved 2 cats");
    }
}
