//! Random ages and their display text.

use rand::Rng;

use crate::models::Age;

/// Youngest age in months for an item with zero years.
pub const MIN_KITTEN_MONTHS: u8 = 6;

/// Sample an age.
///
/// Years are uniform in `0..=5`. Months are uniform in `1..=11`, re-rolled
/// over `0..=11` for five-year-olds, and raised to [`MIN_KITTEN_MONTHS`]
/// when years is zero.
pub fn next_age<R: Rng + ?Sized>(rng: &mut R) -> Age {
    let years: u8 = rng.gen_range(0..=5);
    let mut months: u8 = rng.gen_range(1..=11);
    if years == 5 {
        months = rng.gen_range(0..=11);
    }
    if years == 0 && months < MIN_KITTEN_MONTHS {
        months = MIN_KITTEN_MONTHS;
    }
    Age::new(years, months)
}

/// Human-readable age, e.g. `"2 years 3 months"`, `"1 year"`, `"6 months"`.
pub fn format_age(age: Age) -> String {
    let mut text = String::new();
    if age.years > 0 {
        text.push_str(&format!(
            "{} year{}",
            age.years,
            if age.years > 1 { "s" } else { "" }
        ));
    }
    if age.months > 0 {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!(
            "{} month{}",
            age.months,
            if age.months > 1 { "s" } else { "" }
        ));
    }
    text
}
