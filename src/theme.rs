//! Random search themes
//!
//! Each fetch biases the photo search with one or two themes drawn from a
//! fixed vocabulary. The random source is a parameter so callers can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed theme vocabulary
pub const WALLPAPER_THEMES: &[&str] = &[
    "serene lake",
    "snowy mountain",
    "twilight sky",
    "soft minimalist",
    "starry meadow",
    "ethereal architecture",
];

/// Separator between themes in a query
pub const THEME_SEPARATOR: &str = ", ";

/// Pick one or two distinct themes and join them into a search query
pub fn select_theme<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(1..=2);
    WALLPAPER_THEMES
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(THEME_SEPARATOR)
}
