//! Locale-style text ordering.

use std::cmp::Ordering;

/// Compares two strings the way a human-facing list expects.
///
/// Letters compare case-insensitively first, so `"alice"` sorts before
/// `"Bob"`. Strings that differ only in case put the lowercase form first,
/// and anything still tied falls back to code-point order so the result is a
/// total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
