//! Display formatting for ratings and review counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Numeric rating shown next to the star glyph, one decimal place.
pub fn rating_label(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Parenthesized review-count label, e.g. `(127 reviews)`.
pub fn review_count_label(count: u32) -> String {
    if count == 1 {
        "(1 review)".to_owned()
    } else {
        format!("({count} reviews)")
    }
}

/// A row of filled stars for an integer rating, capped at five.
pub fn star_row(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}
