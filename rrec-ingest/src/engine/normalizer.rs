//! Name normalization
//!
//! Canonicalizes scraped free-text names into a stable display form before
//! scoring, so "  jane   o'brien " and "Jane O'Brien" compare as equals.

/// Normalize a raw name into title-cased display form
///
/// Collapses whitespace runs, trims the ends, and title-cases each word.
/// Words containing an apostrophe are title-cased per segment ("o'brien"
/// becomes "O'Brien"). The "mc"/"mac"/"o" prefix words take a dedicated
/// branch that currently renders the same as generic title-casing.
///
/// Pure and idempotent; empty input yields empty output.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(normalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower == "mc" || lower == "mac" || lower == "o" {
        title_case(word)
    } else if word.contains('\'') {
        word.split('\'')
            .map(title_case)
            .collect::<Vec<_>>()
            .join("'")
    } else {
        title_case(word)
    }
}

/// Uppercase the first character, lowercase the rest
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
