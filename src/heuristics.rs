/*!
 * Heuristic filters applied before any detection or translation.
 *
 * These are pure functions: they decide whether a piece of text is worth
 * sending to a detector or translator at all.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Texts shorter than this (after trimming) are too short to classify
pub const MIN_DETECTABLE_CHARS: usize = 3;

// Separators allowed inside phone numbers, account numbers and CNICs
static NUMBER_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-.,()/]+").expect("valid separator pattern"));

// Decimal digits in any script; fractions and numerals such as `½` or `Ⅻ` do not count
static DECIMAL_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid digit pattern"));

/// Check if text contains only digits and number separators
///
/// Whitespace, `-`, `.`, `,`, `(`, `)` and `/` are ignored; what remains must
/// be non-empty and made of decimal digits. Identifiers such as `42501-5440926-9`
/// therefore count as numbers.
pub fn is_number_only_text(text: &str) -> bool {
    let digits = NUMBER_SEPARATORS.replace_all(text, "");
    DECIMAL_DIGITS.is_match(&digits)
}

/// Check if text is too short for reliable language detection
pub fn is_too_short(text: &str) -> bool {
    text.trim().chars().count() < MIN_DETECTABLE_CHARS
}

/// Remove one pair of double quotes wrapping the whole text
pub fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Shorten text for log output without splitting a character
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
