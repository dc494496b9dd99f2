/*!
 * Tests for the heuristic text filters
 */

use zubaan::heuristics::{is_number_only_text, is_too_short, preview, strip_wrapping_quotes};

#[test]
fn test_isNumberOnlyText_withNumericPunctuation_shouldReturnTrue() {
    assert!(is_number_only_text("123"));
    assert!(is_number_only_text("123-456"));
    assert!(is_number_only_text("(021) 111-222"));
    assert!(is_number_only_text("1,250.75"));
    assert!(is_number_only_text("12/08/2024"));
    assert!(is_number_only_text("  0300 1234567  "));
}

#[test]
fn test_isNumberOnlyText_withCnic_shouldReturnTrue() {
    // Hyphens are stripped, so identifiers count as numbers
    assert!(is_number_only_text("42501-5440926-9"));
}

#[test]
fn test_isNumberOnlyText_withUrduDigits_shouldReturnTrue() {
    assert!(is_number_only_text("۱۲۳۴"));
}

#[test]
fn test_isNumberOnlyText_withLettersOrNothing_shouldReturnFalse() {
    assert!(!is_number_only_text(""));
    assert!(!is_number_only_text("   "));
    assert!(!is_number_only_text("--..//"));
    assert!(!is_number_only_text("Rs 500"));
    assert!(!is_number_only_text("meri 8 transactions"));
    assert!(!is_number_only_text("+92 300 1234567"));
}

#[test]
fn test_isNumberOnlyText_withNonDecimalNumerals_shouldReturnFalse() {
    assert!(!is_number_only_text("½"));
    assert!(!is_number_only_text("Ⅻ"));
    assert!(!is_number_only_text("1½"));
}

#[test]
fn test_isTooShort_withShortTexts_shouldReturnTrue() {
    assert!(is_too_short(""));
    assert!(is_too_short("ok"));
    assert!(is_too_short("  hi  "));
    assert!(is_too_short("جی"));
}

#[test]
fn test_isTooShort_withThreeOrMoreChars_shouldReturnFalse() {
    assert!(!is_too_short("yes"));
    assert!(!is_too_short(" a b "));
    assert!(!is_too_short("ہاں"));
}

#[test]
fn test_stripWrappingQuotes_shouldRemoveOnlyOuterPair() {
    assert_eq!(strip_wrapping_quotes("\"hello\""), "hello");
    assert_eq!(strip_wrapping_quotes("\"\""), "");
    assert_eq!(strip_wrapping_quotes("\""), "\"");
    assert_eq!(strip_wrapping_quotes("\"hello"), "\"hello");
    assert_eq!(strip_wrapping_quotes("he said \"hi\""), "he said \"hi\"");
}

#[test]
fn test_preview_withMultibyteText_shouldCutOnCharBoundary() {
    assert_eq!(preview("میرا بیلنس", 4), "میرا");
    assert_eq!(preview("short", 50), "short");
}
