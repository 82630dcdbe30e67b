//! Caret placement and UTF-16 offset conversion.
//!
//! Platform text fields count positions in UTF-16 code units, while Rust
//! strings index bytes. Every caret index and edit offset in this crate is a
//! UTF-16 offset; the helpers here translate at the boundary.

use crate::options::FormatOptions;

/// Where the caret belongs in masked `text`.
///
/// The caret goes right after the last digit or the last decimal separator,
/// whichever comes later, so further typing extends the amount rather than
/// landing after a trailing currency symbol. Text with neither puts the caret
/// at its end, so empty text gives 0 and a symbol-only text such as `"€"`
/// gives its length.
///
/// # Examples
///
/// ```rust
/// use currency_mask::{caret_position, FormatOptions, Locale};
///
/// let usd = FormatOptions::new("USD");
/// assert_eq!(caret_position("$12.", &usd), 4);
///
/// let eur = FormatOptions::new("EUR").with_locale(Locale::DE_DE);
/// assert_eq!(caret_position("12,5\u{a0}€", &eur), 4);
/// ```
#[must_use]
pub fn caret_position(text: &str, options: &FormatOptions) -> usize {
    let separator = options.decimal_separator();

    let after_digit = text.rfind(|c: char| c.is_ascii_digit()).map(|idx| idx + 1);
    let after_separator = text.rfind(separator).map(|idx| idx + separator.len_utf8());

    match after_digit.max(after_separator) {
        Some(byte_idx) => utf16_len(&text[..byte_idx]),
        None => utf16_len(text),
    }
}

/// Length of `text` in UTF-16 code units.
#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Converts a UTF-16 offset into a byte offset into `text`.
///
/// Returns `None` when the offset lies past the end or inside a surrogate
/// pair.
#[must_use]
pub fn byte_offset(text: &str, utf16_offset: usize) -> Option<usize> {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        if units == utf16_offset {
            return Some(idx);
        }
        if units > utf16_offset {
            return None;
        }
        units += c.len_utf16();
    }
    (units == utf16_offset).then_some(text.len())
}
