//! Recovering the amount and typing state from masked text.

use crate::options::FormatOptions;
use serde::{Deserialize, Serialize};

/// What the digits in a masked string amount to.
///
/// `trailing_separator` and `fraction_digits` describe how far the user has
/// got with the fractional part, which the bare `value` cannot express:
/// `"$12"`, `"$12."` and `"$12.0"` all unmask to `12.0` but must be re-masked
/// differently.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmaskResult {
    pub value: f64,
    pub trailing_separator: bool,
    pub fraction_digits: usize,
}

impl UnmaskResult {
    /// The result for text with no digits at all.
    pub const EMPTY: UnmaskResult = UnmaskResult {
        value: 0.0,
        trailing_separator: false,
        fraction_digits: 0,
    };
}

/// Extracts the numeric amount from `text`.
///
/// Everything except ASCII digits and the locale decimal separator is
/// dropped. What remains is read as a decimal number; if it does not parse
/// (two separators, say) or overflows, the value is `0.0`. This function
/// never fails.
///
/// # Examples
///
/// ```rust
/// use currency_mask::{unmask, FormatOptions};
///
/// let result = unmask("$1,234.56", &FormatOptions::new("USD"));
/// assert_eq!(result.value, 1234.56);
/// assert_eq!(result.fraction_digits, 2);
/// assert!(!result.trailing_separator);
///
/// let result = unmask("$12.", &FormatOptions::new("USD"));
/// assert_eq!(result.value, 12.0);
/// assert!(result.trailing_separator);
/// ```
#[must_use]
pub fn unmask(text: &str, options: &FormatOptions) -> UnmaskResult {
    let separator = options.decimal_separator();
    let numbers: String = text
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == separator)
        .collect();

    if numbers.is_empty() {
        return UnmaskResult::EMPTY;
    }

    let fraction_digits = numbers
        .rfind(separator)
        .map(|idx| numbers[idx + separator.len_utf8()..].len())
        .unwrap_or(0);
    let trailing_separator = numbers.ends_with(separator);

    let value = numbers
        .replace(separator, ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    UnmaskResult {
        value,
        trailing_separator,
        fraction_digits,
    }
}
