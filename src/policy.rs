//! Admission control for keystrokes.
//!
//! Before an edit is masked, [`ChangePolicy`] decides whether it may be
//! applied at all. A refused edit leaves the field exactly as it was.

use crate::error::Rejection;
use crate::format::TYPED_FRACTION_DIGITS;
use crate::options::{FieldOptions, FormatOptions};

/// Typed glyphs that are read as "decimal separator" in every locale.
const SEPARATOR_ALIASES: [&str; 3] = [".", ",", "-"];

/// The rules deciding whether an edit may be applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangePolicy {
    max_value: f64,
    decimal_separator: char,
}

impl ChangePolicy {
    #[must_use]
    pub fn new(max_value: f64, options: &FormatOptions) -> Self {
        ChangePolicy {
            max_value,
            decimal_separator: options.decimal_separator(),
        }
    }

    #[must_use]
    pub fn for_field(options: &FieldOptions) -> Self {
        ChangePolicy::new(options.max_value, &options.format)
    }

    /// Checks an edit that inserted `symbol` into `previous_text` and would
    /// leave the field holding `new_value`.
    ///
    /// `symbol` is compared as typed; run it through [`Self::normalize_symbol`]
    /// first when it comes straight from a keyboard.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::{ChangePolicy, FormatOptions, Rejection};
    ///
    /// let policy = ChangePolicy::new(1000.0, &FormatOptions::new("USD"));
    /// assert_eq!(policy.check("5", "$99", 995.0), Ok(()));
    /// assert_eq!(policy.check("5", "$999", 9995.0), Err(Rejection::ExceedsMaxValue));
    /// assert_eq!(policy.check(".", "$12.3", 12.3), Err(Rejection::DuplicateSeparator));
    /// ```
    pub fn check(
        &self,
        symbol: &str,
        previous_text: &str,
        new_value: f64,
    ) -> Result<(), Rejection> {
        let separator = self.decimal_separator;
        if previous_text.contains(separator) && is_single(symbol, separator) {
            return Err(Rejection::DuplicateSeparator);
        }
        if new_value > self.max_value {
            return Err(Rejection::ExceedsMaxValue);
        }
        if fraction_len(new_value) > TYPED_FRACTION_DIGITS {
            return Err(Rejection::TooManyFractionDigits);
        }
        Ok(())
    }

    /// Maps a typed `.`, `,` or `-` to the locale decimal separator; other
    /// input is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::{ChangePolicy, FormatOptions, Locale};
    ///
    /// let options = FormatOptions::new("EUR").with_locale(Locale::FR_FR);
    /// let policy = ChangePolicy::new(100.0, &options);
    /// assert_eq!(policy.normalize_symbol("."), ",");
    /// assert_eq!(policy.normalize_symbol("7"), "7");
    /// ```
    #[must_use]
    pub fn normalize_symbol(&self, symbol: &str) -> String {
        if SEPARATOR_ALIASES.contains(&symbol) {
            self.decimal_separator.to_string()
        } else {
            symbol.to_string()
        }
    }
}

fn is_single(symbol: &str, c: char) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

/// Digits after the point in the shortest decimal rendering of `value`.
fn fraction_len(value: f64) -> usize {
    value
        .to_string()
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

/// Whether an edit inserting `symbol` into `previous_text`, leaving the
/// field at `new_value`, may be applied.
///
/// # Examples
///
/// ```rust
/// use currency_mask::{should_allow_change, FormatOptions};
///
/// let usd = FormatOptions::new("USD");
/// assert!(should_allow_change("4", "$12.3", 12.34, 1000.0, &usd));
/// assert!(!should_allow_change("5", "$12.34", 12.345, 1000.0, &usd));
/// assert!(!should_allow_change(".", "12.3", 12.3, 1000.0, &usd));
/// ```
#[must_use]
pub fn should_allow_change(
    symbol: &str,
    previous_text: &str,
    new_value: f64,
    max_value: f64,
    options: &FormatOptions,
) -> bool {
    ChangePolicy::new(max_value, options)
        .check(symbol, previous_text, new_value)
        .is_ok()
}
