//! Rendering amounts as localized currency strings.
//!
//! [`CurrencyFormatter`] resolves [`FormatOptions`] into concrete symbols and
//! fraction digit bounds, then renders values. The free functions wrap it in
//! the shapes a text field needs:
//!
//! - [`mask`]: render a value, keeping a just-typed decimal separator visible
//! - [`format_value`]: render a stored amount (for initial field content)
//! - [`mask_text`]: unmask, re-mask and place the caret in one step

use crate::caret::caret_position;
use crate::error::{Error, Result};
use crate::locale::{Locale, SymbolPlacement};
use crate::options::FormatOptions;
use crate::unmask::unmask;
use serde::{Deserialize, Serialize};

/// Fraction digits a user can type before formatting stops following them.
pub const TYPED_FRACTION_DIGITS: usize = 2;

/// Masked field content with the caret where typing should continue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedText {
    pub text: String,
    /// UTF-16 offset into `text`.
    pub caret_index: usize,
}

/// A currency formatter with fraction digit bounds fixed for one call.
///
/// # Examples
///
/// ```rust
/// use currency_mask::{CurrencyFormatter, FormatOptions, Locale};
///
/// let options = FormatOptions::new("BRL").with_locale(Locale::PT_BR);
/// let formatter = CurrencyFormatter::new(&options, 2).unwrap();
/// assert_eq!(formatter.format(-1234.5).unwrap(), "-R$\u{a0}1.234,50");
/// ```
#[derive(Clone, Debug)]
pub struct CurrencyFormatter {
    locale: Locale,
    symbol: &'static str,
    minimum_fraction_digits: usize,
    maximum_fraction_digits: usize,
    sign_enabled: bool,
}

impl CurrencyFormatter {
    /// Builds a formatter for `options`.
    ///
    /// Fraction digit bounds that `options` leaves unset follow
    /// `fraction_digits` (the count the user has typed) capped at two. A
    /// configured bound wins over the observed count when they conflict.
    ///
    /// # Errors
    ///
    /// Fails when [`FormatOptions::validate`] does.
    pub fn new(options: &FormatOptions, fraction_digits: usize) -> Result<Self> {
        options.validate()?;
        let currency = options.currency()?;
        let observed = fraction_digits.min(TYPED_FRACTION_DIGITS);

        let (minimum_fraction_digits, maximum_fraction_digits) = match (
            options.minimum_fraction_digits,
            options.maximum_fraction_digits,
        ) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, observed.max(min)),
            (None, Some(max)) => (observed.min(max), max),
            (None, None) => (observed, observed),
        };

        Ok(CurrencyFormatter {
            locale: options.locale,
            symbol: currency.symbol,
            minimum_fraction_digits,
            maximum_fraction_digits,
            sign_enabled: options.sign_enabled,
        })
    }

    #[must_use]
    pub fn minimum_fraction_digits(&self) -> usize {
        self.minimum_fraction_digits
    }

    #[must_use]
    pub fn maximum_fraction_digits(&self) -> usize {
        self.maximum_fraction_digits
    }

    /// Renders `value` with symbol, grouping and sign.
    ///
    /// Rounds to the maximum fraction digits, then drops
    /// trailing zeros down to the minimum. A value that rounds to zero is
    /// shown without a minus sign.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteValue`] for NaN and infinities.
    pub fn format(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(Error::NonFiniteValue(value));
        }

        let rendered = format!("{:.*}", self.maximum_fraction_digits, value.abs());
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let mut fraction = fraction.to_string();
        while fraction.len() > self.minimum_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let is_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');
        let sign = if value < 0.0 && !is_zero {
            Some(self.locale.minus_sign())
        } else if self.sign_enabled {
            Some(self.locale.plus_sign())
        } else {
            None
        };

        let mut number = group_digits(integer, self.locale.grouping_separator());
        if !fraction.is_empty() {
            number.push(self.locale.decimal_separator());
            number.push_str(&fraction);
        }

        let mut out = String::with_capacity(number.len() + self.symbol.len() + 8);
        out.extend(sign);
        match self.locale.placement() {
            SymbolPlacement::Prefix => {
                out.push_str(self.symbol);
                if self.locale.symbol_spacing() {
                    out.push(self.locale.symbol_space());
                }
                out.push_str(&number);
            }
            SymbolPlacement::Suffix => {
                out.push_str(&number);
                if self.locale.symbol_spacing() {
                    out.push(self.locale.symbol_space());
                }
                out.push_str(self.symbol);
            }
        }
        Ok(out)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len_utf8());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

/// Masks `value` as currency text.
///
/// `trailing_separator` and `fraction_digits` come from the most recent
/// [`unmask`](crate::unmask()). When the user has just typed the decimal
/// separator, it is spliced back in right after the last digit, since an
/// amount with no fraction digits would otherwise render without it.
///
/// # Examples
///
/// ```rust
/// use currency_mask::{mask, FormatOptions};
///
/// let usd = FormatOptions::new("USD");
/// assert_eq!(mask(1234.5, &usd, false, 1).unwrap(), "$1,234.5");
/// assert_eq!(mask(12.0, &usd, true, 0).unwrap(), "$12.");
/// assert_eq!(mask(0.0, &usd, false, 0).unwrap(), "$0");
/// ```
///
/// # Errors
///
/// Fails for invalid options (see [`FormatOptions::validate`]) and for
/// non-finite values.
pub fn mask(
    value: f64,
    options: &FormatOptions,
    trailing_separator: bool,
    fraction_digits: usize,
) -> Result<String> {
    let mut formatted = CurrencyFormatter::new(options, fraction_digits)?.format(value)?;
    let separator = options.decimal_separator();

    if trailing_separator && !formatted.contains(separator) {
        if let Some(idx) = formatted.rfind(|c: char| c.is_ascii_digit()) {
            formatted.insert(idx + 1, separator);
        }
    }
    Ok(formatted)
}

/// Formats a stored amount for display, showing the fraction digits it has
/// after rounding to cents.
///
/// # Examples
///
/// ```rust
/// use currency_mask::{format_value, FormatOptions};
///
/// let usd = FormatOptions::new("USD");
/// assert_eq!(format_value(12.0, &usd).unwrap(), "$12");
/// assert_eq!(format_value(12.5, &usd).unwrap(), "$12.5");
/// assert_eq!(format_value(12.3456, &usd).unwrap(), "$12.35");
/// ```
///
/// # Errors
///
/// See [`mask`].
pub fn format_value(value: f64, options: &FormatOptions) -> Result<String> {
    mask(value, options, false, significant_fraction_digits(value))
}

/// Reads the amount out of field text. Shorthand for `unmask(text).value`.
#[must_use]
pub fn extract_value(text: &str, options: &FormatOptions) -> f64 {
    unmask(text, options).value
}

/// Re-masks arbitrary field text and places the caret after its digits.
///
/// # Errors
///
/// See [`mask`].
pub fn mask_text(text: &str, options: &FormatOptions) -> Result<MaskedText> {
    let unmasked = unmask(text, options);
    let text = mask(
        unmasked.value,
        options,
        unmasked.trailing_separator,
        unmasked.fraction_digits,
    )?;
    let caret_index = caret_position(&text, options);
    Ok(MaskedText { text, caret_index })
}

/// Digits after the point once `value` is rounded to two places and
/// trailing zeros are dropped.
fn significant_fraction_digits(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let rendered = format!("{:.*}", TYPED_FRACTION_DIGITS, value);
    rendered
        .split_once('.')
        .map(|(_, fraction)| fraction.trim_end_matches('0').len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> FormatOptions {
        FormatOptions::new("USD")
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
        assert_eq!(group_digits("123456", '\u{2019}'), "123\u{2019}456");
    }

    #[test]
    fn test_observed_digits_capped_at_two() {
        assert_eq!(mask(1.5, &usd(), false, 5).unwrap(), "$1.50");
        assert_eq!(mask(1.239, &usd(), false, 3).unwrap(), "$1.24");
    }

    #[test]
    fn test_zero_fraction_digits_rounds() {
        assert_eq!(mask(12.4, &usd(), false, 0).unwrap(), "$12");
        assert_eq!(mask(12.6, &usd(), false, 0).unwrap(), "$13");
    }

    #[test]
    fn test_configured_bounds_win() {
        let options = usd().with_minimum_fraction_digits(2);
        assert_eq!(mask(3.0, &options, false, 0).unwrap(), "$3.00");

        let options = usd().with_maximum_fraction_digits(0);
        assert_eq!(mask(3.75, &options, false, 2).unwrap(), "$4");

        let options = usd()
            .with_minimum_fraction_digits(1)
            .with_maximum_fraction_digits(3);
        assert_eq!(mask(3.0, &options, false, 0).unwrap(), "$3.0");
        assert_eq!(mask(3.1234, &options, false, 0).unwrap(), "$3.123");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(mask(-1234.5, &usd(), false, 1).unwrap(), "-$1,234.5");
        assert_eq!(mask(-0.001, &usd(), false, 0).unwrap(), "$0");
    }

    #[test]
    fn test_sign_enabled() {
        let options = usd().with_sign(true);
        assert_eq!(mask(5.0, &options, false, 0).unwrap(), "+$5");
        assert_eq!(mask(0.0, &options, false, 0).unwrap(), "+$0");
        assert_eq!(mask(-5.0, &options, false, 0).unwrap(), "-$5");
    }

    #[test]
    fn test_trailing_separator_before_suffix() {
        let options = FormatOptions::new("EUR").with_locale(Locale::DE_DE);
        assert_eq!(mask(12.0, &options, true, 0).unwrap(), "12,\u{a0}€");
    }

    #[test]
    fn test_trailing_separator_not_doubled() {
        let options = usd().with_minimum_fraction_digits(2);
        assert_eq!(mask(12.0, &options, true, 0).unwrap(), "$12.00");
    }

    #[test]
    fn test_locales() {
        let cases = [
            (Locale::EN_GB, "GBP", "£1,234.5"),
            (Locale::DE_DE, "EUR", "1.234,5\u{a0}€"),
            (Locale::DE_CH, "CHF", "CHF\u{a0}1\u{2019}234.5"),
            (Locale::FR_FR, "EUR", "1\u{202f}234,5\u{a0}€"),
            (Locale::IT_IT, "EUR", "1.234,5\u{a0}€"),
            (Locale::NL_NL, "EUR", "€\u{a0}1.234,5"),
            (Locale::PT_BR, "BRL", "R$\u{a0}1.234,5"),
            (Locale::JA_JP, "JPY", "¥1,234.5"),
            (Locale::SV_SE, "SEK", "1\u{a0}234,5\u{a0}kr"),
        ];
        for (locale, currency, expected) in cases {
            let options = FormatOptions::new(currency).with_locale(locale);
            assert_eq!(mask(1234.5, &options, false, 1).unwrap(), expected, "{}", locale);
        }
    }

    #[test]
    fn test_swedish_minus() {
        let options = FormatOptions::new("SEK").with_locale(Locale::SV_SE);
        assert_eq!(mask(-7.0, &options, false, 0).unwrap(), "\u{2212}7\u{a0}kr");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            mask(f64::INFINITY, &usd(), false, 0),
            Err(Error::NonFiniteValue(f64::INFINITY))
        );
        assert!(mask(f64::NAN, &usd(), false, 0).is_err());
    }

    #[test]
    fn test_invalid_currency() {
        assert_eq!(
            mask(1.0, &FormatOptions::new("dollars"), false, 0),
            Err(Error::InvalidCurrencyCode("dollars".to_string()))
        );
    }

    #[test]
    fn test_significant_fraction_digits() {
        assert_eq!(significant_fraction_digits(10.0), 0);
        assert_eq!(significant_fraction_digits(10.5), 1);
        assert_eq!(significant_fraction_digits(10.25), 2);
        assert_eq!(significant_fraction_digits(10.999), 0);
        assert_eq!(significant_fraction_digits(f64::NAN), 0);
    }

    #[test]
    fn test_mask_text() {
        let masked = mask_text("1234.", &usd()).unwrap();
        assert_eq!(masked.text, "$1,234.");
        assert_eq!(masked.caret_index, 7);
    }
}
