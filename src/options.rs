//! Configuration options for currency masking.
//!
//! This module provides the two configuration types a platform adapter hands
//! to the engine:
//!
//! - [`FormatOptions`]: currency, fraction digit bounds, sign display, locale
//! - [`FieldOptions`]: format options plus the per-field input limits
//!
//! Both deserialize from the camelCase option maps a JavaScript bridge sends.
//!
//! ## Examples
//!
//! ```rust
//! use currency_mask::{FormatOptions, Locale, format_value};
//!
//! let options = FormatOptions::new("EUR")
//!     .with_locale(Locale::DE_DE)
//!     .with_minimum_fraction_digits(2);
//!
//! assert_eq!(format_value(1234.5, &options).unwrap(), "1.234,50\u{a0}€");
//! ```

use crate::currency::Currency;
use crate::error::{Error, Result};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Largest fraction digit count that may be configured explicitly.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Default upper bound on the amount a field accepts.
pub const DEFAULT_MAX_VALUE: f64 = 100_000_000.0;

/// How amounts are rendered.
///
/// Fraction digit bounds left unset follow what the user has typed so far,
/// capped at two digits. See [`crate::mask`].
///
/// # Examples
///
/// ```rust
/// use currency_mask::FormatOptions;
///
/// let options: FormatOptions = serde_json::from_str(
///     r#"{"currency": "GBP", "signEnabled": true, "locale": "en-GB"}"#,
/// ).unwrap();
/// assert_eq!(options.currency, "GBP");
/// assert!(options.sign_enabled);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    pub currency: String,
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
    pub sign_enabled: bool,
    pub locale: Locale,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            currency: "USD".to_string(),
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            sign_enabled: false,
            locale: Locale::default(),
        }
    }
}

impl FormatOptions {
    /// Creates options for `currency` in the default (`en-US`) locale.
    #[must_use]
    pub fn new(currency: &str) -> Self {
        FormatOptions {
            currency: currency.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_minimum_fraction_digits(mut self, digits: usize) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    #[must_use]
    pub fn with_maximum_fraction_digits(mut self, digits: usize) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Always show a sign, including `+` on positive amounts.
    #[must_use]
    pub fn with_sign(mut self, enabled: bool) -> Self {
        self.sign_enabled = enabled;
        self
    }

    /// Decimal separator of the configured locale.
    #[must_use]
    pub fn decimal_separator(&self) -> char {
        self.locale.decimal_separator()
    }

    /// Checks the options up front so that formatting cannot fail later on
    /// account of configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed or unknown currency code, or for
    /// fraction digit bounds above [`MAX_FRACTION_DIGITS`] or with the
    /// minimum larger than the maximum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::FormatOptions;
    ///
    /// assert!(FormatOptions::new("USD").validate().is_ok());
    /// assert!(FormatOptions::new("USD")
    ///     .with_minimum_fraction_digits(3)
    ///     .with_maximum_fraction_digits(1)
    ///     .validate()
    ///     .is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.currency()?;
        let (min, max) = (self.minimum_fraction_digits, self.maximum_fraction_digits);
        let too_large = |digits: Option<usize>| digits.is_some_and(|d| d > MAX_FRACTION_DIGITS);
        let inverted = matches!((min, max), (Some(lo), Some(hi)) if lo > hi);
        if too_large(min) || too_large(max) || inverted {
            return Err(Error::InvalidFractionDigits {
                min,
                max,
                limit: MAX_FRACTION_DIGITS,
            });
        }
        Ok(())
    }

    pub(crate) fn currency(&self) -> Result<Currency> {
        Currency::lookup(&self.currency)
    }
}

/// Options for one currency input field.
///
/// The JSON shape matches what the JavaScript component passes when it
/// initializes a native field: format keys plus `maxValue` and
/// `selectTextOnInit`.
///
/// # Examples
///
/// ```rust
/// use currency_mask::FieldOptions;
///
/// let options: FieldOptions =
///     serde_json::from_str(r#"{"currency": "USD", "maxValue": 1000}"#).unwrap();
/// assert_eq!(options.max_value, 1000.0);
/// assert!(!options.select_text_on_init);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(flatten)]
    pub format: FormatOptions,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default)]
    pub select_text_on_init: bool,
}

fn default_max_value() -> f64 {
    DEFAULT_MAX_VALUE
}

impl Default for FieldOptions {
    fn default() -> Self {
        FieldOptions {
            format: FormatOptions::default(),
            max_value: DEFAULT_MAX_VALUE,
            select_text_on_init: false,
        }
    }
}

impl FieldOptions {
    #[must_use]
    pub fn new(format: FormatOptions) -> Self {
        FieldOptions {
            format,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_select_text_on_init(mut self, select: bool) -> Self {
        self.select_text_on_init = select;
        self
    }

    /// Validates the format options.
    ///
    /// # Errors
    ///
    /// See [`FormatOptions::validate`].
    pub fn validate(&self) -> Result<()> {
        self.format.validate()
    }
}
