//! Error types for currency masking.
//!
//! Steady-state typing never produces an error: unparsable input unmasks to
//! zero and disallowed keystrokes are reported as a [`Rejection`]. The errors
//! in this module describe configuration problems (an unknown currency, an
//! unsupported locale, contradictory fraction digits) and malformed edits
//! handed over by a platform adapter.
//!
//! ## Examples
//!
//! ```rust
//! use currency_mask::{mask, Error, FormatOptions};
//!
//! let options = FormatOptions::new("XYZ");
//! let result = mask(12.0, &options, false, 0);
//! assert!(matches!(result, Err(Error::UnknownCurrency(_))));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while configuring or applying a mask.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The currency code is well formed but not in the currency table.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The currency code is not three uppercase ASCII letters.
    #[error("Invalid currency code {0:?}: expected three uppercase letters (ISO 4217)")]
    InvalidCurrencyCode(String),

    /// The locale tag has no built-in number symbols.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Configured fraction digits contradict each other or exceed the limit.
    #[error("Invalid fraction digits: minimum {min:?}, maximum {max:?} (limit {limit})")]
    InvalidFractionDigits {
        min: Option<usize>,
        max: Option<usize>,
        limit: usize,
    },

    /// NaN and infinities have no currency representation.
    #[error("Cannot format non-finite value {0}")]
    NonFiniteValue(f64),

    /// An edit range reaches outside the text it was applied to.
    #[error("Edit at {start}+{len} is out of bounds for text of length {text_len}")]
    EditOutOfBounds {
        start: usize,
        len: usize,
        text_len: usize,
    },

    /// No field is installed under this identifier.
    #[error("No currency field installed for id {0}")]
    UnknownField(u64),
}

impl Error {
    /// Creates an unknown-currency error.
    pub fn unknown_currency(code: &str) -> Self {
        Error::UnknownCurrency(code.to_string())
    }

    /// Creates an invalid-currency-code error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::Error;
    ///
    /// let err = Error::invalid_currency_code("usd");
    /// assert!(err.to_string().contains("ISO 4217"));
    /// ```
    pub fn invalid_currency_code(code: &str) -> Self {
        Error::InvalidCurrencyCode(code.to_string())
    }

    /// Creates an unsupported-locale error.
    pub fn unsupported_locale(tag: &str) -> Self {
        Error::UnsupportedLocale(tag.to_string())
    }

    /// Creates an out-of-bounds edit error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::Error;
    ///
    /// let err = Error::edit_out_of_bounds(7, 1, 4);
    /// assert!(err.to_string().contains("length 4"));
    /// ```
    pub fn edit_out_of_bounds(start: usize, len: usize, text_len: usize) -> Self {
        Error::EditOutOfBounds {
            start,
            len,
            text_len,
        }
    }
}

/// Why a keystroke was refused by the change policy.
///
/// A rejection is a normal outcome of typing, not a failure: the field simply
/// keeps its previous content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The text already holds a decimal separator and another one was typed.
    #[error("a decimal separator is already present")]
    DuplicateSeparator,

    /// The resulting amount is larger than the configured maximum.
    #[error("value exceeds the configured maximum")]
    ExceedsMaxValue,

    /// The resulting amount has more than two digits after the point.
    #[error("value has more than two fraction digits")]
    TooManyFractionDigits,
}

pub type Result<T> = std::result::Result<T, Error>;
