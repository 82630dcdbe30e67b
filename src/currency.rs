//! ISO 4217 currency lookup.

use crate::error::{Error, Result};

/// A currency known to the formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
}

const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", symbol: "$" },
    Currency { code: "EUR", symbol: "€" },
    Currency { code: "GBP", symbol: "£" },
    Currency { code: "JPY", symbol: "¥" },
    Currency { code: "CHF", symbol: "CHF" },
    Currency { code: "BRL", symbol: "R$" },
    Currency { code: "SEK", symbol: "kr" },
    Currency { code: "CAD", symbol: "CA$" },
    Currency { code: "AUD", symbol: "A$" },
    Currency { code: "INR", symbol: "₹" },
    Currency { code: "CNY", symbol: "CN¥" },
    Currency { code: "KRW", symbol: "₩" },
    Currency { code: "MXN", symbol: "MX$" },
];

impl Currency {
    /// Resolves an ISO 4217 code.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurrencyCode`] if `code` is not three uppercase ASCII
    /// letters, [`Error::UnknownCurrency`] if it is well formed but unknown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::Currency;
    ///
    /// assert_eq!(Currency::lookup("BRL").unwrap().symbol, "R$");
    /// assert!(Currency::lookup("brl").is_err());
    /// ```
    pub fn lookup(code: &str) -> Result<Self> {
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::invalid_currency_code(code));
        }
        CURRENCIES
            .iter()
            .find(|currency| currency.code == code)
            .copied()
            .ok_or_else(|| Error::unknown_currency(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        assert_eq!(Currency::lookup("USD").unwrap().symbol, "$");
        assert_eq!(Currency::lookup("EUR").unwrap().symbol, "€");
    }

    #[test]
    fn test_lookup_malformed() {
        for code in ["", "US", "usd", "USDT", "U$D"] {
            assert_eq!(
                Currency::lookup(code),
                Err(Error::InvalidCurrencyCode(code.to_string()))
            );
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            Currency::lookup("XYZ"),
            Err(Error::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_symbols_have_no_digits() {
        for currency in CURRENCIES {
            assert!(!currency.symbol.chars().any(|c| c.is_ascii_digit()));
        }
    }
}
