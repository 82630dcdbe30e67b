//! Locale number symbols used when masking currency amounts.
//!
//! A [`Locale`] carries the glyphs a currency string is assembled from: the
//! decimal and grouping separators, the sign characters, and where the
//! currency symbol sits relative to the digits.
//!
//! ## Examples
//!
//! ```rust
//! use currency_mask::Locale;
//!
//! let locale: Locale = "de-DE".parse().unwrap();
//! assert_eq!(locale.decimal_separator(), ',');
//! assert_eq!(locale.grouping_separator(), '.');
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

const NBSP: char = '\u{00A0}';
const NARROW_NBSP: char = '\u{202F}';

/// Where the currency symbol is written relative to the amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1,234.50`, `R$ 1.234,50`
    Prefix,
    /// `1.234,50 €`, `1 234,50 kr`
    Suffix,
}

/// Number symbols for one locale.
///
/// Only the built-in constants exist; parse a BCP-47 tag with
/// [`str::parse`] or [`Locale::from_tag`] to look one up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Locale {
    tag: &'static str,
    decimal_separator: char,
    grouping_separator: char,
    minus_sign: char,
    plus_sign: char,
    placement: SymbolPlacement,
    symbol_spacing: bool,
}

impl Locale {
    pub const EN_US: Locale = Locale::prefixed("en-US", '.', ',', false);
    pub const EN_GB: Locale = Locale::prefixed("en-GB", '.', ',', false);
    pub const DE_DE: Locale = Locale::suffixed("de-DE", ',', '.');
    pub const DE_CH: Locale = Locale::prefixed("de-CH", '.', '\u{2019}', true);
    pub const FR_FR: Locale = Locale::suffixed("fr-FR", ',', NARROW_NBSP);
    pub const IT_IT: Locale = Locale::suffixed("it-IT", ',', '.');
    pub const NL_NL: Locale = Locale::prefixed("nl-NL", ',', '.', true);
    pub const PT_BR: Locale = Locale::prefixed("pt-BR", ',', '.', true);
    pub const JA_JP: Locale = Locale::prefixed("ja-JP", '.', ',', false);
    pub const SV_SE: Locale = Locale {
        minus_sign: '\u{2212}',
        ..Locale::suffixed("sv-SE", ',', NBSP)
    };

    /// Every locale with built-in symbols.
    pub const ALL: [Locale; 10] = [
        Locale::EN_US,
        Locale::EN_GB,
        Locale::DE_DE,
        Locale::DE_CH,
        Locale::FR_FR,
        Locale::IT_IT,
        Locale::NL_NL,
        Locale::PT_BR,
        Locale::JA_JP,
        Locale::SV_SE,
    ];

    const fn prefixed(
        tag: &'static str,
        decimal_separator: char,
        grouping_separator: char,
        symbol_spacing: bool,
    ) -> Self {
        Locale {
            tag,
            decimal_separator,
            grouping_separator,
            minus_sign: '-',
            plus_sign: '+',
            placement: SymbolPlacement::Prefix,
            symbol_spacing,
        }
    }

    const fn suffixed(tag: &'static str, decimal_separator: char, grouping_separator: char) -> Self {
        Locale {
            tag,
            decimal_separator,
            grouping_separator,
            minus_sign: '-',
            plus_sign: '+',
            placement: SymbolPlacement::Suffix,
            symbol_spacing: true,
        }
    }

    /// Looks up a locale by BCP-47 tag. Matching ignores case and accepts `_`
    /// in place of `-`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLocale`] when no built-in locale matches.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let wanted = tag.trim().replace('_', "-");
        Locale::ALL
            .iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| Error::unsupported_locale(tag))
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    #[must_use]
    pub const fn minus_sign(&self) -> char {
        self.minus_sign
    }

    #[must_use]
    pub const fn plus_sign(&self) -> char {
        self.plus_sign
    }

    #[must_use]
    pub const fn placement(&self) -> SymbolPlacement {
        self.placement
    }

    /// Whether a no-break space separates the symbol from the digits.
    #[must_use]
    pub const fn symbol_spacing(&self) -> bool {
        self.symbol_spacing
    }

    pub(crate) const fn symbol_space(&self) -> char {
        NBSP
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_tag(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        Locale::from_tag(&tag)
    }
}

// `tag` borrows from the built-in table, so input is read as an owned string.
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Locale::try_from(tag).map_err(serde::de::Error::custom)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_en_us() {
        assert_eq!(Locale::default(), Locale::EN_US);
        assert_eq!(Locale::default().decimal_separator(), '.');
    }

    #[test]
    fn test_from_tag_is_lenient() {
        assert_eq!(Locale::from_tag("pt_br").unwrap(), Locale::PT_BR);
        assert_eq!(Locale::from_tag(" fr-FR ").unwrap(), Locale::FR_FR);
    }

    #[test]
    fn test_unknown_tag() {
        let err = Locale::from_tag("xx-YY").unwrap_err();
        assert_eq!(err, Error::UnsupportedLocale("xx-YY".to_string()));
    }

    #[test]
    fn test_swedish_minus_sign() {
        assert_eq!(Locale::SV_SE.minus_sign(), '\u{2212}');
        assert_eq!(Locale::SV_SE.placement(), SymbolPlacement::Suffix);
    }

    #[test]
    fn test_deserialize_from_tag_string() {
        let json = String::from("\"sv_SE\"");
        let locale: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(locale, Locale::SV_SE);
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"sv-SE\"");

        let err = serde_json::from_str::<Locale>("\"xx-YY\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported locale: xx-YY"));
    }

    #[test]
    fn test_separators_differ() {
        for locale in Locale::ALL {
            assert_ne!(
                locale.decimal_separator(),
                locale.grouping_separator(),
                "{}",
                locale
            );
        }
    }
}
