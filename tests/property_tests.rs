//! Property-based tests for the masking invariants.
//!
//! Inputs are generated as digit strings with an optional decimal part, the
//! way a user would type them, and pushed through every built-in locale.

use currency_mask::caret::utf16_len;
use currency_mask::{
    caret_position, mask, unmask, CurrencyField, Edit, FieldOptions, FormatOptions, Locale,
};
use proptest::prelude::*;

fn locale_options() -> impl Strategy<Value = FormatOptions> {
    prop::sample::select(Locale::ALL.to_vec()).prop_map(|locale| {
        let currency = match locale.tag() {
            "en-US" => "USD",
            "en-GB" => "GBP",
            "de-CH" => "CHF",
            "pt-BR" => "BRL",
            "ja-JP" => "JPY",
            "sv-SE" => "SEK",
            _ => "EUR",
        };
        FormatOptions::new(currency).with_locale(locale)
    })
}

/// Typed amounts: up to nine integer digits, then optionally a separator and
/// up to two fraction digits.
fn typed_amount() -> impl Strategy<Value = (String, Option<String>)> {
    ("[0-9]{1,9}", proptest::option::of("[0-9]{0,2}"))
}

fn render(options: &FormatOptions, integer: &str, fraction: &Option<String>) -> String {
    match fraction {
        Some(digits) => format!("{}{}{}", integer, options.decimal_separator(), digits),
        None => integer.to_string(),
    }
}

fn remask(text: &str, options: &FormatOptions) -> String {
    let typed = unmask(text, options);
    mask(
        typed.value,
        options,
        typed.trailing_separator,
        typed.fraction_digits,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_value_round_trip(options in locale_options(), (integer, fraction) in typed_amount()) {
        let typed = render(&options, &integer, &fraction);
        let masked = remask(&typed, &options);
        prop_assert_eq!(unmask(&masked, &options).value, unmask(&typed, &options).value);
    }

    #[test]
    fn prop_remask_is_idempotent(options in locale_options(), (integer, fraction) in typed_amount()) {
        let once = remask(&render(&options, &integer, &fraction), &options);
        let twice = remask(&once, &options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_trailing_separator_survives(options in locale_options(), integer in "[0-9]{1,9}") {
        let typed = format!("{}{}", integer, options.decimal_separator());
        let masked = remask(&typed, &options);
        prop_assert!(unmask(&masked, &options).trailing_separator);
    }

    #[test]
    fn prop_caret_within_text(options in locale_options(), text in "\\PC{0,16}") {
        prop_assert!(caret_position(&text, &options) <= utf16_len(&text));
    }

    #[test]
    fn prop_caret_follows_last_digit(options in locale_options(), (integer, fraction) in typed_amount()) {
        let masked = remask(&render(&options, &integer, &fraction), &options);
        let caret = caret_position(&masked, &options);
        let tail = String::from_utf16_lossy(&masked.encode_utf16().skip(caret).collect::<Vec<_>>());
        prop_assert!(!tail.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prop_field_never_exceeds_max(keys in prop::collection::vec("[0-9.]", 0..20)) {
        let options = FieldOptions::default().with_max_value(5_000.0);
        let mut field = CurrencyField::new(options, "$0").unwrap();
        for key in keys {
            let caret = field.caret();
            field.apply(&Edit::insert(caret, &key));
            prop_assert!(field.value() <= 5_000.0);
            prop_assert!(field.caret() <= utf16_len(field.text()));
            prop_assert!(!field.text().is_empty());
        }
    }
}
