//! The same amounts rendered in every built-in locale.
//!
//! Run with: cargo run --example locales

use currency_mask::{format_value, mask, FormatOptions, Locale};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let amounts = [0.0, 7.5, 1234.56, -98765.4];

    for locale in Locale::ALL {
        let options = FormatOptions::new("EUR").with_locale(locale);
        let rendered: Vec<String> = amounts
            .iter()
            .map(|&amount| format_value(amount, &options))
            .collect::<Result<_, _>>()?;
        println!("{:<6} {}", locale, rendered.join("  |  "));
    }

    // Mid-typing state: the separator was just typed.
    println!();
    for locale in [Locale::EN_US, Locale::DE_DE, Locale::PT_BR] {
        let options = FormatOptions::new("BRL").with_locale(locale);
        println!("{:<6} {}", locale, mask(1500.0, &options, true, 0)?);
    }

    // Explicit sign and fixed cents.
    println!();
    let options = FormatOptions::new("USD")
        .with_sign(true)
        .with_minimum_fraction_digits(2);
    println!("signed {}", format_value(42.0, &options)?);

    Ok(())
}
