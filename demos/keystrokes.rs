//! Typing into a masked field, one keystroke at a time.
//!
//! Run with: cargo run --example keystrokes

use currency_mask::{CurrencyField, Edit, EditOutcome, FieldOptions, FormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = FieldOptions::new(FormatOptions::new("USD")).with_max_value(10_000.0);
    let mut field = CurrencyField::new(options, "")?;

    if let Some(text) = field.focus() {
        println!("focus        -> {:<12} caret {}", text, field.caret());
    }

    // "," stands in for the decimal separator. The second separator and any
    // third fraction digit are refused.
    for key in ["1", "2", "3", ",", "4", ".", "5", "6", "9"] {
        let caret = field.caret();
        match field.apply(&Edit::insert(caret, key)) {
            EditOutcome::Applied { text, caret, value } => {
                println!("type {:<7} -> {:<12} caret {} value {}", key, text, caret, value);
            }
            EditOutcome::Rejected(reason) => {
                println!("type {:<7} -> rejected: {}", key, reason);
            }
            EditOutcome::Reverted { caret } => {
                println!("type {:<7} -> reverted, caret {}", key, caret);
            }
        }
    }

    let caret = field.caret();
    field.apply(&Edit::delete(caret.saturating_sub(1), 1));
    println!("backspace    -> {:<12} caret {}", field.text(), field.caret());

    Ok(())
}
