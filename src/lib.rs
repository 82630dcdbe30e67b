//! # currency_mask
//!
//! Locale-aware masking for currency input fields.
//!
//! As the user types into a text field, each keystroke is turned back into an
//! amount, checked, and re-rendered as a localized currency string with the
//! caret kept right behind the digits. The crate holds no UI handles: platform
//! adapters pass text in and write the returned text and caret back to their
//! widget.
//!
//! ## Key Features
//!
//! - **Unmask**: recover the amount and partial-typing state from any text
//! - **Mask**: render amounts with the locale's symbol, grouping and sign,
//!   keeping a just-typed decimal separator visible
//! - **Caret policy**: keep the caret in front of trailing currency symbols
//! - **Admission control**: refuse a second separator, amounts over a
//!   maximum, and more than two fraction digits
//! - **Field adapters**: [`CurrencyField`] and [`FieldRegistry`] drive the
//!   whole keystroke cycle for platform text inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use currency_mask::{caret_position, mask, unmask, FormatOptions};
//!
//! let usd = FormatOptions::new("USD");
//!
//! // The user typed "5" at the end of "$1,234."
//! let typed = unmask("$1,234.5", &usd);
//! let text = mask(typed.value, &usd, typed.trailing_separator, typed.fraction_digits).unwrap();
//!
//! assert_eq!(text, "$1,234.5");
//! assert_eq!(caret_position(&text, &usd), 8);
//! ```
//!
//! ### Driving a field
//!
//! ```rust
//! use currency_mask::{CurrencyField, Edit, FieldOptions, FormatOptions, Locale};
//!
//! let options = FieldOptions::new(FormatOptions::new("EUR").with_locale(Locale::DE_DE))
//!     .with_max_value(10_000.0);
//! let mut field = CurrencyField::new(options, "").unwrap();
//! field.focus();
//!
//! for key in ["1", "2", "3", "4", ".", "5"] {
//!     let caret = field.caret();
//!     field.apply(&Edit::insert(caret, key));
//! }
//!
//! assert_eq!(field.text(), "1.234,5\u{a0}€");
//! assert_eq!(field.value(), 1234.5);
//! ```
//!
//! ## Offsets
//!
//! Caret indices and edit ranges are UTF-16 code units, the unit native text
//! fields report. See [`caret`] for conversions.
//!
//! ## Logging
//!
//! Rejected and reverted edits are reported through [`tracing`] at `debug`
//! level; applied edits at `trace`. No subscriber is installed by the crate.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`keystrokes.rs`** - A keystroke-by-keystroke session on one field
//! - **`locales.rs`** - The same amounts in every built-in locale
//!
//! Run any example with: `cargo run --example <name>`

pub mod caret;
pub mod currency;
pub mod error;
pub mod field;
pub mod format;
pub mod locale;
pub mod options;
pub mod policy;
pub mod registry;
pub mod unmask;

pub use caret::caret_position;
pub use currency::Currency;
pub use error::{Error, Rejection, Result};
pub use field::{CurrencyField, Edit, EditOutcome, Selection};
pub use format::{extract_value, format_value, mask, mask_text, CurrencyFormatter, MaskedText};
pub use locale::{Locale, SymbolPlacement};
pub use options::{FieldOptions, FormatOptions};
pub use policy::{should_allow_change, ChangePolicy};
pub use registry::{FieldId, FieldListener, FieldRegistry};
pub use unmask::{unmask, UnmaskResult};
