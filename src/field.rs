//! Per-field edit handling.
//!
//! [`CurrencyField`] is what a platform text-field adapter drives: it takes
//! each keystroke as an [`Edit`], decides whether to admit it, and produces
//! the masked text and caret the adapter writes back to its widget. It holds
//! plain strings only, never a handle to the widget itself.
//!
//! ## Examples
//!
//! ```rust
//! use currency_mask::{CurrencyField, Edit, EditOutcome, FieldOptions};
//!
//! let mut field = CurrencyField::new(FieldOptions::default(), "$12").unwrap();
//!
//! let outcome = field.apply(&Edit::insert(3, "."));
//! assert!(matches!(outcome, EditOutcome::Applied { .. }));
//! assert_eq!(field.text(), "$12.");
//! assert_eq!(field.caret(), 4);
//!
//! // A second separator is refused and nothing changes.
//! assert!(field.apply(&Edit::insert(4, ".")).is_rejected());
//! assert_eq!(field.text(), "$12.");
//! ```

use crate::caret::{byte_offset, caret_position, utf16_len};
use crate::error::{Error, Rejection, Result};
use crate::format::{format_value, mask};
use crate::options::FieldOptions;
use crate::policy::ChangePolicy;
use crate::unmask::unmask;
use tracing::{debug, trace};

/// A text replacement reported by a platform text field.
///
/// Offsets are UTF-16 code units into the text *before* the edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub removed: usize,
    pub inserted: String,
}

impl Edit {
    /// Replaces `removed` units starting at `start` with `inserted`, the
    /// shape of a "should change characters in range" callback.
    #[must_use]
    pub fn replace(start: usize, removed: usize, inserted: &str) -> Self {
        Edit {
            start,
            removed,
            inserted: inserted.to_string(),
        }
    }

    /// Inserts `inserted` at `start`.
    #[must_use]
    pub fn insert(start: usize, inserted: &str) -> Self {
        Edit::replace(start, 0, inserted)
    }

    /// Deletes `removed` units starting at `start`.
    #[must_use]
    pub fn delete(start: usize, removed: usize) -> Self {
        Edit::replace(start, removed, "")
    }

    /// Rebuilds an edit from an "on text changed" notification: `before`
    /// units at `start` were replaced by the `count` units found at `start`
    /// in `after_text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EditOutOfBounds`] if `start + count` is not a valid
    /// range of `after_text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currency_mask::Edit;
    ///
    /// let edit = Edit::from_text_change("$125", 3, 0, 1).unwrap();
    /// assert_eq!(edit, Edit::insert(3, "5"));
    /// ```
    pub fn from_text_change(
        after_text: &str,
        start: usize,
        before: usize,
        count: usize,
    ) -> Result<Self> {
        let out_of_bounds = || Error::edit_out_of_bounds(start, count, utf16_len(after_text));
        let from = byte_offset(after_text, start).ok_or_else(out_of_bounds)?;
        let to = start
            .checked_add(count)
            .and_then(|end| byte_offset(after_text, end))
            .ok_or_else(out_of_bounds)?;
        Ok(Edit::replace(start, before, &after_text[from..to]))
    }

    /// Applies the edit to `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EditOutOfBounds`] if the replaced range does not lie
    /// within `text`.
    pub fn apply_to(&self, text: &str) -> Result<String> {
        let out_of_bounds = || Error::edit_out_of_bounds(self.start, self.removed, utf16_len(text));
        let from = byte_offset(text, self.start).ok_or_else(out_of_bounds)?;
        let to = self
            .start
            .checked_add(self.removed)
            .and_then(|end| byte_offset(text, end))
            .ok_or_else(out_of_bounds)?;

        let mut out = String::with_capacity(text.len() - (to - from) + self.inserted.len());
        out.push_str(&text[..from]);
        out.push_str(&self.inserted);
        out.push_str(&text[to..]);
        Ok(out)
    }
}

/// The selected range of a field, in UTF-16 units. A collapsed selection is
/// a plain caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    #[must_use]
    pub const fn caret(at: usize) -> Self {
        Selection { start: at, end: at }
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// What happened to an edit.
#[derive(Clone, Debug, PartialEq)]
pub enum EditOutcome {
    /// The edit was masked; the adapter should write `text` and `caret` back.
    Applied {
        text: String,
        caret: usize,
        value: f64,
    },
    /// The change policy refused the edit. Text and caret are unchanged.
    Rejected(Rejection),
    /// Computing the edit failed. The pre-edit text stays and the caret is
    /// re-tidied.
    Reverted { caret: usize },
}

impl EditOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied { .. })
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, EditOutcome::Rejected(_))
    }
}

enum Step {
    Masked { text: String, value: f64 },
    Refused(Rejection),
}

/// A masked currency input field.
#[derive(Clone, Debug)]
pub struct CurrencyField {
    options: FieldOptions,
    policy: ChangePolicy,
    text: String,
    selection: Selection,
}

impl CurrencyField {
    /// Creates a field showing `initial_text`.
    ///
    /// The caret is placed after the amount, or the whole text is selected
    /// when `select_text_on_init` is set.
    ///
    /// # Errors
    ///
    /// Fails if the options do not validate, so a bad currency code surfaces
    /// here rather than on the first keystroke.
    pub fn new(options: FieldOptions, initial_text: &str) -> Result<Self> {
        options.validate()?;
        let policy = ChangePolicy::for_field(&options);
        let mut field = CurrencyField {
            options,
            policy,
            text: initial_text.to_string(),
            selection: Selection::caret(0),
        };
        field.tidy_caret();
        if field.options.select_text_on_init {
            field.selection = Selection {
                start: 0,
                end: utf16_len(&field.text),
            };
        }
        Ok(field)
    }

    /// Creates a field showing `value`.
    ///
    /// # Errors
    ///
    /// Fails if the options do not validate or `value` is not finite.
    pub fn with_value(options: FieldOptions, value: f64) -> Result<Self> {
        let text = format_value(value, &options.format)?;
        CurrencyField::new(options, &text)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position, the end of the selection when a range is selected.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.selection.end
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The amount the field currently shows.
    #[must_use]
    pub fn value(&self) -> f64 {
        unmask(&self.text, &self.options.format).value
    }

    #[must_use]
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Applies a keystroke.
    ///
    /// A typed `.`, `,` or `-` stands for the decimal separator. The edited
    /// text is unmasked, checked against the change policy and re-masked.
    /// Failures while computing the result never escape: the field keeps its
    /// pre-edit text and reports [`EditOutcome::Reverted`].
    pub fn apply(&mut self, edit: &Edit) -> EditOutcome {
        match self.compute(edit) {
            Ok(Step::Masked { text, value }) => {
                let caret = caret_position(&text, &self.options.format);
                trace!(text = %text, caret, value, "edit applied");
                self.text = text.clone();
                self.selection = Selection::caret(caret);
                EditOutcome::Applied { text, caret, value }
            }
            Ok(Step::Refused(rejection)) => {
                debug!(
                    inserted = %edit.inserted,
                    text = %self.text,
                    reason = %rejection,
                    "edit rejected"
                );
                EditOutcome::Rejected(rejection)
            }
            Err(err) => {
                debug!(error = %err, text = %self.text, "edit reverted");
                self.tidy_caret();
                EditOutcome::Reverted {
                    caret: self.caret(),
                }
            }
        }
    }

    fn compute(&self, edit: &Edit) -> Result<Step> {
        let symbol = self.policy.normalize_symbol(&edit.inserted);
        let normalized = Edit::replace(edit.start, edit.removed, &symbol);
        let updated = normalized.apply_to(&self.text)?;

        // A pasted separator slips past the single-keystroke check; two
        // separators would otherwise unmask to zero.
        let separator = self.options.format.decimal_separator();
        if updated.matches(separator).count() > 1 {
            return Ok(Step::Refused(Rejection::DuplicateSeparator));
        }

        let unmasked = unmask(&updated, &self.options.format);
        if let Err(rejection) = self.policy.check(&symbol, &self.text, unmasked.value) {
            return Ok(Step::Refused(rejection));
        }

        let text = mask(
            unmasked.value,
            &self.options.format,
            unmasked.trailing_separator,
            unmasked.fraction_digits,
        )?;
        // The formatter may round, so report what the text shows.
        let value = unmask(&text, &self.options.format).value;
        Ok(Step::Masked { text, value })
    }

    /// Handles the field gaining focus. An empty field is filled with the
    /// zero amount so there is something to type into.
    ///
    /// Returns the new text when it changed.
    pub fn focus(&mut self) -> Option<String> {
        let mut filled = None;
        if self.text.is_empty() {
            match format_value(0.0, &self.options.format) {
                Ok(zero) => {
                    self.text = zero.clone();
                    filled = Some(zero);
                }
                Err(err) => debug!(error = %err, "could not format zero amount"),
            }
        }
        self.tidy_caret();
        filled
    }

    /// Handles a touch on the field: the caret snaps back behind the amount.
    pub fn touch(&mut self) {
        self.tidy_caret();
    }

    /// Adopts text written to the widget from outside, for example a new
    /// value pushed down from application state.
    ///
    /// Text identical to the field's own is an echo of its last write-back
    /// and is ignored. Returns whether the text was adopted.
    pub fn sync_text(&mut self, text: &str) -> bool {
        if text == self.text {
            return false;
        }
        self.text = text.to_string();
        self.tidy_caret();
        true
    }

    fn tidy_caret(&mut self) {
        let caret = caret_position(&self.text, &self.options.format);
        self.selection = Selection::caret(caret);
    }
}
