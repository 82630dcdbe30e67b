//! Fields keyed by platform identity.
//!
//! A platform adapter typically masks many text inputs at once and looks them
//! up by a native view tag. [`FieldRegistry`] is that lookup table: it owns
//! each [`CurrencyField`] together with an optional [`FieldListener`] that is
//! told about every applied change.
//!
//! ## Examples
//!
//! ```rust
//! use currency_mask::{Edit, FieldId, FieldListener, FieldOptions, FieldRegistry};
//! use std::sync::mpsc;
//!
//! struct Forward(mpsc::Sender<f64>);
//!
//! impl FieldListener for Forward {
//!     fn text_changed(&mut self, _field: FieldId, _text: &str, value: f64) {
//!         let _ = self.0.send(value);
//!     }
//! }
//!
//! let (tx, rx) = mpsc::channel();
//! let mut registry = FieldRegistry::new();
//! registry
//!     .install(FieldId(7), FieldOptions::default(), "$1", Some(Box::new(Forward(tx))))
//!     .unwrap();
//!
//! registry.apply(FieldId(7), &Edit::insert(2, "5")).unwrap();
//! assert_eq!(rx.try_recv().unwrap(), 15.0);
//! ```

use crate::error::{Error, Result};
use crate::field::{CurrencyField, Edit, EditOutcome};
use crate::options::FieldOptions;
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// Identity of a field on the platform side, such as a native view tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receives notifications from a registered field.
pub trait FieldListener: Send {
    /// The field now shows `text`, worth `value`.
    fn text_changed(&mut self, field: FieldId, text: &str, value: f64);

    /// The field gained or lost focus.
    fn focus_changed(&mut self, _field: FieldId, _focused: bool) {}
}

struct Entry {
    field: CurrencyField,
    listener: Option<Box<dyn FieldListener>>,
}

/// Registered currency fields, in installation order.
#[derive(Default)]
pub struct FieldRegistry {
    entries: IndexMap<FieldId, Entry>,
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(id, entry)| (id, &entry.field)))
            .finish()
    }
}

impl FieldRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Masks the field `id`, which currently shows `text`.
    ///
    /// Installing over an existing id detaches the old field and its listener
    /// and returns the old field.
    ///
    /// # Errors
    ///
    /// Fails if `options` do not validate; the registry is left unchanged.
    pub fn install(
        &mut self,
        id: FieldId,
        options: FieldOptions,
        text: &str,
        listener: Option<Box<dyn FieldListener>>,
    ) -> Result<Option<CurrencyField>> {
        let field = CurrencyField::new(options, text)?;
        let previous = self.entries.insert(id, Entry { field, listener });
        if previous.is_some() {
            debug!(field = %id, "currency field replaced");
        } else {
            debug!(field = %id, "currency field installed");
        }
        Ok(previous.map(|entry| entry.field))
    }

    /// Applies an edit to field `id`, notifying its listener when the edit
    /// goes through.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if nothing is installed under `id`.
    pub fn apply(&mut self, id: FieldId, edit: &Edit) -> Result<EditOutcome> {
        let entry = self.entry_mut(id)?;
        let outcome = entry.field.apply(edit);
        if let (EditOutcome::Applied { text, value, .. }, Some(listener)) =
            (&outcome, entry.listener.as_mut())
        {
            listener.text_changed(id, text, *value);
        }
        Ok(outcome)
    }

    /// Reports a focus change on field `id`.
    ///
    /// Gaining focus fills an empty field with the zero amount (notifying
    /// the listener) and tidies the caret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if nothing is installed under `id`.
    pub fn focus(&mut self, id: FieldId, focused: bool) -> Result<()> {
        let entry = self.entry_mut(id)?;
        if focused {
            if let Some(text) = entry.field.focus() {
                let value = entry.field.value();
                if let Some(listener) = entry.listener.as_mut() {
                    listener.text_changed(id, &text, value);
                }
            }
        }
        if let Some(listener) = entry.listener.as_mut() {
            listener.focus_changed(id, focused);
        }
        Ok(())
    }

    /// Unregisters field `id`, returning it if it was installed.
    pub fn remove(&mut self, id: FieldId) -> Option<CurrencyField> {
        self.entries.shift_remove(&id).map(|entry| {
            debug!(field = %id, "currency field removed");
            entry.field
        })
    }

    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&CurrencyField> {
        self.entries.get(&id).map(|entry| &entry.field)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut CurrencyField> {
        self.entries.get_mut(&id).map(|entry| &mut entry.field)
    }

    #[must_use]
    pub fn contains(&self, id: FieldId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Installed ids in installation order.
    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries.keys().copied()
    }

    fn entry_mut(&mut self, id: FieldId) -> Result<&mut Entry> {
        self.entries.get_mut(&id).ok_or(Error::UnknownField(id.0))
    }
}
