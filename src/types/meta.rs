//! Per-instance state every error kind carries besides its declared arguments.

use crate::types::alloc_type::String;
use crate::types::ErrorVec;
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Append-only list of free-text notes attached to an error.
pub type Notes = ErrorVec<String>;

/// Notes and an optional description override.
///
/// Equality and hashing only look at the description override, so a kind that
/// embeds `ErrorMeta` can derive `PartialEq` and still compare independently of
/// its notes.
///
/// # Examples
///
/// ```
/// use exhaust_rail::ErrorMeta;
///
/// let mut a = ErrorMeta::new();
/// a.push_note("retry later");
/// assert_eq!(a, ErrorMeta::new());
/// assert_ne!(ErrorMeta::new().described("custom"), ErrorMeta::new());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ErrorMeta {
    notes: Notes,
    description: Option<String>,
}

impl ErrorMeta {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { notes: Notes::new(), description: None }
    }

    /// Sets the instance description that replaces the kind's template.
    #[inline]
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    #[inline]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    #[inline]
    pub fn push_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    #[inline]
    pub fn extend_notes<I, S>(&mut self, notes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes.extend(notes.into_iter().map(Into::into));
    }
}

impl PartialEq for ErrorMeta {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for ErrorMeta {}

impl Hash for ErrorMeta {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
    }
}
