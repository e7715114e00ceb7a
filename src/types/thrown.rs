//! The panic payload raised when an error is thrown, and how it renders.

use crate::macros::rail_event;
use crate::types::alloc_type::{String, Vec};
use crate::types::ThrowKind;
use core::fmt;
#[cfg(feature = "serde")]
use serde::Serialize;

/// An error converted into a panic: its mapped kind, the originating error kind's
/// name, the rendered description and every attached note.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thrown {
    kind: ThrowKind,
    error: &'static str,
    message: String,
    notes: Vec<String>,
}

impl Thrown {
    #[inline]
    pub fn new(kind: ThrowKind, error: &'static str, message: String, notes: Vec<String>) -> Self {
        Self { kind, error, message, notes }
    }

    #[inline]
    pub fn kind(&self) -> ThrowKind {
        self.kind
    }

    /// Name of the error kind that was thrown.
    #[inline]
    pub fn error(&self) -> &'static str {
        self.error
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Renders the message and notes according to `config`.
    #[must_use]
    pub fn render(&self, config: &ThrowFormatConfig) -> String {
        let mut out = String::with_capacity(self.message.len() + self.notes.len() * 16);
        if config.show_kind {
            out.push_str(self.kind.name());
            if config.show_error {
                out.push('(');
                out.push_str(self.error);
                out.push(')');
            }
            out.push_str(": ");
        }
        out.push_str(&self.message);
        for note in &self.notes {
            out.push_str(&config.note_separator);
            out.push_str(&config.note_prefix);
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = if f.alternate() { ThrowFormatConfig::verbose() } else { ThrowFormatConfig::default() };
        f.write_str(&self.render(&config))
    }
}

impl core::error::Error for Thrown {}

/// Controls how a [`Thrown`] message and its notes are laid out.
///
/// # Examples
///
/// ```
/// use exhaust_rail::{Thrown, ThrowFormatConfig, ThrowKind};
///
/// let thrown = Thrown::new(
///     ThrowKind::DivisionByZero,
///     "ZeroDivision",
///     "Cannot divide by zero".into(),
///     vec!["a".into(), "b".into()],
/// );
///
/// assert_eq!(thrown.render(&ThrowFormatConfig::compact()), "Cannot divide by zero | a | b");
/// assert_eq!(thrown.to_string(), "Cannot divide by zero\na\nb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowFormatConfig {
    pub show_kind: bool,
    /// Only used together with `show_kind`.
    pub show_error: bool,
    pub note_separator: String,
    pub note_prefix: String,
}

impl Default for ThrowFormatConfig {
    fn default() -> Self {
        Self { show_kind: false, show_error: false, note_separator: "\n".into(), note_prefix: String::new() }
    }
}

impl ThrowFormatConfig {
    #[inline]
    pub fn compact() -> Self {
        Self { note_separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn verbose() -> Self {
        Self { show_kind: true, show_error: true, note_prefix: "  note: ".into(), ..Default::default() }
    }
}

#[cold]
pub(crate) fn throw(thrown: Thrown) -> ! {
    rail_event!(
        warn,
        kind = thrown.kind.name(),
        error = thrown.error,
        notes = thrown.notes.len(),
        "throwing: {}",
        thrown.message
    );

    #[cfg(feature = "std")]
    {
        std::panic::panic_any(thrown)
    }
    #[cfg(not(feature = "std"))]
    {
        panic!("{thrown:#}")
    }
}

/// Runs `f`, turning a thrown error back into a value.
///
/// Panics that did not come from [`Error::throw`](crate::Error::throw) keep
/// unwinding. State captured by `f` may be observed half-updated after a throw.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::{safe_divide, ZeroDivision};
/// use exhaust_rail::{catch_thrown, ThrowKind};
///
/// let thrown = catch_thrown(|| safe_divide(1.0, 0.0).unwrap()).unwrap_err();
/// assert_eq!(thrown.kind(), ThrowKind::DivisionByZero);
/// assert_eq!(thrown.message(), "Cannot divide by zero");
///
/// assert_eq!(catch_thrown(|| safe_divide(1.0, 4.0).unwrap()), Ok(0.25));
/// ```
#[cfg(feature = "std")]
pub fn catch_thrown<F, R>(f: F) -> Result<R, Thrown>
where
    F: FnOnce() -> R,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Thrown>() {
            Ok(thrown) => Err(*thrown),
            Err(other) => std::panic::resume_unwind(other),
        },
    }
}

/// Installs a panic hook that prints [`Thrown`] payloads with their notes.
///
/// Other panics are forwarded to the hook that was active before. Calling this
/// more than once has no further effect.
#[cfg(feature = "std")]
pub fn install_panic_hook() {
    static INSTALLED: std::sync::Once = std::sync::Once::new();

    INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| match info.payload().downcast_ref::<Thrown>() {
            Some(thrown) => {
                let location = info.location().map(|l| format!(" at {l}")).unwrap_or_default();
                eprintln!("thrown{location}:\n{thrown:#}");
            }
            None => previous(info),
        }));
    });
}
