//! The base abstraction every error kind implements.

use crate::types::alloc_type::{Box, String, ToOwned, Vec};
use crate::types::template::{self, TemplateError};
use crate::types::thrown::{self, Thrown};
use crate::types::{ArgValue, ErrorMeta, ErrorSchema, ThrowKind};
use core::fmt::Debug;

/// A structured, described failure value.
///
/// Implementors expose their static [`ErrorSchema`], a way to read each declared
/// argument, and the per-instance [`ErrorMeta`]. Everything else, including
/// [`description`](Error::description) and [`throw`](Error::throw), is provided.
///
/// Kinds are normally declared with [`declare_error!`](crate::declare_error) rather
/// than by implementing this trait by hand.
///
/// # Examples
///
/// ```
/// use exhaust_rail::{declare_error, Error, ThrowKind};
///
/// declare_error! {
///     pub struct Timeout {
///         description: "{service} did not answer within {millis}ms",
///         throws: ThrowKind::Runtime,
///         args: { service: String, millis: u64 },
///     }
/// }
///
/// let mut err = Timeout::new("billing".to_string(), 250);
/// err.add_notes(["first attempt"]);
///
/// assert_eq!(err.description(), "billing did not answer within 250ms");
/// assert_eq!(err.notes(), ["first attempt"]);
/// assert_eq!(err, Timeout::new("billing".to_string(), 250));
/// ```
pub trait Error: Debug {
    /// The kind's static declaration.
    fn schema(&self) -> &'static ErrorSchema;

    /// Reads a declared argument by name. Returns `None` for undeclared names.
    fn argument(&self, name: &str) -> Option<ArgValue>;

    fn meta(&self) -> &ErrorMeta;

    fn meta_mut(&mut self) -> &mut ErrorMeta;

    #[inline]
    fn kind_name(&self) -> &'static str {
        self.schema().name
    }

    #[inline]
    fn throw_kind(&self) -> ThrowKind {
        self.schema().throws
    }

    /// All declared arguments with their values, in declaration order.
    fn arguments(&self) -> Vec<(&'static str, ArgValue)> {
        self.schema()
            .fields
            .iter()
            .filter_map(|field| self.argument(field).map(|value| (*field, value)))
            .collect()
    }

    /// Renders the description without panicking.
    ///
    /// An instance description set through [`ErrorMeta::set_description`] wins over
    /// the kind's template.
    fn try_description(&self) -> Result<String, TemplateError> {
        if let Some(custom) = self.meta().description() {
            return Ok(custom.to_owned());
        }
        template::render(self.schema().template, |name| self.argument(name))
    }

    /// The description with every placeholder filled in from the arguments.
    ///
    /// # Panics
    ///
    /// Panics if the template references an argument the kind cannot provide.
    /// That is a defect in the kind's declaration, see [`ErrorSchema::verify`].
    fn description(&self) -> String {
        match self.try_description() {
            Ok(description) => description,
            Err(problem) => panic!("cannot describe {}: {problem}", self.kind_name()),
        }
    }

    /// Notes in the order they were added.
    #[inline]
    fn notes(&self) -> &[String] {
        self.meta().notes()
    }

    #[inline]
    fn add_note(&mut self, note: impl Into<String>)
    where
        Self: Sized,
    {
        self.meta_mut().push_note(note);
    }

    /// Appends notes, preserving their order. The description is unaffected.
    #[inline]
    fn add_notes<I, S>(&mut self, notes: I)
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta_mut().extend_notes(notes);
    }

    /// Snapshot of what [`throw`](Error::throw) would raise.
    fn to_thrown(&self) -> Thrown {
        Thrown::new(self.throw_kind(), self.kind_name(), self.description(), self.notes().to_vec())
    }

    /// Converts this error into its mapped panic and never returns.
    ///
    /// With the `std` feature the panic payload is a [`Thrown`], recoverable at a
    /// trust boundary through [`catch_thrown`](crate::catch_thrown).
    fn throw(self) -> !
    where
        Self: Sized,
    {
        thrown::throw(self.to_thrown())
    }
}

impl<E: Error + ?Sized> Error for Box<E> {
    #[inline]
    fn schema(&self) -> &'static ErrorSchema {
        (**self).schema()
    }

    #[inline]
    fn argument(&self, name: &str) -> Option<ArgValue> {
        (**self).argument(name)
    }

    #[inline]
    fn meta(&self) -> &ErrorMeta {
        (**self).meta()
    }

    #[inline]
    fn meta_mut(&mut self) -> &mut ErrorMeta {
        (**self).meta_mut()
    }
}
