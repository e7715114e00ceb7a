//! Static declarations shared by every instance of an error kind.

use crate::types::alloc_type::String;
use crate::types::template::{self, TemplateError};
use core::fmt;
#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::SmallVec;

/// The panic flavour an error kind is converted into when thrown.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThrowKind {
    #[default]
    Generic,
    InvalidValue,
    InvalidArgument,
    DivisionByZero,
    Overflow,
    MissingKey,
    OutOfRange,
    Runtime,
    Custom(&'static str),
}

impl ThrowKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Generic => "Generic",
            Self::InvalidValue => "InvalidValue",
            Self::InvalidArgument => "InvalidArgument",
            Self::DivisionByZero => "DivisionByZero",
            Self::Overflow => "Overflow",
            Self::MissingKey => "MissingKey",
            Self::OutOfRange => "OutOfRange",
            Self::Runtime => "Runtime",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ThrowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declaration of an error kind: its name, description template, thrown flavour
/// and the ordered set of argument names it accepts.
///
/// # Examples
///
/// ```
/// use exhaust_rail::{ErrorSchema, ThrowKind};
///
/// const BAD_KEY: ErrorSchema = ErrorSchema::new(
///     "BadKey",
///     "Mapping {mapping} has no key {key}",
///     ThrowKind::MissingKey,
///     &["mapping", "key"],
/// );
///
/// assert!(BAD_KEY.verify().is_ok());
/// assert!(BAD_KEY.check_arguments(["key"]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorSchema {
    pub name: &'static str,
    pub template: &'static str,
    pub throws: ThrowKind,
    pub fields: &'static [&'static str],
}

impl ErrorSchema {
    #[must_use]
    pub const fn new(
        name: &'static str,
        template: &'static str,
        throws: ThrowKind,
        fields: &'static [&'static str],
    ) -> Self {
        Self { name, template, throws, fields }
    }

    /// A kind that takes no arguments.
    #[must_use]
    pub const fn unit(name: &'static str, template: &'static str, throws: ThrowKind) -> Self {
        Self { name, template, throws, fields: &[] }
    }

    #[inline]
    #[must_use]
    pub const fn is_unit(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a declared field, returning its `'static` name and position.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &'static str)> {
        self.fields.iter().copied().enumerate().find(|(_, f)| *f == name)
    }

    /// Checks that the template parses and references exactly the declared fields.
    pub fn verify(&self) -> Result<(), SchemaError> {
        let mut referenced: SmallVec<[bool; 8]> = SmallVec::from_elem(false, self.fields.len());

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].contains(field) {
                return Err(SchemaError::DuplicateField(*field));
            }
        }

        for name in template::placeholders(self.template) {
            let name = name.map_err(SchemaError::Template)?;
            match self.field(name) {
                Some((index, _)) => referenced[index] = true,
                None => return Err(SchemaError::Undeclared(name.into())),
            }
        }

        match referenced.iter().position(|seen| !seen) {
            Some(index) => Err(SchemaError::Unused(self.fields[index])),
            None => Ok(()),
        }
    }

    /// [`verify`](Self::verify), reported as the [`InvalidArgument::Schema`] a
    /// constructor returns.
    #[inline]
    pub fn check_schema(&self) -> Result<(), InvalidArgument> {
        self.verify().map_err(|problem| InvalidArgument::Schema { kind: self.name, problem })
    }

    /// Validates a set of supplied argument names against the declared fields.
    pub fn check_arguments<'n, I>(&self, names: I) -> Result<(), InvalidArgument>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut seen: SmallVec<[bool; 8]> = SmallVec::from_elem(false, self.fields.len());

        for name in names {
            if self.is_unit() {
                return Err(InvalidArgument::Unexpected { kind: self.name, name: name.into() });
            }
            match self.field(name) {
                Some((index, field)) if seen[index] => {
                    return Err(InvalidArgument::Duplicate { kind: self.name, name: field });
                }
                Some((index, _)) => seen[index] = true,
                None => {
                    return Err(InvalidArgument::Undeclared { kind: self.name, name: name.into() });
                }
            }
        }

        match seen.iter().position(|s| !s) {
            Some(index) => Err(InvalidArgument::Missing { kind: self.name, name: self.fields[index] }),
            None => Ok(()),
        }
    }
}

/// A schema whose template and field list disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    Template(TemplateError),
    /// The template references a name that is not a declared field.
    Undeclared(String),
    /// A declared field never appears in the template.
    Unused(&'static str),
    DuplicateField(&'static str),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "malformed template: {e}"),
            Self::Undeclared(name) => write!(f, "template references undeclared argument `{name}`"),
            Self::Unused(name) => write!(f, "declared argument `{name}` is not used by the template"),
            Self::DuplicateField(name) => write!(f, "argument `{name}` is declared twice"),
        }
    }
}

impl core::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            _ => None,
        }
    }
}

/// Arguments supplied to an error kind did not match its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// An argument was given to a kind that accepts none.
    Unexpected { kind: &'static str, name: String },
    Undeclared { kind: &'static str, name: String },
    Duplicate { kind: &'static str, name: &'static str },
    Missing { kind: &'static str, name: &'static str },
    TypeMismatch { kind: &'static str, name: &'static str, expected: &'static str, found: &'static str },
    Schema { kind: &'static str, problem: SchemaError },
}

impl InvalidArgument {
    /// Name of the error kind the arguments were meant for.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unexpected { kind, .. }
            | Self::Undeclared { kind, .. }
            | Self::Duplicate { kind, .. }
            | Self::Missing { kind, .. }
            | Self::TypeMismatch { kind, .. }
            | Self::Schema { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unexpected { kind, name } => {
                write!(f, "{kind} takes no arguments, got `{name}`")
            }
            Self::Undeclared { kind, name } => {
                write!(f, "{kind} has no argument named `{name}`")
            }
            Self::Duplicate { kind, name } => write!(f, "{kind}: argument `{name}` given twice"),
            Self::Missing { kind, name } => write!(f, "{kind}: missing argument `{name}`"),
            Self::TypeMismatch { kind, name, expected, found } => {
                write!(f, "{kind}: argument `{name}` expected {expected}, found {found}")
            }
            Self::Schema { kind, problem } => write!(f, "{kind}: {problem}"),
        }
    }
}

impl core::error::Error for InvalidArgument {}
