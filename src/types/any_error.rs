//! Dynamically built errors validated against a runtime-supplied schema.

use crate::traits::{Error, ErrorKind};
use crate::types::alloc_type::String;
use crate::types::{ArgList, ArgValue, ErrorMeta, ErrorSchema, ErrorVec, InvalidArgument};
use core::fmt;

/// An error of any kind, holding its schema by reference and its arguments as
/// [`ArgValue`]s in declaration order.
///
/// Two `AnyError`s are equal when their schemas, arguments and description
/// overrides are equal. Notes never take part in the comparison.
///
/// # Examples
///
/// ```
/// use exhaust_rail::{AnyError, Error, ErrorSchema, InvalidArgument, ThrowKind};
///
/// static WITH_ARGS: ErrorSchema =
///     ErrorSchema::new("ErrorWithArgs", "{a},{b}:", ThrowKind::InvalidValue, &["a", "b"]);
///
/// let err = AnyError::builder(&WITH_ARGS).arg("a", 1).arg("b", 2.0).finish().unwrap();
/// assert_eq!(err.description(), "1,2.0:");
///
/// let bad = AnyError::builder(&WITH_ARGS).arg("a", 1).arg("c", 3).finish();
/// assert!(matches!(bad, Err(InvalidArgument::Undeclared { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyError {
    schema: &'static ErrorSchema,
    arguments: ErrorVec<(&'static str, ArgValue)>,
    meta: ErrorMeta,
}

impl AnyError {
    /// Validates `args` against `schema` and builds the error.
    ///
    /// The schema itself is checked with [`ErrorSchema::verify`] first, since a
    /// runtime schema has had no other chance to be validated.
    pub fn from_arguments(schema: &'static ErrorSchema, args: ArgList) -> Result<Self, InvalidArgument> {
        schema.check_schema()?;
        schema.check_arguments(args.iter().map(|(name, _)| name.as_str()))?;

        let mut arguments: ErrorVec<(&'static str, ArgValue)> =
            schema.fields.iter().map(|field| (*field, ArgValue::Unit)).collect();
        for (name, value) in args {
            if let Some((index, _)) = schema.field(&name) {
                arguments[index].1 = value;
            }
        }

        Ok(Self { schema, arguments, meta: ErrorMeta::new() })
    }

    /// Builds an instance of a kind that takes no arguments.
    pub fn unit(schema: &'static ErrorSchema) -> Result<Self, InvalidArgument> {
        Self::from_arguments(schema, ArgList::new())
    }

    #[inline]
    pub fn builder(schema: &'static ErrorSchema) -> ErrorBuilder {
        ErrorBuilder { schema, args: ArgList::new(), meta: ErrorMeta::new() }
    }

    /// Erases a statically typed kind.
    pub fn erase<K: ErrorKind>(error: K) -> Self {
        let schema = error.schema();
        let arguments = schema
            .fields
            .iter()
            .map(|field| (*field, error.argument(field).unwrap_or_default()))
            .collect();
        Self { schema, arguments, meta: error.meta().clone() }
    }

    /// Whether this error was built from `K`'s schema.
    #[inline]
    #[must_use]
    pub fn is<K: ErrorKind>(&self) -> bool {
        *self.schema == K::SCHEMA
    }

    /// Recovers the typed kind, or hands `self` back when it is a different kind.
    pub fn downcast<K: ErrorKind>(self) -> Result<K, Self> {
        if !self.is::<K>() {
            return Err(self);
        }
        let args: ArgList =
            self.arguments.iter().map(|(name, value)| (String::from(*name), value.clone())).collect();
        match K::from_arguments(args) {
            Ok(mut typed) => {
                *typed.meta_mut() = self.meta;
                Ok(typed)
            }
            Err(_) => Err(self),
        }
    }

    /// Sets the description that replaces the template, see [`ErrorMeta::described`].
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.set_description(description);
        self
    }
}

impl Error for AnyError {
    #[inline]
    fn schema(&self) -> &'static ErrorSchema {
        self.schema
    }

    fn argument(&self, name: &str) -> Option<ArgValue> {
        self.arguments.iter().find(|(field, _)| *field == name).map(|(_, value)| value.clone())
    }

    #[inline]
    fn meta(&self) -> &ErrorMeta {
        &self.meta
    }

    #[inline]
    fn meta_mut(&mut self) -> &mut ErrorMeta {
        &mut self.meta
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl core::error::Error for AnyError {}

/// Incremental construction of an [`AnyError`].
#[must_use]
#[derive(Debug, Clone)]
pub struct ErrorBuilder {
    schema: &'static ErrorSchema,
    args: ArgList,
    meta: ErrorMeta,
}

impl ErrorBuilder {
    #[inline]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[inline]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.meta.set_description(description);
        self
    }

    #[inline]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.meta.push_note(note);
        self
    }

    /// Validates the collected arguments and builds the error.
    pub fn finish(self) -> Result<AnyError, InvalidArgument> {
        let mut error = AnyError::from_arguments(self.schema, self.args)?;
        error.meta = self.meta;
        Ok(error)
    }

    /// Fail-fast form of [`finish`](ErrorBuilder::finish).
    ///
    /// # Panics
    ///
    /// Panics when the arguments do not match the schema.
    pub fn build(self) -> AnyError {
        match self.finish() {
            Ok(error) => error,
            Err(problem) => panic!("invalid error arguments: {problem}"),
        }
    }
}

impl<K: ErrorKind> From<K> for AnyError {
    #[inline]
    fn from(error: K) -> Self {
        Self::erase(error)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::AnyError;
    use crate::traits::Error;
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    struct Arguments<'a>(&'a [(&'static str, crate::ArgValue)]);

    impl Serialize for Arguments<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.0.iter().map(|(name, value)| (*name, value)))
        }
    }

    impl Serialize for AnyError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("AnyError", 5)?;
            state.serialize_field("kind", self.kind_name())?;
            state.serialize_field("throws", &self.throw_kind())?;
            state.serialize_field("description", &self.description())?;
            state.serialize_field("arguments", &Arguments(&self.arguments))?;
            state.serialize_field("notes", self.notes())?;
            state.end()
        }
    }
}
