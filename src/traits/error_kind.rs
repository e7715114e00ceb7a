use crate::traits::Error;
use crate::types::{AnyError, ArgList, ErrorSchema, FromArg, InvalidArgument};

/// An error kind with a statically known schema.
///
/// Implemented by every struct produced by [`declare_error!`](crate::declare_error).
pub trait ErrorKind: Error + Sized {
    const SCHEMA: ErrorSchema;

    /// Builds an instance from named arguments, validated against [`Self::SCHEMA`].
    fn from_arguments(args: ArgList) -> Result<Self, InvalidArgument>;

    /// Erases the concrete kind, keeping arguments and notes.
    #[inline]
    fn into_any(self) -> AnyError {
        AnyError::erase(self)
    }
}

/// A kind that takes no arguments and can therefore be instantiated implicitly.
///
/// Backs [`Outcome::err_kind`](crate::Outcome::err_kind), the `Err(SomeKind)` shorthand.
pub trait UnitKind: ErrorKind {
    fn instance() -> Self;
}

/// Removes `field` from `args` and converts it to `T`.
///
/// Support code for [`declare_error!`](crate::declare_error); `args` is expected to
/// have passed [`ErrorSchema::check_arguments`] already.
#[doc(hidden)]
pub fn take_argument<T: FromArg>(
    schema: &ErrorSchema,
    args: &mut ArgList,
    field: &'static str,
) -> Result<T, InvalidArgument> {
    let index = args
        .iter()
        .position(|(name, _)| name == field)
        .ok_or(InvalidArgument::Missing { kind: schema.name, name: field })?;
    let (_, value) = args.swap_remove(index);
    T::from_arg(value).map_err(|mismatch| InvalidArgument::TypeMismatch {
        kind: schema.name,
        name: field,
        expected: mismatch.expected,
        found: mismatch.found,
    })
}
