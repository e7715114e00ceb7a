//! Value types: error schemas and arguments, the dynamic [`AnyError`], the
//! [`Outcome`] container and the [`Thrown`] panic payload.
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::{AnyError, Error, ErrorSchema, Outcome, ThrowKind};
//!
//! static REJECTED: ErrorSchema =
//!     ErrorSchema::new("Rejected", "request {id} rejected", ThrowKind::InvalidValue, &["id"]);
//!
//! let err = AnyError::builder(&REJECTED).arg("id", 7).note("quota exceeded").build();
//! let out: Outcome<(), AnyError> = Outcome::Err(err);
//!
//! assert_eq!(out.to_string(), "Err(request 7 rejected)");
//! ```
use smallvec::SmallVec;

#[doc(hidden)]
pub mod alloc_type;
pub mod any_error;
pub mod arg_value;
pub mod meta;
pub mod outcome;
pub mod schema;
pub mod template;
pub mod thrown;

pub use any_error::{AnyError, ErrorBuilder};
pub use arg_value::{ArgList, ArgTypeError, ArgValue, FromArg};
pub use meta::{ErrorMeta, Notes};
pub use outcome::{Outcome, UnitOutcome};
pub use schema::{ErrorSchema, InvalidArgument, SchemaError, ThrowKind};
pub use template::TemplateError;
#[cfg(feature = "std")]
pub use thrown::{catch_thrown, install_panic_hook};
pub use thrown::{ThrowFormatConfig, Thrown};

/// SmallVec-backed collection used for notes and argument lists.
///
/// Uses inline storage for one element, the common case for both.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
