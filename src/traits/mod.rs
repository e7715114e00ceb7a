//! Core traits for declaring errors and moving values onto the rail.
//!
//! - [`Error`]: The object-safe base every error kind implements
//! - [`ErrorKind`]: A kind with a statically known [`ErrorSchema`](crate::ErrorSchema)
//! - [`UnitKind`]: A zero-argument kind that can be instantiated implicitly
//! - [`ResultExt`] / [`OptionExt`]: Conversions from standard types into [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::builtin::ZeroDivision;
//! use exhaust_rail::traits::{Error, ErrorKind, UnitKind};
//!
//! let err = ZeroDivision::instance();
//! assert_eq!(err.kind_name(), ZeroDivision::SCHEMA.name);
//! assert_eq!(err.into_any().description(), "Cannot divide by zero");
//! ```

pub mod error;
pub mod error_kind;
pub mod outcome_ext;

pub use error::Error;
pub use error_kind::{ErrorKind, UnitKind};
pub use outcome_ext::{OptionExt, ResultExt};
