//! Typed, railway-oriented error handling built around [`Outcome`].
//!
//! Fallible functions return `Outcome<V, E>` where `E` is a declared error kind,
//! or a union of kinds, instead of panicking. Every kind carries a description
//! template, a fixed set of named arguments and the [`ThrowKind`] it maps to when
//! thrown. Callers match both variants exhaustively, and the only way back to
//! panicking control flow is an explicit [`Outcome::unwrap`] or [`Error::throw`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `exhaust_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Declaring and handling errors
//!
//! ```
//! use exhaust_rail::{declare_error, Error, Outcome, ThrowKind};
//!
//! declare_error! {
//!     pub struct UnknownUser {
//!         description: "no user with id {id}",
//!         throws: ThrowKind::MissingKey,
//!         args: { id: u64 },
//!     }
//! }
//!
//! fn find_user(id: u64) -> Outcome<&'static str, UnknownUser> {
//!     match id {
//!         1 => Outcome::Ok("ada"),
//!         _ => Outcome::Err(UnknownUser::new(id)),
//!     }
//! }
//!
//! match find_user(7) {
//!     Outcome::Ok(name) => println!("hello {name}"),
//!     Outcome::Err(err) => assert_eq!(err.description(), "no user with id 7"),
//! }
//! ```
//!
//! ## Composing fallible steps
//!
//! ```
//! use exhaust_rail::builtin::{safe_divide, ZeroDivision};
//! use exhaust_rail::{map_chain, Outcome};
//!
//! fn invert(x: f64) -> Outcome<f64, ZeroDivision> {
//!     safe_divide(1.0, x)
//! }
//!
//! let out: Vec<_> = map_chain!([0.0, 1.0, 2.0, 4.0], invert).collect();
//! assert!(out[0].is_err());
//! assert_eq!(out[1..], [Outcome::Ok(1.0), Outcome::Ok(0.5), Outcome::Ok(0.25)]);
//! ```
//!
//! ## Throwing at a trust boundary
//!
//! ```
//! use exhaust_rail::builtin::safe_divide;
//! use exhaust_rail::{catch_thrown, ThrowKind};
//!
//! let thrown = catch_thrown(|| safe_divide(1.0, 0.0).with_notes(["a", "b"]).unwrap()).unwrap_err();
//! assert_eq!(thrown.kind(), ThrowKind::DivisionByZero);
//! assert_eq!(thrown.notes(), ["a", "b"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Railway variants of primitive operations that can fail
pub mod builtin;
/// Folds and lazy stage chains over outcomes
pub mod compose;
/// Conversions between Outcome, Result and AnyError
pub mod convert;
/// Macros for declaring error kinds and chaining fallible calls
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for declaring errors
pub mod traits;
/// Error schemas, arguments, outcomes and thrown payloads
pub mod types;

pub use traits::{Error, ErrorKind, OptionExt, ResultExt, UnitKind};
#[cfg(feature = "std")]
pub use types::{catch_thrown, install_panic_hook};
pub use types::{
    AnyError, ArgList, ArgTypeError, ArgValue, ErrorBuilder, ErrorMeta, ErrorSchema, ErrorVec,
    FromArg, InvalidArgument, Notes, Outcome, SchemaError, TemplateError, ThrowFormatConfig,
    ThrowKind, Thrown, UnitOutcome,
};
