//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use exhaust_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`declare_error!`], [`error_union!`], [`map_chain!`], [`chain_calls!`]
//! - **Types**: [`Outcome`], [`UnitOutcome`], [`AnyError`], [`ThrowKind`]
//! - **Traits**: [`Error`], [`ErrorKind`], [`UnitKind`], [`ResultExt`], [`OptionExt`], [`OutcomeIterExt`]
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::prelude::*;
//!
//! declare_error! {
//!     pub struct EmptyInput {
//!         description: "input was empty",
//!         throws: ThrowKind::InvalidValue,
//!     }
//! }
//!
//! fn first_word(line: &str) -> Outcome<&str, EmptyInput> {
//!     line.split_whitespace().next().ok_or_kind()
//! }
//!
//! let checked = ["hello world", "   "].into_iter().map(first_word).all_ok();
//! assert!(checked.is_err());
//! ```

pub use crate::{chain_calls, declare_error, error_union, map_chain};

pub use crate::compose::OutcomeIterExt;
pub use crate::traits::{Error, ErrorKind, OptionExt, ResultExt, UnitKind};
pub use crate::types::{AnyError, Outcome, ThrowKind, UnitOutcome};
