//! Railway-style composition over sequences of outcomes.
//!
//! - [`lift_all`] wraps plain values in `Ok`.
//! - [`map_chain`] runs every item of a source through fallible stages, one
//!   outcome per item.
//! - [`reduce`] and [`all_ok`] fold outcomes that already exist.
//! - [`chain_calls`] and [`run_all`] fold thunks, calling each only when its turn
//!   comes.
//!
//! Every fold stops at the first `Err` and returns it untouched. None of them retry.
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::builtin::{safe_divide, ZeroDivision};
//! use exhaust_rail::compose::{lift_all, map_chain, reduce};
//! use exhaust_rail::Outcome;
//!
//! let halves = map_chain([2.0, 4.0], |x| safe_divide(x, 2.0));
//! assert_eq!(reduce(halves, 0.0, |acc, x| acc + x), Outcome::Ok(3.0));
//!
//! let lifted = lift_all::<_, ZeroDivision>([1.0, 2.0]);
//! assert_eq!(reduce(lifted, 0.0, |acc, x| acc + x), Outcome::Ok(3.0));
//! ```

mod fold;
mod lift;
mod map_chain;

pub use fold::{all_ok, chain_calls, reduce, run_all, OutcomeIterExt, Thunk};
pub use lift::{lift_all, LiftAll};
pub use map_chain::{map_chain, MapChain};
