pub mod convert;
pub mod error;
pub mod fixtures;
pub mod types;

#[cfg(feature = "serde")]
pub mod serialization;
