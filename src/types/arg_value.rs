//! Dynamically typed argument values carried by error kinds.
//!
//! Every declared argument of an error kind is readable as an [`ArgValue`], which is
//! what description templates are rendered from and what [`AnyError`](crate::AnyError)
//! stores. Typed kinds convert their fields in with `From` and back out with [`FromArg`].

use crate::types::alloc_type::{String, ToOwned, ToString};
use crate::types::ErrorVec;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Argument list supplied when building an error from named values.
pub type ArgList = ErrorVec<(String, ArgValue)>;

/// A single argument value.
///
/// # Examples
///
/// ```
/// use exhaust_rail::ArgValue;
///
/// assert_eq!(ArgValue::from(3).to_string(), "3");
/// assert_eq!(ArgValue::from(2.0).to_string(), "2.0");
/// assert_eq!(ArgValue::from("key").to_string(), "key");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub enum ArgValue {
    #[default]
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl ArgValue {
    /// Short name of the variant, used in type mismatch reports.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
        }
    }

    /// Returns the string payload, if this is a [`ArgValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            // Debug keeps the fractional part: `2.0` rather than `2`.
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Bit pattern floats are compared and hashed by: zeros collapse to `+0.0` and
/// every NaN to one canonical NaN, so equality stays reflexive.
#[inline]
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for ArgValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ArgValue {}

impl core::hash::Hash for ArgValue {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Unit => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::UInt(u) => u.hash(state),
            Self::Float(x) => canonical_bits(*x).hash(state),
            Self::Str(s) => s.hash(state),
        }
    }
}

macro_rules! arg_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for ArgValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

arg_from! {
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
    String => Str as String,
}

impl From<()> for ArgValue {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Unit
    }
}

impl From<&str> for ArgValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<usize> for ArgValue {
    #[inline]
    fn from(value: usize) -> Self {
        match u64::try_from(value) {
            Ok(v) => Self::UInt(v),
            Err(_) => Self::Str(value.to_string()),
        }
    }
}

impl From<isize> for ArgValue {
    #[inline]
    fn from(value: isize) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Str(value.to_string()),
        }
    }
}

/// A typed read of an [`ArgValue`] did not match the stored variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgTypeError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl fmt::Display for ArgTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} argument, found {}", self.expected, self.found)
    }
}

impl core::error::Error for ArgTypeError {}

/// Typed extraction of an argument, the inverse of `From<T> for ArgValue`.
pub trait FromArg: Sized {
    /// Converts the value, or reports which variant was found instead.
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError>;
}

#[inline]
fn mismatch(expected: &'static str, value: &ArgValue) -> ArgTypeError {
    ArgTypeError { expected, found: value.type_name() }
}

impl FromArg for ArgValue {
    #[inline]
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
        Ok(value)
    }
}

impl FromArg for () {
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
        match value {
            ArgValue::Unit => Ok(()),
            other => Err(mismatch("unit", &other)),
        }
    }
}

impl FromArg for bool {
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
        match value {
            ArgValue::Bool(b) => Ok(b),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl FromArg for String {
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
        match value {
            ArgValue::Str(s) => Ok(s),
            other => Err(mismatch("str", &other)),
        }
    }
}

impl FromArg for f64 {
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
        match value {
            ArgValue::Float(x) => Ok(x),
            ArgValue::Int(i) => Ok(i as f64),
            ArgValue::UInt(u) => Ok(u as f64),
            other => Err(mismatch("float", &other)),
        }
    }
}

impl FromArg for f32 {
    /// Narrows through `f64`, so precision beyond `f32` is rounded away.
    #[inline]
    fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
        f64::from_arg(value).map(|x| x as f32).map_err(|err| ArgTypeError { expected: "f32", ..err })
    }
}

macro_rules! int_from_arg {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(value: ArgValue) -> Result<Self, ArgTypeError> {
                    let converted = match &value {
                        ArgValue::Int(i) => <$ty>::try_from(*i).ok(),
                        ArgValue::UInt(u) => <$ty>::try_from(*u).ok(),
                        _ => None,
                    };
                    converted.ok_or_else(|| mismatch($name, &value))
                }
            }
        )*
    };
}

int_from_arg! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    isize => "isize",
    usize => "usize",
}
