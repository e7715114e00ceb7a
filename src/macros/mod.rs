//! Declarative macros for defining error kinds and composing fallible steps.
//!
//! - [`macro@crate::declare_error`] - Declares an error kind: a struct with typed
//!   arguments, a description template and the [`ThrowKind`](crate::ThrowKind) it
//!   maps to when thrown.
//! - [`macro@crate::error_union`] - Declares an enum over several kinds, itself an
//!   [`Error`](crate::Error), so one function can fail in more than one declared way.
//! - [`macro@crate::map_chain`] - Variadic form of [`map_chain`](crate::compose::map_chain).
//! - [`macro@crate::chain_calls`] - Variadic form of
//!   [`chain_calls`](crate::compose::chain_calls) that needs no boxing.
//!
//! # Examples
//!
//! ```
//! use exhaust_rail::{declare_error, error_union, Error, Outcome, ThrowKind};
//!
//! declare_error! {
//!     pub struct LandedOnEdge {
//!         description: "The coin landed on its edge",
//!         throws: ThrowKind::Runtime,
//!     }
//! }
//!
//! declare_error! {
//!     pub struct DownTheGutter {
//!         description: "The coin rolled into gutter {gutter}",
//!         throws: ThrowKind::Runtime,
//!         args: { gutter: u32 },
//!     }
//! }
//!
//! error_union! {
//!     pub enum TossError {
//!         Edge(LandedOnEdge),
//!         Gutter(DownTheGutter),
//!     }
//! }
//!
//! let toss: Outcome<bool, TossError> = Outcome::Err(DownTheGutter::new(3).into());
//! match toss {
//!     Outcome::Ok(_) => unreachable!(),
//!     Outcome::Err(TossError::Edge(_)) => unreachable!(),
//!     Outcome::Err(TossError::Gutter(err)) => {
//!         assert_eq!(err.description(), "The coin rolled into gutter 3")
//!     }
//! }
//! ```

/// Emits a `tracing` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use rail_event;

/// Declares an error kind.
///
/// The generated struct has one public field per declared argument, a `new`
/// constructor taking the arguments in declaration order, `with_description` to
/// replace the template for one instance, and implementations of
/// [`Error`](crate::Error), [`ErrorKind`](crate::ErrorKind), `Display` and
/// `core::error::Error`. A kind without `args` also implements
/// [`UnitKind`](crate::UnitKind) and `Default`.
///
/// Argument types must implement `Clone`, `PartialEq`, `Debug`,
/// `Into<ArgValue>` and [`FromArg`](crate::FromArg). The name `meta` is reserved.
///
/// # Examples
///
/// ```
/// use exhaust_rail::{declare_error, Error, ErrorKind, ThrowKind};
///
/// declare_error! {
///     /// A configuration value was out of its accepted range.
///     pub struct OutOfBounds {
///         description: "{field} must be at most {max}, got {value}",
///         throws: ThrowKind::OutOfRange,
///         args: { field: String, max: i64, value: i64 },
///     }
/// }
///
/// let err = OutOfBounds::new("workers".into(), 64, 100);
/// assert_eq!(err.to_string(), "workers must be at most 64, got 100");
/// assert_eq!(OutOfBounds::SCHEMA.fields, ["field", "max", "value"]);
/// assert!(OutOfBounds::SCHEMA.verify().is_ok());
/// ```
#[macro_export]
macro_rules! declare_error {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            description: $template:expr,
            throws: $throws:expr,
            args: { $($(#[$fattr:meta])* $field:ident : $ty:ty),+ $(,)? } $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($(#[$fattr])* pub $field: $ty,)+
            meta: $crate::ErrorMeta,
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $ty),+) -> Self {
                ::core::debug_assert!(
                    $crate::ErrorSchema::verify(&<Self as $crate::ErrorKind>::SCHEMA).is_ok(),
                    "{} declares arguments its description does not match",
                    ::core::stringify!($name),
                );
                Self { $($field,)+ meta: $crate::ErrorMeta::new() }
            }
        }

        impl $crate::ErrorKind for $name {
            const SCHEMA: $crate::ErrorSchema = $crate::ErrorSchema::new(
                ::core::stringify!($name),
                $template,
                $throws,
                &[$(::core::stringify!($field)),+],
            );

            fn from_arguments(
                args: $crate::ArgList,
            ) -> ::core::result::Result<Self, $crate::InvalidArgument> {
                let schema = &<Self as $crate::ErrorKind>::SCHEMA;
                schema.check_schema()?;
                schema.check_arguments(args.iter().map(|(name, _)| name.as_str()))?;
                let mut args = args;
                ::core::result::Result::Ok(Self {
                    $($field: $crate::traits::error_kind::take_argument::<$ty>(
                        schema,
                        &mut args,
                        ::core::stringify!($field),
                    )?,)+
                    meta: $crate::ErrorMeta::new(),
                })
            }
        }

        impl $crate::Error for $name {
            #[inline]
            fn schema(&self) -> &'static $crate::ErrorSchema {
                &<Self as $crate::ErrorKind>::SCHEMA
            }

            fn argument(&self, name: &str) -> ::core::option::Option<$crate::ArgValue> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some($crate::ArgValue::from(
                            ::core::clone::Clone::clone(&self.$field),
                        ));
                    }
                )+
                ::core::option::Option::None
            }

            #[inline]
            fn meta(&self) -> &$crate::ErrorMeta {
                &self.meta
            }

            #[inline]
            fn meta_mut(&mut self) -> &mut $crate::ErrorMeta {
                &mut self.meta
            }
        }

        $crate::declare_error!(@shared $name);
    };

    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            description: $template:expr,
            throws: $throws:expr $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $name {
            meta: $crate::ErrorMeta,
        }

        impl $name {
            #[inline]
            pub fn new() -> Self {
                ::core::debug_assert!(
                    $crate::ErrorSchema::verify(&<Self as $crate::ErrorKind>::SCHEMA).is_ok(),
                    "{} takes no arguments but its description has placeholders",
                    ::core::stringify!($name),
                );
                Self { meta: $crate::ErrorMeta::new() }
            }
        }

        impl $crate::ErrorKind for $name {
            const SCHEMA: $crate::ErrorSchema =
                $crate::ErrorSchema::unit(::core::stringify!($name), $template, $throws);

            fn from_arguments(
                args: $crate::ArgList,
            ) -> ::core::result::Result<Self, $crate::InvalidArgument> {
                let schema = &<Self as $crate::ErrorKind>::SCHEMA;
                schema.check_schema()?;
                schema.check_arguments(args.iter().map(|(name, _)| name.as_str()))?;
                ::core::result::Result::Ok(Self::new())
            }
        }

        impl $crate::UnitKind for $name {
            #[inline]
            fn instance() -> Self {
                Self::new()
            }
        }

        impl $crate::Error for $name {
            #[inline]
            fn schema(&self) -> &'static $crate::ErrorSchema {
                &<Self as $crate::ErrorKind>::SCHEMA
            }

            #[inline]
            fn argument(&self, _name: &str) -> ::core::option::Option<$crate::ArgValue> {
                ::core::option::Option::None
            }

            #[inline]
            fn meta(&self) -> &$crate::ErrorMeta {
                &self.meta
            }

            #[inline]
            fn meta_mut(&mut self) -> &mut $crate::ErrorMeta {
                &mut self.meta
            }
        }

        $crate::declare_error!(@shared $name);
    };

    (@shared $name:ident) => {
        impl $name {
            /// Replaces the template-rendered description for this instance.
            #[must_use]
            pub fn with_description(
                mut self,
                description: impl ::core::convert::Into<$crate::types::alloc_type::String>,
            ) -> Self {
                self.meta.set_description(description);
                self
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::Error::description(self))
            }
        }

        impl ::core::error::Error for $name {}
    };
}

/// Declares an enum whose variants each wrap one error kind.
///
/// The enum implements [`Error`](crate::Error) by delegating to the wrapped kind,
/// and `From<Kind>` for each variant so `?`-style conversions and
/// [`MapChain::then`](crate::compose::MapChain::then) can widen into it.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::{Overflow, ZeroDivision};
/// use exhaust_rail::{error_union, Error, ThrowKind};
///
/// error_union! {
///     pub enum MathError {
///         Zero(ZeroDivision),
///         Overflow(Overflow),
///     }
/// }
///
/// let err = MathError::from(ZeroDivision::new());
/// assert_eq!(err.kind_name(), "ZeroDivision");
/// assert_eq!(err.throw_kind(), ThrowKind::DivisionByZero);
/// ```
#[macro_export]
macro_rules! error_union {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vattr:meta])* $variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $($(#[$vattr])* $variant($ty),)+
        }

        impl $crate::Error for $name {
            fn schema(&self) -> &'static $crate::ErrorSchema {
                match self {
                    $(Self::$variant(inner) => $crate::Error::schema(inner),)+
                }
            }

            fn argument(&self, name: &str) -> ::core::option::Option<$crate::ArgValue> {
                match self {
                    $(Self::$variant(inner) => $crate::Error::argument(inner, name),)+
                }
            }

            fn meta(&self) -> &$crate::ErrorMeta {
                match self {
                    $(Self::$variant(inner) => $crate::Error::meta(inner),)+
                }
            }

            fn meta_mut(&mut self) -> &mut $crate::ErrorMeta {
                match self {
                    $(Self::$variant(inner) => $crate::Error::meta_mut(inner),)+
                }
            }
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                #[inline]
                fn from(error: $ty) -> Self {
                    Self::$variant(error)
                }
            }
        )+

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::Error::description(self))
            }
        }

        impl ::core::error::Error for $name {}
    };
}

/// Applies a sequence of fallible stages to every item of a source.
///
/// `map_chain!(source, f1, f2, f3)` is `map_chain(source, f1).then(f2).then(f3)`.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::{map_chain, Outcome};
///
/// fn invert(x: f64) -> Outcome<f64, ZeroDivision> {
///     if x == 0.0 { Outcome::err_kind() } else { Outcome::Ok(1.0 / x) }
/// }
///
/// let out: Vec<_> = map_chain!([0.0, 2.0, 4.0], invert, invert).collect();
/// assert!(out[0].is_err());
/// assert_eq!(out[1..], [Outcome::Ok(2.0), Outcome::Ok(4.0)]);
/// ```
#[macro_export]
macro_rules! map_chain {
    ($source:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        $crate::compose::map_chain($source, $first)$(.then($rest))*
    };
}

/// Calls thunks in order, stopping at the first `Err`.
///
/// - `chain_calls!(a, b, c)` yields `Outcome<(), E>`.
/// - `chain_calls!(a, b, c; init, reducer)` folds every `Ok` payload into the
///   accumulator and yields `Outcome<T, E>`.
///
/// Thunks may have different closure types; no boxing is involved.
///
/// # Examples
///
/// ```
/// use exhaust_rail::builtin::ZeroDivision;
/// use exhaust_rail::{chain_calls, Outcome};
///
/// let mut called = false;
/// let total = chain_calls!(
///     || Outcome::<i32, ZeroDivision>::Ok(2),
///     || Outcome::err_kind(),
///     || { called = true; Outcome::Ok(5) };
///     0,
///     |acc, v| acc + v
/// );
/// assert!(total.is_err());
/// assert!(!called);
/// ```
#[macro_export]
macro_rules! chain_calls {
    ($($thunk:expr),+ ; $init:expr, $reducer:expr $(,)?) => {
        (|| {
            #[allow(unused_mut)]
            let mut reducer = $reducer;
            let acc = $init;
            $(
                let acc = match ($thunk)() {
                    $crate::Outcome::Ok(value) => reducer(acc, value),
                    $crate::Outcome::Err(error) => return $crate::Outcome::Err(error),
                };
            )+
            $crate::Outcome::Ok(acc)
        })()
    };
    ($($thunk:expr),+ $(,)?) => {
        (|| {
            $(
                if let $crate::Outcome::Err(error) = ($thunk)() {
                    return $crate::Outcome::Err(error);
                }
            )+
            $crate::Outcome::Ok(())
        })()
    };
}
