//! # enumbase
//!
//! Enum types declared as a closed set of named constant values, with reflection-style
//! helpers on top: list the constants, construct an instance from a name or from a
//! value, compare instances against raw literals, fetch the default.
//!
//! * Declare a type with [`enumeration`]; it becomes a native Rust enum whose variants
//!   are the constants, so `Boolean::TRUE` is the instance for `TRUE`.
//! * Every helper lives on the [`Enumeration`] trait; import it through the [`prelude`].
//! * Names are matched ignoring ASCII case; values are matched on their string form.
//! * Lookups fail with [`EnumError::UndefinedConstant`] (unknown name) or
//!   [`EnumError::InvalidValue`] (unknown value).
//! * Optional `serde` support serializes an instance as its value.
//!
//! ## Example
//!
//! ```rust
//! use enumbase::prelude::*;
//!
//! #[enumeration]
//! pub enum Boolean {
//!     #[default]
//!     TRUE = "1",
//!     FALSE = "0",
//! }
//!
//! # fn main() -> Result<(), EnumError> {
//! assert_eq!(Boolean::from_value("0")?, Boolean::FALSE);
//! assert_eq!(Boolean::from_name("true")?, Boolean::TRUE);
//! assert!(Boolean::TRUE.is("1"));
//! assert!(!Boolean::matches("1", "2", true));
//! assert_eq!(Boolean::default_value(), "1");
//! assert!(Boolean::from_value("2").is_err());
//! # Ok(())
//! # }
//! ```

extern crate self as enumbase;

mod base;
mod definition;
mod error;
mod iter;
#[cfg(feature = "serde")]
pub mod serde_impl;
mod value;

pub use crate::base::Enumeration;
pub use crate::definition::{Constant, DEFAULT_KEY, EnumDefinition};
pub use crate::error::{EnumError, Result};
pub use crate::iter::Variants;
pub use crate::value::Value;
pub use enumbase_derive::enumeration;

pub mod prelude {
    pub use crate::{EnumError, Enumeration, Value, enumeration};
}

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use ::serde;
}

/// Emits `Serialize`/`Deserialize` for an `#[enumeration]` type when this crate is built
/// with the `serde` feature.
#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($ty:ident) => {
        #[automatically_derived]
        impl $crate::__private::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::serde_impl::serialize(self, serializer)
            }
        }

        #[automatically_derived]
        impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::serde_impl::deserialize(deserializer)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($ty:ident) => {};
}
