//! # Enum Errors
//!
//! This module defines the [`EnumError`] enum and [`Result`] type used for reporting
//! failed name/value lookups and invalid runtime-built definitions.

use std::borrow::Cow;

/// A specialized [`EnumError`] enum for enum lookup and definition failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// A name-based lookup did not match any declared constant.
    #[error("Undefined constant `{name}` in enum `{enum_name}`")]
    UndefinedConstant { enum_name: &'static str, name: String },

    /// A value-based lookup did not match any declared constant value.
    #[error("Value '{value}' does not exist in enum `{enum_name}`")]
    InvalidValue { enum_name: &'static str, value: String },

    /// A definition built at runtime breaks a definition invariant
    /// (empty, duplicate or reserved name, unresolved default).
    #[error("Invalid definition of enum `{enum_name}`: {message}")]
    InvalidDefinition { enum_name: &'static str, message: Cow<'static, str> },
}

impl EnumError {
    /// Returns the name of the enum type the error was raised for.
    #[must_use]
    pub const fn enum_name(&self) -> &'static str {
        match self {
            Self::UndefinedConstant { enum_name, .. }
            | Self::InvalidValue { enum_name, .. }
            | Self::InvalidDefinition { enum_name, .. } => *enum_name,
        }
    }
}

/// Result alias for enum operations.
pub type Result<T> = std::result::Result<T, EnumError>;
