#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for `enumbase`.
//! This crate provides the attribute macro that turns a plain enum declaration with
//! literal values into a fully wired `enumbase::Enumeration` type.
//!
//! ## Usage
//! Depend on `enumbase` and use the re-export rather than this crate directly:
//! ```toml
//! [dependencies]
//! enumbase = { path = "../crates/enumbase" }
//! ```
//!
//! The examples below are `ignore`d to avoid compiling in this crate; the same
//! declarations are exercised by the `trybuild` cases under `tests/ui`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro to declare an enum type from named constant values.
///
/// Each variant is a constant; its "discriminant" is the constant's value.
/// Exactly one variant must be marked `#[default]`.
///
/// # Arguments
///
/// * `name = "..."` - Overrides the type name reported in lookup errors
///   (defaults to the enum identifier).
///
/// # Accepted values
///
/// * string literals (`"1"`),
/// * integer literals, optionally negated (`42`, `-1`),
/// * boolean literals (`true`).
///
/// # Generated Items
///
/// * The enum itself, with values and `#[default]` stripped, `Debug`, `Clone` and
///   `Copy` derived when missing.
/// * A static `EnumDefinition` and an `Enumeration` impl backed by it.
/// * `PartialEq`, `Eq` and `Hash` on the string form of the value, `Default`
///   returning the `#[default]` constant, `Display` printing the value, and
///   `FromStr` resolving a constant name case-insensitively.
/// * `Serialize`/`Deserialize` through the value when `enumbase` is built with its `serde` feature.
///
/// # Errors
///
/// Emits a compile-time error for generic or empty enums, variants with fields or
/// without a value, unsupported values, duplicate (case-insensitive) or reserved
/// names, a missing or repeated `#[default]`, and for user derives of `PartialEq`,
/// `Eq`, `Hash` or `Default`.
///
/// # Example
///
/// ```rust,ignore
/// use enumbase::prelude::*;
///
/// #[enumeration]
/// pub enum Boolean {
///     #[default]
///     TRUE = "1",
///     FALSE = "0",
/// }
///
/// assert_eq!(Boolean::from_value("0")?, Boolean::FALSE);
/// assert!(Boolean::TRUE.is("1"));
/// ```
#[proc_macro_attribute]
pub fn enumeration(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::enumeration::expand(args.into(), input).into()
}
