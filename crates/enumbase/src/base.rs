use crate::definition::{Constant, DEFAULT_KEY, EnumDefinition};
use crate::error::{EnumError, Result};
use crate::iter::Variants;
use crate::value::Value;
use std::fmt::Display;
use tracing::trace;

/// Reflective behavior shared by every enum type.
///
/// An implementor only supplies its [`EnumDefinition`] and the mapping between
/// instances and declaration ordinals; everything else is provided. Use
/// `#[enumeration]` to generate all of it from a plain enum declaration.
///
/// All comparisons (value lookup, [`is`](Self::is), [`matches`](Self::matches)) work
/// on the *string form* of values, so an instance can be compared against a raw
/// literal.
///
/// # Implementing by hand
///
/// `ordinal` must return an index below `definition().len()`, and `from_ordinal`
/// must return `Some` for every such index.
pub trait Enumeration: Copy + Sized + 'static {
    /// Returns the constant table of this type.
    fn definition() -> &'static EnumDefinition;

    /// Returns the declaration index of this instance's constant.
    fn ordinal(&self) -> usize;

    /// Returns the instance for a declaration index.
    fn from_ordinal(ordinal: usize) -> Option<Self>;

    /// Returns the name of this enum type.
    #[must_use]
    fn type_name() -> &'static str {
        Self::definition().name()
    }

    /// Creates an instance from a constant name, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns [`EnumError::UndefinedConstant`] if no constant is named `name`.
    fn from_name(name: &str) -> Result<Self> {
        let definition = Self::definition();
        definition.position(name).and_then(Self::from_ordinal).ok_or_else(|| {
            trace!(enum_name = definition.name(), name, "Undefined constant");
            EnumError::UndefinedConstant { enum_name: definition.name(), name: name.to_owned() }
        })
    }

    /// Creates an instance from a value.
    ///
    /// The first constant in declaration order whose value has the same string form
    /// as `value` wins.
    ///
    /// # Errors
    /// Returns [`EnumError::InvalidValue`] if no constant holds `value`.
    fn from_value(value: impl Display) -> Result<Self> {
        let name = Self::constant_name_from_value(value)?;
        Self::from_name(name)
    }

    /// Returns the name of the first constant whose value has the string form of `value`.
    ///
    /// # Errors
    /// Returns [`EnumError::InvalidValue`] if no constant holds `value`.
    fn constant_name_from_value(value: impl Display) -> Result<&'static str> {
        let definition = Self::definition();
        let value = value.to_string();
        match definition.position_of_value(&value) {
            Some(index) => Ok(definition.constants()[index].name()),
            None => {
                trace!(enum_name = definition.name(), value = %value, "Invalid value");
                Err(EnumError::InvalidValue { enum_name: definition.name(), value })
            },
        }
    }

    /// Lists the declared constants in declaration order.
    ///
    /// With `include_default`, a [`DEFAULT_KEY`] entry holding the default value is
    /// appended after the declared constants.
    #[must_use]
    fn constants(include_default: bool) -> Vec<(&'static str, Value)> {
        let definition = Self::definition();
        let mut list: Vec<_> =
            definition.constants().iter().map(|c| (c.name(), c.value())).collect();
        if include_default {
            list.push((DEFAULT_KEY, definition.default_constant().value()));
        }
        list
    }

    /// Returns `true` if a constant is named `name`, ignoring ASCII case.
    #[must_use]
    fn has_constant(name: &str) -> bool {
        Self::definition().position(name).is_some()
    }

    /// Returns the value of the default constant.
    #[must_use]
    fn default_value() -> Value {
        Self::definition().default_constant().value()
    }

    /// Returns the name of the default constant.
    #[must_use]
    fn default_name() -> &'static str {
        Self::definition().default_constant().name()
    }

    /// Returns an iterator over every constant's instance.
    #[must_use]
    fn all() -> Variants<Self> {
        Variants::new()
    }

    /// Compares the string forms of `value` and `expect`.
    ///
    /// With `strict`, `expect` must also be a declared value of this type, otherwise
    /// the result is `false` without comparing.
    #[must_use]
    fn matches(value: impl Display, expect: impl Display, strict: bool) -> bool {
        let expect = expect.to_string();
        if strict && Self::definition().position_of_value(&expect).is_none() {
            return false;
        }
        value.to_string() == expect
    }

    /// Returns the declared constant this instance stands for.
    #[must_use]
    fn constant(&self) -> &'static Constant {
        &Self::definition().constants()[self.ordinal()]
    }

    #[must_use]
    fn name(&self) -> &'static str {
        self.constant().name()
    }

    #[must_use]
    fn value(&self) -> Value {
        self.constant().value()
    }

    /// Returns `true` if `compare` has the same string form as this instance's value.
    #[must_use]
    fn is(&self, compare: impl Display) -> bool {
        self.value().is_form(&compare.to_string())
    }
}
