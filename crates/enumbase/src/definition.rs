use crate::error::{EnumError, Result};
use crate::value::Value;
use fxhash::FxHashSet;
use std::borrow::Cow;

/// Name of the sentinel entry appended by
/// [`Enumeration::constants`](crate::Enumeration::constants) when the default is requested.
pub const DEFAULT_KEY: &str = "__default";

/// A declared `(name, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    name: &'static str,
    value: Value,
}

impl Constant {
    #[must_use]
    pub const fn new(name: &'static str, value: Value) -> Self {
        Self { name, value }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }
}

/// The constant table of one enum type.
///
/// Constants keep their declaration order, names are unique (case-insensitively)
/// and exactly one constant is the default. A definition never changes after it
/// is built; concrete types hand out a `&'static` reference to it.
#[derive(Debug, Clone)]
pub struct EnumDefinition {
    name: &'static str,
    constants: Cow<'static, [Constant]>,
    default: usize,
}

impl EnumDefinition {
    /// Builds a definition from a static constant table.
    ///
    /// This is what `#[enumeration]` expands to; the macro has already rejected
    /// duplicate and reserved names at compile time.
    ///
    /// # Panics
    /// If `default` is out of bounds. Inside a `static` initializer this is a
    /// compile-time error.
    #[must_use]
    pub const fn from_static(
        name: &'static str,
        constants: &'static [Constant],
        default: usize,
    ) -> Self {
        assert!(default < constants.len(), "default constant index out of bounds");
        Self { name, constants: Cow::Borrowed(constants), default }
    }

    /// Builds and validates a definition at runtime.
    ///
    /// Intended for hand-written [`Enumeration`](crate::Enumeration) impls, stored in a
    /// `LazyLock` so that it is initialized before first use.
    ///
    /// # Errors
    /// Returns [`EnumError::InvalidDefinition`] if `constants` is empty, contains an
    /// empty, reserved or duplicate (case-insensitive) name, or if `default` does not
    /// name one of the constants.
    ///
    /// # Example
    /// ```rust
    /// use enumbase::EnumDefinition;
    ///
    /// let definition =
    ///     EnumDefinition::new("Level", [("LOW", 1_i64), ("HIGH", 9)], "low").unwrap();
    /// assert_eq!(definition.default_constant().name(), "LOW");
    /// ```
    pub fn new<I, V>(name: &'static str, constants: I, default: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<Value>,
    {
        let invalid = |message: Cow<'static, str>| EnumError::InvalidDefinition {
            enum_name: name,
            message,
        };

        let constants: Vec<Constant> = constants
            .into_iter()
            .map(|(constant, value)| Constant::new(constant, value.into()))
            .collect();
        if constants.is_empty() {
            return Err(invalid("at least one constant is required".into()));
        }

        let mut seen = FxHashSet::default();
        for constant in &constants {
            if constant.name.trim().is_empty() {
                return Err(invalid("constant names cannot be empty".into()));
            }
            if constant.name.eq_ignore_ascii_case(DEFAULT_KEY) {
                return Err(invalid(format!("`{DEFAULT_KEY}` is reserved").into()));
            }
            if !seen.insert(constant.name.to_ascii_uppercase()) {
                return Err(invalid(format!("duplicate constant `{}`", constant.name).into()));
            }
        }

        let Some(default) = constants.iter().position(|c| c.name.eq_ignore_ascii_case(default))
        else {
            return Err(invalid(format!("default `{default}` is not a declared constant").into()));
        };

        Ok(Self { name, constants: Cow::Owned(constants), default })
    }

    /// Returns the enum type name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Returns the constants in declaration order.
    #[must_use]
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Constant> {
        self.constants.get(index)
    }

    /// Finds a constant by name, ignoring ASCII case.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.constants.iter().position(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Finds the first constant (in declaration order) whose value has the string form `value`.
    #[must_use]
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.constants.iter().position(|c| c.value.is_form(value))
    }

    #[must_use]
    pub const fn default_index(&self) -> usize {
        self.default
    }

    #[must_use]
    pub fn default_constant(&self) -> &Constant {
        &self.constants[self.default]
    }
}
