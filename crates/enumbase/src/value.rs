use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A primitive constant value.
///
/// Values compare and hash by their *string form* (their [`Display`](fmt::Display)
/// output), so `Value::Str("1") == Value::Int(1)`. This is the comparison every
/// lookup in this crate uses.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl Value {
    /// Returns the string form of the value.
    #[must_use]
    pub fn string_form(&self) -> Cow<'static, str> {
        match *self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Returns `true` if the string form of the value equals `form`.
    #[must_use]
    pub fn is_form(&self, form: &str) -> bool {
        match *self {
            Self::Str(s) => s == form,
            _ => self.string_form() == form,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> Option<&'static str> {
        match *self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Str(s) => f.pad(s),
            Self::Int(i) => fmt::Display::fmt(&i, f),
            Self::Bool(b) => fmt::Display::fmt(&b, f),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => self.string_form() == other.string_form(),
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string_form().hash(state);
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.is_form(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.is_form(other)
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
