//! Serde support for enum types.
//!
//! An instance serializes as its value and deserializes through
//! [`Enumeration::from_value`], so undeclared values are rejected. `#[enumeration]`
//! wires this up automatically; hand-written types can use the module with
//! `#[serde(with = "enumbase::serde_impl")]`.

use crate::{Enumeration, Value};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(i),
            Self::Bool(b) => serializer.serialize_bool(b),
        }
    }
}

/// Serializes an instance as its value.
///
/// # Errors
/// Propagates serializer failures.
pub fn serialize<E, S>(instance: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: Enumeration,
    S: Serializer,
{
    instance.value().serialize(serializer)
}

/// Deserializes an instance from a string, integer or boolean value.
///
/// # Errors
/// Fails if the input is not one of the declared values.
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: Enumeration,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ValueVisitor(PhantomData))
}

struct ValueVisitor<E>(PhantomData<E>);

impl<E: Enumeration> ValueVisitor<E> {
    fn lookup<Err: de::Error>(value: impl fmt::Display) -> Result<E, Err> {
        E::from_value(value).map_err(Err::custom)
    }
}

impl<E: Enumeration> Visitor<'_> for ValueVisitor<E> {
    type Value = E;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a declared value of enum `{}`", E::type_name())
    }

    fn visit_str<Err: de::Error>(self, v: &str) -> Result<E, Err> {
        Self::lookup(v)
    }

    fn visit_i64<Err: de::Error>(self, v: i64) -> Result<E, Err> {
        Self::lookup(v)
    }

    fn visit_u64<Err: de::Error>(self, v: u64) -> Result<E, Err> {
        Self::lookup(v)
    }

    fn visit_bool<Err: de::Error>(self, v: bool) -> Result<E, Err> {
        Self::lookup(v)
    }
}
