#![allow(dead_code)]

use enumbase::prelude::*;
use enumbase::EnumDefinition;
use std::sync::LazyLock;

/// Boolean-style enum used across the integration tests.
#[enumeration]
pub enum Boolean {
    #[default]
    TRUE = "1",
    FALSE = "0",
}

/// Two names share the value `"1"`; value lookups must resolve to `ON`.
#[enumeration(name = "Switch")]
pub enum Aliased {
    ON = "1",
    YES = "1",
    #[default]
    OFF = "0",
}

static LEVEL: LazyLock<EnumDefinition> = LazyLock::new(|| {
    EnumDefinition::new("Level", [("LOW", 1_i64), ("MEDIUM", 5), ("HIGH", 9)], "MEDIUM")
        .expect("level definition is valid")
});

/// Hand-written implementor backed by a runtime-built definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(usize);

impl Enumeration for Level {
    fn definition() -> &'static EnumDefinition {
        &LEVEL
    }

    fn ordinal(&self) -> usize {
        self.0
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        (ordinal < LEVEL.len()).then_some(Self(ordinal))
    }
}
