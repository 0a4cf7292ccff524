pub mod fixtures;

use enumbase::prelude::*;
use fixtures::{Boolean, Level};
use proptest::prelude::*;

proptest! {
    #[test]
    fn loose_match_is_string_equality(a in "[0-9a-z]{0,4}", b in "[0-9a-z]{0,4}") {
        prop_assert_eq!(Boolean::matches(&a, &b, false), a == b);
    }

    #[test]
    fn strict_match_fails_for_undeclared_expectations(a in "[0-9a-z]{0,4}", b in "[2-9a-z][0-9a-z]{0,3}") {
        prop_assert!(!Boolean::matches(&a, &b, true));
    }

    #[test]
    fn strict_match_equals_loose_match_for_declared_expectations(a in "[0-9]{0,2}", declared in prop_oneof![Just("0"), Just("1")]) {
        prop_assert_eq!(Boolean::matches(&a, declared, true), Boolean::matches(&a, declared, false));
    }

    #[test]
    fn is_agrees_with_string_form(candidate in "[0-9]{0,3}") {
        for instance in Boolean::all() {
            prop_assert_eq!(instance.is(&candidate), instance.to_string() == candidate);
        }
    }

    #[test]
    fn has_constant_ignores_case(name in "(?i)(true|false|maybe|nope)") {
        let declared = name.eq_ignore_ascii_case("true") || name.eq_ignore_ascii_case("false");
        prop_assert_eq!(Boolean::has_constant(&name), declared);
        prop_assert_eq!(Boolean::from_name(&name).is_ok(), declared);
    }

    #[test]
    fn undeclared_integers_are_invalid_values(value in any::<i64>()) {
        prop_assume!(![1, 5, 9].contains(&value));
        let is_invalid = matches!(Level::from_value(value), Err(EnumError::InvalidValue { .. }));
        prop_assert!(is_invalid);
    }
}

#[test]
fn every_constant_round_trips_through_name_and_value() {
    for (name, value) in Boolean::constants(false) {
        assert_round_trip::<Boolean>(name, value);
    }
    for (name, value) in Level::constants(false) {
        assert_round_trip::<Level>(name, value);
    }
}

fn assert_round_trip<E: Enumeration>(name: &str, value: Value) {
    let by_name = E::from_name(name).expect("declared name");
    let by_value = E::from_value(value).expect("declared value");

    assert_eq!(by_name.value(), value);
    assert_eq!(by_value.value(), value);
    assert_eq!(by_value.value().to_string(), value.to_string());
    assert_eq!(E::from_name(&name.to_ascii_lowercase()).expect("case-insensitive").name(), name);
}
