//! Property-based tests: negation, multi-kind membership and default
//! message shape hold for every value and kind.

use assert_kindof::{Assert, Error, Message, Operator, Value, kind::BUILTIN_KINDS, value::TypedArray};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        ".*".prop_map(Value::from),
        ".*".prop_map(Value::symbol),
        ".*".prop_map(Value::error),
        ".*".prop_map(Value::regexp),
        any::<Vec<u8>>().prop_map(Value::buffer),
        any::<Vec<i8>>().prop_map(|items| Value::from(TypedArray::Int8(items))),
        Just(Value::function(|_| Value::Undefined)),
        Just(Value::generator_function(|_| Value::Undefined)),
        Just(Value::generator(Vec::new())),
        Just(Value::promise()),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Set),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::WeakSet),
            prop::collection::vec((inner.clone(), inner.clone()), 0..4).prop_map(Value::Map),
            prop::collection::hash_map(".*", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

fn arb_kind() -> impl Strategy<Value = &'static str> {
    prop::sample::select(BUILTIN_KINDS)
}

proptest! {
    #[test]
    fn affirmative_check_matches_classification(value in arb_value(), kind in arb_kind()) {
        let assert = Assert::new();
        let actual = assert.classify(&value);
        match assert.kind(&value, kind, true, Message::Default) {
            Ok(()) => prop_assert_eq!(actual, kind),
            Err(Error::Assertion(err)) => {
                prop_assert_ne!(&actual, kind);
                prop_assert_eq!(err.actual(), &*actual);
                prop_assert_eq!(err.expected(), kind);
                prop_assert_eq!(err.operator(), Operator::StrictNotEqual);
            }
            Err(err) => prop_assert!(false, "unexpected error: {err}"),
        }
    }

    #[test]
    fn negation_is_involutive(value in arb_value(), kind in arb_kind()) {
        let assert = Assert::new();
        let affirmative = assert.kind(&value, kind, true, Message::Default).is_ok();
        let negated = assert.kind(&value, kind, false, Message::Default);
        prop_assert_eq!(affirmative, negated.is_err());
        if let Err(err) = negated {
            prop_assert_eq!(err.as_assertion().map(|err| err.operator()), Some(Operator::StrictEqual));
        }
    }

    #[test]
    fn default_message_shape(value in arb_value(), kind in arb_kind(), control in any::<bool>()) {
        if let Err(Error::Assertion(err)) = Assert::new().kind(&value, kind, control, Message::Default) {
            let expected = format!("{} {} {}", err.actual(), err.operator(), err.expected());
            prop_assert_eq!(err.message(), expected.as_str());
        }
    }

    #[test]
    fn one_of_is_membership(value in arb_value(), kinds in prop::collection::vec(arb_kind(), 1..4)) {
        let assert = Assert::new();
        let actual = assert.classify(&value);
        match assert.one_of(&value, &kinds, Message::Default) {
            Ok(()) => prop_assert!(kinds.iter().any(|kind| actual == *kind)),
            Err(Error::Assertion(err)) => {
                prop_assert!(!kinds.iter().any(|kind| actual == *kind));
                prop_assert_eq!(err.expected(), kinds.join(" or "));
            }
            Err(err) => prop_assert!(false, "unexpected error: {err}"),
        }
    }

    #[test]
    fn predicates_agree_with_checks(value in arb_value(), kind in arb_kind()) {
        let assert = Assert::new();
        prop_assert_eq!(assert.is(&value, kind), assert.kind(&value, kind, true, Message::Default).is_ok());
    }
}
